use bytes::{BufMut, BytesMut};

use crate::matches;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-decodes `src`, appending to `dst`.
///
/// `decode_plus` selects query semantics, where `+` decodes to space. A `%`
/// not followed by two hex digits passes through literally.
pub(crate) fn decode_arg(dst: &mut BytesMut, src: &[u8], decode_plus: bool) {
    let mut at = 0;
    while at < src.len() {
        let byte = src[at];
        if byte == b'+' && decode_plus {
            dst.put_u8(b' ');
        } else if byte == b'%' {
            match &src[at + 1..] {
                [hi, lo, ..] if matches::is_hex(*hi) && matches::is_hex(*lo) => {
                    dst.put_u8(unhex(*hi) << 4 | unhex(*lo));
                    at += 2;
                }
                _ => dst.put_u8(b'%'),
            }
        } else {
            dst.put_u8(byte);
        }
        at += 1;
    }
}

/// Re-encodes a decoded path, appending to `dst`.
///
/// Escapes emit uppercase hex. `+` and space are escaped, never emitted raw.
pub(crate) fn append_quoted_path(dst: &mut BytesMut, src: &[u8]) {
    for &byte in src {
        if matches::is_path_unreserved(byte) {
            dst.put_u8(byte);
        } else {
            put_quoted(dst, byte);
        }
    }
}

/// Encodes a decoded query key or value, appending to `dst`.
///
/// Space encodes as `+`.
pub(crate) fn append_quoted_arg(dst: &mut BytesMut, src: &[u8]) {
    for &byte in src {
        if matches::is_arg_unreserved(byte) {
            dst.put_u8(byte);
        } else if byte == b' ' {
            dst.put_u8(b'+');
        } else {
            put_quoted(dst, byte);
        }
    }
}

#[inline]
fn put_quoted(dst: &mut BytesMut, byte: u8) {
    dst.put_u8(b'%');
    dst.put_u8(HEX_UPPER[(byte >> 4) as usize]);
    dst.put_u8(HEX_UPPER[(byte & 15) as usize]);
}

/// Caller checks [`matches::is_hex`] first.
const fn unhex(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}
