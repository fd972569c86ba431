use bytes::{BufMut, BytesMut};

use crate::strings;

use super::{parser, percent};

/// Writes the normalised form of the raw path `src` into `dst`.
///
/// The path is percent-decoded (`+` passes through untouched), runs of
/// slashes are collapsed, and `..` segments are resolved against their
/// parent without ever escaping the root. When `..` eliminates the final
/// segment, its slash survives: `/x/y/../` becomes `/x/`.
///
/// Single-dot segments are kept as-is. The result always begins with `/`.
pub(crate) fn normalize_path(dst: &mut BytesMut, src: &[u8]) {
    dst.clear();
    if !src.starts_with(strings::SLASH) {
        dst.put_u8(b'/');
    }
    percent::decode_arg(dst, src, false);

    collapse_slashes(dst);
    resolve_dot_dot(dst);

    if dst.is_empty() {
        dst.put_u8(b'/');
    }
}

fn collapse_slashes(dst: &mut BytesMut) {
    let bytes = &mut dst[..];
    let mut write = 0;
    for read in 0..bytes.len() {
        if bytes[read] == b'/' && write > 0 && bytes[write - 1] == b'/' {
            continue;
        }
        bytes[write] = bytes[read];
        write += 1;
    }
    dst.truncate(write);
}

fn resolve_dot_dot(dst: &mut BytesMut) {
    // interior `/../`: truncate back to the parent slash, keep the tail
    while let Some(at) = parser::find(&dst[..], strings::SLASH_DOT_DOT_SLASH) {
        let parent = dst[..at]
            .iter()
            .rposition(|&byte| byte == b'/')
            .unwrap_or(0);
        let tail = at + strings::SLASH_DOT_DOT.len();
        let len = dst.len();
        dst.copy_within(tail..len, parent);
        dst.truncate(len - (tail - parent));
    }

    // trailing `/..` eats the final segment, keeping its slash
    if dst.ends_with(strings::SLASH_DOT_DOT) {
        let at = dst.len() - strings::SLASH_DOT_DOT.len();
        match dst[..at].iter().rposition(|&byte| byte == b'/') {
            Some(parent) => dst.truncate(parent + 1),
            None => {
                dst.clear();
                dst.put_u8(b'/');
            }
        }
    }
}
