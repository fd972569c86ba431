macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            // SAFETY: the pattern size is equal to u8::MAX
            unsafe { *PAT.as_ptr().add($byte as usize) }
        }
    };
}

// ===== lookup tables =====

byte_map! {
    /// HEXDIG, either case
    #[inline(always)]
    pub(crate) const fn is_hex(byte: u8) {
        matches!(byte, b'a'..=b'f' | b'A'..=b'F' | b'0'..=b'9')
    }
}

byte_map! {
    /// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    #[inline(always)]
    pub(crate) const fn is_scheme(byte: u8) {
        matches!(byte,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' |
            b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// Bytes emitted raw when re-encoding the normalised path.
    ///
    /// `+` and space are not in the set; both get `%HH`-escaped on emission.
    #[inline(always)]
    pub(crate) const fn is_path_unreserved(byte: u8) {
        matches!(byte,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' |
            b'/' | b'.' | b',' | b'=' | b':' | b'&' | b'~' | b'-' | b'_')
    }
}

byte_map! {
    /// Bytes emitted raw in query keys and values; space becomes `+`.
    #[inline(always)]
    pub(crate) const fn is_arg_unreserved(byte: u8) {
        matches!(byte,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' |
            b'-' | b'_' | b'.' | b'~')
    }
}
