use crate::{matches, strings};

/// Splits a request target into `(scheme, host, path)`.
///
/// `default_host` fills in when the target carries no authority. Splitting
/// never fails: anything that is not a well formed `scheme://host` prefix
/// degrades to the default scheme and host, with the whole target as path.
pub(crate) fn split_host_uri<'a>(
    default_host: &'a [u8],
    target: &'a [u8],
) -> (&'a [u8], &'a [u8], &'a [u8]) {
    let Some(at) = find(target, strings::SLASH_SLASH) else {
        return (strings::HTTP, default_host, target);
    };

    let mut scheme = &target[..at];
    if let [head @ .., b':'] = scheme {
        scheme = head;
    } else if !scheme.is_empty() {
        // a nonempty prefix without its colon is path data, not a scheme
        return (strings::HTTP, default_host, target);
    }
    if scheme.iter().any(|&byte| !matches::is_scheme(byte)) {
        return (strings::HTTP, default_host, target);
    }

    let rest = &target[at + 2..];
    match rest.iter().position(|&byte| byte == b'/') {
        Some(at) => (scheme, &rest[..at], &rest[at..]),
        None => match rest.iter().position(|&byte| byte == b'?') {
            // bogus form like `foobar.com?a=b`
            Some(at) => (scheme, &rest[..at], &rest[at..]),
            None => (scheme, rest, strings::SLASH),
        },
    }
}

pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
