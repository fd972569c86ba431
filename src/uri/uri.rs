use bytes::{BufMut, BytesMut};
use std::mem;

use crate::log::trace;
use crate::strings;

use super::{args::Args, parser, path, percent};

/// Reusable HTTP request target.
///
/// A [`Uri`] owns every buffer it hands out views into, and is meant to be
/// parsed into repeatedly: [`parse`][Uri::parse] resets logical content but
/// keeps capacity, so a warm instance processes new targets without heap
/// allocation.
///
/// Accessors return slices aliasing the internal buffers; they are valid
/// until the next mutation. Callers that retain a component must copy it.
///
/// # Examples
///
/// ```
/// use yari::Uri;
///
/// let mut uri = Uri::new();
/// uri.parse("example.com", "/users//all/../active?page=420#top");
///
/// assert_eq!(uri.scheme(), b"http");
/// assert_eq!(uri.host(), b"example.com");
/// assert_eq!(uri.path(), b"/users/active");
/// assert_eq!(uri.path_original(), b"/users//all/../active");
/// assert_eq!(uri.query_string(), b"page=420");
/// assert_eq!(uri.hash(), b"top");
/// ```
#[derive(Default)]
pub struct Uri {
    scheme: BytesMut,
    host: BytesMut,
    path_original: BytesMut,
    path: BytesMut,
    query_string: BytesMut,
    hash: BytesMut,

    query_args: Args,
    parsed_query_args: bool,

    request_uri: BytesMut,
    full_uri: BytesMut,
}

impl Uri {
    /// Create new empty [`Uri`].
    ///
    /// This function does not allocate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `target` into this URI, reusing its buffers.
    ///
    /// `default_host` supplies the host when the target carries no
    /// `scheme://host` prefix; server side callers pass the `Host` header
    /// value here. Parsing is total: malformed pieces degrade to defaults
    /// per field instead of failing.
    pub fn parse<H, T>(&mut self, default_host: H, target: T)
    where
        H: AsRef<[u8]>,
        T: AsRef<[u8]>,
    {
        let (default_host, target) = (default_host.as_ref(), target.as_ref());
        trace!("parse {} byte target", target.len());

        self.reset();

        let (scheme, host, path) = parser::split_host_uri(default_host, target);
        self.scheme.extend_from_slice(scheme);
        self.scheme.make_ascii_lowercase();
        self.host.extend_from_slice(host);
        self.host.make_ascii_lowercase();

        self.parse_path(path);
    }

    fn parse_path(&mut self, bytes: &[u8]) {
        let fragment = bytes.iter().position(|&byte| byte == b'#');
        let mut query = bytes.iter().position(|&byte| byte == b'?');

        // the first `#` always wins over a later `?`
        if let (Some(f), Some(q)) = (fragment, query) {
            if q > f {
                query = None;
            }
        }

        let path_end = match (query, fragment) {
            (Some(q), _) => q,
            (None, Some(f)) => f,
            (None, None) => bytes.len(),
        };

        self.path_original.extend_from_slice(&bytes[..path_end]);
        path::normalize_path(&mut self.path, &self.path_original);

        match (query, fragment) {
            (Some(q), Some(f)) => {
                self.query_string.extend_from_slice(&bytes[q + 1..f]);
                self.hash.extend_from_slice(&bytes[f + 1..]);
            }
            (Some(q), None) => self.query_string.extend_from_slice(&bytes[q + 1..]),
            (None, Some(f)) => self.hash.extend_from_slice(&bytes[f + 1..]),
            (None, None) => {}
        }
    }

    /// Clears all components, retaining buffer capacity for reuse.
    pub fn reset(&mut self) {
        self.scheme.clear();
        self.host.clear();
        self.path_original.clear();
        self.path.clear();
        self.query_string.clear();
        self.hash.clear();
        self.query_args.reset();
        self.parsed_query_args = false;
    }

    /// Deep copies this URI into `dst`, reusing `dst`'s buffers.
    pub fn copy_to(&self, dst: &mut Uri) {
        dst.reset();
        dst.scheme.extend_from_slice(&self.scheme);
        dst.host.extend_from_slice(&self.host);
        dst.path_original.extend_from_slice(&self.path_original);
        dst.path.extend_from_slice(&self.path);
        dst.query_string.extend_from_slice(&self.query_string);
        dst.hash.extend_from_slice(&self.hash);
        self.query_args.copy_to(&mut dst.query_args);
        dst.parsed_query_args = self.parsed_query_args;
    }
}

// ===== Accessors =====

impl Uri {
    /// Returns the scheme, lowercase. Defaults to `http` when unset.
    #[inline]
    pub fn scheme(&self) -> &[u8] {
        if self.scheme.is_empty() {
            strings::HTTP
        } else {
            &self.scheme
        }
    }

    /// Returns `true` if the scheme is `https`.
    #[inline]
    pub fn is_https(&self) -> bool {
        self.scheme() == strings::HTTPS
    }

    /// Returns the host, lowercase, possibly carrying a `:port` suffix.
    #[inline]
    pub fn host(&self) -> &[u8] {
        &self.host
    }

    /// Returns the normalised, percent-decoded path.
    ///
    /// Always begins with `/` and contains no `..` segments and no empty
    /// segments.
    #[inline]
    pub fn path(&self) -> &[u8] {
        if self.path.is_empty() {
            strings::SLASH
        } else {
            &self.path
        }
    }

    /// Returns the path exactly as it appeared in the request target.
    #[inline]
    pub fn path_original(&self) -> &[u8] {
        &self.path_original
    }

    /// Returns the raw query string, without the leading `?`.
    ///
    /// Once [`query_args`][Uri::query_args] has been materialised and
    /// mutated, the multimap is authoritative and this slice is stale;
    /// [`full_uri`][Uri::full_uri] re-emits from the multimap in that case.
    #[inline]
    pub fn query_string(&self) -> &[u8] {
        &self.query_string
    }

    /// Returns the fragment, without the leading `#`, undecoded.
    #[inline]
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Returns the final segment of the normalised path.
    pub fn last_path_segment(&self) -> &[u8] {
        let path = self.path();
        match path.iter().rposition(|&byte| byte == b'/') {
            Some(at) => &path[at + 1..],
            None => path,
        }
    }

    /// Returns the query arguments, parsed from the query string on first
    /// access.
    ///
    /// Mutating the multimap does not rewrite
    /// [`query_string`][Uri::query_string]; serialisation re-emits from the
    /// multimap instead.
    pub fn query_args(&mut self) -> &mut Args {
        if !self.parsed_query_args {
            self.query_args.parse(&self.query_string);
            self.parsed_query_args = true;
        }
        &mut self.query_args
    }
}

// ===== Mutation =====

impl Uri {
    /// Sets the scheme, folding it to lowercase.
    pub fn set_scheme<A: AsRef<[u8]>>(&mut self, scheme: A) {
        self.scheme.clear();
        self.scheme.extend_from_slice(scheme.as_ref());
        self.scheme.make_ascii_lowercase();
    }

    /// Sets the host, folding it to lowercase.
    pub fn set_host<A: AsRef<[u8]>>(&mut self, host: A) {
        self.host.clear();
        self.host.extend_from_slice(host.as_ref());
        self.host.make_ascii_lowercase();
    }

    /// Sets the path, re-running normalisation on the given bytes.
    pub fn set_path<A: AsRef<[u8]>>(&mut self, path: A) {
        self.path_original.clear();
        self.path_original.extend_from_slice(path.as_ref());
        path::normalize_path(&mut self.path, &self.path_original);
    }

    /// Sets the fragment, stored verbatim.
    pub fn set_hash<A: AsRef<[u8]>>(&mut self, hash: A) {
        self.hash.clear();
        self.hash.extend_from_slice(hash.as_ref());
    }

    /// Sets the raw query string and detaches any materialised
    /// [`query_args`][Uri::query_args].
    pub fn set_query_string<A: AsRef<[u8]>>(&mut self, query: A) {
        self.query_string.clear();
        self.query_string.extend_from_slice(query.as_ref());
        self.parsed_query_args = false;
    }
}

// ===== Serialisation =====

impl Uri {
    /// Returns the request line form of the target: the re-encoded path
    /// followed by `?query` and `#hash` when present.
    ///
    /// The path is re-encoded from its normalised form, so mutations made
    /// through [`set_path`][Uri::set_path] or the args multimap are
    /// reflected.
    pub fn request_uri(&mut self) -> &[u8] {
        let mut dst = mem::take(&mut self.request_uri);
        dst.clear();
        self.append_request_uri(&mut dst);
        self.request_uri = dst;
        &self.request_uri
    }

    /// Returns the absolute form `scheme://host` followed by the request
    /// URI.
    pub fn full_uri(&mut self) -> &[u8] {
        let mut dst = mem::take(&mut self.full_uri);
        dst.clear();
        dst.extend_from_slice(self.scheme());
        dst.extend_from_slice(strings::COLON_SLASH_SLASH);
        dst.extend_from_slice(&self.host);
        self.append_request_uri(&mut dst);
        self.full_uri = dst;
        &self.full_uri
    }

    fn append_request_uri(&self, dst: &mut BytesMut) {
        percent::append_quoted_path(dst, self.path());
        if self.parsed_query_args && !self.query_args.is_empty() {
            dst.put_u8(b'?');
            self.query_args.append_bytes(dst);
        } else if !self.query_string.is_empty() {
            dst.put_u8(b'?');
            dst.extend_from_slice(&self.query_string);
        }
        if !self.hash.is_empty() {
            dst.put_u8(b'#');
            dst.extend_from_slice(&self.hash);
        }
    }
}

// ===== Formatting =====

impl std::fmt::Debug for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &String::from_utf8_lossy(self.scheme()))
            .field("host", &String::from_utf8_lossy(&self.host))
            .field("path", &String::from_utf8_lossy(self.path()))
            .field("query_string", &String::from_utf8_lossy(&self.query_string))
            .field("hash", &String::from_utf8_lossy(&self.hash))
            .finish()
    }
}
