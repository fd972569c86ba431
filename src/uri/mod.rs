//! HTTP request target.
//!
//! [`Uri`] is a mutable, reusable representation of a request target:
//!
//! ```not_rust
//!   http://example.com:8042/over/there?name=ferret#nose
//!   \__/   \______________/\_________/ \_________/ \__/
//!    |            |             |           |        |
//! scheme        host          path        query    hash
//! ```
//!
//! Parsing never fails: missing pieces fall back to defaults and malformed
//! percent escapes pass through as literal bytes. The path bytes are kept
//! exactly as received, and a percent-decoded, normalised form (duplicate
//! slashes collapsed, `..` segments resolved against the root) is derived
//! next to them. [`Args`] is the decoded, ordered view of the query string,
//! materialised on first access.
//!
//! Every buffer is retained across parses, so a pooled request can reuse one
//! [`Uri`] for thousands of targets without touching the allocator.
#[allow(clippy::module_inception)]
mod uri;

mod parser;
mod path;
mod args;
mod percent;

pub use args::{Args, Iter};
pub use uri::Uri;
