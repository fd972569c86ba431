//! Shared protocol byte constants.

pub(crate) const HTTP: &[u8] = b"http";
pub(crate) const HTTPS: &[u8] = b"https";
pub(crate) const COLON_SLASH_SLASH: &[u8] = b"://";

pub(crate) const SLASH: &[u8] = b"/";
pub(crate) const SLASH_SLASH: &[u8] = b"//";
pub(crate) const SLASH_DOT_DOT: &[u8] = b"/..";
pub(crate) const SLASH_DOT_DOT_SLASH: &[u8] = b"/../";
