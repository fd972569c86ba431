//! Low allocation HTTP/1.1 protocol core.
//!
//! The hottest value in the request pipeline is the request target. [`Uri`]
//! parses one without ever failing, keeps the wire form of the path next to
//! its normalised, percent-decoded form, and is built to be parsed into
//! repeatedly without reallocating.
#![warn(missing_debug_implementations)]

mod log;
mod matches;
mod strings;

pub mod uri;

// ===== Reexports =====

pub use uri::{Args, Uri};
