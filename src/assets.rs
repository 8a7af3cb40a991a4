//! Fallback-chasing asset resolution.
//!
//! A logical asset name (a file basename such as `hevistoaunimpostor`) is
//! expanded through an ordered list of templates into concrete candidates.
//! A `ResolutionHandle` walks those candidates front to back until one loads,
//! and exposes a fallback once every candidate has failed.

mod probe;
mod resolver;
mod templates;

pub use probe::*;
pub use resolver::*;
pub use templates::*;
