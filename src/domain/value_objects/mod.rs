//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod charset;
mod exclude_patterns;
pub mod path;

pub use charset::Charset;
pub use exclude_patterns::{wildcard_to_regex, ExcludePatterns};
