//! # Indirection
//!
//! A string value, a borrow of it, and a borrow of that borrow, printed as
//! the two storage locations involved.
//!
//! ## Layout
//!
//! - [`ValueHolder`]: owns the `to_change` string
//! - [`AliasChain`]: the reference-to-reference, through which the first
//!   reference and the value itself stay reachable
//! - [`Locations`]: the two addresses, displayed as `0x… 0x…`
//! - [`run`]: builds the chain over `"hello"` and writes one line
//!
//! Address values differ between runs and platforms. Only the shape of the
//! line is stable.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod error;

// Re-export main types
pub use chain::{run, AliasChain, Locations, ValueHolder, INITIAL_TEXT};
pub use error::{IndirectionError, Result};

/// Indirection version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
