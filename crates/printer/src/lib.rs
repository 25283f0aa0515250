//! # Printer
//!
//! Two greeting operations that differ only in how many arguments they take,
//! plus a runner that calls them in a fixed order.
//!
//! ## Operations
//!
//! - [`greet_no_arg`]: writes `test`
//! - [`greet_with_arg`]: writes the decimal form of an integer
//! - [`Greeting`]: both operations behind one value with an explicit
//!   "no argument" variant
//! - [`run`]: `greet_no_arg`, then `greet_with_arg(5)`
//!
//! Every operation writes to any [`std::io::Write`], so the binary hands in
//! stdout and tests hand in a `Vec<u8>`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod greet;

// Re-export main types
pub use error::{PrinterError, Result};
pub use greet::{greet_no_arg, greet_with_arg, run, Greeting, RUN_ARGUMENT};

/// Printer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
