//! Greeting operations distinguished by arity

use std::io::Write;

use log::{debug, trace};

use crate::error::Result;

/// Text written by [`greet_no_arg`].
pub const NO_ARG_TEXT: &str = "test";

/// Argument [`run`] passes to [`greet_with_arg`].
pub const RUN_ARGUMENT: i64 = 5;

/// Write `test` followed by a newline.
pub fn greet_no_arg<W: Write>(out: &mut W) -> Result<()> {
    trace!("greet_no_arg");
    writeln!(out, "{}", NO_ARG_TEXT)?;
    Ok(())
}

/// Write the decimal form of `n` followed by a newline.
///
/// Any `i64` is accepted; negatives keep their sign and there are no
/// leading zeros.
pub fn greet_with_arg<W: Write>(out: &mut W, n: i64) -> Result<()> {
    trace!("greet_with_arg({})", n);
    writeln!(out, "{}", n)?;
    Ok(())
}

/// One call to either greeting operation.
///
/// `NoArg` stands in for the absent argument, so a caller holding an
/// `Option<i64>` can pick the operation without matching on it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    /// Dispatches to [`greet_no_arg`]
    NoArg,

    /// Dispatches to [`greet_with_arg`]
    WithArg(i64),
}

impl Greeting {
    /// Number of arguments the underlying operation takes.
    pub fn arity(&self) -> usize {
        match self {
            Greeting::NoArg => 0,
            Greeting::WithArg(_) => 1,
        }
    }

    /// Run the operation this greeting stands for.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match *self {
            Greeting::NoArg => greet_no_arg(out),
            Greeting::WithArg(n) => greet_with_arg(out, n),
        }
    }
}

impl From<Option<i64>> for Greeting {
    fn from(arg: Option<i64>) -> Self {
        match arg {
            Some(n) => Greeting::WithArg(n),
            None => Greeting::NoArg,
        }
    }
}

impl From<i64> for Greeting {
    fn from(n: i64) -> Self {
        Greeting::WithArg(n)
    }
}

/// The fixed call sequence: `greet_no_arg`, then `greet_with_arg(5)`.
pub const RUN_SEQUENCE: [Greeting; 2] = [Greeting::NoArg, Greeting::WithArg(RUN_ARGUMENT)];

/// Run the entry point's call sequence against `out`.
///
/// Output is always `test\n5\n`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    for greeting in RUN_SEQUENCE {
        debug!("calling greeting with arity {}", greeting.arity());
        greeting.write_to(out)?;
    }
    out.flush()?;
    Ok(())
}
