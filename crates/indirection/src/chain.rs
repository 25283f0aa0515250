//! Value holder and the two-level borrow chain over it

use std::fmt;
use std::io::Write;

use log::debug;

use crate::error::Result;

/// Text the value holder starts with in [`run`].
pub const INITIAL_TEXT: &str = "hello";

/// Owns the string every alias in the chain ultimately points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueHolder {
    to_change: String,
}

impl ValueHolder {
    /// Create a holder initialized to [`INITIAL_TEXT`].
    pub fn new() -> Self {
        Self::with_text(INITIAL_TEXT)
    }

    /// Create a holder with arbitrary text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            to_change: text.into(),
        }
    }

    /// Borrow the held string.
    pub fn to_change(&self) -> &String {
        &self.to_change
    }
}

impl Default for ValueHolder {
    fn default() -> Self {
        Self::new()
    }
}

/// A reference to a reference to `T`.
///
/// Neither level owns anything. `'v` is the borrow of the value, `'r` the
/// borrow of the slot holding the first reference.
#[derive(Debug, Clone)]
pub struct AliasChain<'r, 'v, T> {
    outer: &'r &'v T,
}

impl<'r, 'v, T> AliasChain<'r, 'v, T> {
    /// Wrap an existing reference-to-reference.
    pub fn new(reference_to_reference: &'r &'v T) -> Self {
        Self {
            outer: reference_to_reference,
        }
    }

    /// The first-level reference.
    pub fn reference(&self) -> &'v T {
        *self.outer
    }

    /// The second-level reference, as passed to [`AliasChain::new`].
    pub fn reference_to_reference(&self) -> &'r &'v T {
        self.outer
    }

    /// Capture where each level of the chain points.
    pub fn locations(&self) -> Locations {
        Locations {
            reference: self.reference() as *const T as usize,
            reference_to_reference: self.outer as *const &'v T as usize,
        }
    }
}

/// Addresses of the value and of the first reference.
///
/// `reference` is what the first reference points at (the value's storage);
/// `reference_to_reference` is what the second points at (the first
/// reference's storage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locations {
    /// Address held by the reference
    pub reference: usize,

    /// Address held by the reference-to-reference
    pub reference_to_reference: usize,
}

impl fmt::Display for Locations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same rendering as `{:p}` on the references themselves
        write!(f, "{:#x} {:#x}", self.reference, self.reference_to_reference)
    }
}

/// Build holder → reference → reference-to-reference and write both
/// locations as one line.
///
/// Returns the locations that were written.
pub fn run<W: Write>(out: &mut W) -> Result<Locations> {
    let holder = ValueHolder::new();
    let reference = holder.to_change();
    let reference_to_reference = &reference;

    let chain = AliasChain::new(reference_to_reference);
    debug!("chain resolves to {:?}", **chain.reference_to_reference());

    let locations = chain.locations();
    debug!(
        "reference -> {:#x}, reference_to_reference -> {:#x}",
        locations.reference, locations.reference_to_reference
    );

    writeln!(out, "{}", locations)?;
    out.flush()?;
    Ok(locations)
}
