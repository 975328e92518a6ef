//! crates/lmhandler/src/error.rs
//! Errors raised while decoding raw MAC values.

use thiserror::Error;

/// Error returned when a raw code has no entry in its table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unknown {table} code {code}")]
pub struct UnknownStatusCode {
    table: &'static str,
    code: u8,
}

impl UnknownStatusCode {
    pub(crate) const fn new(table: &'static str, code: u8) -> Self {
        Self { table, code }
    }

    /// Returns the name of the table that rejected the code.
    #[must_use]
    pub const fn table(&self) -> &'static str {
        self.table
    }

    /// Returns the rejected code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        self.code
    }
}

/// Error returned when a region name cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown region '{input}' (expected a name such as EU868 or US915)")]
pub struct ParseRegionError {
    input: String,
}

impl ParseRegionError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}
