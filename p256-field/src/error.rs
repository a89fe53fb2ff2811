//! Error types.

use core::fmt;

/// Error type.
///
/// Returned when decoding a field element from bytes which are the wrong
/// length or encode a value outside `[0, p)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("field error")
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
