//! Error types for festivos.
//!
//! A single `thiserror`-derived enum covers the three failure families of
//! the library: date arithmetic out of range, malformed or unsupported
//! holiday rules, and failures of the backing rule store. Store failures
//! are propagated unchanged; the library performs no retry and no
//! fallback.

use thiserror::Error;

/// The top-level error type used throughout festivos.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date construction or arithmetic produced an out-of-range result.
    #[error("date error: {0}")]
    Date(String),

    /// A holiday rule is malformed or carries an unsupported rule type.
    ///
    /// Raised at resolution time, not at store-read time: the store hands
    /// out records as persisted and the resolver validates them.
    #[error("invalid holiday rule: {0}")]
    Validation(String),

    /// The backing rule store could not serve the request.
    #[error("rule store failure: {0}")]
    Dependency(String),
}

/// Shorthand `Result` type used throughout festivos.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Validation(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fest_core::ensure;
/// fn month_in_range(m: u8) -> fest_core::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month_in_range(6).is_ok());
/// assert!(month_in_range(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Validation(...))` immediately.
///
/// # Example
/// ```
/// use fest_core::fail;
/// fn unsupported() -> fest_core::Result<()> {
///     fail!("rule type 9 is not supported");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Validation(format!($($msg)*)))
    };
}
