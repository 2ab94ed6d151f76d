//! Error types for the Shift Compliance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure conditions that abort a whole batch. Per-punch anomalies
//! (an unparseable time token) are not errors: they are absorbed locally by
//! the normalizer and reported on the warning channel.

use thiserror::Error;

/// The main error type for the Shift Compliance Engine.
///
/// All fallible operations in the engine return this error type. The engine
/// fails whole batches only; recoverable per-row problems never surface here.
///
/// # Example
///
/// ```
/// use compliance_engine::error::EngineError;
///
/// let error = EngineError::MalformedDate {
///     value: "13/45/2024".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed shift date: 13/45/2024");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A shift date could not be parsed as MM/DD/YYYY.
    ///
    /// Dates order the whole merge pass, so an unsortable date is a
    /// structural failure of the batch rather than a droppable row.
    #[error("Malformed shift date: {value}")]
    MalformedDate {
        /// The date string that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_displays_value() {
        let error = EngineError::MalformedDate {
            value: "13/45/2024".to_string(),
        };
        assert_eq!(error.to_string(), "Malformed shift date: 13/45/2024");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_malformed_date() -> EngineResult<()> {
            Err(EngineError::MalformedDate {
                value: "bogus".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_malformed_date()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
