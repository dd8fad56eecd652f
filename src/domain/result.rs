//! Result type alias for Cura
//!
//! This module provides a convenient Result type alias that uses CuraError
//! as the error type.

use super::errors::CuraError;

/// Result type alias for Cura operations
///
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use cura::domain::result::Result;
/// use cura::domain::errors::CuraError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CuraError::InvalidInput("unknown identifier".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CuraError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CuraError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(CuraError::InvalidInput("test".to_string()));
        assert!(result.is_err());
    }
}
