//! Result type alias for dashkit
//!
//! This module provides a convenient Result type alias that uses
//! DashkitError as the error type.

use super::errors::DashkitError;

/// Result type alias for dashkit operations
///
/// This is a convenience type alias that uses `DashkitError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use dashkit::domain::result::Result;
/// use dashkit::domain::errors::DashkitError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DashkitError::Configuration("invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DashkitError>;
