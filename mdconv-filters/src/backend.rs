//! Backend trait definition
//!
//! A backend is one of the two conversion engines: the embedded renderer or the
//! external converter process. Both take a [`ConversionRequest`] and return a
//! [`ConversionResult`]; neither falls back to the other.

use crate::error::ConvertError;
use crate::request::{ConversionRequest, ConversionResult};

/// Trait for conversion engines
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Backend for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
///         Ok(ConversionResult {
///             output_text: request.source_text.to_uppercase(),
///         })
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// The name of this backend (e.g., "pandoc", "embedded")
    fn name(&self) -> &str;

    /// Optional description of this backend
    fn description(&self) -> &str {
        ""
    }

    /// Whether this backend can read `from` and write `to`.
    ///
    /// The default accepts everything and leaves validation to the engine.
    fn supports(&self, _from: &str, _to: &str) -> bool {
        true
    }

    /// Run a single conversion
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError>;
}
