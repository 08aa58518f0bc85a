//! Request and result types shared by every backend
//!
//! Both are transient: a request is built by the caller, handed to one backend
//! and dropped; the result carries nothing but the converted text.

/// Reader dialect used when the caller does not pick one.
pub const MARKDOWN: &str = "markdown";
pub const HTML: &str = "html";
pub const LATEX: &str = "latex";
pub const RST: &str = "rst";

/// A single conversion to run through a [`crate::Backend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_text: String,
    pub source_dialect: String,
    pub target_dialect: String,
    /// Flags handed to the backend verbatim, in order.
    pub extra_arguments: Vec<String>,
}

impl ConversionRequest {
    /// Create a markdown request for the given target dialect.
    pub fn new(source_text: impl Into<String>, target_dialect: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            source_dialect: MARKDOWN.to_string(),
            target_dialect: target_dialect.into(),
            extra_arguments: Vec::new(),
        }
    }

    /// Override the reader dialect.
    pub fn from(mut self, source_dialect: impl Into<String>) -> Self {
        self.source_dialect = source_dialect.into();
        self
    }

    /// Append extra backend arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_arguments.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Converted text returned by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub output_text: String,
}

impl From<ConversionResult> for String {
    fn from(result: ConversionResult) -> Self {
        result.output_text
    }
}
