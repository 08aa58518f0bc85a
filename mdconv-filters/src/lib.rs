//! Markdown conversion filters for templating pipelines
//!
//!     This crate turns Markdown into HTML, LaTeX or reStructuredText through
//!     small text-to-text functions meant to be registered as template filters.
//!     It never parses or renders Markdown itself; it picks one of two engines
//!     and normalizes how they are called.
//!
//! Backends
//!
//!     - embedded: comrak, in process, HTML only. Optional (`embedded` cargo
//!       feature). Whether it is usable is probed once per process; when it is
//!       not, every call fails with the reason captured by that probe.
//!     - pandoc: an external `pandoc` executable, one synchronous process per
//!       conversion, any reader/writer dialect pair pandoc knows.
//!
//!     A failing backend is never replaced by the other: the dialects they
//!     produce are not interchangeable.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── backend.rs              # Backend trait definition
//!     ├── backends
//!     │   ├── embedded.rs         # comrak adapter + availability probe
//!     │   ├── pandoc.rs           # subprocess invoker
//!     │   └── mod.rs
//!     ├── filters.rs              # Filters facade (routing, deprecations)
//!     ├── registry.rs             # FilterRegistry for template engines
//!     ├── request.rs              # ConversionRequest / ConversionResult
//!     └── lib.rs
//!
//! Filters
//!
//!     `markdown_to_html` is the preferred HTML filter. The pandoc-backed
//!     filters (`markdown_to_html_pandoc`, `markdown_to_latex`,
//!     `markdown_to_rst`) remain for existing templates; each call logs a
//!     deprecation warning and otherwise behaves exactly as before. New code
//!     should call [`generic_convert`] with explicit dialects.
//!
//!     The free functions below use [`Filters::default`], which reads
//!     `MDCONV_PANDOC` for the pandoc executable. Applications with their own
//!     configuration build a [`Filters`] once and call its methods.

pub mod backend;
pub mod backends;
pub mod error;
pub mod filters;
pub mod registry;
pub mod request;

pub use backend::Backend;
pub use backends::{BackendKind, EmbeddedOptions, EmbeddedRenderer, PandocBackend};
pub use error::ConvertError;
pub use filters::Filters;
pub use registry::{FilterInfo, FilterRegistry};
pub use request::{ConversionRequest, ConversionResult};

/// Convert between any two dialects through pandoc.
pub fn generic_convert(
    source: &str,
    from: &str,
    to: &str,
    extra_args: &[String],
) -> Result<String, ConvertError> {
    Filters::default().generic_convert(source, from, to, extra_args)
}

/// Markdown to HTML with the embedded renderer.
pub fn markdown_to_html(source: &str) -> Result<String, ConvertError> {
    Filters::default().markdown_to_html(source)
}

/// Markdown to HTML, explicitly through the embedded renderer.
pub fn markdown_to_html_embedded(source: &str) -> Result<String, ConvertError> {
    Filters::default().markdown_to_html_embedded(source)
}

/// Markdown to HTML through pandoc; `None` means `--mathjax`.
#[deprecated(since = "0.1.0", note = "use `generic_convert(source, \"markdown\", \"html\", args)`")]
pub fn markdown_to_html_pandoc(
    source: &str,
    extra_args: Option<&[String]>,
) -> Result<String, ConvertError> {
    Filters::default().markdown_to_html_pandoc(source, extra_args)
}

/// Markdown to LaTeX through pandoc.
#[deprecated(since = "0.1.0", note = "use `generic_convert(source, \"markdown\", \"latex\", args)`")]
pub fn markdown_to_latex(source: &str, extra_args: &[String]) -> Result<String, ConvertError> {
    Filters::default().markdown_to_latex(source, extra_args)
}

/// Markdown to reStructuredText through pandoc.
#[deprecated(since = "0.1.0", note = "use `generic_convert(source, \"markdown\", \"rst\", args)`")]
pub fn markdown_to_rst(source: &str, extra_args: &[String]) -> Result<String, ConvertError> {
    Filters::default().markdown_to_rst(source, extra_args)
}
