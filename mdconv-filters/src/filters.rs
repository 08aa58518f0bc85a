//! Filter facade
//!
//! [`Filters`] bundles one configured instance of each backend and exposes the
//! named conversions used by templates. Routing is fixed per filter:
//!
//! | Filter                      | Backend  | Target |
//! |-----------------------------|----------|--------|
//! | `markdown_to_html`          | embedded | html   |
//! | `markdown_to_html_embedded` | embedded | html   |
//! | `markdown_to_html_pandoc`   | pandoc   | html   |
//! | `markdown_to_latex`         | pandoc   | latex  |
//! | `markdown_to_rst`           | pandoc   | rst    |
//!
//! The pandoc-backed filters predate [`Filters::generic_convert`] and are kept
//! for existing templates. Each call logs one warning on
//! [`DEPRECATION_TARGET`]; the warning never changes the result.

use crate::backend::Backend;
use crate::backends::{BackendKind, EmbeddedRenderer, PandocBackend};
use crate::error::ConvertError;
use crate::request::{HTML, LATEX, MARKDOWN, RST};

/// Log target for deprecation notices.
pub const DEPRECATION_TARGET: &str = "mdconv::deprecation";

/// Default pandoc flags for the html filter: pass math through for MathJax.
pub const DEFAULT_HTML_PANDOC_ARGS: &[&str] = &["--mathjax"];

/// The configured backends behind every filter.
#[derive(Debug, Clone)]
pub struct Filters {
    pandoc: PandocBackend,
    embedded: EmbeddedRenderer,
    html_pandoc_args: Vec<String>,
}

impl Filters {
    pub fn new(pandoc: PandocBackend, embedded: EmbeddedRenderer) -> Self {
        Self {
            pandoc,
            embedded,
            html_pandoc_args: DEFAULT_HTML_PANDOC_ARGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the flags `markdown_to_html_pandoc` uses when the caller
    /// passes none.
    pub fn with_html_pandoc_args(mut self, args: Vec<String>) -> Self {
        self.html_pandoc_args = args;
        self
    }

    pub fn pandoc(&self) -> &PandocBackend {
        &self.pandoc
    }

    pub fn embedded(&self) -> &EmbeddedRenderer {
        &self.embedded
    }

    pub fn html_pandoc_args(&self) -> &[String] {
        &self.html_pandoc_args
    }

    pub fn backend(&self, kind: BackendKind) -> &dyn Backend {
        match kind {
            BackendKind::Embedded => &self.embedded,
            BackendKind::Pandoc => &self.pandoc,
        }
    }

    /// Unified entry point: any dialect pair through pandoc.
    pub fn generic_convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        extra_args: &[String],
    ) -> Result<String, ConvertError> {
        self.pandoc.generic_convert(source, from, to, extra_args)
    }

    /// Markdown to HTML with the embedded renderer. Never consults pandoc.
    pub fn markdown_to_html(&self, source: &str) -> Result<String, ConvertError> {
        log::debug!("markdown_to_html: embedded renderer");
        self.embedded.render(source)
    }

    /// Explicitly embedded HTML rendering; same as [`Filters::markdown_to_html`].
    pub fn markdown_to_html_embedded(&self, source: &str) -> Result<String, ConvertError> {
        log::debug!("markdown_to_html_embedded: embedded renderer");
        self.embedded.render(source)
    }

    /// Markdown to HTML through pandoc.
    ///
    /// `None` uses the configured defaults (`--mathjax` unless changed).
    /// `Some(args)` replaces them entirely, so `Some(&[])` runs pandoc with no
    /// extra flags.
    pub fn markdown_to_html_pandoc(
        &self,
        source: &str,
        extra_args: Option<&[String]>,
    ) -> Result<String, ConvertError> {
        warn_deprecated("markdown_to_html_pandoc");
        let args = extra_args.unwrap_or(self.html_pandoc_args.as_slice());
        self.pandoc.generic_convert(source, MARKDOWN, HTML, args)
    }

    /// Markdown to LaTeX through pandoc.
    pub fn markdown_to_latex(
        &self,
        source: &str,
        extra_args: &[String],
    ) -> Result<String, ConvertError> {
        self.markdown_to_latex_from(source, MARKDOWN, extra_args)
    }

    /// Like [`Filters::markdown_to_latex`] with a different pandoc reader
    /// (e.g. `gfm`, `commonmark`).
    pub fn markdown_to_latex_from(
        &self,
        source: &str,
        markup: &str,
        extra_args: &[String],
    ) -> Result<String, ConvertError> {
        warn_deprecated("markdown_to_latex");
        self.pandoc.generic_convert(source, markup, LATEX, extra_args)
    }

    /// Markdown to reStructuredText through pandoc.
    pub fn markdown_to_rst(
        &self,
        source: &str,
        extra_args: &[String],
    ) -> Result<String, ConvertError> {
        warn_deprecated("markdown_to_rst");
        self.pandoc.generic_convert(source, MARKDOWN, RST, extra_args)
    }
}

impl Default for Filters {
    fn default() -> Self {
        Self::new(PandocBackend::default(), EmbeddedRenderer::default())
    }
}

fn warn_deprecated(name: &str) {
    log::warn!(
        target: DEPRECATION_TARGET,
        "`{name}` is deprecated in favor of `generic_convert` with the matching dialects"
    );
}
