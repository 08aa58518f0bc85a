//! Embedded Markdown → HTML renderer (comrak)
//!
//! comrak is an optional dependency behind the `embedded` feature. Whether it
//! is present is decided once per process by [`availability`]; a build without
//! it still links, and every render attempt fails with
//! [`ConvertError::DependencyMissing`] carrying the reason captured by that
//! first probe.
//!
//! Raw HTML in the input is not passed through, so the rendered output never
//! contains markup (such as `<script>`) smuggled in by the source text.

use crate::backend::Backend;
use crate::error::ConvertError;
use crate::request::{ConversionRequest, ConversionResult, HTML, MARKDOWN};
use once_cell::sync::Lazy;

/// Outcome of the one-shot dependency probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

static AVAILABILITY: Lazy<Availability> = Lazy::new(probe);

/// Process-wide availability of the embedded renderer.
pub fn availability() -> &'static Availability {
    &AVAILABILITY
}

#[cfg(feature = "embedded")]
fn probe() -> Availability {
    log::debug!("embedded renderer available (comrak)");
    Availability::Available
}

#[cfg(not(feature = "embedded"))]
fn probe() -> Availability {
    let reason = "mdconv-filters was built without the `embedded` feature".to_string();
    log::debug!("embedded renderer unavailable: {reason}");
    Availability::Unavailable(reason)
}

/// Markdown extensions enabled on the embedded path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
}

impl Default for EmbeddedOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
        }
    }
}

/// In-process renderer for the markdown → html pair.
#[derive(Debug, Clone)]
pub struct EmbeddedRenderer {
    options: EmbeddedOptions,
    availability: Availability,
}

impl EmbeddedRenderer {
    pub fn new(options: EmbeddedOptions) -> Self {
        Self::with_availability(options, availability().clone())
    }

    /// Build a renderer with an explicit availability instead of the
    /// process-wide probe result.
    pub fn with_availability(options: EmbeddedOptions, availability: Availability) -> Self {
        Self {
            options,
            availability,
        }
    }

    pub fn options(&self) -> &EmbeddedOptions {
        &self.options
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Render markdown to an HTML fragment.
    pub fn render(&self, source: &str) -> Result<String, ConvertError> {
        match &self.availability {
            Availability::Available => render_html(source, &self.options),
            Availability::Unavailable(reason) => {
                Err(ConvertError::DependencyMissing(reason.clone()))
            }
        }
    }
}

impl Default for EmbeddedRenderer {
    fn default() -> Self {
        Self::new(EmbeddedOptions::default())
    }
}

impl Backend for EmbeddedRenderer {
    fn name(&self) -> &str {
        "embedded"
    }

    fn description(&self) -> &str {
        "In-process markdown to HTML renderer"
    }

    fn supports(&self, from: &str, to: &str) -> bool {
        from == MARKDOWN && to == HTML
    }

    fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        if !self.supports(&request.source_dialect, &request.target_dialect) {
            return Err(ConvertError::UnsupportedDialect {
                backend: self.name().to_string(),
                from: request.source_dialect.clone(),
                to: request.target_dialect.clone(),
            });
        }
        let output_text = self.render(&request.source_text)?;
        Ok(ConversionResult { output_text })
    }
}

#[cfg(feature = "embedded")]
fn render_html(source: &str, options: &EmbeddedOptions) -> Result<String, ConvertError> {
    Ok(comrak::markdown_to_html(source, &comrak_options(options)))
}

#[cfg(not(feature = "embedded"))]
fn render_html(_source: &str, _options: &EmbeddedOptions) -> Result<String, ConvertError> {
    match availability() {
        Availability::Unavailable(reason) => Err(ConvertError::DependencyMissing(reason.clone())),
        Availability::Available => unreachable!("probe cannot succeed without comrak"),
    }
}

#[cfg(feature = "embedded")]
fn comrak_options(options: &EmbeddedOptions) -> comrak::ComrakOptions<'static> {
    let mut comrak = comrak::ComrakOptions::default();
    comrak.extension.table = options.tables;
    comrak.extension.strikethrough = options.strikethrough;
    comrak.extension.autolink = options.autolink;
    comrak.extension.tasklist = options.tasklist;
    // Raw HTML is replaced with a placeholder comment
    comrak.render.unsafe_ = false;
    comrak
}
