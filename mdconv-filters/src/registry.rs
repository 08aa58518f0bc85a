//! Filter registry for template engines
//!
//! Maps the names templates use to the conversions in [`Filters`]. A template
//! engine registers each entry as a filter and forwards calls through
//! [`FilterRegistry::apply`].

use crate::backends::BackendKind;
use crate::error::ConvertError;
use crate::filters::Filters;
use crate::request::{HTML, LATEX, RST};
use serde::Serialize;
use std::collections::HashMap;

/// Signature shared by every filter: source text plus optional extra
/// backend arguments.
pub type FilterFn = fn(&Filters, &str, Option<&[String]>) -> Result<String, ConvertError>;

/// Describes a registered filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterInfo {
    pub name: String,
    pub description: String,
    pub backend: BackendKind,
    pub target: String,
    pub deprecated: bool,
}

/// A named filter and the function implementing it.
#[derive(Clone)]
pub struct FilterEntry {
    info: FilterInfo,
    apply: FilterFn,
}

impl FilterEntry {
    pub fn new(
        name: &str,
        description: &str,
        backend: BackendKind,
        target: &str,
        deprecated: bool,
        apply: FilterFn,
    ) -> Self {
        Self {
            info: FilterInfo {
                name: name.to_string(),
                description: description.to_string(),
                backend,
                target: target.to_string(),
                deprecated,
            },
            apply,
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn info(&self) -> &FilterInfo {
        &self.info
    }

    pub fn apply(
        &self,
        filters: &Filters,
        source: &str,
        extra_args: Option<&[String]>,
    ) -> Result<String, ConvertError> {
        (self.apply)(filters, source, extra_args)
    }
}

/// Registry of template filters
///
/// # Examples
///
/// ```ignore
/// let registry = FilterRegistry::default();
/// let filters = Filters::default();
/// let html = registry.apply(&filters, "markdown_to_html", "# Title", None)?;
/// ```
pub struct FilterRegistry {
    filters: HashMap<String, FilterEntry>,
}

impl FilterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FilterRegistry {
            filters: HashMap::new(),
        }
    }

    /// Register a filter
    ///
    /// If a filter with the same name already exists, it will be replaced.
    pub fn register(&mut self, entry: FilterEntry) {
        self.filters.insert(entry.name().to_string(), entry);
    }

    /// Get a filter by name
    pub fn get(&self, name: &str) -> Result<&FilterEntry, ConvertError> {
        self.filters
            .get(name)
            .ok_or_else(|| ConvertError::FilterNotFound(name.to_string()))
    }

    /// Check if a filter exists
    pub fn has(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// List all available filter names (sorted)
    pub fn list_filters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.filters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Descriptions of every filter, sorted by name
    pub fn infos(&self) -> Vec<FilterInfo> {
        let mut infos: Vec<_> = self.filters.values().map(|e| e.info().clone()).collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Run the named filter
    pub fn apply(
        &self,
        filters: &Filters,
        name: &str,
        source: &str,
        extra_args: Option<&[String]>,
    ) -> Result<String, ConvertError> {
        self.get(name)?.apply(filters, source, extra_args)
    }

    /// Create a registry with the built-in filters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(FilterEntry::new(
            "markdown_to_html",
            "Markdown to HTML (embedded renderer)",
            BackendKind::Embedded,
            HTML,
            false,
            apply_html,
        ));
        registry.register(FilterEntry::new(
            "markdown_to_html_embedded",
            "Markdown to HTML, explicitly embedded",
            BackendKind::Embedded,
            HTML,
            false,
            apply_html_embedded,
        ));
        registry.register(FilterEntry::new(
            "markdown_to_html_pandoc",
            "Markdown to HTML via pandoc (defaults to --mathjax)",
            BackendKind::Pandoc,
            HTML,
            true,
            apply_html_pandoc,
        ));
        registry.register(FilterEntry::new(
            "markdown_to_latex",
            "Markdown to LaTeX via pandoc",
            BackendKind::Pandoc,
            LATEX,
            true,
            apply_latex,
        ));
        registry.register(FilterEntry::new(
            "markdown_to_rst",
            "Markdown to reStructuredText via pandoc",
            BackendKind::Pandoc,
            RST,
            true,
            apply_rst,
        ));

        registry
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn apply_html(
    filters: &Filters,
    source: &str,
    _extra_args: Option<&[String]>,
) -> Result<String, ConvertError> {
    filters.markdown_to_html(source)
}

fn apply_html_embedded(
    filters: &Filters,
    source: &str,
    _extra_args: Option<&[String]>,
) -> Result<String, ConvertError> {
    filters.markdown_to_html_embedded(source)
}

fn apply_html_pandoc(
    filters: &Filters,
    source: &str,
    extra_args: Option<&[String]>,
) -> Result<String, ConvertError> {
    filters.markdown_to_html_pandoc(source, extra_args)
}

fn apply_latex(
    filters: &Filters,
    source: &str,
    extra_args: Option<&[String]>,
) -> Result<String, ConvertError> {
    filters.markdown_to_latex(source, extra_args.unwrap_or_default())
}

fn apply_rst(
    filters: &Filters,
    source: &str,
    extra_args: Option<&[String]>,
) -> Result<String, ConvertError> {
    filters.markdown_to_rst(source, extra_args.unwrap_or_default())
}
