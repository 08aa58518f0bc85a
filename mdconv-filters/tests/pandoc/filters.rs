//! Routing tests for the pandoc-backed filters.

use crate::common::{self, parse_echo, stub, strings};
use mdconv_filters::backends::{Availability, EmbeddedOptions};
use mdconv_filters::{ConvertError, EmbeddedRenderer, FilterRegistry, Filters};

fn filters() -> Filters {
    Filters::new(stub(common::ECHO), EmbeddedRenderer::default())
}

#[test]
fn test_latex_passes_flags_unmodified() {
    let output = filters()
        .markdown_to_latex("*hi*", &strings(&["--standalone"]))
        .unwrap();
    let echoed = parse_echo(&output);
    assert_eq!(
        echoed.args,
        vec!["-f", "markdown", "-t", "latex", "--standalone"]
    );
    assert_eq!(echoed.stdin, "*hi*");
}

#[test]
fn test_latex_with_custom_reader() {
    let output = filters()
        .markdown_to_latex_from("*hi*", "gfm", &[])
        .unwrap();
    assert_eq!(parse_echo(&output).args, vec!["-f", "gfm", "-t", "latex"]);
}

#[test]
fn test_rst_target() {
    let output = filters()
        .markdown_to_rst("# Title", &strings(&["--wrap=none"]))
        .unwrap();
    assert_eq!(
        parse_echo(&output).args,
        vec!["-f", "markdown", "-t", "rst", "--wrap=none"]
    );
}

#[test]
fn test_html_pandoc_defaults_to_mathjax() {
    let output = filters().markdown_to_html_pandoc("$x$", None).unwrap();
    assert_eq!(
        parse_echo(&output).args,
        vec!["-f", "markdown", "-t", "html", "--mathjax"]
    );
}

#[test]
fn test_html_pandoc_caller_args_replace_defaults() {
    let filters = filters();

    let output = filters
        .markdown_to_html_pandoc("$x$", Some(strings(&["--katex"]).as_slice()))
        .unwrap();
    assert_eq!(
        parse_echo(&output).args,
        vec!["-f", "markdown", "-t", "html", "--katex"]
    );

    let no_args: &[String] = &[];
    let output = filters.markdown_to_html_pandoc("$x$", Some(no_args)).unwrap();
    assert_eq!(
        parse_echo(&output).args,
        vec!["-f", "markdown", "-t", "html"]
    );
}

#[test]
fn test_configured_html_defaults() {
    let filters = filters().with_html_pandoc_args(strings(&["--webtex"]));
    let output = filters.markdown_to_html_pandoc("$x$", None).unwrap();
    assert_eq!(
        parse_echo(&output).args,
        vec!["-f", "markdown", "-t", "html", "--webtex"]
    );
}

#[test]
fn test_same_input_same_output() {
    let filters = filters();
    let extra = strings(&["--standalone"]);
    let first = filters.markdown_to_latex("# Title\n\nBody.", &extra).unwrap();
    let second = filters.markdown_to_latex("# Title\n\nBody.", &extra).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_deprecated_filters_match_generic_convert() {
    let filters = filters();
    let extra = strings(&["--standalone"]);
    assert_eq!(
        filters.markdown_to_rst("text", &extra).unwrap(),
        filters.generic_convert("text", "markdown", "rst", &extra).unwrap()
    );
    assert_eq!(
        filters.markdown_to_latex("text", &extra).unwrap(),
        filters.generic_convert("text", "markdown", "latex", &extra).unwrap()
    );
}

#[test]
fn test_pandoc_failure_never_falls_back() {
    let filters = Filters::new(stub(common::FAIL_FAST), EmbeddedRenderer::default());
    let err = filters.markdown_to_html_pandoc("# Title", None).unwrap_err();
    assert_eq!(err.exit_code(), Some(3));
}

#[test]
fn test_embedded_failure_never_falls_back() {
    let filters = Filters::new(
        stub(common::ECHO),
        EmbeddedRenderer::with_availability(
            EmbeddedOptions::default(),
            Availability::Unavailable("comrak missing".to_string()),
        ),
    );
    assert_eq!(
        filters.markdown_to_html("# Title"),
        Err(ConvertError::DependencyMissing("comrak missing".to_string()))
    );
}

#[test]
fn test_registry_forwards_extra_args() {
    let registry = FilterRegistry::default();
    let extra = strings(&["--standalone"]);
    let output = registry
        .apply(&filters(), "markdown_to_latex", "*hi*", Some(extra.as_slice()))
        .unwrap();
    assert_eq!(
        parse_echo(&output).args,
        vec!["-f", "markdown", "-t", "latex", "--standalone"]
    );

    let output = registry
        .apply(&filters(), "markdown_to_rst", "*hi*", None)
        .unwrap();
    assert_eq!(parse_echo(&output).args, vec!["-f", "markdown", "-t", "rst"]);
}
