//! Tests for the embedded HTML path through the public facade.

use mdconv_filters::backends::embedded::availability;
use mdconv_filters::backends::{Availability, EmbeddedOptions};
use mdconv_filters::{markdown_to_html, ConvertError, EmbeddedRenderer, Filters, PandocBackend};

#[cfg(feature = "embedded")]
use mdconv_filters::{markdown_to_html_embedded, FilterRegistry};

#[cfg(feature = "embedded")]
#[test]
fn test_heading_and_paragraph() {
    let html = markdown_to_html("# Title\n\nBody.").unwrap();
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<p>Body.</p>"));
}

#[cfg(feature = "embedded")]
#[test]
fn test_gfm_extensions() {
    let source = "| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done\n\nSee https://example.com\n";
    let html = markdown_to_html(source).unwrap();
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
    assert!(html.contains("type=\"checkbox\""));
    assert!(html.contains("<a href=\"https://example.com\">"));
}

#[cfg(feature = "embedded")]
#[test]
fn test_embedded_alias_matches_default() {
    let source = "Some *emphasis* and `code`.";
    assert_eq!(
        markdown_to_html(source).unwrap(),
        markdown_to_html_embedded(source).unwrap()
    );
}

#[cfg(feature = "embedded")]
#[test]
fn test_html_ignores_pandoc_configuration() {
    let filters = Filters::new(
        PandocBackend::new("mdconv-test-no-such-converter"),
        EmbeddedRenderer::default(),
    );
    let html = filters.markdown_to_html("*hi*").unwrap();
    assert!(html.contains("<em>hi</em>"));

    let via_registry = FilterRegistry::default()
        .apply(&filters, "markdown_to_html", "*hi*", None)
        .unwrap();
    assert_eq!(html, via_registry);
}

#[cfg(not(feature = "embedded"))]
#[test]
fn test_missing_renderer_replays_probe_reason() {
    let first = markdown_to_html("# Title").unwrap_err();
    let second = markdown_to_html("").unwrap_err();
    let reason = match availability() {
        Availability::Unavailable(reason) => reason.clone(),
        Availability::Available => panic!("probe should fail without the feature"),
    };
    assert_eq!(first, ConvertError::DependencyMissing(reason));
    assert_eq!(first, second);
}

#[test]
fn test_unavailable_renderer_fails_every_call() {
    let renderer = EmbeddedRenderer::with_availability(
        EmbeddedOptions::default(),
        Availability::Unavailable("version mismatch: need comrak 0.29".to_string()),
    );
    let filters = Filters::new(PandocBackend::new("pandoc"), renderer);
    let errors: Vec<_> = (0..3)
        .map(|_| filters.markdown_to_html("# Title").unwrap_err())
        .collect();
    for err in &errors {
        assert_eq!(
            err,
            &ConvertError::DependencyMissing("version mismatch: need comrak 0.29".to_string())
        );
        assert!(err.to_string().contains("version mismatch: need comrak 0.29"));
    }
}

#[test]
fn test_default_renderer_uses_process_probe() {
    assert_eq!(EmbeddedRenderer::default().availability(), availability());
}
