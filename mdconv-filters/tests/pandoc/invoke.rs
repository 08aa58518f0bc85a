//! Tests for the pandoc subprocess invoker, run against stub executables.

use crate::common::{self, parse_echo, stub, strings};
use mdconv_filters::{Backend, ConversionRequest, ConvertError, PandocBackend};

#[test]
fn test_arguments_reach_the_process_in_order() {
    let backend = stub(common::ECHO);
    let extra = strings(&["--standalone", "-V", "geometry=margin=1in"]);
    let output = backend
        .generic_convert("*hi*", "markdown", "latex", &extra)
        .unwrap();

    let echoed = parse_echo(&output);
    assert_eq!(
        echoed.args,
        vec![
            "-f",
            "markdown",
            "-t",
            "latex",
            "--standalone",
            "-V",
            "geometry=margin=1in"
        ]
    );
    assert_eq!(echoed.stdin, "*hi*");
}

#[test]
fn test_utf8_source_round_trips_through_stdin() {
    let backend = stub(common::ECHO);
    let source = "# Größe\n\n日本語 — ok\n";
    let output = backend.generic_convert(source, "markdown", "rst", &[]).unwrap();
    assert_eq!(parse_echo(&output).stdin, source);
}

#[test]
fn test_empty_source() {
    let backend = stub(common::ECHO);
    let output = backend.generic_convert("", "markdown", "html", &[]).unwrap();
    assert_eq!(parse_echo(&output).stdin, "");
}

#[test]
fn test_large_source_does_not_deadlock() {
    let backend = stub(common::ECHO);
    let source = "lorem ipsum dolor sit amet\n".repeat(80_000);
    let output = backend
        .generic_convert(&source, "markdown", "html", &[])
        .unwrap();
    assert_eq!(parse_echo(&output).stdin.len(), source.len());
}

#[test]
fn test_unrecognized_flag_reports_exit_code() {
    let backend = stub(common::ECHO);
    let err = backend
        .generic_convert("*hi*", "markdown", "latex", &strings(&["--unknown-flag"]))
        .unwrap_err();
    assert_eq!(err.exit_code(), Some(64));
    match err {
        ConvertError::ConversionFailed { code, .. } => assert_eq!(code, Some(64)),
        other => panic!("Expected ConversionFailed, got {other:?}"),
    }
}

#[test]
fn test_failure_without_reading_stdin() {
    let backend = stub(common::FAIL_FAST);
    let source = "x".repeat(1 << 20);
    let err = backend
        .generic_convert(&source, "markdown", "latex", &[])
        .unwrap_err();
    assert_eq!(err.exit_code(), Some(3));
}

#[test]
fn test_killed_process_has_no_exit_code() {
    let backend = stub(common::KILLED);
    let err = backend
        .generic_convert("text", "markdown", "latex", &[])
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::ConversionFailed { code: None, .. }
    ));
    assert!(err.to_string().contains("signal"));
}

#[test]
fn test_non_utf8_output() {
    let backend = stub(common::BINARY);
    let err = backend
        .generic_convert("text", "markdown", "docx", &[])
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidOutput(_)));
}

#[test]
fn test_missing_executable_regardless_of_input() {
    let backend = PandocBackend::new("mdconv-test-no-such-converter");
    for source in ["", "# Title", "plain"] {
        match backend.generic_convert(source, "markdown", "latex", &[]) {
            Err(ConvertError::ExecutableNotFound { executable, .. }) => {
                assert_eq!(executable, "mdconv-test-no-such-converter")
            }
            other => panic!("Expected ExecutableNotFound, got {other:?}"),
        }
    }
}

#[test]
fn test_backend_trait_uses_request_dialects() {
    let backend = stub(common::ECHO);
    let request = ConversionRequest::new("body", "rst")
        .from("gfm")
        .args(["--wrap=none"]);
    let result = backend.convert(&request).unwrap();
    let echoed = parse_echo(&result.output_text);
    assert_eq!(echoed.args, vec!["-f", "gfm", "-t", "rst", "--wrap=none"]);
    assert_eq!(echoed.stdin, "body");
}

#[test]
fn test_version_probe() {
    let version = stub(common::ECHO).check_version().unwrap();
    assert_eq!(version.components(), &[3, 1, 2]);
    assert!(version.is_supported());

    let old = stub(common::OLD).check_version().unwrap();
    assert_eq!(old.to_string(), "1.9.4");
    assert!(!old.is_supported());
}

#[test]
fn test_real_pandoc_when_installed() {
    // Stubs must exist before any child is spawned in this binary
    let _ = common::stub_path(common::ECHO);
    let backend = PandocBackend::new("pandoc");
    if backend.resolve().is_err() {
        eprintln!("Skipping real pandoc test (pandoc not installed)");
        return;
    }
    let latex = backend
        .generic_convert("*hi*", "markdown", "latex", &[])
        .unwrap();
    assert!(latex.contains("\\emph{hi}"));
}
