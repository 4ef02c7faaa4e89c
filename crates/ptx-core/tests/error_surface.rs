use ptx_core::errors::{ErrorInfo, PtxError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "events.lhe")
        .with_context("event", "3")
}

#[test]
fn config_error_surface() {
    let err = PtxError::Config(sample_info("lhe-open", "cannot open event file"));
    assert_eq!(err.info().code, "lhe-open");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn simulation_error_surface() {
    let err = PtxError::Simulation(sample_info("lhe-truncated", "event block truncated"));
    assert_eq!(err.info().code, "lhe-truncated");
    assert!(err.info().context.contains_key("event"));
}

#[test]
fn overflow_error_surface() {
    let err = PtxError::Overflow(sample_info("buffer-full", "buffer capacity reached"));
    assert_eq!(err.info().code, "buffer-full");
}

#[test]
fn serde_error_surface() {
    let err = PtxError::Serde(sample_info("manifest-write", "cannot write manifest"));
    assert_eq!(err.info().code, "manifest-write");
}

#[test]
fn display_includes_context_and_hint() {
    let err = PtxError::Config(
        ErrorInfo::new("bad-path", "event source does not exist")
            .with_context("path", "missing.lhe")
            .with_hint("check the event-source specification"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("bad-path"));
    assert!(rendered.contains("path=missing.lhe"));
    assert!(rendered.contains("hint: check the event-source specification"));
}
