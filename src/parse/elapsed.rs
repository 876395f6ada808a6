//! Elapsed-time extraction from GNU `time` output.

use std::sync::LazyLock;

use regex::Regex;

static ELAPSED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+\.\d+)elapsed").expect("static regex"));

/// Extract wall-clock seconds from a `time` report.
///
/// Looks for the first `<minutes>:<seconds>elapsed` token, e.g. `0:12.34elapsed`,
/// and returns `minutes * 60 + seconds`. Returns `None` when no token is present.
pub fn extract_elapsed_seconds(text: &str) -> Option<f64> {
    let caps = ELAPSED_RE.captures(text)?;
    let minutes: f64 = caps[1].parse::<u64>().ok()? as f64;
    let seconds: f64 = caps[2].parse().ok()?;
    Some(minutes * 60.0 + seconds)
}
