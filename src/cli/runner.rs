use std::path::Path;

use tracing::debug;

use iconfix::api::{FileOutcome, convert_path};

/// The assets the binary rewrites, relative to the working directory.
/// The order is fixed and part of the tool's contract.
pub const ICON_PATHS: [&str; 3] = [
    "assets/icon.png",
    "assets/adaptive-icon.png",
    "assets/favicon.png",
];

/// Map an outcome to its stdout line. Missing assets produce no line.
fn outcome_line(path: &str, outcome: &FileOutcome) -> Option<String> {
    match outcome {
        FileOutcome::Converted => Some(format!("Converted {} to PNG", path)),
        FileOutcome::Failed(e) => Some(format!("Failed to convert {}: {}", path, e)),
        FileOutcome::SkippedMissing => None,
    }
}

pub fn run() {
    // Diagnostics go to stderr; stdout carries only the per-file result
    // lines. try_init so embedders with their own subscriber can still
    // call run().
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .try_init()
        .ok();

    for path_str in ICON_PATHS {
        let outcome = convert_path(Path::new(path_str));
        match outcome_line(path_str, &outcome) {
            Some(line) => println!("{}", line),
            None => debug!("missing asset, no output: {}", path_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use iconfix::Error;
    use iconfix::api::FileOutcome;

    use super::{ICON_PATHS, outcome_line, run};

    #[test]
    fn icon_paths_are_the_three_assets_in_order() {
        assert_eq!(
            ICON_PATHS,
            [
                "assets/icon.png",
                "assets/adaptive-icon.png",
                "assets/favicon.png",
            ]
        );
    }

    #[test]
    fn converted_outcome_formats_the_success_line() {
        assert_eq!(
            outcome_line("assets/icon.png", &FileOutcome::Converted).as_deref(),
            Some("Converted assets/icon.png to PNG")
        );
    }

    #[test]
    fn failed_outcome_formats_the_failure_line_with_the_error() {
        let err = Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(
            outcome_line("assets/adaptive-icon.png", &FileOutcome::Failed(err)).as_deref(),
            Some("Failed to convert assets/adaptive-icon.png: I/O error: denied")
        );
    }

    #[test]
    fn skipped_outcome_produces_no_line() {
        assert!(outcome_line("assets/favicon.png", &FileOutcome::SkippedMissing).is_none());
    }

    #[test]
    fn run_is_callable_more_than_once() {
        // No assets/ directory exists under the test cwd, so both passes
        // skip every path; the second call must not panic on subscriber
        // re-initialization.
        run();
        run();
    }
}
