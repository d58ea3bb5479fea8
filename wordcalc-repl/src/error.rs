use ariadne::Source;
use wordcalc_compute::{error::Error, Answer};

/// The name the query is given in reports.
const SOURCE_ID: &str = "query";

/// Report the error of an answer to stderr, highlighting the parts of the query it points at.
///
/// Errors without spans have nothing to highlight, so they are printed as a single line, the same
/// way they appear in the history.
pub fn report_to_stderr(answer: &Answer, err: &Error) {
    if err.spans.is_empty() {
        eprintln!("{}", err);
        return;
    }

    // the spans point into the normalized query, not the one the user typed
    let report = err.build_report(SOURCE_ID);
    if let Err(io_err) = report.eprint((SOURCE_ID, Source::from(answer.normalized.as_str()))) {
        eprintln!("{}", err);
        tracing::warn!(%io_err, "could not print error report");
    }
}
