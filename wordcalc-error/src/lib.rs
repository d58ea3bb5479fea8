//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the regions of the query it
//! originated from.
//!
//! Every error in `wordcalc` is a *reported* condition: a malformed equation, a missing operand,
//! or a division by zero is turned into a message for the user, never a panic. The same error
//! can be rendered two ways:
//!
//! - as a single line of text through its [`Display`](std::fmt::Display) implementation
//! (`Error: Division by zero`), which is what query responses contain, or
//! - as an [`ariadne`] report that highlights the offending spans of the query, which is what the
//! REPL prints to stderr.

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

#[cfg(test)]
extern crate self as wordcalc_error;

/// Highlight color for math written inside error messages.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while interpreting a query.
pub trait ErrorKind: Debug + Send + Sync {
    /// The message describing the error, without any styling.
    fn message(&self) -> String;

    /// Optional help text describing what the user can do to fix the error.
    fn help(&self) -> Option<String>;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;

    /// Returns this error kind as [`Any`], so that callers can check which kind of error
    /// occurred.
    fn as_any(&self) -> &dyn Any;
}

/// A reported condition, with the byte ranges of the query it concerns.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. This can be empty if the
    /// error is not associated with any particular part of the query.
    pub spans: Vec<Range<usize>>,

    /// What went wrong.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Pairs an error kind with the spans it points at.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any part of the source.
    pub fn spanless(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Shifts every span of this error by the given amount.
    ///
    /// Sub-parsers work on slices of the query; their errors are shifted back into the
    /// coordinates of the full query with this method.
    pub fn offset(mut self, by: usize) -> Self {
        for span in &mut self.spans {
            *span = span.start + by..span.end + by;
        }
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Builds the ariadne report of this error, labelling each span.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.kind.message())?;
        if let Some(help) = self.kind.help() {
            write!(f, " {}", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
