use crate::{
    dispatch::{evaluate, Answer},
    fmt::FormatOptions,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A query and the response it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    /// The query as the user typed it.
    pub query: String,

    /// The response shown for the query.
    pub response: String,
}

/// The state of an interactive session: the formatting options in use and every query answered
/// so far.
///
/// Evaluation itself is stateless; a session only records what was asked.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,

    /// The formatting options used to answer queries.
    pub options: FormatOptions,
}

impl Session {
    /// Creates a session that answers queries with the given formatting options.
    pub fn new(options: FormatOptions) -> Self {
        Self { history: Vec::new(), options }
    }

    /// Answers a query and appends it to the history.
    ///
    /// Blank queries are ignored and return [`None`].
    pub fn submit(&mut self, raw: &str) -> Option<Answer> {
        if raw.trim().is_empty() {
            return None;
        }

        let answer = evaluate(raw, &self.options);
        self.history.push(HistoryEntry {
            query: raw.to_string(),
            response: answer.response(),
        });
        Some(answer)
    }

    /// Returns every query answered so far, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
