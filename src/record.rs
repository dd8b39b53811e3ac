//! Configuration-record boundary interface.
//!
//! The hierarchical configuration store itself lives elsewhere; this module
//! defines only the seam the table consumes: lookup-by-key returning a token
//! sequence. A simple in-memory [`MapRecord`] is provided for call sites
//! that assemble records programmatically, and for tests.

use std::collections::HashMap;

/// A key-value configuration record, consumed one entry at a time.
///
/// ## Notes
/// - Keys match **literally** (no patterns, no recursion); hierarchical or
///   pattern-based resolution is the store's concern, not this trait's.
/// - An entry is a sequence of whitespace-delimited tokens; for enumeration
///   entries exactly one token is expected, and the table validates that
///   count on every binding read.
pub trait Record {
    /// Token sequence for `key`, or `None` if the entry is absent.
    fn lookup(&self, key: &str) -> Option<&[String]>;
}

/// A flat in-memory record backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MapRecord {
    entries: HashMap<String, Vec<String>>,
}

impl MapRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a single-token entry.
    pub fn set(&mut self, key: impl Into<String>, token: impl Into<String>) {
        self.entries.insert(key.into(), vec![token.into()]);
    }

    /// Set `key` to an arbitrary token sequence.
    pub fn set_tokens<T>(&mut self, key: impl Into<String>, tokens: impl IntoIterator<Item = T>)
    where
        T: Into<String>,
    {
        self.entries
            .insert(key.into(), tokens.into_iter().map(Into::into).collect());
    }

    /// Remove `key`, if present.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl Record for MapRecord {
    fn lookup(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}
