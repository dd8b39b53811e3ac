//! Error taxonomy for table lookup, configuration binding, and token I/O.
//!
//! Every failure here is fatal at the point it is raised: lookups are pure
//! and deterministic, so there is nothing to retry. Callers that want a
//! non-failing path use the explicit fallback APIs
//! ([`EnumTable::value_or`](crate::EnumTable::value_or),
//! [`EnumTable::get_or_default`](crate::EnumTable::get_or_default) with
//! [`Policy::Failsafe`](crate::Policy::Failsafe)) instead of catching these.
//!
//! ## Notes
//! - Messages carry the full diagnostic context (offending name/key, raw
//!   text, sorted valid-name list) so a user can self-correct without
//!   consulting documentation.

use thiserror::Error;

/// Errors raised by [`EnumTable`](crate::EnumTable) lookups, binding, and
/// stream reads.
#[derive(Debug, Error)]
pub enum EnumTableError {
    /// A forward (name → value) lookup found no match.
    #[error("unknown enumeration name {name:?}; valid names are: {}", .valid.join(" "))]
    UnknownEnumName {
        /// The name that failed to resolve.
        name: String,
        /// All registered names, lexicographically sorted.
        valid: Vec<String>,
    },

    /// A mandatory configuration key was absent from the record.
    #[error("missing required entry {key:?}")]
    MissingRequiredEntry {
        /// The configuration key that was required.
        key: String,
    },

    /// A configuration entry is present but its text resolves to no
    /// registered name.
    #[error("entry {key:?} has invalid value {text:?}; valid names are: {}", .valid.join(" "))]
    InvalidEnumValue {
        /// The configuration key holding the bad entry.
        key: String,
        /// The raw offending text.
        text: String,
        /// All registered names, lexicographically sorted.
        valid: Vec<String>,
    },

    /// A configuration entry holds the wrong number of tokens.
    ///
    /// Always fatal, in every binding mode.
    #[error("entry {key:?} has {found} tokens where exactly 1 is expected")]
    BadTokenCount {
        /// The configuration key holding the malformed entry.
        key: String,
        /// The token count actually found.
        found: usize,
    },

    /// A token read from a stream resolves to no registered name.
    #[error("bad token {text:?} at {context}; valid names are: {}", .valid.join(" "))]
    TokenParse {
        /// The raw token text.
        text: String,
        /// Stream position context (e.g. `"line 3"`).
        context: String,
        /// All registered names, lexicographically sorted.
        valid: Vec<String>,
    },

    /// The stream ended where a token was required.
    #[error("unexpected end of input at {context}; expected an enumeration name")]
    UnexpectedEof {
        /// Stream position context at EOF.
        context: String,
    },

    /// The underlying stream failed.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}
