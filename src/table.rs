//! Define the symbolic enumeration table and its lookup engine.
//!
//! An [`EnumTable`] is the single source of truth for one enumeration's textual
//! vocabulary: an ordered list of names and an index-aligned list of values,
//! built once and never mutated afterward.
//!
//! ## Notes
//! - Lookup is **case-sensitive**; names are opaque identifier strings (no
//!   trimming or normalization).
//! - Duplicate values are permitted (aliases); duplicate names are permitted
//!   but only the first occurrence is ever reachable.
//! - Lookups are O(N) linear scans from index 0. N is expected to be tens of
//!   entries, so first-match scanning beats any index structure in practice.
//!
//! ## Examples
//! ```rust
//! use nametable::EnumTable;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Level { Low, Medium, High }
//!
//! let levels = EnumTable::new([
//!     (Level::Low, "low"),
//!     (Level::Medium, "medium"),
//!     (Level::High, "high"),
//! ]);
//!
//! assert_eq!(levels.value_of("medium").unwrap(), Level::Medium);
//! assert_eq!(levels.name_of(&Level::High), "high");
//! ```

use std::ops::Index;

use crate::errors::EnumTableError;

/// An immutable association between enumeration values and their names.
///
/// ## Notes
/// - Construction order is preserved exactly and is the order used for
///   iteration, name listings, and first-match tie-breaks.
/// - The first-registered name for a value is its **canonical** name; later
///   names for the same value are aliases.
/// - Tables are typically built once per enumeration type, at static-init
///   time, via [`std::sync::LazyLock`].
///
/// ## Examples
/// ```rust
/// use std::sync::LazyLock;
/// use nametable::EnumTable;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Mode { Fast, Exact }
///
/// static MODES: LazyLock<EnumTable<Mode>> = LazyLock::new(|| {
///     EnumTable::new([
///         (Mode::Fast, "fast"),
///         (Mode::Exact, "exact"),
///         (Mode::Exact, "accurate"), // deprecated alias
///     ])
/// });
///
/// assert_eq!(MODES.value_of("accurate").unwrap(), Mode::Exact);
/// assert_eq!(MODES.name_of(&Mode::Exact), "exact"); // canonical, not the alias
/// ```
#[derive(Debug, Clone)]
pub struct EnumTable<V> {
    names: Vec<String>,
    values: Vec<V>,
}

impl<V: PartialEq + Clone> EnumTable<V> {
    /// Build a table from `(value, name)` pairs, preserving order.
    ///
    /// ## Notes
    /// - Duplicates are **not** rejected: duplicate values are legitimate
    ///   aliases, duplicate names are accepted but unreachable after the
    ///   first occurrence.
    pub fn new<N>(pairs: impl IntoIterator<Item = (V, N)>) -> Self
    where
        N: Into<String>,
    {
        let mut names = Vec::new();
        let mut values = Vec::new();
        for (value, name) in pairs {
            values.push(value);
            names.push(name.into());
        }
        Self { names, values }
    }

    /// Number of name/value pairs.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names, in construction order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All values, in construction order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterate `(name, value)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.names.iter().map(String::as_str).zip(self.values.iter())
    }

    /// Names sorted lexicographically, independent of table order.
    ///
    /// ## Notes
    /// - Used for diagnostic listings ("valid names are: ..."), never for
    ///   lookup; tie-breaks always follow construction order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.names.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// Sorted names as owned strings, for embedding in error values.
    pub(crate) fn sorted_names_owned(&self) -> Vec<String> {
        let mut sorted = self.names.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Index of the first entry named `name`, if any.
    pub fn find_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Index of the first entry holding `value`, if any.
    ///
    /// ## Notes
    /// - This is the tie-break behind reverse lookup: the first-registered
    ///   name for a value is canonical for display.
    pub fn find_value(&self, value: &V) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Whether any entry is named `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_name(name).is_some()
    }

    /// Whether any entry holds `value`.
    pub fn contains_value(&self, value: &V) -> bool {
        self.find_value(value).is_some()
    }

    /// Canonical name for `value`, or `""` if the value has no entry.
    ///
    /// ## Notes
    /// - Deliberately non-failing: not every value of the underlying type is
    ///   required to be a named case (sentinel/internal states), so reverse
    ///   lookup failure is not exceptional.
    pub fn name_of(&self, value: &V) -> &str {
        match self.find_value(value) {
            Some(i) => &self.names[i],
            None => "",
        }
    }

    /// Value registered under `name`.
    ///
    /// ## Returns
    /// - `Err(EnumTableError::UnknownEnumName)` if no entry matches; the
    ///   error carries the attempted name and the sorted valid-name list.
    ///
    /// ## Notes
    /// - Forward lookup failure has no safe default, so it must never
    ///   silently produce a zero/garbage value.
    pub fn value_of(&self, name: &str) -> Result<V, EnumTableError> {
        match self.find_name(name) {
            Some(i) => Ok(self.values[i].clone()),
            None => Err(EnumTableError::UnknownEnumName {
                name: name.to_string(),
                valid: self.sorted_names_owned(),
            }),
        }
    }

    /// Value registered under `name`, or `fallback` if no entry matches.
    pub fn value_or(&self, name: &str, fallback: V) -> V {
        match self.find_name(name) {
            Some(i) => self.values[i].clone(),
            None => fallback,
        }
    }

    /// Alias for [`value_of`](Self::value_of).
    pub fn by_name(&self, name: &str) -> Result<V, EnumTableError> {
        self.value_of(name)
    }

    /// Alias for [`name_of`](Self::name_of).
    pub fn by_value(&self, value: &V) -> &str {
        self.name_of(value)
    }

    /// Alias for [`value_or`](Self::value_or).
    pub fn get_or(&self, name: &str, fallback: V) -> V {
        self.value_or(name, fallback)
    }
}

/// Index by name, panicking on unknown names.
///
/// ## Notes
/// - Identical contract to [`EnumTable::value_of`], surfaced as an operator
///   for call sites where an unknown name is a programming error (the panic
///   message is the same diagnostic the `Err` would carry).
impl<V: PartialEq + Clone> Index<&str> for EnumTable<V> {
    type Output = V;

    fn index(&self, name: &str) -> &V {
        match self.find_name(name) {
            Some(i) => &self.values[i],
            None => panic!(
                "{}",
                EnumTableError::UnknownEnumName {
                    name: name.to_string(),
                    valid: self.sorted_names_owned(),
                }
            ),
        }
    }
}
