//! Bind enumeration tables to configuration records.
//!
//! Four access modes over one canonical resolution path, differentiated by
//! two orthogonal axes: whether an absent key is tolerated, and whether an
//! unresolvable name is tolerated. Absence is routinely optional (defaults
//! apply); a present entry spelling an unrecognized name is almost always a
//! user typo and fails loudly — except under the explicit
//! [`Policy::Failsafe`] mode meant for backward-compatibility transitions.
//!
//! A malformed token count (anything other than exactly one token) is fatal
//! in every mode; it is a parse error, not a vocabulary miss.

use crate::errors::EnumTableError;
use crate::record::Record;
use crate::table::EnumTable;

/// Error policy for unresolvable names in [`EnumTable::get_or_default`].
///
/// ## Notes
/// - [`Policy::Strict`] fails fatally on an unrecognized spelling.
/// - [`Policy::Failsafe`] downgrades it to a warning plus the fallback
///   value; intended for transitions where old configs may still carry a
///   retired spelling. Each bad read warns again — there is no dedup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Fail fatally when a present entry spells an unrecognized name.
    Strict,
    /// Warn and return the fallback value instead of failing.
    Failsafe,
}

impl<V: PartialEq + Clone> EnumTable<V> {
    /// One token for `key`, or `None` if the entry is absent.
    ///
    /// Fails on any token count other than exactly one.
    fn entry_token<'r>(
        &self,
        key: &str,
        record: &'r impl Record,
    ) -> Result<Option<&'r str>, EnumTableError> {
        match record.lookup(key) {
            None => Ok(None),
            Some([token]) => Ok(Some(token.as_str())),
            Some(tokens) => Err(EnumTableError::BadTokenCount {
                key: key.to_string(),
                found: tokens.len(),
            }),
        }
    }

    fn invalid_value(&self, key: &str, text: &str) -> EnumTableError {
        EnumTableError::InvalidEnumValue {
            key: key.to_string(),
            text: text.to_string(),
            valid: self.sorted_names_owned(),
        }
    }

    /// Read the mandatory entry `key` and resolve it to a value.
    ///
    /// ## Returns
    /// - `Err(MissingRequiredEntry)` if the key is absent.
    /// - `Err(InvalidEnumValue)` if the entry's text matches no registered
    ///   name (the error lists all valid names, sorted).
    /// - `Err(BadTokenCount)` if the entry is not exactly one token.
    ///
    /// ## Examples
    /// ```rust
    /// use nametable::{EnumTable, MapRecord};
    ///
    /// let levels = EnumTable::new([(0u8, "low"), (1, "medium"), (2, "high")]);
    /// let mut rec = MapRecord::new();
    /// rec.set("level", "medium");
    ///
    /// assert_eq!(levels.require("level", &rec).unwrap(), 1);
    /// assert!(levels.require("missing", &rec).is_err());
    /// ```
    pub fn require(&self, key: &str, record: &impl Record) -> Result<V, EnumTableError> {
        match self.entry_token(key, record)? {
            None => Err(EnumTableError::MissingRequiredEntry {
                key: key.to_string(),
            }),
            Some(text) => self
                .find_name(text)
                .map(|i| self.values()[i].clone())
                .ok_or_else(|| self.invalid_value(key, text)),
        }
    }

    /// Read the entry `key` if present, falling back to `fallback` when
    /// absent.
    ///
    /// ## Returns
    /// - `Ok(fallback)` silently when the key is absent.
    /// - On an unresolvable name: `Err(InvalidEnumValue)` under
    ///   [`Policy::Strict`]; a `tracing` warning plus `Ok(fallback)` under
    ///   [`Policy::Failsafe`].
    /// - `Err(BadTokenCount)` for a malformed entry, regardless of policy.
    pub fn get_or_default(
        &self,
        key: &str,
        record: &impl Record,
        fallback: V,
        policy: Policy,
    ) -> Result<V, EnumTableError> {
        let Some(text) = self.entry_token(key, record)? else {
            return Ok(fallback);
        };
        match self.find_name(text) {
            Some(i) => Ok(self.values()[i].clone()),
            None => match policy {
                Policy::Strict => Err(self.invalid_value(key, text)),
                Policy::Failsafe => {
                    tracing::warn!(
                        key,
                        text,
                        valid = self.sorted_names().join(" "),
                        "unrecognized enumeration name, using fallback"
                    );
                    Ok(fallback)
                }
            },
        }
    }

    /// Read the entry `key` into `value`.
    ///
    /// ## Returns
    /// - `Ok(true)` and assigns `value` when the entry resolves.
    /// - Absent key: `Err(MissingRequiredEntry)` if `mandatory`, otherwise
    ///   `Ok(false)` with `value` untouched.
    /// - Present but unresolvable: `Err(InvalidEnumValue)` — always fatal,
    ///   there is no failsafe variant of this path.
    pub fn read_entry(
        &self,
        key: &str,
        record: &impl Record,
        value: &mut V,
        mandatory: bool,
    ) -> Result<bool, EnumTableError> {
        match self.entry_token(key, record)? {
            None if mandatory => Err(EnumTableError::MissingRequiredEntry {
                key: key.to_string(),
            }),
            None => Ok(false),
            Some(text) => match self.find_name(text) {
                Some(i) => {
                    *value = self.values()[i].clone();
                    Ok(true)
                }
                None => Err(self.invalid_value(key, text)),
            },
        }
    }

    /// Read the entry `key` into `value` if present.
    ///
    /// Same as [`read_entry`](Self::read_entry) with `mandatory = false`.
    pub fn read_if_present(
        &self,
        key: &str,
        record: &impl Record,
        value: &mut V,
    ) -> Result<bool, EnumTableError> {
        self.read_entry(key, record, value, false)
    }
}
