#![forbid(unsafe_code)]
//! Symbolic enumeration tables for configuration-driven programs.
//!
//! An [`EnumTable`] is a closed, ordered association between a fixed set of
//! typed enumeration values and their human-readable names. It is the seam
//! that lets users select algorithm variants and options *by name* in text
//! configuration while the rest of the program works with compact typed
//! values: forward lookup (name → value), reverse lookup (value → canonical
//! name), binding against a configuration record, and token-level stream
//! I/O, all with precise fail-fast diagnostics.
//!
//! The design goal is to avoid stringly-typed option checks scattered across
//! a codebase. Each enumeration type gets one table, built once (typically
//! in a `static`), and every parse site goes through it.
//!
//! ## Panic Policy
//!
//! Fallible lookups return `Result` ([`EnumTableError`]) and propagate with
//! `?`. The only panicking surface is the `table["name"]` index operator,
//! which has the same contract as `HashMap` indexing: an unknown name there
//! is a programming error, and the panic message carries the same
//! diagnostic the `Err` would.
//!
//! ## Examples
//! ```rust
//! use nametable::{EnumTable, MapRecord, Policy};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Limiter { None, Minmod, Vanleer }
//!
//! let limiters = EnumTable::new([
//!     (Limiter::None, "none"),
//!     (Limiter::Minmod, "minmod"),
//!     (Limiter::Vanleer, "vanLeer"),
//!     (Limiter::Vanleer, "van-leer"), // deprecated alias
//! ]);
//!
//! let mut rec = MapRecord::new();
//! rec.set("limiter", "van-leer");
//!
//! assert_eq!(limiters.require("limiter", &rec).unwrap(), Limiter::Vanleer);
//! assert_eq!(limiters.name_of(&Limiter::Vanleer), "vanLeer"); // canonical
//! let fallback = limiters
//!     .get_or_default("missing", &rec, Limiter::None, Policy::Strict)
//!     .unwrap();
//! assert_eq!(fallback, Limiter::None);
//! ```

pub mod bind;
pub mod errors;
pub mod record;
pub mod stream;
pub mod table;

pub use bind::Policy;
pub use errors::EnumTableError;
pub use record::{MapRecord, Record};
pub use stream::{TokenRead, TokenReader, TokenWrite, TokenWriter};
pub use table::EnumTable;
