//! C declarator translator
//!
//! This module turns a declarator string into an English sentence:
//! - [`scanner`]: character classification, word extraction, keyword lookup
//! - [`buffer`]: the mutable declaration buffer (tombstone erase + compact)
//! - [`machine`]: the six-state machine driving the translation
//!
//! # Algorithm
//!
//! The machine repeatedly identifies and removes the outermost
//! already-interpreted construct from the buffer, alternating between the
//! right side and the left side of the declared name (the "spiral rule"),
//! until only the base type remains:
//!
//! ```text
//! S1 find name → S2 [] suffix → S3 () suffix → S4 grouping ( ) ⇄ S5 * / const / volatile → S6 base type
//! ```
//!
//! Hand-written state handlers over a character buffer; no external parser
//! dependencies.

pub mod buffer;
pub mod machine;
pub mod scanner;
