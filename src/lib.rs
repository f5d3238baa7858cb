//! # Introduction
//!
//! Spiral translates a single C-style declarator into an English sentence,
//! e.g. `char* const*(*next)()` becomes
//! `next is pointer to function returning pointer to read only pointer to char`.
//! Each translation records a step-by-step trace that can be replayed forward
//! and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Translation pipeline
//!
//! ```text
//! Declarator → State machine → Fragments → Sentence
//!                     ↓
//!                   Trace → TUI
//! ```
//!
//! 1. [`translator`] — the declarator state machine: a mutable character
//!    buffer with tombstone erasure and compaction, walked by six states that
//!    peel off the outermost already-interpreted construct and emit English
//!    fragments in spiral-rule order.
//! 2. [`trace`] — ordered record of every state-machine action, one
//!    [`trace::TraceStep`] per consumed construct.
//! 3. [`ui`] — ratatui-based step-through explorer; not part of the stable
//!    library API.
//!
//! ## Supported declarator subset
//!
//! Base types: `int`, `char`, `double`, `float`, `void`, `long`, `short`,
//! `unsigned`. Qualifiers: `const`, `volatile`. Constructs: pointers,
//! arrays (dimensions discarded), functions (parameter lists discarded),
//! grouping parentheses. One declarator per call; no typedefs, no
//! struct/union/enum tags.

pub mod trace;
pub mod translator;
pub mod ui;

pub use translator::machine::{translate, ParseError};
