#![forbid(unsafe_code)]

//! Headless text pipeline for LLM-assisted Mermaid editing.
//!
//! Design goals:
//! - pure, synchronous, total functions (generated text is untrusted; a bad
//!   diagram must never turn into a crash)
//! - position-independent cleanup (two-pass scan, no forward lookahead)
//! - deterministic, testable outputs
//!
//! The pipeline runs after a generation call, in order: strip markdown code
//! fences, then repair the class-statement misuse models introduce. The
//! generation call itself lives in `selkie`; the HTTP surface in
//! `merrow-server`.

pub mod fence;
pub mod prompt;
pub mod sanitize;

pub use fence::strip_code_fences;
pub use prompt::{BAD_INSTRUCTIONS, SYSTEM_MODIFY_PROMPT, is_refusal, modify_user_message};
pub use sanitize::clean_invalid_class_statements;
