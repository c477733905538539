//! Shared types and utilities for valleytext keyword extraction.
//!
//! This crate holds the leaf types used across the workspace and carries no
//! engine logic:
//!
//! - [`extract`] -- The labeled span type produced by a scan
//! - [`case`] -- Case folding for keywords and scanned text
//! - [`vocabulary`] -- Vocabulary input shapes and boundary validation

pub mod case;
pub mod extract;
pub mod vocabulary;

pub use extract::KeywordMatch;
pub use vocabulary::{Vocabulary, VocabularyError};
