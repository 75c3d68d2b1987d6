//! Core types shared by the Kelp JavaScript parser components.
//!
//! This crate provides the foundational types for the parser,
//! including syntax errors and source location tracking.
//!
//! # Overview
//!
//! - [`SyntaxError`] - A fatal grammar or lexical error
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use core_types::{SyntaxError, SourcePosition};
//!
//! let error = SyntaxError::new(
//!     "expected '(' instead of EOF in if statement",
//!     Some(SourcePosition { line: 1, column: 3, offset: 2 }),
//! );
//!
//! assert_eq!(error.to_string(), "expected '(' instead of EOF in if statement");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::SyntaxError;
pub use source::SourcePosition;
