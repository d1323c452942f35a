//! # Folio Common Library
//!
//! Shared code for the Folio content pipeline including:
//! - Permissive CSV tokenizer and table reader
//! - Field coercion and header-alias resolution
//! - Output document model
//! - Build diagnostics collector
//! - Configuration loading
//! - Read-only document store for the presentation layer

pub mod coerce;
pub mod config;
pub mod csv;
pub mod diag;
pub mod documents;
pub mod error;
pub mod fields;
pub mod store;

pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
