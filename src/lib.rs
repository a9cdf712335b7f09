//! CSV column editing and batch model scoring.
//!
//! Two independent utilities share the in-memory [`table::model::Table`]:
//!
//! * the **column editor** ([`table::edit`]) clears or deletes named columns
//!   of a CSV file, optionally rewriting it in place;
//! * the **inference runner** ([`runner`]) coerces CSV rows to a fixed
//!   [`schema::Schema`], hands the sanitized batch to a [`model::Model`],
//!   and writes the rows back with two prediction columns appended.
//!
//! Everything is single-pass and synchronous: the whole input file is read
//! into memory before any output is written, so input and output paths may
//! be the same file.

pub mod model;
pub mod runner;
pub mod sanitize;
pub mod schema;
pub mod table;
