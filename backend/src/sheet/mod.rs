//! Spreadsheet codec collaborators.
//!
//! `decode` turns an uploaded delimited sheet into an ordered sequence of
//! row mappings; `encode` writes export rows into a single-sheet XLSX
//! workbook. The roster core only ever sees the row shapes, never the
//! container formats.

pub mod decode;
pub mod encode;
