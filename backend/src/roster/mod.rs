//! Roster core.
//!
//! `normalize` canonicalizes spreadsheet headers and resolves field
//! synonyms, `ingest` turns one decoded sheet into a school with its
//! students, and `export` shapes the verified-profiles download.

pub mod export;
pub mod ingest;
pub mod normalize;
