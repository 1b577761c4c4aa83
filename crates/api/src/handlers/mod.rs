//! Request handlers.
//!
//! `catalog` provides the CRUD and query handlers shared by every catalog
//! entity kind; `stats` serves aggregate counts.

pub mod catalog;
pub mod stats;
