//! Catalog Query Pipeline
//!
//! Filter, then sort, then bound — each stage a pure function over the
//! immutable catalog snapshot.

pub mod filter;
pub mod sort;
pub mod view;
