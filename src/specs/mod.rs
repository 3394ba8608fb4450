// src/specs/mod.rs
//! # Page specs
//!
//! One module per page type on the directory site. Each knows *where the data
//! lives in the HTML* and how to pull it out; none of them decides when to
//! fetch the next page or where results go (that is `scrape` and `runner`).
//!
//! - `listing`: a directory listing page → ordered summary entries.
//! - `detail`: an entity's detail page → a keyed record, normalizers applied.
//!
//! Markup signatures (class lists) live in `config::consts`. Both specs are
//! tolerant: a missing element degrades the result instead of failing it.
//! Specs are tested offline against inline HTML fixtures.
pub mod detail;
pub mod listing;
