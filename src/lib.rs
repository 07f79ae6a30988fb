//! Warisan Malaysia - Heritage Catalogue Engagement Core
//!
//! This crate implements the non-presentational core of a cultural heritage
//! tourism application: a static catalogue of sites and stories, local
//! account management, per-account favorites, a global comment log, and a
//! pure filter/search engine over the catalogue.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
