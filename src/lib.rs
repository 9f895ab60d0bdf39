//! Vacation Analysis Engine
//!
//! This crate turns loosely-typed vacation spreadsheet rows into validated
//! records, then filters them, detects same-department overlaps and builds
//! department, weekly and global aggregates. An axum adapter exposes the
//! pipeline over HTTP.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
