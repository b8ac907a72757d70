//! Qualifying Engine for gymnastics hubs
//!
//! This crate decides which qualifying badge (state, regional or national) a
//! gymnast's score earns, given the meet it was earned at and the hub's
//! per-gender, per-level threshold table.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod qualifying;
pub mod telemetry;
