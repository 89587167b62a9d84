//! Reqbook Library
//!
//! This library provides the configuration model, canonical catalogs,
//! multi-sheet workbook import/export and reconciliation used to persist and
//! restore project requirement selections (business rules, actions &
//! interactions, animation effects, design guidelines).

// Module declarations
pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod reconcile;
pub mod services;
pub mod workbook;

#[cfg(feature = "web")]
pub mod web;
