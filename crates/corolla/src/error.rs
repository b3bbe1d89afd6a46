//! Error types for corolla operations.
//!
//! This module provides the main error type [`CorollaError`] which wraps
//! the error conditions that can occur while loading and rendering a
//! concept map. Layout computation and position queries never error by
//! contract; only parsing, validation, and export do.

use std::io;

use thiserror::Error;

/// The main error type for corolla operations.
#[derive(Debug, Error)]
pub enum CorollaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed concept map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for CorollaError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
