//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Error taxonomy (CollapseError)
//! - Title manifest parsing
//! - Corpus and document path derivation
//! - Run summary model and rendering
//! - Hashing utilities

pub mod error;
pub mod manifest;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
