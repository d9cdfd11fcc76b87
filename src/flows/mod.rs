//! Flows module - End-to-end pipelines built on the core primitives
//!
//! - collapse: flatten a document directory into a single corpus file

pub mod collapse;
