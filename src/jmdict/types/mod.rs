//! Foundational data structures, error types, and classification vocabularies.

pub mod error;
pub mod models;
pub mod priority;
pub mod vocabulary;
