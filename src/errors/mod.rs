//! Error types and error handling for the frontend.
//!
//! This module defines the error types used throughout the analysis
//! process. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical and syntax phases
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
