//! # Marble Board Search Library
//!
//! Common functionality for the marble board search command line interface.
//! Models a toroidal 3×3 marble board and solves it with five interchangeable
//! search strategies.

use serde::{Deserialize, Serialize};

pub mod board;
pub mod io;
pub mod search;
pub mod types;

/// Represents the reasons why a solution attempt might fail.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum SearchFailure {
    BadInput(String),
    UnknownStrategy(String),
}

impl std::error::Error for SearchFailure {}

impl std::fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SearchFailure::BadInput(reason) => write!(f, "Bad input: {}", reason),
            SearchFailure::UnknownStrategy(name) => {
                write!(f, "Unknown search strategy: {}", name)
            }
        }
    }
}
