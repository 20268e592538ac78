//! Browser start-up errors

use std::fmt;

/// Failure to find or prepare the drawing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// No global `window`
    NoWindow,
    /// Window without a document
    NoDocument,
    /// No element with this id
    MissingElement(String),
    /// Element exists but is not a `<canvas>`
    NotACanvas(String),
    /// Canvas refused a 2D context
    NoContext2d,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::MissingElement(id) => write!(f, "element #{id} not found"),
            Self::NotACanvas(id) => write!(f, "element #{id} is not a canvas"),
            Self::NoContext2d => write!(f, "2d canvas context not available"),
        }
    }
}

impl std::error::Error for InitError {}
