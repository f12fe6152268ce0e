use std::fmt;

/// Error types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// Box edge length must be positive
    InvalidBoxEdge(f64),
    /// Cutoff must be positive and no larger than half the box edge;
    /// beyond that a pair interacts with multiple periodic images at once
    InvalidCutoff { cutoff: f64, edge: f64 },
    /// Two particles (nearly) coincide, so force and potential are undefined
    DegenerateConfiguration { i: usize, j: usize },
    /// Input and output buffer lengths disagree
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBoxEdge(edge) => {
                write!(f, "Box edge length should be positive, found {}", edge)
            }
            Error::InvalidCutoff { cutoff, edge } => write!(
                f,
                "Cutoff {} should be positive and at most half the box edge {}",
                cutoff, edge
            ),
            Error::DegenerateConfiguration { i, j } => {
                write!(f, "Particles {} and {} coincide", i, j)
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "Expected buffer of length {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for Error {}
