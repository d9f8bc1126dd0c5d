//! Error types for shape construction

use std::fmt;

use thiserror::Error;

/// A settable dimension of one of the builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Radius,
    Length,
    Breadth,
    SideA,
    SideB,
    SideC,
}

impl Field {
    /// Name of the shape kind owning this field
    pub fn shape(self) -> &'static str {
        match self {
            Field::Radius => "circle",
            Field::Length | Field::Breadth => "rectangle",
            Field::SideA | Field::SideB | Field::SideC => "triangle",
        }
    }

    /// Name of the field itself
    pub fn name(self) -> &'static str {
        match self {
            Field::Radius => "radius",
            Field::Length => "length",
            Field::Breadth => "breadth",
            Field::SideA => "side A",
            Field::SideB => "side B",
            Field::SideC => "side C",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.shape(), self.name())
    }
}

/// Shape construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A setter received a value that is not a finite positive number.
    #[error("{field} must be positive, got: {value}")]
    InvalidParameter { field: Field, value: f64 },

    /// The stored triangle sides violate the strict triangle inequality.
    #[error("triangle sides {a}, {b}, {c} do not satisfy the triangle inequality")]
    InvalidGeometry { a: f64, b: f64, c: f64 },

    /// `compute` was called before a required field was set.
    #[error("{field} was never set")]
    MissingParameter { field: Field },
}

impl ShapeError {
    /// The field involved, if the error concerns a single field
    pub fn field(&self) -> Option<Field> {
        match self {
            ShapeError::InvalidParameter { field, .. } | ShapeError::MissingParameter { field } => {
                Some(*field)
            }
            ShapeError::InvalidGeometry { .. } => None,
        }
    }
}

/// Result type for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;
