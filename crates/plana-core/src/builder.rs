//! Shape builders - accumulate raw dimensions, then compute
//!
//! Each setter validates its value on the spot and returns `&mut Self`, so
//! setters chain with `?`. `compute` checks that every required field was
//! set, validates cross-field invariants, and produces a [`Shape`].
//!
//! ```rust
//! use plana_core::{ShapeResult, TriangleBuilder};
//!
//! fn right_triangle() -> ShapeResult<f64> {
//!     let shape = TriangleBuilder::new()
//!         .set_side_a(3.0)?
//!         .set_side_b(4.0)?
//!         .set_side_c(5.0)?
//!         .compute()?;
//!     Ok(shape.area())
//! }
//!
//! assert_eq!(right_triangle().unwrap(), 6.0);
//! ```

use tracing::{trace, warn};

use crate::{
    CircleDims, Field, RectangleDims, Shape, ShapeError, ShapeFloat, ShapeKind, ShapeResult,
    TriangleDims,
};

/// Accept `value` for `field` if it is finite and strictly positive
fn check_dimension<F: ShapeFloat>(field: Field, value: F) -> ShapeResult<F> {
    if value.is_valid_dimension() {
        trace!(%field, %value, "dimension accepted");
        Ok(value)
    } else {
        warn!(%field, %value, "dimension rejected");
        Err(ShapeError::InvalidParameter {
            field,
            value: value.to_diagnostic(),
        })
    }
}

/// Unwrap a stored dimension or report it as never set
fn require<F: ShapeFloat>(field: Field, value: Option<F>) -> ShapeResult<F> {
    value.ok_or(ShapeError::MissingParameter { field })
}

/// Builder for circles
#[derive(Clone, Copy, Debug, Default)]
pub struct CircleBuilder<F> {
    radius: Option<F>,
}

impl<F: ShapeFloat> CircleBuilder<F> {
    pub fn new() -> Self {
        CircleBuilder { radius: None }
    }

    pub fn set_radius(&mut self, radius: F) -> ShapeResult<&mut Self> {
        self.radius = Some(check_dimension(Field::Radius, radius)?);
        Ok(self)
    }

    /// Derive area `π·r²` and perimeter `2π·r`
    pub fn compute(&self) -> ShapeResult<Shape<F>> {
        let radius = require(Field::Radius, self.radius)?;
        Shape::measure(ShapeKind::Circle(CircleDims { radius }))
    }
}

/// Builder for rectangles and squares
#[derive(Clone, Copy, Debug, Default)]
pub struct RectangleBuilder<F> {
    length: Option<F>,
    breadth: Option<F>,
}

impl<F: ShapeFloat> RectangleBuilder<F> {
    pub fn new() -> Self {
        RectangleBuilder {
            length: None,
            breadth: None,
        }
    }

    pub fn set_length(&mut self, length: F) -> ShapeResult<&mut Self> {
        self.length = Some(check_dimension(Field::Length, length)?);
        Ok(self)
    }

    pub fn set_breadth(&mut self, breadth: F) -> ShapeResult<&mut Self> {
        self.breadth = Some(check_dimension(Field::Breadth, breadth)?);
        Ok(self)
    }

    /// Set length and breadth to the same value (square)
    pub fn set_side(&mut self, side: F) -> ShapeResult<&mut Self> {
        self.set_length(side)?.set_breadth(side)
    }

    /// Derive area `l·b` and perimeter `2(l+b)`
    pub fn compute(&self) -> ShapeResult<Shape<F>> {
        let length = require(Field::Length, self.length)?;
        let breadth = require(Field::Breadth, self.breadth)?;
        Shape::measure(ShapeKind::Rectangle(RectangleDims { length, breadth }))
    }
}

/// Builder for triangles given by their three sides.
///
/// See [`TriangleDims`] for the precision of the area on near-degenerate
/// inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangleBuilder<F> {
    a: Option<F>,
    b: Option<F>,
    c: Option<F>,
}

impl<F: ShapeFloat> TriangleBuilder<F> {
    pub fn new() -> Self {
        TriangleBuilder {
            a: None,
            b: None,
            c: None,
        }
    }

    pub fn set_side_a(&mut self, a: F) -> ShapeResult<&mut Self> {
        self.a = Some(check_dimension(Field::SideA, a)?);
        Ok(self)
    }

    pub fn set_side_b(&mut self, b: F) -> ShapeResult<&mut Self> {
        self.b = Some(check_dimension(Field::SideB, b)?);
        Ok(self)
    }

    pub fn set_side_c(&mut self, c: F) -> ShapeResult<&mut Self> {
        self.c = Some(check_dimension(Field::SideC, c)?);
        Ok(self)
    }

    /// Set all three sides, in order A, B, C
    pub fn set_sides(&mut self, a: F, b: F, c: F) -> ShapeResult<&mut Self> {
        self.set_side_a(a)?.set_side_b(b)?.set_side_c(c)
    }

    /// Check the triangle inequality, then derive the area by Heron's
    /// formula and the perimeter `a+b+c`
    pub fn compute(&self) -> ShapeResult<Shape<F>> {
        let a = require(Field::SideA, self.a)?;
        let b = require(Field::SideB, self.b)?;
        let c = require(Field::SideC, self.c)?;
        Shape::measure(ShapeKind::Triangle(TriangleDims { a, b, c }))
    }
}
