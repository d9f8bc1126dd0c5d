//! Shape factory - named construction intents
//!
//! Every function allocates the matching builder, applies its setters in a
//! fixed order so that all required fields are present, and computes. Errors
//! from setters or `compute` are returned unchanged.

use crate::{CircleBuilder, RectangleBuilder, Shape, ShapeFloat, ShapeResult, TriangleBuilder};

/// Stateless shape factory
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn create_circle<F: ShapeFloat>(radius: F) -> ShapeResult<Shape<F>> {
        CircleBuilder::new().set_radius(radius)?.compute()
    }

    pub fn create_rectangle<F: ShapeFloat>(length: F, breadth: F) -> ShapeResult<Shape<F>> {
        RectangleBuilder::new()
            .set_length(length)?
            .set_breadth(breadth)?
            .compute()
    }

    /// Rectangle with `length == breadth == side`
    pub fn create_square<F: ShapeFloat>(side: F) -> ShapeResult<Shape<F>> {
        RectangleBuilder::new()
            .set_length(side)?
            .set_breadth(side)?
            .compute()
    }

    pub fn create_triangle<F: ShapeFloat>(a: F, b: F, c: F) -> ShapeResult<Shape<F>> {
        TriangleBuilder::new()
            .set_side_a(a)?
            .set_side_b(b)?
            .set_side_c(c)?
            .compute()
    }

    /// Triangle with sides A and B equal to `equal_side`, C to `other_side`
    pub fn create_isosceles_triangle<F: ShapeFloat>(
        equal_side: F,
        other_side: F,
    ) -> ShapeResult<Shape<F>> {
        Self::create_triangle(equal_side, equal_side, other_side)
    }

    pub fn create_equilateral_triangle<F: ShapeFloat>(side: F) -> ShapeResult<Shape<F>> {
        Self::create_triangle(side, side, side)
    }
}
