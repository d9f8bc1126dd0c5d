//! Shape kinds and their closed-form measurements
//!
//! plana models shapes as a tagged variant rather than a trait-object
//! hierarchy:
//! - Circle: radius
//! - Rectangle: length and breadth (a square has both equal)
//! - Triangle: three sides (isosceles and equilateral are special cases)
//!
//! Each dimension record implements [`Measure`], which splits measurement
//! into cross-field validation and formula derivation. [`ShapeKind::measure`]
//! is the single dispatch point over the tag.

use tracing::warn;

use crate::{ShapeError, ShapeFloat, ShapeResult};

/// The two derived scalars of a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics<F> {
    pub area: F,
    pub perimeter: F,
}

/// Validation and derivation for one kind of shape.
///
/// Individual dimensions are already known to be finite and positive when a
/// record exists; `validate` only checks invariants spanning several fields.
pub trait Measure<F: ShapeFloat> {
    /// Check cross-field invariants
    fn validate(&self) -> ShapeResult<()>;

    /// Apply the closed-form formulas. Only meaningful after `validate`.
    fn derive(&self) -> Metrics<F>;

    /// Validate, then derive
    fn measure(&self) -> ShapeResult<Metrics<F>> {
        self.validate()?;
        Ok(self.derive())
    }
}

/// Circle dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDims<F> {
    pub radius: F,
}

impl<F: ShapeFloat> Measure<F> for CircleDims<F> {
    fn validate(&self) -> ShapeResult<()> {
        Ok(())
    }

    fn derive(&self) -> Metrics<F> {
        let r = self.radius;
        Metrics {
            area: F::PI() * r * r,
            perimeter: F::two() * F::PI() * r,
        }
    }
}

/// Rectangle dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleDims<F> {
    pub length: F,
    pub breadth: F,
}

impl<F: ShapeFloat> Measure<F> for RectangleDims<F> {
    fn validate(&self) -> ShapeResult<()> {
        Ok(())
    }

    fn derive(&self) -> Metrics<F> {
        Metrics {
            area: self.length * self.breadth,
            perimeter: F::two() * (self.length + self.breadth),
        }
    }
}

/// Triangle side lengths.
///
/// The area uses Heron's formula, which loses relative precision for
/// needle-like triangles (one side close to the sum of the other two): the
/// factors `s - x` suffer cancellation. Results for such inputs may carry a
/// large relative error. The radicand is clamped at zero so rounding never
/// yields NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleDims<F> {
    pub a: F,
    pub b: F,
    pub c: F,
}

impl<F: ShapeFloat> TriangleDims<F> {
    /// Strict triangle inequality over the three sides
    pub fn satisfies_inequality(&self) -> bool {
        let (a, b, c) = (self.a, self.b, self.c);
        a + b > c && a + c > b && b + c > a
    }

    /// Half the perimeter
    pub fn semi_perimeter(&self) -> F {
        (self.a + self.b + self.c) / F::two()
    }
}

impl<F: ShapeFloat> Measure<F> for TriangleDims<F> {
    fn validate(&self) -> ShapeResult<()> {
        if self.satisfies_inequality() {
            return Ok(());
        }

        warn!(a = %self.a, b = %self.b, c = %self.c, "triangle inequality violated");
        Err(ShapeError::InvalidGeometry {
            a: self.a.to_diagnostic(),
            b: self.b.to_diagnostic(),
            c: self.c.to_diagnostic(),
        })
    }

    fn derive(&self) -> Metrics<F> {
        let s = self.semi_perimeter();
        let radicand = s * (s - self.a) * (s - self.b) * (s - self.c);
        Metrics {
            area: radicand.max(F::zero()).sqrt(),
            perimeter: self.a + self.b + self.c,
        }
    }
}

/// Shape kind, tagged with its validated dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind<F> {
    Circle(CircleDims<F>),
    Rectangle(RectangleDims<F>),
    Triangle(TriangleDims<F>),
}

impl<F: ShapeFloat> ShapeKind<F> {
    /// Measure this shape, dispatching on the kind
    pub fn measure(&self) -> ShapeResult<Metrics<F>> {
        match self {
            ShapeKind::Circle(dims) => dims.measure(),
            ShapeKind::Rectangle(dims) => dims.measure(),
            ShapeKind::Triangle(dims) => dims.measure(),
        }
    }

    /// Short label of the kind
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Rectangle(_) => "rectangle",
            ShapeKind::Triangle(_) => "triangle",
        }
    }

    /// Rectangle with equal length and breadth
    pub fn is_square(&self) -> bool {
        matches!(self, ShapeKind::Rectangle(d) if d.length == d.breadth)
    }

    /// Triangle with at least two equal sides
    pub fn is_isosceles(&self) -> bool {
        matches!(self, ShapeKind::Triangle(d) if d.a == d.b || d.a == d.c || d.b == d.c)
    }

    /// Triangle with three equal sides
    pub fn is_equilateral(&self) -> bool {
        matches!(self, ShapeKind::Triangle(d) if d.a == d.b && d.b == d.c)
    }
}
