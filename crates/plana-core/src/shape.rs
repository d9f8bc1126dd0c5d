//! Shape - the read-only product of a successful build

use std::fmt;

use tracing::debug;

use crate::{Metrics, ShapeFloat, ShapeKind, ShapeResult};

/// A fully measured shape.
///
/// A `Shape` exists only once its dimensions passed validation and its
/// metrics were derived, so area and perimeter are always meaningful. There
/// is no way to mutate one; build a new shape instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape<F> {
    kind: ShapeKind<F>,
    metrics: Metrics<F>,
}

impl<F: ShapeFloat> Shape<F> {
    /// Measure `kind` and wrap the result
    pub(crate) fn measure(kind: ShapeKind<F>) -> ShapeResult<Self> {
        let metrics = kind.measure()?;
        debug!(
            kind = kind.name(),
            area = %metrics.area,
            perimeter = %metrics.perimeter,
            "shape computed"
        );
        Ok(Shape { kind, metrics })
    }

    /// Enclosed area
    #[inline]
    pub fn area(&self) -> F {
        self.metrics.area
    }

    /// Boundary length
    #[inline]
    pub fn perimeter(&self) -> F {
        self.metrics.perimeter
    }

    /// Both derived scalars
    #[inline]
    pub fn metrics(&self) -> Metrics<F> {
        self.metrics
    }

    /// Kind and validated dimensions
    #[inline]
    pub fn kind(&self) -> &ShapeKind<F> {
        &self.kind
    }

    /// Short label of the kind
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl<F: ShapeFloat> fmt::Display for Shape<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (area {}, perimeter {})",
            self.name(),
            self.area(),
            self.perimeter()
        )
    }
}
