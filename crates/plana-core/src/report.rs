//! Tabular listing of computed shapes

use std::fmt::Write;

use crate::{Shape, ShapeFloat};

const HEADER: &str = "Shape #\tArea\t\tPerimeter\n-------\t----\t\t---------\n";

/// Report configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Digits after the decimal point
    pub precision: usize,
    /// Index printed for the first shape
    pub first_index: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            precision: 4,
            first_index: 1,
        }
    }
}

impl ReportConfig {
    /// Two decimal places, for quick inspection
    pub fn compact() -> Self {
        ReportConfig {
            precision: 2,
            ..ReportConfig::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// One line of the listing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeRow<F> {
    pub index: usize,
    pub area: F,
    pub perimeter: F,
}

/// Number the shapes according to `config`
pub fn rows<F: ShapeFloat>(shapes: &[Shape<F>], config: &ReportConfig) -> Vec<ShapeRow<F>> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| ShapeRow {
            index: config.first_index + i,
            area: shape.area(),
            perimeter: shape.perimeter(),
        })
        .collect()
}

/// Render the shapes as a tab-separated table with fixed precision
pub fn render_table<F: ShapeFloat>(shapes: &[Shape<F>], config: &ReportConfig) -> String {
    let mut out = String::from(HEADER);
    let p = config.precision;
    for row in rows(shapes, config) {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "{}\t{:.p$}\t\t{:.p$}",
            row.index,
            row.area,
            row.perimeter,
            p = p
        );
    }
    out
}
