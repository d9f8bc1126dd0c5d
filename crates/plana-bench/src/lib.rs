//! plana Bench - fixtures for the criterion suite
//!
//! Benchmarks replay batches of construction requests so that every factory
//! path is exercised with realistic, reproducible dimensions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use plana_core::{Shape, ShapeFactory, ShapeResult};

/// A named construction intent with its raw dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeRequest {
    Circle(f64),
    Rectangle(f64, f64),
    Square(f64),
    Triangle(f64, f64, f64),
    Isosceles(f64, f64),
    Equilateral(f64),
}

impl ShapeRequest {
    /// Run the request through the factory
    pub fn build(self) -> ShapeResult<Shape<f64>> {
        match self {
            ShapeRequest::Circle(r) => ShapeFactory::create_circle(r),
            ShapeRequest::Rectangle(l, b) => ShapeFactory::create_rectangle(l, b),
            ShapeRequest::Square(s) => ShapeFactory::create_square(s),
            ShapeRequest::Triangle(a, b, c) => ShapeFactory::create_triangle(a, b, c),
            ShapeRequest::Isosceles(e, o) => ShapeFactory::create_isosceles_triangle(e, o),
            ShapeRequest::Equilateral(s) => ShapeFactory::create_equilateral_triangle(s),
        }
    }
}

/// The six shapes of the reference listing
pub fn reference_requests() -> Vec<ShapeRequest> {
    vec![
        ShapeRequest::Circle(3.5),
        ShapeRequest::Rectangle(4.0, 2.5),
        ShapeRequest::Square(5.0),
        ShapeRequest::Triangle(3.0, 4.0, 5.0),
        ShapeRequest::Isosceles(6.0, 4.0),
        ShapeRequest::Equilateral(2.5),
    ]
}

/// `count` valid requests cycling through every kind, seeded for
/// reproducibility
pub fn random_requests(count: usize, seed: u64) -> Vec<ShapeRequest> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let x: f64 = rng.gen_range(0.1..100.0);
            let y: f64 = rng.gen_range(0.1..100.0);
            match i % 6 {
                0 => ShapeRequest::Circle(x),
                1 => ShapeRequest::Rectangle(x, y),
                2 => ShapeRequest::Square(x),
                3 => {
                    // third side strictly inside (|x - y|, x + y)
                    let t: f64 = rng.gen_range(0.1..0.9);
                    let lo = (x - y).abs();
                    ShapeRequest::Triangle(x, y, lo + t * (x + y - lo))
                }
                4 => ShapeRequest::Isosceles(x, x * rng.gen_range(0.1..1.9)),
                _ => ShapeRequest::Equilateral(x),
            }
        })
        .collect()
}
