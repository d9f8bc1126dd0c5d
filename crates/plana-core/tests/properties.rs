//! Property tests for the shape formulas and validation rules

use std::f64::consts::PI;

use plana_core::*;
use proptest::prelude::*;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

/// Valid triangles: c strictly between |a - b| and a + b
fn triangle_sides() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.01f64..1e3, 0.01f64..1e3, 0.05f64..0.95).prop_map(|(a, b, t)| {
        let lo = (a - b).abs();
        let hi = a + b;
        (a, b, lo + t * (hi - lo))
    })
}

proptest! {
    #[test]
    fn circle_formulas(r in 1e-3f64..1e6) {
        let shape = ShapeFactory::create_circle(r).unwrap();
        prop_assert!(close(shape.area(), PI * r * r));
        prop_assert!(close(shape.perimeter(), 2.0 * PI * r));
    }

    #[test]
    fn circle_rejects_non_positive(r in -1e6f64..=0.0) {
        let err = CircleBuilder::new().set_radius(r).unwrap_err();
        prop_assert!(
            matches!(err, ShapeError::InvalidParameter { field: Field::Radius, .. }),
            "unexpected error {:?}",
            err
        );
    }

    #[test]
    fn rectangle_formulas(l in 1e-3f64..1e6, b in 1e-3f64..1e6) {
        let shape = ShapeFactory::create_rectangle(l, b).unwrap();
        prop_assert!(close(shape.area(), l * b));
        prop_assert!(close(shape.perimeter(), 2.0 * (l + b)));
    }

    #[test]
    fn square_formulas(s in 1e-3f64..1e6) {
        let shape = ShapeFactory::create_square(s).unwrap();
        prop_assert!(close(shape.area(), s * s));
        prop_assert!(close(shape.perimeter(), 4.0 * s));
    }

    #[test]
    fn triangle_matches_symmetric_heron((a, b, c) in triangle_sides()) {
        let shape = ShapeFactory::create_triangle(a, b, c).unwrap();
        let expected = 0.25
            * ((a + b + c) * (-a + b + c) * (a - b + c) * (a + b - c)).sqrt();
        prop_assert!((shape.area() - expected).abs() <= 1e-6 * expected.max(1.0));
        prop_assert!(close(shape.perimeter(), a + b + c));
    }

    #[test]
    fn right_triangle_area(x in 0.1f64..1e3, y in 0.1f64..1e3) {
        let hyp = x.hypot(y);
        let shape = ShapeFactory::create_triangle(x, y, hyp).unwrap();
        prop_assert!((shape.area() - x * y / 2.0).abs() <= 1e-6 * (x * y).max(1.0));
    }

    #[test]
    fn triangle_rejects_long_side(a in 0.1f64..1e3, b in 0.1f64..1e3, extra in 0.0f64..1e3) {
        let c = a + b + extra;
        let err = ShapeFactory::create_triangle(a, b, c).unwrap_err();
        prop_assert_eq!(err, ShapeError::InvalidGeometry { a, b, c });
    }

    #[test]
    fn equilateral_formulas(s in 1e-3f64..1e4) {
        let shape = ShapeFactory::create_equilateral_triangle(s).unwrap();
        prop_assert!(close(shape.perimeter(), 3.0 * s));
        prop_assert!((shape.area() - 3f64.sqrt() / 4.0 * s * s).abs() <= 1e-9 * (s * s).max(1.0));
    }

    #[test]
    fn isosceles_matches_triangle(e in 0.1f64..1e3, t in 0.05f64..1.95) {
        let o = e * t;
        let iso = ShapeFactory::create_isosceles_triangle(e, o).unwrap();
        let tri = ShapeFactory::create_triangle(e, e, o).unwrap();
        prop_assert_eq!(iso.metrics(), tri.metrics());
        prop_assert!(iso.kind().is_isosceles());
    }
}
