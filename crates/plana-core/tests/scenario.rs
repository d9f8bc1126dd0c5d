//! End-to-end construction and listing of the reference shapes

use plana_core::*;

fn reference_shapes() -> ShapeResult<Vec<Shape<f64>>> {
    Ok(vec![
        ShapeFactory::create_circle(3.5)?,
        ShapeFactory::create_rectangle(4.0, 2.5)?,
        ShapeFactory::create_square(5.0)?,
        ShapeFactory::create_triangle(3.0, 4.0, 5.0)?,
        ShapeFactory::create_isosceles_triangle(6.0, 4.0)?,
        ShapeFactory::create_equilateral_triangle(2.5)?,
    ])
}

#[test]
fn test_reference_values() {
    let shapes = reference_shapes().expect("reference shapes are valid");

    let rounded: Vec<(String, String)> = shapes
        .iter()
        .map(|s| (format!("{:.4}", s.area()), format!("{:.4}", s.perimeter())))
        .collect();

    assert_eq!(rounded[0], ("38.4845".into(), "21.9911".into()));
    assert_eq!(rounded[1], ("10.0000".into(), "13.0000".into()));
    assert_eq!(rounded[2], ("25.0000".into(), "20.0000".into()));
    assert_eq!(rounded[3], ("6.0000".into(), "12.0000".into()));
    assert_eq!(rounded[4], ("11.3137".into(), "16.0000".into()));
    assert_eq!(rounded[5], ("2.7063".into(), "7.5000".into()));
}

#[test]
fn test_reference_table() {
    let shapes = reference_shapes().unwrap();
    let table = render_table(&shapes, &ReportConfig::default());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Shape #\tArea\t\tPerimeter");
    assert_eq!(lines[2], "1\t38.4845\t\t21.9911");
    assert_eq!(lines[7], "6\t2.7063\t\t7.5000");
}

#[test]
fn test_accessors_stable_across_calls() {
    for shape in reference_shapes().unwrap() {
        let area = shape.area();
        let perimeter = shape.perimeter();
        assert_eq!(shape.area(), area);
        assert_eq!(shape.perimeter(), perimeter);
        assert_eq!(shape.metrics(), Metrics { area, perimeter });
    }
}

#[test]
fn test_single_failure_does_not_affect_others() {
    let requests: [(f64, f64, f64); 3] = [(3.0, 4.0, 5.0), (1.0, 1.0, 5.0), (2.0, 2.0, 2.0)];
    let results: Vec<_> = requests
        .iter()
        .map(|&(a, b, c)| ShapeFactory::create_triangle(a, b, c))
        .collect();

    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(ShapeError::InvalidGeometry { .. })));
    assert!(results[2].is_ok());
}

#[test]
fn test_single_precision() {
    let circle = ShapeFactory::create_circle(3.5f32).unwrap();
    assert_eq!(format!("{:.2}", circle.area()), "38.48");

    let table = render_table(&[circle], &ReportConfig::compact());
    assert!(table.ends_with("1\t38.48\t\t21.99\n"));
}
