//! Builds the reference shapes and prints their area and perimeter
//!
//! Usage: plana-demo [precision]

use plana_core::{render_table, ReportConfig, Shape, ShapeFactory, ShapeResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn build_shapes() -> ShapeResult<Vec<Shape<f64>>> {
    Ok(vec![
        ShapeFactory::create_circle(3.5)?,
        ShapeFactory::create_rectangle(4.0, 2.5)?,
        ShapeFactory::create_square(5.0)?,
        ShapeFactory::create_triangle(3.0, 4.0, 5.0)?,
        ShapeFactory::create_isosceles_triangle(6.0, 4.0)?,
        ShapeFactory::create_equilateral_triangle(2.5)?,
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ReportConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        config = config.with_precision(arg.parse()?);
    }

    let shapes = build_shapes().map_err(|e| {
        error!("shape construction failed: {}", e);
        e
    })?;
    info!(count = shapes.len(), precision = config.precision, "shapes built");

    print!("{}", render_table(&shapes, &config));

    Ok(())
}
