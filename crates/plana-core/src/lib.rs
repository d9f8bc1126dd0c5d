//! plana Core - Planar shape construction and measurement
//!
//! This crate defines the shape types and the construction protocol:
//! - Numeric bounds (ShapeFloat) shared by every shape
//! - Per-kind builders (CircleBuilder, RectangleBuilder, TriangleBuilder)
//! - The read-only Shape handle and its ShapeKind tag
//! - The stateless ShapeFactory for named construction intents
//! - Tabular reporting of computed shapes

pub mod num;
pub mod error;
pub mod kind;
pub mod shape;
pub mod builder;
pub mod factory;
pub mod report;

pub use num::*;
pub use error::*;
pub use kind::*;
pub use shape::*;
pub use builder::*;
pub use factory::*;
pub use report::*;
