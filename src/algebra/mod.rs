//! Element-wise raster algebra on [RasterCollection](crate::RasterCollection)s.
//!
//! The left operand is always a collection, the right one an [Operand]:
//! a scalar, a single band broadcast over every band, or a collection
//! matched band by band on keys.

mod engine;
mod operand;
mod operators;

pub use operand::Operand;
pub use operators::{ArithmeticOp, ComparisonOp};
