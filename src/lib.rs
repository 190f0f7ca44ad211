//! Named-band raster collections with element-wise algebra.
//!
//! Bands are 2-D [ndarray] arrays keyed by name. A [RasterCollection]
//! combines with scalars, single bands or other collections through
//! `add`, `sub`, `mul`, `div`, `pow` and the comparisons
//! `eq`, `ne`, `lt`, `le`, `gt`, `ge`.

pub mod algebra;
mod components;
mod errors;
mod indexes;
pub mod sensors;

pub use algebra::{ArithmeticOp, ComparisonOp, Operand};
pub use components::{
    Band, BandGeoTransform, BandMetadata, DataType, GeoBandTransform, GeoInfo, RasterCollection,
};
pub use errors::{EoRasterError, Result};
pub use indexes::Indexes;
