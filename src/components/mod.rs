pub mod band;
pub mod collection;
pub mod metadata;
pub mod transforms;

use num::Num;
use num_traits::AsPrimitive;
use std::fmt::Debug;

pub use band::Band;
pub use collection::RasterCollection;
pub use metadata::{BandMetadata, GeoInfo};
pub use transforms::{BandGeoTransform, GeoBandTransform};

/// Numeric cell types usable in raster algebra.
///
/// Cells are computed as `f64`, so only types widening to `f64` without
/// loss qualify. 64-bit integers are rejected:
///
/// ```compile_fail
/// fn cells<T: eoraster::DataType>() {}
/// cells::<u64>();
/// ```
pub trait DataType:
    Num + Copy + PartialOrd + Send + Sync + Debug + Into<f64> + AsPrimitive<f64>
{
}

impl<T> DataType for T where
    T: Num + Copy + PartialOrd + Send + Sync + Debug + Into<f64> + AsPrimitive<f64>
{
}
