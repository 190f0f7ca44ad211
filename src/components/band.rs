use ndarray::Array2;
use num_traits::AsPrimitive;

use crate::{
    components::{
        metadata::{ambassador_impl_GeoInfo, BandMetadata, GeoInfo},
        transforms::BandGeoTransform,
        DataType,
    },
    errors::Result,
};

/// Named 2-D layer of a raster.
///
/// `name` is the key of the band inside its [RasterCollection](super::RasterCollection),
/// `alias` an optional sensor independent name (e.g. `"red"`).
#[derive(ambassador::Delegate, Debug, Clone)]
#[delegate(GeoInfo, target = "metadata")]
pub struct Band<T> {
    name: String,
    alias: Option<String>,
    values: Array2<T>,
    metadata: BandMetadata,
}

impl<T> Band<T> {
    pub fn new(name: impl Into<String>, values: Array2<T>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            values,
            metadata: BandMetadata::default(),
        }
    }

    /// Row-major `data` of shape (rows, cols).
    pub fn from_shape_vec(
        name: impl Into<String>,
        shape: (usize, usize),
        data: Vec<T>,
    ) -> Result<Self> {
        Ok(Self::new(name, Array2::from_shape_vec(shape, data)?))
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_metadata(mut self, metadata: BandMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub(crate) fn set_alias(&mut self, alias: &str) {
        self.alias = Some(alias.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// True if `key` is the name or the alias of the band.
    pub fn is_keyed(&self, key: &str) -> bool {
        self.name == key || self.alias.as_deref() == Some(key)
    }

    pub fn values(&self) -> &Array2<T> {
        &self.values
    }

    pub fn into_values(self) -> Array2<T> {
        self.values
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn metadata(&self) -> &BandMetadata {
        &self.metadata
    }

    /// Band with the same key and metadata holding `values`.
    pub(crate) fn with_values<U>(&self, values: Array2<U>) -> Band<U> {
        Band {
            name: self.name.clone(),
            alias: self.alias.clone(),
            values,
            metadata: self.metadata.clone(),
        }
    }

    pub(crate) fn without_nodata(mut self) -> Self {
        self.metadata.clear_nodata();
        self
    }
}

impl<T: DataType> Band<T> {
    pub fn cast<U: DataType>(&self) -> Band<U>
    where
        T: AsPrimitive<U>,
    {
        self.with_values(self.values.mapv(|value| value.as_()))
    }
}

impl Band<bool> {
    pub fn all(&self) -> bool {
        self.values.iter().all(|value| *value)
    }

    pub fn any(&self) -> bool {
        self.values.iter().any(|value| *value)
    }

    pub fn count_true(&self) -> usize {
        self.values.iter().filter(|value| **value).count()
    }
}
