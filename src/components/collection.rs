use itertools::Itertools;
use log::{debug, info};
use ndarray::{stack, Array3, ArrayView2, Axis};
use num_traits::AsPrimitive;
use std::{collections::HashSet, fmt::Debug, ops::Index};

use crate::{
    components::{band::Band, metadata::GeoInfo, DataType},
    errors::{EoRasterError, Result},
    indexes::Indexes,
    sensors::Sensor,
};

/// Ordered collection of uniquely keyed [Band]s
/// sharing one array shape.
#[derive(Clone)]
pub struct RasterCollection<T> {
    bands: Vec<Band<T>>,
}

impl<T> Debug for RasterCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let f = &mut f.debug_struct("RasterCollection");
        f.field("shape", &self.shape())
            .field("bands", &self.band_names())
            .finish()
    }
}

impl<T> Default for RasterCollection<T> {
    fn default() -> Self {
        Self { bands: Vec::new() }
    }
}

impl<T> RasterCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bands(bands: impl IntoIterator<Item = Band<T>>) -> Result<Self> {
        let mut collection = Self::new();
        for band in bands {
            collection.add_band(band)?;
        }
        info!("new {collection:?}");
        Ok(collection)
    }

    /// Bands are known to be unique and of equal shape.
    pub(crate) fn from_aligned(bands: Vec<Band<T>>) -> Self {
        let collection = Self { bands };
        debug!("new {collection:?}");
        collection
    }

    /// Appends `band`, its name and alias must not key an existing band
    /// and its shape must match the collection's.
    pub fn add_band(&mut self, band: Band<T>) -> Result<()> {
        if let Some(key) = [Some(band.name()), band.alias()]
            .into_iter()
            .flatten()
            .find(|key| self.contains(key))
        {
            return Err(EoRasterError::DuplicateBand(key.into()));
        }
        if let Some(expected) = self.shape() {
            if band.shape() != expected {
                return Err(EoRasterError::ShapeMismatch {
                    band: band.name().into(),
                    expected,
                    found: band.shape(),
                });
            }
        }
        self.bands.push(band);
        Ok(())
    }

    pub fn drop_band(&mut self, key: &str) -> Result<Band<T>> {
        self.position(key)
            .map(|position| self.bands.remove(position))
            .ok_or_else(|| EoRasterError::BandNotFound(key.into()))
    }

    /// Position by name first, then by alias.
    fn position(&self, key: &str) -> Option<usize> {
        self.bands
            .iter()
            .position(|band| band.name() == key)
            .or_else(|| self.bands.iter().position(|band| band.is_keyed(key)))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Band by name or alias.
    pub fn band(&self, key: &str) -> Result<&Band<T>> {
        self.position(key)
            .map(|position| &self.bands[position])
            .ok_or_else(|| EoRasterError::BandNotFound(key.into()))
    }

    pub(crate) fn band_named(&self, name: &str) -> Result<&Band<T>> {
        self.bands
            .iter()
            .find(|band| band.name() == name)
            .ok_or_else(|| EoRasterError::BandNotFound(name.into()))
    }

    pub fn band_names(&self) -> Vec<&str> {
        self.bands.iter().map(Band::name).collect()
    }

    pub fn band_aliases(&self) -> Vec<Option<&str>> {
        self.bands.iter().map(Band::alias).collect()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Shared (rows, cols) of the bands, `None` when empty.
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.bands.first().map(Band::shape)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Band<T>> {
        self.bands.iter()
    }

    pub(crate) fn bands(&self) -> &[Band<T>] {
        &self.bands
    }

    /// True when all bands share geotransform and crs
    /// on top of the shared shape.
    pub fn is_bandstack(&self) -> bool {
        self.bands
            .iter()
            .map(|band| (band.shape(), band.geo_transform()))
            .all_equal()
    }

    /// Sets band aliases known to sensor `S`.
    ///
    /// An alias already used as a key in the collection is skipped.
    pub fn apply_sensor_aliases<S: Sensor>(mut self) -> Self {
        let aliases: Vec<Option<&str>> = self
            .bands
            .iter()
            .map(|band| S::alias_of(band.name()).filter(|alias| !self.contains(alias)))
            .collect();
        for (band, alias) in self.bands.iter_mut().zip(aliases) {
            if let Some(alias) = alias {
                band.set_alias(alias);
            }
        }
        debug!("applied {} aliases to {self:?}", S::NAME);
        self
    }

    /// Fails with [EoRasterError::KeyMismatch] unless both collections
    /// hold the same set of band names.
    pub(crate) fn check_keys<U>(&self, other: &RasterCollection<U>) -> Result<()> {
        let keys: HashSet<&str> = self.band_names().into_iter().collect();
        let other_keys: HashSet<&str> = other.band_names().into_iter().collect();
        if keys == other_keys {
            return Ok(());
        }
        Err(EoRasterError::KeyMismatch {
            missing: keys
                .difference(&other_keys)
                .sorted()
                .map(|key| key.to_string())
                .collect(),
            unexpected: other_keys
                .difference(&keys)
                .sorted()
                .map(|key| key.to_string())
                .collect(),
        })
    }
}

impl<T: Clone> RasterCollection<T> {
    /// Selected band values stacked as (C, H, W).
    pub fn get_values(&self, indexes: impl Into<Indexes>) -> Result<Array3<T>> {
        let views: Vec<ArrayView2<T>> = indexes
            .into()
            .select_from(&self.bands)?
            .into_iter()
            .map(|band| band.values().view())
            .collect();
        if views.is_empty() {
            return Err(EoRasterError::EmptyCollection);
        }
        Ok(stack(Axis(0), &views)?)
    }

    pub fn select(&self, indexes: impl Into<Indexes>) -> Result<Self> {
        let bands = indexes.into().select_from(&self.bands)?;
        Self::from_bands(bands.into_iter().cloned())
    }

    /// Sub-collection in the order of `keys` (names or aliases).
    pub fn select_names(&self, keys: &[&str]) -> Result<Self> {
        let bands = keys
            .iter()
            .map(|key| self.band(key).cloned())
            .collect::<Result<Vec<_>>>()?;
        Self::from_bands(bands)
    }
}

impl<T: DataType> RasterCollection<T> {
    pub fn cast<U: DataType>(&self) -> RasterCollection<U>
    where
        T: AsPrimitive<U>,
    {
        RasterCollection::from_aligned(self.bands.iter().map(|band| band.cast()).collect())
    }
}

impl RasterCollection<bool> {
    pub fn all(&self) -> bool {
        self.bands.iter().all(Band::all)
    }

    pub fn any(&self) -> bool {
        self.bands.iter().any(Band::any)
    }

    pub fn count_true(&self) -> usize {
        self.bands.iter().map(Band::count_true).sum()
    }
}

impl<T> Index<&str> for RasterCollection<T> {
    type Output = Band<T>;

    /// Panics if no band is keyed by `key`.
    fn index(&self, key: &str) -> &Self::Output {
        match self.band(key) {
            Ok(band) => band,
            Err(err) => panic!("{err}"),
        }
    }
}
