use std::collections::HashMap;

use crate::{
    components::transforms::BandGeoTransform,
    errors::{EoRasterError, Result},
};

/// Geospatial information of a band.
#[ambassador::delegatable_trait]
pub trait GeoInfo {
    fn crs(&self) -> Option<&str>;
    fn geo_transform(&self) -> Option<&BandGeoTransform>;
    fn nodata(&self) -> Option<f64>;
}

/// Band metadata, opaque to algebra.
#[derive(Debug, Default, Clone)]
pub struct BandMetadata {
    description: String,
    nodata: Option<f64>,
    transform: Option<BandGeoTransform>,
    attributes: HashMap<String, String>,
}

impl BandMetadata {
    pub fn new(description: String) -> Self {
        Self {
            description,
            ..Default::default()
        }
    }

    pub fn with_nodata(mut self, nodata: f64) -> Self {
        self.nodata = Some(nodata);
        self
    }

    pub fn with_transform(mut self, transform: BandGeoTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn clear_nodata(&mut self) {
        self.nodata = None;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.attributes.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Result<&String> {
        self.attributes
            .get(key)
            .ok_or(EoRasterError::MetadataKeyNotFound {
                object_desc: self.description.clone(),
                key: key.into(),
            })
    }
}

impl GeoInfo for BandMetadata {
    fn crs(&self) -> Option<&str> {
        self.transform.as_ref().map(BandGeoTransform::crs)
    }

    fn geo_transform(&self) -> Option<&BandGeoTransform> {
        self.transform.as_ref()
    }

    fn nodata(&self) -> Option<f64> {
        self.nodata
    }
}
