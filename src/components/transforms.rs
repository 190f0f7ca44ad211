use geo::{AffineTransform, Coord};
use shrinkwraprs::Shrinkwrap;
use std::sync::Arc;

use crate::errors::{EoRasterError, Result};

/// Transform from band pixel space to geo space, in band crs.
#[derive(Shrinkwrap, Debug, Clone, PartialEq)]
pub struct BandGeoTransform(#[shrinkwrap(main_field)] AffineTransform, Arc<str>);

impl BandGeoTransform {
    pub fn new(a: f64, b: f64, xoff: f64, d: f64, e: f64, yoff: f64, crs: &str) -> Self {
        Self(AffineTransform::new(a, b, xoff, d, e, yoff), Arc::from(crs))
    }

    /// From coefficients in gdal order
    /// `[xoff, a, b, yoff, d, e]`.
    pub fn from_gdal(gdal_transform: [f64; 6], crs: &str) -> Self {
        Self::new(
            gdal_transform[1],
            gdal_transform[2],
            gdal_transform[0],
            gdal_transform[4],
            gdal_transform[5],
            gdal_transform[3],
            crs,
        )
    }

    pub fn crs(&self) -> &str {
        &self.1
    }

    /// Pixel size as (x, y). `y` is usually negative.
    pub fn resolution(&self) -> (f64, f64) {
        (self.a(), self.e())
    }

    pub fn pixel_to_geo(&self, col: f64, row: f64) -> Coord {
        self.apply(Coord { x: col, y: row })
    }

    pub fn inverse(&self) -> Result<GeoBandTransform> {
        self.0
            .inverse()
            .map(|inverse| GeoBandTransform(inverse, Arc::clone(&self.1)))
            .ok_or(EoRasterError::NonInvertibleTransform)
    }
}

/// Transform from geo space to band pixel space.
#[derive(Shrinkwrap, Debug, Clone, PartialEq)]
pub struct GeoBandTransform(#[shrinkwrap(main_field)] AffineTransform, Arc<str>);

impl GeoBandTransform {
    pub fn geo_to_pixel(&self, x: f64, y: f64) -> Coord {
        self.apply(Coord { x, y })
    }

    pub fn inverse(&self) -> Result<BandGeoTransform> {
        self.0
            .inverse()
            .map(|inverse| BandGeoTransform(inverse, Arc::clone(&self.1)))
            .ok_or(EoRasterError::NonInvertibleTransform)
    }
}
