use std::fmt::Debug;

mod sentinel2;
pub use sentinel2::Sentinel2;

/// Band schema of a sensor.
pub trait Sensor: Debug {
    const NAME: &'static str;
    /// `(band name, alias)` pairs in band order.
    const BANDS: &'static [(&'static str, &'static str)];

    fn alias_of(band_name: &str) -> Option<&'static str> {
        Self::BANDS
            .iter()
            .find(|(name, _)| *name == band_name)
            .map(|(_, alias)| *alias)
    }

    fn band_of(alias: &str) -> Option<&'static str> {
        Self::BANDS
            .iter()
            .find(|(_, band_alias)| *band_alias == alias)
            .map(|(name, _)| *name)
    }
}
