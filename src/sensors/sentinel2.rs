use super::Sensor;

/// Sentinel-2 MSI (L1C and L2A).
#[derive(Debug)]
pub struct Sentinel2;

impl Sensor for Sentinel2 {
    const NAME: &'static str = "sentinel2-msi";
    const BANDS: &'static [(&'static str, &'static str)] = &[
        ("B01", "coastal_aerosol"),
        ("B02", "blue"),
        ("B03", "green"),
        ("B04", "red"),
        ("B05", "red_edge_1"),
        ("B06", "red_edge_2"),
        ("B07", "red_edge_3"),
        ("B08", "nir_1"),
        ("B8A", "nir_2"),
        ("B09", "water_vapor"),
        ("B11", "swir_1"),
        ("B12", "swir_2"),
        ("SCL", "scl"),
    ];
}
