pub type Result<T> = std::result::Result<T, EoRasterError>;

#[derive(thiserror::Error, Debug)]
pub enum EoRasterError {
    #[error(transparent)]
    NdarrayError(#[from] ndarray::ShapeError),
    #[error("Band '{band}' has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        band: String,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("Band keys differ, missing: {missing:?}, unexpected: {unexpected:?}")]
    KeyMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    #[error("Unsupported operand: {0}")]
    UnsupportedOperand(String),
    #[error("Unsupported operator: '{0}'")]
    UnsupportedOperator(String),
    #[error("No band named or aliased '{0}'")]
    BandNotFound(String),
    #[error("Band '{0}' already in collection")]
    DuplicateBand(String),
    #[error("Band index {index} out of range for {len} bands")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Collection has no bands")]
    EmptyCollection,
    #[error("Geotransform is not invertible")]
    NonInvertibleTransform,
    #[error("Key '{key}' not found in metadata of {object_desc}")]
    MetadataKeyNotFound { object_desc: String, key: String },
}
