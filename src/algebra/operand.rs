use std::any::Any;

use crate::{
    components::{Band, RasterCollection},
    errors::{EoRasterError, Result},
};

/// Right hand side of a raster algebra operation.
#[derive(Debug)]
pub enum Operand<'a, T> {
    /// Applied to every cell of every band.
    Scalar(f64),
    /// Array applied to every band, its key is ignored.
    Band(&'a Band<T>),
    /// Matched band by band on keys.
    Collection(&'a RasterCollection<T>),
}

impl<T> Clone for Operand<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Operand<'_, T> {}

impl<T> Operand<'_, T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Band(_) => "band",
            Operand::Collection(_) => "collection",
        }
    }
}

macro_rules! scalar_operand {
    ($($ty:ty),*) => {
        $(
            impl<T> From<$ty> for Operand<'_, T> {
                fn from(value: $ty) -> Self {
                    Operand::Scalar(value as f64)
                }
            }
        )*

        impl<'a, T: 'static> Operand<'a, T> {
            /// Resolves a dynamically typed value, fails with
            /// [EoRasterError::UnsupportedOperand] for anything but a
            /// numeric primitive, a `Band<T>` or a `RasterCollection<T>`.
            pub fn from_any(value: &'a dyn Any) -> Result<Self> {
                $(
                    if let Some(scalar) = value.downcast_ref::<$ty>() {
                        return Ok(Operand::Scalar(*scalar as f64));
                    }
                )*
                if let Some(band) = value.downcast_ref::<Band<T>>() {
                    return Ok(Operand::Band(band));
                }
                if let Some(collection) = value.downcast_ref::<RasterCollection<T>>() {
                    return Ok(Operand::Collection(collection));
                }
                Err(EoRasterError::UnsupportedOperand(format!(
                    "expected a scalar, Band<{0}> or RasterCollection<{0}>",
                    std::any::type_name::<T>()
                )))
            }
        }
    };
}

// Only types widening to f64 without loss.
scalar_operand!(u8, u16, u32, i8, i16, i32, f32, f64);

impl<'a, T> From<&'a Band<T>> for Operand<'a, T> {
    fn from(band: &'a Band<T>) -> Self {
        Operand::Band(band)
    }
}

impl<'a, T> From<&'a RasterCollection<T>> for Operand<'a, T> {
    fn from(collection: &'a RasterCollection<T>) -> Self {
        Operand::Collection(collection)
    }
}
