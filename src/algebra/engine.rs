use log::debug;
use ndarray::{Array2, Zip};
use rayon::prelude::*;

use crate::{
    algebra::{ArithmeticOp, ComparisonOp, Operand},
    components::{Band, DataType, GeoInfo, RasterCollection},
    errors::{EoRasterError, Result},
};

/// Right hand side resolved for one band of the left operand.
enum Rhs<'o, U> {
    Scalar(f64),
    Array(&'o Array2<U>),
}

fn check_shape<T>(band: &Band<T>, found: (usize, usize)) -> Result<()> {
    if band.shape() == found {
        Ok(())
    } else {
        Err(EoRasterError::ShapeMismatch {
            band: band.name().into(),
            expected: band.shape(),
            found,
        })
    }
}

impl<T> RasterCollection<T> {
    /// Array of `operand` to pair with each band of `self`, in band order.
    fn align_arrays<'o, U>(&self, operand: Operand<'o, U>) -> Result<Vec<&'o Array2<U>>> {
        match operand {
            Operand::Scalar(_) => Err(EoRasterError::UnsupportedOperand(
                "scalar where a Band or RasterCollection is required".into(),
            )),
            Operand::Band(other) => self
                .iter()
                .map(|band| {
                    check_shape(band, other.shape())?;
                    Ok(other.values())
                })
                .collect(),
            Operand::Collection(other) => {
                self.check_keys(other)?;
                self.iter()
                    .map(|band| {
                        let other = other.band_named(band.name())?;
                        check_shape(band, other.shape())?;
                        Ok(other.values())
                    })
                    .collect()
            }
        }
    }

    fn align<'o, U>(&self, operand: Operand<'o, U>) -> Result<Vec<Rhs<'o, U>>> {
        match operand {
            Operand::Scalar(scalar) => Ok(self.iter().map(|_| Rhs::Scalar(scalar)).collect()),
            operand => Ok(self
                .align_arrays(operand)?
                .into_iter()
                .map(Rhs::Array)
                .collect()),
        }
    }
}

impl<T: DataType> RasterCollection<T> {
    fn zip_bands<R, F>(&self, operand: Operand<'_, T>, f: F) -> Result<Vec<Band<R>>>
    where
        R: Send,
        F: Fn(f64, f64) -> R + Sync,
    {
        let rhs = self.align(operand)?;
        Ok(self
            .bands()
            .par_iter()
            .zip(rhs.par_iter())
            .map(|(band, rhs)| {
                let values = match rhs {
                    Rhs::Scalar(scalar) => band.values().mapv(|value| f(value.as_(), *scalar)),
                    Rhs::Array(other) => Zip::from(band.values())
                        .and(*other)
                        .map_collect(|&lhs_value, &rhs_value| f(lhs_value.as_(), rhs_value.as_())),
                };
                band.with_values(values)
            })
            .collect())
    }

    /// Applies `op` cell-wise between `self` and `other`.
    ///
    /// Values of both sides are promoted to `f64`.
    pub fn arithmetic<'o>(
        &self,
        op: ArithmeticOp,
        other: impl Into<Operand<'o, T>>,
    ) -> Result<RasterCollection<f64>>
    where
        T: 'o,
    {
        let other = other.into();
        debug!("{op} with {} on {} bands", other.kind(), self.len());
        let bands = self.zip_bands(other, |lhs, rhs| op.apply(lhs, rhs))?;
        Ok(RasterCollection::from_aligned(bands))
    }

    /// Compares `self` and `other` cell-wise, giving one mask per band.
    pub fn compare<'o>(
        &self,
        op: ComparisonOp,
        other: impl Into<Operand<'o, T>>,
    ) -> Result<RasterCollection<bool>>
    where
        T: 'o,
    {
        let other = other.into();
        debug!("{op} with {} on {} bands", other.kind(), self.len());
        let masks = self.zip_bands(other, |lhs, rhs| op.apply(lhs, rhs))?;
        Ok(RasterCollection::from_aligned(
            masks.into_iter().map(Band::without_nodata).collect(),
        ))
    }

    /// Unary band math on every cell.
    pub fn map<F>(&self, f: F) -> RasterCollection<f64>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let bands = self
            .bands()
            .par_iter()
            .map(|band| band.with_values(band.values().mapv(|value| f(value.as_()))))
            .collect();
        RasterCollection::from_aligned(bands)
    }

    /// Sets cells where `mask` is `true` to the band nodata value,
    /// `NaN` when the band has none.
    ///
    /// A `Band<bool>` mask applies to every band, a `RasterCollection<bool>`
    /// mask is matched on band keys.
    pub fn mask<'o>(&self, mask: impl Into<Operand<'o, bool>>) -> Result<RasterCollection<f64>> {
        let mask = mask.into();
        debug!("masking {} bands with {}", self.len(), mask.kind());
        let masks = self.align_arrays(mask)?;
        let bands = self
            .bands()
            .par_iter()
            .zip(masks.par_iter())
            .map(|(band, mask)| {
                let fill = band.nodata().unwrap_or(f64::NAN);
                let values = Zip::from(band.values())
                    .and(*mask)
                    .map_collect(|&value, &masked| if masked { fill } else { value.as_() });
                band.with_values(values)
            })
            .collect();
        Ok(RasterCollection::from_aligned(bands))
    }
}

#[allow(clippy::should_implement_trait)]
impl<T: DataType> RasterCollection<T> {
    pub fn add<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<f64>>
    where
        T: 'o,
    {
        self.arithmetic(ArithmeticOp::Add, other)
    }

    pub fn sub<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<f64>>
    where
        T: 'o,
    {
        self.arithmetic(ArithmeticOp::Sub, other)
    }

    pub fn mul<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<f64>>
    where
        T: 'o,
    {
        self.arithmetic(ArithmeticOp::Mul, other)
    }

    /// Zero divisors give `inf` or `nan`, never an error.
    pub fn div<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<f64>>
    where
        T: 'o,
    {
        self.arithmetic(ArithmeticOp::Div, other)
    }

    pub fn pow<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<f64>>
    where
        T: 'o,
    {
        self.arithmetic(ArithmeticOp::Pow, other)
    }

    pub fn eq<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<bool>>
    where
        T: 'o,
    {
        self.compare(ComparisonOp::Eq, other)
    }

    pub fn ne<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<bool>>
    where
        T: 'o,
    {
        self.compare(ComparisonOp::Ne, other)
    }

    pub fn lt<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<bool>>
    where
        T: 'o,
    {
        self.compare(ComparisonOp::Lt, other)
    }

    pub fn le<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<bool>>
    where
        T: 'o,
    {
        self.compare(ComparisonOp::Le, other)
    }

    pub fn gt<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<bool>>
    where
        T: 'o,
    {
        self.compare(ComparisonOp::Gt, other)
    }

    pub fn ge<'o>(&self, other: impl Into<Operand<'o, T>>) -> Result<RasterCollection<bool>>
    where
        T: 'o,
    {
        self.compare(ComparisonOp::Ge, other)
    }
}
