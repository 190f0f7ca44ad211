use std::any::Any;

use eoraster::{
    sensors::Sentinel2, ArithmeticOp, Band, ComparisonOp, EoRasterError, Indexes, Operand,
    RasterCollection,
};
use ndarray::{Array2, Array3, Zip};
use rstest::{fixture, rstest};

const SHAPE: (usize, usize) = (64, 48);

/// Values cycle through 0..300 so every band holds cells
/// below, at and above small scalars.
fn band(name: &str, offset: usize) -> Band<u16> {
    Band::new(
        name,
        Array2::from_shape_fn(SHAPE, |(row, col)| {
            ((row * 37 + col * 11 + offset) % 300) as u16
        }),
    )
}

fn sentinel2_stack() -> RasterCollection<u16> {
    RasterCollection::from_bands([
        band("B02", 0),
        band("B03", 50),
        band("B04", 100),
        band("B08", 200),
    ])
    .unwrap()
}

#[fixture]
fn bandstack() -> RasterCollection<u16> {
    sentinel2_stack()
}

fn values<T: Clone>(collection: &RasterCollection<T>) -> Array3<T> {
    collection.get_values(Indexes::all()).unwrap()
}

fn as_f64(collection: &RasterCollection<u16>) -> Array3<f64> {
    values(collection).mapv(f64::from)
}

/// Expected cells of `collection OP band`, band by band.
fn broadcast<R>(
    collection: &RasterCollection<u16>,
    band: &Band<u16>,
    f: impl Fn(f64, f64) -> R,
) -> Vec<Array2<R>> {
    collection
        .iter()
        .map(|lhs| {
            Zip::from(lhs.values())
                .and(band.values())
                .map_collect(|&lhs, &rhs| f(lhs.into(), rhs.into()))
        })
        .collect()
}

fn band_values<T: Clone>(collection: &RasterCollection<T>) -> Vec<Array2<T>> {
    collection.iter().map(|band| band.values().clone()).collect()
}

#[rstest]
fn raster_algebra_scalar(bandstack: RasterCollection<u16>) {
    let scalar = 2;
    let expected = as_f64(&bandstack);

    let sum = bandstack.add(scalar).unwrap();
    assert_eq!(values(&sum), expected.mapv(|v| v + 2.));
    let difference = bandstack.sub(scalar).unwrap();
    assert_eq!(values(&difference), expected.mapv(|v| v - 2.));
    let product = bandstack.mul(scalar).unwrap();
    assert_eq!(values(&product), expected.mapv(|v| v * 2.));
    let quotient = bandstack.div(scalar).unwrap();
    assert_eq!(values(&quotient), expected.mapv(|v| v / 2.));
    let power = bandstack.pow(scalar).unwrap();
    assert_eq!(values(&power), expected.mapv(|v| v.powf(2.)));

    let equal = bandstack.eq(scalar).unwrap();
    assert!(!equal.all());
    assert!(equal.any());
    assert!(bandstack.gt(scalar).unwrap().any());
    assert!(bandstack.ge(scalar).unwrap().any());
    assert!(bandstack.lt(scalar).unwrap().any());
    assert!(bandstack.le(scalar).unwrap().any());
}

#[rstest]
#[case(ComparisonOp::Eq, |lhs: f64, rhs: f64| lhs == rhs)]
#[case(ComparisonOp::Ne, |lhs: f64, rhs: f64| lhs != rhs)]
#[case(ComparisonOp::Lt, |lhs: f64, rhs: f64| lhs < rhs)]
#[case(ComparisonOp::Le, |lhs: f64, rhs: f64| lhs <= rhs)]
#[case(ComparisonOp::Gt, |lhs: f64, rhs: f64| lhs > rhs)]
#[case(ComparisonOp::Ge, |lhs: f64, rhs: f64| lhs >= rhs)]
fn scalar_comparisons_are_cell_wise(
    bandstack: RasterCollection<u16>,
    #[case] op: ComparisonOp,
    #[case] expected: fn(f64, f64) -> bool,
) {
    let mask = bandstack.compare(op, 2u8).unwrap();
    assert_eq!(mask.band_names(), bandstack.band_names());
    assert_eq!(values(&mask), as_f64(&bandstack).mapv(|v| expected(v, 2.)));
}

#[rstest]
fn raster_algebra_band(bandstack: RasterCollection<u16>) {
    let band = bandstack["B02"].clone();

    let sum = bandstack.add(&band).unwrap();
    assert_eq!(band_values(&sum), broadcast(&bandstack, &band, |a, b| a + b));
    let difference = bandstack.sub(&band).unwrap();
    assert_eq!(
        band_values(&difference),
        broadcast(&bandstack, &band, |a, b| a - b)
    );
    let product = bandstack.mul(&band).unwrap();
    assert_eq!(
        band_values(&product),
        broadcast(&bandstack, &band, |a, b| a * b)
    );
    let power = bandstack.pow(&band).unwrap();
    assert_eq!(
        band_values(&power),
        broadcast(&bandstack, &band, |a: f64, b| a.powf(b))
    );

    let equal = bandstack.eq(&band).unwrap();
    assert!(equal.any());
    assert!(equal["B02"].all());
    assert!(!equal["B03"].any());

    let greater = bandstack.gt(&band).unwrap();
    assert!(greater.any());
    assert!(!greater["B02"].any());
    for key in ["B03", "B04", "B08"] {
        assert!(greater[key].any(), "{key} never exceeds B02");
    }
    assert!(bandstack.ge(&band).unwrap()["B02"].all());
    assert!(bandstack.lt(&band).unwrap().any());
    assert!(bandstack.le(&band).unwrap().any());
    assert_eq!(
        band_values(&bandstack.ne(&band).unwrap()),
        broadcast(&bandstack, &band, |a, b| a != b)
    );
}

#[rstest]
fn raster_algebra_collection(bandstack: RasterCollection<u16>) {
    let other = sentinel2_stack();
    let lhs = as_f64(&bandstack);
    let rhs = as_f64(&other);

    let sum = bandstack.add(&other).unwrap();
    assert_eq!(values(&sum), &lhs + &rhs);
    let difference = bandstack.sub(&other).unwrap();
    assert_eq!(values(&difference), &lhs - &rhs);
    let product = bandstack.mul(&other).unwrap();
    assert_eq!(values(&product), &lhs * &rhs);
    let power = bandstack.pow(&other).unwrap();
    let mut expected = lhs.clone();
    Zip::from(&mut expected)
        .and(&rhs)
        .for_each(|lhs, &rhs| *lhs = lhs.powf(rhs));
    assert_eq!(values(&power), expected);

    assert!(bandstack.eq(&other).unwrap().all());
    assert!(!bandstack.ne(&other).unwrap().any());
}

#[rstest]
fn collections_match_bands_by_key(bandstack: RasterCollection<u16>) {
    let reversed = bandstack.select([3usize, 2, 1, 0]).unwrap();
    assert_eq!(reversed.band_names(), vec!["B08", "B04", "B03", "B02"]);

    let difference = bandstack.sub(&reversed).unwrap();
    assert_eq!(difference.band_names(), bandstack.band_names());
    assert!(difference
        .iter()
        .all(|band| band.values().iter().all(|value| *value == 0.)));
}

#[rstest]
fn mismatched_keys_fail(bandstack: RasterCollection<u16>) {
    let mut other = sentinel2_stack();
    other.drop_band("B08").unwrap();
    other.add_band(band("B11", 0)).unwrap();

    match bandstack.add(&other) {
        Err(EoRasterError::KeyMismatch {
            missing,
            unexpected,
        }) => {
            assert_eq!(missing, vec!["B08"]);
            assert_eq!(unexpected, vec!["B11"]);
        }
        other => panic!("expected a key mismatch, got {other:?}"),
    }
}

#[rstest]
fn mismatched_shapes_fail(bandstack: RasterCollection<u16>) {
    let band = Band::new("B02", Array2::<u16>::ones((SHAPE.1, SHAPE.0)));
    assert!(matches!(
        bandstack.gt(&band),
        Err(EoRasterError::ShapeMismatch { .. })
    ));
}

#[rstest]
fn unsupported_operands_fail(bandstack: RasterCollection<u16>) {
    let date: &dyn Any = &"2022-06-10";
    assert!(matches!(
        Operand::<u16>::from_any(date),
        Err(EoRasterError::UnsupportedOperand(_))
    ));

    let threshold: &dyn Any = &300u32;
    let below = bandstack
        .compare(ComparisonOp::Lt, Operand::<u16>::from_any(threshold).unwrap())
        .unwrap();
    assert!(below.all());
}

#[rstest]
fn arithmetic_from_symbols(bandstack: RasterCollection<u16>) {
    let op: ArithmeticOp = "**".parse().unwrap();
    let squared = bandstack.arithmetic(op, 2).unwrap();
    assert_eq!(values(&squared), as_f64(&bandstack).mapv(|v| v.powf(2.)));
    assert!(matches!(
        "//".parse::<ArithmeticOp>(),
        Err(EoRasterError::UnsupportedOperator(_))
    ));
}

#[test_log::test]
fn normalized_difference_from_aliases() {
    let bandstack = sentinel2_stack().apply_sensor_aliases::<Sentinel2>();
    let nir = bandstack.select_names(&["nir_1"]).unwrap();
    let red = &bandstack["red"];

    let ndvi = nir
        .sub(red)
        .unwrap()
        .div(&nir.add(red).unwrap())
        .unwrap();
    assert_eq!(ndvi.band_names(), vec!["B08"]);
    assert_eq!(ndvi.band_aliases(), vec![Some("nir_1")]);
    assert!(ndvi["B08"]
        .values()
        .iter()
        .all(|value| (-1. ..=1.).contains(value)));
}

#[test_log::test]
fn cloud_mask_from_comparison() {
    let bandstack = sentinel2_stack();
    let scl = band("SCL", 7).values().mapv(|value| value % 12);
    // SCL classes 8 to 10: cloud medium/high probability and cirrus
    let clouds = Band::new("SCL", scl.mapv(|class| (8..=10).contains(&class)));

    let masked = bandstack.mask(&clouds).unwrap();
    for band in masked.iter() {
        Zip::from(band.values())
            .and(clouds.values())
            .for_each(|value, cloudy| assert_eq!(value.is_nan(), *cloudy));
    }
}

#[test_log::test]
fn operators_run_concurrently() {
    let bandstack = sentinel2_stack();
    let band = bandstack["B04"].clone();
    std::thread::scope(|scope| {
        let sum = scope.spawn(|| bandstack.add(&band));
        let mask = scope.spawn(|| bandstack.ge(&bandstack));
        assert_eq!(sum.join().unwrap().unwrap().len(), 4);
        assert!(mask.join().unwrap().unwrap().all());
    });
}
