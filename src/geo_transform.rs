use geo_types::Coord;

use crate::errors::{GeorefError, Result};

/// An affine transform.
///
/// A six-element array storing the coefficients of an [affine transform]
/// used in mapping coordinates between pixel/line `(P, L)` (raster) space,
/// and `(Xp,Yp)` (projection) space.
///
/// # Interpretation
///
/// A `GeoTransform`'s components have the following meanings:
///
///   * `GeoTransform[0]`: x-coordinate of the upper-left corner of the upper-left pixel.
///   * `GeoTransform[1]`: W-E pixel resolution (pixel width).
///   * `GeoTransform[2]`: row rotation (typically zero).
///   * `GeoTransform[3]`: y-coordinate of the upper-left corner of the upper-left pixel.
///   * `GeoTransform[4]`: column rotation (typically zero).
///   * `GeoTransform[5]`: N-S pixel resolution (pixel height), negative value for a North-up image.
///
/// ## Note
///
/// Care with coefficient ordering is required when constructing an [affine transform matrix] from
/// a `GeoTransform`. If a 3x3 transform matrix is defined as:
///
/// ```text
/// | a b c |
/// | d e f |
/// | 0 0 1 |
/// ```
///
/// The corresponding `GeoTransform` ordering is:
///
/// ```text
/// [c, a, b, f, d, e]
/// ```
///
/// # Usage
///  *  [`apply`](GeoTransformEx::apply): perform a `(P,L) -> (Xp,Yp)` transformation
///  *  [`invert`](GeoTransformEx::invert): construct the inverse transformation coefficients
///     for computing `(Xp,Yp) -> (P,L)` transformations
///
/// # Example
///
/// ```rust
/// # fn main() -> georef::errors::Result<()> {
/// use georef::GeoTransformEx;
/// let transform = [768269.0, 1.0, 0.0, 4057292.0, 0.0, -1.0];
/// let (p, l) = (0.0, 0.0);
/// let (x, y) = transform.apply(p, l);
/// assert_eq!((x, y), (768269.0, 4057292.0));
/// let inverse = transform.invert()?;
/// let (p, l) = inverse.apply(x, y);
/// assert_eq!((p, l), (0.0, 0.0));
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
///   * [GDAL GeoTransform Tutorial]
///   * [Raster Data Model Affine Transform]
///
/// [GDAL GeoTransform Tutorial]: https://gdal.org/tutorials/geotransforms_tut.html
/// [Raster Data Model Affine Transform]: https://gdal.org/user/raster_data_model.html#affine-geotransform
/// [affine transform]: https://en.wikipedia.org/wiki/Affine_transformation
/// [affine transform matrix]: https://en.wikipedia.org/wiki/Transformation_matrix#Affine_transformations
pub type GeoTransform = [f64; 6];

/// Extension methods on [`GeoTransform`]
pub trait GeoTransformEx {
    /// Apply the transform to a pixel/line coordinate, yielding the
    /// projected x/y coordinate.
    ///
    /// Pure arithmetic over the coefficients; non-finite coefficients or
    /// coordinates propagate into the result rather than being trapped.
    ///
    /// # Example
    ///
    /// See [`GeoTransform`](GeoTransform#example)
    fn apply(&self, pixel: f64, line: f64) -> (f64, f64);

    /// Invert a [`GeoTransform`].
    ///
    /// Fails with [`GeorefError::NonInvertibleGeoTransform`] when the 2x2
    /// pixel submatrix `[[gt[1], gt[2]], [gt[4], gt[5]]]` has a zero
    /// determinant, i.e. the transform collapses pixel space to a line or
    /// point.
    ///
    /// # Example
    ///
    /// See [`GeoTransform`](GeoTransform#example)
    fn invert(&self) -> Result<GeoTransform>;
}

impl GeoTransformEx for GeoTransform {
    fn apply(&self, pixel: f64, line: f64) -> (f64, f64) {
        (
            self[0] + pixel * self[1] + line * self[2],
            self[3] + pixel * self[4] + line * self[5],
        )
    }

    fn invert(&self) -> Result<GeoTransform> {
        let det = self[1] * self[5] - self[2] * self[4];
        if det == 0.0 {
            return Err(GeorefError::NonInvertibleGeoTransform);
        }
        let inv_det = 1.0 / det;

        let mut gt_out = [0.0; 6];
        gt_out[1] = self[5] * inv_det;
        gt_out[2] = -self[2] * inv_det;
        gt_out[4] = -self[4] * inv_det;
        gt_out[5] = self[1] * inv_det;
        // Translation terms: the inverse 2x2 applied to the negated offsets.
        gt_out[0] = -self[0] * gt_out[1] - self[3] * gt_out[2];
        gt_out[3] = -self[0] * gt_out[4] - self[3] * gt_out[5];
        Ok(gt_out)
    }
}

/// Validates an untrusted coefficient slice into a [`GeoTransform`].
///
/// The slice must hold exactly six finite values.
fn geo_transform_from_slice(gt: &[f64]) -> Result<GeoTransform> {
    let gt: GeoTransform = gt.try_into().map_err(|_| {
        GeorefError::BadArgument(format!(
            "Geo transform array length must equal 6, got {}",
            gt.len()
        ))
    })?;
    if gt.iter().any(|c| !c.is_finite()) {
        return Err(GeorefError::BadArgument(
            "Geo transform array must only contain finite numbers".to_string(),
        ));
    }
    Ok(gt)
}

/// Apply a geotransform, given as an untrusted coefficient slice, to a point.
///
/// `point` accepts anything convertible to [`Coord`]: an `(x, y)` tuple, an
/// `[x, y]` array, or a [`geo_types::Point`].
///
/// # Example
///
/// ```rust
/// use georef::apply_geo_transform;
/// let geo = apply_geo_transform(&[100.0, 10.0, 0.0, 500.0, 0.0, -10.0], (2.0, 3.0)).unwrap();
/// assert_eq!((geo.x, geo.y), (120.0, 470.0));
/// ```
pub fn apply_geo_transform(gt: &[f64], point: impl Into<Coord>) -> Result<Coord> {
    let gt = geo_transform_from_slice(gt)?;
    let point = point.into();
    let (x, y) = gt.apply(point.x, point.y);
    Ok(Coord { x, y })
}

/// Invert a geotransform given as an untrusted coefficient slice, writing
/// the result into a caller-owned buffer.
///
/// Returns `Ok(1)` on success and `Ok(0)` when the transform is singular,
/// leaving `gt_out` untouched in the latter case. A slice of the wrong
/// length or containing non-finite values fails with
/// [`GeorefError::BadArgument`] before any arithmetic.
///
/// Prefer [`GeoTransformEx::invert`]; this form exists for callers that
/// need the status-code convention of the wrapped library.
pub fn inv_geo_transform(gt_in: &[f64], gt_out: &mut GeoTransform) -> Result<i32> {
    let gt = geo_transform_from_slice(gt_in)?;
    match gt.invert() {
        Ok(inverse) => {
            *gt_out = inverse;
            Ok(1)
        }
        Err(GeorefError::NonInvertibleGeoTransform) => Ok(0),
        Err(e) => Err(e),
    }
}
