//! Georeferencing primitives for raster and vector data.
//!
//! The numeric heart of the crate is the affine [`GeoTransform`] mapping
//! between pixel/line raster coordinates and projected coordinates, in both
//! directions, together with a decimal-degree to degrees/minutes/seconds
//! formatter ([`dec_to_dms`]). Around these sit the binding-layer pieces a
//! host application needs to talk to a geospatial engine: an injectable
//! [`config::ConfigOptions`] store and the [`DriverManager`] dataset-open
//! registry.
//!
//! ## Use
//!
//! ```
//! use georef::{dec_to_dms, AngleAxis, GeoTransformEx};
//!
//! // Pixel (10, 20) of a 0.5 degree/pixel north-up image anchored at (-123, 49):
//! let transform = [-123.0, 0.5, 0.0, 49.0, 0.0, -0.5];
//! let (x, y) = transform.apply(10.0, 20.0);
//! assert_eq!((x, y), (-118.0, 39.0));
//!
//! // And back again:
//! let (pixel, line) = transform.invert().unwrap().apply(x, y);
//! assert_eq!((pixel, line), (10.0, 20.0));
//!
//! // Render the corner for display:
//! assert_eq!(dec_to_dms(x, AngleAxis::Long, 2).unwrap(), "118d0'0.00\"W");
//! ```

pub mod config;
mod dataset;
mod dms;
pub mod errors;
mod geo_transform;
mod options;

pub use dataset::{Dataset, DatasetDriver, DriverManager};
pub use dms::{dec_to_dms, AngleAxis, DEFAULT_DMS_PRECISION};
pub use geo_transform::{apply_geo_transform, inv_geo_transform, GeoTransform, GeoTransformEx};
pub use options::{AccessMode, OpenFlags};
