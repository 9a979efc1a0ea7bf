//! Dataset open plumbing.
//!
//! The actual format drivers live in the wrapped geospatial engine and are
//! out of scope here; this module only models the binding-layer glue: an
//! opaque [`Dataset`] handle, the [`DatasetDriver`] trait a backend plugs
//! into, and the [`DriverManager`] registry that tries drivers in priority
//! order when opening a path.

use std::any::Any;
use std::path::{Path, PathBuf};

use crate::errors::{GeorefError, Result};
use crate::options::{AccessMode, OpenFlags};

/// An opaque handle to an open dataset.
///
/// The payload is whatever the claiming driver produced; callers that know
/// the backend type can recover it with [`Dataset::backend`].
pub struct Dataset {
    driver: String,
    mode: AccessMode,
    backend: Box<dyn Any + Send>,
}

impl Dataset {
    /// Wraps a backend payload produced by `driver`.
    pub fn new(driver: &str, mode: AccessMode, backend: Box<dyn Any + Send>) -> Self {
        Self {
            driver: driver.to_string(),
            mode,
            backend,
        }
    }

    /// Short name of the driver that opened this dataset.
    pub fn driver_name(&self) -> &str {
        &self.driver
    }

    pub fn access_mode(&self) -> AccessMode {
        self.mode
    }

    /// Downcasts the backend payload, if it is of type `T`.
    pub fn backend<T: 'static>(&self) -> Option<&T> {
        self.backend.downcast_ref()
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("driver", &self.driver)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// A backend format family capable of opening datasets.
pub trait DatasetDriver {
    /// Unique short name, e.g. `"GTiff"`.
    fn short_name(&self) -> &str;

    /// Format family of this driver, [`OpenFlags::RASTER`] or
    /// [`OpenFlags::VECTOR`].
    fn family(&self) -> OpenFlags;

    /// Attempts to open `path`. Returns `Ok(None)` when this driver does
    /// not recognize the source, leaving it to the next driver in the
    /// registry; `Err` reports a source this driver claims but cannot open.
    fn open(&self, path: &Path, mode: AccessMode) -> Result<Option<Dataset>>;
}

/// Ordered registry of dataset drivers.
///
/// Drivers are consulted in registration order, so earlier registrations
/// take priority. The registry is an owned value rather than process-global
/// state; create one per engine instance (or per test).
#[derive(Default)]
pub struct DriverManager {
    drivers: Vec<Box<dyn DatasetDriver>>,
}

impl DriverManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a driver at the lowest priority position.
    pub fn register_driver(&mut self, driver: Box<dyn DatasetDriver>) {
        self.drivers.push(driver);
    }

    /// Removes the driver with the given short name. Returns `false` if no
    /// such driver was registered.
    pub fn deregister_driver(&mut self, short_name: &str) -> bool {
        let before = self.drivers.len();
        self.drivers.retain(|d| d.short_name() != short_name);
        self.drivers.len() != before
    }

    pub fn get_driver_by_name(&self, short_name: &str) -> Option<&dyn DatasetDriver> {
        self.drivers
            .iter()
            .find(|d| d.short_name() == short_name)
            .map(|d| d.as_ref())
    }

    pub fn count(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Deregisters all drivers.
    pub fn destroy(&mut self) {
        self.drivers.clear();
    }

    /// Opens `path` with the given access mode, consulting every registered
    /// driver in priority order.
    pub fn open(&self, path: impl AsRef<Path>, mode: AccessMode) -> Result<Dataset> {
        self.open_ex(path, mode.into())
    }

    /// Opens `path`, restricting candidate drivers to the format families
    /// selected in `flags` (all families when none is selected).
    ///
    /// Fails with [`GeorefError::UnsupportedSource`] when no driver claims
    /// the source.
    pub fn open_ex(&self, path: impl AsRef<Path>, flags: OpenFlags) -> Result<Dataset> {
        let path = path.as_ref();
        let mode = flags.access_mode();
        for driver in &self.drivers {
            if !flags.allows_family(driver.family()) {
                continue;
            }
            if let Some(dataset) = driver.open(path, mode)? {
                return Ok(dataset);
            }
        }
        Err(GeorefError::UnsupportedSource(PathBuf::from(path)))
    }
}

impl std::fmt::Debug for DriverManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.drivers.iter().map(|d| d.short_name()))
            .finish()
    }
}
