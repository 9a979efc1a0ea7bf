use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use georef::errors::Result;
use georef::{AccessMode, Dataset, DatasetDriver, DriverManager, OpenFlags};

const MAGIC: &[u8] = b"XYZG";

/// A toy raster backend that claims files starting with a 4-byte magic
/// header and keeps the remaining payload as its dataset state.
struct MagicDriver;

struct MagicDataset {
    payload: Vec<u8>,
}

impl DatasetDriver for MagicDriver {
    fn short_name(&self) -> &str {
        "MAGIC"
    }

    fn family(&self) -> OpenFlags {
        OpenFlags::RASTER
    }

    fn open(&self, path: &Path, mode: AccessMode) -> Result<Option<Dataset>> {
        let Ok(mut file) = fs::File::open(path) else {
            return Ok(None);
        };
        let mut header = [0u8; 4];
        if file.read_exact(&mut header).is_err() || header != MAGIC {
            return Ok(None);
        }
        let mut payload = Vec::new();
        if file.read_to_end(&mut payload).is_err() {
            return Ok(None);
        }
        Ok(Some(Dataset::new(
            self.short_name(),
            mode,
            Box::new(MagicDataset { payload }),
        )))
    }
}

fn temp_file(name: &str, contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_open_recognized_file() {
    let (_dir, path) = temp_file("scene.xyz", b"XYZGpayload");

    let mut manager = DriverManager::new();
    manager.register_driver(Box::new(MagicDriver));

    let dataset = manager.open(&path, AccessMode::ReadOnly).unwrap();
    assert_eq!(dataset.driver_name(), "MAGIC");
    assert_eq!(dataset.access_mode(), AccessMode::ReadOnly);

    let backend = dataset.backend::<MagicDataset>().unwrap();
    assert_eq!(backend.payload, b"payload");
}

#[test]
fn test_open_unrecognized_file() {
    let (_dir, path) = temp_file("scene.xyz", b"not the header");

    let mut manager = DriverManager::new();
    manager.register_driver(Box::new(MagicDriver));

    assert!(manager.open(&path, AccessMode::ReadOnly).is_err());
}

#[test]
fn test_open_missing_file() {
    let mut manager = DriverManager::new();
    manager.register_driver(Box::new(MagicDriver));

    assert!(manager
        .open("/no/such/file.xyz", AccessMode::ReadOnly)
        .is_err());
}

#[test]
fn test_open_with_mode_string() {
    let (_dir, path) = temp_file("scene.xyz", b"XYZG");

    let mut manager = DriverManager::new();
    manager.register_driver(Box::new(MagicDriver));

    let mode: AccessMode = "r+".parse().unwrap();
    let dataset = manager.open(&path, mode).unwrap();
    assert_eq!(dataset.access_mode(), AccessMode::Update);

    assert!("w".parse::<AccessMode>().is_err());
}

#[test]
fn test_deregistered_driver_no_longer_opens() {
    let (_dir, path) = temp_file("scene.xyz", b"XYZG");

    let mut manager = DriverManager::new();
    manager.register_driver(Box::new(MagicDriver));
    assert!(manager.open(&path, AccessMode::ReadOnly).is_ok());

    assert!(manager.deregister_driver("MAGIC"));
    assert_eq!(manager.count(), 0);
    assert!(manager.open(&path, AccessMode::ReadOnly).is_err());
}
