use std::str::FromStr;

use bitflags::bitflags;

use crate::errors::{GeorefError, Result};

/// Access mode for [`crate::DriverManager::open`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Open for reading only (mode string `"r"`, the default).
    #[default]
    ReadOnly,
    /// Open for reading and updating in place (mode string `"r+"`).
    Update,
}

impl FromStr for AccessMode {
    type Err = GeorefError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" => Ok(AccessMode::ReadOnly),
            "r+" => Ok(AccessMode::Update),
            _ => Err(GeorefError::BadArgument(
                "Invalid open mode. Must be \"r\" or \"r+\"".to_string(),
            )),
        }
    }
}

bitflags! {
    /// Extended open flags used by [`crate::DriverManager::open_ex`].
    ///
    /// Selects the access mode and which backend format families are
    /// allowed to claim the source.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// Open in read-only mode (default).
        const READONLY = 0x00;
        /// Open in update mode.
        const UPDATE = 0x01;
        /// Allow raster and vector drivers to be used.
        const ALL = 0x00;
        /// Allow raster drivers to be used.
        const RASTER = 0x02;
        /// Allow vector drivers to be used.
        const VECTOR = 0x04;
        /// Report an error when no driver claims the source.
        const VERBOSE_ERROR = 0x40;
    }
}

impl Default for OpenFlags {
    fn default() -> OpenFlags {
        OpenFlags::READONLY
    }
}

impl From<AccessMode> for OpenFlags {
    fn from(mode: AccessMode) -> OpenFlags {
        match mode {
            AccessMode::Update => OpenFlags::UPDATE,
            AccessMode::ReadOnly => OpenFlags::READONLY,
        }
    }
}

impl OpenFlags {
    /// The access mode encoded by these flags.
    pub fn access_mode(&self) -> AccessMode {
        if self.contains(OpenFlags::UPDATE) {
            AccessMode::Update
        } else {
            AccessMode::ReadOnly
        }
    }

    /// Whether a driver of the given family may claim the source. Selecting
    /// no family at all means every family is allowed.
    pub fn allows_family(&self, family: OpenFlags) -> bool {
        let families = self.intersection(OpenFlags::RASTER | OpenFlags::VECTOR);
        families.is_empty() || families.intersects(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_mode_from_str() {
        assert_eq!("r".parse::<AccessMode>().unwrap(), AccessMode::ReadOnly);
        assert_eq!("r+".parse::<AccessMode>().unwrap(), AccessMode::Update);
        for bad in ["w", "rw", "R", "r++", ""] {
            assert!(matches!(
                bad.parse::<AccessMode>(),
                Err(GeorefError::BadArgument(_))
            ));
        }
    }

    #[test]
    fn test_flags_from_mode() {
        assert_eq!(OpenFlags::from(AccessMode::ReadOnly), OpenFlags::READONLY);
        assert_eq!(OpenFlags::from(AccessMode::Update), OpenFlags::UPDATE);
        assert_eq!(OpenFlags::default().access_mode(), AccessMode::ReadOnly);
    }

    #[test]
    fn test_family_selection() {
        let flags = OpenFlags::RASTER;
        assert!(flags.allows_family(OpenFlags::RASTER));
        assert!(!flags.allows_family(OpenFlags::VECTOR));

        // No family selected: everything is allowed.
        let flags = OpenFlags::UPDATE;
        assert!(flags.allows_family(OpenFlags::RASTER));
        assert!(flags.allows_family(OpenFlags::VECTOR));
    }
}
