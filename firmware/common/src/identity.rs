//! Device identity and log record header tags.
//!
//! Every record the logger writes starts with a header tag followed by the
//! device ID, so these values must match what the Safecast ingest side expects.

// =============================================================================
// Identity Constants
// =============================================================================

/// Device identifier stamped into every log record.
pub const DEVICE_ID: u16 = 210;

/// Firmware version string reported at boot and in the log header.
pub const VERSION: &str = "2.1.0";

/// Header tag prefixing normal radiation records.
pub const HEADER: &str = "BNRDD";

/// Header tag prefixing sensor-status records.
pub const HEADER_SENSOR: &str = "BNXSTS";

const _: () = assert!(!HEADER.is_empty());
const _: () = assert!(!HEADER_SENSOR.is_empty());

// =============================================================================
// Record Kinds
// =============================================================================

/// Kind of record emitted to the logger.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordKind {
    /// Periodic radiation reading (`$BNRDD`).
    #[default]
    Radiation,

    /// Environmental sensor status (`$BNXSTS`).
    SensorStatus,
}

impl RecordKind {
    /// Header tag for this record kind.
    #[inline]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Radiation => HEADER,
            Self::SensorStatus => HEADER_SENSOR,
        }
    }
}

// =============================================================================
// Device Identity
// =============================================================================

/// Identity of a single unit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    device_id: u16,
    version: &'static str,
}

impl DeviceIdentity {
    /// Compiled-in identity.
    pub const fn nano() -> Self {
        Self {
            device_id: DEVICE_ID,
            version: VERSION,
        }
    }

    /// Same identity with a per-unit device ID (set from the settings file).
    pub const fn with_device_id(
        self,
        device_id: u16,
    ) -> Self {
        Self { device_id, ..self }
    }

    #[inline]
    pub const fn device_id(&self) -> u16 { self.device_id }

    #[inline]
    pub const fn version(&self) -> &'static str { self.version }
}

impl Default for DeviceIdentity {
    fn default() -> Self { Self::nano() }
}
