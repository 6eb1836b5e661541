//! Derived constants read by the measurement code.
//!
//! # Voltage Divider
//!
//! ```text
//! GND -- R2 -- A0 -- R1 -- VCC
//! ```
//!
//! The sense pin sees `VCC * R2 / (R1 + R2)`.

// =============================================================================
// Geigie Type Switch
// =============================================================================

/// ADC reading above which the type selector reads as bGeigie.
pub const GEIGIE_TYPE_THRESHOLD: u16 = 500;

// 10-bit ADC
const _: () = assert!(GEIGIE_TYPE_THRESHOLD < 1024);

/// Hardware sub-variant, read from the type selector at boot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeigieType {
    #[default]
    BGeigie,
    XGeigie,
}

impl GeigieType {
    /// Classify a raw selector reading. The selector is pulled up on a
    /// bGeigie and tied low on an xGeigie.
    #[inline]
    pub const fn classify(
        reading: u16,
        threshold: u16,
    ) -> Self {
        if reading > threshold { Self::BGeigie } else { Self::XGeigie }
    }
}

// =============================================================================
// Battery Voltage Divider
// =============================================================================

/// Upper arm (sense pin to VCC), ohms.
pub const VOLTAGE_R1: u32 = 10_000;

/// Lower arm (GND to sense pin), ohms.
pub const VOLTAGE_R2: u32 = 1_000;

const _: () = assert!(VOLTAGE_R2 > 0);

/// Resistor pair feeding the voltage sense pin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoltageDivider {
    pub r1: u32,
    pub r2: u32,
}

impl VoltageDivider {
    pub const fn nano() -> Self {
        Self {
            r1: VOLTAGE_R1,
            r2: VOLTAGE_R2,
        }
    }

    /// Supply voltage for a sense-pin voltage, both in millivolts.
    pub const fn input_millivolts(
        &self,
        sense_mv: u32,
    ) -> u32 {
        if self.r2 == 0 {
            return u32::MAX;
        }
        let scaled = sense_mv as u64 * (self.r1 as u64 + self.r2 as u64) / self.r2 as u64;
        if scaled > u32::MAX as u64 { u32::MAX } else { scaled as u32 }
    }
}

impl Default for VoltageDivider {
    fn default() -> Self { Self::nano() }
}
