//! The resolved configuration table.
//!
//! [`NanoConfig`] is built once at boot and handed to every consumer by
//! reference. Fields are private and there are no setters, so what a
//! consumer reads at boot is what it reads for the rest of the run.
//!
//! # Usage
//!
//! ```ignore
//! let config = NanoConfig::nano();
//! config.validate()?;
//! logger.start(&config);
//! ```

use crate::calibration::Calibration;
use crate::error::ConfigError;
use crate::features::{FeatureFlags, ResolvedFeatures};
use crate::identity::DeviceIdentity;
use crate::measurement::{GEIGIE_TYPE_THRESHOLD, VoltageDivider};
use crate::pins::{InterruptChannel, PinMap};
use crate::platform::PinPlatform;

/// Everything the firmware reads from configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NanoConfig {
    identity: DeviceIdentity,
    calibration: Calibration,
    features: ResolvedFeatures,
    pins: PinMap,
    geigie_type_threshold: u16,
    voltage_divider: VoltageDivider,
}

impl NanoConfig {
    /// Compiled-in configuration.
    pub fn nano() -> Self { Self::new(FeatureFlags::nano()) }

    /// Compiled-in constants with `requested` switches, resolved.
    pub fn new(requested: FeatureFlags) -> Self { Self::from_parts(DeviceIdentity::nano(), requested, PinMap::nano()) }

    /// Resolve `requested` and assemble the table around `identity` and `pins`.
    pub fn from_parts(
        identity: DeviceIdentity,
        requested: FeatureFlags,
        pins: PinMap,
    ) -> Self {
        Self {
            identity,
            calibration: Calibration::nano(),
            features: requested.resolve(),
            pins,
            geigie_type_threshold: GEIGIE_TYPE_THRESHOLD,
            voltage_divider: VoltageDivider::nano(),
        }
    }

    /// Pin conflicts between active roles, pulse counter placement.
    pub fn validate(&self) -> Result<(), ConfigError> { self.pins.validate(&self.features) }

    /// [`validate`](Self::validate), then check every pin exists on `P`.
    pub fn validate_for<P: PinPlatform>(&self) -> Result<(), ConfigError> {
        self.validate()?;
        P::check(&self.pins)
    }

    #[inline]
    pub const fn identity(&self) -> &DeviceIdentity { &self.identity }

    #[inline]
    pub const fn calibration(&self) -> &Calibration { &self.calibration }

    #[inline]
    pub const fn features(&self) -> &ResolvedFeatures { &self.features }

    #[inline]
    pub const fn pins(&self) -> &PinMap { &self.pins }

    /// Pulse counter channel. Always set in valid configurations unless
    /// the hardware counter is in use.
    #[inline]
    pub const fn interrupt_channel(&self) -> Option<InterruptChannel> { self.pins.interrupt_channel() }

    #[inline]
    pub const fn geigie_type_threshold(&self) -> u16 { self.geigie_type_threshold }

    #[inline]
    pub const fn voltage_divider(&self) -> &VoltageDivider { &self.voltage_divider }
}

impl Default for NanoConfig {
    fn default() -> Self { Self::nano() }
}
