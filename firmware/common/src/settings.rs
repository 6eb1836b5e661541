//! Runtime overrides read from the SD card settings file.
//!
//! # Format
//!
//! One `key=value` per line. `#` starts a comment, blank lines are skipped
//! and whitespace around keys and values is ignored.
//!
//! ```text
//! # unit 1042, PCB kit with the button fitted
//! device_id=1042
//! custom_fn=on
//! interrupt_channel=0
//! pin.alarm_led=A4
//! ```
//!
//! Keys: `device_id`, `interrupt_channel` (`0`/`1`), any feature key
//! (`0`/`1`, `true`/`false`, `on`/`off`) and `pin.<role>` (`D<n>`/`A<n>`).
//! Anything not mentioned keeps its compiled-in value.

use crate::config::NanoConfig;
use crate::error::ConfigError;
use crate::features::{Feature, FeatureFlags};
use crate::identity::DeviceIdentity;
use crate::pins::{InterruptChannel, Pin, PinMap, PinRole};
use crate::platform::PinPlatform;

const PIN_PREFIX: &str = "pin.";

/// Compiled-in values with settings-file overrides applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub identity: DeviceIdentity,
    pub flags: FeatureFlags,
    pub pins: PinMap,
}

impl Settings {
    /// Parse `text` over the compiled-in defaults. Stops at the first bad line.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        for (index, raw) in text.lines().enumerate() {
            settings.apply_line(index + 1, raw)?;
        }
        Ok(settings)
    }

    fn apply_line(
        &mut self,
        line: usize,
        raw: &str,
    ) -> Result<(), ConfigError> {
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            return Ok(());
        }

        let Some((key, value)) = content.split_once('=') else {
            return Err(ConfigError::MissingValue { line });
        };
        let (key, value) = (key.trim(), value.trim());
        if value.is_empty() {
            return Err(ConfigError::MissingValue { line });
        }

        if key == "device_id" {
            let id = value.parse().map_err(|_| ConfigError::InvalidValue { line })?;
            self.identity = self.identity.with_device_id(id);
        } else if key == "interrupt_channel" {
            let channel = value
                .parse()
                .ok()
                .and_then(InterruptChannel::from_index)
                .ok_or(ConfigError::InvalidValue { line })?;
            self.pins = self.pins.with_interrupt_channel(channel);
        } else if let Some(role) = key.strip_prefix(PIN_PREFIX) {
            let role = PinRole::from_key(role).ok_or(ConfigError::UnknownKey { line })?;
            let pin = Pin::parse(value).ok_or(ConfigError::InvalidValue { line })?;
            if role == PinRole::InterruptCounter && InterruptChannel::from_pin(pin).is_none() {
                return Err(ConfigError::InvalidValue { line });
            }
            self.pins = self.pins.with(role, pin);
        } else {
            let feature = Feature::from_key(key).ok_or(ConfigError::UnknownKey { line })?;
            let enabled = parse_switch(value).ok_or(ConfigError::InvalidValue { line })?;
            self.flags.set(feature, enabled);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("settings line {}: {=str}={=str}", line, key, value);

        Ok(())
    }

    /// Resolve and validate.
    pub fn build(self) -> Result<NanoConfig, ConfigError> {
        let config = NanoConfig::from_parts(self.identity, self.flags, self.pins);
        config.validate()?;
        Ok(config)
    }

    /// Resolve and validate against platform `P`.
    pub fn build_for<P: PinPlatform>(self) -> Result<NanoConfig, ConfigError> {
        let config = NanoConfig::from_parts(self.identity, self.flags, self.pins);
        config.validate_for::<P>()?;
        Ok(config)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    const ON: [&str; 3] = ["1", "true", "on"];
    const OFF: [&str; 3] = ["0", "false", "off"];

    if ON.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        Some(true)
    } else if OFF.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        Some(false)
    } else {
        None
    }
}
