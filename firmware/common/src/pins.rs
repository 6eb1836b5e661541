//! Pin assignments, keyed by peripheral role.
//!
//! Pins are portable [`Pin`] values (`D10`, `A4`, ...). Turning them into
//! register-level pin numbers is the job of a [`PinPlatform`](crate::platform::PinPlatform).
//!
//! # Conflicts
//!
//! Two roles may share a pin as long as they are never active together.
//! [`PinMap::conflicts`] only reports pairs whose gating features are both
//! enabled.

use core::fmt;

use heapless::Vec;

use crate::error::ConfigError;
use crate::features::{Feature, ResolvedFeatures};

// =============================================================================
// Portable Pin
// =============================================================================

/// A board pin, as printed on the silkscreen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    /// Digital header pin `D<n>`.
    Digital(u8),
    /// Analog header pin `A<n>`.
    Analog(u8),
}

impl Pin {
    /// Parse `D<n>` or `A<n>` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (bank, number) = s.split_at_checked(1)?;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: u8 = number.parse().ok()?;
        match bank {
            "D" | "d" => Some(Self::Digital(number)),
            "A" | "a" => Some(Self::Analog(number)),
            _ => None,
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Digital(n) => write!(f, "D{n}"),
            Self::Analog(n) => write!(f, "A{n}"),
        }
    }
}

// =============================================================================
// Peripheral Roles
// =============================================================================

/// What a role needs its pin to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinCapability {
    /// Digital I/O (GPIO, UART, SPI, bit-banged bus).
    Digital,
    /// ADC input.
    Analog,
}

/// When a role drives its pin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gate {
    /// Always wired.
    Always,
    /// Wired while the feature is enabled.
    When(Feature),
    /// Wired while the feature is disabled.
    Unless(Feature),
}

/// Peripheral role a pin is wired to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinRole {
    OledClk,
    OledData,
    OledDc,
    OledCs,
    OledReset,
    GpsRx,
    GpsTx,
    OpenLogRx,
    OpenLogTx,
    OpenLogReset,
    AlarmLed,
    CustomFn,
    InterruptCounter,
    GeigieType,
    VoltageSense,
    Sht1Data,
    Sht1Clock,
    Nox,
    Co,
    Nh3,
}

impl PinRole {
    /// Number of roles.
    pub const COUNT: usize = 20;

    /// All roles in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::OledClk,
        Self::OledData,
        Self::OledDc,
        Self::OledCs,
        Self::OledReset,
        Self::GpsRx,
        Self::GpsTx,
        Self::OpenLogRx,
        Self::OpenLogTx,
        Self::OpenLogReset,
        Self::AlarmLed,
        Self::CustomFn,
        Self::InterruptCounter,
        Self::GeigieType,
        Self::VoltageSense,
        Self::Sht1Data,
        Self::Sht1Clock,
        Self::Nox,
        Self::Co,
        Self::Nh3,
    ];

    /// Settings-file key (without the `pin.` prefix).
    pub const fn key(self) -> &'static str {
        match self {
            Self::OledClk => "oled_clk",
            Self::OledData => "oled_data",
            Self::OledDc => "oled_dc",
            Self::OledCs => "oled_cs",
            Self::OledReset => "oled_reset",
            Self::GpsRx => "gps_rx",
            Self::GpsTx => "gps_tx",
            Self::OpenLogRx => "openlog_rx",
            Self::OpenLogTx => "openlog_tx",
            Self::OpenLogReset => "openlog_reset",
            Self::AlarmLed => "alarm_led",
            Self::CustomFn => "custom_fn",
            Self::InterruptCounter => "interrupt_counter",
            Self::GeigieType => "geigie_type",
            Self::VoltageSense => "voltage",
            Self::Sht1Data => "sht1_data",
            Self::Sht1Clock => "sht1_clock",
            Self::Nox => "nox",
            Self::Co => "co",
            Self::Nh3 => "nh3",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> { Self::ALL.into_iter().find(|r| r.key() == key) }

    /// Feature gating this role. The hardware counter replaces the
    /// interrupt counter, so that line idles while it is enabled.
    pub const fn gate(self) -> Gate {
        match self {
            Self::OledClk | Self::OledData | Self::OledDc | Self::OledCs | Self::OledReset => Gate::When(Feature::Display),
            Self::OpenLogRx | Self::OpenLogTx | Self::OpenLogReset => Gate::When(Feature::OpenLog),
            Self::CustomFn => Gate::When(Feature::CustomFn),
            Self::InterruptCounter => Gate::Unless(Feature::HardwareCounter),
            Self::GeigieType => Gate::When(Feature::GeigieSwitch),
            Self::Sht1Data | Self::Sht1Clock => Gate::When(Feature::Sht1),
            _ => Gate::Always,
        }
    }

    /// Whether this role is wired under `features`.
    pub const fn is_active(
        self,
        features: &ResolvedFeatures,
    ) -> bool {
        match self.gate() {
            Gate::Always => true,
            Gate::When(feature) => features.is_enabled(feature),
            Gate::Unless(feature) => !features.is_enabled(feature),
        }
    }

    /// What the pin behind this role must support.
    pub const fn capability(self) -> PinCapability {
        match self {
            Self::GeigieType | Self::VoltageSense | Self::Nox | Self::Co | Self::Nh3 => PinCapability::Analog,
            _ => PinCapability::Digital,
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Interrupt Counter Channel
// =============================================================================

/// External interrupt used by the pulse counter (0 = D2, 1 = D3).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptChannel {
    #[default]
    Int0,
    Int1,
}

impl InterruptChannel {
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Int0),
            1 => Some(Self::Int1),
            _ => None,
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Int0 => 0,
            Self::Int1 => 1,
        }
    }

    /// Pin the channel listens on.
    pub const fn pin(self) -> Pin {
        match self {
            Self::Int0 => Pin::Digital(2),
            Self::Int1 => Pin::Digital(3),
        }
    }

    /// Channel listening on `pin`, if any.
    pub const fn from_pin(pin: Pin) -> Option<Self> {
        match pin {
            Pin::Digital(2) => Some(Self::Int0),
            Pin::Digital(3) => Some(Self::Int1),
            _ => None,
        }
    }
}

// =============================================================================
// Pin Map
// =============================================================================

/// Most conflicts [`PinMap::conflicts`] reports.
pub const MAX_CONFLICTS: usize = 16;

/// Two active roles wired to the same pin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConflict {
    pub first: PinRole,
    pub second: PinRole,
    pub pin: Pin,
}

/// Pin for every role.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pins: [Pin; PinRole::COUNT],
}

impl PinMap {
    /// Nano kit / nano PCB kit wiring.
    pub const fn nano() -> Self {
        use Pin::{Analog as A, Digital as D};

        Self {
            pins: [
                D(10), // OledClk
                D(9),  // OledData
                D(11), // OledDc
                D(12), // OledCs
                D(13), // OledReset
                D(8),  // GpsRx
                D(7),  // GpsTx
                D(6),  // OpenLogRx
                D(5),  // OpenLogTx
                D(4),  // OpenLogReset
                A(4),  // AlarmLed
                D(3),  // CustomFn
                InterruptChannel::Int0.pin(),
                A(5), // GeigieType
                A(0), // VoltageSense
                A(3), // Sht1Data
                A(2), // Sht1Clock
                A(1), // Nox
                A(6), // Co
                A(7), // Nh3
            ],
        }
    }

    #[inline]
    pub const fn get(
        &self,
        role: PinRole,
    ) -> Pin {
        self.pins[role as usize]
    }

    /// Same map with `role` moved to `pin`.
    #[must_use]
    pub const fn with(
        mut self,
        role: PinRole,
        pin: Pin,
    ) -> Self {
        self.pins[role as usize] = pin;
        self
    }

    /// Same map with the pulse counter on `channel`.
    #[must_use]
    pub const fn with_interrupt_channel(
        self,
        channel: InterruptChannel,
    ) -> Self {
        self.with(PinRole::InterruptCounter, channel.pin())
    }

    /// Channel the pulse counter is wired to, if its pin is interrupt-capable.
    pub const fn interrupt_channel(&self) -> Option<InterruptChannel> {
        InterruptChannel::from_pin(self.get(PinRole::InterruptCounter))
    }

    /// `(role, pin)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (PinRole, Pin)> + '_ { PinRole::ALL.into_iter().zip(self.pins) }

    /// Pairs of active roles sharing a pin, in role order.
    pub fn conflicts(
        &self,
        features: &ResolvedFeatures,
    ) -> Vec<PinConflict, MAX_CONFLICTS> {
        let mut found = Vec::new();
        for (i, first) in PinRole::ALL.into_iter().enumerate() {
            if !first.is_active(features) {
                continue;
            }
            for second in PinRole::ALL.into_iter().skip(i + 1) {
                if second.is_active(features) && self.get(first) == self.get(second) {
                    // Full list truncated at MAX_CONFLICTS
                    let _ = found.push(PinConflict {
                        first,
                        second,
                        pin: self.get(first),
                    });
                }
            }
        }
        found
    }

    /// Check the map under `features`.
    ///
    /// An active pulse counter must sit on an external interrupt pin and no
    /// two active roles may share a pin.
    pub fn validate(
        &self,
        features: &ResolvedFeatures,
    ) -> Result<(), ConfigError> {
        if PinRole::InterruptCounter.is_active(features) && self.interrupt_channel().is_none() {
            return Err(ConfigError::NotInterruptCapable {
                pin: self.get(PinRole::InterruptCounter),
            });
        }
        match self.conflicts(features).first() {
            Some(c) => Err(ConfigError::PinConflict {
                first: c.first,
                second: c.second,
                pin: c.pin,
            }),
            None => Ok(()),
        }
    }
}

impl Default for PinMap {
    fn default() -> Self { Self::nano() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureFlags;

    fn all_on() -> ResolvedFeatures {
        let mut flags = FeatureFlags::nano();
        for feature in Feature::ALL {
            flags.set(feature, true);
        }
        flags.resolve()
    }

    #[test]
    fn test_role_table_matches_enum_order() {
        for (i, role) in PinRole::ALL.into_iter().enumerate() {
            assert_eq!(role as usize, i);
        }
    }

    #[test]
    fn test_nano_pin_literals() {
        let map = PinMap::nano();
        assert_eq!(map.get(PinRole::OledClk), Pin::Digital(10));
        assert_eq!(map.get(PinRole::OledData), Pin::Digital(9));
        assert_eq!(map.get(PinRole::OledDc), Pin::Digital(11));
        assert_eq!(map.get(PinRole::OledCs), Pin::Digital(12));
        assert_eq!(map.get(PinRole::OledReset), Pin::Digital(13));
        assert_eq!(map.get(PinRole::GpsRx), Pin::Digital(8));
        assert_eq!(map.get(PinRole::GpsTx), Pin::Digital(7));
        assert_eq!(map.get(PinRole::OpenLogRx), Pin::Digital(6));
        assert_eq!(map.get(PinRole::OpenLogTx), Pin::Digital(5));
        assert_eq!(map.get(PinRole::OpenLogReset), Pin::Digital(4));
        assert_eq!(map.get(PinRole::AlarmLed), Pin::Analog(4));
        assert_eq!(map.get(PinRole::CustomFn), Pin::Digital(3));
        assert_eq!(map.get(PinRole::InterruptCounter), Pin::Digital(2));
        assert_eq!(map.get(PinRole::GeigieType), Pin::Analog(5));
        assert_eq!(map.get(PinRole::VoltageSense), Pin::Analog(0));
        assert_eq!(map.get(PinRole::Sht1Data), Pin::Analog(3));
        assert_eq!(map.get(PinRole::Sht1Clock), Pin::Analog(2));
        assert_eq!(map.get(PinRole::Nox), Pin::Analog(1));
        assert_eq!(map.get(PinRole::Co), Pin::Analog(6));
        assert_eq!(map.get(PinRole::Nh3), Pin::Analog(7));
    }

    #[test]
    fn test_nano_pins_unique() {
        let map = PinMap::nano();
        for (a, pin_a) in map.iter() {
            for (b, pin_b) in map.iter() {
                if a != b {
                    assert_ne!(pin_a, pin_b, "{a} and {b} share {pin_a}");
                }
            }
        }
        assert!(map.conflicts(&all_on()).is_empty());
        assert!(map.validate(&all_on()).is_ok());
    }

    #[test]
    fn test_conflict_between_active_roles() {
        let map = PinMap::nano().with(PinRole::Sht1Data, Pin::Analog(4));
        let conflicts = map.conflicts(&all_on());
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].first, PinRole::AlarmLed);
        assert_eq!(conflicts[0].second, PinRole::Sht1Data);
        assert_eq!(conflicts[0].pin, Pin::Analog(4));
        assert_eq!(
            map.validate(&all_on()),
            Err(ConfigError::PinConflict {
                first: PinRole::AlarmLed,
                second: PinRole::Sht1Data,
                pin: Pin::Analog(4),
            })
        );
    }

    #[test]
    fn test_inactive_role_may_share_pin() {
        let map = PinMap::nano().with(PinRole::Sht1Data, Pin::Analog(4));
        let features = FeatureFlags::nano().with(Feature::Sht1, false).resolve();
        assert!(map.conflicts(&features).is_empty());
        assert!(map.validate(&features).is_ok());
    }

    #[test]
    fn test_interrupt_channel_one_hits_custom_fn() {
        let map = PinMap::nano().with_interrupt_channel(InterruptChannel::Int1);
        assert_eq!(map.interrupt_channel(), Some(InterruptChannel::Int1));
        // Button off by default
        assert!(map.validate(&FeatureFlags::nano().resolve()).is_ok());
        let features = FeatureFlags::nano().with(Feature::CustomFn, true).resolve();
        assert!(matches!(map.validate(&features), Err(ConfigError::PinConflict { .. })));
    }

    #[test]
    fn test_interrupt_counter_needs_interrupt_pin() {
        let map = PinMap::nano().with(PinRole::InterruptCounter, Pin::Digital(4));
        assert_eq!(map.interrupt_channel(), None);
        assert_eq!(
            map.validate(&FeatureFlags::nano().resolve()),
            Err(ConfigError::NotInterruptCapable { pin: Pin::Digital(4) })
        );
    }

    #[test]
    fn test_conflicts_truncated() {
        let mut map = PinMap::nano();
        for role in PinRole::ALL {
            map = map.with(role, Pin::Digital(2));
        }
        assert_eq!(map.conflicts(&all_on()).len(), MAX_CONFLICTS);
    }

    #[test]
    fn test_pin_parse_and_display() {
        assert_eq!(Pin::parse("D10"), Some(Pin::Digital(10)));
        assert_eq!(Pin::parse(" a4 "), Some(Pin::Analog(4)));
        assert_eq!(Pin::parse("B2"), None);
        assert_eq!(Pin::parse("D"), None);
        assert_eq!(Pin::parse("D+5"), None);
        assert_eq!(Pin::parse("A-1"), None);
        assert_eq!(Pin::parse(""), None);
        assert_eq!(Pin::Digital(10).to_string(), "D10");
        assert_eq!(Pin::Analog(7).to_string(), "A7");
    }

    #[test]
    fn test_role_keys() {
        for role in PinRole::ALL {
            assert_eq!(PinRole::from_key(role.key()), Some(role));
        }
        assert_eq!(PinRole::from_key("oled"), None);
    }

    #[test]
    fn test_role_gates() {
        let features = FeatureFlags::nano().resolve();
        assert!(PinRole::OledCs.is_active(&features));
        assert!(!PinRole::CustomFn.is_active(&features));
        assert!(PinRole::GpsRx.is_active(&features));
        assert_eq!(PinRole::Sht1Clock.gate(), Gate::When(Feature::Sht1));
        assert_eq!(PinRole::GpsTx.gate(), Gate::Always);
    }

    #[test]
    fn test_hardware_counter_idles_interrupt_line() {
        let map = PinMap::nano().with_interrupt_channel(InterruptChannel::Int1);
        let features = FeatureFlags::nano()
            .with(Feature::CustomFn, true)
            .with(Feature::HardwareCounter, true)
            .resolve();
        assert!(!PinRole::InterruptCounter.is_active(&features));
        assert!(map.conflicts(&features).is_empty());
        assert!(map.validate(&features).is_ok());

        let unused = PinMap::nano().with(PinRole::InterruptCounter, Pin::Digital(4));
        assert!(unused.validate(&features).is_ok());
    }

    #[test]
    fn test_role_capabilities() {
        assert_eq!(PinRole::VoltageSense.capability(), PinCapability::Analog);
        assert_eq!(PinRole::GeigieType.capability(), PinCapability::Analog);
        assert_eq!(PinRole::Nh3.capability(), PinCapability::Analog);
        assert_eq!(PinRole::AlarmLed.capability(), PinCapability::Digital);
        assert_eq!(PinRole::Sht1Data.capability(), PinCapability::Digital);
    }
}
