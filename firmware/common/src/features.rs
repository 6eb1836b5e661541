//! Feature switches and the resolution rule applied to them.
//!
//! Switches are requested in [`FeatureFlags`] and resolved once into
//! [`ResolvedFeatures`], which is what the rest of the firmware branches on.
//!
//! # Resolution
//!
//! The SSD1306 driver needs most of the free RAM, so an enabled display
//! forces the debug log off whatever was requested. Every other switch
//! passes through unchanged.

/// Every feature switch, by name.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Feature {
    /// Debug log output on the serial port.
    Debug,
    /// Diagnostic mode.
    Diagnostic,
    /// SSD1306 OLED display.
    Display,
    /// Software NMEA parsing of the GPS stream.
    SoftGps,
    /// Hardware pulse counter instead of the interrupt counter.
    HardwareCounter,
    /// External OpenLog serial logger.
    OpenLog,
    /// Hold logging until the GPS has a fix.
    WaitGpsForLog,
    /// Log raw NMEA sentences.
    GpsNmeaLog,
    /// Truncate logged positions to 100 m.
    Truncation100m,
    /// MediaTek GPS backend.
    Mediatek,
    /// SkyTraq GPS backend.
    Skytraq,
    /// Persist the cumulative dose in EEPROM.
    EepromDose,
    /// Custom function button.
    CustomFn,
    /// Dead-time compensation for the LND 7317.
    LndDeadtime,
    /// bGeigie / xGeigie type switch read at boot.
    GeigieSwitch,
    /// Nano kit wiring.
    NanoKitPin,
    /// Nano PCB kit wiring.
    NanoPcbKitPin,
    /// SHT1x temperature and humidity sensor.
    Sht1,
}

impl Feature {
    /// All switches in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Debug,
        Self::Diagnostic,
        Self::Display,
        Self::SoftGps,
        Self::HardwareCounter,
        Self::OpenLog,
        Self::WaitGpsForLog,
        Self::GpsNmeaLog,
        Self::Truncation100m,
        Self::Mediatek,
        Self::Skytraq,
        Self::EepromDose,
        Self::CustomFn,
        Self::LndDeadtime,
        Self::GeigieSwitch,
        Self::NanoKitPin,
        Self::NanoPcbKitPin,
        Self::Sht1,
    ];

    /// Settings-file key for this switch.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Diagnostic => "diagnostic",
            Self::Display => "ssd1306",
            Self::SoftGps => "softgps",
            Self::HardwareCounter => "hardware_counter",
            Self::OpenLog => "openlog",
            Self::WaitGpsForLog => "wait_gps_for_log",
            Self::GpsNmeaLog => "gps_nmea_log",
            Self::Truncation100m => "100m_truncation",
            Self::Mediatek => "mediatek",
            Self::Skytraq => "skytraq",
            Self::EepromDose => "eeprom_dose",
            Self::CustomFn => "custom_fn",
            Self::LndDeadtime => "lnd_deadtime",
            Self::GeigieSwitch => "geigie_switch",
            Self::NanoKitPin => "nanokit_pin",
            Self::NanoPcbKitPin => "nanopcbkit_pin",
            Self::Sht1 => "sht1",
        }
    }

    /// Look up a switch by its settings-file key.
    pub fn from_key(key: &str) -> Option<Self> { Self::ALL.into_iter().find(|f| f.key() == key) }
}

// =============================================================================
// Requested Flags
// =============================================================================

/// Requested feature switches, before resolution.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureFlags {
    pub debug: bool,
    pub diagnostic: bool,
    pub display: bool,
    pub soft_gps: bool,
    pub hardware_counter: bool,
    pub openlog: bool,
    pub wait_gps_for_log: bool,
    pub gps_nmea_log: bool,
    pub truncation_100m: bool,
    pub mediatek: bool,
    pub skytraq: bool,
    pub eeprom_dose: bool,
    pub custom_fn: bool,
    pub lnd_deadtime: bool,
    pub geigie_switch: bool,
    pub nanokit_pin: bool,
    pub nanopcbkit_pin: bool,
    pub sht1: bool,
}

impl FeatureFlags {
    /// Switch values the bGeigie Nano ships with.
    pub const fn nano() -> Self {
        Self {
            debug: false,
            diagnostic: false,
            display: true,
            soft_gps: true,
            hardware_counter: false,
            openlog: true,
            wait_gps_for_log: true,
            gps_nmea_log: false,
            truncation_100m: false,
            mediatek: true,
            skytraq: false,
            eeprom_dose: true,
            custom_fn: false,
            lnd_deadtime: true,
            geigie_switch: true,
            nanokit_pin: true,
            nanopcbkit_pin: true,
            sht1: true,
        }
    }

    /// Requested value of `feature`.
    pub const fn get(
        &self,
        feature: Feature,
    ) -> bool {
        match feature {
            Feature::Debug => self.debug,
            Feature::Diagnostic => self.diagnostic,
            Feature::Display => self.display,
            Feature::SoftGps => self.soft_gps,
            Feature::HardwareCounter => self.hardware_counter,
            Feature::OpenLog => self.openlog,
            Feature::WaitGpsForLog => self.wait_gps_for_log,
            Feature::GpsNmeaLog => self.gps_nmea_log,
            Feature::Truncation100m => self.truncation_100m,
            Feature::Mediatek => self.mediatek,
            Feature::Skytraq => self.skytraq,
            Feature::EepromDose => self.eeprom_dose,
            Feature::CustomFn => self.custom_fn,
            Feature::LndDeadtime => self.lnd_deadtime,
            Feature::GeigieSwitch => self.geigie_switch,
            Feature::NanoKitPin => self.nanokit_pin,
            Feature::NanoPcbKitPin => self.nanopcbkit_pin,
            Feature::Sht1 => self.sht1,
        }
    }

    /// Set the requested value of `feature`.
    pub fn set(
        &mut self,
        feature: Feature,
        enabled: bool,
    ) {
        let slot = match feature {
            Feature::Debug => &mut self.debug,
            Feature::Diagnostic => &mut self.diagnostic,
            Feature::Display => &mut self.display,
            Feature::SoftGps => &mut self.soft_gps,
            Feature::HardwareCounter => &mut self.hardware_counter,
            Feature::OpenLog => &mut self.openlog,
            Feature::WaitGpsForLog => &mut self.wait_gps_for_log,
            Feature::GpsNmeaLog => &mut self.gps_nmea_log,
            Feature::Truncation100m => &mut self.truncation_100m,
            Feature::Mediatek => &mut self.mediatek,
            Feature::Skytraq => &mut self.skytraq,
            Feature::EepromDose => &mut self.eeprom_dose,
            Feature::CustomFn => &mut self.custom_fn,
            Feature::LndDeadtime => &mut self.lnd_deadtime,
            Feature::GeigieSwitch => &mut self.geigie_switch,
            Feature::NanoKitPin => &mut self.nanokit_pin,
            Feature::NanoPcbKitPin => &mut self.nanopcbkit_pin,
            Feature::Sht1 => &mut self.sht1,
        };
        *slot = enabled;
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(
        mut self,
        feature: Feature,
        enabled: bool,
    ) -> Self {
        self.set(feature, enabled);
        self
    }

    /// Apply the resolution rule.
    pub fn resolve(self) -> ResolvedFeatures {
        let mut flags = self;
        if flags.display && flags.debug {
            #[cfg(feature = "defmt")]
            defmt::warn!("debug log forced off: SSD1306 display enabled");
            flags.debug = false;
        }
        ResolvedFeatures { flags }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self { Self::nano() }
}

// =============================================================================
// Resolved Flags
// =============================================================================

/// Feature switches after resolution. Read-only.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedFeatures {
    flags: FeatureFlags,
}

impl ResolvedFeatures {
    /// Whether `feature` is active after resolution.
    #[inline]
    pub const fn is_enabled(
        &self,
        feature: Feature,
    ) -> bool {
        self.flags.get(feature)
    }

    /// Enabled switches in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.is_enabled(*f))
    }

    #[inline]
    pub const fn debug(&self) -> bool { self.flags.debug }

    #[inline]
    pub const fn display(&self) -> bool { self.flags.display }
}

impl Default for ResolvedFeatures {
    fn default() -> Self { FeatureFlags::nano().resolve() }
}
