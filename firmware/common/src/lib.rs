//! Configuration table for the bGeigie Nano radiation monitor.
//!
//! This crate holds the platform-agnostic configuration shared between the
//! firmware and the host simulator:
//!
//! - [`identity`]: Device ID, firmware version and record header tags
//! - [`calibration`]: Tube calibration factors
//! - [`features`]: Feature switches and their resolution rule
//! - [`pins`]: Pin assignments keyed by peripheral role, conflict checks
//! - [`platform`]: Mapping of portable pins onto a concrete board
//! - [`measurement`]: Type-switch threshold and voltage divider
//! - [`config`]: The resolved, read-only [`NanoConfig`]
//! - [`settings`]: Runtime overrides from the SD card settings file
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Tests run on the host with
//! `std` enabled (via `cfg_attr`).
//!
//! # Logging
//!
//! Enable the `defmt` feature to log resolution overrides and accepted
//! settings on-target. Host tests cannot link defmt's logger, so the
//! feature is checked with `cargo check-defmt` (see `.cargo/config.toml`).

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]

pub mod calibration;
pub mod config;
pub mod error;
pub mod features;
pub mod identity;
pub mod measurement;
pub mod pins;
pub mod platform;
pub mod settings;

// Re-export commonly used items
pub use config::NanoConfig;
pub use error::ConfigError;
pub use features::{Feature, FeatureFlags, ResolvedFeatures};
pub use identity::RecordKind;
pub use pins::{Gate, InterruptChannel, Pin, PinCapability, PinMap, PinRole};
pub use platform::{PinPlatform, ProMini};
pub use settings::Settings;

// Everything handed to defmt log calls must stay loggable
#[cfg(feature = "defmt")]
const _: () = {
    const fn loggable<T: defmt::Format>() {}

    loggable::<NanoConfig>();
    loggable::<ConfigError>();
    loggable::<Settings>();
    loggable::<pins::PinConflict>();
    loggable::<measurement::GeigieType>();
};
