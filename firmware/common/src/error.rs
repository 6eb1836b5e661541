//! Configuration errors.

use thiserror::Error;

use crate::pins::{Pin, PinRole};

/// Why a configuration was rejected.
///
/// Line numbers are 1-based and refer to the settings file.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("line {line}: missing value")]
    MissingValue { line: usize },

    #[error("line {line}: unknown key")]
    UnknownKey { line: usize },

    #[error("line {line}: invalid value")]
    InvalidValue { line: usize },

    #[error("{first} and {second} both wired to {pin}")]
    PinConflict { first: PinRole, second: PinRole, pin: Pin },

    #[error("pulse counter on {pin}, which has no external interrupt")]
    NotInterruptCapable { pin: Pin },

    #[error("{role} wired to {pin}, which this board does not have")]
    PinUnavailable { role: PinRole, pin: Pin },

    #[error("{role} wired to {pin}, which cannot serve that role on this board")]
    PinIncapable { role: PinRole, pin: Pin },
}
