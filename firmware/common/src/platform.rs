//! Platform adaptation layer.
//!
//! The configuration only knows silkscreen pins. A [`PinPlatform`] turns
//! them into the numbers the HAL expects and knows which pins exist.

use crate::error::ConfigError;
use crate::pins::{Pin, PinCapability, PinMap};

/// Maps portable pins onto one board.
pub trait PinPlatform {
    /// Number of digital header pins (`D0..`).
    const DIGITAL_PINS: u8;

    /// Number of analog header pins (`A0..`).
    const ANALOG_PINS: u8;

    /// HAL pin number for `pin`, or `None` if the board lacks it.
    fn pin_number(pin: Pin) -> Option<u8>;

    /// Whether `pin` can serve a role needing `capability`.
    fn supports(
        pin: Pin,
        capability: PinCapability,
    ) -> bool;

    /// Reject maps that use pins the board does not have, or pins that
    /// cannot do what their role needs.
    fn check(map: &PinMap) -> Result<(), ConfigError> {
        for (role, pin) in map.iter() {
            if Self::pin_number(pin).is_none() {
                return Err(ConfigError::PinUnavailable { role, pin });
            }
            if !Self::supports(pin, role.capability()) {
                return Err(ConfigError::PinIncapable { role, pin });
            }
        }
        Ok(())
    }
}

/// Arduino Pro Mini (ATmega328P), the bGeigie Nano main board.
///
/// Analog pins continue the digital numbering: `A0` is 14, `A7` is 21.
/// `A0`-`A5` double as GPIO, `A6`/`A7` are ADC-only. `D<n>` pins have no ADC.
#[derive(Clone, Copy, Debug)]
pub struct ProMini;

/// `A0`-`A5` are also port C GPIO.
const PRO_MINI_ANALOG_GPIO: u8 = 6;

impl PinPlatform for ProMini {
    const DIGITAL_PINS: u8 = 14;
    const ANALOG_PINS: u8 = 8;

    fn pin_number(pin: Pin) -> Option<u8> {
        match pin {
            Pin::Digital(n) if n < Self::DIGITAL_PINS => Some(n),
            Pin::Analog(n) if n < Self::ANALOG_PINS => Some(Self::DIGITAL_PINS + n),
            _ => None,
        }
    }

    fn supports(
        pin: Pin,
        capability: PinCapability,
    ) -> bool {
        match (pin, capability) {
            (Pin::Digital(n), PinCapability::Digital) => n < Self::DIGITAL_PINS,
            (Pin::Analog(n), PinCapability::Digital) => n < PRO_MINI_ANALOG_GPIO,
            (Pin::Analog(n), PinCapability::Analog) => n < Self::ANALOG_PINS,
            (Pin::Digital(_), PinCapability::Analog) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::PinRole;

    #[test]
    fn test_pro_mini_numbering() {
        assert_eq!(ProMini::pin_number(Pin::Digital(0)), Some(0));
        assert_eq!(ProMini::pin_number(Pin::Digital(13)), Some(13));
        assert_eq!(ProMini::pin_number(Pin::Analog(0)), Some(14));
        assert_eq!(ProMini::pin_number(Pin::Analog(4)), Some(18));
        assert_eq!(ProMini::pin_number(Pin::Analog(7)), Some(21));
    }

    #[test]
    fn test_pro_mini_missing_pins() {
        assert_eq!(ProMini::pin_number(Pin::Digital(14)), None);
        assert_eq!(ProMini::pin_number(Pin::Analog(8)), None);
    }

    #[test]
    fn test_pro_mini_capabilities() {
        assert!(ProMini::supports(Pin::Digital(13), PinCapability::Digital));
        assert!(ProMini::supports(Pin::Analog(5), PinCapability::Digital));
        assert!(!ProMini::supports(Pin::Analog(6), PinCapability::Digital));
        assert!(!ProMini::supports(Pin::Analog(7), PinCapability::Digital));
        assert!(ProMini::supports(Pin::Analog(7), PinCapability::Analog));
        assert!(!ProMini::supports(Pin::Digital(0), PinCapability::Analog));
    }

    #[test]
    fn test_check_rejects_digital_role_on_adc_only_pin() {
        let map = PinMap::nano().with(PinRole::AlarmLed, Pin::Analog(6)).with(PinRole::Co, Pin::Analog(4));
        assert_eq!(
            ProMini::check(&map),
            Err(ConfigError::PinIncapable {
                role: PinRole::AlarmLed,
                pin: Pin::Analog(6),
            })
        );

        let map = PinMap::nano()
            .with(PinRole::Sht1Data, Pin::Analog(7))
            .with(PinRole::Sht1Clock, Pin::Analog(6))
            .with(PinRole::Co, Pin::Analog(3))
            .with(PinRole::Nh3, Pin::Analog(2));
        assert_eq!(
            ProMini::check(&map),
            Err(ConfigError::PinIncapable {
                role: PinRole::Sht1Data,
                pin: Pin::Analog(7),
            })
        );
    }

    #[test]
    fn test_check_rejects_analog_role_on_digital_pin() {
        let map = PinMap::nano().with(PinRole::VoltageSense, Pin::Digital(0));
        assert_eq!(
            ProMini::check(&map),
            Err(ConfigError::PinIncapable {
                role: PinRole::VoltageSense,
                pin: Pin::Digital(0),
            })
        );
    }

    #[test]
    fn test_nano_map_fits_pro_mini() {
        assert!(ProMini::check(&PinMap::nano()).is_ok());
    }

    #[test]
    fn test_check_reports_role() {
        let map = PinMap::nano().with(PinRole::Co, Pin::Analog(9));
        assert_eq!(
            ProMini::check(&map),
            Err(ConfigError::PinUnavailable {
                role: PinRole::Co,
                pin: Pin::Analog(9),
            })
        );
    }
}
