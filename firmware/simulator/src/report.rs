//! Plain-text rendering of a resolved configuration.

use std::fmt::{self, Write};

use nano_common::identity::{HEADER, HEADER_SENSOR};
use nano_common::{Feature, FeatureFlags, NanoConfig, PinPlatform};

/// Write the full table for `config`, as the firmware would see it on `P`.
///
/// `requested` is only used to flag switches the resolution rule overrode.
pub fn write_report<P: PinPlatform>(
    out: &mut impl Write,
    config: &NanoConfig,
    requested: &FeatureFlags,
) -> fmt::Result {
    let identity = config.identity();
    let calibration = config.calibration();
    let divider = config.voltage_divider();

    writeln!(out, "bGeigie Nano {}", identity.version())?;
    writeln!(out, "  device id        {}", identity.device_id())?;
    writeln!(out, "  headers          ${HEADER} ${HEADER_SENSOR}")?;
    writeln!(out, "  cpm factor       {}", calibration.cpm_factor())?;
    writeln!(out, "  bq/m2 factor     {}", calibration.bqm2_factor())?;
    writeln!(out, "  type threshold   {}", config.geigie_type_threshold())?;
    writeln!(out, "  divider          R1={} R2={}", divider.r1, divider.r2)?;

    writeln!(out, "features")?;
    let features = config.features();
    for feature in Feature::ALL {
        let state = if features.is_enabled(feature) { "on" } else { "off" };
        let forced = requested.get(feature) != features.is_enabled(feature);
        let note = if forced { " (forced)" } else { "" };
        writeln!(out, "  {:<18} {state}{note}", feature.key())?;
    }

    writeln!(out, "pins")?;
    for (role, pin) in config.pins().iter() {
        let number = match P::pin_number(pin) {
            Some(n) => n.to_string(),
            None => "--".to_string(),
        };
        let active = if role.is_active(features) { "" } else { " (idle)" };
        writeln!(out, "  {:<18} {:<4} {number:>2}{active}", role.key(), pin.to_string())?;
    }

    Ok(())
}
