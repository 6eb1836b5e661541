//! Tube calibration factors.
//!
//! The factors are handed to the dose computation as-is; no conversion
//! happens here.

/// CPM per uSv/h for the LND 7317 pancake tube.
pub const CPM_FACTOR: u32 = 334;

/// Counts to Bq/m² surface activity multiplier.
pub const BQM2_FACTOR: u32 = 37;

const _: () = assert!(CPM_FACTOR > 0);
const _: () = assert!(BQM2_FACTOR > 0);

/// Calibration factors read by the dose computation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    cpm_factor: u32,
    bqm2_factor: u32,
}

impl Calibration {
    pub const fn nano() -> Self {
        Self {
            cpm_factor: CPM_FACTOR,
            bqm2_factor: BQM2_FACTOR,
        }
    }

    #[inline]
    pub const fn cpm_factor(&self) -> u32 { self.cpm_factor }

    #[inline]
    pub const fn bqm2_factor(&self) -> u32 { self.bqm2_factor }
}

impl Default for Calibration {
    fn default() -> Self { Self::nano() }
}
