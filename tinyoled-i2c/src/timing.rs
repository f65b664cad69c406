//! Bit-bang timing constraints
//!
//! [`SoftI2c`](crate::SoftI2c) has no delay loops. The instructions between
//! two line transitions are the only thing keeping SCL high for at least
//! 600 ns and low for at least 1300 ns, so the CPU clock has an upper bound.
//! The bound is checked when the timing is constructed, which for the const
//! presets means at compile time.

/// Instruction layout of the bit loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingProfile {
    /// Tightest loop, valid up to 1.6 MHz
    Compact,
    /// Shift and one extra settle instruction while SCL is high, valid up to
    /// 4.8 MHz
    Padded,
}

impl TimingProfile {
    /// Highest validated CPU clock for this profile in Hz
    pub const fn max_cpu_hz(self) -> u32 {
        match self {
            TimingProfile::Compact => 1_600_000,
            TimingProfile::Padded => 4_800_000,
        }
    }
}

/// Timing configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// CPU clock is above what the profile was validated for
    ClockAboveCeiling {
        /// Requested CPU clock in Hz
        cpu_hz: u32,
        /// Ceiling of the selected profile in Hz
        max_hz: u32,
    },
    /// CPU clock of zero
    ZeroClock,
}

/// Validated CPU clock and loop profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    cpu_hz: u32,
    profile: TimingProfile,
}

impl Timing {
    /// ATtiny13 on the 1.2 MHz internal oscillator
    pub const ATTINY13_1M2: Self = Self::expect_valid(1_200_000, TimingProfile::Compact);

    /// ATtiny10 with the clock prescaler set to 2 (4 MHz)
    pub const ATTINY10_4M: Self = Self::expect_valid(4_000_000, TimingProfile::Padded);

    /// Check a CPU clock against the profile's ceiling
    pub const fn new(cpu_hz: u32, profile: TimingProfile) -> Result<Self, TimingError> {
        if cpu_hz == 0 {
            return Err(TimingError::ZeroClock);
        }
        let max_hz = profile.max_cpu_hz();
        if cpu_hz > max_hz {
            return Err(TimingError::ClockAboveCeiling { cpu_hz, max_hz });
        }
        Ok(Self { cpu_hz, profile })
    }

    /// Pick the tightest profile that is valid for the clock
    pub const fn for_clock(cpu_hz: u32) -> Result<Self, TimingError> {
        match Self::new(cpu_hz, TimingProfile::Compact) {
            Ok(timing) => Ok(timing),
            Err(_) => Self::new(cpu_hz, TimingProfile::Padded),
        }
    }

    const fn expect_valid(cpu_hz: u32, profile: TimingProfile) -> Self {
        match Self::new(cpu_hz, profile) {
            Ok(timing) => timing,
            Err(_) => panic!("CPU clock above the bit-bang timing ceiling"),
        }
    }

    /// CPU clock in Hz
    pub const fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    /// Bit loop profile
    pub const fn profile(&self) -> TimingProfile {
        self.profile
    }

    /// Whether the bit loop adds a settle instruction on SCL high
    pub const fn is_padded(&self) -> bool {
        matches!(self.profile, TimingProfile::Padded)
    }
}
