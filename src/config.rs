//! Device settings and the parameters of a sampling run.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainsFrequency {
    #[default]
    Hz50,
    Hz60,
}

impl MainsFrequency {
    pub(crate) fn sixty_hertz(self) -> i16 {
        match self {
            Self::Hz50 => 0,
            Self::Hz60 => 1,
        }
    }
}

/// Thermocouple calibration curve applied to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThermocoupleType {
    B,
    E,
    J,
    #[default]
    K,
    N,
    R,
    S,
    T,
    /// Raw voltage in millivolts.
    X,
    Disabled,
}

impl ThermocoupleType {
    pub fn code(self) -> i8 {
        (match self {
            Self::B        => b'B',
            Self::E        => b'E',
            Self::J        => b'J',
            Self::K        => b'K',
            Self::N        => b'N',
            Self::R        => b'R',
            Self::S        => b'S',
            Self::T        => b'T',
            Self::X        => b'X',
            Self::Disabled => b' ',
        }) as i8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampStyle {
    /// `YYYY-mm-dd HH:MM:SS` local time.
    #[default]
    WallClock,
    /// `HH:MM:SS.ss` since the start of the run.
    Elapsed,
}

impl TimestampStyle {
    pub fn header(self) -> Option<&'static str> {
        match self {
            Self::WallClock => Some("Time, Cold Junction Temp (C), Channel 1 Temp (C)"),
            Self::Elapsed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfiguration {
    pub mains: MainsFrequency,
    /// Thermocouple type of channel 1.
    pub thermocouple: ThermocoupleType,
    pub num_samples: usize,
    /// Delay between consecutive samples; zero relies on the time `get_single` blocks.
    pub interval: Duration,
    pub timestamp: TimestampStyle,
}

impl SamplingConfiguration {
    pub const DEFAULT_NUM_SAMPLES: usize = 15;

    /// Type K probe, a sample every 8 seconds, wall-clock timestamps.
    pub fn single_mode() -> Self {
        Self {
            mains: MainsFrequency::Hz50,
            thermocouple: ThermocoupleType::K,
            num_samples: Self::DEFAULT_NUM_SAMPLES,
            interval: Duration::from_secs(8),
            timestamp: TimestampStyle::WallClock,
        }
    }

    /// Type S probe, back-to-back samples, elapsed timestamps.
    pub fn collection() -> Self {
        Self {
            mains: MainsFrequency::Hz50,
            thermocouple: ThermocoupleType::S,
            num_samples: Self::DEFAULT_NUM_SAMPLES,
            interval: Duration::ZERO,
            timestamp: TimestampStyle::Elapsed,
        }
    }
}

impl Default for SamplingConfiguration {
    fn default() -> Self {
        Self::single_mode()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_thermocouple_codes() {
        assert_eq!(ThermocoupleType::B.code(), 66);
        assert_eq!(ThermocoupleType::K.code(), 75);
        assert_eq!(ThermocoupleType::S.code(), 83);
        assert_eq!(ThermocoupleType::X.code(), 88);
        assert_eq!(ThermocoupleType::Disabled.code(), 32);
    }

    #[test]
    fn test_presets() {
        let single = SamplingConfiguration::default();
        assert_eq!(single.num_samples, 15);
        assert_eq!(single.interval, Duration::from_secs(8));
        assert_eq!(single.thermocouple, ThermocoupleType::K);
        assert_eq!(single.mains.sixty_hertz(), 0);

        let collection = SamplingConfiguration::collection();
        assert_eq!(collection.num_samples, 15);
        assert!(collection.interval.is_zero());
        assert_eq!(collection.thermocouple, ThermocoupleType::S);
        assert_eq!(collection.timestamp.header(), None);
    }
}
