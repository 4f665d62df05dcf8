use std::fmt;

/// Error codes reported by `usb_tc08_get_last_error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    OsNotSupported,
    NoChannelsSet,
    InvalidParameter,
    VariantNotSupported,
    IncorrectMode,
    EnumerationIncomplete,
    NotResponding,
    FirmwareFail,
    ConfigFail,
    NotFound,
    ThreadFail,
    PipeInfoFail,
    NotCalibrated,
    PicoppTooOld,
    Communication,
    Unknown(i16),
}

impl From<i16> for StatusCode {
    fn from(code: i16) -> Self {
        match code {
            0  => Self::Ok,
            1  => Self::OsNotSupported,
            2  => Self::NoChannelsSet,
            3  => Self::InvalidParameter,
            4  => Self::VariantNotSupported,
            5  => Self::IncorrectMode,
            6  => Self::EnumerationIncomplete,
            7  => Self::NotResponding,
            8  => Self::FirmwareFail,
            9  => Self::ConfigFail,
            10 => Self::NotFound,
            11 => Self::ThreadFail,
            12 => Self::PipeInfoFail,
            13 => Self::NotCalibrated,
            14 => Self::PicoppTooOld,
            15 => Self::Communication,
            _  => Self::Unknown(code),
        }
    }
}

impl StatusCode {
    pub fn code(self) -> i16 {
        match self {
            Self::Ok                    => 0,
            Self::OsNotSupported        => 1,
            Self::NoChannelsSet         => 2,
            Self::InvalidParameter      => 3,
            Self::VariantNotSupported   => 4,
            Self::IncorrectMode         => 5,
            Self::EnumerationIncomplete => 6,
            Self::NotResponding         => 7,
            Self::FirmwareFail          => 8,
            Self::ConfigFail            => 9,
            Self::NotFound              => 10,
            Self::ThreadFail            => 11,
            Self::PipeInfoFail          => 12,
            Self::NotCalibrated         => 13,
            Self::PicoppTooOld          => 14,
            Self::Communication         => 15,
            Self::Unknown(code)         => code,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Ok                    => "no error reported",
            Self::OsNotSupported        => "operating system not supported",
            Self::NoChannelsSet         => "no channels enabled",
            Self::InvalidParameter      => "invalid parameter",
            Self::VariantNotSupported   => "hardware variant not supported",
            Self::IncorrectMode         => "legacy and streaming calls mixed",
            Self::EnumerationIncomplete => "device enumeration in progress",
            Self::NotResponding         => "device not responding",
            Self::FirmwareFail          => "firmware download failed",
            Self::ConfigFail            => "calibration EEPROM missing or corrupt",
            Self::NotFound              => "device not found",
            Self::ThreadFail            => "driver thread creation failed",
            Self::PipeInfoFail          => "USB pipe information unavailable",
            Self::NotCalibrated         => "device not calibrated",
            Self::PicoppTooOld          => "outdated picopp driver installed",
            Self::Communication         => "USB communication failure",
            Self::Unknown(_)            => "unknown error",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (code {})", self.description(), self.code())
    }
}
