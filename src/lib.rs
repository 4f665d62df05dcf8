mod sys;
mod status;
mod config;
mod device;
mod reading;
mod sampling;

#[derive(Debug)]
pub enum Error {
    NotFound,
    DeviceCall { call: &'static str, code: StatusCode },
    InvalidChannel(u8),
    InvalidStartTime(String),
    Library(libloading::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound =>
                write!(f, "device not connected"),
            Self::DeviceCall { call, code } =>
                write!(f, "{} failed: {}", call, code),
            Self::InvalidChannel(channel) =>
                write!(f, "channel {} out of range (0..={})", channel, sys::MAX_CHANNELS),
            Self::InvalidStartTime(value) =>
                write!(f, "start time must be a timestamp, got {:?}", value),
            Self::Library(error) =>
                write!(f, "cannot load TC-08 SDK: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            &Self::Library(ref error) => Some(error),
            _ => None
        }
    }
}

impl From<libloading::Error> for Error {
    fn from(error: libloading::Error) -> Self {
        Error::Library(error)
    }
}

pub type Result<T> =
    core::result::Result<T, Error>;

pub use sys::{
    Driver,
    MAX_CHANNELS,
    READING_BUFFER_LEN,
};

pub use sys::usbtc08::Usbtc08Library;

pub use status::StatusCode;

pub use config::{
    MainsFrequency,
    ThermocoupleType,
    TimestampStyle,
    SamplingConfiguration,
};

pub use device::{
    Device,
    Overflow,
    SingleReading,
};

pub use reading::{
    ElapsedTime,
    Reading,
};

pub use sampling::{
    sample,
    run,
    collect_temperature_data,
    collect_temperature_data_with,
    collect_temperature_data_since,
};
