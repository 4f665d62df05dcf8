use std::thread::sleep;

use chrono::{DateTime, Local};

use crate::{Error, Result};
use crate::config::SamplingConfiguration;
use crate::device::{Device, Overflow};
use crate::reading::Reading;
use crate::sys::Driver;

const CHANNEL_1: u8 = 1;

/// Configures an open unit and takes `config.num_samples` readings, passing each to `emit`
/// as soon as it is taken. Stops at the first failing call.
pub fn sample<D, F>(device: &mut Device<D>, config: &SamplingConfiguration,
                    start: DateTime<Local>, mut emit: F) -> Result<()>
        where D: Driver, F: FnMut(&Reading) {
    device.set_mains(config.mains)?;
    device.set_channel(CHANNEL_1, config.thermocouple)?;

    let minimum_interval = device.minimum_interval()?;
    if !config.interval.is_zero() && config.interval < minimum_interval {
        log::warn!("sampling interval {:?} is shorter than the device minimum of {:?}",
            config.interval, minimum_interval);
    }

    for index in 0..config.num_samples {
        if index > 0 && !config.interval.is_zero() {
            sleep(config.interval);
        }
        let single = device.get_single()?;
        if single.overflow.intersects(Overflow::ColdJunction | Overflow::Channel1) {
            log::warn!("sample {}: input overflow on {:?}", index, single.overflow);
        }
        let reading = Reading::new(start, Local::now(), &single);
        log::debug!("sample {}: {:?}", index, reading);
        emit(&reading);
    }
    Ok(())
}

/// Runs a complete session: opens the unit, samples, and closes the unit on every path.
pub fn run<D, F>(driver: D, config: &SamplingConfiguration,
                 start: Option<DateTime<Local>>, emit: F) -> Result<()>
        where D: Driver, F: FnMut(&Reading) {
    let start = start.unwrap_or_else(Local::now);
    Device::with(driver, |device| sample(device, config, start, emit))
}

/// Collects `num_samples` readings from a type S probe on channel 1, timestamped relative
/// to `start`.
pub fn collect_temperature_data<D: Driver>(driver: D, start: DateTime<Local>, num_samples: usize)
        -> Result<Vec<Reading>> {
    collect_temperature_data_with(driver, start, num_samples, |_| ())
}

/// Like [`collect_temperature_data`], also passing each reading to `emit` as soon as it is
/// taken, so that readings preceding a failed call still reach the caller.
pub fn collect_temperature_data_with<D, F>(driver: D, start: DateTime<Local>, num_samples: usize,
                                           mut emit: F) -> Result<Vec<Reading>>
        where D: Driver, F: FnMut(&Reading) {
    let config = SamplingConfiguration { num_samples, ..SamplingConfiguration::collection() };
    let mut readings = Vec::with_capacity(num_samples);
    run(driver, &config, Some(start), |reading| {
        emit(reading);
        readings.push(*reading);
    })?;
    Ok(readings)
}

/// Like [`collect_temperature_data`], with `start` given as an RFC 3339 timestamp.
/// The device is not touched if `start` does not parse.
pub fn collect_temperature_data_since<D: Driver>(driver: D, start: &str, num_samples: usize)
        -> Result<Vec<Reading>> {
    let start = DateTime::parse_from_rfc3339(start)
        .map_err(|_| Error::InvalidStartTime(start.to_owned()))?
        .with_timezone(&Local);
    collect_temperature_data(driver, start, num_samples)
}
