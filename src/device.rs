use std::time::Duration;

use bitflags::bitflags;

use crate::{Error, Result, StatusCode};
use crate::config::{MainsFrequency, ThermocoupleType};
use crate::sys::{Driver, MAX_CHANNELS, READING_BUFFER_LEN, UNITS_CENTIGRADE};
use crate::sys::usbtc08::Usbtc08Library;

bitflags! {
    /// Channels whose input exceeded the range of the converter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Overflow: u16 {
        const ColdJunction = 1<<0;
        const Channel1     = 1<<1;
        const Channel2     = 1<<2;
        const Channel3     = 1<<3;
        const Channel4     = 1<<4;
        const Channel5     = 1<<5;
        const Channel6     = 1<<6;
        const Channel7     = 1<<7;
        const Channel8     = 1<<8;
    }
}

impl Overflow {
    pub fn channel(index: u8) -> Result<Self> {
        if index > MAX_CHANNELS {
            return Err(Error::InvalidChannel(index))
        }
        Ok(Overflow::from_bits_retain(1 << index))
    }
}

/// Result of one `usb_tc08_get_single` call, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleReading {
    pub temperatures: [f32; READING_BUFFER_LEN],
    pub overflow: Overflow,
}

impl SingleReading {
    pub fn cold_junction(&self) -> f32 {
        self.temperatures[0]
    }

    pub fn channel_1(&self) -> f32 {
        self.temperatures[1]
    }

    pub fn channel(&self, index: u8) -> Result<f32> {
        self.temperatures.get(index as usize).copied().ok_or(Error::InvalidChannel(index))
    }
}

/// An open TC-08 unit. The unit is closed by [`Device::close`], or when dropped.
#[derive(Debug)]
pub struct Device<D: Driver = Usbtc08Library> {
    driver: D,
    handle: i16,
    closed: bool,
}

impl<D: Driver> Device<D> {
    pub fn open(mut driver: D) -> Result<Device<D>> {
        let handle = driver.open_unit();
        log::debug!("usb_tc08_open_unit() = {}", handle);
        match handle {
            0 => Err(Error::NotFound),
            handle if handle < 0 => {
                let code = StatusCode::from(driver.get_last_error(0));
                Err(Error::DeviceCall { call: "usb_tc08_open_unit", code })
            }
            handle => Ok(Device { driver, handle, closed: false })
        }
    }

    /// Opens a unit, runs `f` with it, and closes it again regardless of the outcome.
    /// An error from `f` takes precedence over an error from closing the unit.
    pub fn with<F, R>(driver: D, f: F) -> Result<R>
            where F: FnOnce(&mut Device<D>) -> Result<R> {
        let mut device = Device::open(driver)?;
        let result = f(&mut device);
        let closed = device.close();
        let value = result?;
        closed?;
        Ok(value)
    }

    pub fn handle(&self) -> i16 {
        self.handle
    }

    fn check(&mut self, call: &'static str, succeeded: bool) -> Result<()> {
        if succeeded {
            Ok(())
        } else {
            let code = StatusCode::from(self.driver.get_last_error(self.handle));
            log::debug!("{} failed: {}", call, code);
            Err(Error::DeviceCall { call, code })
        }
    }

    pub fn set_mains(&mut self, mains: MainsFrequency) -> Result<()> {
        let status = self.driver.set_mains(self.handle, mains.sixty_hertz());
        log::debug!("usb_tc08_set_mains({:?}) = {}", mains, status);
        self.check("usb_tc08_set_mains", status > 0)
    }

    pub fn set_channel(&mut self, channel: u8, thermocouple: ThermocoupleType) -> Result<()> {
        if channel > MAX_CHANNELS {
            return Err(Error::InvalidChannel(channel))
        }
        let status = self.driver.set_channel(self.handle, channel as i16, thermocouple.code());
        log::debug!("usb_tc08_set_channel({}, {:?}) = {}", channel, thermocouple, status);
        self.check("usb_tc08_set_channel", status > 0)
    }

    /// Shortest interval at which the enabled channels can be sampled.
    pub fn minimum_interval(&mut self) -> Result<Duration> {
        let interval_ms = self.driver.get_minimum_interval_ms(self.handle);
        log::debug!("usb_tc08_get_minimum_interval_ms() = {}", interval_ms);
        self.check("usb_tc08_get_minimum_interval_ms", interval_ms > 0)?;
        Ok(Duration::from_millis(interval_ms as u64))
    }

    pub fn get_single(&mut self) -> Result<SingleReading> {
        let mut temperatures = [0.0; READING_BUFFER_LEN];
        let mut overflow_flags = 0i16;
        let status = self.driver.get_single(self.handle, &mut temperatures, &mut overflow_flags,
                                            UNITS_CENTIGRADE);
        log::trace!("usb_tc08_get_single() = {}, temp = {:?}, overflow = {:#011b}",
            status, temperatures, overflow_flags);
        self.check("usb_tc08_get_single", status > 0)?;
        Ok(SingleReading {
            temperatures,
            overflow: Overflow::from_bits_retain(overflow_flags as u16),
        })
    }

    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        let status = self.driver.close_unit(self.handle);
        log::debug!("usb_tc08_close_unit() = {}", status);
        self.check("usb_tc08_close_unit", status > 0)
    }
}

impl<D: Driver> Drop for Device<D> {
    fn drop(&mut self) {
        if !self.closed {
            self.closed = true;
            let status = self.driver.close_unit(self.handle);
            if status <= 0 {
                let code = StatusCode::from(self.driver.get_last_error(self.handle));
                log::warn!("usb_tc08_close_unit() failed on drop: {}", code);
            }
        }
    }
}
