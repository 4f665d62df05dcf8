//! Raw call surface of the TC-08 SDK (`usbtc08.h`).
//!
//! Every method mirrors one SDK function and returns its status unchanged. Interpreting
//! the statuses is the job of [`crate::Device`].

/// Highest thermocouple channel number; channel 0 is the cold junction.
pub const MAX_CHANNELS: u8 = 8;

/// Length of the buffer filled by `usb_tc08_get_single`.
pub const READING_BUFFER_LEN: usize = MAX_CHANNELS as usize + 1;

pub const UNITS_CENTIGRADE: i16 = 0;

pub trait Driver {
    fn open_unit(&mut self) -> i16;
    fn close_unit(&mut self, handle: i16) -> i16;

    fn set_mains(&mut self, handle: i16, sixty_hertz: i16) -> i16;
    fn set_channel(&mut self, handle: i16, channel: i16, tc_type: i8) -> i16;
    fn get_minimum_interval_ms(&mut self, handle: i16) -> i32;

    fn get_single(&mut self, handle: i16, temp: &mut [f32; READING_BUFFER_LEN],
                  overflow_flags: &mut i16, units: i16) -> i16;
    fn get_last_error(&mut self, handle: i16) -> i16;
}

impl<D: Driver + ?Sized> Driver for &mut D {
    fn open_unit(&mut self) -> i16 {
        (**self).open_unit()
    }

    fn close_unit(&mut self, handle: i16) -> i16 {
        (**self).close_unit(handle)
    }

    fn set_mains(&mut self, handle: i16, sixty_hertz: i16) -> i16 {
        (**self).set_mains(handle, sixty_hertz)
    }

    fn set_channel(&mut self, handle: i16, channel: i16, tc_type: i8) -> i16 {
        (**self).set_channel(handle, channel, tc_type)
    }

    fn get_minimum_interval_ms(&mut self, handle: i16) -> i32 {
        (**self).get_minimum_interval_ms(handle)
    }

    fn get_single(&mut self, handle: i16, temp: &mut [f32; READING_BUFFER_LEN],
                  overflow_flags: &mut i16, units: i16) -> i16 {
        (**self).get_single(handle, temp, overflow_flags, units)
    }

    fn get_last_error(&mut self, handle: i16) -> i16 {
        (**self).get_last_error(handle)
    }
}

pub mod usbtc08;

#[cfg(test)]
pub(crate) mod mock;
