use std::ffi::OsStr;
use libc::{c_char, c_float, c_int, c_short};
use libloading::Library;

use crate::Result;
use super::READING_BUFFER_LEN;

type OpenUnitFn = unsafe extern "system" fn() -> c_short;
type CloseUnitFn = unsafe extern "system" fn(c_short) -> c_short;
type SetMainsFn = unsafe extern "system" fn(c_short, c_short) -> c_short;
type SetChannelFn = unsafe extern "system" fn(c_short, c_short, c_char) -> c_short;
type GetMinimumIntervalMsFn = unsafe extern "system" fn(c_short) -> c_int;
type GetSingleFn = unsafe extern "system" fn(c_short, *mut c_float, *mut c_short, c_short) -> c_short;
type GetLastErrorFn = unsafe extern "system" fn(c_short) -> c_short;

fn symbol<T: Copy>(library: &Library, name: &[u8]) -> Result<T> {
    log::trace!("resolving {}", String::from_utf8_lossy(&name[..name.len() - 1]));
    // SAFETY: `T` is one of the function pointer types above, matching `usbtc08.h`.
    Ok(unsafe { *library.get::<T>(name)? })
}

/// `libusbtc08` loaded at runtime, so that building does not require the vendor SDK.
#[derive(Debug)]
pub struct Usbtc08Library {
    open_unit: OpenUnitFn,
    close_unit: CloseUnitFn,
    set_mains: SetMainsFn,
    set_channel: SetChannelFn,
    get_minimum_interval_ms: GetMinimumIntervalMsFn,
    get_single: GetSingleFn,
    get_last_error: GetLastErrorFn,
    // must outlive the function pointers above
    _library: Library,
}

impl Usbtc08Library {
    /// Loads the SDK from the platform's library search path
    /// (`libusbtc08.so`, `libusbtc08.dylib` or `usbtc08.dll`).
    pub fn load() -> Result<Usbtc08Library> {
        Self::load_from(libloading::library_filename("usbtc08"))
    }

    pub fn load_from<P: AsRef<OsStr>>(path: P) -> Result<Usbtc08Library> {
        log::debug!("loading TC-08 SDK from {:?}", path.as_ref());
        // SAFETY: the SDK runs no initialization code with preconditions on load.
        let library = unsafe { Library::new(path.as_ref())? };
        Ok(Usbtc08Library {
            open_unit: symbol(&library, b"usb_tc08_open_unit\0")?,
            close_unit: symbol(&library, b"usb_tc08_close_unit\0")?,
            set_mains: symbol(&library, b"usb_tc08_set_mains\0")?,
            set_channel: symbol(&library, b"usb_tc08_set_channel\0")?,
            get_minimum_interval_ms: symbol(&library, b"usb_tc08_get_minimum_interval_ms\0")?,
            get_single: symbol(&library, b"usb_tc08_get_single\0")?,
            get_last_error: symbol(&library, b"usb_tc08_get_last_error\0")?,
            _library: library,
        })
    }
}

impl super::Driver for Usbtc08Library {
    fn open_unit(&mut self) -> i16 {
        unsafe { (self.open_unit)() }
    }

    fn close_unit(&mut self, handle: i16) -> i16 {
        unsafe { (self.close_unit)(handle) }
    }

    fn set_mains(&mut self, handle: i16, sixty_hertz: i16) -> i16 {
        unsafe { (self.set_mains)(handle, sixty_hertz) }
    }

    fn set_channel(&mut self, handle: i16, channel: i16, tc_type: i8) -> i16 {
        unsafe { (self.set_channel)(handle, channel, tc_type as c_char) }
    }

    fn get_minimum_interval_ms(&mut self, handle: i16) -> i32 {
        // declared `int32_t` in usbtc08.h, not `long`
        unsafe { (self.get_minimum_interval_ms)(handle) }
    }

    fn get_single(&mut self, handle: i16, temp: &mut [f32; READING_BUFFER_LEN],
                  overflow_flags: &mut i16, units: i16) -> i16 {
        // SAFETY: the SDK writes at most one value per channel, cold junction included.
        unsafe { (self.get_single)(handle, temp.as_mut_ptr(), overflow_flags, units) }
    }

    fn get_last_error(&mut self, handle: i16) -> i16 {
        unsafe { (self.get_last_error)(handle) }
    }
}
