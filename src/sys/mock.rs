use super::{Driver, READING_BUFFER_LEN};

/// Scripted stand-in for the SDK. Records every call by its SDK function name.
#[derive(Debug)]
pub struct MockDriver {
    pub calls: Vec<&'static str>,
    /// `(cold junction, channel 1)` per `get_single` call; later calls repeat the last pair.
    pub readings: Vec<(f32, f32)>,
    pub overflow_flags: i16,
    pub open_result: i16,
    pub minimum_interval_ms: i32,
    pub last_error: i16,
    /// Fail the n-th (zero-based) invocation of the named call.
    pub failure: Option<(&'static str, usize)>,
}

impl MockDriver {
    pub const HANDLE: i16 = 1;

    pub fn new() -> MockDriver {
        MockDriver {
            calls: Vec::new(),
            readings: vec![(21.5, 300.25)],
            overflow_flags: 0,
            open_result: Self::HANDLE,
            minimum_interval_ms: 100,
            last_error: 7, // NOT_RESPONDING
            failure: None,
        }
    }

    pub fn failing(call: &'static str, nth: usize) -> MockDriver {
        MockDriver { failure: Some((call, nth)), ..MockDriver::new() }
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|&&name| name == call).count()
    }

    fn invoke(&mut self, call: &'static str) -> bool {
        let nth = self.count(call);
        self.calls.push(call);
        !matches!(self.failure, Some((name, n)) if name == call && n == nth)
    }
}

impl Driver for MockDriver {
    fn open_unit(&mut self) -> i16 {
        if self.invoke("usb_tc08_open_unit") { self.open_result } else { -1 }
    }

    fn close_unit(&mut self, handle: i16) -> i16 {
        assert_eq!(handle, Self::HANDLE);
        self.invoke("usb_tc08_close_unit") as i16
    }

    fn set_mains(&mut self, handle: i16, sixty_hertz: i16) -> i16 {
        assert_eq!(handle, Self::HANDLE);
        assert!(sixty_hertz == 0 || sixty_hertz == 1);
        self.invoke("usb_tc08_set_mains") as i16
    }

    fn set_channel(&mut self, handle: i16, channel: i16, _tc_type: i8) -> i16 {
        assert_eq!(handle, Self::HANDLE);
        assert!((0..READING_BUFFER_LEN as i16).contains(&channel));
        self.invoke("usb_tc08_set_channel") as i16
    }

    fn get_minimum_interval_ms(&mut self, handle: i16) -> i32 {
        assert_eq!(handle, Self::HANDLE);
        if self.invoke("usb_tc08_get_minimum_interval_ms") { self.minimum_interval_ms } else { 0 }
    }

    fn get_single(&mut self, handle: i16, temp: &mut [f32; READING_BUFFER_LEN],
                  overflow_flags: &mut i16, _units: i16) -> i16 {
        assert_eq!(handle, Self::HANDLE);
        let index = self.count("usb_tc08_get_single");
        if !self.invoke("usb_tc08_get_single") {
            return 0
        }
        let (cold_junction, channel_1) =
            self.readings.get(index).or(self.readings.last()).copied().unwrap_or_default();
        temp[0] = cold_junction;
        temp[1] = channel_1;
        *overflow_flags = self.overflow_flags;
        1
    }

    fn get_last_error(&mut self, _handle: i16) -> i16 {
        self.calls.push("usb_tc08_get_last_error");
        self.last_error
    }
}
