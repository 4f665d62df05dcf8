use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::config::TimestampStyle;
use crate::device::SingleReading;

/// Time since the start of a run, displayed as `HH:MM:SS.ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ElapsedTime(pub Duration);

impl ElapsedTime {
    /// Readings taken before `start` count as taken at `start`.
    pub fn between(start: DateTime<Local>, now: DateTime<Local>) -> ElapsedTime {
        ElapsedTime(now.signed_duration_since(start).to_std().unwrap_or_default())
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let whole_seconds = self.0.as_secs();
        let hours = whole_seconds / 3600;
        let minutes = whole_seconds / 60 % 60;
        let seconds = (whole_seconds % 60) as f64 + self.0.subsec_nanos() as f64 / 1e9;
        write!(f, "{:02}:{:02}:{:05.2}", hours, minutes, seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub taken_at: DateTime<Local>,
    pub elapsed: ElapsedTime,
    pub cold_junction_temp: f32,
    pub channel_1_temp: f32,
}

impl Reading {
    pub fn new(start: DateTime<Local>, taken_at: DateTime<Local>, single: &SingleReading) -> Reading {
        Reading {
            taken_at,
            elapsed: ElapsedTime::between(start, taken_at),
            cold_junction_temp: single.cold_junction(),
            channel_1_temp: single.channel_1(),
        }
    }

    pub fn wall_clock(&self) -> String {
        self.taken_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn time(&self, style: TimestampStyle) -> String {
        match style {
            TimestampStyle::WallClock => self.wall_clock(),
            TimestampStyle::Elapsed => self.elapsed.to_string(),
        }
    }

    pub fn console_line(&self, style: TimestampStyle) -> String {
        match style {
            TimestampStyle::WallClock =>
                format!("{}, {:.2}, {:.2}",
                    self.wall_clock(), self.cold_junction_temp, self.channel_1_temp),
            TimestampStyle::Elapsed =>
                format!("{} seconds, {:.2} °C, {:.2} °C",
                    self.elapsed, self.cold_junction_temp, self.channel_1_temp),
        }
    }
}
