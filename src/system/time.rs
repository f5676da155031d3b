//! Time keeping module

use chrono::{Duration, FixedOffset, NaiveDateTime, Offset, Utc};

/// Wall clock as seen by the watch face.
pub trait ClockSource {
    /// Current local time
    fn now(&self) -> NaiveDateTime;
    /// Switch the local time zone
    fn set_time_zone(&mut self, offset: FixedOffset);
}

/// Monotonic time since boot.
pub trait Uptime {
    fn as_micros(&self) -> u64;
}

pub struct TimeReference {
    /// Clock time (UTC)
    time: NaiveDateTime,
    /// Uptime at which `time` was valid, in µs
    uptime: u64,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: NaiveDateTime::default(),
            uptime: 0,
        }
    }
}

impl TimeReference {
    /// Create new time reference from a UTC time taken at `uptime` µs
    pub fn new(time: NaiveDateTime, uptime: u64) -> Self {
        Self { time, uptime }
    }

    /// Create new time reference from a Unix timestamp taken at boot
    pub fn from_epoch(secs: i64) -> Self {
        let time = chrono::DateTime::from_timestamp(secs, 0)
            .map(|utc| utc.naive_utc())
            .unwrap_or_default();
        Self { time, uptime: 0 }
    }
}

/// Keeps wall clock time from a reference point and the uptime counter.
pub struct TimeManager<U> {
    reference: TimeReference,
    offset: FixedOffset,
    uptime: U,
}

impl<U> TimeManager<U>
where
    U: Uptime,
{
    /// Initialize time measurement on boot
    pub fn init(uptime: U) -> Self {
        Self {
            reference: TimeReference::default(),
            offset: Utc.fix(),
            uptime,
        }
    }

    /// Current UTC time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = self.uptime.as_micros().saturating_sub(self.reference.uptime);
        let elapsed = Duration::microseconds(i64::try_from(elapsed).unwrap_or(i64::MAX));
        self.reference
            .time
            .checked_add_signed(elapsed)
            .unwrap_or(self.reference.time)
    }

    /// Update time reference
    pub fn set_time(&mut self, reference: TimeReference) {
        self.reference = reference;
    }

    pub fn time_zone(&self) -> FixedOffset {
        self.offset
    }
}

impl<U> ClockSource for TimeManager<U>
where
    U: Uptime,
{
    fn now(&self) -> NaiveDateTime {
        let utc = self.get_time();
        utc.checked_add_signed(Duration::seconds(self.offset.local_minus_utc() as i64))
            .unwrap_or(utc)
    }

    fn set_time_zone(&mut self, offset: FixedOffset) {
        debug!("Time zone set to {} s", offset.local_minus_utc());
        self.offset = offset;
    }
}

#[cfg(feature = "pinetime")]
pub use self::embassy::SystemUptime;

#[cfg(feature = "pinetime")]
mod embassy {
    use embassy_time::Instant;

    /// Uptime from the embassy time driver
    pub struct SystemUptime;

    impl super::Uptime for SystemUptime {
        fn as_micros(&self) -> u64 {
            Instant::now().as_micros()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use core::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeUptime(Rc<Cell<u64>>);

    impl FakeUptime {
        fn advance_secs(&self, secs: u64) {
            self.0.set(self.0.get() + secs * 1_000_000);
        }
    }

    impl Uptime for FakeUptime {
        fn as_micros(&self) -> u64 {
            self.0.get()
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn clock_advances_with_uptime() {
        let uptime = FakeUptime::default();
        let mut clock = TimeManager::init(uptime.clone());
        clock.set_time(TimeReference::new(at(14, 59, 30), 0));

        assert_eq!(clock.now(), at(14, 59, 30));
        uptime.advance_secs(45);
        assert_eq!(clock.now(), at(15, 0, 15));
    }

    #[test]
    fn reference_taken_after_boot() {
        let uptime = FakeUptime::default();
        uptime.advance_secs(100);
        let mut clock = TimeManager::init(uptime.clone());
        clock.set_time(TimeReference::new(at(8, 0, 0), uptime.as_micros()));
        uptime.advance_secs(60);
        assert_eq!(clock.now(), at(8, 1, 0));
    }

    #[test]
    fn time_zone_shifts_local_time() {
        let uptime = FakeUptime::default();
        let mut clock = TimeManager::init(uptime);
        clock.set_time(TimeReference::new(at(23, 30, 0), 0));

        clock.set_time_zone(FixedOffset::east_opt(3_600).unwrap());
        assert_eq!(clock.now().hour(), 0);
        assert_eq!(clock.get_time().hour(), 23);

        clock.set_time_zone(FixedOffset::west_opt(2 * 3_600).unwrap());
        assert_eq!(clock.now(), at(21, 30, 0));
        assert_eq!(clock.time_zone().local_minus_utc(), -7_200);
    }

    #[test]
    fn reference_from_epoch() {
        let reference = TimeReference::from_epoch(1_709_474_400);
        let mut clock = TimeManager::init(FakeUptime::default());
        clock.set_time(reference);
        assert_eq!(clock.now(), at(14, 0, 0));
    }
}
