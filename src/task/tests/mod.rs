//! Unit tests for the task module.


use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to noon local time on a fixed calendar day.
pub(super) struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub(super) fn on(year: i32, month: u32, day: u32) -> Self {
        let instant = Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .earliest()
            .expect("noon exists on every calendar day");
        Self(instant)
    }

    pub(super) fn today(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}
