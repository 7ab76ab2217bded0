//! Public holiday calendar.
//!
//! The calendar answers whether a date is a public holiday, whether it is the
//! day before one, and what the holiday is called. It is plain data loaded
//! from configuration and injected into the bonus engine.

mod holiday_calendar;

pub use holiday_calendar::HolidayCalendar;
