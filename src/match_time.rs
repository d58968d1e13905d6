use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ScheduleError;

/// Parse a row headline such as `"Sonntag 19.03.2017 - 11:00"` into a naive local date-time.
///
/// Tokens are picked by position after splitting on single spaces: index 1 holds the date,
/// index 3 the time. Whatever sits at the other positions (weekday, separator, trailing
/// labels) is ignored without being looked at.
pub fn parse_match_time(raw: &str) -> Result<NaiveDateTime, ScheduleError> {
    let fragments: Vec<&str> = raw.split(' ').collect();
    let date_token = *fragments.get(1).ok_or_else(|| ScheduleError::format(raw, "missing date token"))?;
    let time_token = *fragments.get(3).ok_or_else(|| ScheduleError::format(raw, "missing time token"))?;

    let day_month_year: Vec<&str> = date_token.split('.').collect();
    let [day, month, year, ..] = day_month_year[..] else {
        return Err(ScheduleError::format(raw, "date is not day.month.year"));
    };
    let hour_minutes: Vec<&str> = time_token.split(':').collect();
    let [hour, minute, ..] = hour_minutes[..] else {
        return Err(ScheduleError::format(raw, "time is not hour:minute"));
    };

    let year: i32 = year.parse().map_err(|_| ScheduleError::format(raw, "year is not a number"))?;
    let month: u32 = month.parse().map_err(|_| ScheduleError::format(raw, "month is not a number"))?;
    let day: u32 = day.parse().map_err(|_| ScheduleError::format(raw, "day is not a number"))?;
    let hour: u32 = hour.parse().map_err(|_| ScheduleError::format(raw, "hour is not a number"))?;
    let minute: u32 = minute.parse().map_err(|_| ScheduleError::format(raw, "minute is not a number"))?;

    // The headline carries a 1-based month; the calendar is addressed with a 0-based one.
    let month0 = month.checked_sub(1).ok_or_else(|| ScheduleError::format(raw, "month out of range"))?;

    let date = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.with_month0(month0))
        .ok_or_else(|| ScheduleError::format(raw, "month out of range"))?
        .with_day(day)
        .ok_or_else(|| ScheduleError::format(raw, "day out of range"))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ScheduleError::format(raw, "time of day out of range"))?;

    Ok(date.and_time(time))
}
