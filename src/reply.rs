use chrono::{ DateTime, Local, TimeZone, Utc };
use std::fmt::Display;

/// `ctime(3)` layout, day of month padded with a space.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Zone used to render the rise time in replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyTimeZone {
    #[default]
    Local,
    Utc,
}

impl ReplyTimeZone {
    pub fn render(&self, epoch_seconds: i64) -> String {
        match self {
            ReplyTimeZone::Local => format_epoch(epoch_seconds, &Local),
            ReplyTimeZone::Utc => format_epoch(epoch_seconds, &Utc),
        }
    }
}

pub fn format_epoch<Tz>(epoch_seconds: i64, tz: &Tz) -> String
    where Tz: TimeZone, Tz::Offset: Display
{
    match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(utc) => utc.with_timezone(tz).format(CTIME_FORMAT).to_string(),
        None => epoch_seconds.to_string(),
    }
}

pub fn compose(display_name: &str, formatted_time: &str, duration_seconds: i64) -> String {
    format!(
        "In {} the ISS will fly over on {} for {} seconds.",
        display_name,
        formatted_time,
        duration_seconds
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_ctime_in_utc() {
        assert_eq!(format_epoch(1623251400, &Utc), "Wed Jun  9 15:10:00 2021");
        assert_eq!(ReplyTimeZone::Utc.render(1609459200), "Fri Jan  1 00:00:00 2021");
    }

    #[test]
    fn two_digit_day_has_no_padding() {
        assert_eq!(format_epoch(1639526400, &Utc), "Wed Dec 15 00:00:00 2021");
    }

    #[test]
    fn out_of_range_epoch_falls_back_to_number() {
        assert_eq!(format_epoch(i64::MAX, &Utc), i64::MAX.to_string());
    }

    #[test]
    fn composes_reply_sentence() {
        let text = compose("Austin, TX", &ReplyTimeZone::Utc.render(1623251400), 480);
        assert_eq!(text, "In Austin, TX the ISS will fly over on Wed Jun  9 15:10:00 2021 for 480 seconds.");
    }
}
