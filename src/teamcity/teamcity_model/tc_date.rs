use chrono::{DateTime, Utc};
use tracing::trace;

/// e.g. `20060102T150405-0700`
pub const TC_DATE_FORMAT: &str = "%Y%m%dT%H%M%S%z";

/// `YYYYMMDDThhmmss` plus a `+hhmm`/`-hhmm` offset.
const TC_DATE_LEN: usize = 20;

/// # zero time
///
/// Stand-in for an absent date. Unparseable dates end up here as well, so
/// the two cases cannot be told apart afterwards. It is the earliest
/// representable instant, which no server timestamp can carry.
pub fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

pub fn is_zero_time(date: &DateTime<Utc>) -> bool {
    *date == zero_time()
}

/// # date from tc string
///
/// Parse a server timestamp into UTC.
///
/// ### Returns
///
/// [`zero_time`] for an empty string, and also for a malformed one: a bad date
/// never fails the surrounding build.
pub fn date_from_tc_string(tc_date: &str) -> DateTime<Utc> {
    if tc_date.is_empty() {
        return zero_time();
    }

    if !has_tc_date_shape(tc_date) {
        trace!(value = tc_date, "malformed teamcity date, using zero time");
        return zero_time();
    }

    match DateTime::parse_from_str(tc_date, TC_DATE_FORMAT) {
        Ok(date) => date.with_timezone(&Utc),
        Err(e) => {
            trace!(value = tc_date, error = %e, "unparseable teamcity date, using zero time");
            zero_time()
        }
    }
}

/// chrono alone lets `+hh:mm` offsets and leading spaces through.
fn has_tc_date_shape(tc_date: &str) -> bool {
    let bytes = tc_date.as_bytes();
    bytes.len() == TC_DATE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 => *b == b'T',
            15 => *b == b'+' || *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
