use once_cell::sync::Lazy;
use regex_lite::Regex;
use thiserror::Error;

macro_rules! regex {
    ($pattern:expr) => {{
        static RE: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).unwrap());
        &RE
    }};
}

/// A time field that does not begin with a clock expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` does not start with a clock expression")]
pub struct ParseError(pub String);

/// Sort key for a free-text time field: minutes since midnight of the
/// starting time, so "12:00am" is 0, "12:00pm" is 720 and "11:59pm" is
/// 1439. Anything after the am/pm marker (a range suffix, a note) is
/// ignored; display always uses the original string.
pub fn start_minutes(time: &str) -> Result<u32, ParseError> {
    let captures = regex!(r"^(?P<hour>\d{1,2})(?P<minute>:\d{2})?\s?(?P<am_or_pm>am|pm)")
        .captures(time)
        .ok_or_else(|| ParseError(time.to_string()))?;

    // The groups are pure digits, so these parses cannot fail.
    let hour: u32 = captures["hour"].parse().unwrap_or_default();
    let minute: u32 = captures
        .name("minute")
        .and_then(|minute| minute.as_str()[1..].parse().ok())
        .unwrap_or_default();

    let mut hour = hour % 12;
    if &captures["am_or_pm"] == "pm" {
        hour += 12;
    }

    Ok(hour * 60 + minute)
}
