use once_cell::sync::Lazy;
use regex_lite::Regex;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::clock;
use crate::event::Event;

macro_rules! regex {
    ($pattern:expr) => {{
        static RE: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).unwrap());
        &RE
    }};
}

/// Why an event, and with it the whole catalog, was rejected. Each
/// structural rule has its own variant naming the offending event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("event has an empty name")]
    EmptyName,
    #[error("{name}: time `{time}` does not start with a clock expression")]
    UnparseableTime { name: String, time: String },
    #[error("{name}: has both a date and a recurrence rule")]
    DateAndRecurrence { name: String },
    #[error("{name}: has neither a date nor a complete recurrence rule")]
    IncompleteSchedule { name: String },
    #[error("{name}: {field} has leading or trailing whitespace")]
    UntrimmedField { name: String, field: &'static str },
    #[error("{name}: date `{value}` is not formatted as YYYY-MM-DD")]
    MalformedDate { name: String, value: String },
    #[error("{name}: days of week `{value}` is not a list of weekday tokens")]
    MalformedDaysOfWeek { name: String, value: String },
    #[error("{name}: weeks of month `{value}` is neither `all` nor a list of ordinals 1-5")]
    MalformedWeeksOfMonth { name: String, value: String },
}

/// Checks one event against every structural rule; the first violated
/// rule wins.
pub fn validate_event(event: &Event) -> Result<(), ValidationError> {
    let name = || event.name.clone();

    if event.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if clock::start_minutes(&event.time).is_err() {
        return Err(ValidationError::UnparseableTime {
            name: name(),
            time: event.time.clone(),
        });
    }

    if event.date.is_some() && (event.days_of_week.is_some() || event.weeks_of_month.is_some()) {
        return Err(ValidationError::DateAndRecurrence { name: name() });
    }

    if event.date.is_none() && (event.days_of_week.is_none() || event.weeks_of_month.is_none()) {
        return Err(ValidationError::IncompleteSchedule { name: name() });
    }

    let fields: [(&'static str, &str); 8] = [
        ("address", event.address.as_str()),
        ("date", event.date.as_deref().unwrap_or_default()),
        ("days of week", event.days_of_week.as_deref().unwrap_or_default()),
        ("hostess", event.hostess.as_str()),
        ("name", event.name.as_str()),
        ("venue", event.venue.as_str()),
        ("website", event.website.as_str()),
        ("weeks of month", event.weeks_of_month.as_deref().unwrap_or_default()),
    ];

    for (field, value) in fields {
        if value.trim() != value {
            return Err(ValidationError::UntrimmedField {
                name: name(),
                field,
            });
        }
    }

    if let Some(date) = event.date.as_deref() {
        if !regex!(r"^\d{4}-\d{2}-\d{2}$").is_match(date) {
            return Err(ValidationError::MalformedDate {
                name: name(),
                value: date.to_string(),
            });
        }
    }

    if let Some(days) = event.days_of_week.as_deref() {
        if !regex!(r"^((mon|tues|wed|thurs|fri|sat|sun),? ?){1,7}$").is_match(days) {
            return Err(ValidationError::MalformedDaysOfWeek {
                name: name(),
                value: days.to_string(),
            });
        }
    }

    if let Some(weeks) = event.weeks_of_month.as_deref() {
        if !regex!(r"^(all|[1-5](,[1-5]){0,4})$").is_match(weeks) {
            return Err(ValidationError::MalformedWeeksOfMonth {
                name: name(),
                value: weeks.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates every catalog entry, rejecting the whole catalog on the
/// first failure. There is no partial-acceptance mode: this runs once at
/// startup and the boundary refuses to serve if it fails.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), ValidationError> {
    catalog.events().iter().try_for_each(validate_event)
}
