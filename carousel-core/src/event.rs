use chrono::{Datelike, NaiveDate, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_FORMAT_PRETTY: &str = "%A, %b %-d";

/// One entry of the catalog: a recurrence rule plus display metadata.
///
/// Exactly one of `date` or the `days_of_week`/`weeks_of_month` pair is
/// present on a valid event. The schedule fields stay raw strings; their
/// grammar is enforced by [`validate_event`](crate::validate_event), and
/// `time` is parsed only to order events within a day, never for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub date: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub days_of_week: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub weeks_of_month: Option<String>,
    pub address: String,
    pub hostess: String,
    pub time: String,
    pub venue: String,
    pub website: String,
}

impl Event {
    /// Whether this event is listed on `date`.
    ///
    /// One-time events match by exact date equality and nothing else.
    /// Recurring events match when both the day-of-week rule and the
    /// week-of-month rule accept the date.
    pub fn displays_on(&self, date: NaiveDate) -> bool {
        if let Some(event_date) = self.date.as_deref() {
            return event_date == date.format(DATE_FORMAT).to_string();
        }

        self.day_of_week_match(date) && self.week_of_month_match(date)
    }

    fn day_of_week_match(&self, date: NaiveDate) -> bool {
        let Some(days) = self.days_of_week.as_deref() else {
            return false;
        };

        tokens(days).any(|token| token == weekday_token(date.weekday()))
    }

    fn week_of_month_match(&self, date: NaiveDate) -> bool {
        let Some(weeks) = self.weeks_of_month.as_deref() else {
            return false;
        };

        if weeks == "all" {
            return true;
        }

        let week = week_of_month(date).to_string();
        tokens(weeks).any(|token| token == week)
    }

    pub fn one_time_only(&self) -> bool {
        self.date.is_some()
    }

    /// Human phrase for when the event happens: "Every sat,sun",
    /// "First & Third sat", or the pretty date for one-time events.
    pub fn frequency(&self) -> String {
        if let Some(date) = self.date.as_deref() {
            return pretty_date(date);
        }

        let days = self.days_of_week.as_deref().unwrap_or_default();

        match self.weeks_of_month.as_deref() {
            Some("all") | None => format!("Every {days}"),
            Some(weeks) => {
                let ordinals = tokens(weeks)
                    .map(ordinal_word)
                    .collect::<Vec<_>>()
                    .join(" & ");
                format!("{ordinals} {days}")
            }
        }
    }

    /// Web-search link for the event's address.
    pub fn address_url(&self) -> String {
        let query: String = form_urlencoded::byte_serialize(self.address.as_bytes()).collect();
        format!("https://www.google.com/search?q={query}")
    }
}

/// 1-indexed week of the month as blocks of seven days counted from the
/// 1st: days 1-7 are week 1, 8-14 week 2, up to day 31 alone in week 5.
/// Not aligned to calendar weekday boundaries.
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Reformats an ISO `YYYY-MM-DD` date into the long form shown on the
/// page, e.g. "Monday, Jan 2". Unparseable input is returned verbatim.
pub fn pretty_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => parsed.format(DATE_FORMAT_PRETTY).to_string(),
        Err(_) => date.to_string(),
    }
}

fn weekday_token(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tues",
        Weekday::Wed => "wed",
        Weekday::Thu => "thurs",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

// The grammar allows an optional space after each comma.
fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim)
}

fn ordinal_word(week: &str) -> &'static str {
    match week {
        "1" => "First",
        "2" => "Second",
        "3" => "Third",
        "4" => "Fourth",
        "5" => "Fifth",
        _ => "",
    }
}
