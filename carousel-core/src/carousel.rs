use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::catalog::Catalog;
use crate::clock;
use crate::event::{Event, DATE_FORMAT};

/// Days covered by one carousel, the reference date included.
pub const WINDOW_DAYS: i64 = 30;

/// The rolling date -> events view served to clients. Keys are ISO
/// dates, so the map's natural order is chronological. Rebuilt on every
/// request; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Carousel {
    pub days: BTreeMap<String, Vec<Event>>,
}

/// Builds the carousel for the 30 consecutive days starting at `start`:
/// one key per day, each holding that day's matching events sorted
/// ascending by starting time.
pub fn build_carousel(catalog: &Catalog, start: NaiveDate) -> Carousel {
    let mut days = BTreeMap::new();

    for offset in 0..WINDOW_DAYS {
        let date = start + Duration::days(offset);
        days.insert(date.format(DATE_FORMAT).to_string(), events_on(catalog, date));
    }

    Carousel { days }
}

/// Today's date in the fixed reference zone the calendar is displayed in.
pub fn today_in(zone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&zone).date_naive()
}

fn events_on(catalog: &Catalog, date: NaiveDate) -> Vec<Event> {
    let mut matches = Vec::new();

    for event in catalog.events() {
        if !event.displays_on(date) {
            continue;
        }

        // Validation runs before the catalog is ever served, so an
        // unparseable time here means the caller skipped it. Drop the
        // event and keep the page rendering.
        match clock::start_minutes(&event.time) {
            Ok(minutes) => matches.push((minutes, event.clone())),
            Err(err) => {
                tracing::warn!(event = %event.name, %err, "dropping event from carousel")
            }
        }
    }

    // sort_by_key is stable: events starting at the same minute stay in
    // catalog order.
    matches.sort_by_key(|(minutes, _)| *minutes);
    matches.into_iter().map(|(_, event)| event).collect()
}
