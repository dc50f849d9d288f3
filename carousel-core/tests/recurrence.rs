use carousel_core::{week_of_month, Event};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn recurring(days_of_week: &str, weeks_of_month: &str) -> Event {
    Event {
        name: "recurring".into(),
        time: "7pm".into(),
        days_of_week: Some(days_of_week.into()),
        weeks_of_month: Some(weeks_of_month.into()),
        ..Event::default()
    }
}

fn one_time(on: &str) -> Event {
    Event {
        name: "one-time".into(),
        time: "6:00pm".into(),
        date: Some(on.into()),
        ..Event::default()
    }
}

#[test]
fn one_time_events_match_their_date_exactly() {
    let event = one_time("2024-07-04");

    assert!(event.displays_on(date(2024, 7, 4)));
    assert!(!event.displays_on(date(2024, 7, 5)));
    // Same weekday one week later still does not match.
    assert!(!event.displays_on(date(2024, 7, 11)));
}

#[test]
fn weekend_event_matches_saturday_and_sunday_only() {
    let event = recurring("sat,sun", "all");

    assert!(event.displays_on(date(2024, 7, 6))); // Saturday
    assert!(event.displays_on(date(2024, 7, 7))); // Sunday
    assert!(!event.displays_on(date(2024, 7, 8))); // Monday
}

#[test]
fn weekday_tokens_are_matched_as_tokens_not_substrings() {
    let event = recurring("tues,fri", "all");

    assert!(event.displays_on(date(2024, 7, 2))); // Tuesday
    assert!(event.displays_on(date(2024, 7, 5))); // Friday
    assert!(!event.displays_on(date(2024, 7, 4))); // Thursday
    assert!(!event.displays_on(date(2024, 7, 6))); // Saturday
}

#[test]
fn first_sunday_event_skips_later_sundays() {
    let event = recurring("sun", "1");

    assert!(event.displays_on(date(2024, 7, 7))); // day 7, week 1
    assert!(!event.displays_on(date(2024, 7, 14))); // day 14, week 2
    assert!(!event.displays_on(date(2024, 7, 6))); // Saturday of week 1
}

#[test]
fn third_saturday_event() {
    let event = recurring("sat", "3");

    assert!(event.displays_on(date(2024, 7, 20))); // day 20, week 3
    assert!(!event.displays_on(date(2024, 7, 6)));
    assert!(!event.displays_on(date(2024, 7, 13)));
    assert!(!event.displays_on(date(2024, 7, 27)));
}

#[test]
fn multiple_week_ordinals() {
    let event = recurring("sat", "2,4");

    assert!(event.displays_on(date(2024, 7, 13))); // week 2
    assert!(event.displays_on(date(2024, 7, 27))); // week 4
    assert!(!event.displays_on(date(2024, 7, 6))); // week 1
    assert!(!event.displays_on(date(2024, 7, 20))); // week 3
}

#[test]
fn fifth_week_exists_even_when_short() {
    // March 2024: day 29 is a Friday in the (three-day) fifth week.
    let event = recurring("fri", "5");

    assert!(event.displays_on(date(2024, 3, 29)));
    assert!(!event.displays_on(date(2024, 3, 22))); // week 4
}

#[test]
fn week_of_month_is_day_arithmetic_not_calendar_weeks() {
    assert_eq!(week_of_month(date(2024, 1, 1)), 1);
    assert_eq!(week_of_month(date(2024, 1, 7)), 1);
    assert_eq!(week_of_month(date(2024, 1, 8)), 2);
    assert_eq!(week_of_month(date(2024, 1, 14)), 2);
    assert_eq!(week_of_month(date(2024, 1, 15)), 3);
    assert_eq!(week_of_month(date(2024, 1, 29)), 5);
    assert_eq!(week_of_month(date(2024, 1, 31)), 5);
}
