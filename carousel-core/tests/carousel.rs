use carousel_core::{build_carousel, start_minutes, Carousel, Catalog, Event, WINDOW_DAYS};
use chrono::{Duration, NaiveDate};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn recurring(name: &str, time: &str, days_of_week: &str) -> Event {
    Event {
        name: name.into(),
        time: time.into(),
        days_of_week: Some(days_of_week.into()),
        weeks_of_month: Some("all".into()),
        ..Event::default()
    }
}

fn keys(carousel: &Carousel) -> Vec<&str> {
    carousel.days.keys().map(String::as_str).collect()
}

#[test]
fn thirty_consecutive_days_starting_at_the_reference_date() {
    // Spans the leap-February into March.
    let start = date(2024, 2, 15);
    let carousel = build_carousel(&Catalog::builtin(), start);

    assert_eq!(carousel.days.len(), WINDOW_DAYS as usize);

    for (offset, key) in keys(&carousel).iter().enumerate() {
        let expected = start + Duration::days(offset as i64);
        assert_eq!(*key, expected.format("%Y-%m-%d").to_string());
    }

    assert_eq!(keys(&carousel).first(), Some(&"2024-02-15"));
    assert_eq!(keys(&carousel).last(), Some(&"2024-03-15"));
}

#[test]
fn days_with_no_matches_are_present_and_empty() {
    let catalog = Catalog::new(vec![Event {
        weeks_of_month: Some("1".into()),
        ..recurring("First Monday", "7pm", "mon")
    }]);

    let carousel = build_carousel(&catalog, date(2024, 7, 8));

    assert_eq!(carousel.days.len(), 30);
    // 2024-08-05 is the only first-week Monday in this window.
    assert_eq!(carousel.days["2024-08-05"].len(), 1);
    let occupied = carousel.days.values().filter(|events| !events.is_empty());
    assert_eq!(occupied.count(), 1);
}

#[test]
fn each_day_is_sorted_by_starting_time() {
    let catalog = Catalog::new(vec![
        recurring("Evening", "7:30pm - 10:00pm", "sat"),
        recurring("Morning", "9:00am - 10:30am", "sat"),
        recurring("Midnight", "12:00am", "sat"),
        recurring("Afternoon", "2pm - 5pm", "sat"),
    ]);

    let carousel = build_carousel(&catalog, date(2024, 7, 6));

    let saturday = &carousel.days["2024-07-06"];
    let names: Vec<&str> = saturday.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(names, ["Midnight", "Morning", "Afternoon", "Evening"]);

    for window in saturday.windows(2) {
        assert!(
            start_minutes(&window[0].time).unwrap() <= start_minutes(&window[1].time).unwrap()
        );
    }
}

#[test]
fn equal_start_times_keep_catalog_order() {
    let catalog = Catalog::new(vec![
        recurring("Second by clock", "7pm", "sat"),
        recurring("Third by clock", "7:00pm", "sat"),
        recurring("First by clock", "6am", "sat"),
    ]);

    let carousel = build_carousel(&catalog, date(2024, 7, 6));

    let names: Vec<&str> = carousel.days["2024-07-06"]
        .iter()
        .map(|event| event.name.as_str())
        .collect();
    assert_eq!(names, ["First by clock", "Second by clock", "Third by clock"]);
}

#[test]
fn one_time_event_appears_under_exactly_one_key() {
    let catalog = Catalog::new(vec![Event {
        name: "Fireworks".into(),
        time: "6:00pm".into(),
        date: Some("2024-07-04".into()),
        ..Event::default()
    }]);

    let carousel = build_carousel(&catalog, date(2024, 6, 20));

    for (key, events) in &carousel.days {
        if key == "2024-07-04" {
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].name, "Fireworks");
        } else {
            assert!(events.is_empty(), "unexpected match under {key}");
        }
    }
}

#[test]
fn one_time_event_outside_the_window_never_appears() {
    let catalog = Catalog::new(vec![Event {
        name: "Fireworks".into(),
        time: "6:00pm".into(),
        date: Some("2024-07-04".into()),
        ..Event::default()
    }]);

    let carousel = build_carousel(&catalog, date(2024, 8, 1));

    assert!(carousel.days.values().all(Vec::is_empty));
}

#[test]
fn builtin_catalog_tuesday_lineup() {
    // 2024-07-02 is a Tuesday.
    let carousel = build_carousel(&Catalog::builtin(), date(2024, 7, 2));

    let tuesday = &carousel.days["2024-07-02"];
    let names: Vec<&str> = tuesday.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Tuesday Morning Yoga",
            "Open Public Ice Skate",
            "Learn to (Ice) Skate",
            "CoDa",
        ]
    );
}
