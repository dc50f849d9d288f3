use crate::event::Event;

const SKATIUM_SCHEDULE: &str =
    "https://docs.google.com/spreadsheets/d/1NhyV44IRbaxttZK-5zJCn1DeCh7o5WhRKKPcq-qKsBc/edit#gid=0";
const SKATIUM_ADDRESS: &str = "1311 S Bowman Rd, Little Rock, AR";

/// The full set of known events, in insertion order. Insertion order is
/// not display order; the carousel sorts each day's matches by start
/// time and keeps insertion order only as the tie-break.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The compiled-in production catalog. Validate it with
    /// [`validate_catalog`](crate::validate_catalog) before serving.
    pub fn builtin() -> Self {
        Self::new(vec![
            Event {
                name: "Open Public Ice Skate".into(),
                time: "1:00pm - 3:30pm".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("tues,fri".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Open Public Ice Skate".into(),
                time: "2pm - 5pm".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("sat,sun".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Open Public Ice Skate".into(),
                time: "7:30pm - 10:00pm".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("fri".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Open Public Ice Skate".into(),
                time: "7:00pm - 10:00pm".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("sat".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Learn to (Ice) Skate".into(),
                time: "6:00pm - 7:30pm".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("tues".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Learn to (Ice) Skate".into(),
                time: "9:00am - 10:30am".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("sat".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Jam Skate".into(),
                time: "8pm".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("sun".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Jam Skate Practice Session".into(),
                time: "8:30pm - 10:30pm".into(),
                website: SKATIUM_SCHEDULE.into(),
                venue: "Skatium".into(),
                address: SKATIUM_ADDRESS.into(),
                days_of_week: Some("thurs".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Wed night Yoga w/ Gene".into(),
                time: "6:00pm".into(),
                venue: "Martha's Studio".into(),
                days_of_week: Some("wed".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "First Sunday Yoga".into(),
                time: "11am".into(),
                venue: "Martha's Studio".into(),
                days_of_week: Some("sun".into()),
                weeks_of_month: Some("1".into()),
                ..Event::default()
            },
            Event {
                name: "Saturday Yoga".into(),
                time: "10:15am - 11:30am".into(),
                hostess: "Either Martha or Joy?".into(),
                venue: "Martha's Studio".into(),
                days_of_week: Some("sat".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Thursday Evening Yoga".into(),
                time: "5:30pm - 6:45pm".into(),
                hostess: "Martha".into(),
                venue: "Martha's Studio".into(),
                days_of_week: Some("thurs".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Tuesday Morning Yoga".into(),
                time: "7:45am - 9:00am".into(),
                hostess: "Martha".into(),
                venue: "Martha's Studio".into(),
                days_of_week: Some("tues".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "CoDa".into(),
                time: "6:30pm".into(),
                venue: "Central Church of Christ".into(),
                address: "823 W 6th St, Little Rock, AR".into(),
                days_of_week: Some("tues".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Open Mic (House of Art)".into(),
                time: "9pm".into(),
                hostess: "Chris James".into(),
                venue: "House of Art".into(),
                address: "North Little Rock".into(),
                days_of_week: Some("fri".into()),
                weeks_of_month: Some("all".into()),
                ..Event::default()
            },
            Event {
                name: "Free Hair Cuts (House of Art)".into(),
                time: "10am? - 12pm".into(),
                hostess: "??".into(),
                venue: "House of Art".into(),
                address: "North Little Rock".into(),
                days_of_week: Some("sat".into()),
                weeks_of_month: Some("3".into()),
                ..Event::default()
            },
        ])
    }
}
