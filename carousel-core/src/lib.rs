//! Recurrence resolution for a small community event calendar.
//!
//! A compiled-in [`Catalog`] of one-time and recurring [`Event`]s, the
//! pure functions deciding which of them display on which date, and the
//! rolling 30-day [`Carousel`] view built from them. Validation runs once
//! over the whole catalog before anything is served; after that every
//! operation here is a pure function of its inputs.

mod carousel;
mod catalog;
mod clock;
mod event;
mod validate;

pub use carousel::{build_carousel, today_in, Carousel, WINDOW_DAYS};
pub use catalog::Catalog;
pub use clock::{start_minutes, ParseError};
pub use event::{pretty_date, week_of_month, Event};
pub use validate::{validate_catalog, validate_event, ValidationError};
