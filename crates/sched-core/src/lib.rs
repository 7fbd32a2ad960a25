pub mod color;
pub mod datetime;
pub mod facets;
pub mod project;
pub mod state;

pub use color::{EventColors, SubjectPalette, hash_color};
pub use datetime::{
    MalformedTimeError, add_three_hours, format_clock_12h, parse_clock_12h, parse_clock_24h,
    parse_day_month,
};
pub use facets::{apply_filters, calendar_filtered, resolve_all, resolve_options};
pub use project::{
    CalendarEvent, DEFAULT_EPOCH_YEAR, EventDetail, Projection, ProjectionIssue, project_session,
    project_sessions, project_slot, project_slots, week_anchor,
};
pub use state::{FilterUpdate, set_filter, toggle_option};
