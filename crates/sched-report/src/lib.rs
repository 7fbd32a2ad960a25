pub mod detail;
pub mod grid;
pub mod links;
pub mod list;
pub mod options;
pub mod style;

pub use detail::detail_card;
pub use grid::{slot_grid, week_grids};
pub use links::{event_registration_link, registration_link};
pub use list::list_table;
pub use options::options_table;
pub use style::apply_table_style;
