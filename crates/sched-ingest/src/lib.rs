pub mod cache;
pub mod error;
pub mod remote;
pub mod roster;
pub mod sessions;

pub use cache::{CACHE_TTL, CacheEntry, read_cache, write_cache};
pub use error::FetchError;
pub use remote::{ScheduleClient, parse_schedule_envelope};
pub use roster::{convert_roster, prefill_field_for};
pub use sessions::{SessionStore, load_sessions};
