mod date;
mod duration;
mod model;

pub use date::{format_published_at, parse_published_at};
pub use duration::{duration_from_raw, format_duration};
pub use model::{Episode, episodes_from_catalog};
