pub mod record;
pub mod split_value;

pub use record::{SessionRecord, SplitTimes};
pub use split_value::SplitValue;
