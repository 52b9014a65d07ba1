pub mod account;
pub mod hour_record;

pub use account::{Account, Profile, Session};
pub use hour_record::{HourEntry, HourRecord};
