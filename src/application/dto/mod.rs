pub mod time;

pub use time::TimeSnapshotDto;
