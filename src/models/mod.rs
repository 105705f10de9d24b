pub mod daily;
pub mod event;
pub mod standard;
pub mod weekly;

pub use daily::{DailyRecord, DayStatus};
pub use event::AttendanceEvent;
pub use standard::{DayStandard, Standards};
pub use weekly::WeeklyRecord;
