pub mod day_entry;
pub mod statistics;
pub mod work_type;

pub use day_entry::{DayEntry, DayInput, HoursBreakdown};
pub use statistics::MonthlyStatistics;
pub use work_type::WorkType;
