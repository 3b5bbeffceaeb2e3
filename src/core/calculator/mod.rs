pub mod daily;
pub mod monthly;

pub use daily::calculate_work_hours;
pub use monthly::calculate_monthly_statistics;
