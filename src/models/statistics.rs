use serde::Serialize;

/// Aggregated view of one calendar month. Never stored; rebuilt from the
/// month's entries every time it is asked for.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MonthlyStatistics {
    pub office_hours: f64,
    pub remote_hours: f64,
    pub annual_leave_hours: f64,
    /// Office + remote only, leave is not worked time.
    pub total_hours: f64,
    pub standard_hours: f64,

    // signed: negative means under-work
    pub office_overwork: f64,
    pub remote_overwork: f64,
    pub total_overwork: f64,

    pub office_days: u32,
    pub remote_days: u32,
    pub leave_days: u32,
    pub work_days: u32,
    pub business_days: u32,

    pub average_office_hours: f64,
    pub average_remote_hours: f64,

    /// Share of attended days (leave excluded).
    pub office_percentage: u32,
    pub remote_percentage: u32,
    /// Share of all recorded days (leave included).
    pub leave_percentage: u32,
}
