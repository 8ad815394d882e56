mod report;
mod sanitize;

pub use report::{write_crash_report, write_report_to};
pub use sanitize::sanitize_secrets;
