pub mod json;
pub mod report;

pub use json::{ChecksumReport, write_json};
pub use report::write_report;
