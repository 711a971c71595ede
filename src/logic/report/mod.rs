//! Report Module - text report and response payload

pub mod text;
pub mod response;

pub use text::{generate_text_report, HEALTHY_REPORT};
pub use response::DetectionResponse;
