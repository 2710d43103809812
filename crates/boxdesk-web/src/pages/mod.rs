//! Page components for the web interface

pub mod box_detail;
pub mod dashboard;
