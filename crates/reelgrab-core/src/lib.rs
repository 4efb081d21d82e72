pub mod config;
pub mod error;
pub mod logging;

pub mod dedup;
pub mod dispatch;
pub mod input;
pub mod numbering;
pub mod report;
pub mod url_model;
