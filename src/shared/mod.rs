pub mod logging;

pub use logging::{activity_log_path, append_activity_log_line};
