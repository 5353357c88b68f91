use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn activity_log_path(state_root: &Path) -> PathBuf {
    state_root.join("logs/activity.log")
}

/// Appends one timestamped line to the activity log. Logging failures are
/// swallowed; the tool keeps working without its log.
pub fn append_activity_log_line(state_root: &Path, line: &str) {
    let path = activity_log_path(state_root);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let stamped = format!("{} {line}\n", Utc::now().format("%Y-%m-%dT%H:%M:%SZ"));
    let _ = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| file.write_all(stamped.as_bytes()));
}
