//! Time and timestamp helpers.

use chrono::{DateTime, Local};

/// Wall-clock timestamp used to name backup files.
pub type Timestamp = DateTime<Local>;

/// `strftime` pattern of the backup suffix, one-second resolution.
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now()
}

/// Format `at` as the `YYYYMMDD_HHMMSS` stamp appended to backup files.
#[must_use]
pub fn backup_stamp(at: &Timestamp) -> String {
    at.format(BACKUP_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_local_time() {
        let before = Local::now();
        let ts = now();
        let after = Local::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_format_backup_stamp_with_fourteen_digits() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        let stamp = backup_stamp(&at);
        assert_eq!(stamp, "20240307_090502");
        assert_eq!(stamp.chars().filter(char::is_ascii_digit).count(), 14);
    }
}
