//! Time and timestamp utilities

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Get current Unix timestamp in milliseconds
pub fn current_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_are_consistent() {
        let secs = current_timestamp();
        let millis = current_timestamp_millis();
        // Millis and seconds taken back to back land in the same second or two
        assert!(millis / 1000 >= secs);
        assert!(millis / 1000 - secs <= 2);
    }
}
