//! Process-local unique id generation for products and orders

use std::sync::atomic::{AtomicU64, Ordering};

use super::time::current_timestamp_millis;

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique id with the given prefix
///
/// Combines the millisecond timestamp with a process-local counter, so ids
/// created within the same millisecond stay distinct.
pub fn generate_id(prefix: &str) -> String {
    let n = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}{}{:04}", prefix, current_timestamp_millis(), n % 10_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = generate_id("p");
        let b = generate_id("p");
        assert_ne!(a, b);
        assert!(a.starts_with('p'));
    }
}
