//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// Ensures each factory-created entity gets distinct names and addresses to
/// avoid unique constraint collisions.
static COUNTER: std::sync::atomic::AtomicI32 = std::sync::atomic::AtomicI32::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
