//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Derives a deterministic 16-byte account uuid from a counter value.
///
/// Test uuids only need to be unique within a test database, so the counter
/// value is embedded in the trailing bytes of an otherwise zeroed buffer.
///
/// # Arguments
/// - `id` - Counter value to embed
///
/// # Returns
/// - `Vec<u8>` - 16-byte uuid
pub fn uuid_from_id(id: u64) -> Vec<u8> {
    let mut uuid = vec![0u8; 16];
    uuid[8..].copy_from_slice(&id.to_be_bytes());
    uuid
}
