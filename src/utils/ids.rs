use std::sync::atomic::{AtomicU64, Ordering};

static SEQ: AtomicU64 = AtomicU64::new(0);

/// Opaque entity token: prefix, creation millis, process-local sequence.
/// The sequence keeps ids distinct even when two entities are created in
/// the same millisecond. Ids are never reused after deletion.
fn next_token(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, millis, seq)
}

pub fn category_id() -> String {
    next_token("cat")
}

pub fn service_id() -> String {
    next_token("svc")
}
