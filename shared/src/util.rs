use std::sync::LazyLock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Per-process token sequence, started at a random offset so tokens from
/// different app launches in the same millisecond still diverge.
static TOKEN_SEQ: LazyLock<AtomicI64> = LazyLock::new(|| {
    use rand::Rng;
    AtomicI64::new(rand::thread_rng().gen_range(0..0x1000))
});

/// Generate a time-based record token for use as an entity ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the
/// UI shell can round-trip IDs through JSON without loss):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: rolling sequence (4096 per ms, unique within a process)
///
/// Rendered as a decimal string because record IDs travel as strings in
/// the stored JSON arrays.
pub fn record_token() -> String {
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let seq = TOKEN_SEQ.fetch_add(1, Ordering::Relaxed) & 0xFFF; // 12 bits
    ((ts << 12) | seq).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_numeric() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..256 {
            let token = record_token();
            let value: i64 = token.parse().expect("token is a decimal i64");
            assert!(value > 0);
            assert!(seen.insert(token));
        }
    }

    #[test]
    fn tokens_order_by_generation_time() {
        let earlier = record_token().parse::<i64>().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = record_token().parse::<i64>().unwrap();
        assert!(later > earlier);
    }
}
