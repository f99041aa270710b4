//! Opaque identifier generation.
//!
//! # Responsibility
//! - Produce collection-membership keys that are unique with overwhelming
//!   probability for the lifetime of a workspace.
//! - Hide the two-tier source selection behind one entry point so call
//!   sites never branch on random-source availability.
//!
//! # Invariants
//! - The preferred path emits a v4 UUID built from OS entropy.
//! - The fallback path is NOT cryptographically strong and is acceptable
//!   only because identifiers are never a security boundary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Builder;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FALLBACK_SEGMENT_LEN: usize = 13;

// Mixed into every weak seed so ids generated within the same clock tick
// still diverge.
static FALLBACK_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generates a fresh opaque identifier.
///
/// Uses OS entropy when available (hyphenated v4 UUID); otherwise emits two
/// concatenated pseudo-random base-36 segments.
pub fn generate_id() -> String {
    match secure_uuid() {
        Some(id) => id,
        None => fallback_id(),
    }
}

/// Picks a uniform-enough index into a non-empty fixed-size table.
///
/// Modulo bias over an 8-byte sample is irrelevant for display-tag
/// selection, the only consumer.
pub(crate) fn random_index(len: usize) -> usize {
    debug_assert!(len > 0, "random_index requires a non-empty table");
    let mut bytes = [0u8; 8];
    let sample = if getrandom::getrandom(&mut bytes).is_ok() {
        u64::from_le_bytes(bytes)
    } else {
        next_weak_state()
    };
    (sample % len as u64) as usize
}

fn secure_uuid() -> Option<String> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).ok()?;
    Some(Builder::from_random_bytes(bytes).into_uuid().to_string())
}

fn fallback_id() -> String {
    let mut state = next_weak_state();
    let mut id = String::with_capacity(FALLBACK_SEGMENT_LEN * 2);
    for _ in 0..FALLBACK_SEGMENT_LEN * 2 {
        state = xorshift64(state);
        id.push(BASE36_ALPHABET[(state % 36) as usize] as char);
    }
    id
}

fn next_weak_state() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let sequence = FALLBACK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let mut state = nanos
        ^ sequence.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ u64::from(std::process::id());
    if state == 0 {
        // xorshift has a fixed point at zero.
        state = 0x853c_49e6_748f_ea9b;
    }
    xorshift64(state)
}

fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

#[cfg(test)]
mod tests {
    use super::{fallback_id, generate_id, random_index, BASE36_ALPHABET, FALLBACK_SEGMENT_LEN};
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_pairwise_distinct() {
        let ids: HashSet<String> = (0..256).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn fallback_ids_are_pairwise_distinct() {
        let ids: HashSet<String> = (0..256).map(|_| fallback_id()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn fallback_ids_are_two_base36_segments() {
        let id = fallback_id();
        assert_eq!(id.len(), FALLBACK_SEGMENT_LEN * 2);
        assert!(id.bytes().all(|byte| BASE36_ALPHABET.contains(&byte)));
    }

    #[test]
    fn random_index_stays_in_bounds() {
        for _ in 0..64 {
            assert!(random_index(6) < 6);
        }
    }
}
