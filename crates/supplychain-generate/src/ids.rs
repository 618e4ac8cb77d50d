use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use ulid::Ulid;

/// Mask for the 80 random bits of a ULID.
const RANDOM_BITS_MASK: u128 = (1 << 80) - 1;

/// Monotonic ULID source.
///
/// IDs minted within the same millisecond (or with a clock that does not
/// advance) increment the previous ID instead of drawing fresh randomness,
/// so lexical order always matches creation order.
#[derive(Debug, Default, Clone)]
pub struct IdSource {
    last: Option<Ulid>,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, at: DateTime<Utc>, rng: &mut dyn RngCore) -> Ulid {
        let mut timestamp_ms = u64::try_from(at.timestamp_millis()).unwrap_or(0);

        if let Some(last) = self.last {
            if timestamp_ms <= last.timestamp_ms() {
                if let Some(next) = last.increment() {
                    self.last = Some(next);
                    return next;
                }
                // Random part exhausted for this millisecond.
                timestamp_ms = last.timestamp_ms() + 1;
            }
        }

        let random = rng.random::<u128>() & RANDOM_BITS_MASK;
        let id = Ulid::from_parts(timestamp_ms, random);
        self.last = Some(id);
        id
    }
}
