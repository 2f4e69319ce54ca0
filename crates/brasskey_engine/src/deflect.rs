//! Seeded fallback messages.
//!
//! When no rule and no entity default handles a command, the player
//! still gets a response. Messages are drawn from small pools with a
//! seedable RNG so a session given the same seed replays the same
//! deflections.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const NOTHING_HAPPENS: &[&str] = &[
    "Nothing happens.",
    "That doesn't seem to do anything.",
    "You fiddle with it for a moment. No effect.",
    "Nothing interesting happens.",
];

/// Draws deflection messages from a seeded RNG.
#[derive(Clone, Debug)]
pub struct Deflections {
    rng: ChaCha8Rng,
}

impl Deflections {
    /// Creates a pool seeded for deterministic replay.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A generic "that did nothing" response.
    pub fn nothing_happens(&mut self) -> &'static str {
        NOTHING_HAPPENS[self.rng.gen_range(0..NOTHING_HAPPENS.len())]
    }

    /// A response for two objects that don't combine.
    pub fn incompatible(&mut self, first: &str, second: &str) -> String {
        match self.rng.gen_range(0..3) {
            0 => format!("The {first} and the {second} don't go together."),
            1 => format!("You can't use the {first} with the {second}."),
            _ => format!("Combining the {first} and the {second} achieves nothing."),
        }
    }

    /// A response for a gift nobody wants.
    pub fn refuse_gift(&mut self, item: &str, recipient: &str) -> String {
        match self.rng.gen_range(0..2) {
            0 => format!("The {recipient} has no use for the {item}."),
            _ => format!("You offer the {item}, but the {recipient} doesn't take it."),
        }
    }
}
