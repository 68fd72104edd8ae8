use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform playlist-position picker for the "Random" command.
///
/// The master generator is seeded once; every pick reseeds a throwaway
/// generator from it and draws exactly one value.
pub struct RandomIndexSource {
    // Use StdRng instead of ThreadRng so the source can be shared between threads
    master: Mutex<StdRng>,
}

impl RandomIndexSource {
    /// Seeds the master generator from the operating system.
    pub fn from_entropy() -> Result<Self, String> {
        let mut seed = [0u8; 32];
        getrandom::fill(&mut seed)
            .map_err(|err| format!("Failed to generate random seed: {}", err))?;
        Ok(Self::from_seed(seed))
    }

    /// Deterministic source, for tests and reproducible hosts.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            master: Mutex::new(StdRng::from_seed(seed)),
        }
    }

    /// Returns a position in `0..item_count`, or `None` for an empty playlist.
    pub fn pick(&self, item_count: usize) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        let draw_seed: u64 = match self.master.lock() {
            Ok(mut master) => master.gen(),
            Err(poisoned) => poisoned.into_inner().gen(),
        };
        let mut rng = StdRng::seed_from_u64(draw_seed);
        Some(rng.gen_range(0..item_count))
    }
}
