//! Benchmark utilities for the consensus helpers
pub mod utils {
    use consensus_helpers::InMemoryBalances;
    use rand::Rng;

    /// Random 32-byte seed.
    pub fn generate_random_seed() -> [u8; 32] {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill(&mut seed);
        seed
    }

    /// Registry of `count` validators with random balances up to `max`.
    pub fn generate_balances(count: u64, max: u64) -> InMemoryBalances {
        let mut rng = rand::thread_rng();
        (0..count).map(|index| (index, rng.gen_range(0..=max))).collect()
    }
}
