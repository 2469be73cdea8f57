//! Random source port used for every non-deterministic draw.

/// Supplies uniformly distributed integers.
///
/// Generation code never touches an RNG directly; routing every draw through
/// this port lets tests and cassette playback substitute a predictable stream.
pub trait RandomSource: Send + Sync {
    /// Returns a value uniformly distributed in `[0, upper)`.
    ///
    /// `upper` must be non-zero.
    fn below(&self, upper: u32) -> u32;
}

/// Draws an inclusive range `[low, high]` from a random source.
pub fn between(random: &dyn RandomSource, low: u32, high: u32) -> u32 {
    low + random.below(high - low + 1)
}

/// Picks one element of a non-empty slice.
pub fn pick<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> &'a T {
    let upper = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let index = random.below(upper) as usize;
    &items[index.min(items.len() - 1)]
}

/// Returns `true` with probability one half.
pub fn coin(random: &dyn RandomSource) -> bool {
    random.below(2) == 1
}
