use rand::seq::SliceRandom;
use rand::Rng;

/// Chooses one text out of a fixed catalog.
///
/// Every advisor operation that varies its wording takes a picker, so
/// callers decide between real randomness and a deterministic stub.
pub trait Picker {
    /// Pick one candidate. An empty catalog yields `""`.
    fn pick(&mut self, candidates: &[&'static str]) -> &'static str;
}

/// Uniform choice backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick(&mut self, candidates: &[&'static str]) -> &'static str {
        candidates.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

/// Always picks the candidate at `index`, wrapping around the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPick(pub usize);

impl Picker for FixedPick {
    fn pick(&mut self, candidates: &[&'static str]) -> &'static str {
        if candidates.is_empty() {
            return "";
        }
        candidates[self.0 % candidates.len()]
    }
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, candidates: &[&'static str]) -> &'static str {
        (**self).pick(candidates)
    }
}
