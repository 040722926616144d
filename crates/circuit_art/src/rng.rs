//! Deterministic random stream driving a generation pass.
//!
//! [`SineRng`] keeps a single `f64` of state and advances it with the recurrence
//! `state = |sin(state * 128 + 0.1) * 100| mod 1`. Every consumer draws from the
//! stream in a fixed order, so the same seed always reproduces the same artwork.
//! The higher-level draws (`uniform`, `integer`, `shuffle`, ...) live on the
//! [`RandomSource`] trait so tests can substitute scripted streams.

/// Source of uniform floats in `[0, 1)` plus the derived draws used by the generator.
pub trait RandomSource {
    /// Advance the stream and return the next value in `[0, 1)`.
    fn random(&mut self) -> f64;

    /// Uniform float in `[low, high)`.
    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.random() * (high - low)
    }

    /// Integer in `[low, high)`.
    #[inline]
    fn integer(&mut self, low: i64, high: i64) -> i64 {
        self.uniform(low as f64, high as f64).floor() as i64
    }

    /// Index in `[0, len)`. Consumes one draw.
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.integer(0, len as i64) as usize
    }

    /// In-place Fisher–Yates shuffle, walking from the last index down to 1.
    ///
    /// Consumes exactly `len - 1` draws for non-empty input.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Uniformly pick one element. Returns `None` (without drawing) for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.index(items.len()))
    }

    /// Pick one element with probability proportional to its weight.
    ///
    /// Weights are normalised by their sum, a single threshold is drawn, and the first
    /// element whose cumulative normalised weight reaches the threshold wins. If rounding
    /// leaves the cumulative sum just below the threshold the last element is returned.
    /// The threshold draw happens even for an empty slice.
    fn choose_weighted<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let total = weights.iter().fold(0.0, |acc, w| acc + w);
        let threshold = self.random();

        let mut cumulative = 0.0;
        for (item, weight) in items.iter().zip(weights) {
            cumulative += weight / total;
            if cumulative >= threshold {
                return Some(item);
            }
        }
        items.last()
    }
}

/// The sine-recurrence generator. Not cryptographic; reproducibility is the only goal.
#[derive(Debug, Clone, PartialEq)]
pub struct SineRng {
    state: f64,
}

impl SineRng {
    pub fn new(seed: f64) -> Self {
        debug_assert!(seed.is_finite(), "seed state must be finite");
        Self { state: seed }
    }

    /// Current raw state (the last value returned, or the seed before the first draw).
    pub fn state(&self) -> f64 {
        self.state
    }
}

impl RandomSource for SineRng {
    #[inline]
    fn random(&mut self) -> f64 {
        self.state = ((self.state * 128.0 + 0.1).sin() * 100.0).abs() % 1.0;
        self.state
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn random(&mut self) -> f64 {
        (**self).random()
    }
}

/// Replays a fixed list of draws, cycling when exhausted. Test-only.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    pub(crate) fn draws(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn random(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
