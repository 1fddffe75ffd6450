use rand::Rng;

/// Source of the randomness used to break ties between candidate dishes.
///
/// Any [`rand::Rng`] works; tests can use [`SequenceSource`] to script picks.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each value is reduced modulo the candidate count, so `0` always means
/// "closest calorie match".
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Always picks the closest candidate.
    pub fn closest() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceSource {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}
