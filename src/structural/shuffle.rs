use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random permutation of `seq`, as a new vector.
///
/// Uses the thread-local RNG. The input is left untouched.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// [`shuffle`] driven by a caller-supplied RNG, for reproducible runs.
///
/// The copy is permuted in place with Fisher–Yates, so every permutation is
/// equally likely given a uniform RNG.
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = seq.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
