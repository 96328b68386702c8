use rand::prelude::*;

/// Return `labels` in a random order fixed by `seed`.
///
/// Uses a Fisher-Yates shuffle, so every permutation is equally likely and
/// the same seed always yields the same order.
pub fn shuffled_labels<S: AsRef<str>>(labels: &[S], seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle_with(labels, &mut rng)
}

pub fn shuffle_with<S: AsRef<str>, R: Rng + ?Sized>(labels: &[S], rng: &mut R) -> Vec<String> {
    let mut out: Vec<String> = labels.iter().map(|s| s.as_ref().to_string()).collect();
    out.shuffle(rng);
    out
}
