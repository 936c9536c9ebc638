use rand::Rng;

/// Draw `n` items uniformly at random without replacement.
///
/// `n` is clamped to `items.len()`. The result is in draw order, which is
/// itself random, so callers can use it directly as display order.
pub fn sample<T: Clone, R: Rng>(rng: &mut R, items: &[T], n: usize) -> Vec<T> {
    let n = n.min(items.len());
    let mut idx: Vec<usize> = (0..items.len()).collect();

    // Partial Fisher-Yates: only the first `n` slots need to be settled.
    for i in 0..n {
        let j = rng.gen_range(i..idx.len());
        idx.swap(i, j);
    }

    idx[..n].iter().map(|&i| items[i].clone()).collect()
}

/// Uniform in-place shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
