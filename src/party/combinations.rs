//! Choose-3 enumeration

/// Every 3-element combination of `items`, in lexicographic index order
/// (i < j < k). Yields C(n, 3) items.
pub fn triples<T>(items: &[T]) -> impl Iterator<Item = [&T; 3]> + '_ {
    let n = items.len();
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [&items[i], &items[j], &items[k]]))
    })
}

/// C(n, 3)
pub fn triple_count(n: usize) -> usize {
    if n < 3 { 0 } else { n * (n - 1) * (n - 2) / 6 }
}
