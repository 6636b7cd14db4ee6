// Contiguous n-gram generation over a token sequence.

/// All contiguous n-grams of order `n` in `tokens`, each joined with a single
/// space. Sliding window with no padding: a sequence of length L yields
/// `max(L - n + 1, 0)` n-grams. Order 0 yields nothing.
pub fn ngrams(tokens: &[String], n: usize) -> impl Iterator<Item = String> + '_ {
    // `windows` panics on a zero width, so order 0 gets an empty slice instead.
    let source = if n == 0 { &tokens[..0] } else { tokens };
    source.windows(n.max(1)).map(|window| window.join(" "))
}

/// Every n-gram of order 1 through `max_n`, lower orders first.
pub fn ngrams_up_to(tokens: &[String], max_n: usize) -> impl Iterator<Item = String> + '_ {
    (1..=max_n).flat_map(move |n| ngrams(tokens, n))
}

/// Number of n-grams of orders 1..=`max_n` produced by `len` tokens.
pub fn ngram_count(len: usize, max_n: usize) -> usize {
    (1..=max_n).map(|n| (len + 1).saturating_sub(n)).sum()
}
