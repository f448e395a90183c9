/// Binomial coefficient C(n, k), computed via the multiplicative formula
/// over the smaller of `k` and `n - k`. Multiplication and division are
/// interleaved so intermediate values stay close to the final magnitude
/// instead of running through factorials.
pub fn combination(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }
    let limit = k.min(n - k);
    let mut result = 1.0_f64;
    for i in 1..=limit {
        result *= f64::from(n - (limit - i)) / f64::from(i);
    }
    result
}

/// Probability of drawing at least one of `successes` target cards when
/// taking `draws` cards without replacement from a pool of `total`.
///
/// Degenerate pools never succeed: zero successes, zero draws or an empty
/// pool all yield 0. Drawing more cards than exist yields 1.
pub fn probability_at_least_one(total: u32, successes: u32, draws: u32) -> f64 {
    if successes == 0 || draws == 0 || total == 0 {
        return 0.0;
    }
    if draws > total {
        return 1.0;
    }
    let numerator = combination(total - successes, draws);
    let denominator = combination(total, draws);
    if denominator == 0.0 {
        return 0.0;
    }
    1.0 - numerator / denominator
}
