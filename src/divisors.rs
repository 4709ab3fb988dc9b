/// Prime factors of `n` in ascending order, repeated by multiplicity.
pub fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            n /= p;
            factors.push(p);
        } else {
            p += 1;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Every divisor of `n`, ascending. Empty for 0.
pub fn divisors(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mut out = vec![1];
    let factors = prime_factors(n);
    let mut i = 0;
    while i < factors.len() {
        let p = factors[i];
        let count = factors[i..].iter().take_while(|&&f| f == p).count();
        let prev = out.len();
        let mut power = 1;
        for _ in 0..count {
            power *= p;
            for j in 0..prev {
                out.push(out[j] * power);
            }
        }
        i += count;
    }
    out.sort_unstable();
    out
}

/// All `(n, k)` shapes with `n <= max_n` and `k` dividing `n`.
/// With `rows` set, only shapes with exactly that many rows.
pub fn shapes(max_n: usize, rows: Option<usize>) -> Vec<(usize, usize)> {
    (1..=max_n)
        .flat_map(|n| divisors(n).into_iter().map(move |k| (n, k)))
        .filter(|&(_, k)| rows.is_none_or(|r| r == k))
        .collect()
}
