/// Calculate number of combinations C(n, k) without overflow
pub fn num_combinations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }

    let k = k.min(n - k); // Optimization: C(n,k) = C(n,n-k)
    let mut result = 1usize;

    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }

    result
}

/// All ordered pairs `(row, col)` of distinct 0-based vertices, in row-major order.
pub fn ordered_edge_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1));
    for row in 0..n {
        for col in 0..n {
            if row != col {
                pairs.push((row, col));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_edge_pairs() {
        assert!(ordered_edge_pairs(0).is_empty());
        assert!(ordered_edge_pairs(1).is_empty());
        assert_eq!(
            ordered_edge_pairs(3),
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]
        );
        assert_eq!(ordered_edge_pairs(5).len(), 20);
    }
}
