#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::assignment::LapState;
    use crate::numeric::transpose;
    use crate::{solve, solve_array, AssignmentSolver, Lapjv};
    use ndarray::Array2;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn best_injection(m: &[Vec<f64>], row: usize, used: &mut [bool]) -> f64 {
        if row == m.len() {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for j in 0..used.len() {
            if !used[j] {
                used[j] = true;
                best = best.min(m[row][j] + best_injection(m, row + 1, used));
                used[j] = false;
            }
        }
        best
    }

    /// Exhaustive minimum over every matching of size min(r, c).
    fn brute_force(m: &[Vec<f64>]) -> f64 {
        let r = m.len();
        let c = m[0].len();
        if r <= c {
            best_injection(m, 0, &mut vec![false; c])
        } else {
            brute_force(&transpose(m))
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-7 * (1.0 + a.abs().max(b.abs()))
    }

    fn matrix(values: impl Strategy<Value = f64> + Clone) -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..=5, 1usize..=5).prop_flat_map(move |(r, c)| {
            proptest::collection::vec(proptest::collection::vec(values.clone(), c), r)
        })
    }

    fn real_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
        matrix(-100.0f64..100.0)
    }

    /// Few distinct values, so cost ties are everywhere.
    fn tied_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
        matrix((0i32..4).prop_map(f64::from))
    }

    fn square_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..=6).prop_flat_map(|d| {
            proptest::collection::vec(proptest::collection::vec(-50.0f64..50.0, d), d)
        })
    }

    #[test]
    fn test_degenerate_shapes() {
        let a = solve(&[[4.0, 1.0, 7.0, 2.0]]).unwrap().unwrap();
        assert_eq!(a.pairs().collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(a.cost, 1.0);

        let a = solve(&transpose(&[[4.0, 1.0, 7.0, 2.0]])).unwrap().unwrap();
        assert_eq!(a.pairs().collect::<Vec<_>>(), vec![(1, 0)]);
        assert_eq!(a.cost, 1.0);
    }

    #[test]
    fn test_rectangular_never_uses_padding() {
        let costs = vec![vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]];
        let a = solve(&costs).unwrap().unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.col_index.iter().all(|&j| j < 3));
        assert_eq!(a.row_index, vec![0, 1]);
    }

    #[test]
    fn test_dual_certificate_random_square() {
        let mut rng = StdRng::seed_from_u64(7);
        for &(dim, tied) in &[(40, false), (40, true), (75, false), (75, true)] {
            let m = Array2::from_shape_fn((dim, dim), |_| {
                if tied {
                    f64::from(rng.random_range(0i32..5))
                } else {
                    rng.random_range(0.0..1000.0)
                }
            });

            let mut state = LapState::new(m.view());
            let num_free = state.reduce();
            state.augment(num_free);

            let cols: HashSet<usize> = state.row_sol.iter().copied().collect();
            assert_eq!(cols.len(), dim);
            assert!(state.is_consistent());

            for i in 0..dim {
                let own = state.reduced(i, state.row_sol[i]);
                for j in 0..dim {
                    assert!(own <= state.reduced(i, j) + 1e-6, "dim {dim} row {i} col {j}");
                }
            }
        }
    }

    #[test]
    fn test_large_rectangular_cost_matches_pairs() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = Array2::from_shape_fn((60, 45), |_| rng.random_range(-10.0..10.0));

        let a = solve_array(m.view()).unwrap().unwrap();
        assert_eq!(a.len(), 45);
        let recomputed: f64 = a.pairs().map(|(i, j)| m[[i, j]]).sum();
        assert_eq!(a.cost, recomputed);

        let t = solve_array(m.t()).unwrap().unwrap();
        assert!(close(a.cost, t.cost));
    }

    proptest! {
        #[test]
        fn square_result_is_bijection(m in square_matrix()) {
            let d = m.len();
            let a = solve(&m).unwrap().unwrap();

            prop_assert_eq!(a.len(), d);
            let rows: HashSet<usize> = a.row_index.iter().copied().collect();
            let cols: HashSet<usize> = a.col_index.iter().copied().collect();
            prop_assert_eq!(rows.len(), d);
            prop_assert_eq!(cols.len(), d);
            prop_assert!(cols.iter().all(|&j| j < d));
        }

        #[test]
        fn cost_equals_recomputed_sum(m in real_matrix()) {
            let a = solve(&m).unwrap().unwrap();
            let recomputed: f64 = a.pairs().map(|(i, j)| m[i][j]).sum();
            prop_assert_eq!(a.cost, recomputed);
        }

        #[test]
        fn matches_brute_force(m in real_matrix()) {
            let a = solve(&m).unwrap().unwrap();
            let best = brute_force(&m);
            prop_assert!(close(a.cost, best), "lapjv {} vs brute force {}", a.cost, best);
        }

        #[test]
        fn matches_brute_force_with_ties(m in tied_matrix()) {
            let a = solve(&m).unwrap().unwrap();
            prop_assert_eq!(a.cost, brute_force(&m));
        }

        #[test]
        fn rectangular_pair_count(m in real_matrix()) {
            let (r, c) = (m.len(), m[0].len());
            let a = solve(&m).unwrap().unwrap();

            prop_assert_eq!(a.len(), r.min(c));
            prop_assert!(a.row_index.iter().all(|&i| i < r));
            prop_assert!(a.col_index.iter().all(|&j| j < c));
            prop_assert!(a.row_index.windows(2).all(|w| w[0] < w[1]));
            let cols: HashSet<usize> = a.col_index.iter().copied().collect();
            prop_assert_eq!(cols.len(), a.len());
        }

        #[test]
        fn deterministic_across_instances(m in tied_matrix()) {
            let a = Lapjv::new().solve_rows(&m).unwrap();
            let b = Lapjv::new().solve_rows(&m).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn transpose_has_same_cost(m in real_matrix()) {
            let a = solve(&m).unwrap().unwrap();
            let t = solve(&transpose(&m)).unwrap().unwrap();
            prop_assert!(close(a.cost, t.cost), "{} vs {}", a.cost, t.cost);
        }

        #[test]
        fn maximize_is_minimize_of_negation(m in real_matrix()) {
            let max = Lapjv::new().with_maximize(true).solve_rows(&m).unwrap().unwrap();
            let negated: Vec<Vec<f64>> =
                m.iter().map(|row| row.iter().map(|x| -x).collect()).collect();
            let min = solve(&negated).unwrap().unwrap();
            prop_assert!(close(max.cost, -min.cost), "{} vs {}", max.cost, -min.cost);
        }
    }
}
