//! E8 lattice facts: root system, Cartan matrix and classical invariants.
//!
//! The 240 roots of E8 in the standard (even coordinate system) construction:
//!
//! - **Type 1** (112 roots): two coordinates ±1, the remaining six zero.
//! - **Type 2** (128 roots): all eight coordinates ±½ with an even number of
//!   minus signs.
//!
//! Every root has squared norm 2. The roots are regenerated on each call.

/// Rank of E8 (dimension of the root space).
pub const E8_RANK: usize = 8;

/// Number of roots, equal to the kissing number of the E8 lattice.
pub const E8_ROOT_COUNT: usize = 240;

/// Dimension of the E8 Lie algebra (240 roots + rank 8).
pub const E8_DIMENSION: usize = 248;

/// A vector in the 8-dimensional root space.
pub type E8Root = [f64; E8_RANK];

/// Cartan matrix of E8, branch node at index 2 joined to index 7.
pub const E8_CARTAN: [[i32; E8_RANK]; E8_RANK] = [
    [2, -1, 0, 0, 0, 0, 0, 0],
    [-1, 2, -1, 0, 0, 0, 0, 0],
    [0, -1, 2, -1, 0, 0, 0, -1],
    [0, 0, -1, 2, -1, 0, 0, 0],
    [0, 0, 0, -1, 2, -1, 0, 0],
    [0, 0, 0, 0, -1, 2, -1, 0],
    [0, 0, 0, 0, 0, -1, 2, 0],
    [0, 0, -1, 0, 0, 0, 0, 2],
];

/// Enumerate all 240 roots: the 112 type-1 roots followed by the 128 type-2 roots.
pub fn e8_root_system() -> Vec<E8Root> {
    let mut roots = Vec::with_capacity(E8_ROOT_COUNT);

    for i in 0..E8_RANK {
        for j in (i + 1)..E8_RANK {
            for si in [-1.0, 1.0] {
                for sj in [-1.0, 1.0] {
                    let mut root = [0.0; E8_RANK];
                    root[i] = si;
                    root[j] = sj;
                    roots.push(root);
                }
            }
        }
    }

    // Bit i set → +½ at coordinate i
    for signs in 0u32..256 {
        let minus_signs = E8_RANK as u32 - signs.count_ones();
        if minus_signs % 2 != 0 {
            continue;
        }
        let mut root = [0.0; E8_RANK];
        for (i, coord) in root.iter_mut().enumerate() {
            *coord = if (signs >> i) & 1 == 1 { 0.5 } else { -0.5 };
        }
        roots.push(root);
    }

    roots
}

pub fn e8_cartan_matrix() -> [[i32; E8_RANK]; E8_RANK] {
    E8_CARTAN
}

/// Kissing number of the E8 lattice.
pub fn kissing_number_e8() -> usize {
    E8_ROOT_COUNT
}

/// Dimension of the E8 Lie algebra.
pub fn e8_dimension() -> usize {
    E8_DIMENSION
}

/// Squared Euclidean norm v·v. Even for every E8 lattice vector.
pub fn e8_lattice_vector_norm_squared(vector: &E8Root) -> f64 {
    vector.iter().map(|x| x * x).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn key(root: &E8Root) -> [i32; E8_RANK] {
        root.map(|x| (x * 2.0) as i32)
    }

    #[test]
    fn root_count_and_shape() {
        let roots = e8_root_system();
        assert_eq!(roots.len(), 240);
        assert_eq!(roots.len(), kissing_number_e8());
        assert!(roots.iter().all(|r| r.len() == 8));
    }

    #[test]
    fn roots_are_distinct() {
        let roots = e8_root_system();
        let unique: HashSet<_> = roots.iter().map(key).collect();
        assert_eq!(unique.len(), 240);
    }

    #[test]
    fn all_roots_have_norm_two() {
        for root in e8_root_system() {
            assert_eq!(e8_lattice_vector_norm_squared(&root), 2.0);
        }
    }

    #[test]
    fn type_split_112_128() {
        let roots = e8_root_system();
        let type1 = roots.iter().filter(|r| r.iter().any(|&x| x == 0.0)).count();
        assert_eq!(type1, 112);
        assert!(roots[112..].iter().all(|r| r.iter().all(|&x| x.abs() == 0.5)));
    }

    #[test]
    fn type2_roots_have_even_minus_signs() {
        for root in &e8_root_system()[112..] {
            let minus = root.iter().filter(|&&x| x < 0.0).count();
            assert_eq!(minus % 2, 0);
        }
    }

    #[test]
    fn root_system_closed_under_negation() {
        let roots = e8_root_system();
        let set: HashSet<_> = roots.iter().map(key).collect();
        for root in &roots {
            let neg = root.map(|x| -x);
            assert!(set.contains(&key(&neg)));
        }
    }

    #[test]
    fn inner_products_are_integral() {
        let roots = e8_root_system();
        for a in roots.iter().step_by(7) {
            for b in &roots {
                let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
                assert_eq!(dot.fract(), 0.0);
            }
        }
    }

    #[test]
    fn cartan_matrix_is_symmetric_with_diagonal_two() {
        let m = e8_cartan_matrix();
        for i in 0..E8_RANK {
            assert_eq!(m[i][i], 2);
            for j in 0..E8_RANK {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
        // 7 edges in the Dynkin diagram
        let off_diag: i32 = m.iter().flatten().filter(|&&x| x == -1).count() as i32;
        assert_eq!(off_diag, 14);
    }

    #[test]
    fn algebra_dimension() {
        assert_eq!(e8_dimension(), 248);
        assert_eq!(e8_dimension(), kissing_number_e8() + E8_RANK);
    }
}
