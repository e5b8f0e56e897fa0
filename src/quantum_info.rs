//! Quantum information measures on dense density matrices.
//!
//! Density matrices are `nalgebra` complex matrices. All measures go through
//! the Hermitian eigendecomposition (`SymmetricEigen` over `Complex64`):
//!
//!   S(ρ) = -Tr(ρ log₂ ρ) = -Σ λᵢ log₂ λᵢ
//!
//! Eigenvalues at or below the configured cutoff (1e-12 by default) are
//! treated as numerical zero and excluded from every entropy sum.
//!
//! Bipartite states are indexed as |a⟩⊗|b⟩ → a·dim_b + b, so the composite
//! matrix element ρ[(a·dim_b + b), (a'·dim_b + b')] is the tensor element
//! ρ[a, b, a', b'].

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use num_complex::Complex64;
use std::borrow::Cow;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{Error, Result};

/// Dense complex density matrix.
pub type DensityMatrix = DMatrix<Complex64>;

/// Dense complex state vector.
pub type StateVector = DVector<Complex64>;

/// Numerical tolerances for entropy evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyConfig {
    /// Eigenvalues at or below this are dropped from log sums
    pub eigenvalue_cutoff: f64,
    /// Relative tolerance of the Hermiticity check
    pub hermitian_rtol: f64,
    /// Absolute tolerance of the Hermiticity check
    pub hermitian_atol: f64,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            eigenvalue_cutoff: 1e-12,
            hermitian_rtol: 1e-5,
            hermitian_atol: 1e-8,
        }
    }
}

/// Subsystem of a bipartite state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    A,
    B,
}

/// The four maximally entangled two-qubit states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BellState {
    /// |Φ⁺⟩ = (|00⟩ + |11⟩)/√2
    PhiPlus,
    /// |Φ⁻⟩ = (|00⟩ - |11⟩)/√2
    PhiMinus,
    /// |Ψ⁺⟩ = (|01⟩ + |10⟩)/√2
    PsiPlus,
    /// |Ψ⁻⟩ = (|01⟩ - |10⟩)/√2
    PsiMinus,
}

impl BellState {
    pub const ALL: [BellState; 4] = [
        BellState::PhiPlus,
        BellState::PhiMinus,
        BellState::PsiPlus,
        BellState::PsiMinus,
    ];

    /// Select a Bell state by its conventional index 0..=3.
    pub fn from_index(which: u8) -> Result<Self> {
        Self::ALL
            .get(which as usize)
            .copied()
            .ok_or(Error::InvalidBellIndex(which))
    }

    /// Amplitudes in the computational basis |00⟩, |01⟩, |10⟩, |11⟩.
    pub fn amplitudes(self) -> [f64; 4] {
        let s = FRAC_1_SQRT_2;
        match self {
            BellState::PhiPlus => [s, 0.0, 0.0, s],
            BellState::PhiMinus => [s, 0.0, 0.0, -s],
            BellState::PsiPlus => [0.0, s, s, 0.0],
            BellState::PsiMinus => [0.0, s, -s, 0.0],
        }
    }

    pub fn state_vector(self) -> StateVector {
        StateVector::from_iterator(4, self.amplitudes().iter().map(|&a| Complex64::new(a, 0.0)))
    }
}

fn ensure_square(m: &DensityMatrix) -> Result<usize> {
    if m.nrows() != m.ncols() {
        return Err(Error::NotSquare {
            rows: m.nrows(),
            cols: m.ncols(),
        });
    }
    Ok(m.nrows())
}

/// Elementwise `allclose(ρ, ρ†)`: |a - b| ≤ atol + rtol·|b|.
pub fn is_hermitian(rho: &DensityMatrix, config: &EntropyConfig) -> bool {
    let adjoint = rho.adjoint();
    rho.shape() == adjoint.shape()
        && rho.iter().zip(adjoint.iter()).all(|(a, b)| {
            (*a - *b).norm() <= config.hermitian_atol + config.hermitian_rtol * b.norm()
        })
}

/// Hermitian part (ρ + ρ†)/2.
fn hermitian_part(m: &DensityMatrix) -> DensityMatrix {
    (m + m.adjoint()).map(|z| z * 0.5)
}

/// `m` when Hermitian within tolerance, otherwise its Hermitian part.
fn ensure_hermitian<'a>(m: &'a DensityMatrix, config: &EntropyConfig) -> Cow<'a, DensityMatrix> {
    if is_hermitian(m, config) {
        Cow::Borrowed(m)
    } else {
        tracing::warn!(dim = m.nrows(), "density matrix is not Hermitian, symmetrizing");
        Cow::Owned(hermitian_part(m))
    }
}

/// Matrix square root of a Hermitian PSD matrix, negative eigenvalues clamped to zero.
fn hermitian_sqrt(m: &DensityMatrix) -> DensityMatrix {
    let eig = SymmetricEigen::new(m.clone());
    let roots = eig.eigenvalues.map(|l| Complex64::new(l.max(0.0).sqrt(), 0.0));
    let v = &eig.eigenvectors;
    v * DMatrix::from_diagonal(&roots) * v.adjoint()
}

/// Von Neumann entropy in bits with default tolerances.
pub fn von_neumann_entropy(rho: &DensityMatrix) -> Result<f64> {
    von_neumann_entropy_with(rho, &EntropyConfig::default())
}

/// Von Neumann entropy in bits.
///
/// A non-Hermitian input is symmetrized before diagonalization and a warning
/// is logged; the computation is not aborted.
pub fn von_neumann_entropy_with(rho: &DensityMatrix, config: &EntropyConfig) -> Result<f64> {
    let dim = ensure_square(rho)?;

    let eigenvalues = ensure_hermitian(rho, config).symmetric_eigenvalues();
    tracing::trace!(dim, "von Neumann entropy");

    let dropped = eigenvalues
        .iter()
        .filter(|&&l| l <= config.eigenvalue_cutoff)
        .count();
    if dropped > 0 {
        tracing::trace!(dropped, "eigenvalues below cutoff excluded from entropy");
    }

    let entropy: f64 = eigenvalues
        .iter()
        .filter(|&&l| l > config.eigenvalue_cutoff)
        .map(|&l| -l * l.log2())
        .sum();

    Ok(entropy)
}

/// Reduce a bipartite density matrix by tracing out one subsystem.
///
/// Returns the dim_a×dim_a matrix Tr_B ρ, or the dim_b×dim_b matrix Tr_A ρ.
pub fn partial_trace(
    rho: &DensityMatrix,
    dim_a: usize,
    dim_b: usize,
    trace_over: Subsystem,
) -> Result<DensityMatrix> {
    let dim = ensure_square(rho)?;
    let expected = dim_a * dim_b;
    if dim != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: dim,
        });
    }
    tracing::debug!(dim_a, dim_b, ?trace_over, "partial trace");

    let reduced = match trace_over {
        Subsystem::B => DMatrix::from_fn(dim_a, dim_a, |a, a2| {
            (0..dim_b)
                .map(|b| rho[(a * dim_b + b, a2 * dim_b + b)])
                .sum::<Complex64>()
        }),
        Subsystem::A => DMatrix::from_fn(dim_b, dim_b, |b, b2| {
            (0..dim_a)
                .map(|a| rho[(a * dim_b + b, a * dim_b + b2)])
                .sum::<Complex64>()
        }),
    };
    Ok(reduced)
}

/// Entanglement entropy S(Tr_B ρ_AB) in bits.
pub fn entanglement_entropy(rho_ab: &DensityMatrix, dim_a: usize, dim_b: usize) -> Result<f64> {
    let rho_a = partial_trace(rho_ab, dim_a, dim_b, Subsystem::B)?;
    von_neumann_entropy(&rho_a)
}

/// Quantum mutual information I(A:B) = S(A) + S(B) - S(AB) in bits.
pub fn quantum_mutual_information(
    rho_ab: &DensityMatrix,
    dim_a: usize,
    dim_b: usize,
) -> Result<f64> {
    let rho_a = partial_trace(rho_ab, dim_a, dim_b, Subsystem::B)?;
    let rho_b = partial_trace(rho_ab, dim_a, dim_b, Subsystem::A)?;

    let s_a = von_neumann_entropy(&rho_a)?;
    let s_b = von_neumann_entropy(&rho_b)?;
    let s_ab = von_neumann_entropy(rho_ab)?;

    Ok(s_a + s_b - s_ab)
}

/// Uhlmann fidelity with default tolerances.
pub fn quantum_fidelity(rho: &DensityMatrix, sigma: &DensityMatrix) -> Result<f64> {
    quantum_fidelity_with(rho, sigma, &EntropyConfig::default())
}

/// Uhlmann fidelity F(ρ,σ) = (Tr √(√ρ σ √ρ))².
///
/// Non-Hermitian inputs are symmetrized with a warning, as in
/// [`von_neumann_entropy_with`].
pub fn quantum_fidelity_with(
    rho: &DensityMatrix,
    sigma: &DensityMatrix,
    config: &EntropyConfig,
) -> Result<f64> {
    let dim = ensure_square(rho)?;
    let sigma_dim = ensure_square(sigma)?;
    if dim != sigma_dim {
        return Err(Error::DimensionMismatch {
            expected: dim,
            actual: sigma_dim,
        });
    }
    tracing::debug!(dim, "quantum fidelity");

    let sqrt_rho = hermitian_sqrt(&ensure_hermitian(rho, config));
    let sigma = ensure_hermitian(sigma, config);
    let inner = &sqrt_rho * &*sigma * &sqrt_rho;
    let sqrt_inner = hermitian_sqrt(&hermitian_part(&inner));
    let tr = sqrt_inner.trace();

    Ok((tr * tr).re)
}

/// Density matrix |ψ⟩⟨ψ| of a Bell state (4×4).
pub fn create_bell_state(which: BellState) -> DensityMatrix {
    let psi = which.state_vector();
    &psi * psi.adjoint()
}
