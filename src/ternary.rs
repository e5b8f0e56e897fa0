//! Ternary (Kleene) logic and base-3 information measures.
//!
//! Values are FALSE (-1), UNKNOWN (0) and TRUE (1). AND takes the minimum,
//! OR the maximum, NOT negates, and implication is `or(not a, b)`.
//!
//! Entropies are Shannon entropies in base 3, so a uniform three-way
//! distribution carries exactly one trit.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::quantum_info::StateVector;

/// Three-valued truth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Ternary {
    False = -1,
    Unknown = 0,
    True = 1,
}

impl Ternary {
    /// Operand order used by truth tables.
    pub const ALL: [Ternary; 3] = [Ternary::False, Ternary::Unknown, Ternary::True];

    pub fn and(self, other: Ternary) -> Ternary {
        match (self, other) {
            (Ternary::False, _) | (_, Ternary::False) => Ternary::False,
            (Ternary::Unknown, _) | (_, Ternary::Unknown) => Ternary::Unknown,
            _ => Ternary::True,
        }
    }

    pub fn or(self, other: Ternary) -> Ternary {
        match (self, other) {
            (Ternary::True, _) | (_, Ternary::True) => Ternary::True,
            (Ternary::Unknown, _) | (_, Ternary::Unknown) => Ternary::Unknown,
            _ => Ternary::False,
        }
    }

    pub fn negate(self) -> Ternary {
        match self {
            Ternary::False => Ternary::True,
            Ternary::Unknown => Ternary::Unknown,
            Ternary::True => Ternary::False,
        }
    }

    /// a → b, defined as ¬a ∨ b.
    pub fn implies(self, other: Ternary) -> Ternary {
        self.negate().or(other)
    }
}

impl TryFrom<i8> for Ternary {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            -1 => Ok(Ternary::False),
            0 => Ok(Ternary::Unknown),
            1 => Ok(Ternary::True),
            other => Err(Error::InvalidTernary(other)),
        }
    }
}

impl From<Ternary> for i8 {
    fn from(value: Ternary) -> i8 {
        value as i8
    }
}

impl Not for Ternary {
    type Output = Ternary;

    fn not(self) -> Ternary {
        self.negate()
    }
}

impl BitAnd for Ternary {
    type Output = Ternary;

    fn bitand(self, rhs: Ternary) -> Ternary {
        self.and(rhs)
    }
}

impl BitOr for Ternary {
    type Output = Ternary;

    fn bitor(self, rhs: Ternary) -> Ternary {
        self.or(rhs)
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Ternary::False => "False",
            Ternary::Unknown => "Unknown",
            Ternary::True => "True",
        };
        f.write_str(label)
    }
}

pub fn ternary_and(a: Ternary, b: Ternary) -> Ternary {
    a.and(b)
}

pub fn ternary_or(a: Ternary, b: Ternary) -> Ternary {
    a.or(b)
}

pub fn ternary_not(a: Ternary) -> Ternary {
    a.negate()
}

pub fn ternary_implication(a: Ternary, b: Ternary) -> Ternary {
    a.implies(b)
}

/// Binary connective selectable for truth-table generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TernaryOp {
    And,
    Or,
    Implication,
}

impl TernaryOp {
    pub fn apply(self, a: Ternary, b: Ternary) -> Ternary {
        match self {
            TernaryOp::And => a.and(b),
            TernaryOp::Or => a.or(b),
            TernaryOp::Implication => a.implies(b),
        }
    }
}

/// Full 3×3 truth table; row = first operand, column = second operand,
/// both ordered False, Unknown, True.
pub fn truth_table(op: TernaryOp) -> [[Ternary; 3]; 3] {
    let mut table = [[Ternary::Unknown; 3]; 3];
    for (i, &a) in Ternary::ALL.iter().enumerate() {
        for (j, &b) in Ternary::ALL.iter().enumerate() {
            table[i][j] = op.apply(a, b);
        }
    }
    table
}

/// Shannon entropy in trits, H = -Σ p log₃ p.
///
/// Non-positive probabilities contribute nothing.
pub fn ternary_entropy(probabilities: &[f64]) -> f64 {
    let ln3 = 3f64.ln();
    -probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln() / ln3)
        .sum::<f64>()
}

/// Mutual information I(X:Y) = H(X) + H(Y) - H(X,Y) in trits.
///
/// `joint_prob[x][y]` is P(X = x, Y = y).
pub fn ternary_mutual_information(joint_prob: &[[f64; 3]; 3]) -> f64 {
    let mut p_x = [0.0; 3];
    let mut p_y = [0.0; 3];
    for (x, row) in joint_prob.iter().enumerate() {
        for (y, &p) in row.iter().enumerate() {
            p_x[x] += p;
            p_y[y] += p;
        }
    }
    let flat: Vec<f64> = joint_prob.iter().flatten().copied().collect();

    ternary_entropy(&p_x) + ternary_entropy(&p_y) - ternary_entropy(&flat)
}

/// Exploratory qutrit-style encoding of a ternary string.
///
/// Builds a 3ⁿ-dimensional vector, sets entry (v + 1) + 3·i to 1 for the
/// value v at each position i, then L2-normalizes. An empty input yields the
/// one-dimensional zero vector. Fails with [`Error::StateTooLarge`] when 3ⁿ
/// does not fit in `usize`.
pub fn ternary_to_quantum_state(values: &[Ternary]) -> Result<StateVector> {
    let too_large = Error::StateTooLarge { len: values.len() };
    let exp = u32::try_from(values.len()).map_err(|_| too_large.clone())?;
    let dim = 3usize.checked_pow(exp).ok_or(too_large)?;
    let mut state = StateVector::zeros(dim);

    for (i, &value) in values.iter().enumerate() {
        let idx = (i8::from(value) + 1) as usize + 3 * i;
        state[idx] = Complex64::new(1.0, 0.0);
    }

    let norm = state.norm();
    if norm > 0.0 {
        state.unscale_mut(norm);
    }
    Ok(state)
}
