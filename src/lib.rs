//! # info-mass-gravity
//!
//! Closed-form evaluators connecting information, mass and gravity:
//!
//! ```text
//! Quantum information (von Neumann entropy, partial trace, fidelity)
//!   ↓ bits
//! Mass-energy-information equivalence (Vopson, Landauer, holographic bound)
//!   ↓ mass / entropy
//! Entropic gravity (Verlinde screens, Unruh temperature, Bekenstein bound)
//!
//! Ternary logic + base-3 information      E8 root system + Cartan matrix
//! Trinary repetition code
//! ```
//!
//! Every function is a pure evaluation over `f64` scalars or small dense
//! arrays. Nothing is cached or shared between calls, so any call can run on
//! any thread. Physical constants live once in [`units`].
//!
//! ## Usage
//!
//! ```no_run
//! use info_mass_gravity::prelude::*;
//!
//! let bell = create_bell_state(BellState::PhiPlus);
//! let s_ent = entanglement_entropy(&bell, 2, 2).unwrap();
//! println!("Entanglement entropy: {s_ent:.6} bits");
//!
//! let force = entropic_force(SOLAR_MASS, 5.972e24, ASTRONOMICAL_UNIT, None);
//! println!("Earth-Sun force: {force:e} N");
//! ```
//!
//! ## References
//!
//! - Verlinde (2011), "On the origin of gravity and the laws of Newton"
//! - Vopson (2019), "The mass-energy-information equivalence principle",
//!   AIP Advances 9, 095206
//! - Landauer (1961), "Irreversibility and heat generation in the computing process"
//! - Bekenstein (1981), "Universal upper bound on the entropy-to-energy ratio"
//! - Kleene (1938), "On notation for ordinal numbers" (three-valued logic)
//! - Conway & Sloane, "Sphere Packings, Lattices and Groups"

pub mod units;
pub mod error;
pub mod quantum_info;
pub mod mass_energy;
pub mod entropic_gravity;
pub mod ternary;
pub mod e8;
pub mod qec;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::units::*;
    pub use crate::error::Error;
    pub use crate::quantum_info::*;
    pub use crate::mass_energy::*;
    pub use crate::entropic_gravity::*;
    pub use crate::ternary::*;
    pub use crate::e8::*;
    pub use crate::qec::*;
    pub use crate::sweep::*;
}
