//! Mass-energy-information equivalence.
//!
//! Vopson's principle assigns every stored bit a rest mass
//!   m_bit = 3.19 × 10⁻³⁸ kg
//! which, together with E = mc², Landauer's erasure bound and the
//! holographic (Bekenstein-Hawking) entropy bound, links information content
//! to mass, energy and area.
//!
//! Inputs are not validated: non-positive masses, areas or temperatures
//! propagate through IEEE arithmetic unchanged.

use crate::units::*;

/// Mass equivalent of `bits` of stored information (kg).
pub fn information_mass(bits: f64) -> f64 {
    bits * VOPSON_BIT_MASS
}

/// Minimum energy to erase `bits` at `temperature` (J).
///
///   E = N k_B T ln 2
///
/// [`ROOM_TEMPERATURE`] is the conventional default.
pub fn landauer_energy(bits: f64, temperature: f64) -> f64 {
    bits * thermal_energy(temperature) * LN_2
}

/// m = E / c² (kg)
pub fn mass_from_energy(energy: f64) -> f64 {
    energy / (C * C)
}

/// E = m c² (J)
pub fn energy_from_mass(mass: f64) -> f64 {
    mass * C * C
}

/// Holographic entropy bound S_max = A / (4 l_P²), in units of k_B.
pub fn holographic_entropy_bound(area: f64) -> f64 {
    area / (4.0 * L_PLANCK * L_PLANCK)
}

/// Maximum information per unit area implied by the holographic bound (bits/m²).
pub fn holographic_information_density(area: f64) -> f64 {
    let bits = holographic_entropy_bound(area) / LN_2;
    bits / area
}

/// Bekenstein-Hawking entropy of a Schwarzschild black hole, in units of k_B.
///
///   r_s = 2GM/c²,  A = 4π r_s²,  S = k_B c³ A / (4Għ)
pub fn schwarzschild_information_entropy(mass: f64) -> f64 {
    let r_s = 2.0 * G * mass / (C * C);
    let area = 4.0 * PI * r_s * r_s;
    let entropy = KB * C.powi(3) * area / (4.0 * G * HBAR);
    entropy / KB
}

/// Mass density carried by an information density (bits/m³ → kg/m³).
pub fn information_density_to_mass_density(info_bits_per_m3: f64) -> f64 {
    info_bits_per_m3 * VOPSON_BIT_MASS
}

/// Verlinde's emergent force F = T k_B dS/dx (N), entropy gradient in k_B/m.
pub fn emergent_force_from_entropy_gradient(entropy_gradient: f64, temperature: f64) -> f64 {
    temperature * KB * entropy_gradient
}

/// Mass defect of a binding energy and the number of bits of equal mass.
///
/// Returns `(kg, bits)`.
pub fn mass_defect_information(binding_energy: f64) -> (f64, f64) {
    let mass_defect = mass_from_energy(binding_energy);
    let equivalent_bits = mass_defect / VOPSON_BIT_MASS;
    (mass_defect, equivalent_bits)
}
