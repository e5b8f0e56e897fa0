//! Physical constants in SI units.
//!
//! CODATA 2018 / NIST values, plus the Vopson mass-per-bit constant and the
//! astronomical reference values the formula modules share.

/// Reduced Planck constant (J·s)
pub const HBAR: f64 = 1.054_571_817e-34;

/// Speed of light (m/s)
pub const C: f64 = 299_792_458.0;

/// Newtonian gravitational constant (m³/kg·s²)
pub const G: f64 = 6.674_30e-11;

/// Boltzmann constant (J/K)
pub const KB: f64 = 1.380_649e-23;

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Natural log of 2, converts nats to bits
pub const LN_2: f64 = std::f64::consts::LN_2;

/// Planck length (m)
pub const L_PLANCK: f64 = 1.616_255e-35;

/// Vopson's mass-energy-information constant (kg/bit)
pub const VOPSON_BIT_MASS: f64 = 3.19e-38;

/// Solar mass (kg)
pub const SOLAR_MASS: f64 = 1.989e30;

/// One megaparsec (m), as used for Hubble-constant conversion
pub const MEGAPARSEC: f64 = 3.086e22;

/// One astronomical unit (m)
pub const ASTRONOMICAL_UNIT: f64 = 1.496e11;

/// Reference temperature for Landauer and entropic-force defaults (K)
pub const ROOM_TEMPERATURE: f64 = 300.0;

/// Convert temperature to energy (J)
pub fn thermal_energy(t_kelvin: f64) -> f64 {
    KB * t_kelvin
}

/// Convert energy to temperature (K)
pub fn energy_to_temp(e_joules: f64) -> f64 {
    e_joules / KB
}

/// Unruh temperature seen by an observer with proper acceleration `a` (K).
///
///   T_U = ℏa / (2π k_B c)
pub fn unruh_temperature(acceleration: f64) -> f64 {
    HBAR * acceleration / (2.0 * PI * KB * C)
}

/// Newtonian field strength G·M/r² (m/s²)
pub fn newtonian_acceleration(mass: f64, distance: f64) -> f64 {
    G * mass / (distance * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermal_roundtrip() {
        let t = 300.0;
        assert!((energy_to_temp(thermal_energy(t)) - t).abs() < 1e-9);
    }

    #[test]
    fn unruh_temperature_scales_linearly() {
        let t1 = unruh_temperature(1.0);
        let t2 = unruh_temperature(2.0);
        assert!((t2 / t1 - 2.0).abs() < 1e-12);
        // ~4.05e-21 K per m/s²
        assert!((t1 - 4.05e-21).abs() < 1e-22);
    }

    #[test]
    fn surface_gravity_of_earth() {
        let g = newtonian_acceleration(5.972e24, 6.371e6);
        assert!((g - 9.82).abs() < 0.01, "got {g}");
    }
}

// ─── Kani formal verification harnesses ─────────────────────────────────────
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove thermal_energy never panics for any f64 input.
    #[kani::proof]
    fn thermal_energy_no_panic() {
        let t: f64 = kani::any();
        let _ = thermal_energy(t);
    }

    /// Prove unruh_temperature never panics for any f64 input.
    #[kani::proof]
    fn unruh_temperature_no_panic() {
        let a: f64 = kani::any();
        let _ = unruh_temperature(a);
    }

    /// Prove the Unruh temperature is finite and non-negative for bounded positive accelerations.
    #[kani::proof]
    fn unruh_temperature_positive() {
        let a: f64 = kani::any();
        kani::assume(a.is_finite());
        kani::assume(a >= 0.0);
        kani::assume(a < 1e30);
        let t = unruh_temperature(a);
        assert!(t.is_finite());
        assert!(t >= 0.0);
    }

    /// Prove all physical constants are positive and finite.
    #[kani::proof]
    fn constants_are_valid() {
        assert!(HBAR > 0.0 && HBAR.is_finite());
        assert!(C > 0.0 && C.is_finite());
        assert!(G > 0.0 && G.is_finite());
        assert!(KB > 0.0 && KB.is_finite());
        assert!(L_PLANCK > 0.0 && L_PLANCK.is_finite());
        assert!(VOPSON_BIT_MASS > 0.0 && VOPSON_BIT_MASS.is_finite());
    }
}
