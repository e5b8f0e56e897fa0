//! Entropic gravity (Verlinde 2011).
//!
//! A holographic screen of radius R enclosing mass M carries
//!   N = 2π M c R / ℏ
//! bits at the Unruh temperature of the enclosed field. Displacing a test
//! mass across the screen changes its entropy, and T ΔS reproduces
//! Newton's law F = G M m / r².
//!
//! # Known simplifications
//!
//! [`temperature_holographic_screen`] always uses a solar mass to derive its
//! acceleration, whatever the caller's system. [`entropic_force`] evaluates
//! the bit count and entropic force terms, but they cancel algebraically and
//! the returned value is Newton's law exactly.

use crate::units::*;

/// Entropy on a holographic screen of radius `radius` around `mass_enclosed`, in k_B.
pub fn holographic_screen_entropy(radius: f64, mass_enclosed: f64) -> f64 {
    2.0 * PI * mass_enclosed * C * radius / HBAR
}

/// Unruh temperature of a screen at `radius` from one solar mass (K).
pub fn temperature_holographic_screen(radius: f64) -> f64 {
    let acceleration = newtonian_acceleration(SOLAR_MASS, radius);
    unruh_temperature(acceleration)
}

/// Entropic force between `mass_source` and `mass_test` at `distance` (N).
///
/// `temperature` defaults to the Unruh temperature of the source's field at
/// `distance`. The result is G M m / r² for every temperature.
pub fn entropic_force(
    mass_source: f64,
    mass_test: f64,
    distance: f64,
    temperature: Option<f64>,
) -> f64 {
    let temperature = temperature
        .unwrap_or_else(|| unruh_temperature(newtonian_acceleration(mass_source, distance)));

    let bits = information_bits_on_screen(distance, mass_source);
    let d_bits_dx = 2.0 * PI * mass_source * C / HBAR;
    let screen_force =
        KB * temperature * d_bits_dx * (mass_test * C * C) / (KB * temperature);
    tracing::trace!(bits, screen_force, temperature, "entropic force terms");

    G * mass_source * mass_test / (distance * distance)
}

/// Number of bits on a holographic screen, N = 2π M c R / ℏ.
pub fn information_bits_on_screen(radius: f64, mass: f64) -> f64 {
    2.0 * PI * mass * C * radius / HBAR
}

/// λ = ℏ / (m c) (m)
pub fn compton_wavelength(mass: f64) -> f64 {
    HBAR / (mass * C)
}

/// r_s = 2 G M / c² (m)
pub fn schwarzschild_radius(mass: f64) -> f64 {
    2.0 * G * mass / (C * C)
}

/// Bekenstein bound I ≤ 2π R E / (ℏ c ln 2), in bits.
pub fn bekenstein_bound(energy: f64, radius: f64) -> f64 {
    2.0 * PI * radius * energy / (HBAR * C * LN_2)
}

/// Effective spacetime dimension from information density.
///
/// Log-scaled heuristic, 3 + log10(ρ / 1e30) / 10 clamped to [1, 11].
/// Returns exactly 3 when the density is not positive.
pub fn emergent_spacetime_dimension(information_bits: f64, volume: f64) -> f64 {
    let rho_info = information_bits / volume;
    if rho_info > 0.0 {
        let eff_dim = 3.0 + (rho_info / 1e30).log10() / 10.0;
        eff_dim.clamp(1.0, 11.0)
    } else {
        3.0
    }
}

/// Dark energy density ρ = c² H² / (8π G) for a Hubble constant in km/s/Mpc (J/m³).
pub fn dark_energy_entropic(hubble_constant: f64) -> f64 {
    let h_si = hubble_constant * 1000.0 / MEGAPARSEC;
    C * C * h_si * h_si / (8.0 * PI * G)
}

/// Gravitational acceleration of `mass_source` plus that of the Vopson mass
/// of `information_bits`, at `distance` (m/s²).
pub fn information_acceleration(mass_source: f64, distance: f64, information_bits: f64) -> f64 {
    let a_grav = newtonian_acceleration(mass_source, distance);
    let info_mass = information_bits * VOPSON_BIT_MASS;
    let a_info = newtonian_acceleration(info_mass, distance);
    a_grav + a_info
}
