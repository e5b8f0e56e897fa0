//! Swept-input profiles.
//!
//! Evaluates a formula over a grid of inputs and returns paired `(x, y)`
//! columns ready for plotting or tabulation. With the `parallel` feature the
//! grid is evaluated with rayon; output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::entropic_gravity::{entropic_force, holographic_screen_entropy};
use crate::mass_energy::information_mass;

/// Points per profile.
pub const PROFILE_POINTS: usize = 100;

/// A sampled curve y = f(x).
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Profile {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` values from 10^start_exp to 10^stop_exp, evenly spaced in log10.
pub fn logspace(start_exp: f64, stop_exp: f64, n: usize) -> Vec<f64> {
    linspace(start_exp, stop_exp, n)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect()
}

/// Evaluate `f` at every point of `xs`.
pub fn evaluate<F>(xs: Vec<f64>, f: F) -> Profile
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    tracing::debug!(points = xs.len(), "evaluating profile");

    #[cfg(feature = "parallel")]
    let ys = xs.par_iter().map(|&x| f(x)).collect();
    #[cfg(not(feature = "parallel"))]
    let ys = xs.iter().map(|&x| f(x)).collect();

    Profile { xs, ys }
}

/// Vopson mass of 10¹⁰ .. `max_bits` bits.
pub fn information_mass_profile(max_bits: f64) -> Profile {
    evaluate(logspace(10.0, max_bits.log10(), PROFILE_POINTS), information_mass)
}

/// Entropic force on a 1 kg test mass from `mass`, for distances 10⁸ .. `max_radius` m.
pub fn entropic_force_profile(mass: f64, max_radius: f64) -> Profile {
    evaluate(logspace(8.0, max_radius.log10(), PROFILE_POINTS), |r| {
        entropic_force(mass, 1.0, r, None)
    })
}

/// Holographic screen entropy around `mass` for radii 10⁸ .. 10¹⁵ m.
pub fn holographic_screen_entropy_profile(mass: f64) -> Profile {
    evaluate(logspace(8.0, 15.0, PROFILE_POINTS), |r| {
        holographic_screen_entropy(r, mass)
    })
}
