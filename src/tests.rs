// Cross-module properties of the formula surface.

#[cfg(test)]
mod tests {
    use crate::e8::*;
    use crate::entropic_gravity::*;
    use crate::mass_energy::*;
    use crate::qec::*;
    use crate::quantum_info::*;
    use crate::ternary::*;
    use crate::units::*;
    use proptest::prelude::*;

    #[test]
    fn bell_state_pure_but_maximally_entangled() {
        let bell = create_bell_state(BellState::PhiPlus);
        let joint = von_neumann_entropy(&bell).unwrap();
        let reduced = entanglement_entropy(&bell, 2, 2).unwrap();
        assert!(joint.abs() < 1e-9);
        assert!((reduced - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entanglement_entropy_as_information_mass() {
        let bell = create_bell_state(BellState::PsiMinus);
        let bits = entanglement_entropy(&bell, 2, 2).unwrap();
        assert!((information_mass(bits) - VOPSON_BIT_MASS).abs() < 1e-46);
    }

    #[test]
    fn landauer_energy_mass_is_tiny() {
        let energy = landauer_energy(1000.0, ROOM_TEMPERATURE);
        let mass = mass_from_energy(energy);
        assert!(mass > 0.0 && mass < 1e-34, "got {mass:e}");
    }

    #[test]
    fn black_hole_entropy_from_gravity_radius() {
        // S = π r_s² c³ / (Għ) with r_s from the gravity module
        let r_s = schwarzschild_radius(SOLAR_MASS);
        let expected = PI * r_s * r_s * C.powi(3) / (G * HBAR);
        let s = schwarzschild_information_entropy(SOLAR_MASS);
        assert!((s - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn quick_demo_values() {
        assert!((information_mass(1e20) - 3.19e-18).abs() < 1e-30);
        assert_eq!(ternary_and(Ternary::True, Ternary::Unknown), Ternary::Unknown);
        assert_eq!(e8_root_system().len(), 240);
        let force = entropic_force(SOLAR_MASS, 5.972e24, ASTRONOMICAL_UNIT, None);
        assert!((force - 3.542e22).abs() / 3.542e22 < 1e-3);
    }

    #[test]
    fn ternary_state_is_a_unit_vector() {
        let state = ternary_to_quantum_state(&[Ternary::Unknown, Ternary::True, Ternary::False]).unwrap();
        assert_eq!(state.len(), 27);
        assert!((state.norm() - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn bekenstein_bound_monotone_in_energy(e in 1.0f64..1e30, k in 1.0001f64..1e3, r in 1e-3f64..1e12) {
            prop_assert!(bekenstein_bound(e * k, r) > bekenstein_bound(e, r));
        }

        #[test]
        fn bekenstein_bound_monotone_in_radius(e in 1.0f64..1e30, r in 1e-3f64..1e12, k in 1.0001f64..1e3) {
            prop_assert!(bekenstein_bound(e, r * k) > bekenstein_bound(e, r));
        }

        #[test]
        fn holographic_bound_monotone_in_area(a in 1e-60f64..1e40, k in 1.0001f64..1e3) {
            prop_assert!(holographic_entropy_bound(a * k) > holographic_entropy_bound(a));
        }

        #[test]
        fn entropic_force_is_newton(m1 in 1.0f64..1e31, m2 in 1.0f64..1e25, r in 1.0f64..1e13) {
            let newton = G * m1 * m2 / (r * r);
            let f = entropic_force(m1, m2, r, None);
            prop_assert!((f - newton).abs() <= 1e-12 * newton);
        }

        #[test]
        fn repetition_code_roundtrip(v in 0u8..3) {
            prop_assert_eq!(decode(&encode(v)), v);
        }

        #[test]
        fn repetition_code_corrects_one_error(v in 0u8..3, pos in 0usize..3, e in 0u8..3) {
            prop_assert_eq!(decode(&corrupt(&encode(v), pos, e)), v);
        }

        #[test]
        fn ternary_entropy_bounded(a in 0.0f64..1.0, b in 0.0f64..1.0, c in 0.0f64..1.0) {
            let total = a + b + c;
            prop_assume!(total > 1e-9);
            let h = ternary_entropy(&[a / total, b / total, c / total]);
            prop_assert!(h >= -1e-12 && h <= 1.0 + 1e-12);
        }

        #[test]
        fn spacetime_dimension_clamped(bits in -1e40f64..1e300, volume in 1e-10f64..1e10) {
            let d = emergent_spacetime_dimension(bits, volume);
            prop_assert!((1.0..=11.0).contains(&d));
        }
    }
}
