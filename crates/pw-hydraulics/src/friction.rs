//! Flow regime classification and Darcy friction factor.

/// Reynolds number above which the flow is treated as fully turbulent.
/// At or below it the laminar line applies; there is no transitional band.
pub const TURBULENT_REYNOLDS: f64 = 4000.0;

/// Regime used to select the friction correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Re == 0, no flow or undefined viscosity. Friction is zero.
    Still,
    /// 0 < Re <= 4000.
    Laminar,
    /// Re > 4000.
    Turbulent,
}

impl FlowRegime {
    pub fn classify(reynolds: f64) -> Self {
        if reynolds > TURBULENT_REYNOLDS {
            FlowRegime::Turbulent
        } else if reynolds > 0.0 {
            FlowRegime::Laminar
        } else {
            FlowRegime::Still
        }
    }
}

/// Reynolds number for pipe flow (ν form).
///
/// A non-positive viscosity marks the fluid data as unusable and yields
/// Re = 0, which downstream reads as "no friction".
pub fn reynolds_number(
    velocity_m_per_s: f64,
    diameter_m: f64,
    kinematic_viscosity_m2_per_s: f64,
) -> f64 {
    if kinematic_viscosity_m2_per_s > 0.0 {
        velocity_m_per_s * diameter_m / kinematic_viscosity_m2_per_s
    } else {
        0.0
    }
}

/// Darcy friction factor from the regime-matched correlation.
///
/// Turbulent flow uses the Swamee-Jain explicit approximation to
/// Colebrook-White; laminar flow uses 64/Re. The factor is returned
/// unclamped.
pub fn friction_factor(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    match FlowRegime::classify(reynolds) {
        FlowRegime::Turbulent => {
            let a = roughness_m / (3.7 * diameter_m);
            let b = 5.74 / reynolds.powf(0.9);
            0.25 / (a + b).log10().powi(2)
        }
        FlowRegime::Laminar => 64.0 / reynolds,
        FlowRegime::Still => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(FlowRegime::classify(0.0), FlowRegime::Still);
        assert_eq!(FlowRegime::classify(-10.0), FlowRegime::Still);
        assert_eq!(FlowRegime::classify(1.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(4000.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(4000.1), FlowRegime::Turbulent);
    }

    #[test]
    fn laminar_line_holds_through_the_boundary() {
        assert_eq!(friction_factor(1000.0, 0.00015, 0.1), 64.0 / 1000.0);
        // Exactly at the threshold the laminar correlation still applies.
        assert_eq!(friction_factor(4000.0, 0.00015, 0.1), 64.0 / 4000.0);
    }

    #[test]
    fn still_flow_has_zero_friction() {
        assert_eq!(friction_factor(0.0, 0.00015, 0.1), 0.0);
    }

    #[test]
    fn turbulent_factor_matches_swamee_jain() {
        let reynolds: f64 = 176_000.0;
        let roughness_m = 0.00015;
        let diameter_m = 0.1;
        let expected = 0.25
            / (roughness_m / (3.7 * diameter_m) + 5.74 / reynolds.powf(0.9))
                .log10()
                .powi(2);
        assert_eq!(friction_factor(reynolds, roughness_m, diameter_m), expected);
        // Sanity band for commercial-steel water service.
        assert!(expected > 0.01 && expected < 0.05);
    }

    #[test]
    fn reynolds_zero_when_viscosity_unusable() {
        assert_eq!(reynolds_number(2.0, 0.1, 0.0), 0.0);
        assert_eq!(reynolds_number(2.0, 0.1, -1e-6), 0.0);
        assert!(reynolds_number(2.0, 0.1, 1.004e-6) > 0.0);
    }

    proptest! {
        #[test]
        fn laminar_product_is_64(reynolds in 1.0f64..4000.0) {
            let f = friction_factor(reynolds, 0.00015, 0.1);
            prop_assert_eq!(f, 64.0 / reynolds);
        }

        #[test]
        fn turbulent_factor_positive_and_finite(
            reynolds in 4001.0f64..1e8,
            rel_roughness in 1e-6f64..0.05,
        ) {
            let diameter_m = 0.1;
            let f = friction_factor(reynolds, rel_roughness * diameter_m, diameter_m);
            prop_assert!(f.is_finite());
            prop_assert!(f > 0.0);
        }

        #[test]
        fn rougher_pipe_has_higher_turbulent_factor(
            reynolds in 4001.0f64..1e8,
            rel_roughness in 1e-5f64..0.05,
        ) {
            let diameter_m = 0.1;
            let rough = friction_factor(reynolds, rel_roughness * diameter_m, diameter_m);
            let smoother = friction_factor(reynolds, 0.5 * rel_roughness * diameter_m, diameter_m);
            prop_assert!(rough > smoother);
        }
    }
}
