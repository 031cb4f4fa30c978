use std::fmt;

use crate::error::{FluidError, FluidResult};

/// Working fluids known to the catalog, at their reference conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluidSpecies {
    Water20C,
    Ethanol20C,
    Glycerin20C,
    LightOil,
}

impl FluidSpecies {
    const fn catalog_index(self) -> usize {
        match self {
            FluidSpecies::Water20C => 0,
            FluidSpecies::Ethanol20C => 1,
            FluidSpecies::Glycerin20C => 2,
            FluidSpecies::LightOil => 3,
        }
    }
}

impl fmt::Display for FluidSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(properties(*self).display_name)
    }
}

/// One catalog row: identity plus the two transport properties the
/// head-loss and power formulas consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    pub species: FluidSpecies,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Density ρ (kg/m³).
    pub density_kg_per_m3: f64,
    /// Kinematic viscosity ν (m²/s).
    pub kinematic_viscosity_m2_per_s: f64,
}

impl Fluid {
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.canonical_id.eq_ignore_ascii_case(name)
            || self.display_name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

const FLUID_CATALOG: [Fluid; 4] = [
    Fluid {
        species: FluidSpecies::Water20C,
        canonical_id: "water",
        display_name: "Water (20°C)",
        aliases: &["h2o", "water-20c"],
        density_kg_per_m3: 998.2,
        kinematic_viscosity_m2_per_s: 1.004e-6,
    },
    Fluid {
        species: FluidSpecies::Ethanol20C,
        canonical_id: "ethanol",
        display_name: "Ethanol (20°C)",
        aliases: &["ethyl alcohol", "ethanol-20c"],
        density_kg_per_m3: 789.0,
        kinematic_viscosity_m2_per_s: 1.51e-6,
    },
    Fluid {
        species: FluidSpecies::Glycerin20C,
        canonical_id: "glycerin",
        display_name: "Glycerin (20°C)",
        aliases: &["glycerine", "glycerol"],
        density_kg_per_m3: 1261.0,
        kinematic_viscosity_m2_per_s: 1.49e-3,
    },
    Fluid {
        species: FluidSpecies::LightOil,
        canonical_id: "light-oil",
        display_name: "Light Oil",
        aliases: &["oil"],
        density_kg_per_m3: 880.0,
        kinematic_viscosity_m2_per_s: 1.5e-5,
    },
];

pub fn catalog() -> &'static [Fluid] {
    &FLUID_CATALOG
}

/// Properties for a species. Infallible: every variant has a catalog row.
pub fn properties(species: FluidSpecies) -> &'static Fluid {
    &FLUID_CATALOG[species.catalog_index()]
}

/// Resolve a fluid by canonical id, display name, or alias
/// (case-insensitive). Unknown names fail loudly instead of falling back
/// to a default fluid.
pub fn lookup(name: &str) -> FluidResult<&'static Fluid> {
    FLUID_CATALOG
        .iter()
        .find(|fluid| fluid.matches_name(name))
        .ok_or_else(|| FluidError::UnknownFluid {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for fluid in catalog() {
            assert!(
                seen.insert(fluid.canonical_id),
                "duplicate canonical id: {}",
                fluid.canonical_id
            );
        }
    }

    #[test]
    fn species_index_matches_catalog_order() {
        for (i, fluid) in catalog().iter().enumerate() {
            assert_eq!(fluid.species.catalog_index(), i);
            assert_eq!(properties(fluid.species), fluid);
        }
    }

    #[test]
    fn water_reference_properties() {
        let water = properties(FluidSpecies::Water20C);
        assert_eq!(water.density_kg_per_m3, 998.2);
        assert_eq!(water.kinematic_viscosity_m2_per_s, 1.004e-6);
    }

    #[test]
    fn species_display_is_the_catalog_name() {
        assert_eq!(FluidSpecies::Water20C.to_string(), "Water (20°C)");
        assert_eq!(FluidSpecies::LightOil.to_string(), "Light Oil");
    }

    #[test]
    fn lookup_by_id_display_name_and_alias() {
        assert_eq!(lookup("glycerin").map(|f| f.species), Ok(FluidSpecies::Glycerin20C));
        assert_eq!(lookup("Ethanol (20°C)").map(|f| f.species), Ok(FluidSpecies::Ethanol20C));
        assert_eq!(lookup("glycerol").map(|f| f.species), Ok(FluidSpecies::Glycerin20C));
        assert_eq!(lookup("  h2o  ").map(|f| f.species), Ok(FluidSpecies::Water20C));
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        let err = lookup("mercury").unwrap_err();
        assert_eq!(
            err,
            FluidError::UnknownFluid {
                name: "mercury".into()
            }
        );
    }

    proptest! {
        #[test]
        fn lookup_ignores_ascii_case(flips in proptest::collection::vec(any::<bool>(), 5)) {
            let mixed: String = "water"
                .chars()
                .zip(flips)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(lookup(&mixed).map(|f| f.species), Ok(FluidSpecies::Water20C));
        }
    }
}
