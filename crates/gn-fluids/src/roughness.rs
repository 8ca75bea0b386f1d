//! Absolute roughness of common gas pipe materials.
//!
//! Values are typical new-pipe figures in metres.

use gn_core::units::{Length, m};

use crate::error::{FluidError, FluidResult};

#[derive(Debug)]
pub struct Material {
    pub code: &'static str,
    pub aliases: &'static [&'static str],
    pub roughness_m: f64,
}

const MATERIALS: &[Material] = &[
    Material {
        code: "steel",
        aliases: &["commercial steel", "carbon steel"],
        roughness_m: 4.5e-5,
    },
    Material {
        code: "galvanized steel",
        aliases: &["galvanized"],
        roughness_m: 1.5e-4,
    },
    Material {
        code: "cast iron",
        aliases: &["iron"],
        roughness_m: 2.6e-4,
    },
    Material {
        code: "ductile iron",
        aliases: &[],
        roughness_m: 1.2e-4,
    },
    Material {
        code: "PE",
        aliases: &["polyethylene", "HDPE"],
        roughness_m: 7.0e-6,
    },
    Material {
        code: "PVC",
        aliases: &["plastic"],
        roughness_m: 1.5e-6,
    },
    Material {
        code: "copper",
        aliases: &["drawn tubing"],
        roughness_m: 1.5e-6,
    },
];

pub fn materials() -> &'static [Material] {
    MATERIALS
}

pub fn find_material(name: &str) -> Option<&'static Material> {
    let name = name.trim();
    MATERIALS.iter().find(|m| {
        m.code.eq_ignore_ascii_case(name) || m.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    })
}

/// Absolute roughness of a material, case-insensitive.
pub fn roughness(material: &str) -> FluidResult<Length> {
    find_material(material)
        .map(|mat| m(mat.roughness_m))
        .ok_or_else(|| FluidError::UnknownMaterial {
            material: material.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_aliases() {
        assert_eq!(roughness("steel").unwrap().value, 4.5e-5);
        assert_eq!(roughness("Steel").unwrap().value, 4.5e-5);
        assert_eq!(roughness(" polyethylene ").unwrap().value, 7.0e-6);
        assert_eq!(roughness("pe").unwrap().value, 7.0e-6);
    }

    #[test]
    fn unknown_material_is_an_error() {
        assert_eq!(
            roughness("bamboo"),
            Err(FluidError::UnknownMaterial {
                material: "bamboo".into()
            })
        );
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in MATERIALS.iter().enumerate() {
            for b in &MATERIALS[i + 1..] {
                assert!(!a.code.eq_ignore_ascii_case(b.code));
            }
        }
    }
}
