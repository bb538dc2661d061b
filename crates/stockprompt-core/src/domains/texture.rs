use crate::catalog::{ParameterCatalog, ParameterCategory};
use crate::errors::CatalogError;

use super::DomainDefinition;

const TEMPLATE: &str = "Close-up {material} texture with a {finish} finish, \
tinted in {colors}, {lighting} lighting, shot {perspective}, seamless background.";

pub(super) fn definition() -> Result<DomainDefinition, CatalogError> {
    let catalog = ParameterCatalog::new(
        super::TEXTURE,
        vec![
            ParameterCategory::single(
                "material",
                &[
                    "wood", "marble", "concrete", "linen", "leather", "granite", "terrazzo",
                    "paper", "rusted metal", "cork",
                ],
            ),
            ParameterCategory::single(
                "finish",
                &["matte", "glossy", "brushed", "weathered", "polished", "raw"],
            ),
            ParameterCategory::multi(
                "colors",
                &[
                    "ivory", "charcoal", "terracotta", "sage green", "navy", "ochre",
                    "dusty rose", "slate gray", "sand", "burgundy",
                ],
                3,
            ),
            ParameterCategory::single(
                "lighting",
                &["soft diffused", "hard side", "warm golden", "cool overcast", "studio"],
            ),
            ParameterCategory::single(
                "perspective",
                &["top-down", "at a low angle", "macro", "flat lay"],
            ),
        ],
    )?;
    DomainDefinition::new(catalog, TEMPLATE)
}
