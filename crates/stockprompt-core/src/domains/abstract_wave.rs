use crate::catalog::{ParameterCatalog, ParameterCategory};
use crate::errors::CatalogError;

use super::DomainDefinition;

const TEMPLATE: &str = "Abstract {wave_style} waves flowing {motion} across a {background} \
background, blending {colors}, {surface} surface, high resolution wallpaper.";

pub(super) fn definition() -> Result<DomainDefinition, CatalogError> {
    let catalog = ParameterCatalog::new(
        super::ABSTRACT_WAVE,
        vec![
            ParameterCategory::single(
                "wave_style",
                &["silky", "liquid", "layered paper", "neon line", "ribbon", "fluid glass"],
            ),
            ParameterCategory::single(
                "motion",
                &["diagonally", "horizontally", "in a spiral", "from the corner", "gently upward"],
            ),
            ParameterCategory::single(
                "background",
                &["dark", "pastel", "white", "deep blue", "gradient"],
            ),
            ParameterCategory::multi(
                "colors",
                &[
                    "violet", "teal", "coral", "electric blue", "magenta", "gold",
                    "mint", "peach", "indigo",
                ],
                3,
            ),
            ParameterCategory::single(
                "surface",
                &["glossy", "satin", "holographic", "grainy"],
            ),
        ],
    )?;
    DomainDefinition::new(catalog, TEMPLATE)
}
