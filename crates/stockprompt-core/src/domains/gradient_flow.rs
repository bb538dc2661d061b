use crate::catalog::{ParameterCatalog, ParameterCategory};
use crate::errors::CatalogError;

use super::DomainDefinition;

const TEMPLATE: &str = "Smooth {flow_shape} gradient flowing from {colors}, \
{blend} blending with {grain} grain, modern abstract background.";

pub(super) fn definition() -> Result<DomainDefinition, CatalogError> {
    let catalog = ParameterCatalog::new(
        super::GRADIENT_FLOW,
        vec![
            ParameterCategory::single(
                "flow_shape",
                &["radial", "linear", "mesh", "organic blob", "conic", "wavy"],
            ),
            ParameterCategory::multi(
                "colors",
                &[
                    "sunset orange", "hot pink", "lilac", "aqua", "lime", "cobalt",
                    "cream", "plum", "tangerine", "emerald",
                ],
                3,
            ),
            ParameterCategory::single("blend", &["soft", "vivid", "muted", "dreamy"]),
            ParameterCategory::single("grain", &["no", "fine", "heavy film", "subtle noise"]),
        ],
    )?;
    DomainDefinition::new(catalog, TEMPLATE)
}
