use crate::catalog::{ParameterCatalog, ParameterCategory};
use crate::errors::CatalogError;

use super::DomainDefinition;

const TEMPLATE: &str = "{time_of_day} sky with {cloud_type} clouds, {weather}, \
colors of {colors}, {composition} composition, no land, no people.";

pub(super) fn definition() -> Result<DomainDefinition, CatalogError> {
    let catalog = ParameterCatalog::new(
        super::SKY,
        vec![
            ParameterCategory::single(
                "time_of_day",
                &["Sunrise", "Midday", "Golden hour", "Sunset", "Blue hour", "Night"],
            ),
            ParameterCategory::single(
                "cloud_type",
                &["cumulus", "cirrus", "stratus", "altocumulus", "mammatus", "scattered"],
            ),
            ParameterCategory::single(
                "weather",
                &["clear and calm", "after rain", "hazy", "stormy", "windy"],
            ),
            ParameterCategory::multi(
                "colors",
                &[
                    "orange", "pink", "lavender", "deep blue", "turquoise", "crimson",
                    "pale yellow", "gray",
                ],
                2,
            ),
            ParameterCategory::single(
                "composition",
                &["wide panoramic", "vertical", "centered", "minimal"],
            ),
        ],
    )?;
    DomainDefinition::new(catalog, TEMPLATE)
}
