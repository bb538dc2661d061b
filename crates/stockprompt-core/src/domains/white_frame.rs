use crate::catalog::{ParameterCatalog, ParameterCategory};
use crate::errors::CatalogError;

use super::DomainDefinition;

const TEMPLATE: &str = "Blank white {frame_style} frame mockup on a {surface}, \
styled with {props}, {shadow} shadows, {orientation} orientation, copy space.";

pub(super) fn definition() -> Result<DomainDefinition, CatalogError> {
    let catalog = ParameterCatalog::new(
        super::WHITE_FRAME,
        vec![
            ParameterCategory::single(
                "frame_style",
                &["thin wooden", "black metal", "oak", "gallery", "floating", "ornate"],
            ),
            ParameterCategory::single(
                "surface",
                &["linen wall", "concrete wall", "wooden shelf", "marble table", "plaster wall"],
            ),
            ParameterCategory::multi(
                "props",
                &[
                    "dried flowers", "a ceramic vase", "books", "a candle", "eucalyptus",
                    "a rattan lamp", "a coffee cup",
                ],
                2,
            ),
            ParameterCategory::single("shadow", &["soft palm leaf", "window light", "no", "gentle"]),
            ParameterCategory::single("orientation", &["portrait", "landscape", "square"]),
        ],
    )?;
    DomainDefinition::new(catalog, TEMPLATE)
}
