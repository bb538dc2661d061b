//! Built-in domain catalogs. Each domain is isolated: its own categories,
//! template, and (at runtime) its own history and feedback gate.

mod abstract_wave;
mod gradient_flow;
mod sky;
mod texture;
mod white_frame;

use crate::catalog::ParameterCatalog;
use crate::errors::CatalogError;
use crate::models::TupleValues;
use crate::template::PromptTemplate;

pub const TEXTURE: &str = "texture";
pub const ABSTRACT_WAVE: &str = "abstract_wave";
pub const SKY: &str = "sky";
pub const GRADIENT_FLOW: &str = "gradient_flow";
pub const WHITE_FRAME: &str = "white_frame";

/// Every built-in domain name.
pub const ALL: [&str; 5] = [TEXTURE, ABSTRACT_WAVE, SKY, GRADIENT_FLOW, WHITE_FRAME];

/// A catalog paired with the sentence template that renders its tuples.
#[derive(Debug, Clone)]
pub struct DomainDefinition {
    catalog: ParameterCatalog,
    template: PromptTemplate,
}

impl DomainDefinition {
    pub fn new(catalog: ParameterCatalog, template: &str) -> Result<Self, CatalogError> {
        let template = PromptTemplate::for_catalog(template, &catalog)?;
        Ok(Self { catalog, template })
    }

    pub fn name(&self) -> &str {
        self.catalog.domain()
    }

    pub fn catalog(&self) -> &ParameterCatalog {
        &self.catalog
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub fn render(&self, values: &TupleValues) -> String {
        self.template.render(values)
    }
}

/// Look up a built-in domain by name.
pub fn by_name(name: &str) -> Option<Result<DomainDefinition, CatalogError>> {
    match name {
        TEXTURE => Some(texture::definition()),
        ABSTRACT_WAVE => Some(abstract_wave::definition()),
        SKY => Some(sky::definition()),
        GRADIENT_FLOW => Some(gradient_flow::definition()),
        WHITE_FRAME => Some(white_frame::definition()),
        _ => None,
    }
}

/// All built-in domains, in `ALL` order.
pub fn all() -> Result<Vec<DomainDefinition>, CatalogError> {
    vec![
        texture::definition(),
        abstract_wave::definition(),
        sky::definition(),
        gradient_flow::definition(),
        white_frame::definition(),
    ]
    .into_iter()
    .collect()
}
