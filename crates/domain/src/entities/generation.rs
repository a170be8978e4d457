//! Generation entity - the game release a species was introduced in

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::resource::ResourceRef;
use pokedex_domain::GenerationId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub id: GenerationId,
    pub name: String,
    pub url: String,
}

impl Generation {
    /// Build a generation from an upstream `{name, url}` reference.
    pub fn from_ref(reference: &ResourceRef) -> Result<Self, DomainError> {
        let id = reference.require_id("generation")?;
        Ok(Self {
            id: GenerationId::new(id),
            name: reference.name.clone(),
            url: reference.url.clone(),
        })
    }
}
