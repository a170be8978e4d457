//! Elemental type entity (fire, water, ...)

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::resource::ResourceRef;
use pokedex_domain::TypeId;

/// An elemental type, identified by the id in its upstream URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub id: TypeId,
    pub name: String,
    pub url: String,
}

impl PokemonType {
    /// Build a type from an upstream `{name, url}` reference.
    pub fn from_ref(reference: &ResourceRef) -> Result<Self, DomainError> {
        let id = reference.require_id("type")?;
        Ok(Self {
            id: TypeId::new(id),
            name: reference.name.clone(),
            url: reference.url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ref_extracts_id() {
        let reference = ResourceRef::new("grass", "https://pokeapi.co/api/v2/type/12/");
        let ty = PokemonType::from_ref(&reference).unwrap();
        assert_eq!(ty.id, TypeId::new(12));
        assert_eq!(ty.name, "grass");
    }

    #[test]
    fn from_ref_rejects_url_without_id() {
        let reference = ResourceRef::new("grass", "https://pokeapi.co/api/v2/type/");
        assert!(matches!(
            PokemonType::from_ref(&reference),
            Err(DomainError::MalformedReference { kind: "type", .. })
        ));
    }
}
