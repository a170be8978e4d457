//! Pokemon entity - the aggregated creature record
//!
//! A `Pokemon` is assembled from two upstream payloads (details + species)
//! and later enriched with its evolution chain. Chain hydration is always a
//! separate step: the members of an evolution chain are plain entities whose
//! own `evolution_chain` stays empty, so resolving one chain never triggers
//! another.

use serde::{Deserialize, Serialize};

use crate::entities::{Generation, PokemonType};
use pokedex_domain::PokemonId;

/// The creature record served to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: PokemonId,
    /// Lowercase slug, e.g. "charmander"
    pub name: String,
    /// Front sprite URL, empty when upstream has none
    pub image: String,
    pub types: Vec<PokemonType>,
    pub generation: Generation,
    pub stats: Vec<StatRecord>,
    /// Upstream URL of the evolution chain this species belongs to
    pub evolution_chain_url: String,
    /// Ordered chain members (including this entity), empty until attached
    pub evolution_chain: Vec<Pokemon>,
}

impl Pokemon {
    /// Attach a resolved evolution chain.
    ///
    /// Chain members are stored without their own chains.
    pub fn with_evolution_chain(mut self, chain: Vec<Pokemon>) -> Self {
        self.evolution_chain = chain
            .into_iter()
            .map(|mut member| {
                member.evolution_chain.clear();
                member
            })
            .collect();
        self
    }
}

/// One base stat of a Pokemon, copied verbatim from upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: StatKind,
}

/// Which stat a [`StatRecord`] measures ("hp", "attack", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatKind {
    pub name: String,
    pub url: String,
}
