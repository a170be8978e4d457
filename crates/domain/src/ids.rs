use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub fn new(value: u32) -> Self {
                Self(value)
            }

            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Upstream-assigned numeric identifiers
define_id!(PokemonId);
define_id!(TypeId);
define_id!(GenerationId);
define_id!(EvolutionChainId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_numeric_value() {
        let mut ids = vec![PokemonId::new(25), PokemonId::new(4), PokemonId::new(133)];
        ids.sort();
        assert_eq!(ids, vec![PokemonId::new(4), PokemonId::new(25), PokemonId::new(133)]);
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&GenerationId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
