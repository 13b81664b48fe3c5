//! Entity registry for the undeclared JMdict shorthand entities.
//!
//! JMdict writes classification codes as general entity references such as
//! `&n;` or `&uk;`. The distributed DTD declares them with long English
//! descriptions, but a strict XML tokenizer that does not expand the internal
//! subset has no idea what they are. The registry supplies the table instead:
//! every code of the five vocabularies maps to itself, so `&v5k;` decodes to
//! the literal `v5k` and is then validated like any other token.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;

use super::types::vocabulary::{Dialect, Field, Misc, Orthography, PartOfSpeech, Vocabulary};

static GLOBAL: OnceLock<EntityRegistry> = OnceLock::new();

/// Immutable mapping from entity name to replacement text.
///
/// Built once and shared by reference; it has no interior mutability, so
/// concurrent decodes can use the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRegistry {
    entities: HashMap<String, String>,
}

impl EntityRegistry {
    /// Builds the registry over every code of the five vocabularies.
    pub fn build() -> Self {
        let mut registry = Self {
            entities: HashMap::new(),
        };
        registry.register::<PartOfSpeech>();
        registry.register::<Field>();
        registry.register::<Misc>();
        registry.register::<Orthography>();
        registry.register::<Dialect>();
        debug!("Entity registry built with {} entities", registry.len());
        registry
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static EntityRegistry {
        GLOBAL.get_or_init(EntityRegistry::build)
    }

    /// Adds an extra entity on top of the vocabulary codes.
    ///
    /// Only affects text substitution. A code that is not in its vocabulary
    /// is still rejected by the decoder even if it resolves here.
    pub fn with_entity(mut self, name: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.entities.insert(name.into(), replacement.into());
        self
    }

    /// Looks up the replacement text for `name` (without `&` and `;`).
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entities.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entities.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.entities
    }

    fn register<V: Vocabulary>(&mut self) {
        for &value in V::ALL {
            let code = value.code();
            self.entities.insert(code.to_string(), code.to_string());
        }
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::build()
    }
}
