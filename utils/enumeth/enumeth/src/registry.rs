use std::collections::HashMap;

use tracing::debug;

/// The ordered set of constants owned by an [Enumeration](crate::Enumeration).
///
/// Entries keep their declaration order forever. Ordinals and names are
/// positions and keys in this list, so they cannot drift apart.
#[derive(Debug)]
pub struct Registry<E> {
    type_name: &'static str,
    entries: Box<[(&'static str, E)]>,
    by_name: HashMap<&'static str, usize>,
}

impl<E: Copy + Eq> Registry<E> {
    /// Builds the registry of `type_name` from `(name, constant)` pairs in declaration order.
    pub fn new(
        type_name: &'static str,
        entries: impl IntoIterator<Item = (&'static str, E)>,
    ) -> Result<Self, RegistryError> {
        let entries: Box<[(&'static str, E)]> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(RegistryError::Empty { type_name });
        }

        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, &(name, constant)) in entries.iter().enumerate() {
            if by_name.insert(name, index).is_some() {
                return Err(RegistryError::DuplicateName { type_name, name });
            }
            if let Some(&(previous, _)) = entries[..index].iter().find(|(_, c)| *c == constant) {
                return Err(RegistryError::DuplicateConstant {
                    type_name,
                    name,
                    previous,
                });
            }
        }

        debug!(type_name, count = entries.len(), "Registered enumeration");
        Ok(Self {
            type_name,
            entries,
            by_name,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of registered constants, never zero.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Identity search: index of the first entry that is `constant`.
    pub fn position(&self, constant: &E) -> Option<usize> {
        self.entries.iter().position(|(_, c)| c == constant)
    }

    pub fn name_at(&self, ordinal: usize) -> Option<&'static str> {
        self.entries.get(ordinal).map(|&(name, _)| name)
    }

    pub fn constant_at(&self, ordinal: usize) -> Option<E> {
        self.entries.get(ordinal).map(|&(_, constant)| constant)
    }

    /// Exact-match lookup by registration key.
    pub fn get(&self, name: &str) -> Option<E> {
        let ordinal = *self.by_name.get(name)?;
        self.constant_at(ordinal)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, E)> + '_ {
        self.entries.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(name, _)| name)
    }

    /// A fresh copy of the constants, in declaration order.
    pub fn constants(&self) -> Vec<E> {
        self.entries.iter().map(|&(_, constant)| constant).collect()
    }
}

/// Errors returned by [Registry::new] when a definition is not a closed set of unique constants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("[Empty] Enumeration {type_name} has no constants")]
    Empty { type_name: &'static str },

    #[error("[DuplicateName] Enumeration {type_name} registers '{name}' more than once")]
    DuplicateName {
        type_name: &'static str,
        name: &'static str,
    },

    #[error("[DuplicateConstant] Constant {type_name}.{name} is already registered as {type_name}.{previous}")]
    DuplicateConstant {
        type_name: &'static str,
        name: &'static str,
        previous: &'static str,
    },
}
