use tracing::debug;
use tracing::warn;

use crate::Registry;

/// A closed, ordered set of named constants.
///
/// Implementors only provide [Enumeration::registry]. Ordinals, names, ordering and
/// lookups are derived from it, the same way for every enumeration.
///
/// Equality must be identity: two values are equal iff they are the same constant.
/// This is what `#[derive(PartialEq, Eq)]` gives on a fieldless enum.
pub trait Enumeration: Copy + Eq + 'static {
    /// The registry of constants, in declaration order.
    fn registry() -> &'static Registry<Self>;

    fn try_ordinal(&self) -> Result<usize, InvariantViolation> {
        let registry = Self::registry();
        registry.position(self).ok_or_else(|| {
            let type_name = registry.type_name();
            warn!(type_name, "Constant is missing from its own registry");
            InvariantViolation { type_name }
        })
    }

    /// Zero-based position in declaration order.
    ///
    /// Panics if the constant escaped its registry, see [Enumeration::try_ordinal].
    fn ordinal(&self) -> usize {
        self.try_ordinal().unwrap_or_else(|error| panic!("{error}"))
    }

    fn try_name(&self) -> Result<&'static str, InvariantViolation> {
        let registry = Self::registry();
        let ordinal = self.try_ordinal()?;
        registry.name_at(ordinal).ok_or(InvariantViolation {
            type_name: registry.type_name(),
        })
    }

    /// The key this constant was registered under.
    ///
    /// Panics if the constant escaped its registry, see [Enumeration::try_name].
    fn name(&self) -> &'static str {
        self.try_name().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Same as [Enumeration::name], for call sites that want an owned string.
    fn to_name_string(&self) -> String {
        self.name().to_owned()
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// `ordinal(self) - ordinal(other)`.
    fn compare_to(&self, other: &Self) -> isize {
        self.ordinal() as isize - other.ordinal() as isize
    }

    /// Looks up the constant registered under exactly `name`.
    ///
    /// `None` stands for a missing name and fails with [ValueOfError::NullName].
    ///
    /// Accepts `&str` or `Option<&str>`: pass a `String` as `name.as_str()`,
    /// and an `Option<String>` as `name.as_deref()`.
    fn value_of<'a>(name: impl Into<Option<&'a str>>) -> Result<Self, ValueOfError> {
        let Some(name) = name.into() else {
            return Err(ValueOfError::NullName);
        };
        let registry = Self::registry();
        registry.get(name).ok_or_else(|| {
            let type_name = registry.type_name();
            debug!(type_name, name, "No enum constant");
            ValueOfError::NoSuchConstant {
                type_name,
                name: name.to_owned(),
            }
        })
    }

    /// All constants in declaration order, as a fresh [Vec] on each call.
    fn values() -> Vec<Self> {
        Self::registry().constants()
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::registry().constant_at(ordinal)
    }

    fn count() -> usize {
        Self::registry().count()
    }
}

/// Errors returned by [Enumeration::value_of].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueOfError {
    #[error("[NullName] Name is null")]
    NullName,

    #[error("[NoSuchConstant] No enum constant {type_name}.{name}")]
    NoSuchConstant {
        type_name: &'static str,
        name: String,
    },
}

/// A constant that is not part of its own enumeration's registry.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("[InvariantViolation] Constant is not registered in enumeration {type_name}")]
pub struct InvariantViolation {
    pub type_name: &'static str,
}
