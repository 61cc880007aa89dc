#![doc = include_str!("../README.md")]

/// Attribute for fieldless enums, to register their variants as a closed, ordered
/// [Enumeration].
///
/// The variants must derive `Clone, Copy, PartialEq, Eq`. The macro implements
/// [NamedType], [Enumeration], `PartialOrd`, `Ord` (declaration order), `Display` (name)
/// and `FromStr` (exact name lookup).
///
/// Deriving or implementing `PartialOrd`/`Ord`, `Display` or `FromStr` by hand conflicts
/// with the generated impls: opt out with `skip_ord`, `skip_display` or `skip_from_str`.
///
/// Variants gated by `#[cfg(..)]` are only registered when compiled in.
///
/// Example:
///
/// **Declaration order**
/// ```
/// # use enumeth::enumeration;
/// # use enumeth::Enumeration as _;
/// # use enumeth::NamedType as _;
/// #[enumeration]
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
/// assert_eq!("Suit", Suit::type_name());
/// assert_eq!(2, Suit::Hearts.ordinal());
/// assert_eq!("Spades", Suit::Spades.name());
/// assert!(Suit::Clubs < Suit::Spades);
/// assert_eq!(Suit::Diamonds, "Diamonds".parse::<Suit>().unwrap());
/// ```
///
/// **Renamed constants**
/// ```
/// # use enumeth::enumeration;
/// # use enumeth::Enumeration as _;
/// #[enumeration(rename_all = "SCREAMING_SNAKE_CASE")]
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Status {
///     InProgress,
///     #[enumeration(rename = "OK")]
///     Done,
/// }
/// assert_eq!("IN_PROGRESS", Status::InProgress.name());
/// assert_eq!(Status::Done, Status::value_of("OK").unwrap());
/// assert!(Status::value_of("Done").is_err());
/// ```
///
/// **User-provided std traits**
/// ```
/// # use enumeth::enumeration;
/// # use enumeth::Enumeration as _;
/// #[enumeration(skip_display)]
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Planet {
///     Mercury,
///     Venus,
/// }
/// impl std::fmt::Display for Planet {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "planet #{}", self.ordinal() + 1)
///     }
/// }
/// assert_eq!("planet #2", Planet::Venus.to_string());
/// assert_eq!("Venus", Planet::Venus.name());
/// assert!(Planet::Mercury < Planet::Venus);
/// ```
pub use enumeth_macro::enumeration;

mod enumerable;
mod registry;

pub use self::enumerable::Enumeration;
pub use self::enumerable::InvariantViolation;
pub use self::enumerable::ValueOfError;
pub use self::registry::Registry;
pub use self::registry::RegistryError;

/// Trait implemented by [enumeration] macro to get the name of the enumeration type.
pub trait NamedType {
    fn type_name() -> &'static str;
}

/// Looks up the constant of `E` registered under `name`, see [Enumeration::value_of].
///
/// Owned names are passed as `name.as_str()` or `name.as_deref()`.
pub fn value_of<'a, E: Enumeration>(name: impl Into<Option<&'a str>>) -> Result<E, ValueOfError> {
    E::value_of(name)
}

/// All constants of `E` in declaration order, see [Enumeration::values].
pub fn values<E: Enumeration>() -> Vec<E> {
    E::values()
}
