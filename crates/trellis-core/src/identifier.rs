//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used to name topology nodes and edges.
//! Identifiers are interned once and compared as symbols afterwards, which keeps
//! the per-node bookkeeping in the layout engines cheap (`Id` is `Copy`).

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning
///
/// Node and edge identifiers are unique free-form strings chosen by the
/// caller. Interning makes them `Copy` and hashable by symbol, so they can
/// be used as map keys throughout the layout pipeline.
///
/// # Examples
///
/// ```
/// use trellis_core::identifier::Id;
///
/// let gateway = Id::new("gateway");
/// let also_gateway: Id = "gateway".into();
///
/// assert_eq!(gateway, also_gateway);
/// assert_eq!(gateway, "gateway");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from `&str`.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Returns the interned string for this identifier.
    pub fn as_string(&self) -> String {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    /// Serializes as the plain interned string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        serializer.serialize_str(str_value)
    }
}

impl<'de> Deserialize<'de> for Id {
    /// Deserializes from a plain string, interning it on the way in.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
