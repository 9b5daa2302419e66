//! Enumerated pair registries.
//!
//! A closed set of variants, each carrying a symbolic name and a valid value
//! identifier issued by the backing system. Identifiers may be extended
//! outside this crate, so reverse lookups report absence with `None` rather
//! than failing.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::lookup::{check_ids, normalize_label};

/// A typed closed set of `(symbol, id)` variants.
pub trait EnumeratedPair: Copy + Sized + 'static {
    /// Registry name, e.g. `"Address Contact Type"`.
    const REGISTRY: &'static str;

    /// Every variant in declaration order.
    fn all() -> &'static [Self];

    fn id(self) -> i64;

    fn symbol(self) -> &'static str;

    /// Variant carrying `id`, or `None` for any other integer.
    fn resolve_by_id(id: i64) -> Option<Self> {
        Self::all().iter().copied().find(|variant| variant.id() == id)
    }

    /// Variant named `symbol`, ignoring case and surrounding whitespace.
    fn resolve_by_symbol(symbol: &str) -> Option<Self> {
        let key = normalize_label(symbol);
        Self::all()
            .iter()
            .copied()
            .find(|variant| normalize_label(variant.symbol()) == key)
    }

    /// Owned form for the catalog and valid value overlays.
    fn table() -> PairTable {
        PairTable {
            name: Self::REGISTRY.to_string(),
            entries: Self::all()
                .iter()
                .map(|variant| PairEntry {
                    symbol: variant.symbol().to_string(),
                    id: variant.id(),
                })
                .collect(),
        }
    }
}

/// Declares a `Copy` enum implementing [`EnumeratedPair`], `Display` and `FromStr`.
///
/// ```ignore
/// enumerated_pair! {
///     pub enum AddressContactType as "Address Contact Type" {
///         Work = ("WORK", 13056),
///         Home = ("HOME", 13057),
///     }
/// }
/// ```
macro_rules! enumerated_pair {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $registry:literal {
            $( $(#[$vmeta:meta])* $variant:ident = ($symbol:literal, $id:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::pair::EnumeratedPair for $name {
            const REGISTRY: &'static str = $registry;

            fn all() -> &'static [Self] {
                &[$( $name::$variant ),+]
            }

            fn id(self) -> i64 {
                match self {
                    $( $name::$variant => $id ),+
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $( $name::$variant => $symbol ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::pair::EnumeratedPair::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::LookupError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::pair::EnumeratedPair>::resolve_by_symbol(s).ok_or_else(|| {
                    $crate::error::LookupError::UnknownSymbol {
                        registry: $registry.to_string(),
                        symbol: s.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use enumerated_pair;

/// One row of a [`PairTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEntry {
    pub symbol: String,
    pub id: i64,
}

/// Runtime form of an enumerated pair registry.
///
/// The symbol set is closed; only identifiers may be rebound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairTable {
    name: String,
    entries: Vec<PairEntry>,
}

impl PairTable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[PairEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve_by_id(&self, id: i64) -> Option<&PairEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn resolve_by_symbol(&self, symbol: &str) -> Option<&PairEntry> {
        self.position(symbol).map(|index| &self.entries[index])
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        let key = normalize_label(symbol);
        self.entries
            .iter()
            .position(|entry| normalize_label(&entry.symbol) == key)
    }

    /// Give `symbol` a new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownSymbol`] when `symbol` is not a variant.
    pub fn rebind(&mut self, symbol: &str, id: i64) -> Result<(), RegistryError> {
        match self.position(symbol) {
            Some(index) => {
                self.entries[index].id = id;
                Ok(())
            }
            None => Err(RegistryError::UnknownSymbol {
                registry: self.name.clone(),
                symbol: symbol.to_string(),
            }),
        }
    }

    /// Verify symbols are trimmed and unique under label normalization, and
    /// identifiers are unique.
    pub fn check_integrity(&self) -> Result<(), RegistryError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.symbol.trim().is_empty() {
                return Err(RegistryError::EmptyLabel {
                    registry: self.name.clone(),
                });
            }
            if entry.symbol.trim() != entry.symbol {
                return Err(RegistryError::UnnormalizedLabel {
                    registry: self.name.clone(),
                    label: entry.symbol.clone(),
                });
            }
            let key = normalize_label(&entry.symbol);
            if self.entries[..index]
                .iter()
                .any(|earlier| normalize_label(&earlier.symbol) == key)
            {
                return Err(RegistryError::DuplicateLabel {
                    registry: self.name.clone(),
                    label: entry.symbol.clone(),
                });
            }
        }
        check_ids(
            &self.name,
            self.entries.iter().map(|e| (e.symbol.as_str(), e.id)),
        )
    }
}
