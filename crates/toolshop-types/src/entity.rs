use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric record identity, unique within one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// The three record kinds managed by the back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Customer,
    Order,
}

impl EntityKind {
    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Customer => "customer",
            EntityKind::Order => "order",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Product => "products",
            EntityKind::Customer => "customers",
            EntityKind::Order => "orders",
        }
    }

    /// Message shown by the confirmation prompt before a delete
    pub fn delete_prompt(self) -> String {
        format!("Are you sure you want to delete this {}?", self.singular())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" | "products" => Ok(EntityKind::Product),
            "customer" | "customers" => Ok(EntityKind::Customer),
            "order" | "orders" => Ok(EntityKind::Order),
            other => Err(format!("unknown entity kind: '{}'", other)),
        }
    }
}

/// A record managed by a list controller.
///
/// Implementors provide the record-to-form mapping in both directions and
/// decide which text fields participate in search.
pub trait Entity: Clone + fmt::Debug {
    /// Staged form values: every field except identity
    type Draft: Draft;

    const KIND: EntityKind;

    fn id(&self) -> EntityId;

    /// Copy every field into a draft so an edit form starts from existing data
    fn to_draft(&self) -> Self::Draft;

    /// Build a record from submitted form values with the given identity
    fn from_draft(draft: Self::Draft, id: EntityId) -> Self;

    /// Case-insensitive containment against the searchable fields.
    ///
    /// `needle` has already been passed through [`fold`].
    fn matches(&self, needle: &str) -> bool;
}

/// Textual access to the fields of a staged form
pub trait Draft: Clone + Default + fmt::Debug {
    /// `(field, rendered value)` pairs in form order
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Parse `value` and store it in the named field
    fn set_field(&mut self, field: &str, value: &str) -> Result<()>;
}

/// Case folding used by every search filter. Char by char, so a substring
/// folds exactly as it does inside the longer text (no final-sigma rule).
pub fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Whether `haystack` contains an already-folded `needle`, ignoring case
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || fold(haystack).contains(needle)
}
