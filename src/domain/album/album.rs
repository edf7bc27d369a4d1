use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Album entity
///
/// The only persisted record of the service. Identifier uniqueness is
/// enforced by the `albums` table, not here.
///
/// On the wire `price` is a JSON number; strings are rejected. `id` may be
/// omitted from request bodies or sent as `null`, in which case it decodes
/// to an empty string.
///
/// # Example
/// ```
/// use albums_api::domain::album::Album;
/// use rust_decimal::Decimal;
///
/// let album = Album::new("Abbey Road", "The Beatles", Decimal::new(1999, 2));
/// assert_eq!(album.title, "Abbey Road");
/// assert!(album.id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    #[serde(default, deserialize_with = "deserialize_nullable_id")]
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_price"
    )]
    pub price: Decimal,
}

impl Album {
    /// Creates an album that has not been stored yet (empty id)
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Returns the same album carrying the given identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

fn deserialize_nullable_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(PriceVisitor)
}

/// Accepts JSON numbers only
struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        // Shortest round-trip text keeps 19.99 as 19.99 rather than its binary expansion
        Decimal::from_str(&value.to_string())
            .map_err(|_| E::invalid_value(de::Unexpected::Float(value), &self))
    }
}
