use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SharedError;
use crate::price::parse_price;

/// Steam application id, the join key shared by every dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppId(pub u64);

impl AppId {
    /// Key used by the appid-keyed JSON maps
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(AppId)
            .map_err(|_| SharedError::InvalidAppId(s.to_string()))
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        AppId(id)
    }
}

impl Serialize for AppId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for AppId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAppId {
            Number(u64),
            Text(String),
        }

        match RawAppId::deserialize(deserializer)? {
            RawAppId::Number(id) => Ok(AppId(id)),
            RawAppId::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// A game's genre list.
///
/// The catalog stores genres either as a JSON array or as a single
/// comma-separated string; both decode to the same list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Genres(pub Vec<String>);

impl Genres {
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.0.iter().any(|g| g == genre)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined form used on cards and the detail header
    pub fn label(&self) -> String {
        self.0.join(", ")
    }
}

impl From<&str> for Genres {
    fn from(joined: &str) -> Self {
        Genres(
            joined
                .split(',')
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
        )
    }
}

impl From<Vec<String>> for Genres {
    fn from(list: Vec<String>) -> Self {
        Genres(list)
    }
}

impl<'de> Deserialize<'de> for Genres {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawGenres {
            List(Vec<String>),
            Joined(String),
        }

        Ok(match Option::<RawGenres>::deserialize(deserializer)? {
            Some(RawGenres::List(list)) => Genres(list),
            Some(RawGenres::Joined(joined)) => Genres::from(joined.as_str()),
            None => Genres::default(),
        })
    }
}

/// Accepts a price as text, number or null. Blank text counts as missing.
fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Integer(u64),
        Number(f64),
    }

    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        Some(RawPrice::Text(text)) if !text.trim().is_empty() => Some(text),
        Some(RawPrice::Integer(value)) => Some(value.to_string()),
        Some(RawPrice::Number(value)) => Some(value.to_string()),
        _ => None,
    })
}

/// One entry of the games catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    /// Steam app id
    pub appid: AppId,

    /// Store name
    #[serde(default)]
    pub name: String,

    /// Display price, e.g. `"¥ 1,980"`; `None` for free titles
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<String>,

    /// Store genres
    #[serde(default)]
    pub genres: Genres,
}

impl Game {
    pub fn new(appid: impl Into<AppId>, name: impl Into<String>, price: Option<&str>, genres: &[&str]) -> Self {
        Self {
            appid: appid.into(),
            name: name.into(),
            price: price.map(str::to_string),
            genres: Genres(genres.iter().map(|g| g.to_string()).collect()),
        }
    }

    /// Numeric price used by the range filter and the price sort
    pub fn price_value(&self) -> u64 {
        parse_price(self.price.as_deref())
    }
}
