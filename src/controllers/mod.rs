pub mod catalog;
pub mod discover;
pub mod health;
pub mod views;

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Query-string values arrive as strings, and the site frontend sends
/// empty values (`?year=&page=2`) for unset filters. Treat empty as
/// absent instead of a parse failure.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
