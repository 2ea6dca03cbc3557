//! Response envelopes and list queries.
//!
//! The backend is not consistent about wrapping: single records come back
//! either bare or as `{ "data": ... }`, lists either bare, as
//! `{ "data": [...], "meta": {...} }`, or with pagination fields next to
//! `data`, sometimes nested one level deeper. Everything here just unwraps;
//! pagination values are passed through untouched.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use erpdesk_core::naming::camel_to_snake;

/// A record that may or may not be wrapped in `{ "data": ... }`.
///
/// The shape is picked from the body, not by trial: an object with a `data`
/// key is always read as wrapped, so a payload that does not fit is an error
/// rather than an empty record built from the outer object.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) => T::deserialize(data)
                    .map(|data| Envelope::Wrapped { data })
                    .map_err(|e| D::Error::custom(format!("`data`: {e}"))),
                None => T::deserialize(Value::Object(map))
                    .map(Envelope::Bare)
                    .map_err(D::Error::custom),
            },
            other => T::deserialize(other).map(Envelope::Bare).map_err(D::Error::custom),
        }
    }
}

/// Reject a bare object that carries none of `keys`.
///
/// For shapes whose fields are all optional, where any object would decode
/// (`{"message": "ok"}` included).
pub(crate) fn expect_any_key(value: &Value, keys: &[&str], what: &str) -> Result<(), String> {
    match value {
        Value::Object(map) if keys.iter().any(|k| map.contains_key(*k)) => Ok(()),
        Value::Object(_) => Err(format!("{what}: response has none of the expected fields")),
        other => Err(format!("{what}: expected an object, found {}", kind_of(other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Pagination values as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: Option<u64>,
    pub last_page: Option<u64>,
    pub per_page: Option<u64>,
    pub total: Option<u64>,
}

impl PageMeta {
    pub fn is_empty(&self) -> bool {
        *self == PageMeta::default()
    }

    /// `true` when the backend says there is a page after this one.
    pub fn has_next(&self) -> bool {
        matches!((self.current_page, self.last_page), (Some(c), Some(l)) if c < l)
    }
}

#[derive(Debug, Deserialize)]
struct WireMeta {
    current_page: Option<u64>,
    last_page: Option<u64>,
    per_page: Option<u64>,
    total: Option<u64>,
}

impl WireMeta {
    fn into_meta(self) -> PageMeta {
        PageMeta {
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

impl<T: DeserializeOwned> Page<T> {
    fn from_rows(rows: Vec<Value>, meta: PageMeta) -> Result<Self, String> {
        let items = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| T::deserialize(row).map_err(|e| format!("item {i}: {e}")))
            .collect::<Result<Vec<T>, String>>()?;
        Ok(Page { items, meta })
    }

    /// `{ "data": [...], "meta": {...} }`, `{ "data": [...], "current_page": .. }`
    /// or the same one level down under `data`.
    fn from_map(mut map: Map<String, Value>) -> Result<Self, String> {
        match map.remove("data") {
            Some(Value::Array(rows)) => {
                let meta = match map.remove("meta") {
                    Some(Value::Null) | None => WireMeta::deserialize(Value::Object(map)),
                    Some(meta) => WireMeta::deserialize(meta),
                }
                .map_err(|e| format!("pagination: {e}"))?;
                Self::from_rows(rows, meta.into_meta())
            }
            Some(Value::Object(inner)) => Self::from_map(inner),
            Some(other) => Err(format!("expected a list under `data`, found {}", kind_of(&other))),
            None => Err("list response has no `data` field".to_string()),
        }
    }
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let page = match Value::deserialize(deserializer)? {
            Value::Array(rows) => Self::from_rows(rows, PageMeta::default()),
            Value::Object(map) => Self::from_map(map),
            other => Err(format!("expected a list, found {}", kind_of(&other))),
        };
        page.map_err(D::Error::custom)
    }
}

/// Query parameters for list endpoints, passed through verbatim and in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing an earlier value for the same key.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Like [`param`](Self::param), with the key given in dashboard naming
    /// (`categoryId` is sent as `category_id`).
    pub fn filter(self, key: &str, value: impl ToString) -> Self {
        self.param(camel_to_snake(key), value)
    }

    pub fn page(self, page: u64) -> Self {
        self.param("page", page)
    }

    pub fn per_page(self, per_page: u64) -> Self {
        self.param("per_page", per_page)
    }

    pub fn search(self, term: impl Into<String>) -> Self {
        self.param("search", term.into())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
