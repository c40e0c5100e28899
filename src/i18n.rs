//! Interface language table.
//!
//! Locale tables are embedded JSON, parsed once per process and read-only
//! afterwards, so lookups need no synchronization. [`translate`] resolves a
//! dot-separated key in the requested locale, falls back to the default
//! locale when the key is missing there, and echoes the key itself when it
//! is absent everywhere.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde_json::Value;

/// Interface locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English, the fallback locale.
    #[default]
    En,
    /// Armenian.
    Hy,
}

impl Locale {
    /// Locale code as spelled in configuration.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hy => "hy",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hy" => Ok(Self::Hy),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

static EN_TABLE: OnceLock<Value> = OnceLock::new();
static HY_TABLE: OnceLock<Value> = OnceLock::new();

fn table(locale: Locale) -> &'static Value {
    let (cell, raw) = match locale {
        Locale::En => (&EN_TABLE, include_str!("../locales/en.json")),
        Locale::Hy => (&HY_TABLE, include_str!("../locales/hy.json")),
    };
    cell.get_or_init(|| {
        serde_json::from_str(raw).expect("embedded locale table is valid JSON")
    })
}

fn resolve<'a>(mut value: &'a Value, key: &str) -> Option<&'a Value> {
    for segment in key.split('.') {
        value = value.as_object()?.get(segment)?;
    }
    Some(value)
}

/// Looks up a dot-separated key in a locale table.
///
/// Returns the raw JSON value, so callers that expect lists (e.g.
/// `about.items`) can read them as arrays. Falls back to the default
/// locale; `None` when the key is absent everywhere.
#[must_use]
pub fn lookup(key: &str, locale: Locale) -> Option<&'static Value> {
    resolve(table(locale), key).or_else(|| {
        if locale == Locale::default() {
            None
        } else {
            resolve(table(Locale::default()), key)
        }
    })
}

/// Pure string lookup: the translated string for `key` in `locale`,
/// falling back to the default locale, echoing the key when missing
/// everywhere or when the value is not a string.
#[must_use]
pub fn translate(key: &str, locale: Locale) -> String {
    lookup(key, locale)
        .and_then(Value::as_str)
        .map_or_else(|| key.to_string(), str::to_string)
}
