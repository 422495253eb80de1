//! Translation of menu labels and dialog titles
//!
//! Locale bundles are JSON documents compiled into the binary. Keys are
//! dotted paths into the bundle (`desktop.file.open`). A key missing from
//! the active bundle falls back to English, then to the key itself.

use crate::config::Language;
use crate::error::{Error, Result};
use serde_json::Value;

const EN: &str = include_str!("../assets/locales/en.json");
const DE: &str = include_str!("../assets/locales/de.json");
const FR: &str = include_str!("../assets/locales/fr.json");
const ES: &str = include_str!("../assets/locales/es.json");

fn bundle_source(language: Language) -> &'static str {
    match language {
        Language::En => EN,
        Language::De => DE,
        Language::Fr => FR,
        Language::Es => ES,
    }
}

fn parse_bundle(language: Language) -> Result<Value> {
    serde_json::from_str(bundle_source(language)).map_err(|source| Error::LocaleParse {
        locale: language.code(),
        source,
    })
}

fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(bundle, |node, part| node.get(part))?
        .as_str()
}

/// Maps translation keys to display strings for one language.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    active: Value,
    fallback: Value,
}

impl Translator {
    /// Load the bundle for `language` plus the English fallback.
    pub fn new(language: Language) -> Result<Self> {
        let fallback = parse_bundle(Language::En)?;
        let active = if language == Language::En {
            fallback.clone()
        } else {
            parse_bundle(language)?
        };
        Ok(Self {
            language,
            active,
            fallback,
        })
    }

    /// A translator with no bundles at all; every key maps to itself.
    pub fn passthrough() -> Self {
        Self {
            language: Language::En,
            active: Value::Null,
            fallback: Value::Null,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`.
    pub fn tc(&self, key: &str) -> String {
        lookup(&self.active, key)
            .or_else(|| lookup(&self.fallback, key))
            .unwrap_or(key)
            .to_string()
    }
}
