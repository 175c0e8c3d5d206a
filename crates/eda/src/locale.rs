use std::collections::BTreeMap;

/// The locale key under which the default (untranslated) name is stored.
pub const DEFAULT_LOCALE: &str = "";

/// Names of a library element, by locale.
///
/// Serialized as a plain map, the default name uses the empty locale key, e.g.
/// `{ "": "Resistor", "de_DE": "Widerstand" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LocalizedNameMap(BTreeMap<String, String>);

impl LocalizedNameMap {
    pub fn new(default_name: &str) -> Self {
        let mut names = BTreeMap::new();
        names.insert(DEFAULT_LOCALE.to_string(), default_name.to_string());
        Self(names)
    }

    pub fn with_name(mut self, locale: &str, name: &str) -> Self {
        self.0.insert(locale.to_string(), name.to_string());
        self
    }

    /// The name for the first locale of `locale_order` that has one, otherwise the default name.
    ///
    /// Returns an empty string when there is no default name either.
    pub fn value(&self, locale_order: &[String]) -> &str {
        locale_order.iter()
            .find_map(|locale| self.0.get(locale))
            .or_else(|| self.0.get(DEFAULT_LOCALE))
            .map(String::as_str)
            .unwrap_or_default()
    }
}
