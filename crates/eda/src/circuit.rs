use std::sync::OnceLock;
use regex::{Captures, Regex};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// A component of the circuit, e.g. `R1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComponentInstance {
    pub name: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ComponentInstance {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            attributes: vec![],
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// The value of the component.
    ///
    /// When `substitute` is set, `{{KEY}}` placeholders are replaced with the value of the
    /// attribute named `KEY`, `{{NAME}}` with the component name. Unknown keys are replaced with
    /// nothing.
    pub fn value(&self, substitute: bool) -> String {
        if !substitute {
            return self.value.clone();
        }

        placeholder_regex()
            .replace_all(&self.value, |captures: &Captures| {
                let key = &captures[1];
                self.attribute_value(key)
                    .unwrap_or_else(|| {
                        trace!("Unknown attribute in value. component: '{}', key: '{}'", self.name, key);
                        ""
                    })
                    .to_string()
            })
            .into_owned()
    }

    fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value.as_str())
            .or_else(|| (key == "NAME").then_some(self.name.as_str()))
    }
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("valid placeholder pattern"))
}
