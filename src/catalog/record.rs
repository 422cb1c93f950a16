use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::catalog::labels::SectionKind;
use crate::catalog::media;
use crate::value::{field_text, is_present, lenient_list, truthy_text};

/// Title shown for a product that carries no model name.
pub const FALLBACK_TITLE: &str = "zone_S01";

/// Entries of one nested section, in document order.
///
/// Sentinel and `null` values are dropped on the way in, so every stored
/// value is displayable. Unrecognized keys are kept; the label scheme
/// decides what is shown.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Section {
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. A key that already exists keeps its position;
    /// a sentinel value removes it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        self.set(key, is_present(&value).then_some(value));
    }

    fn set(&mut self, key: String, value: Option<String>) {
        let existing = self.entries.iter().position(|(known, _)| *known == key);
        match (existing, value) {
            (Some(index), Some(value)) => self.entries[index].1 = value,
            (Some(index), None) => {
                self.entries.remove(index);
            }
            (None, Some(value)) => self.entries.push((key, value)),
            (None, None) => {}
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(known, _)| known == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let mut section = Self::default();
        for (key, value) in map {
            section.set(key.clone(), field_text(value));
        }
        section
    }
}

impl<K, V> FromIterator<(K, V)> for Section
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut section = Self::default();
        for (key, value) in iter {
            section.insert(key, value);
        }
        section
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

/// One smart watch from `product_specifications_simplified.json`.
///
/// Malformed fields degrade to absent instead of failing the document.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawProduct")]
pub struct ProductRecord {
    pub model: Option<String>,
    /// Source path of the product shot, possibly Windows-style.
    pub white_background_image: Option<String>,
    pub hardware_specifications: Section,
    pub connectivity_features: Section,
    pub usage_time: Section,
    /// `appearance.colour`, a comma separated list of colour names.
    pub colour: Option<String>,
    /// `software.app`, the companion app.
    pub app: Option<String>,
}

impl ProductRecord {
    pub fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::Hardware => &self.hardware_specifications,
            SectionKind::Connectivity => &self.connectivity_features,
            SectionKind::Usage => &self.usage_time,
        }
    }

    /// Display title: the model name or [`FALLBACK_TITLE`].
    pub fn title(&self) -> &str {
        self.model.as_deref().unwrap_or(FALLBACK_TITLE)
    }

    /// Web path of the product image, see [`media::resolve_image_path`].
    pub fn image_url(&self) -> Option<String> {
        media::resolve_image_path(self.white_background_image.as_deref())
    }

    /// Colour names for badge display, see [`media::split_colour_list`].
    pub fn colours(&self) -> Vec<String> {
        media::split_colour_list(self.colour.as_deref())
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawProduct {
    model: Value,
    white_background_image: Value,
    hardware_specifications: Value,
    connectivity_features: Value,
    usage_time: Value,
    appearance: Value,
    software: Value,
}

fn nested_text(parent: &Value, key: &str) -> Option<String> {
    parent.get(key).and_then(field_text)
}

impl From<RawProduct> for ProductRecord {
    fn from(raw: RawProduct) -> Self {
        ProductRecord {
            model: truthy_text(&raw.model),
            white_background_image: truthy_text(&raw.white_background_image),
            hardware_specifications: Section::from_value(&raw.hardware_specifications),
            connectivity_features: Section::from_value(&raw.connectivity_features),
            usage_time: Section::from_value(&raw.usage_time),
            colour: nested_text(&raw.appearance, "colour"),
            app: nested_text(&raw.software, "app"),
        }
    }
}

/// The product document: `{ "products": [...] }`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductCatalog {
    #[serde(default, deserialize_with = "lenient_list")]
    pub products: Vec<ProductRecord>,
}

impl ProductCatalog {
    /// Key for list rendering: the model, or the position when unnamed.
    pub fn list_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.products.iter().enumerate().map(|(index, product)| {
            product
                .model
                .clone()
                .unwrap_or_else(|| index.to_string())
        })
    }
}
