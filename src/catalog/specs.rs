use crate::catalog::labels::{LabelScheme, SectionKind};
use crate::catalog::record::ProductRecord;
use crate::value::is_present;

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
/// A single specification row (label-value pair) of a product.
pub struct DisplaySpec {
    /// The display label, e.g. `Battery Capacity`.
    pub label: String,
    /// The value as found in the catalog.
    pub value: String,
}

impl DisplaySpec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
/// SpecGroup represents the rows of one section.
pub struct SpecGroup {
    /// The section title.
    /// For example: `Hardware`, `Connectivity`, `Appearance` etc.
    pub category: String,
    /// The rows, in display order.
    pub specs: Vec<DisplaySpec>,
}

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alternating row styling for spec tables.
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }
}

/// Flattens a product into the rows of its specification table.
///
/// Rows come section by section (hardware, connectivity, usage), each in
/// the document's key order, followed by the colour and app rows when the
/// scheme labels them. Keys the scheme does not know and values that are
/// sentinels are skipped; nothing here fails.
///
/// ```rust
/// use watch_catalog::{extract_display_specs, DisplaySpec, LabelScheme, ProductRecord};
///
/// let product: ProductRecord = serde_json::from_str(
///     r#"{ "hardware_specifications": { "screen": "AMOLED", "chipset": "N/A" } }"#,
/// ).unwrap();
/// let specs = extract_display_specs(&product, &LabelScheme::TABLE);
/// assert_eq!(specs, [DisplaySpec::new("Screen", "AMOLED")]);
/// ```
pub fn extract_display_specs(record: &ProductRecord, scheme: &LabelScheme) -> Vec<DisplaySpec> {
    grouped_display_specs(record, scheme)
        .into_iter()
        .flat_map(|group| group.specs)
        .collect()
}

/// Same rows as [`extract_display_specs`], grouped per section.
/// Sections without rows are left out.
pub fn grouped_display_specs(record: &ProductRecord, scheme: &LabelScheme) -> Vec<SpecGroup> {
    let mut groups: Vec<SpecGroup> = SectionKind::ALL
        .into_iter()
        .map(|kind| {
            let dictionary = scheme.dictionary(kind);
            let specs = record
                .section(kind)
                .iter()
                .filter(|(_, value)| is_present(value))
                .filter_map(|(key, value)| {
                    dictionary
                        .label(key)
                        .map(|label| DisplaySpec::new(label, value))
                })
                .collect();
            SpecGroup {
                category: kind.title().into(),
                specs,
            }
        })
        .collect();

    let extras = [
        ("Appearance", scheme.colour, record.colour.as_deref()),
        ("Software", scheme.app, record.app.as_deref()),
    ];
    for (category, label, value) in extras {
        if let (Some(label), Some(value)) = (label, value.filter(|value| is_present(value))) {
            groups.push(SpecGroup {
                category: category.into(),
                specs: vec![DisplaySpec::new(label, value)],
            });
        }
    }

    groups.retain(|group| !group.specs.is_empty());
    groups
}

impl ProductRecord {
    /// Rows of this product's specification table under `scheme`.
    pub fn display_specs(&self, scheme: &LabelScheme) -> Vec<DisplaySpec> {
        extract_display_specs(self, scheme)
    }
}
