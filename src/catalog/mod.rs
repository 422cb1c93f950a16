mod labels;
mod media;
mod record;
mod specs;

pub use labels::{LabelDictionary, LabelScheme, SectionKind};
pub use media::{resolve_image_path, split_colour_list};
pub use record::{ProductCatalog, ProductRecord, Section, FALLBACK_TITLE};
pub use specs::{extract_display_specs, grouped_display_specs, DisplaySpec, SpecGroup, Stripe};
