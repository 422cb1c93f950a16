/// Fixed mapping from a raw section key to its display label.
///
/// Declaration order is the schema order; lookups never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDictionary {
    entries: &'static [(&'static str, &'static str)],
}

impl LabelDictionary {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Display label for `key`, if the key is recognized.
    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, label)| *label)
    }

    /// Recognized keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The key-mapped sections of a product record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hardware,
    Connectivity,
    Usage,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Hardware,
        SectionKind::Connectivity,
        SectionKind::Usage,
    ];

    /// Heading used when specs are grouped by section.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Hardware => "Hardware",
            SectionKind::Connectivity => "Connectivity",
            SectionKind::Usage => "Usage",
        }
    }
}

/// Every label the normalizer emits: one dictionary per section plus the
/// optional colour and app rows.
///
/// The catalog was shown in two layouts that disagree on wording and on
/// whether a colour row exists, so both are available as presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelScheme {
    pub hardware: LabelDictionary,
    pub connectivity: LabelDictionary,
    pub usage: LabelDictionary,
    /// Label for `appearance.colour`; `None` leaves the row out.
    pub colour: Option<&'static str>,
    /// Label for `software.app`; `None` leaves the row out.
    pub app: Option<&'static str>,
}

impl LabelScheme {
    /// Full-width specification table.
    pub const TABLE: LabelScheme = LabelScheme {
        hardware: LabelDictionary::new(&[
            ("chipset", "Chipset"),
            ("heart_rate_sensor", "Heart Rate Sensor"),
            ("screen", "Screen"),
            ("screen_resolution", "Screen Resolution"),
            ("battery_capacity", "Battery Capacity"),
            ("waterproof_level", "Waterproof Level"),
        ]),
        connectivity: LabelDictionary::new(&[
            ("bluetooth_call", "Bluetooth Call"),
            ("bluetooth_version", "Bluetooth Version"),
        ]),
        usage: LabelDictionary::new(&[
            ("charging_time", "Charging Time"),
            ("normal_using_time", "Normal Using Time"),
        ]),
        colour: Some("Colour"),
        app: Some("APP"),
    };

    /// Compact product card with colour badges shown separately.
    pub const COMPACT: LabelScheme = LabelScheme {
        hardware: LabelDictionary::new(&[
            ("chipset", "Chipset"),
            ("heart_rate_sensor", "Heart Rate"),
            ("screen", "Display"),
            ("screen_resolution", "Resolution"),
            ("battery_capacity", "Battery"),
            ("waterproof_level", "Water Resistance"),
        ]),
        connectivity: LabelDictionary::new(&[
            ("bluetooth_call", "BT Calling"),
            ("bluetooth_version", "BT Version"),
        ]),
        usage: LabelDictionary::new(&[
            ("charging_time", "Charging"),
            ("normal_using_time", "Battery Life"),
        ]),
        colour: None,
        app: Some("App"),
    };

    /// Looks up a preset by its configuration name (`table` or `compact`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" => Some(Self::TABLE),
            "compact" => Some(Self::COMPACT),
            _ => None,
        }
    }

    pub fn dictionary(&self, kind: SectionKind) -> &LabelDictionary {
        match kind {
            SectionKind::Hardware => &self.hardware,
            SectionKind::Connectivity => &self.connectivity,
            SectionKind::Usage => &self.usage,
        }
    }
}

impl Default for LabelScheme {
    fn default() -> Self {
        Self::TABLE
    }
}
