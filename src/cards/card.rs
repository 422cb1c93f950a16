use serde::Deserialize;
use serde_json::Value;

use crate::value::{lenient_list, lenient_text, truthy_text};

/// Route prefix of the card detail pages.
pub const DETAIL_ROUTE: &str = "/business-card";

/// A team member's card from `business_cards.json`.
///
/// Every field is optional and rendered only when non-empty.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BusinessCardRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Job title.
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub github: Option<String>,
    /// Avatar image URL.
    #[serde(deserialize_with = "lenient_text")]
    pub avatar: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "skill_list")]
    pub skills: Vec<String>,
    /// Routing key of the card's detail page.
    #[serde(deserialize_with = "lenient_text")]
    pub path: Option<String>,
}

fn skill_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let skills: Vec<Value> = lenient_list(deserializer)?;
    Ok(skills.iter().filter_map(truthy_text).collect())
}

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }
}

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
/// A contact line of a card.
pub struct ContactRow {
    pub kind: ContactKind,
    pub value: String,
    /// `mailto:`/`tel:` link, none for a location.
    pub href: Option<String>,
}

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Website,
    LinkedIn,
    GitHub,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::Website => "Website",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::GitHub => "GitHub",
        }
    }
}

#[cfg_attr(feature = "serde_io", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

impl BusinessCardRecord {
    /// Uppercased first letter of the name, shown when there is no avatar
    /// or it fails to load.
    pub fn initial(&self) -> Option<String> {
        self.name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|first| first.to_uppercase().collect())
    }

    /// Email, phone and location rows, each only when set.
    pub fn contact_rows(&self) -> Vec<ContactRow> {
        let mut rows = Vec::new();
        if let Some(email) = &self.email {
            rows.push(ContactRow {
                kind: ContactKind::Email,
                value: email.clone(),
                href: Some(format!("mailto:{email}")),
            });
        }
        if let Some(phone) = &self.phone {
            rows.push(ContactRow {
                kind: ContactKind::Phone,
                value: phone.clone(),
                href: Some(format!("tel:{phone}")),
            });
        }
        if let Some(location) = &self.location {
            rows.push(ContactRow {
                kind: ContactKind::Location,
                value: location.clone(),
                href: None,
            });
        }
        rows
    }

    pub fn social_links(&self) -> Vec<SocialLink> {
        [
            (SocialKind::Website, &self.website),
            (SocialKind::LinkedIn, &self.linkedin),
            (SocialKind::GitHub, &self.github),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.as_ref().map(|url| SocialLink {
                kind,
                url: url.clone(),
            })
        })
        .collect()
    }

    pub fn has_social_links(&self) -> bool {
        self.website.is_some() || self.linkedin.is_some() || self.github.is_some()
    }

    /// Link to this card's detail page.
    pub fn detail_href(&self) -> Option<String> {
        self.path
            .as_deref()
            .map(|path| format!("{DETAIL_ROUTE}/{path}"))
    }

    /// Title used when sharing the detail page, `"<name> - <title>"`.
    pub fn share_title(&self) -> String {
        format!(
            "{} - {}",
            self.name.as_deref().unwrap_or_default(),
            self.title.as_deref().unwrap_or_default()
        )
    }
}

/// The card document: `{ "cards": [...] }`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BusinessCardDirectory {
    #[serde(default, deserialize_with = "lenient_list")]
    pub cards: Vec<BusinessCardRecord>,
}

impl BusinessCardDirectory {
    /// The first card whose `path` equals `path` exactly.
    pub fn find(&self, path: &str) -> Option<&BusinessCardRecord> {
        self.cards
            .iter()
            .find(|card| card.path.as_deref() == Some(path))
    }
}
