//! Footer branding context.

use serde::Serialize;
use std::collections::BTreeMap;

/// Footer settings (`footnote`, `brandorganization`, `brandwebsite`,
/// `brandphone`, `brandemail`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FooterSettings {
    pub footnote: Option<String>,
    pub organization: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl FooterSettings {
    #[must_use]
    pub fn from_settings(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| crate::text(config, key).map(String::from);
        Self {
            footnote: value("footnote"),
            organization: value("brandorganization"),
            website: value("brandwebsite"),
            phone: value("brandphone"),
            email: value("brandemail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterContext {
    pub has_footnote: bool,
    /// Any of the brand contact fields is set.
    pub has_brand: bool,
    #[serde(flatten)]
    pub fields: FooterSettings,
}

#[must_use]
pub fn footer(settings: &FooterSettings) -> FooterContext {
    let brand = [
        &settings.organization,
        &settings.website,
        &settings.phone,
        &settings.email,
    ];
    FooterContext {
        has_footnote: settings.footnote.is_some(),
        has_brand: brand.iter().any(|field| field.is_some()),
        fields: settings.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> FooterSettings {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        FooterSettings::from_settings(&map)
    }

    #[test]
    fn empty_footer() {
        let context = footer(&settings(&[("footnote", ""), ("brandphone", "  ")]));
        assert!(!context.has_footnote);
        assert!(!context.has_brand);
    }

    #[test]
    fn footnote_and_brand_are_independent() {
        let context = footer(&settings(&[("footnote", "© Example College")]));
        assert!(context.has_footnote);
        assert!(!context.has_brand);

        let context = footer(&settings(&[
            ("brandorganization", "Example College"),
            ("brandemail", "info@college.example"),
        ]));
        assert!(!context.has_footnote);
        assert!(context.has_brand);
        assert_eq!(context.fields.email.as_deref(), Some("info@college.example"));
        assert_eq!(context.fields.website, None);
    }

    #[test]
    fn fields_serialise_flat() {
        let context = footer(&settings(&[("brandwebsite", "https://college.example")]));
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["brandwebsite"], serde_json::Value::Null);
        assert_eq!(json["website"], "https://college.example");
        assert_eq!(json["has_brand"], true);
    }
}
