//! Login page context.
//!
//! Covers both login page variants: the default form and the custom layout with
//! feature panels and an icon row.

use serde::Serialize;
use std::collections::BTreeMap;

pub const LOGIN_NAV_COUNT: u8 = 4;
pub const FEATURE_COUNT: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginNavSettings {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureSettings {
    /// Stored file name of the feature image; the host resolves it to a URL.
    pub image: Option<String>,
    pub text: Option<String>,
}

/// Login page settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSettings {
    /// Use the custom login layout (`showcustomlogin`).
    pub custom_layout: bool,
    /// Text shown to logged-out visitors (`fptextboxlogout`).
    pub login_text: Option<String>,
    /// Site-wide alert (`alertbox`).
    pub alert: Option<String>,
    /// Raw `slideshowpages` value; `0` and `2` include the login page.
    pub slideshow_pages: Option<String>,
    pub nav: Vec<LoginNavSettings>,
    pub features: Vec<FeatureSettings>,
}

impl Default for LoginSettings {
    /// Every slot present and empty, as read from an empty settings store.
    fn default() -> Self {
        Self::from_settings(&BTreeMap::new())
    }
}

impl LoginSettings {
    #[must_use]
    pub fn from_settings(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| crate::text(config, key).map(String::from);
        Self {
            custom_layout: crate::flag(config, "showcustomlogin"),
            login_text: value("fptextboxlogout"),
            alert: value("alertbox"),
            slideshow_pages: value("slideshowpages"),
            nav: (1..=LOGIN_NAV_COUNT)
                .map(|n| LoginNavSettings {
                    icon: value(&format!("loginnav{n}icon")),
                    title: value(&format!("loginnav{n}titletext")),
                    text: value(&format!("loginnav{n}icontext")),
                })
                .collect(),
            features: (1..=FEATURE_COUNT)
                .map(|n| FeatureSettings {
                    image: value(&format!("feature{n}image")),
                    text: value(&format!("feature{n}text")),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginNav {
    pub has_icon: bool,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Both an image and a text are configured.
    pub has_feature: bool,
    /// Image setting key (`featureNimage`) when an image is stored.
    pub image: Option<String>,
    pub text: Option<String>,
}

/// Template context for the login page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginContext {
    pub has_custom_login: bool,
    pub has_default_login: bool,
    pub has_slideshow_pages: bool,
    pub login_text: Option<String>,
    pub alert: Option<String>,
    pub has_icon_nav: bool,
    pub icon_nav: Vec<LoginNav>,
    pub features: Vec<Feature>,
}

/// Builds the login page context.
///
/// # Examples
///
/// ```
/// use coursenav::context::{login_page, LoginSettings};
///
/// let context = login_page(&LoginSettings { custom_layout: true, ..LoginSettings::default() });
/// assert!(context.has_custom_login);
/// assert!(!context.has_default_login);
/// ```
#[must_use]
pub fn login_page(settings: &LoginSettings) -> LoginContext {
    let icon_nav: Vec<LoginNav> = settings
        .nav
        .iter()
        .map(|nav| LoginNav {
            has_icon: nav.icon.is_some(),
            icon: nav.icon.clone(),
            title: nav.title.clone(),
            text: nav.text.clone(),
        })
        .collect();

    let features = settings
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| Feature {
            has_feature: feature.image.is_some() && feature.text.is_some(),
            image: feature.image.as_ref().map(|_| format!("feature{}image", index + 1)),
            text: feature.text.clone(),
        })
        .collect();

    LoginContext {
        has_custom_login: settings.custom_layout,
        has_default_login: !settings.custom_layout,
        has_slideshow_pages: matches!(settings.slideshow_pages.as_deref(), Some("0" | "2")),
        login_text: settings.login_text.clone(),
        alert: settings.alert.clone(),
        has_icon_nav: icon_nav.iter().any(|nav| nav.has_icon),
        icon_nav,
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> LoginSettings {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        LoginSettings::from_settings(&map)
    }

    #[test]
    fn default_layout_unless_custom_is_enabled() {
        let context = login_page(&settings(&[]));
        assert!(context.has_default_login);
        assert!(!context.has_custom_login);

        let context = login_page(&settings(&[("showcustomlogin", "1")]));
        assert!(context.has_custom_login);
        assert!(!context.has_default_login);
    }

    #[test]
    fn login_text_and_alert_pass_through() {
        let context = login_page(&settings(&[
            ("fptextboxlogout", "Welcome back"),
            ("alertbox", "Maintenance on Friday"),
        ]));
        assert_eq!(context.login_text.as_deref(), Some("Welcome back"));
        assert_eq!(context.alert.as_deref(), Some("Maintenance on Friday"));

        let context = login_page(&settings(&[("alertbox", "   ")]));
        assert_eq!(context.alert, None);
    }

    #[test]
    fn slideshow_pages_include_login_for_zero_and_two() {
        let shown = |value: &str| {
            login_page(&settings(&[("slideshowpages", value)])).has_slideshow_pages
        };
        assert!(shown("0"));
        assert!(shown("2"));
        assert!(!shown("1"));
        assert!(!login_page(&settings(&[])).has_slideshow_pages);
    }

    #[test]
    fn icon_row_and_features() {
        let context = login_page(&settings(&[
            ("showcustomlogin", "1"),
            ("loginnav3icon", "book"),
            ("loginnav3titletext", "Library"),
            ("loginnav4titletext", "No icon"),
            ("feature1image", "/f1.png"),
            ("feature1text", "Learn anywhere"),
            ("feature2text", "Text only"),
        ]));

        assert!(context.has_icon_nav);
        assert_eq!(context.icon_nav.len(), usize::from(LOGIN_NAV_COUNT));
        assert!(context.icon_nav[2].has_icon);
        assert_eq!(context.icon_nav[2].title.as_deref(), Some("Library"));
        assert!(!context.icon_nav[3].has_icon);

        assert_eq!(context.features.len(), usize::from(FEATURE_COUNT));
        assert!(context.features[0].has_feature);
        assert_eq!(context.features[0].image.as_deref(), Some("feature1image"));
        assert!(!context.features[1].has_feature);
        assert!(!context.features[2].has_feature);
    }

    #[test]
    fn no_icons_means_no_icon_row() {
        let context = login_page(&settings(&[("loginnav1titletext", "Title only")]));
        assert!(!context.has_icon_nav);
    }
}
