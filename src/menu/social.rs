//! Social network link context.

use serde::Serialize;
use std::collections::BTreeMap;

/// Icon used for custom links without a configured icon.
const DEFAULT_CUSTOM_ICON: &str = "globe";

/// Configured social network links. `None` means the network is not shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub googleplus: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
    pub flickr: Option<String>,
    pub vk: Option<String>,
    pub pinterest: Option<String>,
    pub instagram: Option<String>,
    pub skype: Option<String>,
    pub website: Option<String>,
    pub blog: Option<String>,
    pub vimeo: Option<String>,
    pub tumblr: Option<String>,
    /// Up to three custom links, each with its icon name.
    pub custom: [(Option<String>, String); 3],
}

impl Default for SocialLinks {
    fn default() -> Self {
        let custom = || (None, DEFAULT_CUSTOM_ICON.to_string());
        Self {
            facebook: None,
            twitter: None,
            googleplus: None,
            linkedin: None,
            youtube: None,
            flickr: None,
            vk: None,
            pinterest: None,
            instagram: None,
            skype: None,
            website: None,
            blog: None,
            vimeo: None,
            tumblr: None,
            custom: [custom(), custom(), custom()],
        }
    }
}

impl SocialLinks {
    /// Reads links from the settings map (`facebook`, ..., `social1`, `socialicon1`, ...).
    #[must_use]
    pub fn from_settings(config: &BTreeMap<String, String>) -> Self {
        let link = |key: &str| crate::text(config, key).map(String::from);
        let custom = |n: u8| {
            (
                link(&format!("social{n}")),
                crate::text(config, &format!("socialicon{n}"))
                    .unwrap_or(DEFAULT_CUSTOM_ICON)
                    .to_string(),
            )
        };

        Self {
            facebook: link("facebook"),
            twitter: link("twitter"),
            googleplus: link("googleplus"),
            linkedin: link("linkedin"),
            youtube: link("youtube"),
            flickr: link("flickr"),
            vk: link("vk"),
            pinterest: link("pinterest"),
            instagram: link("instagram"),
            skype: link("skype"),
            website: link("website"),
            blog: link("blog"),
            vimeo: link("vimeo"),
            tumblr: link("tumblr"),
            custom: [custom(1), custom(2), custom(3)],
        }
    }
}

/// One icon slot of the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialIcon {
    pub has_link: bool,
    pub link: Option<String>,
    pub icon: String,
}

/// Template context for the social icon row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialContext {
    /// At least one link is configured.
    pub has_social_networks: bool,
    /// All seventeen slots in fixed order, configured or not.
    pub social_icons: Vec<SocialIcon>,
}

/// Builds the social icon context.
///
/// # Examples
///
/// ```
/// use coursenav::menu::{social_icons, SocialLinks};
///
/// let links = SocialLinks { vk: Some("https://vk.example/site".into()), ..SocialLinks::default() };
/// let context = social_icons(&links);
/// assert!(context.has_social_networks);
/// assert_eq!(context.social_icons.len(), 17);
/// ```
#[must_use]
pub fn social_icons(links: &SocialLinks) -> SocialContext {
    let fixed = [
        (&links.facebook, "facebook"),
        (&links.twitter, "twitter"),
        (&links.googleplus, "google-plus"),
        (&links.linkedin, "linkedin"),
        (&links.youtube, "youtube"),
        (&links.flickr, "flickr"),
        (&links.vk, "vk"),
        (&links.pinterest, "pinterest"),
        (&links.instagram, "instagram"),
        (&links.skype, "skype"),
        (&links.website, "globe"),
        (&links.blog, "bookmark"),
        (&links.vimeo, "vimeo-square"),
        (&links.tumblr, "tumblr"),
    ];

    let social_icons: Vec<SocialIcon> = fixed
        .into_iter()
        .map(|(link, icon)| (link, icon.to_string()))
        .chain(links.custom.iter().map(|(link, icon)| (link, icon.clone())))
        .map(|(link, icon)| SocialIcon {
            has_link: link.is_some(),
            link: link.clone(),
            icon,
        })
        .collect();

    SocialContext {
        has_social_networks: social_icons.iter().any(|slot| slot.has_link),
        social_icons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_configured_means_no_networks() {
        let context = social_icons(&SocialLinks::default());
        assert!(!context.has_social_networks);
        assert_eq!(context.social_icons.len(), 17);
        assert!(context.social_icons.iter().all(|slot| !slot.has_link));
    }

    #[test]
    fn custom_links_keep_their_icon_or_default_to_globe() {
        let settings: BTreeMap<String, String> = [
            ("social1", "https://one.example"),
            ("socialicon1", "rss"),
            ("social3", "https://three.example"),
            ("website", "  "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let context = social_icons(&SocialLinks::from_settings(&settings));
        let custom = &context.social_icons[14..];
        assert_eq!(custom[0].icon, "rss");
        assert!(custom[0].has_link);
        assert!(!custom[1].has_link);
        assert_eq!(custom[2].icon, "globe");
        assert_eq!(custom[2].link.as_deref(), Some("https://three.example"));
        assert!(!context.social_icons[10].has_link);
        assert!(context.has_social_networks);
    }
}
