//! Front-page slideshow context.

use serde::Serialize;
use std::collections::BTreeMap;

pub const SLIDE_COUNT: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideSettings {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Stored file name of the slide image; the host resolves it to a URL.
    pub image: Option<String>,
}

/// Slideshow settings (`showslideshow`, `slideNtitle`, `slideNcontent`, `slideNimage`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowSettings {
    pub enabled: bool,
    pub slides: Vec<SlideSettings>,
}

impl Default for SlideshowSettings {
    /// Every slot present and empty, as read from an empty settings store.
    fn default() -> Self {
        Self::from_settings(&BTreeMap::new())
    }
}

impl SlideshowSettings {
    #[must_use]
    pub fn from_settings(config: &BTreeMap<String, String>) -> Self {
        let value = |key: String| crate::text(config, &key).map(String::from);
        Self {
            enabled: crate::flag(config, "showslideshow"),
            slides: (1..=SLIDE_COUNT)
                .map(|n| SlideSettings {
                    title: value(format!("slide{n}title")),
                    content: value(format!("slide{n}content")),
                    image: value(format!("slide{n}image")),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// An image is stored; slides without one are skipped by the template.
    pub has_slide: bool,
    /// The caption is shown over the image.
    pub show_text: bool,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Image setting key (`slideNimage`) when an image is stored.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideshowContext {
    pub has_slideshow: bool,
    pub slides: Vec<Slide>,
}

/// Builds the slideshow context. Slides are reported even when the slideshow is
/// off; `has_slideshow` gates the whole block.
#[must_use]
pub fn slideshow(settings: &SlideshowSettings) -> SlideshowContext {
    let slides = settings
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| Slide {
            has_slide: slide.image.is_some(),
            show_text: slide.title.is_some(),
            title: slide.title.clone(),
            content: slide.content.clone(),
            image: slide.image.as_ref().map(|_| format!("slide{}image", index + 1)),
        })
        .collect();

    SlideshowContext {
        has_slideshow: settings.enabled,
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> SlideshowSettings {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SlideshowSettings::from_settings(&map)
    }

    #[test]
    fn slideshow_follows_its_toggle() {
        assert!(!slideshow(&settings(&[])).has_slideshow);
        assert!(!slideshow(&settings(&[("showslideshow", "0")])).has_slideshow);
        assert!(slideshow(&settings(&[("showslideshow", "1")])).has_slideshow);
    }

    #[test]
    fn slides_need_an_image_and_captions_need_a_title() {
        let context = slideshow(&settings(&[
            ("showslideshow", "1"),
            ("slide1image", "/welcome.jpg"),
            ("slide1title", "Welcome"),
            ("slide2title", "No picture"),
            ("slide3image", "/campus.jpg"),
            ("slide3content", "Our campus"),
        ]));

        assert_eq!(context.slides.len(), usize::from(SLIDE_COUNT));
        let [first, second, third] = context.slides.as_slice() else {
            panic!("expected three slides");
        };
        assert!(first.has_slide && first.show_text);
        assert_eq!(first.image.as_deref(), Some("slide1image"));
        assert!(!second.has_slide && second.show_text);
        assert!(third.has_slide && !third.show_text);
        assert_eq!(third.content.as_deref(), Some("Our campus"));
    }
}
