//! Marketing tile context.
//!
//! Up to nine tiles, each shown either inside the front-page header box or as a
//! separate tile row below it, depending on `togglemarketing`.

use serde::Serialize;
use std::collections::BTreeMap;

/// Number of configurable tiles.
pub const TILE_COUNT: u8 = 9;

/// Where marketing tiles are placed (`togglemarketing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TilePlacement {
    /// Tiles are not shown (`0` or anything unrecognised).
    #[default]
    Hidden,
    /// Inside the front-page header box (`1`).
    HeaderBox,
    /// As a tile row on the front page (`2`).
    TileRow,
}

impl TilePlacement {
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        match value {
            "1" => Self::HeaderBox,
            "2" => Self::TileRow,
            _ => Self::Hidden,
        }
    }
}

/// Settings of a single tile (`marketingN`, `marketingNcontent`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileSettings {
    pub title: Option<String>,
    pub content: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub button_target: Option<String>,
    /// Stored file name of the tile image; the host resolves it to a URL.
    pub image: Option<String>,
}

/// All marketing tile settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingSettings {
    pub placement: TilePlacement,
    pub tiles: Vec<TileSettings>,
}

impl Default for MarketingSettings {
    /// Every slot present and empty, as read from an empty settings store.
    fn default() -> Self {
        Self::from_settings(&BTreeMap::new())
    }
}

impl MarketingSettings {
    #[must_use]
    pub fn from_settings(config: &BTreeMap<String, String>) -> Self {
        let value = |key: String| crate::text(config, &key).map(String::from);
        let tiles = (1..=TILE_COUNT)
            .map(|n| TileSettings {
                title: value(format!("marketing{n}")),
                content: value(format!("marketing{n}content")),
                button_text: value(format!("marketing{n}buttontext")),
                button_url: value(format!("marketing{n}buttonurl")),
                button_target: value(format!("marketing{n}target")),
                image: value(format!("marketing{n}image")),
            })
            .collect();

        Self {
            placement: crate::text(config, "togglemarketing")
                .map_or(TilePlacement::Hidden, TilePlacement::from_setting),
            tiles,
        }
    }
}

/// Call-to-action link of a tile. Rendering it is left to the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileButton {
    pub text: Option<String>,
    pub url: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketTile {
    pub has_tile: bool,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Image setting key (`marketingNimage`) when an image is stored.
    pub image: Option<String>,
    pub button: TileButton,
}

/// Template context for one tile placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketingContext {
    pub has_market_tiles: bool,
    pub tiles: Vec<MarketTile>,
}

/// Builds the tiles for `placement`.
///
/// A tile is shown when it has a title and the configured placement matches.
/// Every configured slot is returned so templates keep fixed positions.
///
/// # Examples
///
/// ```
/// use coursenav::context::{marketing_tiles, MarketingSettings, TilePlacement, TileSettings};
///
/// let mut settings = MarketingSettings { placement: TilePlacement::TileRow, ..Default::default() };
/// settings.tiles[0] = TileSettings { title: Some("Open day".into()), ..Default::default() };
///
/// assert!(marketing_tiles(&settings, TilePlacement::TileRow).has_market_tiles);
/// assert!(!marketing_tiles(&settings, TilePlacement::HeaderBox).has_market_tiles);
/// ```
#[must_use]
pub fn marketing_tiles(settings: &MarketingSettings, placement: TilePlacement) -> MarketingContext {
    let placed = placement != TilePlacement::Hidden && settings.placement == placement;

    let tiles: Vec<MarketTile> = settings
        .tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let has_tile = placed && tile.title.is_some();
            MarketTile {
                has_tile,
                title: tile.title.clone().filter(|_| has_tile),
                content: tile.content.clone(),
                image: tile.image.as_ref().map(|_| format!("marketing{}image", index + 1)),
                button: TileButton {
                    text: tile.button_text.clone(),
                    url: tile.button_url.clone(),
                    target: tile.button_target.clone(),
                },
            }
        })
        .collect();

    let has_market_tiles = tiles.iter().any(|tile| tile.has_tile);
    tracing::debug!(?placement, shown = has_market_tiles, "marketing tiles built");

    MarketingContext {
        has_market_tiles,
        tiles,
    }
}
