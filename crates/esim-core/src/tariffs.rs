//! Per-region tariff table.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::reply::{Button, Reply};
use crate::texts;

/// Suffix shared by every region callback identifier (`eu_tariff`, ...).
const CALLBACK_SUFFIX: &str = "_tariff";

/// A pricing region selectable from the tariffs menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Europe,
    Africa,
    Asia,
    America,
}

impl Region {
    /// All regions in menu order.
    pub const ALL: [Region; 4] = [
        Region::Europe,
        Region::Africa,
        Region::Asia,
        Region::America,
    ];

    /// Short region code.
    pub fn code(self) -> &'static str {
        match self {
            Region::Europe => "eu",
            Region::Africa => "africa",
            Region::Asia => "asia",
            Region::America => "us",
        }
    }

    /// Identifier carried by this region's button.
    pub fn callback_id(self) -> String {
        format!("{}{}", self.code(), CALLBACK_SUFFIX)
    }

    /// Parse a button identifier such as `eu_tariff`.
    pub fn from_callback_id(data: &str) -> Option<Region> {
        let code = data.strip_suffix(CALLBACK_SUFFIX)?;
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Label of the region's selection button.
    pub fn button_label(self) -> &'static str {
        match self {
            Region::Europe => "🇪🇺 Европа",
            Region::Africa => "🌍 Африка",
            Region::Asia => "🌏 Азия",
            Region::America => "🌎 Америка",
        }
    }
}

/// Display name and price listing for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTariff {
    pub name: &'static str,
    pub prices: &'static str,
}

impl RegionTariff {
    /// Price list reply with a single purchase link.
    pub fn reply(&self) -> Reply {
        Reply::html(texts::region_tariffs(self.name, self.prices)).with_buttons(vec![vec![
            Button::url(texts::PURCHASE_BUTTON, texts::PURCHASE_URL),
        ]])
    }
}

static TARIFFS: OnceLock<HashMap<Region, RegionTariff>> = OnceLock::new();

fn table() -> &'static HashMap<Region, RegionTariff> {
    TARIFFS.get_or_init(|| {
        HashMap::from([
            (
                Region::Europe,
                RegionTariff {
                    name: "Европа",
                    prices: "• 1 ГБ — от 356₽\n• 3 ГБ — от 807₽\n• 10 ГБ — от 1180₽\nи другие",
                },
            ),
            (
                Region::Africa,
                RegionTariff {
                    name: "Африка",
                    prices: "• 1 ГБ — от 661₽\n• 3 ГБ — от 1881₽\n• 10 ГБ — от 6153₽\nи другие",
                },
            ),
            (
                Region::Asia,
                RegionTariff {
                    name: "Азия",
                    prices: "• 1 ГБ — от 120₽\n• 3 ГБ — от 292₽\n• 10 ГБ — от 808₽\nи другие",
                },
            ),
            (
                Region::America,
                RegionTariff {
                    name: "Америка",
                    prices: "• 1 ГБ — от 148₽\n• 3 ГБ — от 341₽\n• 10 ГБ — от 1016₽\nи другие",
                },
            ),
        ])
    })
}

/// Look up a region's tariff entry.
pub fn tariff(region: Region) -> Option<&'static RegionTariff> {
    table().get(&region)
}

/// The region selection prompt with one button per region, two per row.
pub fn region_menu() -> Reply {
    let rows = Region::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|r| Button::callback(r.button_label(), r.callback_id()))
                .collect()
        })
        .collect();
    Reply::html(texts::TARIFFS_PROMPT).with_buttons(rows)
}
