//! Region tiers — injected geographic knowledge for the location scorer.
//!
//! A region groups an inner metro ring and a broader extended ring. Two cities
//! in the same inner ring score higher than two cities that only share the
//! extended ring (which always includes the inner ring).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionTier {
    Inner,
    Extended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub inner: Vec<String>,
    #[serde(default)]
    pub extended: Vec<String>,
}

impl Region {
    fn in_inner(&self, city: &str) -> bool {
        self.inner.iter().any(|c| same_city(c, city))
    }

    fn in_extended(&self, city: &str) -> bool {
        self.in_inner(city) || self.extended.iter().any(|c| same_city(c, city))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionTiers {
    pub regions: Vec<Region>,
}

impl RegionTiers {
    /// Loads regions from a JSON file: `{"regions": [{"name", "inner", "extended"}]}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read region tiers {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Region tiers {} is not valid JSON", path.display()))
    }

    /// The closest tier shared by both cities, if any.
    pub fn shared_tier(&self, a: &str, b: &str) -> Option<RegionTier> {
        if self.regions.iter().any(|r| r.in_inner(a) && r.in_inner(b)) {
            return Some(RegionTier::Inner);
        }
        if self.regions.iter().any(|r| r.in_extended(a) && r.in_extended(b)) {
            return Some(RegionTier::Extended);
        }
        None
    }

    pub fn builtin() -> Self {
        let region = |name: &str, inner: &[&str], extended: &[&str]| Region {
            name: name.to_string(),
            inner: inner.iter().map(|c| c.to_string()).collect(),
            extended: extended.iter().map(|c| c.to_string()).collect(),
        };

        Self {
            regions: vec![
                region(
                    "center",
                    &[
                        "Tel Aviv", "Ramat Gan", "Givatayim", "Bnei Brak", "Holon", "Bat Yam",
                        "Petah Tikva", "Herzliya",
                    ],
                    &[
                        "Rishon LeZion", "Rehovot", "Ness Ziona", "Lod", "Ramla", "Yehud",
                        "Or Yehuda", "Kiryat Ono", "Ramat HaSharon", "Ra'anana", "Kfar Saba",
                        "Hod HaSharon", "Netanya", "Rosh HaAyin", "Modiin", "Airport City",
                    ],
                ),
                region(
                    "jerusalem",
                    &["Jerusalem", "Mevaseret Zion"],
                    &["Beit Shemesh", "Modiin", "Ma'ale Adumim"],
                ),
                region(
                    "north",
                    &["Haifa", "Kiryat Ata", "Kiryat Bialik", "Kiryat Motzkin", "Nesher", "Tirat Carmel"],
                    &["Yokneam", "Acre", "Nahariya", "Karmiel", "Hadera", "Caesarea", "Zichron Yaakov"],
                ),
                region(
                    "south",
                    &["Beer Sheva", "Omer"],
                    &["Ashdod", "Ashkelon", "Kiryat Gat", "Dimona", "Sderot"],
                ),
            ],
        }
    }
}

fn normalize_city(city: &str) -> String {
    city.trim()
        .to_lowercase()
        .replace(['-', '\''], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Tel Aviv-Yafo" names the same place as "tel aviv".
pub(crate) fn same_city(a: &str, b: &str) -> bool {
    let a = normalize_city(a);
    let b = normalize_city(b);
    !a.is_empty() && !b.is_empty() && (a == b || a.contains(&b) || b.contains(&a))
}
