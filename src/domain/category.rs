//! Domain types representing subscription categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Groups subscriptions for spend breakdowns.
///
/// Variants serialize as their localized display names, which is also the
/// key used by the persisted blob.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Category {
    #[serde(rename = "Streaming")]
    Streaming,
    #[serde(rename = "Software")]
    Software,
    #[serde(rename = "Música")]
    Music,
    #[serde(rename = "Jogos")]
    Games,
    #[serde(rename = "Notícias")]
    News,
    #[default]
    #[serde(rename = "Outro")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Streaming,
        Category::Software,
        Category::Music,
        Category::Games,
        Category::News,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Streaming => "Streaming",
            Category::Software => "Software",
            Category::Music => "Música",
            Category::Games => "Jogos",
            Category::News => "Notícias",
            Category::Other => "Outro",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| {
                category.label().to_lowercase() == needle.to_lowercase()
                    || format!("{category:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown category `{needle}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_localized_names() {
        let json = serde_json::to_string(&Category::News).unwrap();
        assert_eq!(json, "\"Notícias\"");
        let parsed: Category = serde_json::from_str("\"Música\"").unwrap();
        assert_eq!(parsed, Category::Music);
    }

    #[test]
    fn parses_localized_and_variant_names() {
        assert_eq!("jogos".parse::<Category>(), Ok(Category::Games));
        assert_eq!("Games".parse::<Category>(), Ok(Category::Games));
        assert!("Podcasts".parse::<Category>().is_err());
    }
}
