use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of card categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Romantic,
    Fun,
    Deep,
    Future,
    Memories,
}

impl CategoryId {
    /// Every category, in display order.
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Romantic,
        CategoryId::Fun,
        CategoryId::Deep,
        CategoryId::Future,
        CategoryId::Memories,
    ];

    /// Stable identifier used in URLs and payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryId::Romantic => "romantic",
            CategoryId::Fun => "fun",
            CategoryId::Deep => "deep",
            CategoryId::Future => "future",
            CategoryId::Memories => "memories",
        }
    }

    /// Descriptor record for this category.
    #[must_use]
    pub fn descriptor(self) -> &'static Category {
        match self {
            CategoryId::Romantic => &CATEGORIES[0],
            CategoryId::Fun => &CATEGORIES[1],
            CategoryId::Deep => &CATEGORIES[2],
            CategoryId::Future => &CATEGORIES[3],
            CategoryId::Memories => &CATEGORIES[4],
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category: {raw}")]
pub struct CategoryParseError {
    pub raw: String,
}

impl FromStr for CategoryId {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryParseError { raw: s.to_string() })
    }
}

/// Display metadata attached to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// Category descriptors, indexed in `CategoryId::ALL` order.
pub static CATEGORIES: [Category; 5] = [
    Category {
        id: CategoryId::Romantic,
        name: "Romantic",
        emoji: "❤️",
        description: "Intimate questions to deepen your connection",
    },
    Category {
        id: CategoryId::Fun,
        name: "Fun & Playful",
        emoji: "😄",
        description: "Lighthearted questions to share laughs together",
    },
    Category {
        id: CategoryId::Deep,
        name: "Deep Connection",
        emoji: "✨",
        description: "Profound questions about life, values and dreams",
    },
    Category {
        id: CategoryId::Future,
        name: "Future Plans",
        emoji: "🔮",
        description: "Explore your hopes and aspirations together",
    },
    Category {
        id: CategoryId::Memories,
        name: "Memories",
        emoji: "📸",
        description: "Reminisce about your shared experiences",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_match_their_ids() {
        for id in CategoryId::ALL {
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn parse_accepts_stable_ids() {
        assert_eq!("deep".parse::<CategoryId>().unwrap(), CategoryId::Deep);
        assert_eq!(" Memories ".parse::<CategoryId>().unwrap(), CategoryId::Memories);
        assert!("spicy".parse::<CategoryId>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&CategoryId::Future).unwrap();
        assert_eq!(json, "\"future\"");
    }
}
