use serde::{Deserialize, Serialize};

use crate::model::{CardColor, CardId, CardStyle, CategoryId, FontSize, QuestionText};

/// One generated question card plus its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: QuestionText,
    /// Empty when emojis are turned off.
    pub emoji: String,
    pub color: CardColor,
    pub font_size: FontSize,
    pub style: CardStyle,
    pub category: CategoryId,
}

impl Card {
    #[must_use]
    pub fn has_emoji(&self) -> bool {
        !self.emoji.is_empty()
    }
}
