use couple_core::appearance::{card_css, text_css};
use couple_core::model::{
    Card, CardColor, CardId, CardStyle, CategoryId, CustomizationOptions, FontSize, PALETTE,
};
use couple_core::viewer::CardViewer;
use services::QuestionCatalog;

/// A card face ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFaceVm {
    pub id: CardId,
    pub question: String,
    pub emoji: Option<String>,
    pub category_name: &'static str,
    pub card_css: String,
    pub text_css: String,
    pub style_class: String,
}

impl From<&Card> for CardFaceVm {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            question: card.question.as_str().to_owned(),
            emoji: card.has_emoji().then(|| card.emoji.clone()),
            category_name: card.category.descriptor().name,
            card_css: card_css(card.color, card.style),
            text_css: text_css(card.font_size, card.style),
            style_class: format!("card-face card-face--{}", card.style.as_str()),
        }
    }
}

#[must_use]
pub fn map_card_faces(cards: &[Card]) -> Vec<CardFaceVm> {
    cards.iter().map(CardFaceVm::from).collect()
}

/// State of the card modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerVm {
    pub card: CardFaceVm,
    pub position: String,
    pub can_page: bool,
}

/// `None` while the viewer is closed or has nothing to show.
#[must_use]
pub fn map_viewer(viewer: &CardViewer) -> Option<ViewerVm> {
    if !viewer.is_open() {
        return None;
    }
    let card = viewer.current_card()?;
    Some(ViewerVm {
        card: CardFaceVm::from(card),
        position: viewer.position_label().unwrap_or_default(),
        can_page: viewer.cards().len() > 1,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptionVm {
    pub id: CategoryId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub selected: bool,
    pub available: bool,
}

/// Every category in display order, marking the ones the catalog could not load.
#[must_use]
pub fn map_category_options(
    catalog: &QuestionCatalog,
    selected: CategoryId,
) -> Vec<CategoryOptionVm> {
    CategoryId::ALL
        .into_iter()
        .map(|id| {
            let descriptor = id.descriptor();
            CategoryOptionVm {
                id,
                name: descriptor.name,
                emoji: descriptor.emoji,
                description: descriptor.description,
                selected: id == selected,
                available: !catalog.pool(id).is_empty(),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwatchVm {
    pub color: CardColor,
    pub name: &'static str,
    pub css: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleOptionVm {
    pub style: CardStyle,
    pub name: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeOptionVm {
    pub size: FontSize,
    pub label: &'static str,
    pub selected: bool,
}

/// Controls of the customization panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomizationVm {
    pub swatches: Vec<SwatchVm>,
    pub styles: Vec<StyleOptionVm>,
    pub sizes: Vec<SizeOptionVm>,
    pub color_hex: String,
    pub question_count: usize,
    pub include_emojis: bool,
    pub preview_card_css: String,
    pub preview_text_css: String,
}

#[must_use]
pub fn map_customization(options: &CustomizationOptions) -> CustomizationVm {
    CustomizationVm {
        swatches: PALETTE
            .iter()
            .map(|named| SwatchVm {
                color: named.color,
                name: named.name,
                css: format!("background-color: {};", named.color),
                selected: named.color == options.card_color,
            })
            .collect(),
        styles: CardStyle::ALL
            .into_iter()
            .map(|style| StyleOptionVm {
                style,
                name: style.name(),
                description: style.description(),
                selected: style == options.card_style,
            })
            .collect(),
        sizes: FontSize::ALL
            .into_iter()
            .map(|size| SizeOptionVm {
                size,
                label: size.label(),
                selected: size == options.font_size,
            })
            .collect(),
        color_hex: options.card_color.to_string(),
        question_count: options.question_count.get(),
        include_emojis: options.include_emojis,
        preview_card_css: card_css(options.card_color, options.card_style),
        preview_text_css: text_css(options.font_size, options.card_style),
    }
}
