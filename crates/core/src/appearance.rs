//! Presentation descriptors derived from a card's color and style.

use crate::model::{CardColor, CardStyle, FontSize};

/// Background treatment for a card face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBackground {
    pub color: CardColor,
    pub image: Option<String>,
    pub image_size: Option<&'static str>,
    pub shadow: Option<String>,
    pub border: Option<String>,
}

/// Typography for a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTypography {
    pub family: &'static str,
    pub letter_spacing: &'static str,
    pub text_shadow: Option<&'static str>,
    pub weight: Option<&'static str>,
}

#[must_use]
pub fn background(color: CardColor, style: CardStyle) -> CardBackground {
    match style {
        CardStyle::Modern => CardBackground {
            color,
            image: Some(format!(
                "linear-gradient(135deg, {color}, {})",
                color.adjust(-30)
            )),
            image_size: None,
            shadow: Some("0 10px 20px rgba(0,0,0,0.15)".to_string()),
            border: None,
        },
        CardStyle::Vintage => CardBackground {
            color,
            image: Some(format!(
                "radial-gradient(circle, {color}, {})",
                color.adjust(-20)
            )),
            image_size: None,
            shadow: Some("inset 0 0 30px rgba(0,0,0,0.2)".to_string()),
            border: Some("4px double rgba(255,255,255,0.3)".to_string()),
        },
        CardStyle::Minimalist => CardBackground {
            color,
            image: None,
            image_size: None,
            shadow: None,
            border: Some(format!("2px solid {}", color.adjust(-30))),
        },
        CardStyle::Playful => {
            let light = color.adjust(15);
            CardBackground {
                color,
                image: Some(format!(
                    "linear-gradient(45deg, {color} 25%, {light} 25%, {light} 50%, {color} 50%, {color} 75%, {light} 75%)"
                )),
                image_size: Some("24px 24px"),
                shadow: Some(format!(
                    "0 8px 20px rgba(0,0,0,0.2), 0 0 0 8px {}",
                    color.adjust(-10)
                )),
                border: None,
            }
        }
    }
}

#[must_use]
pub fn typography(style: CardStyle) -> CardTypography {
    match style {
        CardStyle::Modern => CardTypography {
            family: "Poppins, sans-serif",
            letter_spacing: "0.5px",
            text_shadow: None,
            weight: None,
        },
        CardStyle::Vintage => CardTypography {
            family: "Georgia, serif",
            letter_spacing: "0.5px",
            text_shadow: Some("1px 1px 1px rgba(0,0,0,0.2)"),
            weight: None,
        },
        CardStyle::Minimalist => CardTypography {
            family: "Arial, sans-serif",
            letter_spacing: "1px",
            text_shadow: None,
            weight: Some("300"),
        },
        CardStyle::Playful => CardTypography {
            family: "Comic Sans MS, cursive",
            letter_spacing: "0.5px",
            text_shadow: Some("2px 2px 0px rgba(0,0,0,0.1)"),
            weight: None,
        },
    }
}

/// Inline CSS for the card face.
#[must_use]
pub fn card_css(color: CardColor, style: CardStyle) -> String {
    let bg = background(color, style);
    let mut css = format!("background-color: {};", bg.color);
    css.push_str(&format!(
        " background-image: {};",
        bg.image.as_deref().unwrap_or("none")
    ));
    if let Some(size) = bg.image_size {
        css.push_str(&format!(" background-size: {size};"));
    }
    css.push_str(&format!(
        " box-shadow: {};",
        bg.shadow.as_deref().unwrap_or("none")
    ));
    if let Some(border) = bg.border {
        css.push_str(&format!(" border: {border};"));
    }
    css
}

/// Inline CSS for the question text.
#[must_use]
pub fn text_css(size: FontSize, style: CardStyle) -> String {
    let font = typography(style);
    let mut css = format!(
        "font-size: {}px; font-family: {}; letter-spacing: {};",
        size.px(),
        font.family,
        font.letter_spacing
    );
    if let Some(shadow) = font.text_shadow {
        css.push_str(&format!(" text-shadow: {shadow};"));
    }
    if let Some(weight) = font.weight {
        css.push_str(&format!(" font-weight: {weight};"));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose() -> CardColor {
        CardColor::parse("#ff6b6b").unwrap()
    }

    #[test]
    fn modern_darkens_towards_the_corner() {
        let bg = background(rose(), CardStyle::Modern);
        assert_eq!(
            bg.image.as_deref(),
            Some("linear-gradient(135deg, #ff6b6b, #e14d4d)")
        );
        assert!(bg.border.is_none());
    }

    #[test]
    fn minimalist_is_flat_with_a_border() {
        let css = card_css(rose(), CardStyle::Minimalist);
        assert!(css.contains("background-image: none;"));
        assert!(css.contains("box-shadow: none;"));
        assert!(css.contains("border: 2px solid #e14d4d;"));
    }

    #[test]
    fn playful_tiles_the_pattern() {
        let css = card_css(rose(), CardStyle::Playful);
        assert!(css.contains("background-size: 24px 24px;"));
        assert!(css.contains("#ff7a7a"));
    }

    #[test]
    fn text_css_uses_size_and_family() {
        let css = text_css(FontSize::Small, CardStyle::Vintage);
        assert!(css.starts_with("font-size: 16px; font-family: Georgia, serif;"));
        assert!(css.contains("text-shadow"));
    }
}
