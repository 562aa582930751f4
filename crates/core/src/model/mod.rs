mod card;
mod category;
mod ids;
mod options;
mod question;

pub use card::Card;
pub use category::{CATEGORIES, Category, CategoryId, CategoryParseError};
pub use ids::{CardId, CardIdSequence};
pub use options::{
    CardColor, CardColorError, CardStyle, CustomizationOptions, FontSize, NamedColor, PALETTE,
    QuestionCount, QuestionCountError,
};
pub use question::{QuestionError, QuestionText};
