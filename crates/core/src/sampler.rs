use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::model::{Card, CardIdSequence, Category, CustomizationOptions, QuestionText};

/// Pick up to `count` distinct questions from `pool` in random order.
///
/// Repeated entries in the pool are collapsed first, so the result never
/// contains the same question twice. An empty pool yields an empty result.
pub fn sample_questions<R: Rng + ?Sized>(
    pool: &[QuestionText],
    count: usize,
    rng: &mut R,
) -> Vec<QuestionText> {
    let mut seen = HashSet::with_capacity(pool.len());
    let mut candidates = Vec::with_capacity(pool.len());
    for question in pool {
        if seen.insert(question.as_str()) {
            candidates.push(question.clone());
        }
    }

    candidates.as_mut_slice().shuffle(rng);
    candidates.truncate(count);
    candidates
}

/// Wraps sampled questions into cards using the current options.
pub struct CardBuilder<'a> {
    category: &'a Category,
    options: &'a CustomizationOptions,
}

impl<'a> CardBuilder<'a> {
    #[must_use]
    pub fn new(category: &'a Category, options: &'a CustomizationOptions) -> Self {
        Self { category, options }
    }

    /// Build one card per question, assigning fresh ids from `ids`.
    pub fn build(
        self,
        questions: impl IntoIterator<Item = QuestionText>,
        ids: &mut CardIdSequence,
    ) -> Vec<Card> {
        let emoji = if self.options.include_emojis {
            self.category.emoji.to_string()
        } else {
            String::new()
        };

        questions
            .into_iter()
            .map(|question| Card {
                id: ids.next_id(),
                question,
                emoji: emoji.clone(),
                color: self.options.card_color,
                font_size: self.options.font_size,
                style: self.options.card_style,
                category: self.category.id,
            })
            .collect()
    }
}

/// Sample from `pool` and build the resulting cards in one step.
pub fn generate_cards<R: Rng + ?Sized>(
    category: &Category,
    pool: &[QuestionText],
    options: &CustomizationOptions,
    ids: &mut CardIdSequence,
    rng: &mut R,
) -> Vec<Card> {
    let picked = sample_questions(pool, options.question_count.get(), rng);
    CardBuilder::new(category, options).build(picked, ids)
}
