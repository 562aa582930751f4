use crate::model::Card;

/// Gesture that dismissed the viewer. Every reason leads to the same closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    OutsideClick,
    Escape,
}

/// Pages through the most recently generated cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardViewer {
    cards: Vec<Card>,
    current: usize,
    open: bool,
}

impl CardViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the card set and show the first card.
    pub fn open(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.current = 0;
        self.open = true;
    }

    /// Show the kept cards again without resetting the position.
    pub fn reopen(&mut self) {
        if !self.cards.is_empty() {
            self.open = true;
        }
    }

    /// Hide the viewer. The cards stay until the next generation.
    pub fn close(&mut self, _reason: DismissReason) {
        self.open = false;
    }

    pub fn next(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + 1) % len;
    }

    pub fn previous(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + len - 1) % len;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// One-based "i / n" label, or `None` without cards.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        if self.cards.is_empty() {
            return None;
        }
        Some(format!("{} / {}", self.current + 1, self.cards.len()))
    }
}
