//! Vocabulary flashcards: one card at a time per category, picture side up.
//! Revealing the word side speaks it; navigating hides the word again.

use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::content::{VocabCategory, VocabEntry};
use crate::input::UiAction;

#[derive(Debug)]
pub struct FlashcardsTask {
    categories: Vec<VocabCategory>,
    deck: Vec<VocabEntry>,
    category: usize,
    index: usize,
    revealed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardView {
    pub word: String,
    pub transcription: String,
    pub meaning: String,
    pub translation: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardsView {
    pub categories: Vec<String>,
    pub category: usize,
    pub index: usize,
    pub total: usize,
    pub revealed: bool,
    pub card: Option<FlashcardView>,
}

impl FlashcardsTask {
    pub fn new(categories: Vec<VocabCategory>, deck: Vec<VocabEntry>) -> Self {
        Self {
            categories,
            deck,
            category: 0,
            index: 0,
            revealed: false,
        }
    }

    /// Indexes into `deck` for the current category.
    fn cards(&self) -> Vec<usize> {
        let id = &self.categories[self.category].id;
        self.deck
            .iter()
            .enumerate()
            .filter(|(_, e)| e.category == *id)
            .map(|(i, _)| i)
            .collect()
    }

    fn current(&self) -> Option<&VocabEntry> {
        self.cards().get(self.index).map(|&i| &self.deck[i])
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::SelectCategory(i) if i < self.categories.len() => {
                self.category = i;
                self.index = 0;
                self.revealed = false;
            }
            UiAction::NextItem => {
                let total = self.cards().len();
                if self.index + 1 < total {
                    self.index += 1;
                    self.revealed = false;
                }
            }
            UiAction::PrevItem => {
                if self.index > 0 {
                    self.index -= 1;
                    self.revealed = false;
                }
            }
            UiAction::ToggleReveal => {
                self.revealed = !self.revealed;
                if self.revealed {
                    self.speak_current(ctx);
                }
            }
            UiAction::PlayItem(_) => self.speak_current(ctx),
            _ => {}
        }
    }

    fn speak_current(&self, ctx: &mut LessonContext) {
        if let Some(card) = self.current() {
            ctx.say(&card.word);
        }
    }

    pub fn reset(&mut self) {
        self.category = 0;
        self.index = 0;
        self.revealed = false;
    }

    pub fn view(&self) -> FlashcardsView {
        let total = self.cards().len();
        let card = self.current().map(|c| FlashcardView {
            word: c.word.clone(),
            transcription: c.transcription.clone(),
            meaning: c.meaning.clone(),
            translation: c.translation.clone(),
            image: c.image.clone(),
        });
        FlashcardsView {
            categories: self.categories.iter().map(|c| c.title.clone()).collect(),
            category: self.category,
            index: self.index,
            total,
            revealed: self.revealed,
            card,
        }
    }
}
