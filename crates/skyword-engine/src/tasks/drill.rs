//! Pronunciation drill: a tabbed card grid (alphabet letters or numbers).
//! Selecting a card plays its recorded clip; letter keys jump to the
//! matching card.

use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::content::DrillSection;
use crate::input::UiAction;

#[derive(Debug)]
pub struct DrillTask {
    sections: Vec<DrillSection>,
    section: usize,
    selected: Option<usize>,
    /// When set, the complete button only works from the last section
    /// (the numbers drill walks learners through every tab first).
    complete_from_last_section: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrillCardView {
    pub label: String,
    pub ipa: String,
    pub phonetic: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrillView {
    pub sections: Vec<String>,
    pub section: usize,
    pub cards: Vec<DrillCardView>,
    pub can_complete: bool,
}

impl DrillTask {
    pub fn new(sections: Vec<DrillSection>, complete_from_last_section: bool) -> Self {
        Self {
            sections,
            section: 0,
            selected: None,
            complete_from_last_section,
        }
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::SelectSection(i) if i < self.sections.len() => {
                self.section = i;
                self.selected = None;
            }
            UiAction::SelectItem(i) => self.select_card(i, ctx),
            UiAction::PlayItem(i) => self.play_card(i, ctx),
            _ => {}
        }
    }

    /// Letter keys select the card whose label starts with that letter.
    pub fn handle_key(&mut self, key_code: u32, ctx: &mut LessonContext) {
        let Some(pressed) = char::from_u32(key_code) else {
            return;
        };
        let index = self.sections[self.section]
            .cards
            .iter()
            .position(|card| {
                card.label
                    .chars()
                    .next()
                    .is_some_and(|first| first.eq_ignore_ascii_case(&pressed))
            });
        if let Some(i) = index {
            self.select_card(i, ctx);
        }
    }

    fn select_card(&mut self, i: usize, ctx: &mut LessonContext) {
        if i < self.sections[self.section].cards.len() {
            self.selected = Some(i);
            self.play_card(i, ctx);
        }
    }

    fn play_card(&self, i: usize, ctx: &mut LessonContext) {
        let Some(card) = self.sections[self.section].cards.get(i) else {
            return;
        };
        if !card.clip.is_empty() {
            ctx.play_clip(&card.clip);
        } else if !card.phonetic.is_empty() {
            ctx.say(&card.phonetic);
        } else {
            ctx.say(&card.label);
        }
    }

    pub fn can_complete(&self) -> bool {
        !self.complete_from_last_section || self.section + 1 == self.sections.len()
    }

    pub fn reset(&mut self) {
        self.section = 0;
        self.selected = None;
    }

    pub fn view(&self) -> DrillView {
        let cards = self.sections[self.section]
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| DrillCardView {
                label: card.label.clone(),
                ipa: card.ipa.clone(),
                phonetic: card.phonetic.clone(),
                selected: self.selected == Some(i),
            })
            .collect();
        DrillView {
            sections: self.sections.iter().map(|s| s.title.clone()).collect(),
            section: self.section,
            cards,
            can_complete: self.can_complete(),
        }
    }
}
