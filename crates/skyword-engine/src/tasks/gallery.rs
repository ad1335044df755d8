//! Study gallery: categorized entries (vocabulary words or sentence
//! patterns) with audio playback and a per-entry translation toggle.

use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::content::{GalleryEntry, VocabCategory};
use crate::input::UiAction;

#[derive(Debug)]
pub struct GalleryTask {
    categories: Vec<VocabCategory>,
    entries: Vec<GalleryEntry>,
    category: usize,
    selected: Option<usize>,
    translation_for: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryEntryView {
    pub text: String,
    pub note: String,
    pub translation: String,
    pub examples: Vec<String>,
    pub selected: bool,
    pub translation_shown: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub categories: Vec<String>,
    pub category: usize,
    pub entries: Vec<GalleryEntryView>,
}

impl GalleryTask {
    pub fn new(categories: Vec<VocabCategory>, entries: Vec<GalleryEntry>) -> Self {
        Self {
            categories,
            entries,
            category: 0,
            selected: None,
            translation_for: None,
        }
    }

    /// Indexes into `entries` for the current category, display order.
    fn shown(&self) -> Vec<usize> {
        let id = &self.categories[self.category].id;
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.category == *id)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::SelectCategory(i) if i < self.categories.len() => {
                self.category = i;
                self.selected = None;
                self.translation_for = None;
            }
            UiAction::SelectItem(i) => {
                if let Some(&entry) = self.shown().get(i) {
                    self.selected = Some(entry);
                    self.play(entry, ctx);
                }
            }
            UiAction::PlayItem(i) => {
                if let Some(&entry) = self.shown().get(i) {
                    self.play(entry, ctx);
                }
            }
            UiAction::ToggleTranslation(i) => {
                if let Some(&entry) = self.shown().get(i) {
                    self.translation_for = if self.translation_for == Some(entry) {
                        None
                    } else {
                        Some(entry)
                    };
                }
            }
            _ => {}
        }
    }

    fn play(&self, entry: usize, ctx: &mut LessonContext) {
        let entry = &self.entries[entry];
        if !entry.clip.is_empty() {
            ctx.play_clip(&entry.clip);
        } else {
            ctx.say(&entry.text);
        }
    }

    pub fn reset(&mut self) {
        self.category = 0;
        self.selected = None;
        self.translation_for = None;
    }

    pub fn view(&self) -> GalleryView {
        let entries = self
            .shown()
            .into_iter()
            .map(|i| {
                let e = &self.entries[i];
                GalleryEntryView {
                    text: e.text.clone(),
                    note: e.note.clone(),
                    translation: e.translation.clone(),
                    examples: e.examples.clone(),
                    selected: self.selected == Some(i),
                    translation_shown: self.translation_for == Some(i),
                }
            })
            .collect();
        GalleryView {
            categories: self.categories.iter().map(|c| c.title.clone()).collect(),
            category: self.category,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioRequest;

    fn task() -> GalleryTask {
        let categories = vec![
            VocabCategory {
                id: "booking".into(),
                title: "Booking & Tickets".into(),
            },
            VocabCategory {
                id: "status".into(),
                title: "Flight Status".into(),
            },
        ];
        let entries = vec![
            GalleryEntry {
                id: "visa".into(),
                text: "Visa".into(),
                note: "/ˈviːzə/".into(),
                translation: "Разрешение на въезд в страну".into(),
                clip: "/airportvocabulary/Visa.mp3".into(),
                category: "booking".into(),
                examples: vec![],
            },
            GalleryEntry {
                id: "delayed".into(),
                text: "Delayed".into(),
                note: String::new(),
                translation: "Рейс опаздывает".into(),
                clip: String::new(),
                category: "status".into(),
                examples: vec!["My flight is delayed".into()],
            },
        ];
        GalleryTask::new(categories, entries)
    }

    #[test]
    fn category_filters_entries() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        assert_eq!(task.view().entries.len(), 1);
        assert_eq!(task.view().entries[0].text, "Visa");

        task.handle_ui(UiAction::SelectCategory(1), &mut ctx);
        assert_eq!(task.view().entries[0].text, "Delayed");
    }

    #[test]
    fn select_plays_clip_or_speech() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::SelectItem(0), &mut ctx);
        assert!(matches!(ctx.audio[0], AudioRequest::Clip { .. }));

        ctx.clear_frame_data();
        task.handle_ui(UiAction::SelectCategory(1), &mut ctx);
        task.handle_ui(UiAction::SelectItem(0), &mut ctx);
        assert!(matches!(ctx.audio[0], AudioRequest::Speech { .. }));
    }

    #[test]
    fn translation_toggles_per_entry() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::ToggleTranslation(0), &mut ctx);
        assert!(task.view().entries[0].translation_shown);
        task.handle_ui(UiAction::ToggleTranslation(0), &mut ctx);
        assert!(!task.view().entries[0].translation_shown);
    }

    #[test]
    fn out_of_range_actions_are_ignored() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::SelectItem(9), &mut ctx);
        task.handle_ui(UiAction::SelectCategory(9), &mut ctx);
        assert!(ctx.audio.is_empty());
        assert_eq!(task.view().category, 0);
    }
}
