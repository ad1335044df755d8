//! Word-picture matching game. The player selects one word and one picture;
//! after a short pending delay the pair resolves: the matching item pair
//! leaves both columns, a wrong pair just costs points.

use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::api::types::{event_kind, LessonEvent};
use crate::audio::tone::jingle;
use crate::content::{MatchItem, VocabCategory};
use crate::input::UiAction;

/// Delay between picking the second card and resolving the pair, so the
/// shell can show both selections briefly.
const PAIR_RESOLVE_DELAY: f32 = 0.5;
/// Delay before the celebration jingle after the last pair of a category.
const CELEBRATION_DELAY: f32 = 0.5;

const MATCH_POINTS: u32 = 10;
const MISS_PENALTY: u32 = 2;

#[derive(Debug)]
struct PendingPair {
    word: usize,
    image: usize,
    timer: f32,
}

#[derive(Debug)]
pub struct WordMatchTask {
    categories: Vec<VocabCategory>,
    items: Vec<MatchItem>,
    /// 0 = all categories, 1..=n = categories[n-1].
    category: usize,
    selected_word: Option<usize>,
    selected_image: Option<usize>,
    /// Matched item indexes, insertion order.
    matched: Vec<usize>,
    score: u32,
    attempts: u32,
    pending: Option<PendingPair>,
    celebration_timer: Option<f32>,
    /// Shuffled picture order over all items, fixed at init.
    image_order: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchCardView {
    pub index: usize,
    pub word: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchImageView {
    pub index: usize,
    pub image: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordMatchView {
    pub categories: Vec<String>,
    pub category: usize,
    pub words: Vec<MatchCardView>,
    pub images: Vec<MatchImageView>,
    pub score: u32,
    pub attempts: u32,
    pub matched: usize,
    pub total: usize,
    pub category_complete: bool,
}

impl WordMatchTask {
    pub fn new(categories: Vec<VocabCategory>, items: Vec<MatchItem>) -> Self {
        let image_order = (0..items.len()).collect();
        Self {
            categories,
            items,
            category: 0,
            selected_word: None,
            selected_image: None,
            matched: Vec::new(),
            score: 0,
            attempts: 0,
            pending: None,
            celebration_timer: None,
            image_order,
        }
    }

    /// Shuffle the picture column once, with the lesson RNG.
    pub fn init(&mut self, ctx: &mut LessonContext) {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        ctx.rng.shuffle(&mut order);
        self.image_order = order;
    }

    fn in_category(&self, item: usize) -> bool {
        if self.category == 0 {
            return true;
        }
        let id = &self.categories[self.category - 1].id;
        self.items[item].category == *id
    }

    fn category_items(&self) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&i| self.in_category(i))
            .collect()
    }

    fn category_complete(&self) -> bool {
        self.category_items()
            .iter()
            .all(|i| self.matched.contains(i))
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::SelectCategory(i) if i <= self.categories.len() => {
                self.category = i;
                self.selected_word = None;
                self.selected_image = None;
                self.pending = None;
            }
            UiAction::ChooseWord(i) => self.choose_word(i, ctx),
            UiAction::ChooseImage(i) => self.choose_image(i),
            UiAction::ResetTask => self.reset(),
            _ => {}
        }
    }

    fn selectable(&self, i: usize) -> bool {
        i < self.items.len()
            && self.pending.is_none()
            && !self.matched.contains(&i)
            && self.in_category(i)
    }

    fn choose_word(&mut self, i: usize, ctx: &mut LessonContext) {
        if !self.selectable(i) {
            return;
        }
        ctx.say(&self.items[i].word);
        self.selected_word = Some(i);
        self.arm_pending();
    }

    fn choose_image(&mut self, i: usize) {
        if !self.selectable(i) {
            return;
        }
        self.selected_image = Some(i);
        self.arm_pending();
    }

    fn arm_pending(&mut self) {
        if let (Some(word), Some(image)) = (self.selected_word, self.selected_image) {
            self.pending = Some(PendingPair {
                word,
                image,
                timer: PAIR_RESOLVE_DELAY,
            });
        }
    }

    pub fn tick(&mut self, dt: f32, ctx: &mut LessonContext) {
        if let Some(mut pending) = self.pending.take() {
            pending.timer -= dt;
            if pending.timer <= 0.0 {
                self.resolve_pair(pending.word, pending.image, ctx);
            } else {
                self.pending = Some(pending);
            }
        }
        if let Some(timer) = self.celebration_timer.take() {
            let timer = timer - dt;
            if timer <= 0.0 {
                ctx.play_tone(jingle::celebration());
            } else {
                self.celebration_timer = Some(timer);
            }
        }
    }

    fn resolve_pair(&mut self, word: usize, image: usize, ctx: &mut LessonContext) {
        self.attempts += 1;
        let correct = word == image;
        ctx.emit(
            LessonEvent::new(event_kind::PAIR_RESOLVED)
                .with_a(word as f32)
                .with_b(if correct { 1.0 } else { 0.0 }),
        );

        if correct {
            self.matched.push(word);
            self.score += MATCH_POINTS;
            ctx.play_tone(jingle::match_success());
            if self.category_complete() {
                ctx.emit(LessonEvent::new(event_kind::CELEBRATION).with_a(self.category as f32));
                self.celebration_timer = Some(CELEBRATION_DELAY);
                log::info!(
                    "word-match category {} complete ({} attempts)",
                    self.category,
                    self.attempts
                );
            }
        } else {
            self.score = self.score.saturating_sub(MISS_PENALTY);
        }

        self.selected_word = None;
        self.selected_image = None;
    }

    pub fn reset(&mut self) {
        self.selected_word = None;
        self.selected_image = None;
        self.matched.clear();
        self.score = 0;
        self.attempts = 0;
        self.pending = None;
        self.celebration_timer = None;
    }

    pub fn view(&self) -> WordMatchView {
        let words = self
            .category_items()
            .into_iter()
            .filter(|i| !self.matched.contains(i))
            .map(|i| MatchCardView {
                index: i,
                word: self.items[i].word.clone(),
                selected: self.selected_word == Some(i),
            })
            .collect();
        let images = self
            .image_order
            .iter()
            .copied()
            .filter(|i| self.in_category(*i) && !self.matched.contains(i))
            .map(|i| MatchImageView {
                index: i,
                image: self.items[i].image.clone(),
                selected: self.selected_image == Some(i),
            })
            .collect();

        let mut categories = vec!["All Categories".to_owned()];
        categories.extend(self.categories.iter().map(|c| c.title.clone()));

        WordMatchView {
            categories,
            category: self.category,
            words,
            images,
            score: self.score,
            attempts: self.attempts,
            matched: self.matched.len(),
            total: self.items.len(),
            category_complete: self.category_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> WordMatchTask {
        let categories = vec![
            VocabCategory {
                id: "booking".into(),
                title: "Booking & Tickets".into(),
            },
            VocabCategory {
                id: "luggage".into(),
                title: "Luggage & Baggage".into(),
            },
        ];
        let items = vec![
            MatchItem {
                id: "1".into(),
                word: "Visa".into(),
                image: "/images/visa.jpg.webp".into(),
                category: "booking".into(),
            },
            MatchItem {
                id: "2".into(),
                word: "Luggage".into(),
                image: "/images/luggage.jpg".into(),
                category: "luggage".into(),
            },
            MatchItem {
                id: "3".into(),
                word: "Fragile".into(),
                image: "/images/fragile.jpg".into(),
                category: "luggage".into(),
            },
        ];
        WordMatchTask::new(categories, items)
    }

    fn settle(task: &mut WordMatchTask, ctx: &mut LessonContext) {
        for _ in 0..40 {
            task.tick(1.0 / 60.0, ctx);
        }
    }

    #[test]
    fn correct_pair_scores_and_leaves_columns() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::ChooseWord(1), &mut ctx);
        task.handle_ui(UiAction::ChooseImage(1), &mut ctx);
        settle(&mut task, &mut ctx);

        let view = task.view();
        assert_eq!(view.score, 10);
        assert_eq!(view.attempts, 1);
        assert_eq!(view.matched, 1);
        assert!(view.words.iter().all(|w| w.index != 1));
        assert!(view.images.iter().all(|i| i.index != 1));
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == event_kind::PAIR_RESOLVED && e.b == 1.0));
    }

    #[test]
    fn wrong_pair_costs_points_floored_at_zero() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::ChooseWord(1), &mut ctx);
        task.handle_ui(UiAction::ChooseImage(2), &mut ctx);
        settle(&mut task, &mut ctx);

        let view = task.view();
        assert_eq!(view.score, 0);
        assert_eq!(view.attempts, 1);
        assert_eq!(view.matched, 0);
    }

    #[test]
    fn pair_does_not_resolve_before_delay() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::ChooseWord(0), &mut ctx);
        task.handle_ui(UiAction::ChooseImage(0), &mut ctx);
        task.tick(0.1, &mut ctx);
        assert_eq!(task.view().matched, 0);
        settle(&mut task, &mut ctx);
        assert_eq!(task.view().matched, 1);
    }

    #[test]
    fn matched_items_cannot_be_reselected() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::ChooseWord(1), &mut ctx);
        task.handle_ui(UiAction::ChooseImage(1), &mut ctx);
        settle(&mut task, &mut ctx);

        task.handle_ui(UiAction::ChooseWord(1), &mut ctx);
        assert_eq!(task.view().words.iter().find(|w| w.selected).map(|w| w.index), None);
    }

    #[test]
    fn category_completion_celebrates_once() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        // Luggage category = items 1 and 2
        task.handle_ui(UiAction::SelectCategory(2), &mut ctx);
        task.handle_ui(UiAction::ChooseWord(1), &mut ctx);
        task.handle_ui(UiAction::ChooseImage(1), &mut ctx);
        settle(&mut task, &mut ctx);
        assert!(!ctx.events.iter().any(|e| e.kind == event_kind::CELEBRATION));

        task.handle_ui(UiAction::ChooseWord(2), &mut ctx);
        task.handle_ui(UiAction::ChooseImage(2), &mut ctx);
        settle(&mut task, &mut ctx);
        let celebrations = ctx
            .events
            .iter()
            .filter(|e| e.kind == event_kind::CELEBRATION)
            .count();
        assert_eq!(celebrations, 1);
        assert!(task.view().category_complete);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut a = task();
        let mut b = task();
        a.init(&mut LessonContext::new(9));
        b.init(&mut LessonContext::new(9));
        assert_eq!(a.image_order, b.image_order);
    }

    #[test]
    fn reset_restores_everything() {
        let mut task = task();
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::ChooseWord(1), &mut ctx);
        task.handle_ui(UiAction::ChooseImage(1), &mut ctx);
        settle(&mut task, &mut ctx);
        task.handle_ui(UiAction::ResetTask, &mut ctx);

        let view = task.view();
        assert_eq!(view.score, 0);
        assert_eq!(view.attempts, 0);
        assert_eq!(view.matched, 0);
        assert_eq!(view.words.len(), 3);
    }
}
