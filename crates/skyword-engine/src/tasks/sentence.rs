//! Sentence builder: arrange a shuffled word bank into the expected
//! sentence. Checking compares the exact joined string; each template is one
//! round and the final round ends with a winner arpeggio.

use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::api::types::{event_kind, LessonEvent};
use crate::audio::tone::jingle;
use crate::content::SentenceTemplate;
use crate::input::UiAction;

const CORRECT_POINTS: u32 = 10;
const WRONG_PENALTY: u32 = 2;
/// Delay before the winner arpeggio after the last template is solved.
const WINNER_DELAY: f32 = 0.5;

#[derive(Debug)]
pub struct SentenceTask {
    templates: Vec<SentenceTemplate>,
    current: usize,
    /// Shuffled display order of each template's word bank, fixed at init.
    bank_order: Vec<Vec<usize>>,
    /// Word indexes (into the template's bank) in the order the player
    /// placed them.
    arranged: Vec<usize>,
    /// Result of the last check for the current arrangement.
    result: Option<bool>,
    score: u32,
    attempts: u32,
    winner_timer: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BankWordView {
    pub index: usize,
    pub word: String,
    pub used: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceView {
    pub current: usize,
    pub total: usize,
    pub score: u32,
    pub attempts: u32,
    pub bank: Vec<BankWordView>,
    pub arranged: Vec<String>,
    pub result: Option<bool>,
    pub translation: String,
    pub can_complete: bool,
}

impl SentenceTask {
    pub fn new(templates: Vec<SentenceTemplate>) -> Self {
        let bank_order = templates
            .iter()
            .map(|t| (0..t.words.len()).collect())
            .collect();
        Self {
            templates,
            current: 0,
            bank_order,
            arranged: Vec::new(),
            result: None,
            score: 0,
            attempts: 0,
            winner_timer: None,
        }
    }

    /// Shuffle every word bank once, with the lesson RNG.
    pub fn init(&mut self, ctx: &mut LessonContext) {
        for order in &mut self.bank_order {
            ctx.rng.shuffle(order);
        }
    }

    fn template(&self) -> &SentenceTemplate {
        &self.templates[self.current]
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::AppendWord(i) => self.append_word(i),
            UiAction::RemoveWord(pos) => self.remove_word(pos),
            UiAction::CheckAnswer => self.check(ctx),
            UiAction::NextRound => self.next_round(),
            UiAction::ResetTask => {
                self.arranged.clear();
                self.result = None;
            }
            UiAction::PlayAnswer => {
                ctx.say(&self.template().correct);
            }
            _ => {}
        }
    }

    fn append_word(&mut self, i: usize) {
        if self.result == Some(true) {
            return;
        }
        if i < self.template().words.len() && !self.arranged.contains(&i) {
            self.arranged.push(i);
        }
    }

    fn remove_word(&mut self, pos: usize) {
        if self.result == Some(true) {
            return;
        }
        if pos < self.arranged.len() {
            self.arranged.remove(pos);
        }
    }

    fn check(&mut self, ctx: &mut LessonContext) {
        if self.arranged.is_empty() {
            return;
        }
        let sentence = self
            .arranged
            .iter()
            .map(|&i| self.template().words[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let correct = sentence == self.template().correct;

        self.attempts += 1;
        self.result = Some(correct);
        ctx.emit(
            LessonEvent::new(event_kind::SENTENCE_CHECKED)
                .with_a(self.current as f32)
                .with_b(if correct { 1.0 } else { 0.0 }),
        );

        if correct {
            self.score += CORRECT_POINTS;
            ctx.play_tone(jingle::sentence_success());
            if self.current + 1 == self.templates.len() {
                self.winner_timer = Some(WINNER_DELAY);
            }
        } else {
            self.score = self.score.saturating_sub(WRONG_PENALTY);
        }
    }

    fn next_round(&mut self) {
        if self.current + 1 < self.templates.len() {
            self.current += 1;
            self.arranged.clear();
            self.result = None;
        }
    }

    pub fn tick(&mut self, dt: f32, ctx: &mut LessonContext) {
        if let Some(timer) = self.winner_timer.take() {
            let timer = timer - dt;
            if timer <= 0.0 {
                ctx.play_tone(jingle::arpeggio_winner());
            } else {
                self.winner_timer = Some(timer);
            }
        }
    }

    /// The task completes from its last round, like the original's
    /// final-screen complete button.
    pub fn can_complete(&self) -> bool {
        self.current + 1 == self.templates.len()
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.arranged.clear();
        self.result = None;
        self.score = 0;
        self.attempts = 0;
        self.winner_timer = None;
    }

    pub fn view(&self) -> SentenceView {
        let template = self.template();
        let bank = self.bank_order[self.current]
            .iter()
            .map(|&i| BankWordView {
                index: i,
                word: template.words[i].clone(),
                used: self.arranged.contains(&i),
            })
            .collect();
        SentenceView {
            current: self.current,
            total: self.templates.len(),
            score: self.score,
            attempts: self.attempts,
            bank,
            arranged: self
                .arranged
                .iter()
                .map(|&i| template.words[i].clone())
                .collect(),
            result: self.result,
            translation: template.translation.clone(),
            can_complete: self.can_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioRequest;

    fn templates() -> Vec<SentenceTemplate> {
        vec![
            SentenceTemplate {
                id: "9".into(),
                words: vec!["My".into(), "flight".into(), "is".into(), "delayed".into()],
                correct: "My flight is delayed".into(),
                translation: "Мой рейс задержан".into(),
            },
            SentenceTemplate {
                id: "5".into(),
                words: vec![
                    "I".into(),
                    "need".into(),
                    "to".into(),
                    "check".into(),
                    "in".into(),
                ],
                correct: "I need to check in".into(),
                translation: "Мне нужно зарегистрироваться".into(),
            },
        ]
    }

    fn build(task: &mut SentenceTask, ctx: &mut LessonContext, order: &[usize]) {
        for &i in order {
            task.handle_ui(UiAction::AppendWord(i), ctx);
        }
    }

    #[test]
    fn correct_sentence_scores_ten() {
        let mut task = SentenceTask::new(templates());
        let mut ctx = LessonContext::new(1);
        build(&mut task, &mut ctx, &[0, 1, 2, 3]);
        task.handle_ui(UiAction::CheckAnswer, &mut ctx);

        let view = task.view();
        assert_eq!(view.result, Some(true));
        assert_eq!(view.score, 10);
        assert_eq!(view.attempts, 1);
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == event_kind::SENTENCE_CHECKED && e.b == 1.0));
        assert!(matches!(ctx.audio[0], AudioRequest::Tone(_)));
    }

    #[test]
    fn wrong_order_penalized_and_floored() {
        let mut task = SentenceTask::new(templates());
        let mut ctx = LessonContext::new(1);
        build(&mut task, &mut ctx, &[3, 2, 1, 0]);
        task.handle_ui(UiAction::CheckAnswer, &mut ctx);

        let view = task.view();
        assert_eq!(view.result, Some(false));
        assert_eq!(view.score, 0);
    }

    #[test]
    fn words_are_used_once_and_removable() {
        let mut task = SentenceTask::new(templates());
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::AppendWord(0), &mut ctx);
        task.handle_ui(UiAction::AppendWord(0), &mut ctx);
        assert_eq!(task.view().arranged, vec!["My".to_owned()]);

        task.handle_ui(UiAction::AppendWord(1), &mut ctx);
        task.handle_ui(UiAction::RemoveWord(0), &mut ctx);
        assert_eq!(task.view().arranged, vec!["flight".to_owned()]);
        assert!(!task.view().bank.iter().any(|w| w.index == 0 && w.used));
    }

    #[test]
    fn empty_check_is_ignored() {
        let mut task = SentenceTask::new(templates());
        let mut ctx = LessonContext::new(1);
        task.handle_ui(UiAction::CheckAnswer, &mut ctx);
        assert_eq!(task.view().attempts, 0);
        assert_eq!(task.view().result, None);
    }

    #[test]
    fn next_round_advances_and_clears() {
        let mut task = SentenceTask::new(templates());
        let mut ctx = LessonContext::new(1);
        build(&mut task, &mut ctx, &[0, 1, 2, 3]);
        task.handle_ui(UiAction::CheckAnswer, &mut ctx);
        task.handle_ui(UiAction::NextRound, &mut ctx);

        let view = task.view();
        assert_eq!(view.current, 1);
        assert!(view.arranged.is_empty());
        assert_eq!(view.result, None);
        assert!(view.can_complete);
    }

    #[test]
    fn winner_arpeggio_after_last_round() {
        let mut task = SentenceTask::new(templates());
        let mut ctx = LessonContext::new(1);
        build(&mut task, &mut ctx, &[0, 1, 2, 3]);
        task.handle_ui(UiAction::CheckAnswer, &mut ctx);
        task.handle_ui(UiAction::NextRound, &mut ctx);
        build(&mut task, &mut ctx, &[0, 1, 2, 3, 4]);
        ctx.clear_frame_data();
        task.handle_ui(UiAction::CheckAnswer, &mut ctx);

        // success chirp immediately, arpeggio after the delay
        assert_eq!(ctx.audio.len(), 1);
        for _ in 0..40 {
            task.tick(1.0 / 60.0, &mut ctx);
        }
        assert_eq!(ctx.audio.len(), 2);
    }

    #[test]
    fn shuffled_bank_is_deterministic_and_complete() {
        let mut a = SentenceTask::new(templates());
        let mut b = SentenceTask::new(templates());
        a.init(&mut LessonContext::new(5));
        b.init(&mut LessonContext::new(5));
        assert_eq!(a.bank_order, b.bank_order);

        let mut indexes: Vec<usize> = a.view().bank.iter().map(|w| w.index).collect();
        indexes.sort_unstable();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }
}
