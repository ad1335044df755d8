//! Check-in dialog practice: a scripted agent/passenger transcript with
//! per-line speech playback and translation toggles, plus a key-phrase list.

use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::audio::Voice;
use crate::content::{DialogScript, Speaker};
use crate::input::UiAction;

#[derive(Debug)]
pub struct DialogTask {
    script: DialogScript,
    translation_for: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogLineView {
    pub speaker: Speaker,
    pub text: String,
    pub translation: String,
    pub translation_shown: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseView {
    pub speaker: Speaker,
    pub text: String,
    pub translation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogView {
    pub video: String,
    pub lines: Vec<DialogLineView>,
    pub phrases: Vec<PhraseView>,
}

fn voice_for(speaker: Speaker) -> Voice {
    match speaker {
        Speaker::Agent => Voice::Agent,
        Speaker::Passenger => Voice::Passenger,
    }
}

impl DialogTask {
    pub fn new(script: DialogScript) -> Self {
        Self {
            script,
            translation_for: None,
        }
    }

    pub fn handle_ui(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::PlayLine(i) => {
                if let Some(line) = self.script.lines.get(i) {
                    ctx.say_with(&line.text, voice_for(line.speaker));
                }
            }
            UiAction::PlayItem(i) => {
                if let Some(phrase) = self.script.phrases.get(i) {
                    ctx.say_with(&phrase.text, voice_for(phrase.speaker));
                }
            }
            UiAction::ToggleTranslation(i) => {
                if i < self.script.lines.len() {
                    self.translation_for = if self.translation_for == Some(i) {
                        None
                    } else {
                        Some(i)
                    };
                }
            }
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.translation_for = None;
    }

    pub fn view(&self) -> DialogView {
        DialogView {
            video: self.script.video.clone(),
            lines: self
                .script
                .lines
                .iter()
                .enumerate()
                .map(|(i, line)| DialogLineView {
                    speaker: line.speaker,
                    text: line.text.clone(),
                    translation: line.translation.clone(),
                    translation_shown: self.translation_for == Some(i),
                })
                .collect(),
            phrases: self
                .script
                .phrases
                .iter()
                .map(|p| PhraseView {
                    speaker: p.speaker,
                    text: p.text.clone(),
                    translation: p.translation.clone(),
                })
                .collect(),
        }
    }
}
