//! Data model for the static lesson content tables.
//!
//! Tables ship as JSON embedded in the lesson crate and are parsed once at
//! init. Anything malformed is a setup error surfaced here, never a runtime
//! condition: gameplay code can assume ids resolve and categories exist.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content table {0:?} must not be empty")]
    EmptyTable(&'static str),
    #[error("duplicate id {id:?} in table {table:?}")]
    DuplicateId { table: &'static str, id: String },
    #[error("entry {id:?} references unknown category {category:?}")]
    UnknownCategory { id: String, category: String },
    #[error("sentence template {0:?}: expected sentence is not built from its word bank")]
    BadTemplate(String),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// A display category (e.g. "Booking & Tickets").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabCategory {
    pub id: String,
    pub title: String,
}

/// One vocabulary entry, shared by the flashcards and gallery tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: String,
    pub word: String,
    #[serde(default)]
    pub transcription: String,
    pub meaning: String,
    pub translation: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub clip: String,
    pub category: String,
}

/// One card in a pronunciation drill (a letter or a number).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillCard {
    pub label: String,
    #[serde(default)]
    pub ipa: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub clip: String,
}

/// A tab of drill cards (consonants, vowels, 1-12, tens, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSection {
    pub id: String,
    pub title: String,
    pub cards: Vec<DrillCard>,
}

/// One study-gallery entry: a word or a sentence pattern with optional
/// usage examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub note: String,
    pub translation: String,
    #[serde(default)]
    pub clip: String,
    pub category: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// One word/picture pair for the matching game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchItem {
    pub id: String,
    pub word: String,
    pub image: String,
    pub category: String,
}

/// One sentence-builder round: a word bank and the expected sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceTemplate {
    pub id: String,
    pub words: Vec<String>,
    pub correct: String,
    pub translation: String,
}

/// Who speaks a dialog line. Controls the speech voice register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Agent,
    Passenger,
}

/// One line of the scripted dialog (also used for the key-phrase list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogLine {
    pub speaker: Speaker,
    pub text: String,
    pub translation: String,
}

/// The check-in dialog: transcript plus highlighted key phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogScript {
    pub lines: Vec<DialogLine>,
    #[serde(default)]
    pub phrases: Vec<DialogLine>,
    #[serde(default)]
    pub video: String,
}

/// One word-search target with its display category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetWord {
    pub word: String,
    pub category: String,
}

/// The word-search puzzle content: grid rows and target words.
/// Grid/word consistency is enforced by `WordSearchPuzzle::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSearchSpec {
    pub rows: Vec<String>,
    pub words: Vec<TargetWord>,
}

/// Parse one embedded JSON table.
pub fn parse_json<T: DeserializeOwned>(json: &str) -> Result<T, ContentError> {
    Ok(serde_json::from_str(json)?)
}

fn check_ids<'a, I>(table: &'static str, ids: I) -> Result<(), ContentError>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(ContentError::DuplicateId {
                table,
                id: id.to_owned(),
            });
        }
        seen.push(id);
    }
    if seen.is_empty() {
        return Err(ContentError::EmptyTable(table));
    }
    Ok(())
}

fn check_category(
    id: &str,
    category: &str,
    categories: &[VocabCategory],
) -> Result<(), ContentError> {
    if categories.iter().any(|c| c.id == category) {
        Ok(())
    } else {
        Err(ContentError::UnknownCategory {
            id: id.to_owned(),
            category: category.to_owned(),
        })
    }
}

pub fn validate_vocab(
    entries: &[VocabEntry],
    categories: &[VocabCategory],
) -> Result<(), ContentError> {
    check_ids("vocabulary", entries.iter().map(|e| e.id.as_str()))?;
    for entry in entries {
        check_category(&entry.id, &entry.category, categories)?;
    }
    Ok(())
}

pub fn validate_gallery(
    entries: &[GalleryEntry],
    categories: &[VocabCategory],
) -> Result<(), ContentError> {
    check_ids("gallery", entries.iter().map(|e| e.id.as_str()))?;
    for entry in entries {
        check_category(&entry.id, &entry.category, categories)?;
    }
    Ok(())
}

pub fn validate_match_items(
    items: &[MatchItem],
    categories: &[VocabCategory],
) -> Result<(), ContentError> {
    check_ids("match", items.iter().map(|i| i.id.as_str()))?;
    for item in items {
        check_category(&item.id, &item.category, categories)?;
    }
    Ok(())
}

pub fn validate_sections(sections: &[DrillSection]) -> Result<(), ContentError> {
    check_ids("drill sections", sections.iter().map(|s| s.id.as_str()))?;
    for section in sections {
        if section.cards.is_empty() {
            return Err(ContentError::EmptyTable("drill cards"));
        }
    }
    Ok(())
}

/// A template is valid when the expected sentence uses exactly the words in
/// its bank (each word once, any order the player could produce).
pub fn validate_templates(templates: &[SentenceTemplate]) -> Result<(), ContentError> {
    check_ids("sentences", templates.iter().map(|t| t.id.as_str()))?;
    for template in templates {
        let mut bank: Vec<&str> = template.words.iter().map(String::as_str).collect();
        bank.sort_unstable();
        let mut expected: Vec<&str> = template.correct.split_whitespace().collect();
        expected.sort_unstable();
        if bank != expected {
            return Err(ContentError::BadTemplate(template.id.clone()));
        }
    }
    Ok(())
}

pub fn validate_dialog(script: &DialogScript) -> Result<(), ContentError> {
    if script.lines.is_empty() {
        return Err(ContentError::EmptyTable("dialog lines"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<VocabCategory> {
        vec![
            VocabCategory {
                id: "booking".into(),
                title: "Booking & Tickets".into(),
            },
            VocabCategory {
                id: "checkin".into(),
                title: "Check-in & Boarding".into(),
            },
        ]
    }

    #[test]
    fn parse_vocab_entry() {
        let json = r#"[{
            "id": "gate",
            "word": "Gate",
            "transcription": "/ɡeɪt/",
            "meaning": "Area where you board the plane",
            "translation": "Место посадки",
            "image": "/images/gate.jpg.webp",
            "clip": "/airportvocabulary/Gate.mp3",
            "category": "checkin"
        }]"#;
        let entries: Vec<VocabEntry> = parse_json(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "Gate");
        assert!(validate_vocab(&entries, &categories()).is_ok());
    }

    #[test]
    fn vocab_with_unknown_category_fails() {
        let entries = vec![VocabEntry {
            id: "x".into(),
            word: "X".into(),
            transcription: String::new(),
            meaning: "m".into(),
            translation: "t".into(),
            image: String::new(),
            clip: String::new(),
            category: "nope".into(),
        }];
        assert!(matches!(
            validate_vocab(&entries, &categories()),
            Err(ContentError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn duplicate_ids_fail() {
        let entry = VocabEntry {
            id: "dup".into(),
            word: "A".into(),
            transcription: String::new(),
            meaning: "m".into(),
            translation: "t".into(),
            image: String::new(),
            clip: String::new(),
            category: "booking".into(),
        };
        let entries = vec![entry.clone(), entry];
        assert!(matches!(
            validate_vocab(&entries, &categories()),
            Err(ContentError::DuplicateId { .. })
        ));
    }

    #[test]
    fn empty_table_fails() {
        assert!(matches!(
            validate_vocab(&[], &categories()),
            Err(ContentError::EmptyTable(_))
        ));
    }

    #[test]
    fn template_permutation_check() {
        let good = SentenceTemplate {
            id: "1".into(),
            words: vec!["My".into(), "flight".into(), "is".into(), "delayed".into()],
            correct: "My flight is delayed".into(),
            translation: "Мой рейс задержан".into(),
        };
        assert!(validate_templates(&[good.clone()]).is_ok());

        let bad = SentenceTemplate {
            correct: "My flight is cancelled".into(),
            ..good
        };
        assert!(matches!(
            validate_templates(&[bad]),
            Err(ContentError::BadTemplate(_))
        ));
    }

    #[test]
    fn dialog_speaker_parses_lowercase() {
        let json = r#"{
            "lines": [
                { "speaker": "agent", "text": "Hello, may I see your passport, please?",
                  "translation": "Здравствуйте, можно посмотреть ваш паспорт?" },
                { "speaker": "passenger", "text": "Here you go.", "translation": "Вот, пожалуйста" }
            ]
        }"#;
        let script: DialogScript = parse_json(json).unwrap();
        assert_eq!(script.lines[0].speaker, Speaker::Agent);
        assert!(script.phrases.is_empty());
        assert!(validate_dialog(&script).is_ok());
    }

    #[test]
    fn word_search_spec_parses() {
        let json = r#"{
            "rows": ["GATE", "XXXX"],
            "words": [{ "word": "GATE", "category": "gate" }]
        }"#;
        let spec: WordSearchSpec = parse_json(json).unwrap();
        assert_eq!(spec.rows.len(), 2);
        assert_eq!(spec.words[0].word, "GATE");
    }
}
