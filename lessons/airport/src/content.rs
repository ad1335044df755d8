//! Embedded content tables for the airport lesson, parsed and validated
//! once at startup.

use skyword_engine::content::{
    self, ContentError, DialogScript, DrillSection, GalleryEntry, MatchItem, SentenceTemplate,
    VocabCategory, VocabEntry, WordSearchSpec,
};

const CATEGORIES_JSON: &str = include_str!("../content/categories.json");
const VOCABULARY_JSON: &str = include_str!("../content/vocabulary.json");
const ALPHABET_JSON: &str = include_str!("../content/alphabet.json");
const NUMBERS_JSON: &str = include_str!("../content/numbers.json");
const PATTERNS_JSON: &str = include_str!("../content/patterns.json");
const SENTENCES_JSON: &str = include_str!("../content/sentences.json");
const DIALOG_JSON: &str = include_str!("../content/dialog.json");
const WORD_SEARCH_JSON: &str = include_str!("../content/wordsearch.json");

pub struct AirportContent {
    pub categories: Vec<VocabCategory>,
    pub vocabulary: Vec<VocabEntry>,
    pub alphabet: Vec<DrillSection>,
    pub numbers: Vec<DrillSection>,
    pub pattern_categories: Vec<VocabCategory>,
    pub patterns: Vec<GalleryEntry>,
    pub sentences: Vec<SentenceTemplate>,
    pub dialog: DialogScript,
    pub word_search: WordSearchSpec,
}

fn pattern_categories() -> Vec<VocabCategory> {
    [
        ("flight", "Flights"),
        ("destination", "Destinations"),
        ("accommodation", "Accommodation"),
        ("airport", "At the Airport"),
        ("questions", "Questions"),
    ]
    .iter()
    .map(|(id, title)| VocabCategory {
        id: (*id).to_owned(),
        title: (*title).to_owned(),
    })
    .collect()
}

impl AirportContent {
    pub fn load() -> Result<Self, ContentError> {
        let categories: Vec<VocabCategory> = content::parse_json(CATEGORIES_JSON)?;
        let vocabulary: Vec<VocabEntry> = content::parse_json(VOCABULARY_JSON)?;
        content::validate_vocab(&vocabulary, &categories)?;

        let alphabet: Vec<DrillSection> = content::parse_json(ALPHABET_JSON)?;
        content::validate_sections(&alphabet)?;
        let numbers: Vec<DrillSection> = content::parse_json(NUMBERS_JSON)?;
        content::validate_sections(&numbers)?;

        let pattern_categories = pattern_categories();
        let patterns: Vec<GalleryEntry> = content::parse_json(PATTERNS_JSON)?;
        content::validate_gallery(&patterns, &pattern_categories)?;

        let sentences: Vec<SentenceTemplate> = content::parse_json(SENTENCES_JSON)?;
        content::validate_templates(&sentences)?;

        let dialog: DialogScript = content::parse_json(DIALOG_JSON)?;
        content::validate_dialog(&dialog)?;

        // Grid/word consistency is checked by WordSearchPuzzle::new
        let word_search: WordSearchSpec = content::parse_json(WORD_SEARCH_JSON)?;

        Ok(Self {
            categories,
            vocabulary,
            alphabet,
            numbers,
            pattern_categories,
            patterns,
            sentences,
            dialog,
            word_search,
        })
    }

    /// The matching game pairs each vocabulary word with its picture.
    pub fn match_items(&self) -> Vec<MatchItem> {
        self.vocabulary
            .iter()
            .map(|e| MatchItem {
                id: e.id.clone(),
                word: e.word.clone(),
                image: e.image.clone(),
                category: e.category.clone(),
            })
            .collect()
    }

    /// The vocabulary browse task shows the same entries as a gallery.
    pub fn vocab_gallery(&self) -> Vec<GalleryEntry> {
        self.vocabulary
            .iter()
            .map(|e| GalleryEntry {
                id: e.id.clone(),
                text: e.word.clone(),
                note: e.meaning.clone(),
                translation: e.translation.clone(),
                clip: e.clip.clone(),
                category: e.category.clone(),
                examples: Vec::new(),
            })
            .collect()
    }
}
