pub mod queue;

/// Numeric codes for UI events pushed by the shell.
/// Must stay in sync with the TypeScript side.
pub mod ui_code {
    pub const SELECT_TASK: u32 = 1;
    pub const NEXT_TASK: u32 = 2;
    pub const PREV_TASK: u32 = 3;
    pub const COMPLETE_TASK: u32 = 4;
    pub const RESET_PROGRESS: u32 = 5;
    pub const RESET_TASK: u32 = 6;

    pub const SELECT_SECTION: u32 = 10;
    pub const SELECT_CATEGORY: u32 = 11;
    pub const SELECT_ITEM: u32 = 12;
    pub const NEXT_ITEM: u32 = 13;
    pub const PREV_ITEM: u32 = 14;
    pub const TOGGLE_REVEAL: u32 = 15;
    pub const TOGGLE_TRANSLATION: u32 = 16;
    pub const PLAY_ITEM: u32 = 17;
    pub const PLAY_LINE: u32 = 18;
    pub const CHOOSE_WORD: u32 = 19;
    pub const CHOOSE_IMAGE: u32 = 20;
    pub const APPEND_WORD: u32 = 21;
    pub const REMOVE_WORD: u32 = 22;
    pub const CHECK_ANSWER: u32 = 23;
    pub const NEXT_ROUND: u32 = 24;
    pub const PLAY_ANSWER: u32 = 25;
}

/// A decoded UI event. Button presses in the shell arrive as numeric
/// `InputEvent::Ui` triples; tasks and the lesson shell consume this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SelectTask(usize),
    NextTask,
    PrevTask,
    CompleteTask,
    ResetProgress,
    ResetTask,

    SelectSection(usize),
    SelectCategory(usize),
    SelectItem(usize),
    NextItem,
    PrevItem,
    ToggleReveal,
    ToggleTranslation(usize),
    PlayItem(usize),
    PlayLine(usize),
    ChooseWord(usize),
    ChooseImage(usize),
    AppendWord(usize),
    RemoveWord(usize),
    CheckAnswer,
    NextRound,
    PlayAnswer,
}

impl UiAction {
    /// Decode a raw UI event. Unknown codes are ignored (None).
    pub fn decode(kind: u32, a: f32, _b: f32, _c: f32) -> Option<Self> {
        let index = if a.is_finite() && a >= 0.0 {
            a as usize
        } else {
            0
        };
        let action = match kind {
            ui_code::SELECT_TASK => UiAction::SelectTask(index),
            ui_code::NEXT_TASK => UiAction::NextTask,
            ui_code::PREV_TASK => UiAction::PrevTask,
            ui_code::COMPLETE_TASK => UiAction::CompleteTask,
            ui_code::RESET_PROGRESS => UiAction::ResetProgress,
            ui_code::RESET_TASK => UiAction::ResetTask,
            ui_code::SELECT_SECTION => UiAction::SelectSection(index),
            ui_code::SELECT_CATEGORY => UiAction::SelectCategory(index),
            ui_code::SELECT_ITEM => UiAction::SelectItem(index),
            ui_code::NEXT_ITEM => UiAction::NextItem,
            ui_code::PREV_ITEM => UiAction::PrevItem,
            ui_code::TOGGLE_REVEAL => UiAction::ToggleReveal,
            ui_code::TOGGLE_TRANSLATION => UiAction::ToggleTranslation(index),
            ui_code::PLAY_ITEM => UiAction::PlayItem(index),
            ui_code::PLAY_LINE => UiAction::PlayLine(index),
            ui_code::CHOOSE_WORD => UiAction::ChooseWord(index),
            ui_code::CHOOSE_IMAGE => UiAction::ChooseImage(index),
            ui_code::APPEND_WORD => UiAction::AppendWord(index),
            ui_code::REMOVE_WORD => UiAction::RemoveWord(index),
            ui_code::CHECK_ANSWER => UiAction::CheckAnswer,
            ui_code::NEXT_ROUND => UiAction::NextRound,
            ui_code::PLAY_ANSWER => UiAction::PlayAnswer,
            _ => return None,
        };
        Some(action)
    }
}
