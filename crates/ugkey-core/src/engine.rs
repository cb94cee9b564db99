// Ugkey Insertion Engine
// Decides what a keystroke becomes inside an attached field

use std::sync::Arc;

use crate::field::TextInput;
use crate::input::KeyInput;
use crate::layout::{self, KeyCharMap, HAMZA};
use crate::mode::{KeyboardMode, ModeController};

/// Text surrounding the caret at the moment a keystroke arrives.
///
/// Rebuilt from the live field on every keystroke and discarded afterwards.
/// Never cached across events: the host may mutate the field in between, so
/// the preceding character must always come from current field state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionContext {
    /// Character immediately before the caret; `None` at field start.
    pub preceding: Option<char>,
    /// Caret offset in chars. When a range is selected this is the selection
    /// start, which covers both the empty- and non-empty-selection cases.
    pub caret: usize,
}

impl InsertionContext {
    pub fn new(preceding: Option<char>, caret: usize) -> Self {
        Self { preceding, caret }
    }

    /// The context of an empty field, or of a caret at offset 0.
    pub fn at_field_start() -> Self {
        Self {
            preceding: None,
            caret: 0,
        }
    }

    /// Derive the context from a field's current content and selection.
    pub fn from_field(field: &dyn TextInput) -> Self {
        let (start, _) = field.selection();
        let preceding = if start == 0 {
            None
        } else {
            field.value().chars().nth(start - 1)
        };
        Self {
            preceding,
            caret: start,
        }
    }
}

/// Outcome of one keystroke in an attached field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertDecision {
    /// Replace the current selection with this text and advance the caret
    /// past it.
    Insert(String),
    /// Swallow the keystroke; it must produce no visible effect.
    Suppress,
    /// Leave the keystroke to the field's default behavior.
    PassThrough,
}

/// Computes insertion decisions for character keystrokes.
///
/// Holds the shared layout table and the mode controller that gates it. The
/// engine itself is stateless per call and can be shared freely across
/// fields and threads.
#[derive(Debug)]
pub struct InsertionEngine {
    layout: Arc<KeyCharMap>,
    modes: Arc<ModeController>,
    smart_hamza: bool,
}

impl InsertionEngine {
    /// Create an engine over a layout and mode controller.
    pub fn new(layout: Arc<KeyCharMap>, modes: Arc<ModeController>, smart_hamza: bool) -> Self {
        Self {
            layout,
            modes,
            smart_hamza,
        }
    }

    /// The layout table this engine consults.
    pub fn layout(&self) -> &KeyCharMap {
        &self.layout
    }

    /// Whether the smart-hamza rule is enabled.
    pub fn smart_hamza(&self) -> bool {
        self.smart_hamza
    }

    /// Decide the fate of one character keystroke in the named field.
    pub fn compute_insertion(
        &self,
        field: &str,
        input: &KeyInput,
        context: &InsertionContext,
    ) -> InsertDecision {
        // Command combos and Latin-mode fields are never intercepted.
        if input.has_command_modifier()
            || self.modes.current_mode(field) != KeyboardMode::Native
        {
            return InsertDecision::PassThrough;
        }

        let mapped = match self.layout.lookup(input.ch) {
            Some(c) => c,
            None => {
                // Unmapped Latin letters (mostly capitals) must not leak into
                // native-mode text. Digits, control characters, and the rest
                // keep their default behavior.
                return if input.ch.is_ascii_alphabetic() {
                    InsertDecision::Suppress
                } else {
                    InsertDecision::PassThrough
                };
            }
        };

        let mut text = String::with_capacity(8);
        if self.smart_hamza && needs_hamza(mapped, context.preceding) {
            text.push(HAMZA);
        }
        text.push(mapped);

        InsertDecision::Insert(text)
    }
}

/// The hamza rule: a vowel takes a leading hamza at the start of the field,
/// after anything that is not an Arabic letter, or after another vowel
/// (hiatus position).
fn needs_hamza(ch: char, preceding: Option<char>) -> bool {
    if !layout::is_uyghur_vowel(ch) {
        return false;
    }

    match preceding {
        None => true,
        Some(prev) => !layout::is_arabic_letter(prev) || layout::is_uyghur_vowel(prev),
    }
}
