// Ugkey Field Interface
// The capability surface the host environment provides for text-entry fields

use crate::mode::WritingDirection;

/// One attachable text-entry field, as seen by the engine.
///
/// All offsets are char indices into `value`. Implementations must report
/// live state on every call; the engine never caches field contents, because
/// the host may mutate the field between keystrokes.
pub trait TextInput {
    /// Logical name identifying the field. This is the key the attach policy
    /// and the mode controller work with.
    fn name(&self) -> &str;

    /// Current text content.
    fn value(&self) -> String;

    /// Replace the whole text content.
    fn set_value(&mut self, value: String);

    /// Selection as (start, end) char offsets. `start == end` for a bare
    /// caret.
    fn selection(&self) -> (usize, usize);

    /// Collapse the selection to a caret at `offset`.
    fn set_caret(&mut self, offset: usize);

    /// Writing-direction presentation property.
    fn direction(&self) -> WritingDirection;

    /// Update the writing-direction presentation property.
    fn set_direction(&mut self, direction: WritingDirection);
}

/// Enumerates the candidate text-entry fields at attachment time.
pub trait FieldProvider {
    /// Names of every field currently eligible for attachment, before the
    /// allow/deny policy is applied.
    fn field_names(&self) -> Vec<String>;
}

/// Replace the field's current selection with `text` and put the caret
/// immediately after the inserted text.
///
/// With a collapsed selection this inserts at the caret. Out-of-range
/// selection offsets are clamped to the current content.
pub fn replace_selection(field: &mut dyn TextInput, text: &str) {
    let (start, end) = field.selection();
    let mut chars: Vec<char> = field.value().chars().collect();

    let end = end.min(chars.len());
    let start = start.min(end);

    chars.splice(start..end, text.chars());
    field.set_value(chars.into_iter().collect());
    field.set_caret(start + text.chars().count());
}
