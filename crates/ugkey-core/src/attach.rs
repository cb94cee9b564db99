// Ugkey Attachment Layer
// Binds the engine to host fields per the configured policy and routes events

use std::sync::Arc;

use crate::engine::{InsertDecision, InsertionContext, InsertionEngine};
use crate::field::{self, FieldProvider, TextInput};
use crate::input::{Command, KeyInput};
use crate::layout::KeyCharMap;
use crate::mode::ModeController;
use crate::settings::Settings;

/// What the host must do with the event it just delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The event was consumed; cancel its default effect in the same event
    /// turn.
    Handled,
    /// Default field behavior applies unmodified.
    NotHandled,
}

/// Wires fields, modes, and the insertion engine together.
///
/// The host delivers events here field by field; the binder decides whether
/// each one is intercepted and applies the outcome to the field. Events on
/// fields the policy did not attach are never intercepted.
pub struct Binder {
    engine: InsertionEngine,
    modes: Arc<ModeController>,
    settings: Settings,
}

impl Binder {
    /// Build a binder from settings, creating the layout table, insertion
    /// engine, and mode controller. An inert configuration yields a binder
    /// that attaches to nothing.
    pub fn from_settings(settings: Settings) -> Self {
        let modes = Arc::new(ModeController::new());
        let layout = Arc::new(KeyCharMap::new());
        let engine = InsertionEngine::new(layout, Arc::clone(&modes), settings.smart_hamza());
        Self {
            engine,
            modes,
            settings,
        }
    }

    /// The mode controller shared with the engine.
    pub fn modes(&self) -> &Arc<ModeController> {
        &self.modes
    }

    /// The insertion engine.
    pub fn engine(&self) -> &InsertionEngine {
        &self.engine
    }

    /// The settings this binder was built from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the attach policy covers this field name.
    pub fn should_attach(&self, name: &str) -> bool {
        self.settings
            .policy()
            .map(|policy| policy.covers(name))
            .unwrap_or(false)
    }

    /// Attach to every eligible field the provider reports, initializing each
    /// one's keyboard mode. Returns the attached names.
    pub fn attach(&self, provider: &dyn FieldProvider) -> Vec<String> {
        let mut attached = Vec::new();

        for name in provider.field_names() {
            if self.should_attach(&name) {
                self.modes.register(&name);
                log::debug!("attached to field '{}'", name);
                attached.push(name);
            } else {
                log::debug!("skipping field '{}' per attach policy", name);
            }
        }

        attached
    }

    /// Whether a field was attached (and therefore receives events).
    pub fn is_attached(&self, name: &str) -> bool {
        self.modes.is_registered(name)
    }

    /// Keydown path: command shortcuts ([Ctrl-K], [Ctrl-T]/[Ctrl-Y]).
    pub fn on_key_down(&self, input: &KeyInput, field: &mut dyn TextInput) -> EventDisposition {
        if !self.is_attached(field.name()) {
            return EventDisposition::NotHandled;
        }

        match Command::from_input(input) {
            Some(Command::ToggleKeyboardMode) => {
                self.modes.toggle_mode(field.name());
                EventDisposition::Handled
            }
            Some(Command::ToggleWritingDirection) => {
                let direction = self.modes.toggle_direction(field.name());
                field.set_direction(direction);
                EventDisposition::Handled
            }
            None => EventDisposition::NotHandled,
        }
    }

    /// Keypress path: a character commit. Applies an `Insert` decision to
    /// the field; the context is rebuilt from live field state every call.
    pub fn on_key_press(&self, input: &KeyInput, field: &mut dyn TextInput) -> EventDisposition {
        if !self.is_attached(field.name()) {
            return EventDisposition::NotHandled;
        }

        let context = InsertionContext::from_field(field);
        match self.engine.compute_insertion(field.name(), input, &context) {
            InsertDecision::Insert(text) => {
                field::replace_selection(field, &text);
                EventDisposition::Handled
            }
            InsertDecision::Suppress => EventDisposition::Handled,
            InsertDecision::PassThrough => EventDisposition::NotHandled,
        }
    }

    /// A completed horizontal swipe on an attached field toggles its
    /// keyboard mode.
    pub fn on_swipe(&self, field: &str) {
        if self.is_attached(field) {
            self.modes.toggle_mode(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::HAMZA;
    use crate::mode::{KeyboardMode, WritingDirection};
    use crate::settings::AttachPolicy;

    struct SimField {
        name: String,
        value: String,
        selection: (usize, usize),
        direction: WritingDirection,
    }

    impl SimField {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                value: String::new(),
                selection: (0, 0),
                direction: WritingDirection::Rtl,
            }
        }
    }

    impl TextInput for SimField {
        fn name(&self) -> &str {
            &self.name
        }
        fn value(&self) -> String {
            self.value.clone()
        }
        fn set_value(&mut self, value: String) {
            self.value = value;
        }
        fn selection(&self) -> (usize, usize) {
            self.selection
        }
        fn set_caret(&mut self, offset: usize) {
            self.selection = (offset, offset);
        }
        fn direction(&self) -> WritingDirection {
            self.direction
        }
        fn set_direction(&mut self, direction: WritingDirection) {
            self.direction = direction;
        }
    }

    struct SimProvider(Vec<&'static str>);

    impl FieldProvider for SimProvider {
        fn field_names(&self) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    fn attached_binder() -> Binder {
        let binder = Binder::from_settings(Settings::with_policy(AttachPolicy::AllExcept(vec![
            "password".to_string(),
        ])));
        binder.attach(&SimProvider(vec!["subject", "message", "password"]));
        binder
    }

    #[test]
    fn test_attach_respects_deny_list() {
        let binder = attached_binder();
        assert!(binder.is_attached("subject"));
        assert!(binder.is_attached("message"));
        assert!(!binder.is_attached("password"));
    }

    #[test]
    fn test_attach_with_allow_list() {
        let binder = Binder::from_settings(Settings::with_policy(AttachPolicy::Only(vec![
            "subject".to_string(),
        ])));
        let attached = binder.attach(&SimProvider(vec!["subject", "message"]));
        assert_eq!(attached, vec!["subject".to_string()]);
        assert!(!binder.is_attached("message"));
    }

    #[test]
    fn test_inert_settings_attach_nothing() {
        let binder = Binder::from_settings(Settings::new());
        let attached = binder.attach(&SimProvider(vec!["subject", "message"]));
        assert!(attached.is_empty());
        assert!(!binder.is_attached("subject"));
    }

    #[test]
    fn test_keypress_transliterates_into_field() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");

        assert_eq!(
            binder.on_key_press(&KeyInput::plain('b'), &mut field),
            EventDisposition::Handled
        );
        assert_eq!(field.value, "\u{0628}");
        assert_eq!(field.selection, (1, 1));
    }

    #[test]
    fn test_keypress_applies_hamza_from_live_context() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");

        // Vowel at field start: hamza-prefixed, caret lands after both chars.
        binder.on_key_press(&KeyInput::plain('f'), &mut field);
        assert_eq!(field.value, format!("{HAMZA}\u{0627}"));
        assert_eq!(field.selection, (2, 2));

        // Second vowel right after a vowel: hamza again.
        binder.on_key_press(&KeyInput::plain('f'), &mut field);
        assert_eq!(
            field.value,
            format!("{HAMZA}\u{0627}{HAMZA}\u{0627}")
        );
    }

    #[test]
    fn test_keypress_rereads_externally_mutated_field() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");

        binder.on_key_press(&KeyInput::plain('b'), &mut field);

        // Host clears the field behind the engine's back.
        field.set_value(String::new());
        field.set_caret(0);

        // The next vowel must see an empty field and take a hamza.
        binder.on_key_press(&KeyInput::plain('f'), &mut field);
        assert_eq!(field.value, format!("{HAMZA}\u{0627}"));
    }

    #[test]
    fn test_keypress_on_unattached_field_is_not_handled() {
        let binder = attached_binder();
        let mut field = SimField::new("password");

        assert_eq!(
            binder.on_key_press(&KeyInput::plain('b'), &mut field),
            EventDisposition::NotHandled
        );
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_suppressed_capital_is_handled_but_inserts_nothing() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");

        assert_eq!(
            binder.on_key_press(&KeyInput::plain('Q'), &mut field),
            EventDisposition::Handled
        );
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_digit_is_not_handled() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");

        assert_eq!(
            binder.on_key_press(&KeyInput::plain('3'), &mut field),
            EventDisposition::NotHandled
        );
    }

    #[test]
    fn test_ctrl_k_toggles_mode_and_is_handled() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");

        assert_eq!(
            binder.on_key_down(&KeyInput::with_ctrl('k'), &mut field),
            EventDisposition::Handled
        );
        assert_eq!(
            binder.modes().current_mode("subject"),
            KeyboardMode::Latin
        );

        // In Latin mode the next keypress passes through untouched.
        assert_eq!(
            binder.on_key_press(&KeyInput::plain('b'), &mut field),
            EventDisposition::NotHandled
        );
    }

    #[test]
    fn test_ctrl_y_toggles_direction_on_field() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");
        assert_eq!(field.direction, WritingDirection::Rtl);

        assert_eq!(
            binder.on_key_down(&KeyInput::with_ctrl('y'), &mut field),
            EventDisposition::Handled
        );
        assert_eq!(field.direction, WritingDirection::Ltr);

        // Direction does not gate transliteration.
        binder.on_key_press(&KeyInput::plain('b'), &mut field);
        assert_eq!(field.value, "\u{0628}");
    }

    #[test]
    fn test_unrecognized_ctrl_combo_is_not_handled() {
        let binder = attached_binder();
        let mut field = SimField::new("subject");

        assert_eq!(
            binder.on_key_down(&KeyInput::with_ctrl('a'), &mut field),
            EventDisposition::NotHandled
        );
    }

    #[test]
    fn test_swipe_toggles_attached_field_only() {
        let binder = attached_binder();

        binder.on_swipe("subject");
        assert_eq!(
            binder.modes().current_mode("subject"),
            KeyboardMode::Latin
        );

        binder.on_swipe("password");
        assert_eq!(
            binder.modes().current_mode("password"),
            KeyboardMode::Native
        );
        assert!(!binder.is_attached("password"));
    }
}
