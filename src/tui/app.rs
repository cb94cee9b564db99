use std::sync::Arc;

use parking_lot::Mutex;

use ugkey_core::{
    AttachPolicy, Binder, FieldProvider, KeyboardMode, ModeChange, Settings, SwipeDetector,
    TextInput, WritingDirection,
};

const MAX_LOG_LINES: usize = 200;

// Terminal cells are much coarser than touch pixels, so the playground's
// swipe detector uses cell-sized thresholds.
const CELL_X_THRESHOLD: f32 = 6.0;
const CELL_Y_THRESHOLD: f32 = 2.0;

/// An in-memory text field backing one row of the playground.
pub struct SimField {
    name: String,
    chars: Vec<char>,
    caret: usize,
    direction: WritingDirection,
}

impl SimField {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            chars: Vec::new(),
            caret: 0,
            direction: WritingDirection::Rtl,
        }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Default text-field behavior for a keystroke the engine passed
    /// through.
    pub fn type_char(&mut self, c: char) {
        self.chars.insert(self.caret, c);
        self.caret += 1;
    }

    pub fn backspace(&mut self) {
        if self.caret > 0 {
            self.caret -= 1;
            self.chars.remove(self.caret);
        }
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.chars.len();
    }
}

impl TextInput for SimField {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> String {
        self.chars.iter().collect()
    }

    fn set_value(&mut self, value: String) {
        self.chars = value.chars().collect();
        self.caret = self.caret.min(self.chars.len());
    }

    fn selection(&self) -> (usize, usize) {
        (self.caret, self.caret)
    }

    fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.chars.len());
    }

    fn direction(&self) -> WritingDirection {
        self.direction
    }

    fn set_direction(&mut self, direction: WritingDirection) {
        self.direction = direction;
    }
}

struct NameProvider(Vec<String>);

impl FieldProvider for NameProvider {
    fn field_names(&self) -> Vec<String> {
        self.0.clone()
    }
}

pub struct App {
    pub binder: Binder,
    pub fields: Vec<SimField>,
    pub focused: usize,
    pub log: Vec<String>,
    pub swipe: SwipeDetector,
    mode_events: Arc<Mutex<Vec<ModeChange>>>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        // The playground needs something to attach to; replace an inert
        // configuration with the demo policy instead of showing four dead
        // fields.
        let settings = if settings.is_inert() {
            Settings::with_policy(AttachPolicy::AllExcept(vec!["password".to_string()]))
        } else {
            settings
        };

        let binder = Binder::from_settings(settings);

        let mode_events: Arc<Mutex<Vec<ModeChange>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&mode_events);
        binder
            .modes()
            .add_mode_observer(move |change| sink.lock().push(change.clone()));

        let fields = vec![
            SimField::new("subject"),
            SimField::new("message"),
            SimField::new("search"),
            SimField::new("password"),
        ];

        let names: Vec<String> = fields.iter().map(|f| f.name().to_string()).collect();
        let attached = binder.attach(&NameProvider(names));

        let mut app = Self {
            binder,
            fields,
            focused: 0,
            log: Vec::new(),
            swipe: SwipeDetector::with_thresholds(CELL_X_THRESHOLD, CELL_Y_THRESHOLD),
            mode_events,
        };
        app.push_log(format!(
            "attached to {} of {} fields: {}",
            attached.len(),
            app.fields.len(),
            attached.join(", ")
        ));
        app
    }

    pub fn focused_field(&mut self) -> &mut SimField {
        &mut self.fields[self.focused]
    }

    pub fn focused_name(&self) -> &str {
        self.fields[self.focused].name()
    }

    pub fn cycle_focus_forward(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn cycle_focus_backward(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    pub fn field_mode(&self, name: &str) -> KeyboardMode {
        self.binder.modes().current_mode(name)
    }

    pub fn is_attached(&self, name: &str) -> bool {
        self.binder.is_attached(name)
    }

    pub fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > MAX_LOG_LINES {
            let excess = self.log.len() - MAX_LOG_LINES;
            self.log.drain(..excess);
        }
    }

    /// Move mode changes captured by the observer into the visible log.
    pub fn drain_mode_events(&mut self) {
        let changes: Vec<ModeChange> = std::mem::take(&mut *self.mode_events.lock());
        for change in changes {
            let label = match change.mode {
                KeyboardMode::Native => "native (ug)",
                KeyboardMode::Latin => "latin (en)",
            };
            self.push_log(format!("mode: {} -> {}", change.field, label));
        }
    }
}
