// Ugkey Mode Controller
// Per-field keyboard mode and writing direction state

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use strum_macros::{Display, EnumString};

/// Keyboard mode of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum KeyboardMode {
    /// Keystrokes are transliterated into Uyghur script.
    #[strum(serialize = "ug")]
    Native,
    /// Keystrokes pass through unmodified.
    #[strum(serialize = "en")]
    Latin,
}

impl KeyboardMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            KeyboardMode::Native => KeyboardMode::Latin,
            KeyboardMode::Latin => KeyboardMode::Native,
        }
    }
}

/// Writing direction of a field. Presentation only; never gates the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum WritingDirection {
    #[strum(serialize = "rtl")]
    Rtl,
    #[strum(serialize = "ltr")]
    Ltr,
}

impl WritingDirection {
    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            WritingDirection::Rtl => WritingDirection::Ltr,
            WritingDirection::Ltr => WritingDirection::Rtl,
        }
    }
}

/// Payload delivered to mode-change observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeChange {
    /// Logical name of the field that changed.
    pub field: String,
    /// The mode the field is now in.
    pub mode: KeyboardMode,
}

type ModeObserver = Box<dyn Fn(&ModeChange) + Send + Sync>;

/// Owns the keyboard mode and writing direction of every attached field.
///
/// Entries are created lazily the first time a field is registered or
/// toggled, default to `Native`/`Rtl`, and live for the whole session.
/// Toggling a field nobody recorded toggles from the implicit default;
/// that is never an error.
pub struct ModeController {
    modes: RwLock<HashMap<String, KeyboardMode>>,
    directions: RwLock<HashMap<String, WritingDirection>>,
    observers: RwLock<Vec<ModeObserver>>,
}

impl ModeController {
    /// Create an empty controller.
    pub fn new() -> Self {
        Self {
            modes: RwLock::new(HashMap::new()),
            directions: RwLock::new(HashMap::new()),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Record a field at attachment time, defaulting to `Native`.
    pub fn register(&self, field: &str) {
        self.modes
            .write()
            .entry(field.to_string())
            .or_insert(KeyboardMode::Native);
    }

    /// Whether the field has been registered (i.e. is attached).
    pub fn is_registered(&self, field: &str) -> bool {
        self.modes.read().contains_key(field)
    }

    /// Current keyboard mode of a field, `Native` if never recorded.
    pub fn current_mode(&self, field: &str) -> KeyboardMode {
        self.modes
            .read()
            .get(field)
            .copied()
            .unwrap_or(KeyboardMode::Native)
    }

    /// Flip a field's keyboard mode unconditionally and return the new mode.
    ///
    /// Observers are notified synchronously, in registration order, exactly
    /// once. The map lock is released before they run.
    pub fn toggle_mode(&self, field: &str) -> KeyboardMode {
        let mode = {
            let mut modes = self.modes.write();
            let entry = modes
                .entry(field.to_string())
                .or_insert(KeyboardMode::Native);
            *entry = entry.toggled();
            *entry
        };

        let change = ModeChange {
            field: field.to_string(),
            mode,
        };
        for observer in self.observers.read().iter() {
            observer(&change);
        }

        mode
    }

    /// Current writing direction of a field, `Rtl` if never recorded.
    pub fn current_direction(&self, field: &str) -> WritingDirection {
        self.directions
            .read()
            .get(field)
            .copied()
            .unwrap_or(WritingDirection::Rtl)
    }

    /// Flip a field's writing direction and return the new one.
    ///
    /// Mode observers are not involved; direction is presentation only.
    pub fn toggle_direction(&self, field: &str) -> WritingDirection {
        let mut directions = self.directions.write();
        let entry = directions
            .entry(field.to_string())
            .or_insert(WritingDirection::Rtl);
        *entry = entry.toggled();
        *entry
    }

    /// Register an observer invoked on every keyboard-mode toggle.
    pub fn add_mode_observer(&self, observer: impl Fn(&ModeChange) + Send + Sync + 'static) {
        self.observers.write().push(Box::new(observer));
    }

    /// Number of fields with a recorded keyboard mode.
    pub fn field_count(&self) -> usize {
        self.modes.read().len()
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeController")
            .field("fields", &self.modes.read().len())
            .field("observers", &self.observers.read().len())
            .finish()
    }
}
