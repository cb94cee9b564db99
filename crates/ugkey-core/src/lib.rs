// Ugkey Core Library
// Core data models for Uyghur keystroke transliteration

pub mod attach;
pub mod engine;
pub mod field;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod mode;
pub mod settings;

pub use attach::{Binder, EventDisposition};
pub use engine::{InsertDecision, InsertionContext, InsertionEngine};
pub use field::{replace_selection, FieldProvider, TextInput};
pub use gesture::{Swipe, SwipeDetector};
pub use input::{Command, KeyInput};
pub use layout::{
    is_arabic_letter, is_uyghur_vowel, KeyCharMap, ARABIC_PUNCTUATION_MARKS, HAMZA, UYGHUR_VOWELS,
};
pub use mode::{KeyboardMode, ModeChange, ModeController, WritingDirection};
pub use settings::{default_settings_content, AttachPolicy, Settings, SettingsError};
