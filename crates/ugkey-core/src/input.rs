// Ugkey Input Layer
// Keystroke payloads and command-shortcut classification

/// A single character keystroke together with its command modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// The character the key event delivers.
    pub ch: char,
    /// [Ctrl] on PC.
    pub ctrl: bool,
    /// [Command] on Mac.
    pub meta: bool,
}

impl KeyInput {
    /// A keystroke with no modifiers held.
    pub fn plain(ch: char) -> Self {
        Self {
            ch,
            ctrl: false,
            meta: false,
        }
    }

    /// A keystroke with [Ctrl] held.
    pub fn with_ctrl(ch: char) -> Self {
        Self {
            ch,
            ctrl: true,
            meta: false,
        }
    }

    /// Whether a command modifier ([Ctrl] or [Command]) was held.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Commands reachable through [Ctrl]/[Command] shortcuts on an attached
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip the field between native and Latin input.
    ToggleKeyboardMode,
    /// Flip the field's writing-direction presentation.
    ToggleWritingDirection,
}

impl Command {
    /// Classify a keydown as a command shortcut, if it is one.
    ///
    /// [Ctrl-K] toggles the keyboard mode. [Ctrl-T] toggles the writing
    /// direction and is kept for backward compatibility; [Ctrl-Y] does the
    /// same because Blink reserves [Ctrl-T] for New Tab.
    pub fn from_input(input: &KeyInput) -> Option<Command> {
        if !input.has_command_modifier() {
            return None;
        }

        match input.ch.to_ascii_uppercase() {
            'K' => Some(Command::ToggleKeyboardMode),
            'T' | 'Y' => Some(Command::ToggleWritingDirection),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input_has_no_modifier() {
        assert!(!KeyInput::plain('f').has_command_modifier());
        assert!(KeyInput::with_ctrl('k').has_command_modifier());
        let meta = KeyInput {
            ch: 'k',
            ctrl: false,
            meta: true,
        };
        assert!(meta.has_command_modifier());
    }

    #[test]
    fn test_command_classification() {
        assert_eq!(
            Command::from_input(&KeyInput::with_ctrl('k')),
            Some(Command::ToggleKeyboardMode)
        );
        assert_eq!(
            Command::from_input(&KeyInput::with_ctrl('K')),
            Some(Command::ToggleKeyboardMode)
        );
        assert_eq!(
            Command::from_input(&KeyInput::with_ctrl('t')),
            Some(Command::ToggleWritingDirection)
        );
        assert_eq!(
            Command::from_input(&KeyInput::with_ctrl('y')),
            Some(Command::ToggleWritingDirection)
        );
    }

    #[test]
    fn test_non_shortcuts_are_not_commands() {
        assert_eq!(Command::from_input(&KeyInput::with_ctrl('a')), None);
        // The letter alone, without a command modifier, is not a command.
        assert_eq!(Command::from_input(&KeyInput::plain('k')), None);
        assert_eq!(Command::from_input(&KeyInput::plain('y')), None);
    }
}
