// Ugkey Settings Module
// Attachment policy and feature toggles loaded from TOML

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Which candidate fields the binder attaches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachPolicy {
    /// Attach to every candidate field except the named ones.
    AllExcept(Vec<String>),
    /// Attach only to the named fields.
    Only(Vec<String>),
}

impl AttachPolicy {
    /// Whether a field with this name is covered by the policy.
    pub fn covers(&self, name: &str) -> bool {
        match self {
            AttachPolicy::AllExcept(deny) => !deny.iter().any(|n| n == name),
            AttachPolicy::Only(allow) => allow.iter().any(|n| n == name),
        }
    }
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    attach: Option<AttachSection>,

    #[serde(default)]
    input: Option<InputSection>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct AttachSection {
    #[serde(default)]
    all: Option<bool>,

    #[serde(default)]
    allow: Option<NameList>,

    #[serde(default)]
    deny: Option<NameList>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct InputSection {
    #[serde(default)]
    smart_hamza: Option<bool>,
}

/// A field-name list: either a TOML array or one ':'-joined string, the form
/// the legacy bedit.js globals used.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NameList {
    Joined(String),
    Names(Vec<String>),
}

impl NameList {
    fn into_names(self) -> Vec<String> {
        match self {
            NameList::Joined(joined) => joined
                .split(':')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            NameList::Names(names) => names,
        }
    }
}

/// Settings controlling field attachment and the smart-hamza rule.
///
/// An invalid attachment configuration is not an error: `policy()` simply
/// returns `None` and nothing gets attached.
#[derive(Debug, Clone)]
pub struct Settings {
    policy: Option<AttachPolicy>,
    smart_hamza: bool,
}

impl Settings {
    /// Create settings with no attachment policy (inert) and smart hamza
    /// enabled.
    pub fn new() -> Self {
        Self {
            policy: None,
            smart_hamza: true,
        }
    }

    /// Create settings directly from a policy (host-driven configuration).
    pub fn with_policy(policy: AttachPolicy) -> Self {
        Self {
            policy: Some(policy),
            smart_hamza: true,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let attach = toml_settings.attach.unwrap_or_default();
        let all = attach.all.unwrap_or(false);
        let allow = attach.allow.map(NameList::into_names).unwrap_or_default();
        let deny = attach.deny.map(NameList::into_names).unwrap_or_default();

        let policy = resolve_policy(all, allow, deny);
        if policy.is_none() {
            log::warn!(
                "neither attach-all nor a non-empty allow list is configured; \
                 no field will be attached"
            );
        }

        let smart_hamza = toml_settings
            .input
            .and_then(|input| input.smart_hamza)
            .unwrap_or(true);

        Ok(Self {
            policy,
            smart_hamza,
        })
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ugkey").join("settings.toml"))
    }

    /// Load from default location (~/.config/ugkey/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    /// The resolved attachment policy, `None` when the configuration is
    /// inert.
    pub fn policy(&self) -> Option<&AttachPolicy> {
        self.policy.as_ref()
    }

    /// Whether the configuration attaches to nothing.
    pub fn is_inert(&self) -> bool {
        self.policy.is_none()
    }

    /// Whether the smart-hamza rule is enabled.
    pub fn smart_hamza(&self) -> bool {
        self.smart_hamza
    }

    /// Enable or disable the smart-hamza rule.
    pub fn set_smart_hamza(&mut self, enabled: bool) {
        self.smart_hamza = enabled;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the attach lists into a policy. A deny list by itself implies
/// attach-all, as the legacy bedit.js options did.
fn resolve_policy(all: bool, allow: Vec<String>, deny: Vec<String>) -> Option<AttachPolicy> {
    if all {
        return Some(AttachPolicy::AllExcept(deny));
    }
    if !allow.is_empty() {
        return Some(AttachPolicy::Only(allow));
    }
    if !deny.is_empty() {
        return Some(AttachPolicy::AllExcept(deny));
    }
    None
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Ugkey Settings
# Place this file at: ~/.config/ugkey/settings.toml

[attach]
# Attach to every text field except the ones in `deny`, or set all = false
# and list the fields to attach to in `allow`. Lists may be TOML arrays or
# one colon-joined string ("name:other").
all = true
deny = []
# allow = []

[input]
# Automatically prepend hamza to vowels based on their position in text.
smart_hamza = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_is_inert() {
        let settings = Settings::new();
        assert!(settings.is_inert());
        assert!(settings.smart_hamza());
        assert!(settings.policy().is_none());
    }

    #[test]
    fn test_attach_all_with_deny_list() {
        let toml = r#"
[attach]
all = true
deny = ["password", "captcha"]
"#;
        let settings = Settings::from_toml(toml).unwrap();
        let policy = settings.policy().unwrap();
        assert!(policy.covers("subject"));
        assert!(!policy.covers("password"));
        assert!(!policy.covers("captcha"));
    }

    #[test]
    fn test_attach_all_with_empty_deny_list() {
        let toml = r#"
[attach]
all = true
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(
            settings.policy(),
            Some(&AttachPolicy::AllExcept(Vec::new()))
        );
    }

    #[test]
    fn test_allow_list_only() {
        let toml = r#"
[attach]
allow = ["subject", "message"]
"#;
        let settings = Settings::from_toml(toml).unwrap();
        let policy = settings.policy().unwrap();
        assert!(policy.covers("subject"));
        assert!(policy.covers("message"));
        assert!(!policy.covers("search"));
    }

    #[test]
    fn test_deny_list_alone_implies_attach_all() {
        let toml = r#"
[attach]
deny = ["password"]
"#;
        let settings = Settings::from_toml(toml).unwrap();
        let policy = settings.policy().unwrap();
        assert!(policy.covers("subject"));
        assert!(!policy.covers("password"));
    }

    #[test]
    fn test_empty_allow_without_all_is_inert() {
        let toml = r#"
[attach]
all = false
allow = []
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert!(settings.is_inert());
    }

    #[test]
    fn test_empty_toml_is_inert() {
        let settings = Settings::from_toml("").unwrap();
        assert!(settings.is_inert());
        assert!(settings.smart_hamza());
    }

    #[test]
    fn test_colon_joined_lists() {
        let toml = r#"
[attach]
allow = "subject:message"
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(
            settings.policy(),
            Some(&AttachPolicy::Only(vec![
                "subject".to_string(),
                "message".to_string()
            ]))
        );
    }

    #[test]
    fn test_colon_joined_list_skips_empty_segments() {
        let toml = r#"
[attach]
all = true
deny = "password::captcha:"
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(
            settings.policy(),
            Some(&AttachPolicy::AllExcept(vec![
                "password".to_string(),
                "captcha".to_string()
            ]))
        );
    }

    #[test]
    fn test_smart_hamza_toggle() {
        let toml = r#"
[attach]
all = true

[input]
smart_hamza = false
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert!(!settings.smart_hamza());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Settings::from_toml("[attach\nall = true"),
            Err(SettingsError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_settings_content_parses() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert!(!settings.is_inert());
        assert!(settings.smart_hamza());
    }
}
