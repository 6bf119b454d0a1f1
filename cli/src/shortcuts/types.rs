//! Keyboard shortcut types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shortcuts::error::ShortcutError;
use crate::workspace::WorkspaceId;

/// Modifier keys held with a shortcut, rendered in the order `⌃⌥⇧⌘`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub control: bool,
    pub option: bool,
    pub shift: bool,
    pub command: bool,
}

impl Modifiers {
    /// Returns true if no modifier is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.control || self.option || self.shift || self.command)
    }
}

/// A global keyboard shortcut bound to a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcut {
    pub modifiers: Modifiers,
    /// Uppercase key name: a single character or a named key like `F5` or `SPACE`.
    pub key: String,
}

const NAMED_KEYS: &[&str] = &[
    "SPACE", "TAB", "RETURN", "ESCAPE", "DELETE", "HOME", "END", "PAGEUP", "PAGEDOWN", "LEFT",
    "RIGHT", "UP", "DOWN",
];

fn is_function_key(key: &str) -> bool {
    key.strip_prefix('F')
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=20).contains(&n))
}

fn normalize_key(raw: &str) -> Option<String> {
    let upper = raw.to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && c != '+' => Some(upper),
        (Some(_), Some(_)) if is_function_key(&upper) || NAMED_KEYS.contains(&upper.as_str()) => {
            Some(upper)
        }
        _ => None,
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutError;

    /// Parses text like `ctrl+opt+1`, `cmd+shift+k` or `f5`.
    ///
    /// Glyphs are accepted too, so a displayed shortcut (`⌃⌥1`) parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ShortcutError::Invalid(s.to_string(), reason.to_string());

        let mut modifiers = Modifiers::default();
        let mut rest = s.trim();

        // Leading glyphs carry no separator.
        loop {
            let mut chars = rest.chars();
            let flag = match chars.next() {
                Some('⌃') => &mut modifiers.control,
                Some('⌥') => &mut modifiers.option,
                Some('⇧') => &mut modifiers.shift,
                Some('⌘') => &mut modifiers.command,
                _ => break,
            };
            *flag = true;
            rest = chars.as_str();
            rest = rest.strip_prefix('+').unwrap_or(rest);
        }

        let parts: Vec<&str> = rest.split('+').map(str::trim).collect();
        let Some((key, mods)) = parts.split_last() else {
            return Err(invalid("missing key"));
        };

        for m in mods {
            let flag = match m.to_lowercase().as_str() {
                "cmd" | "command" | "super" => &mut modifiers.command,
                "ctrl" | "control" => &mut modifiers.control,
                "opt" | "option" | "alt" => &mut modifiers.option,
                "shift" => &mut modifiers.shift,
                other => return Err(invalid(&format!("unknown modifier '{other}'"))),
            };
            *flag = true;
        }

        let key = normalize_key(key).ok_or_else(|| invalid("missing or unknown key"))?;

        if modifiers.is_empty() && !is_function_key(&key) {
            return Err(invalid("at least one modifier is required"));
        }

        Ok(Self { modifiers, key })
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (held, glyph) in [
            (m.control, '⌃'),
            (m.option, '⌥'),
            (m.shift, '⇧'),
            (m.command, '⌘'),
        ] {
            if held {
                write!(f, "{glyph}")?;
            }
        }
        if self.modifiers.is_empty() || self.key.chars().count() == 1 {
            write!(f, "{}", self.key)
        } else {
            write!(f, "+{}", self.key)
        }
    }
}

impl TryFrom<String> for Shortcut {
    type Error = ShortcutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shortcut> for String {
    fn from(shortcut: Shortcut) -> Self {
        shortcut.to_string()
    }
}

/// Key under which a workspace's shortcut is stored: `workspace_<UUID>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortcutName(WorkspaceId);

const NAME_PREFIX: &str = "workspace_";

impl ShortcutName {
    /// The workspace this binding belongs to.
    #[must_use]
    pub const fn workspace(&self) -> WorkspaceId {
        self.0
    }
}

impl From<WorkspaceId> for ShortcutName {
    fn from(id: WorkspaceId) -> Self {
        Self(id)
    }
}

impl fmt::Display for ShortcutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAME_PREFIX}{}", self.0)
    }
}

impl TryFrom<String> for ShortcutName {
    type Error = ShortcutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .strip_prefix(NAME_PREFIX)
            .and_then(|id| id.parse().ok())
            .map(Self)
            .ok_or(ShortcutError::UnknownName(value))
    }
}

impl From<ShortcutName> for String {
    fn from(name: ShortcutName) -> Self {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_textual_modifiers() {
        let s: Shortcut = "cmd+shift+k".parse().unwrap();
        assert!(s.modifiers.command && s.modifiers.shift);
        assert!(!s.modifiers.control && !s.modifiers.option);
        assert_eq!(s.key, "K");
        assert_eq!(s.to_string(), "⇧⌘K");
    }

    #[test]
    fn display_follows_glyph_order() {
        let s: Shortcut = "cmd+ctrl+opt+1".parse().unwrap();
        assert_eq!(s.to_string(), "⌃⌥⌘1");
    }

    #[test]
    fn displayed_form_parses_back() {
        let s: Shortcut = "alt+control+space".parse().unwrap();
        let text = s.to_string();
        assert_eq!(text, "⌃⌥+SPACE");
        assert_eq!(text.parse::<Shortcut>().unwrap(), s);

        let g: Shortcut = "⌃⌥1".parse().unwrap();
        assert_eq!(g, "ctrl+opt+1".parse().unwrap());
    }

    #[test]
    fn function_keys_need_no_modifier() {
        let s: Shortcut = "f5".parse().unwrap();
        assert!(s.modifiers.is_empty());
        assert_eq!(s.to_string(), "F5");
    }

    #[test]
    fn rejects_bare_keys_and_unknown_parts() {
        assert!("k".parse::<Shortcut>().is_err());
        assert!("hyper+k".parse::<Shortcut>().is_err());
        assert!("cmd+".parse::<Shortcut>().is_err());
        assert!("cmd+banana".parse::<Shortcut>().is_err());
        assert!("f25".parse::<Shortcut>().is_err());
        assert!("".parse::<Shortcut>().is_err());
    }

    #[test]
    fn shortcut_name_uses_workspace_prefix() {
        let id: WorkspaceId = "e621e1f8-c36c-495a-93fc-0c247a3e6e5f".parse().unwrap();
        let name = ShortcutName::from(id);
        assert_eq!(
            name.to_string(),
            "workspace_E621E1F8-C36C-495A-93FC-0C247A3E6E5F"
        );

        let parsed = ShortcutName::try_from(name.to_string()).unwrap();
        assert_eq!(parsed.workspace(), id);
        assert!(ShortcutName::try_from("other_thing".to_string()).is_err());
    }
}
