// Copyright @yucwang 2026

use crate::math::constants::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Esc,
}

/// Parses a key script. Plain characters are keys; `<left>`, `<right>`,
/// `<up>`, `<down>` and `<esc>` name special keys. Whitespace is skipped.
pub fn parse_key_script(script: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut rest = script;
    while let Some(c) = rest.chars().next() {
        if c == '<' {
            if let Some(end) = rest.find('>') {
                let special = match rest[1..end].to_ascii_lowercase().as_str() {
                    "left" => Some(Key::Left),
                    "right" => Some(Key::Right),
                    "up" => Some(Key::Up),
                    "down" => Some(Key::Down),
                    "esc" => Some(Key::Esc),
                    _ => None,
                };
                if let Some(key) = special {
                    keys.push(key);
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }
        if !c.is_whitespace() {
            keys.push(Key::Char(c));
        }
        rest = &rest[c.len_utf8()..];
    }
    keys
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Select(usize),
    SelectPrevious,
    SelectNext,
    /// Moves the selected point one step along `axis`, `direction` is +1 or -1.
    Translate { axis: usize, direction: Float },
    IncreaseResolution,
    DecreaseResolution,
    /// Positive steps move the camera in.
    Zoom(Float),
    /// Azimuth and elevation in turn steps.
    Orbit { azimuth: Float, elevation: Float },
    ResetView,
    ToggleTexture,
    ToggleShading,
    ToggleAntialias,
    PrintControlPoints,
    PrintColors,
    Quit,
}

impl Command {
    fn camera_key(key: Key) -> Option<Self> {
        match key {
            Key::Left => Some(Command::Orbit { azimuth: -1.0, elevation: 0.0 }),
            Key::Right => Some(Command::Orbit { azimuth: 1.0, elevation: 0.0 }),
            Key::Up => Some(Command::Orbit { azimuth: 0.0, elevation: 1.0 }),
            Key::Down => Some(Command::Orbit { azimuth: 0.0, elevation: -1.0 }),
            Key::Esc | Key::Char('q') => Some(Command::Quit),
            Key::Char('w') => Some(Command::Zoom(1.0)),
            Key::Char('s') => Some(Command::Zoom(-1.0)),
            Key::Char('r') => Some(Command::ResetView),
            _ => None,
        }
    }

    /// Key map of the patch editor.
    pub fn from_editor_key(key: Key) -> Option<Self> {
        if let Some(cmd) = Self::camera_key(key) {
            return Some(cmd);
        }
        let c = match key {
            Key::Char(c) => c,
            _ => return None,
        };
        match c {
            '0'..='9' => Some(Command::Select(c as usize - '0' as usize)),
            'a'..='f' => Some(Command::Select(10 + c as usize - 'a' as usize)),
            '[' => Some(Command::SelectPrevious),
            ']' => Some(Command::SelectNext),
            'j' => Some(Command::Translate { axis: 0, direction: -1.0 }),
            'l' => Some(Command::Translate { axis: 0, direction: 1.0 }),
            'i' => Some(Command::Translate { axis: 1, direction: 1.0 }),
            'k' => Some(Command::Translate { axis: 1, direction: -1.0 }),
            'u' => Some(Command::Translate { axis: 2, direction: 1.0 }),
            'o' => Some(Command::Translate { axis: 2, direction: -1.0 }),
            '+' | '=' => Some(Command::IncreaseResolution),
            '-' => Some(Command::DecreaseResolution),
            't' => Some(Command::ToggleTexture),
            'n' => Some(Command::ToggleShading),
            'p' => Some(Command::PrintControlPoints),
            _ => None,
        }
    }

    /// Key map of the picking scene.
    pub fn from_pick_key(key: Key) -> Option<Self> {
        if let Some(cmd) = Self::camera_key(key) {
            return Some(cmd);
        }
        match key {
            Key::Char('a') => Some(Command::ToggleAntialias),
            Key::Char('p') => Some(Command::PrintColors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_script() {
        let keys = parse_key_script("5l <left><UP>q<x");
        assert_eq!(keys, vec![Key::Char('5'), Key::Char('l'), Key::Left, Key::Up, Key::Char('q'),
                              Key::Char('<'), Key::Char('x')]);
        assert_eq!(parse_key_script("<esc>"), vec![Key::Esc]);
        assert!(parse_key_script("").is_empty());
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(Command::from_editor_key(Key::Char('0')), Some(Command::Select(0)));
        assert_eq!(Command::from_editor_key(Key::Char('9')), Some(Command::Select(9)));
        assert_eq!(Command::from_editor_key(Key::Char('a')), Some(Command::Select(10)));
        assert_eq!(Command::from_editor_key(Key::Char('f')), Some(Command::Select(15)));
        assert_eq!(Command::from_editor_key(Key::Char('g')), None);
    }

    #[test]
    fn test_key_maps_differ_on_shared_letters() {
        assert_eq!(Command::from_editor_key(Key::Char('a')), Some(Command::Select(10)));
        assert_eq!(Command::from_pick_key(Key::Char('a')), Some(Command::ToggleAntialias));
        assert_eq!(Command::from_editor_key(Key::Char('p')), Some(Command::PrintControlPoints));
        assert_eq!(Command::from_pick_key(Key::Char('p')), Some(Command::PrintColors));
        assert_eq!(Command::from_pick_key(Key::Char('j')), None);
        assert_eq!(Command::from_pick_key(Key::Esc), Some(Command::Quit));
    }
}
