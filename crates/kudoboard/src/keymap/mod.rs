//! Key chord parsing and matching.
//!
//! Parses key chord strings like "c", "ctrl+n" or "shift+up" from config
//! and matches them against crossterm KeyEvents at runtime.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// Parse a chord such as "shift+up". Exactly one non-modifier key is required.
pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let normalized = input.trim().to_lowercase();
    let mut key = None;
    let (mut ctrl, mut alt, mut shift, mut meta) = (false, false, false, false);

    for part in normalized.split('+').map(str::trim).filter(|part| !part.is_empty()) {
        match part {
            "ctrl" | "control" => ctrl = true,
            "alt" | "option" => alt = true,
            "shift" => shift = true,
            "meta" | "cmd" | "super" => meta = true,
            name => {
                if key.is_some() {
                    return None;
                }
                key = Some(parse_key(name)?);
            }
        }
    }

    Some(KeyChord {
        key: key?,
        ctrl,
        alt,
        shift,
        meta,
    })
}

fn parse_key(key: &str) -> Option<KeyCode> {
    match key {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "space" | "spacebar" => Some(KeyCode::Char(' ')),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        _ => {
            let mut chars = key.chars();
            let first = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(first))
            } else {
                None
            }
        }
    }
}

pub fn matches_chord(event: &KeyEvent, chord: &KeyChord) -> bool {
    let modifiers = event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let meta = modifiers.contains(KeyModifiers::SUPER) || modifiers.contains(KeyModifiers::META);
    if ctrl != chord.ctrl || alt != chord.alt || meta != chord.meta {
        return false;
    }

    match (event.code, chord.key) {
        // A plain letter chord accepts either case; "c" and "C" both match.
        (KeyCode::Char(pressed), KeyCode::Char(bound)) => {
            pressed.eq_ignore_ascii_case(&bound) && (!chord.shift || shift)
        }
        (code, key) => code == key && shift == chord.shift,
    }
}
