//! Time-driven input helpers.
//!
//! All of these take the current `Instant` from the caller instead of
//! reading the clock, so the frame loop decides what "now" is.

use std::time::{Duration, Instant};

use crate::board::PostId;

/// Hold time before a deletion key starts repeating.
pub const REPEAT_DELAY: Duration = Duration::from_millis(500);
/// Time between repeats once repeating.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(50);
/// Text cursor visibility toggles this often.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// Two clicks on the same post closer than this are a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKey {
    Backspace,
    Delete,
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    key: RepeatKey,
    pressed_at: Instant,
    fired: u128,
}

/// Software key repeat for Backspace/Delete.
///
/// The initial press is applied by the caller; `poll` only reports the
/// repeats that became due since the previous poll.
#[derive(Debug, Clone, Default)]
pub struct KeyRepeat {
    held: Option<HeldKey>,
}

impl KeyRepeat {
    pub fn press(&mut self, key: RepeatKey, now: Instant) {
        self.held = Some(HeldKey {
            key,
            pressed_at: now,
            fired: 0,
        });
    }

    /// Stop repeating if `key` is the one being held.
    pub fn release(&mut self, key: RepeatKey) {
        if self.held.is_some_and(|held| held.key == key) {
            self.held = None;
        }
    }

    pub fn cancel(&mut self) {
        self.held = None;
    }

    pub fn held(&self) -> Option<RepeatKey> {
        self.held.map(|held| held.key)
    }

    /// Repeats that became due at `now`, with the key they belong to.
    pub fn poll(&mut self, now: Instant) -> Option<(RepeatKey, usize)> {
        let held = self.held.as_mut()?;
        let elapsed = now.saturating_duration_since(held.pressed_at);
        if elapsed < REPEAT_DELAY {
            return None;
        }
        let due = (elapsed - REPEAT_DELAY).as_nanos() / REPEAT_INTERVAL.as_nanos() + 1;
        if due <= held.fired {
            return None;
        }
        let fresh = due - held.fired;
        held.fired = due;
        Some((held.key, fresh as usize))
    }
}

/// Blinking text cursor state.
#[derive(Debug, Clone, Copy)]
pub struct CursorBlink {
    visible: bool,
    toggled_at: Instant,
}

impl CursorBlink {
    pub fn new(now: Instant) -> Self {
        Self {
            visible: true,
            toggled_at: now,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show the cursor and restart the blink period.
    pub fn reset(&mut self, now: Instant) {
        self.visible = true;
        self.toggled_at = now;
    }

    pub fn tick(&mut self, now: Instant) {
        if now.saturating_duration_since(self.toggled_at) > BLINK_INTERVAL {
            self.visible = !self.visible;
            self.toggled_at = now;
        }
    }
}

/// Remembers the last left click on a post to detect double clicks.
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last: Option<(PostId, Instant)>,
}

impl ClickTracker {
    /// Record a click on `post`; true when it completes a double click.
    ///
    /// A completed double click is forgotten so a third click starts over.
    pub fn register(&mut self, post: PostId, now: Instant) -> bool {
        if let Some((last_post, at)) = self.last {
            if last_post == post && now.saturating_duration_since(at) < DOUBLE_CLICK_WINDOW {
                self.last = None;
                return true;
            }
        }
        self.last = Some((post, now));
        false
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
