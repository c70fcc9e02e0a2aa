/// One-shot reveal state for a single observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection notification. Returns `true` only for the
    /// notification that reveals the element; the caller should stop
    /// observing it at that point.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Class list for a reveal wrapper; blank extras add nothing.
pub fn reveal_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {}", extra)
    }
}
