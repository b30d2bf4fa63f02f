//! Narrated event log consumed by the UI panel.

use std::collections::VecDeque;

use crate::types::Tint;

/// Visible line budget; the oldest line is dropped once the buffer is full.
pub const LOG_LINES: usize = 6;

#[derive(Default)]
pub struct MessageLog {
    lines: VecDeque<(String, Tint)>,
}

impl MessageLog {
    pub fn push(&mut self, text: impl Into<String>, tint: Tint) {
        if self.lines.len() == LOG_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back((text.into(), tint));
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, Tint)> {
        self.lines.iter().map(|(text, tint)| (text.as_str(), *tint))
    }

    pub fn latest(&self) -> Option<(&str, Tint)> {
        self.lines.back().map(|(text, tint)| (text.as_str(), *tint))
    }
}

/// Upper-cases the first letter, the way attack narration names its subject.
pub(crate) fn capitalise(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_drops_oldest_line_past_capacity() {
        let mut log = MessageLog::default();
        for i in 0..LOG_LINES + 2 {
            log.push(format!("line {i}"), Tint::White);
        }
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines.len(), LOG_LINES);
        assert_eq!(lines[0].0, "line 2");
        assert_eq!(log.latest().unwrap().0, format!("line {}", LOG_LINES + 1));
    }

    #[test]
    fn capitalise_only_touches_the_first_letter() {
        assert_eq!(capitalise("halfling thug"), "Halfling thug");
        assert_eq!(capitalise(""), "");
    }
}
