//! Label/editor toggle shared by task rows and the title bar.

#[derive(Clone, Debug, PartialEq, Eq)]
enum Mode {
    Display,
    Editing { buffer: String, wants_focus: bool },
}

/// A piece of text that is either shown as a label or edited in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditableText {
    text: String,
    mode: Mode,
}

impl EditableText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: Mode::Display,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Blank text is rejected and leaves the old text.
    pub fn set_text(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.text = text.to_string();
        true
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Reveal the editor, pre-filled with the current text.
    /// Re-activating an open editor keeps its buffer.
    pub fn activate_editor(&mut self) {
        if self.is_editing() {
            return;
        }
        self.mode = Mode::Editing {
            buffer: self.text.clone(),
            wants_focus: true,
        };
    }

    /// Editor contents while editing.
    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match &mut self.mode {
            Mode::Editing { buffer, .. } => Some(buffer),
            Mode::Display => None,
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::Editing { buffer, .. } => Some(buffer),
            Mode::Display => None,
        }
    }

    /// True exactly once after the editor opens.
    pub fn take_focus_request(&mut self) -> bool {
        match &mut self.mode {
            Mode::Editing { wants_focus, .. } => std::mem::take(wants_focus),
            Mode::Display => false,
        }
    }

    /// Close the editor and apply its buffer. Blank buffers keep the old text.
    /// Returns whether the text changed.
    pub fn commit(&mut self) -> bool {
        let Mode::Editing { buffer, .. } = std::mem::replace(&mut self.mode, Mode::Display) else {
            return false;
        };
        if buffer.trim() == self.text {
            return false;
        }
        self.set_text(&buffer)
    }

    /// Close the editor discarding its buffer.
    pub fn cancel(&mut self) {
        self.mode = Mode::Display;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn editor_starts_with_current_text_and_focus() {
        let mut t = EditableText::new("Buy milk");
        assert!(!t.is_editing());
        assert!(!t.take_focus_request());

        t.activate_editor();
        assert_eq!(t.buffer(), Some("Buy milk"));
        assert!(t.take_focus_request());
        assert!(!t.take_focus_request());
    }

    #[test]
    fn commit_applies_buffer_and_hides_editor() {
        let mut t = EditableText::new("Buy milk");
        t.activate_editor();
        *t.buffer_mut().unwrap() = "Buy oat milk ".into();
        assert!(t.commit());
        assert_eq!(t.text(), "Buy oat milk");
        assert!(!t.is_editing());
        assert!(!t.commit());
    }

    #[test]
    fn blank_commit_keeps_previous_text() {
        let mut t = EditableText::new("TODO");
        t.activate_editor();
        t.buffer_mut().unwrap().clear();
        assert!(!t.commit());
        assert_eq!(t.text(), "TODO");
    }

    #[test]
    fn set_text_trims_and_rejects_blank() {
        let mut t = EditableText::new("TODO");
        assert!(!t.set_text("   "));
        assert_eq!(t.text(), "TODO");
        assert!(t.set_text(" Today "));
        assert_eq!(t.text(), "Today");
    }

    #[test]
    fn reactivation_keeps_buffer() {
        let mut t = EditableText::new("a");
        t.activate_editor();
        t.buffer_mut().unwrap().push('b');
        t.activate_editor();
        assert_eq!(t.buffer(), Some("ab"));
        t.cancel();
        assert_eq!(t.text(), "a");
        assert_eq!(t.buffer(), None);
    }
}
