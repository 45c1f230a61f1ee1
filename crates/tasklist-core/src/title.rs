use crate::EditableText;

/// Editable heading of the widget. The drag region and the minimize/quit
/// menu hang off it; the only state it owns is the text.
#[derive(Clone, Debug)]
pub struct TitleBar {
    title: EditableText,
}

impl TitleBar {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            title: EditableText::new(text),
        }
    }

    pub fn text(&self) -> &str {
        self.title.text()
    }

    pub fn editor(&self) -> &EditableText {
        &self.title
    }

    pub fn editor_mut(&mut self) -> &mut EditableText {
        &mut self.title
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new("TODO")
    }
}
