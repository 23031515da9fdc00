//! Status bar shown on the last terminal row of the viewer.

/// Title, last message and key hints for the viewer's bottom row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    /// Window title, e.g. `Hex Viewer: frame.hex`
    pub title: String,
    /// Latest status or error message
    pub message: String,
    /// Key hints for the current refresh mode
    pub hint: String,
}

impl StatusBar {
    pub fn new(title: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: String::new(),
            hint: hint.into(),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Format: " title | message | hint ", empty parts left out.
    pub fn format(&self) -> String {
        let parts: Vec<&str> = [&self.title, &self.message, &self.hint]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();
        format!(" {} ", parts.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_all_parts() {
        let mut bar = StatusBar::new("Hex Viewer: a.hex", "q: quit");
        bar.set_message("size: 4x4");
        assert_eq!(bar.format(), " Hex Viewer: a.hex | size: 4x4 | q: quit ");
    }

    #[test]
    fn test_format_skips_empty_message() {
        let bar = StatusBar::new("t", "h");
        assert_eq!(bar.format(), " t | h ");
    }
}
