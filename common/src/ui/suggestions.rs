/// Live category suggestions for the edit form's type field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeSuggestions {
    known: Vec<String>,
    open: bool,
}

impl TypeSuggestions {
    pub fn new(known: Vec<String>) -> Self {
        Self { known, open: false }
    }

    pub fn set_known(&mut self, known: Vec<String>) {
        self.known = known;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the dropdown; called on focus and on every keystroke.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dropdown without choosing anything (outside click).
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Closes the dropdown and hands back the chosen category.
    pub fn select(&mut self, value: &str) -> String {
        self.open = false;
        value.to_string()
    }

    /// Known categories containing `query`, ignoring case.
    pub fn matches(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.known
            .iter()
            .filter(|known| known.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions() -> TypeSuggestions {
        TypeSuggestions::new(vec!["Driving".into(), "Language".into(), "Safety".into()])
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let s = suggestions();
        assert_eq!(s.matches("AF"), vec!["Safety"]);
        assert_eq!(s.matches("g"), vec!["Driving", "Language"]);
        assert_eq!(s.matches(""), vec!["Driving", "Language", "Safety"]);
        assert!(s.matches("medical").is_empty());
    }

    #[test]
    fn select_and_dismiss_close_the_dropdown() {
        let mut s = suggestions();
        s.open();
        assert!(s.is_open());
        assert_eq!(s.select("Safety"), "Safety");
        assert!(!s.is_open());

        s.open();
        s.dismiss();
        assert!(!s.is_open());
    }
}
