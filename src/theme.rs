/// The page-wide color scheme. Transient UI state only - never persisted,
/// never read from system preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set applied to the page root. The `dark` marker class drives
    /// the Tailwind `dark:` variants everywhere below it.
    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-100 text-black",
            Theme::Dark => "dark bg-gray-900 text-white",
        }
    }

    /// Caption for the nav toggle button - names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(theme.toggled().toggled().page_class(), theme.page_class());
        }
    }

    #[test]
    fn test_modes_render_distinct_classes() {
        assert_ne!(Theme::Light.page_class(), Theme::Dark.page_class());
        assert!(Theme::Dark.page_class().contains("dark"));
        assert!(!Theme::Light.page_class().contains("dark"));
    }

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    }
}
