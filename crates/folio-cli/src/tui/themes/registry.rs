//! Theme registry for discovering and accessing themes

use std::collections::HashMap;

use folio_core::constants::ui::DEFAULT_THEME;

use super::{definitions, Theme};

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    fallback: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            fallback: definitions::midnight(),
        };

        registry.register(definitions::midnight());
        registry.register(definitions::paper());
        registry.register(definitions::phosphor());
        registry.register(definitions::terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or(&self.fallback)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_registered() {
        let registry = ThemeRegistry::new();
        assert!(registry.get(DEFAULT_THEME).is_some());
        assert_eq!(registry.get_or_default("nope").name, DEFAULT_THEME);
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let registry = ThemeRegistry::new();
        let names: Vec<&str> = registry.list().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names.first(), Some(&"midnight"));
        assert_eq!(names.len(), registry.count());
    }
}
