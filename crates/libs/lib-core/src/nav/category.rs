//! Menu category tabs.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Favorites,
    Spot,
    Perp,
}

impl CategoryKind {
    pub fn name(&self) -> &'static str {
        match self {
            CategoryKind::Favorites => "Favorites",
            CategoryKind::Spot => "Spot",
            CategoryKind::Perp => "Perp",
        }
    }

    /// Translation key of the tab label: the name lower-cased, spaces as `-`.
    pub fn label_key(&self) -> String {
        self.name().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tab of the menu: a category and the translation key of its
/// description line (empty for Favorites).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCategory {
    pub kind: CategoryKind,
    pub description: &'static str,
}

impl MenuCategory {
    pub const FAVORITES: MenuCategory = MenuCategory {
        kind: CategoryKind::Favorites,
        description: "",
    };
    pub const SPOT: MenuCategory = MenuCategory {
        kind: CategoryKind::Spot,
        description: "spot-desc",
    };
    pub const PERP: MenuCategory = MenuCategory {
        kind: CategoryKind::Perp,
        description: "perp-desc",
    };

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Tabs shown while the user has no favorites.
pub fn default_categories() -> Vec<MenuCategory> {
    vec![MenuCategory::SPOT, MenuCategory::PERP]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_keys() {
        assert_eq!(CategoryKind::Favorites.label_key(), "favorites");
        assert_eq!(CategoryKind::Spot.label_key(), "spot");
        assert_eq!(CategoryKind::Perp.label_key(), "perp");
    }

    #[test]
    fn test_default_categories() {
        let names: Vec<&str> = default_categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Spot", "Perp"]);
    }
}
