use serde::Serialize;

use crate::error::FolioError;

/// Classification tag for a portfolio project.
///
/// The declaration order is the display order of the category tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    GraphicDesign,
    WebDesign,
    Flyers,
    BrandIdentity,
}

impl Category {
    pub const ALL: &[Category] = &[
        Self::GraphicDesign,
        Self::WebDesign,
        Self::Flyers,
        Self::BrandIdentity,
    ];

    /// Human-readable label, also the catalog file representation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GraphicDesign => "Graphic Design",
            Self::WebDesign => "Web Design",
            Self::Flyers => "Flyers",
            Self::BrandIdentity => "Brand Identity",
        }
    }

    /// Icon drawn next to the category's projects in the tree.
    pub fn leaf_icon(&self) -> LeafIcon {
        match self {
            Self::GraphicDesign => LeafIcon::Box,
            Self::WebDesign => LeafIcon::Globe,
            Self::Flyers => LeafIcon::Users,
            Self::BrandIdentity => LeafIcon::Layers,
        }
    }

    /// Position in the fixed enumeration order.
    pub fn ordinal(&self) -> usize {
        match self {
            Self::GraphicDesign => 0,
            Self::WebDesign => 1,
            Self::Flyers => 2,
            Self::BrandIdentity => 3,
        }
    }

    pub fn from_label(s: &str) -> Result<Self, FolioError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| FolioError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafIcon {
    Box,
    Globe,
    Users,
    Layers,
}

/// A single portfolio entry.
///
/// `id` is a display key only: the built-in catalog reuses one id for two
/// different projects, so nothing indexes by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category: Category,
    pub image_url: String,
}

impl ProjectEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        category: Category,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            category,
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()).unwrap(), *category);
        }
    }

    #[test]
    fn test_unknown_label() {
        match Category::from_label("Motion Design") {
            Err(FolioError::UnknownCategory(s)) => assert_eq!(s, "Motion Design"),
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_leaf_icon_per_category() {
        assert_eq!(Category::GraphicDesign.leaf_icon(), LeafIcon::Box);
        assert_eq!(Category::WebDesign.leaf_icon(), LeafIcon::Globe);
        assert_eq!(Category::Flyers.leaf_icon(), LeafIcon::Users);
        assert_eq!(Category::BrandIdentity.leaf_icon(), LeafIcon::Layers);
    }

    #[test]
    fn test_ordinal_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.ordinal(), i);
        }
    }
}
