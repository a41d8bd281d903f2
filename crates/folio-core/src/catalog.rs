//! The project catalog: the compiled-in list of portfolio entries, plus an
//! optional TOML catalog that replaces it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::FolioError;
use crate::models::{Category, ProjectEntry};

use Category::*;

/// `(id, name, url, category, image)` rows of the built-in catalog.
const BUILTIN: &[(&str, &str, &str, Category, &str)] = &[
    ("1", "AiSolves", "https://dribbble.com/shots/24572059-Ai-Solvess", WebDesign, "https://cdn.dribbble.com/userupload/12037524/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("2", "Aleatory", "https://dribbble.com/shots/24572108-Aleatory", WebDesign, "https://cdn.dribbble.com/userupload/12037573/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("3", "Smartpro", "https://www.behance.net/gallery/176340759/Catalogo-de-producto-SmartPro", BrandIdentity, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/35f9f9176340759.64c7e7a9e6f11.jpg"),
    ("4", "Evolution", "https://www.behance.net/gallery/181161137/Evolution", GraphicDesign, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/d46d7e181161137.651a9f1f6ff91.jpg"),
    ("5", "Vynil Cover", "https://dribbble.com/shots/22212739-Cat-with-drip", GraphicDesign, "https://cdn.dribbble.com/userupload/7743321/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("6", "Touché Sports", "https://www.behance.net/gallery/145489119/Touch-Sports", GraphicDesign, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/b4b51e145489119.62a0d2a0e3a1f.jpg"),
    ("7", "Miche Barbershop", "https://www.behance.net/gallery/176339339/Miche-Barbershop", BrandIdentity, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/c1f5e9176339339.64c7e5f0a0c1a.jpg"),
    ("8", "Valkiria", "https://www.behance.net/gallery/142578631/Valkiria", BrandIdentity, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/b8e51b142578631.626b0c3f4fc5f.jpg"),
    ("9", "Hefesto Vynil Cover", "https://www.behance.net/gallery/142401081/Hefesto", GraphicDesign, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/a75baf142401081.6266f2c6a40e4.jpg"),
    ("10", "gh0ts portfolio", "https://gh0t.art", WebDesign, "/placeholder.svg?height=159&width=238"),
    ("11", "Suburbia", "https://www.behance.net/gallery/142399405/Suburbia", Flyers, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/b1c72e142399405.6266edb8a2cc7.jpg"),
    ("12", "Dreamers", "https://dribbble.com/shots/18051117-Dreamers", Flyers, "https://cdn.dribbble.com/userupload/7743321/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("13", "Graphic design is my passion", "https://dribbble.com/shots/18051122-Graphic-design-is-my-passion", Flyers, "https://cdn.dribbble.com/users/1803663/screenshots/18051122/media/c9c4d2d2d2d2d2d2d2d2d2d2d2d2d2d2.jpg?resize=400x300"),
    ("14", "Techno party", "https://dribbble.com/shots/22212787-TECHNO-FLYER", Flyers, "https://cdn.dribbble.com/userupload/7743369/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("15", "Emotions", "https://dribbble.com/shots/22280887-Emotions", Flyers, "https://cdn.dribbble.com/userupload/7811517/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("16", "Emotions pt2", "https://dribbble.com/shots/22401925-Casual-wednesday-art", Flyers, "https://cdn.dribbble.com/userupload/7932463/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("17", "Teen Age Mutants", "https://dribbble.com/shots/24571936-Teen-age-mutants", Flyers, "https://cdn.dribbble.com/userupload/12037401/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("18", "Brokers Ads", "https://www.behance.net/gallery/176392849/Landing-BrokersAds", WebDesign, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/35f9f9176392849.64c8b1a9e6f11.jpg"),
    ("19", "Seneca insumos", "https://dribbble.com/shots/24572243-S-neca-Insumos", BrandIdentity, "https://cdn.dribbble.com/userupload/12037708/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("20", "S.ph", "https://dribbble.com/shots/24572360-S-ph", BrandIdentity, "https://cdn.dribbble.com/userupload/12037825/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("21", "LVM AUTOMOTORES", "https://dribbble.com/shots/24572419-LVM-Automotores", BrandIdentity, "https://cdn.dribbble.com/userupload/12037884/file/original-c0c5c5c5c5c5c5c5c5c5c5c5c5c5c5c5.png?resize=400x300"),
    ("22", "Fundación claves", "https://www.behance.net/gallery/183766575/Fundacion-Claves", BrandIdentity, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/35f9f9183766575.654a9f1f6ff91.jpg"),
    ("23", "Loyal Insumos", "https://www.behance.net/gallery/183948887/Tarjetas-Personales", BrandIdentity, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/35f9f9183948887.654f9f1f6ff91.jpg"),
    ("23", "Loyal Insumos", "https://l2-jade-v1.vercel.app/", WebDesign, "https://mir-s3-cdn-cf.behance.net/project_modules/fs/35f9f9183948887.654f9f1f6ff91.jpg"),
];

/// Wrapper for TOML deserialization.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    project: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    id: String,
    name: String,
    url: String,
    category: String,
    image: String,
}

/// An ordered, immutable list of portfolio entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ProjectEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<ProjectEntry>) -> Self {
        Self { entries }
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|&(id, name, url, category, image)| {
                    ProjectEntry::new(id, name, url, category, image)
                })
                .collect(),
        )
    }

    /// Parse a TOML catalog made of `[[project]]` tables.
    ///
    /// An unknown category label or a non-absolute project url rejects the
    /// whole catalog.
    pub fn from_toml(toml_str: &str) -> Result<Self, FolioError> {
        let file: CatalogFile =
            toml::from_str(toml_str).map_err(|e| FolioError::Catalog(e.to_string()))?;

        let entries = file
            .project
            .into_iter()
            .map(|raw| {
                let category = Category::from_label(&raw.category)?;
                url::Url::parse(&raw.url).map_err(|e| FolioError::InvalidUrl {
                    url: raw.url.clone(),
                    reason: e.to_string(),
                })?;
                Ok(ProjectEntry::new(raw.id, raw.name, raw.url, category, raw.image))
            })
            .collect::<Result<Vec<_>, FolioError>>()?;

        Ok(Self::new(entries))
    }

    /// Read and parse a TOML catalog file.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.len(),
            "Loaded external catalog"
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids used by more than one entry, in ascending id order.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.id.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(id, _)| id.to_string())
            .collect()
    }

    /// Log reused ids once. They are only display keys, so this is not an error.
    pub fn warn_duplicate_ids(&self) {
        let duplicates = self.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!(
                ids = ?duplicates,
                "Catalog reuses project ids; entries are keyed by position instead"
            );
        }
    }
}

/// Load the project list.
///
/// The catalog is in memory; the call is async so callers load it the same
/// way they would load remote data.
pub async fn fetch_projects(catalog: Catalog) -> Vec<ProjectEntry> {
    catalog.entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 24);
        assert_eq!(catalog.entries()[0].name, "AiSolves");
        assert_eq!(catalog.entries()[23].url, "https://l2-jade-v1.vercel.app/");
    }

    #[test]
    fn test_builtin_duplicate_id_is_reported() {
        assert_eq!(Catalog::builtin().duplicate_ids(), vec!["23".to_string()]);
    }

    #[test]
    fn test_from_toml() {
        let toml_str = r#"
            [[project]]
            id = "a"
            name = "Poster"
            url = "https://example.com/poster"
            category = "Flyers"
            image = "https://example.com/poster.png"

            [[project]]
            id = "b"
            name = "Site"
            url = "https://example.com/site"
            category = "Web Design"
            image = ""
        "#;
        let catalog = Catalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].category, Category::Flyers);
        assert_eq!(catalog.entries()[1].category, Category::WebDesign);
        assert!(catalog.duplicate_ids().is_empty());
    }

    #[test]
    fn test_from_toml_unknown_category() {
        let toml_str = r#"
            [[project]]
            id = "a"
            name = "Reel"
            url = "https://example.com/reel"
            category = "Motion"
            image = ""
        "#;
        match Catalog::from_toml(toml_str) {
            Err(FolioError::UnknownCategory(c)) => assert_eq!(c, "Motion"),
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_relative_url() {
        let toml_str = r#"
            [[project]]
            id = "a"
            name = "Local"
            url = "/work/local"
            category = "Flyers"
            image = ""
        "#;
        assert!(matches!(
            Catalog::from_toml(toml_str),
            Err(FolioError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_file() {
        let catalog = Catalog::from_toml("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            "[[project]]\nid = \"1\"\nname = \"X\"\nurl = \"https://x.dev\"\ncategory = \"Brand Identity\"\nimage = \"\"\n",
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.entries()[0].category, Category::BrandIdentity);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load(&dir.path().join("missing.toml")),
            Err(FolioError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_projects_returns_catalog_order() {
        let projects = fetch_projects(Catalog::builtin()).await;
        assert_eq!(projects.len(), 24);
        assert_eq!(projects[3].name, "Evolution");
    }
}
