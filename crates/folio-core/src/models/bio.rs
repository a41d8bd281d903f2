use serde::Serialize;

/// How a past position was worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkMode {
    Remote,
    OnSite(&'static str),
}

impl WorkMode {
    /// Badge text shown next to the role.
    pub fn badge(&self) -> String {
        match self {
            Self::Remote => "↗ Remote".to_string(),
            Self::OnSite(label) => format!("↗ {label}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub work_mode: WorkMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub language: &'static str,
    pub level: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub period: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SocialKind {
    LinkedIn,
    Dribbble,
    Behance,
}

impl SocialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Dribbble => "Dribbble",
            Self::Behance => "Behance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
}
