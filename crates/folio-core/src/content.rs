//! Fixed page copy and bio data shown in the hero, bento grid and contact
//! sections.

use crate::models::{Education, Experience, Language, SocialKind, SocialLink, WorkMode};

pub const OWNER_NAME: &str = "Elio";
pub const OWNER_ALIAS: &str = "gh0t";
pub const CONTACT_EMAIL: &str = "eliolaurencio@gmail.com";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/10qz9Ph16cM620BuBOeCXkEg4QQqELRVv/view?usp=sharing";
pub const PROFILE_IMAGE_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/file-442mUV2YUCv1QocduYoUzBJ5a8QaBZ.png";

pub const HERO_BLURB: &str =
    "Creating eye-catching, easy-to-use designs that make your brand stand out.";

pub const INTRO_HEADING: &str = "Graphic and Web Designer with nearly 10 years of experience";
pub const INTRO_BODY: &str = "Specialized in crafting innovative and user-centered digital \
experiences with a focus on Web3 aesthetics and futuristic, visually striking designs.";

pub const ABOUT_BODY: &str = "Im a graphic designer and web developer with over a decade of \
experience, specializing in creating innovative visual experiences that blend technology and \
aesthetics. Since I was 13, Ive been immersed in the world of design, constantly evolving and \
adapting to new technologies.";

pub const PORTFOLIO_HEADING: &str = "My work";
pub const CONTACT_HEADING: &str = "The road of improving ur brand starts here.";
pub const CONTACT_CTA: &str = "Lets have a chat";

/// Phrases cycled by the contact section tagline.
pub const TAGLINE_WORDS: &[&str] = &["Build,create,deploy awesome websites and grow ur company"];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::LinkedIn,
        url: "https://www.linkedin.com/in/elio-laurencio/",
    },
    SocialLink {
        kind: SocialKind::Dribbble,
        url: "https://dribbble.com/gh0T",
    },
    SocialLink {
        kind: SocialKind::Behance,
        url: "https://behance.net/eliolaurencio",
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        period: "Now",
        role: "Freelance Web and graphic designer",
        company: "g.studio",
        work_mode: WorkMode::Remote,
    },
    Experience {
        period: "2024",
        role: "User Experience Designer",
        company: "AiSolves",
        work_mode: WorkMode::Remote,
    },
    Experience {
        period: "2022 — 2023",
        role: "Senior Graphic Designer",
        company: "Brokers Ads",
        work_mode: WorkMode::OnSite("Agency"),
    },
    Experience {
        period: "2017-2018",
        role: "Webmaster",
        company: "Elevezine",
        work_mode: WorkMode::Remote,
    },
];

pub const LANGUAGES: &[Language] = &[
    Language {
        language: "English",
        level: "B2",
        description: "Professional writing and speaking",
    },
    Language {
        language: "Spanish",
        level: "Native",
        description: "Native speaking and writing",
    },
    Language {
        language: "Portuguese",
        level: "Conversational",
        description: "Conversational writing and speaking",
    },
];

pub const TOOLS: &[&str] = &[
    "Figma",
    "Photoshop",
    "Illustrator",
    "Capcut",
    "Firefly",
    "Next.Js",
];

pub const EDUCATION: &[Education] = &[
    Education {
        period: "2023 — 2023",
        degree: "Prototype figma course",
        institution: "CoderHouse",
    },
    Education {
        period: "2022 — 2023",
        degree: "User Experience",
        institution: "CoderHouse",
    },
    Education {
        period: "2017 — 2019",
        degree: "Multimedia Design",
        institution: "Fundación Universitas",
    },
    Education {
        period: "2016 — 2017",
        degree: "Commercial Advertising Management",
        institution: "Fundación Universitas",
    },
];

/// The `mailto:` link opened by the contact call-to-action.
pub fn contact_mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        assert_eq!(contact_mailto(), "mailto:eliolaurencio@gmail.com");
    }

    #[test]
    fn test_work_mode_badges() {
        assert_eq!(EXPERIENCE[0].work_mode.badge(), "↗ Remote");
        assert_eq!(EXPERIENCE[2].work_mode.badge(), "↗ Agency");
    }

    #[test]
    fn test_outbound_links_are_absolute() {
        for link in SOCIAL_LINKS {
            assert!(url::Url::parse(link.url).is_ok(), "{}", link.url);
        }
        assert!(url::Url::parse(RESUME_URL).is_ok());
        assert!(url::Url::parse(&contact_mailto()).is_ok());
    }
}
