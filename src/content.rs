//! Static site content: identity constants plus the data behind the
//! services, portfolio and timeline sections. Templates render these
//! directly; nothing here changes at runtime.

pub const APP_NAME: &str = "Haluk İnal Medya";
pub const OWNER_NAME: &str = "Haluk İnal";
pub const CONTACT_EMAIL: &str = "iletisim@halukinal.com";
pub const TAGLINE: &str =
    "Profesyonel prodüksiyon çözümleri için yapay zeka asistanımızla projenizi planlayın.";

/// Display name used as the mail sender for assistant-generated reports.
pub const ASSISTANT_SENDER_NAME: &str = "Haluk İnal Asistan";

/// Inbox that receives project reports and contact-form messages.
pub const REPORT_RECIPIENT: &str = "halukinal@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Engineering,
    Media,
}

impl Category {
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Engineering => "engineering",
            Category::Media => "media",
        }
    }

    /// Maps a portfolio filter query value to a category. Anything that is
    /// not a known slug means "show everything".
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "engineering" => Some(Category::Engineering),
            "media" => Some(Category::Media),
            _ => None,
        }
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Contact", href: "#contact" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Full-stack applications using Next.js and Firebase. High performance and SEO optimized.",
    },
    Service {
        title: "Video Production",
        description: "End-to-end video production from storyboarding to final post-production and color grading.",
    },
    Service {
        title: "Motion Graphics",
        description: "Compelling 2D/3D animations for brand intros, explainers, and UI interactions.",
    },
    Service {
        title: "Photography",
        description: "Professional event and portrait photography with high-end retouching.",
    },
    Service {
        title: "Social Media Strategy",
        description: "Content planning and visual identity design for digital growth.",
    },
    Service {
        title: "Backend Architecture",
        description: "Scalable database design and API development using modern cloud solutions.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Neon City Commercial",
        category: Category::Media,
        description: "A cyberpunk-themed commercial for a local fashion brand shot on Sony A7SIII.",
        image_url: "https://picsum.photos/800/600?random=1",
        tags: &["Premiere Pro", "After Effects", "Color Grading"],
    },
    Project {
        title: "E-Commerce Dashboard",
        category: Category::Engineering,
        description: "Full-stack analytics dashboard with real-time sales tracking via WebSockets.",
        image_url: "https://picsum.photos/800/600?random=2",
        tags: &["Next.js", "TypeScript", "Firebase"],
    },
    Project {
        title: "University AI Research",
        category: Category::Engineering,
        description: "Machine learning model for image recognition integrated into a React Native app.",
        image_url: "https://picsum.photos/800/600?random=3",
        tags: &["Python", "TensorFlow", "React Native"],
    },
    Project {
        title: "Travel Vlog 2023",
        category: Category::Media,
        description: "Cinematic travel documentation of Turkey's Aegean coast.",
        image_url: "https://picsum.photos/800/600?random=4",
        tags: &["Direction", "Editing", "Sound Design"],
    },
    Project {
        title: "Portfolio V1",
        category: Category::Engineering,
        description: "My previous portfolio site built with Gatsby and GSAP.",
        image_url: "https://picsum.photos/800/600?random=5",
        tags: &["Gatsby", "GSAP", "CSS"],
    },
    Project {
        title: "Tech Review Series",
        category: Category::Media,
        description: "YouTube tech review channel branding and video editing package.",
        image_url: "https://picsum.photos/800/600?random=6",
        tags: &["YouTube", "Branding", "Motion Graphics"],
    },
];

/// Portfolio entries matching the given filter, in declaration order.
pub fn filtered_projects(filter: Option<Category>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| filter.map_or(true, |f| p.category == f))
        .collect()
}

pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2024",
        title: "Senior Computer Engineering Student",
        description: "Specializing in Full Stack Development and AI integration at university.",
        category: Category::Engineering,
    },
    TimelineEntry {
        year: "2023",
        title: "Freelance Video Producer",
        description: "Directed and edited commercial projects for local brands using Premiere Pro & After Effects.",
        category: Category::Media,
    },
    TimelineEntry {
        year: "2022",
        title: "Frontend Internship",
        description: "Developed internal tools using React and TypeScript for a tech startup.",
        category: Category::Engineering,
    },
    TimelineEntry {
        year: "2021",
        title: "Started Content Creation",
        description: "Launched a YouTube channel focusing on tech reviews and cinematic vlogs.",
        category: Category::Media,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_narrows_to_one_category() {
        let media = filtered_projects(Some(Category::Media));
        assert_eq!(media.len(), 3);
        assert!(media.iter().all(|p| p.category == Category::Media));

        let all = filtered_projects(None);
        assert_eq!(all.len(), PROJECTS.len());
    }

    #[test]
    fn unknown_filter_value_means_all() {
        assert_eq!(Category::from_filter("media"), Some(Category::Media));
        assert_eq!(Category::from_filter("engineering"), Some(Category::Engineering));
        assert_eq!(Category::from_filter("all"), None);
        assert_eq!(Category::from_filter(""), None);
        assert_eq!(Category::from_filter("Media"), None);
    }
}
