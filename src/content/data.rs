use crate::content::model::{
    Contact, ContactKind, Education, Experience, Project, SectionDescriptor, SiteContent, Skill,
    SkillCategory,
};

/// Professional-network profile opened from the contact section.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jordan-reyes-dev";
/// Code-hosting profile opened from the contact section.
pub const GITHUB_URL: &str = "https://github.com/jordan-reyes";
/// Fixed recipient of the `mailto:` link.
pub const EMAIL_ADDRESS: &str = "hello@jordanreyes.dev";

/// Section ids and labels in display order.
pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// The stock section list.
pub fn default_sections() -> Vec<SectionDescriptor> {
    SECTIONS
        .iter()
        .map(|(id, label)| SectionDescriptor::new(*id, *label))
        .collect()
}

fn skill(name: &str, category: SkillCategory) -> Skill {
    Skill {
        name: name.to_owned(),
        category,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Built-in page content.
pub fn builtin_content() -> SiteContent {
    SiteContent {
        headline: "Hi, I'm Jordan Reyes".to_owned(),
        tagline: "Full-stack engineer building fast, accessible web products.".to_owned(),
        sections: default_sections(),
        about: strings(&[
            "I design and ship web applications end to end, from database schema to the last \
             pixel of the interface.",
            "Lately I care most about performance budgets, motion that helps rather than \
             distracts, and tooling that keeps small teams fast.",
        ]),
        experience: vec![
            Experience {
                role: "Senior Frontend Engineer".to_owned(),
                company: "Northwind Labs".to_owned(),
                period: "2022 - Present".to_owned(),
                highlights: strings(&[
                    "Led the migration of the customer dashboard to a component library.",
                    "Cut largest contentful paint by 40% through code splitting.",
                ]),
            },
            Experience {
                role: "Software Engineer".to_owned(),
                company: "Brightline Studio".to_owned(),
                period: "2019 - 2022".to_owned(),
                highlights: strings(&[
                    "Built booking and payments flows for three client products.",
                    "Introduced end-to-end tests into the release pipeline.",
                ]),
            },
        ],
        education: vec![Education {
            institution: "State University".to_owned(),
            degree: "B.Sc. Computer Science".to_owned(),
            period: "2015 - 2019".to_owned(),
        }],
        projects: vec![
            Project {
                title: "Trailmap".to_owned(),
                description: "Offline-first hiking planner with vector map tiles.".to_owned(),
                tech: strings(&["TypeScript", "Service Workers", "MapLibre"]),
                url: Some("https://github.com/jordan-reyes/trailmap".to_owned()),
            },
            Project {
                title: "Ledgerly".to_owned(),
                description: "Shared expense tracker with real-time sync.".to_owned(),
                tech: strings(&["Rust", "WebSockets", "PostgreSQL"]),
                url: Some("https://github.com/jordan-reyes/ledgerly".to_owned()),
            },
            Project {
                title: "Palette".to_owned(),
                description: "Design-token generator for accessible color systems.".to_owned(),
                tech: strings(&["Node.js", "CLI"]),
                url: None,
            },
        ],
        skills: vec![
            skill("TypeScript", SkillCategory::Language),
            skill("Rust", SkillCategory::Language),
            skill("Python", SkillCategory::Language),
            skill("React", SkillCategory::Framework),
            skill("Node.js", SkillCategory::Framework),
            skill("Tailwind CSS", SkillCategory::Framework),
            skill("PostgreSQL", SkillCategory::Tooling),
            skill("Docker", SkillCategory::Tooling),
            skill("Git", SkillCategory::Tooling),
        ],
        contacts: vec![
            Contact {
                kind: ContactKind::Email,
                label: "Email".to_owned(),
                target: EMAIL_ADDRESS.to_owned(),
            },
            Contact {
                kind: ContactKind::LinkedIn,
                label: "LinkedIn".to_owned(),
                target: LINKEDIN_URL.to_owned(),
            },
            Contact {
                kind: ContactKind::GitHub,
                label: "GitHub".to_owned(),
                target: GITHUB_URL.to_owned(),
            },
        ],
    }
}
