use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    pub projects_completed: u32,
    pub clients_satisfied: u32,
    pub years_experience: u32,
    pub technologies_mastered: u32,
}

#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub location: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "neural-dashboard",
        title: "Neural Dashboard",
        category: "Web Development",
        description: "Full-stack web application with real-time data visualization and analytics.",
        technologies: &["Rust", "TypeScript", "WebGL", "PostgreSQL"],
        live_url: Some("https://neural-dashboard.brm.dev"),
        github_url: Some("https://github.com/brm/neural-dashboard"),
    },
    Project {
        id: "network-infrastructure",
        title: "Network Infrastructure",
        category: "Networking",
        description: "Enterprise network architecture design with automated monitoring and security protocols.",
        technologies: &["Cisco", "Python", "Docker", "Kubernetes"],
        live_url: None,
        github_url: None,
    },
    Project {
        id: "brand-identity",
        title: "Brand Identity System",
        category: "Graphic Design",
        description: "Complete visual identity including logo design, typography, and digital brand guidelines.",
        technologies: &["Figma", "Adobe CC", "Blender", "After Effects"],
        live_url: None,
        github_url: None,
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React/Next.js", level: 95, category: "frontend" },
    Skill { name: "TypeScript", level: 92, category: "frontend" },
    Skill { name: "Three.js/WebGL", level: 88, category: "frontend" },
    Skill { name: "Network Security", level: 92, category: "networking" },
    Skill { name: "UI/UX Design", level: 85, category: "design" },
    Skill { name: "DevOps/Cloud", level: 90, category: "backend" },
    Skill { name: "Motion Graphics", level: 82, category: "design" },
];

pub const STATS: Stats = Stats {
    projects_completed: 50,
    clients_satisfied: 25,
    years_experience: 5,
    technologies_mastered: 20,
};

pub const CONTACT: ContactInfo = ContactInfo {
    email: "contact@brm.dev",
    linkedin: "https://linkedin.com/in/brm",
    github: "https://github.com/brm",
    location: "Cape Town, South Africa",
};
