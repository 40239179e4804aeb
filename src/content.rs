//! Static page content: services, portfolio, team, testimonials.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectCategory {
    #[default]
    All,
    Web,
    Mobile,
    Ecommerce,
    Design,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::All,
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Ecommerce,
        ProjectCategory::Design,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            ProjectCategory::All => "projects.filter.all",
            ProjectCategory::Web => "projects.filter.web",
            ProjectCategory::Mobile => "projects.filter.mobile",
            ProjectCategory::Ecommerce => "projects.filter.ecommerce",
            ProjectCategory::Design => "projects.filter.design",
        }
    }
}

pub struct Service {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title_key: "services.webDev.title",
        description_key: "services.webDev.description",
        icon: "</>",
        features: &["Responsive design", "Progressive web apps", "E-commerce solutions"],
    },
    Service {
        title_key: "services.mobileDev.title",
        description_key: "services.mobileDev.description",
        icon: "📱",
        features: &["iOS and Android", "Cross-platform builds", "App store launch"],
    },
    Service {
        title_key: "services.uiux.title",
        description_key: "services.uiux.description",
        icon: "🎨",
        features: &["User research", "Wireframes and prototypes", "Design systems"],
    },
    Service {
        title_key: "services.consulting.title",
        description_key: "services.consulting.description",
        icon: "💡",
        features: &["Technical audits", "Architecture planning", "Team mentoring"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [ProjectCategory],
    pub technologies: &'static [&'static str],
    pub link: &'static str,
    pub github: Option<&'static str>,
}

impl Project {
    pub fn matches(&self, category: ProjectCategory) -> bool {
        category == ProjectCategory::All || self.categories.contains(&category)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Learning Platform",
        description: "A complete learning management system with course creation, enrollment, and progress tracking.",
        categories: &[ProjectCategory::Web, ProjectCategory::Ecommerce],
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        link: "#",
        github: Some("#"),
    },
    Project {
        title: "Health & Fitness App",
        description: "Mobile application for tracking workouts, nutrition, and personal wellness goals.",
        categories: &[ProjectCategory::Mobile],
        technologies: &["Flutter", "Firebase", "RESTful API"],
        link: "#",
        github: None,
    },
    Project {
        title: "Real Estate Marketplace",
        description: "Property listing platform with advanced search, virtual tours, and agent connections.",
        categories: &[ProjectCategory::Web, ProjectCategory::Ecommerce],
        technologies: &["Vue.js", "Laravel", "MySQL"],
        link: "#",
        github: Some("#"),
    },
    Project {
        title: "Restaurant Ordering System",
        description: "Streamlined ordering process for restaurants with kitchen dashboard and inventory management.",
        categories: &[ProjectCategory::Web, ProjectCategory::Mobile],
        technologies: &["React Native", "Express.js", "MongoDB"],
        link: "#",
        github: None,
    },
    Project {
        title: "Travel Companion App",
        description: "Trip planning and itinerary management with local recommendations and booking capabilities.",
        categories: &[ProjectCategory::Mobile, ProjectCategory::Design],
        technologies: &["Swift", "Node.js", "PostgreSQL"],
        link: "#",
        github: None,
    },
    Project {
        title: "Brand Identity System",
        description: "Comprehensive brand design including logo, color palette, typography, and usage guidelines.",
        categories: &[ProjectCategory::Design],
        technologies: &["Adobe CC", "Figma", "Brand Strategy"],
        link: "#",
        github: None,
    },
];

pub fn projects_in(category: ProjectCategory) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.matches(category))
}

pub struct Stat {
    pub value: &'static str,
    pub label_key: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label_key: "about.stats.clients" },
    Stat { value: "100+", label_key: "about.stats.projects" },
    Stat { value: "10+", label_key: "about.stats.awards" },
    Stat { value: "5+", label_key: "about.stats.experience" },
];

pub struct Value {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        title_key: "about.values.innovation",
        description_key: "about.values.innovation.desc",
    },
    Value {
        title_key: "about.values.quality",
        description_key: "about.values.quality.desc",
    },
    Value {
        title_key: "about.values.collaboration",
        description_key: "about.values.collaboration.desc",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub github: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Johnson",
        role: "CEO & Lead Developer",
        bio: "Full-stack developer with 10+ years of experience leading complex projects and innovations in web technologies.",
        linkedin: Some("#"),
        twitter: Some("#"),
        github: Some("#"),
        email: None,
    },
    TeamMember {
        name: "Michael Chen",
        role: "CTO & Backend Specialist",
        bio: "Expert in scalable architecture with extensive experience in cloud infrastructure and database optimization.",
        linkedin: Some("#"),
        twitter: None,
        github: Some("#"),
        email: Some("michael@lovabletech.com"),
    },
    TeamMember {
        name: "Elena Rodriguez",
        role: "UI/UX Design Lead",
        bio: "Award-winning designer focused on creating intuitive, accessible, and visually stunning user experiences.",
        linkedin: Some("#"),
        twitter: Some("#"),
        github: None,
        email: Some("elena@lovabletech.com"),
    },
    TeamMember {
        name: "David Kim",
        role: "Mobile Development Lead",
        bio: "Mobile specialist with expertise in Flutter, React Native, and native iOS/Android development.",
        linkedin: Some("#"),
        twitter: None,
        github: Some("#"),
        email: Some("david@lovabletech.com"),
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Lovable Tech transformed our outdated platform into a cutting-edge system that our customers love. Their attention to detail and commitment to quality is unmatched.",
        name: "Jessica Martinez",
        role: "CTO",
        company: "FinTech Solutions Inc.",
    },
    Testimonial {
        quote: "Working with the team at Lovable Tech was a game-changer for our startup. They delivered our MVP ahead of schedule, allowing us to secure additional funding sooner than expected.",
        name: "Robert Chen",
        role: "Co-founder",
        company: "Spark Innovations",
    },
    Testimonial {
        quote: "The e-commerce platform they built for us increased our conversion rates by 40%. Their UX expertise and technical knowledge created a seamless shopping experience.",
        name: "Amanda Williams",
        role: "Marketing Director",
        company: "Urban Lifestyle Brands",
    },
    Testimonial {
        quote: "As a healthcare provider, security and reliability are paramount. Lovable Tech delivered a system that not only meets our strict compliance requirements but is also intuitive for our staff.",
        name: "Dr. Michael Turner",
        role: "Medical Director",
        company: "Health Partners Network",
    },
    Testimonial {
        quote: "From concept to execution, the team demonstrated exceptional creativity and technical skill. Our new website has significantly improved our brand perception.",
        name: "Sarah Johnson",
        role: "CEO",
        company: "Design Collective",
    },
    Testimonial {
        quote: "Their dedication to understanding our unique business challenges resulted in custom software that streamlined our operations and reduced costs by 30%.",
        name: "Thomas Rodriguez",
        role: "Operations Manager",
        company: "Global Logistics",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_every_project() {
        assert_eq!(projects_in(ProjectCategory::All).count(), PROJECTS.len());
    }

    #[test]
    fn test_category_filter() {
        let titles: Vec<&str> = projects_in(ProjectCategory::Design).map(|p| p.title).collect();
        assert_eq!(titles, vec!["Travel Companion App", "Brand Identity System"]);
        assert_eq!(projects_in(ProjectCategory::Ecommerce).count(), 2);
        assert_eq!(projects_in(ProjectCategory::Web).count(), 3);
        assert_eq!(projects_in(ProjectCategory::Mobile).count(), 3);
    }

    #[test]
    fn test_initials() {
        assert_eq!(TEAM[1].initials(), "MC");
    }
}
