//! Compiled-in content shown on the home page.

use crate::i18n::{Lang, Text};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Frontend,
    Backend,
    Mobile,
}

impl Category {
    /// Filters in the order the buttons are rendered.
    pub const FILTERS: [Category; 4] = [
        Category::All,
        Category::Frontend,
        Category::Backend,
        Category::Mobile,
    ];

    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Category::All => lang.pick("All", "Tous"),
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Mobile => "Mobile",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        self == Category::All || project.categories.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: Text,
    pub description: Text,
    pub stack: &'static [&'static str],
    pub categories: &'static [Category],
    pub year: &'static str,
}

/// Projects visible under `category`, in table order.
pub fn filter_projects(category: Category) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| category.matches(p)).collect()
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "content-platform",
        title: Text::new(
            "Content Creation Platform",
            "Plateforme de création de contenu",
        ),
        description: Text::new(
            "Content creation & publishing platform for digital agencies with reusable UI and SEO‑ready frontend.",
            "Plateforme de création et publication de contenu pour agences digitales avec UI réutilisable et frontend optimisé SEO.",
        ),
        stack: &["Next.js", "Supabase", "PostgreSQL"],
        categories: &[Category::Frontend, Category::Backend],
        year: "2025–2026",
    },
    Project {
        id: "ecommerce-pools",
        title: Text::new(
            "Pool Equipment E‑commerce",
            "E‑commerce équipements de piscine",
        ),
        description: Text::new(
            "Custom e‑commerce and service booking system for pool equipment, with payment integrations and AWS deployment.",
            "Plateforme e‑commerce et réservation de services pour équipements de piscine avec paiements intégrés et déploiement AWS.",
        ),
        stack: &["Laravel", "MySQL", "Flutter", "AWS"],
        categories: &[Category::Frontend, Category::Backend, Category::Mobile],
        year: "2025",
    },
    Project {
        id: "microfinance-app",
        title: Text::new(
            "Microfinance Client Support App",
            "Application support clients microfinance",
        ),
        description: Text::new(
            "Mobile app and API layer to manage microfinance customer accounts and improve client experience.",
            "Application mobile et couche API pour gérer les comptes clients microfinance et améliorer l’expérience utilisateur.",
        ),
        stack: &["Flutter", "Laravel", "Golang", "MySQL"],
        categories: &[Category::Backend, Category::Mobile],
        year: "2024–2025",
    },
    Project {
        id: "customs-tasks",
        title: Text::new(
            "Customs Office Task Manager",
            "Gestionnaire de tâches pour douanes",
        ),
        description: Text::new(
            "Internal web tool to track tasks and workflows for a customs office.",
            "Outil web interne pour suivre les tâches et workflows d’un bureau des douanes.",
        ),
        stack: &["Laravel", "MySQL"],
        categories: &[Category::Backend, Category::Frontend],
        year: "2024",
    },
    Project {
        id: "personal-portfolio",
        title: Text::new(
            "Internationalized Personal Portfolio",
            "Portfolio personnel internationalisé",
        ),
        description: Text::new(
            "Modern portfolio with internationalization to showcase full‑stack and mobile projects.",
            "Portfolio moderne avec internationalisation pour présenter les projets full‑stack et mobile.",
        ),
        stack: &["Rust", "Leptos", "Tailwind CSS"],
        categories: &[Category::Frontend],
        year: "2023–2024",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub role: Text,
    pub period: Text,
    pub tech: &'static [&'static str],
    pub bullets: &'static [Text],
}

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        id: "content-platform",
        company: "Havet Digital & OnirTech Madagascar",
        role: Text::new(
            "Content Creation Platform – Freelance",
            "Plateforme de création de contenu – Freelance",
        ),
        period: Text::new(
            "Oct 2025 – Jan 2026 (ongoing)",
            "Octobre 2025 – Janvier 2026 (en cours)",
        ),
        tech: &["Next.js", "Supabase", "PostgreSQL"],
        bullets: &[
            Text::new(
                "Built a content creation and publishing platform with reusable UI components.",
                "Développement d'une plateforme de création et publication de contenu avec des composants UI réutilisables.",
            ),
            Text::new(
                "Improved performance, responsiveness and overall user experience.",
                "Amélioration des performances, de la réactivité et de l'expérience utilisateur globale.",
            ),
            Text::new(
                "Contributed to internationalization (i18n) and SEO optimization.",
                "Contribution à l'internationalisation (i18n) et à l'optimisation SEO.",
            ),
        ],
    },
    Experience {
        id: "ecommerce-pool",
        company: "Les piscines de Romain",
        role: Text::new(
            "E‑commerce & Services – Freelance",
            "Plateforme e‑commerce & services – Freelance",
        ),
        period: Text::new("Mar 2025 – Oct 2025", "Mars 2025 – Octobre 2025"),
        tech: &["Laravel", "MySQL", "Flutter", "AWS"],
        bullets: &[
            Text::new(
                "Designed and delivered a custom e‑commerce platform for pool equipment and services.",
                "Analyse des besoins et conception d'une plateforme e‑commerce sur mesure pour les équipements et services de piscine.",
            ),
            Text::new(
                "Developed web and mobile apps and integrated third‑party APIs for payments and services.",
                "Développement des applications web et mobile avec intégration d'APIs tierces (paiements et services).",
            ),
            Text::new(
                "Optimized UI/UX and SEO to increase engagement and conversions, deployed on AWS with CI/CD.",
                "Optimisation de l'UI/UX et du SEO pour augmenter l'engagement et les conversions, déploiement sur AWS avec CI/CD.",
            ),
        ],
    },
    Experience {
        id: "microfinance",
        company: "SMMEC – Microfinance",
        role: Text::new(
            "Microfinance Client Support – Full‑time",
            "Support clients microfinance – Temps plein",
        ),
        period: Text::new("Nov 2024 – Feb 2025", "Novembre 2024 – Février 2025"),
        tech: &["Laravel", "Golang", "Flutter", "MySQL"],
        bullets: &[
            Text::new(
                "Gathered business requirements in the microfinance domain and translated them into features.",
                "Collecte et analyse des besoins métier dans le domaine de la microfinance.",
            ),
            Text::new(
                "Developed and maintained mobile applications and optimized REST APIs for performance.",
                "Développement et maintenance d'applications mobiles et optimisation d'APIs REST pour la performance.",
            ),
            Text::new(
                "Improved SQL queries, database structure and UI/UX for end‑users.",
                "Amélioration des requêtes SQL, de la structure de base de données et de l'UI/UX pour les clients.",
            ),
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub key: &'static str,
    pub value: &'static str,
    pub label: Text,
}

pub static STATS: &[Stat] = &[
    Stat {
        key: "experience",
        value: "1.5+",
        label: Text::new("years of experience", "années d'expérience"),
    },
    Stat {
        key: "clients",
        value: "4+",
        label: Text::new("clients & partners", "clients & partenaires"),
    },
    Stat {
        key: "projects",
        value: "6+",
        label: Text::new("real‑world projects", "projets réels livrés"),
    },
    Stat {
        key: "stack",
        value: "10+",
        label: Text::new("technologies mastered", "technologies maîtrisées"),
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub key: &'static str,
    pub label: Text,
    pub items: &'static [&'static str],
}

impl SkillGroup {
    pub fn count_label(&self, lang: Lang) -> String {
        format!("{} {}", self.items.len(), lang.pick("skills", "compétences"))
    }
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        key: "languages",
        label: Text::new("Languages", "Langages"),
        items: &["JavaScript / TypeScript", "Java", "C#", "Python"],
    },
    SkillGroup {
        key: "frontend",
        label: Text::same("Frontend"),
        items: &["React.js", "Next.js", "Angular"],
    },
    SkillGroup {
        key: "backend",
        label: Text::same("Backend & APIs"),
        items: &["Node.js", "Express.js", "Laravel", "Golang", "REST APIs", "JWT"],
    },
    SkillGroup {
        key: "mobile",
        label: Text::same("Mobile"),
        items: &["Flutter"],
    },
    SkillGroup {
        key: "databases",
        label: Text::new("Databases", "Bases de données"),
        items: &["MySQL", "PostgreSQL", "MongoDB", "Oracle"],
    },
    SkillGroup {
        key: "tools",
        label: Text::new("Tools & DevOps", "Outils & DevOps"),
        items: &["Git / GitHub / GitLab", "AWS basics", "CI/CD fundamentals", "Trello"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_shows_every_project() {
        assert_eq!(filter_projects(Category::All).len(), PROJECTS.len());
    }

    #[test]
    fn test_mobile_filter() {
        let mobile = filter_projects(Category::Mobile);
        assert_eq!(ids(&mobile), vec!["ecommerce-pools", "microfinance-app"]);
        assert!(mobile
            .iter()
            .all(|p| p.categories.contains(&Category::Mobile)));

        // switching back restores the full list
        let all = filter_projects(Category::All);
        assert_eq!(ids(&all), PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_filters_keep_table_order() {
        let backend = filter_projects(Category::Backend);
        assert_eq!(
            ids(&backend),
            vec![
                "content-platform",
                "ecommerce-pools",
                "microfinance-app",
                "customs-tasks"
            ]
        );
        let frontend = filter_projects(Category::Frontend);
        assert_eq!(frontend.last().map(|p| p.id), Some("personal-portfolio"));
    }

    #[test]
    fn test_every_project_has_a_real_category() {
        for p in PROJECTS {
            assert!(!p.categories.is_empty(), "{} has no category", p.id);
            assert!(!p.categories.contains(&Category::All));
        }
    }

    #[test]
    fn test_skill_count_label() {
        let backend = SKILL_GROUPS
            .iter()
            .find(|g| g.key == "backend")
            .expect("backend group");
        assert_eq!(backend.count_label(Lang::En), "6 skills");
        assert_eq!(backend.count_label(Lang::Fr), "6 compétences");
    }
}
