use serde::{Deserialize, Serialize};

pub type ProjectId = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    All,
    Web,
    Mobile,
    Ui,
    Other,
}

// chip order on the projects page
pub static PROJECT_CATEGORIES: [ProjectCategory; 5] = [
    ProjectCategory::All,
    ProjectCategory::Web,
    ProjectCategory::Mobile,
    ProjectCategory::Ui,
    ProjectCategory::Other,
];

impl ProjectCategory {
    pub fn display(&self) -> &'static str {
        match self {
            ProjectCategory::All => "ALL",
            ProjectCategory::Web => "WEB APPS",
            ProjectCategory::Mobile => "MOBILE APPS",
            ProjectCategory::Ui => "UI/UX DESIGN",
            ProjectCategory::Other => "OTHER",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectCategory::All => true,
            _ => project.category == *self,
        }
    }
}

// optional fields render nothing when absent
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub image: &'static str,
    pub link: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github: Option<&'static str>,
    pub backend_docs: Option<&'static str>,
    pub db_diagram: Option<&'static str>,
}

impl Project {
    pub fn find(id: ProjectId) -> Option<&'static Project> {
        PROJECTS.iter().find(|project| project.id == id)
    }
}

pub static PROJECTS: [Project; 7] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        category: ProjectCategory::Web,
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=500&h=300&fit=crop",
        link: "https://shimmering-scone-089ed6.netlify.app/",
        description: "Full-stack e-commerce platform with React, Node.js, and MongoDB",
        tech_stack: &["React", "Node.js", "MongoDB"],
        github: Some("https://github.com/kalp-cg/ecommerce"),
        backend_docs: Some("https://documenter.getpostman.com/view/ecommerce-api"),
        db_diagram: Some("https://dbdiagram.io/embed/ecommerce-schema"),
    },
    Project {
        id: 2,
        title: "Task Management App",
        category: ProjectCategory::Web,
        image: "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=500&h=300&fit=crop",
        link: "https://regal-truffle-9575c2.netlify.app/",
        description: "React-based task management application with drag-and-drop functionality",
        tech_stack: &["React", "Redux", "Firebase"],
        github: Some("https://github.com/kalp-cg/task-manager"),
        backend_docs: None,
        db_diagram: None,
    },
    Project {
        id: 3,
        title: "Weather Dashboard",
        category: ProjectCategory::Web,
        image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=500&h=300&fit=crop",
        link: "https://odoo-hackathone-round2.vercel.app/",
        description: "Real-time weather application with location-based forecasts",
        tech_stack: &["React", "OpenWeather API"],
        github: None,
        backend_docs: None,
        db_diagram: None,
    },
    Project {
        id: 4,
        title: "Portfolio Website",
        category: ProjectCategory::Web,
        image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=500&h=300&fit=crop",
        link: "https://simple-timer-7v03knwx2-kalp-cgs-projects.vercel.app/",
        description: "Personal portfolio website built with React and Tailwind CSS",
        tech_stack: &["React", "TailwindCSS"],
        github: Some("https://github.com/kalp-cg/portfolio"),
        backend_docs: None,
        db_diagram: None,
    },
    Project {
        id: 5,
        title: "Fitness Tracker",
        category: ProjectCategory::Mobile,
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=500&h=300&fit=crop",
        link: "https://tranquil-kheer-38144e.netlify.app/",
        description: "React Native mobile app for tracking workouts and nutrition",
        tech_stack: &["React Native", "Expo"],
        github: None,
        backend_docs: None,
        db_diagram: None,
    },
    Project {
        id: 6,
        title: "UI Design System",
        category: ProjectCategory::Ui,
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=500&h=300&fit=crop",
        link: "https://heartfelt-bombolone-ca6190.netlify.app/",
        description: "Comprehensive UI design system with reusable components",
        tech_stack: &[],
        github: None,
        backend_docs: None,
        db_diagram: None,
    },
    Project {
        id: 7,
        title: "Browser Chess",
        category: ProjectCategory::Other,
        image: "https://images.unsplash.com/photo-1560174038-da43ac74f01b?w=500&h=300&fit=crop",
        link: "https://chess-html-css-javascript.netlify.app/",
        description: "Two-player chess board written in plain HTML, CSS and JavaScript",
        tech_stack: &["HTML", "CSS", "JavaScript"],
        github: None,
        backend_docs: None,
        db_diagram: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in PROJECTS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(Project::find(1).map(|p| p.title), Some("E-Commerce Platform"));
        assert!(Project::find(999).is_none());
    }

    #[test]
    fn all_matches_everything() {
        assert!(PROJECTS.iter().all(|p| ProjectCategory::All.matches(p)));

        let web: Vec<_> = PROJECTS
            .iter()
            .filter(|p| ProjectCategory::Web.matches(p))
            .collect();
        assert!(web.iter().all(|p| p.category == ProjectCategory::Web));
        assert!(!web.is_empty());
    }
}
