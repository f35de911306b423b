use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// URL for the "Download Resume" button.
pub const RESUME_URL: &str = "https://bit.ly/NitishResume";

/// The string the hero section types out, and the per-character interval.
pub const TYPED_SKILLS: &str = "HTML, CSS, JavaScript, and React.";
pub const TYPING_INTERVAL_MS: u64 = 70;

/// Read-only personal details shown in the hero and the profile modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub avatar: &'static str,
    pub github: &'static str,
    pub instagram: &'static str,
    pub linkedin: &'static str,
    pub marital_status: &'static str,
    pub date_of_birth: NaiveDate,
    pub location: &'static str,
}

impl Profile {
    /// Date of birth as displayed in the profile modal, e.g. "13 May 2003".
    pub fn date_of_birth_display(&self) -> String {
        self.date_of_birth.format("%-d %B %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
}

/// One entry in the work or education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

/// The record handed to the hire-me submit callback. Only ever logged
/// locally - there is no transport behind the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HireRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub fn profile() -> Profile {
    Profile {
        name: "Nitish Kumar",
        avatar: "/profile.png",
        github: "https://github.com/nitish477",
        instagram: "https://instagram.com/nitish_ojha5",
        linkedin: "https://linkedin.com/in/nitish477",
        marital_status: "Single",
        date_of_birth: NaiveDate::from_ymd_opt(2003, 5, 13)
            .expect("date of birth should be a valid date"),
        location: "Pune, India",
    }
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill {
            title: "JavaScript",
            description:
                "Proficient in ES6+ features, asynchronous programming, and modern frameworks.",
        },
        Skill {
            title: "React",
            description:
                "Experienced in building dynamic single-page applications and component-based architecture.",
        },
        Skill {
            title: "CSS & Tailwind CSS",
            description:
                "Skilled in styling websites with modern CSS techniques and Tailwind CSS for utility-first design.",
        },
        Skill {
            title: "HTML",
            description:
                "Strong understanding of HTML5 semantic elements and best practices for accessibility and SEO.",
        },
        Skill {
            title: "Node.js",
            description:
                "Proficient in server-side JavaScript and building RESTful APIs with Express.js.",
        },
        Skill {
            title: "Git & GitHub",
            description:
                "Experienced in version control and collaborative development using Git and GitHub.",
        },
    ]
}

pub fn work_history() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            title: "Web Developer",
            subtitle: "Freelance",
            period: "Jan 2023 - Present",
            description:
                "Building responsive single-page applications for small businesses. Own the full delivery cycle from requirement gathering to deployment.",
        },
        TimelineEntry {
            title: "Frontend Developer Intern",
            subtitle: "TechCulture Solutions, Pune",
            period: "Jun 2022 - Dec 2022",
            description:
                "Implemented reusable React components and converted design mockups into accessible, pixel-accurate pages.",
        },
    ]
}

pub fn education() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            title: "B.Sc. Computer Science",
            subtitle: "Savitribai Phule Pune University",
            period: "2020 - 2023",
            description:
                "Coursework in data structures, databases, and web technologies.",
        },
        TimelineEntry {
            title: "HSC, Science",
            subtitle: "Fergusson College, Pune",
            period: "2018 - 2020",
            description: "Physics, Chemistry, and Mathematics with Computer Science elective.",
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-Commerce Storefront",
            description:
                "Storefront with cart, checkout flow, and an admin dashboard for inventory management.",
            tags: &["React", "Node.js", "Express"],
            demo_url: None,
            source_url: Some("https://github.com/nitish477/ecommerce-storefront"),
        },
        Project {
            title: "Weather Dashboard",
            description:
                "City search with live conditions and a five-day forecast, backed by a public weather API.",
            tags: &["JavaScript", "REST APIs", "CSS"],
            demo_url: Some("https://nitish477.github.io/weather-dashboard"),
            source_url: Some("https://github.com/nitish477/weather-dashboard"),
        },
        Project {
            title: "Portfolio Website",
            description:
                "This site - a single-page portfolio with theming, entrance animations, and a typed hero.",
            tags: &["React", "Tailwind CSS"],
            demo_url: Some("https://nitish477.github.io"),
            source_url: Some("https://github.com/nitish477/portfolio"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_literals() {
        let p = profile();
        assert_eq!(p.name, "Nitish Kumar");
        assert_eq!(p.location, "Pune, India");
        assert_eq!(p.marital_status, "Single");
        assert_eq!(p.date_of_birth_display(), "13 May 2003");
    }

    #[test]
    fn test_lists_are_populated_and_well_formed() {
        assert_eq!(skills().len(), 6);
        for skill in skills() {
            assert!(!skill.title.is_empty());
            assert!(!skill.description.is_empty());
        }
        assert!(!work_history().is_empty());
        assert!(!education().is_empty());
        for entry in work_history().into_iter().chain(education()) {
            assert!(!entry.title.is_empty());
            assert!(!entry.period.is_empty());
        }
    }

    #[test]
    fn test_projects_carry_tags_and_links() {
        let projects = projects();
        assert!(!projects.is_empty());
        for project in &projects {
            assert!(!project.tags.is_empty());
        }
        // Both link kinds are exercised somewhere in the list
        assert!(projects.iter().any(|p| p.demo_url.is_some()));
        assert!(projects.iter().any(|p| p.source_url.is_some()));
        assert!(projects.iter().any(|p| p.demo_url.is_none()));
    }

    #[test]
    fn test_hire_request_serializes_all_fields() {
        let req = HireRequest {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: "123".to_string(),
        };
        let json = serde_json::to_value(&req).expect("hire request should serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "A", "email": "a@b.com", "phone": "123"})
        );
    }
}
