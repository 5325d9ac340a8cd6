//! Portfolio content: the profile data model and the built-in profile.
//!
//! Everything the UI renders comes from a [`Profile`]. The built-in profile
//! ships compiled in; `--content <path>` swaps in a TOML file with the same
//! shape, so the binary doubles as a reusable portfolio shell.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error type for content loading.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Error reading the content file from disk.
    #[error("Failed to read content file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Error parsing the content file TOML.
    #[error("Failed to parse content TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A headline statistic shown on the hero section ("5★ HackerRank").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// The big number or badge text.
    pub value: String,
    /// What the number counts.
    pub label: String,
}

/// An external profile link (GitHub, LinkedIn, email).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display name for the link.
    pub label: String,
    /// Destination URL.
    pub url: String,
}

/// A named group of skills ("Frontend", "Backend", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Group heading.
    pub title: String,
    /// Individual skill tags within the group.
    pub skills: Vec<String>,
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub title: String,
    /// One-paragraph description.
    pub description: String,
    /// Technology tags.
    pub tech: Vec<String>,
    /// Repository or demo URL.
    pub link: String,
    /// Featured projects are listed first and marked in the UI.
    #[serde(default)]
    pub featured: bool,
}

/// Which achievements column an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    /// Competitions and hackathons.
    Competition,
    /// Community involvement and volunteering.
    Community,
}

/// A single achievement entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Achievement heading.
    pub title: String,
    /// Supporting detail line.
    pub subtitle: String,
    /// Display date, if any ("2024").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Link to proof or a write-up.
    pub link: String,
    /// Which column the entry renders in.
    pub kind: AchievementKind,
}

/// The whole portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Availability badge text.
    pub status: String,
    /// Role headline.
    pub headline: String,
    /// Longer hero paragraph.
    pub tagline: String,
    /// Location / relocation line.
    pub location: String,
    /// Phrases the hero typewriter cycles through.
    #[serde(default)]
    pub hero_phrases: Vec<String>,
    /// Headline statistics.
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// External profile links.
    #[serde(default)]
    pub links: Vec<SocialLink>,
    /// Skill groups.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    /// Project cards.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Achievements and community entries.
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Profile {
    /// Load a profile from a TOML file, or the built-in profile if no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            None => Ok(Self::builtin()),
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                let profile: Profile = toml::from_str(&contents)?;
                Ok(profile)
            }
        }
    }

    /// Projects with featured entries first, original order otherwise kept.
    pub fn projects_featured_first(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.iter().collect();
        projects.sort_by_key(|p| !p.featured);
        projects
    }

    /// Achievements of one kind, in configured order.
    pub fn achievements_of(&self, kind: AchievementKind) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.kind == kind)
            .collect()
    }

    /// The compiled-in portfolio.
    pub fn builtin() -> Self {
        Self {
            name: "Sanjoy Dey".to_string(),
            status: "Available for Opportunities".to_string(),
            headline: "MERN Stack Developer".to_string(),
            tagline: "MERN Stack Developer specializing in building scalable, \
                      high-performance web applications. Transforming complex \
                      problems into elegant digital solutions with modern \
                      technologies and best practices."
                .to_string(),
            location: "Open to Remote & Relocation".to_string(),
            hero_phrases: vec![
                "Sanjoy Dey".to_string(),
                "a MERN Stack Developer".to_string(),
                "a Problem Solver".to_string(),
            ],
            stats: vec![
                Stat {
                    value: "5★".to_string(),
                    label: "HackerRank".to_string(),
                },
                Stat {
                    value: "100+".to_string(),
                    label: "DSA Problems".to_string(),
                },
                Stat {
                    value: "4+".to_string(),
                    label: "Major Projects".to_string(),
                },
            ],
            links: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/Sanjoy2002dey".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/sanjoy-dey-713b67228/".to_string(),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:Sanjoy.sanjoydey@gmail.com".to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Frontend".to_string(),
                    skills: vec![
                        "React.js".to_string(),
                        "HTML5".to_string(),
                        "CSS3".to_string(),
                        "Tailwind CSS".to_string(),
                        "Bootstrap".to_string(),
                        "Responsive Design".to_string(),
                    ],
                },
                SkillCategory {
                    title: "Backend".to_string(),
                    skills: vec![
                        "Node.js".to_string(),
                        "Express.js".to_string(),
                        "RESTful APIs".to_string(),
                        "JSON".to_string(),
                        "JWT Auth".to_string(),
                    ],
                },
                SkillCategory {
                    title: "Languages".to_string(),
                    skills: vec![
                        "JavaScript".to_string(),
                        "Java".to_string(),
                        "C Programming".to_string(),
                    ],
                },
                SkillCategory {
                    title: "Database & Tools".to_string(),
                    skills: vec![
                        "MongoDB".to_string(),
                        "MySQL".to_string(),
                        "Git/GitHub".to_string(),
                        "VS Code".to_string(),
                        "IntelliJ IDEA".to_string(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "Sanjoy_Tube".to_string(),
                    description: "Full-stack MERN video streaming platform with robust \
                                  authentication, video management, and cloud integration \
                                  for scalable media delivery."
                        .to_string(),
                    tech: vec![
                        "MERN Stack".to_string(),
                        "Redux".to_string(),
                        "Cloudinary".to_string(),
                        "JWT".to_string(),
                    ],
                    link: "https://github.com/Sanjoy2002dey/Sanjoy_Tube".to_string(),
                    featured: true,
                },
                Project {
                    title: "Gemini Clone".to_string(),
                    description: "AI-powered conversational interface replicating Google's \
                                  Gemini experience with optimized performance and modern \
                                  React architecture."
                        .to_string(),
                    tech: vec![
                        "React.js".to_string(),
                        "Gemini API".to_string(),
                        "Vite".to_string(),
                    ],
                    link: "https://github.com/Sanjoy2002dey/Gemini-Clone".to_string(),
                    featured: false,
                },
                Project {
                    title: "Real-Time Chat Application".to_string(),
                    description: "Enterprise-grade Java chat system with multi-client \
                                  support, socket programming, and intuitive Swing-based \
                                  user interface."
                        .to_string(),
                    tech: vec![
                        "Java".to_string(),
                        "Socket.io".to_string(),
                        "Java Swing".to_string(),
                    ],
                    link: "https://github.com/Sanjoy2002dey/Java-Project".to_string(),
                    featured: false,
                },
                Project {
                    title: "Dynamic Quiz Platform".to_string(),
                    description: "Interactive web-based quiz application featuring \
                                  real-time scoring, dynamic question rendering, and \
                                  responsive design patterns."
                        .to_string(),
                    tech: vec![
                        "JavaScript".to_string(),
                        "HTML5".to_string(),
                        "CSS3".to_string(),
                    ],
                    link: "https://github.com/Sanjoy2002dey/Quiz-App".to_string(),
                    featured: false,
                },
            ],
            achievements: vec![
                Achievement {
                    title: "Hack4Bengal Participation".to_string(),
                    subtitle: "Participated in one of Bengal's largest hackathons with \
                               focus on innovative problem-solving and collaborative \
                               development."
                        .to_string(),
                    date: Some("2024".to_string()),
                    link: "https://www.linkedin.com/posts/sanjoy-dey-713b67228_hack4bengal-github-redbull-activity-7213495395077742592-phC6".to_string(),
                    kind: AchievementKind::Competition,
                },
                Achievement {
                    title: "Smart India Hackathon".to_string(),
                    subtitle: "Successfully completed internal round and received \
                               certificate of participation for innovative solution \
                               development."
                        .to_string(),
                    date: Some("2023".to_string()),
                    link: "https://www.linkedin.com/posts/sanjoy-dey-713b67228_internal-hackathon-certificate-activity-7114603724504780800-KAh-".to_string(),
                    kind: AchievementKind::Competition,
                },
                Achievement {
                    title: "Community Volunteer".to_string(),
                    subtitle: "Active contributor to tech community events, fostering \
                               collaboration and knowledge sharing among developers."
                        .to_string(),
                    date: None,
                    link: "https://www.linkedin.com/posts/sanjoy-dey-713b67228_hey-connections-i-am-very-excited-to-activity-7092899698423853056-hROy".to_string(),
                    kind: AchievementKind::Community,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_profile_is_complete() {
        let profile = Profile::builtin();
        assert!(!profile.name.is_empty());
        assert!(!profile.hero_phrases.is_empty());
        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.projects.len(), 4);
        assert_eq!(profile.achievements.len(), 3);
        assert!(profile.projects.iter().any(|p| p.featured));
    }

    #[test]
    fn test_featured_projects_sort_first() {
        let profile = Profile::builtin();
        let projects = profile.projects_featured_first();
        assert!(projects[0].featured);
        assert!(projects[1..].iter().all(|p| !p.featured));
    }

    #[test]
    fn test_achievements_split_by_kind() {
        let profile = Profile::builtin();
        assert_eq!(profile.achievements_of(AchievementKind::Competition).len(), 2);
        assert_eq!(profile.achievements_of(AchievementKind::Community).len(), 1);
    }

    #[test]
    fn test_load_without_path_returns_builtin() {
        let profile = Profile::load(None).unwrap();
        assert_eq!(profile, Profile::builtin());
    }

    #[test]
    fn test_load_toml_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "Ada Lovelace"
status = "Open to consulting"
headline = "Analyst"
tagline = "First programmer."
location = "London"
hero_phrases = ["Ada Lovelace"]

[[projects]]
title = "Analytical Engine Notes"
description = "Annotated translation with the first published algorithm."
tech = ["Mathematics"]
link = "https://example.org/notes"
featured = true
"#
        )
        .unwrap();

        let profile = Profile::load(Some(file.path())).unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.projects.len(), 1);
        assert!(profile.projects[0].featured);
        // Unspecified sections default to empty rather than erroring.
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = ").unwrap();
        let result = Profile::load(Some(file.path()));
        assert!(matches!(result, Err(ContentError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let result = Profile::load(Some(Path::new("/nonexistent/profile.toml")));
        assert!(matches!(result, Err(ContentError::ReadError(_))));
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = Profile::builtin();
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
