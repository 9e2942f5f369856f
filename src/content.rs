use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

/// Anchor ids of the sections rendered on the home page, in page order.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "services", "portfolio", "contact"];

/// Site icon served from `public/`.
pub const FAVICON: &str = "/favicon.svg";

static GLOBAL_PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    load_profile().unwrap_or_else(|e| panic!("embedded {PROFILE_FILE} is invalid: {e}"))
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Content file is not valid UTF-8")]
    Utf8,
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("Invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    Code,
    Palette,
    Zap,
    Brain,
    Clock,
    Users,
    GitBranch,
    Database,
    GraduationCap,
    Calendar,
    Download,
    ArrowDown,
    ArrowRight,
    ExternalLink,
    Send,
    Menu,
    Close,
    Heart,
}

impl Icon {
    /// Icon font class rendered inside an `<i>` element.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Mail => "icon-mail",
            Icon::Phone => "icon-phone",
            Icon::MapPin => "icon-map-pin",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Code => "icon-code",
            Icon::Palette => "icon-palette",
            Icon::Zap => "icon-zap",
            Icon::Brain => "icon-brain",
            Icon::Clock => "icon-clock",
            Icon::Users => "icon-users",
            Icon::GitBranch => "icon-git-branch",
            Icon::Database => "icon-database",
            Icon::GraduationCap => "icon-graduation-cap",
            Icon::Calendar => "icon-calendar",
            Icon::Download => "icon-download",
            Icon::ArrowDown => "icon-arrow-down",
            Icon::ArrowRight => "icon-arrow-right",
            Icon::ExternalLink => "icon-external-link",
            Icon::Send => "icon-send",
            Icon::Menu => "icon-menu",
            Icon::Close => "icon-x",
            Icon::Heart => "icon-heart",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub person: Person,
    pub nav: Vec<NavItem>,
    pub about: About,
    pub skills: Skills,
    pub services: Services,
    pub portfolio: Portfolio,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub tagline: String,
    pub blurb: String,
    pub avatar: String,
    pub resume: String,
    pub logo: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub intro: String,
    pub story: Vec<String>,
    pub education: Vec<Education>,
    pub facts: Vec<QuickFact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickFact {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub intro: String,
    pub technical: Vec<TechnicalSkill>,
    pub soft: Vec<SoftSkill>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSkill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftSkill {
    pub name: String,
    pub icon: Icon,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Services {
    pub intro: String,
    pub items: Vec<Service>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub features: Vec<String>,
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub intro: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub icon: Icon,
    pub gradient: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub source_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub intro: String,
    pub pitch: String,
    pub email: String,
    pub phone: String,
    pub phone_href: String,
    pub location: String,
    pub map_href: String,
}

/// One row of the "Contact Information" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: Icon,
    pub label: &'static str,
    pub value: String,
    pub href: String,
    pub gradient: &'static str,
}

impl ContactMethod {
    pub fn opens_new_tab(&self) -> bool {
        is_web_url(&self.href)
    }

    pub fn target(&self) -> &'static str {
        if self.opens_new_tab() {
            "_blank"
        } else {
            "_self"
        }
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("noopener noreferrer")
    }
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn methods(&self) -> Vec<ContactMethod> {
        vec![
            ContactMethod {
                icon: Icon::Mail,
                label: "Email",
                value: self.email.clone(),
                href: self.mailto(),
                gradient: "from-blue-500 to-cyan-500",
            },
            ContactMethod {
                icon: Icon::Phone,
                label: "Phone",
                value: self.phone.clone(),
                href: self.phone_href.clone(),
                gradient: "from-green-500 to-emerald-500",
            },
            ContactMethod {
                icon: Icon::MapPin,
                label: "Location",
                value: self.location.clone(),
                href: self.map_href.clone(),
                gradient: "from-purple-500 to-pink-500",
            },
        ]
    }
}

impl Profile {
    pub fn from_json(content: &str) -> Result<Self, ContentError> {
        let profile = serde_json::from_str::<Profile>(content)
            .map_err(|e| ContentError::Parse(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.person.first_name, self.person.last_name)
    }

    pub fn social(&self, icon: Icon) -> Option<&SocialLink> {
        self.person.socials.iter().find(|s| s.icon == icon)
    }

    /// Navigation targets shown in the footer; the hero is reached via the brand name instead.
    pub fn quick_links(&self) -> impl Iterator<Item = &NavItem> {
        self.nav.iter().filter(|n| n.id != "home")
    }

    /// Source link for a project, falling back to the GitHub profile.
    pub fn source_link<'a>(&'a self, project: &'a Project) -> Option<&'a str> {
        project
            .source_link
            .as_deref()
            .or_else(|| self.social(Icon::Github).map(|s| s.href.as_str()))
    }

    /// Paths of the files this profile expects under the site's assets dir.
    pub fn local_assets(&self) -> [&str; 4] {
        [
            self.person.avatar.as_str(),
            self.person.resume.as_str(),
            self.person.logo.as_str(),
            FAVICON,
        ]
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        for skill in &self.skills.technical {
            if skill.level > 100 {
                return Err(ContentError::Invalid(format!(
                    "skill level for {} is {}%",
                    skill.name, skill.level
                )));
            }
        }

        let mut seen = HashSet::new();
        for item in &self.nav {
            if !SECTION_IDS.contains(&item.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "nav item {} points at unknown section",
                    item.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::Invalid(format!("duplicate nav item {}", item.id)));
            }
        }

        let mut ids = HashSet::new();
        for project in &self.portfolio.projects {
            if !ids.insert(project.id) {
                return Err(ContentError::Invalid(format!("duplicate project id {}", project.id)));
            }
        }

        let links = self
            .person
            .socials
            .iter()
            .map(|s| s.href.as_str())
            .chain(self.portfolio.projects.iter().flat_map(|p| {
                p.demo_link
                    .as_deref()
                    .into_iter()
                    .chain(p.source_link.as_deref())
            }))
            .chain(std::iter::once(self.contact.map_href.as_str()));
        for link in links {
            if !is_web_url(link) {
                return Err(ContentError::Invalid(format!("not an http(s) link: {link}")));
            }
        }

        for asset in self.local_assets() {
            if !asset.starts_with('/') || asset.starts_with("//") {
                return Err(ContentError::Invalid(format!(
                    "asset path must be site-absolute: {asset}"
                )));
            }
        }

        if !self.contact.email.contains('@') {
            return Err(ContentError::Invalid(format!(
                "malformed email address {}",
                self.contact.email
            )));
        }
        if !self.contact.phone_href.starts_with("tel:") {
            return Err(ContentError::Invalid(format!(
                "phone link must use tel: scheme, got {}",
                self.contact.phone_href
            )));
        }
        Ok(())
    }
}

fn is_web_url(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

pub fn load_profile() -> Result<Profile, ContentError> {
    let file = Assets::get(PROFILE_FILE).ok_or(ContentError::Missing(PROFILE_FILE.to_string()))?;
    let content = std::str::from_utf8(&file.data).map_err(|_| ContentError::Utf8)?;
    Profile::from_json(content)
}

/// The embedded profile, parsed once per process.
pub fn profile() -> &'static Profile {
    &*GLOBAL_PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_json() -> String {
        let file = Assets::get(PROFILE_FILE).expect("profile should be embedded");
        String::from_utf8(file.data.into()).expect("profile should be utf-8")
    }

    fn edit(f: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value: serde_json::Value =
            serde_json::from_str(&embedded_json()).expect("profile should be json");
        f(&mut value);
        value.to_string()
    }

    #[test]
    fn test_embedded_profile_loads() {
        let profile = load_profile().expect("embedded profile should be valid");
        assert_eq!(profile.full_name(), "Muhammad Umair Jabbar");
        assert_eq!(profile.skills.technical.len(), 6);
        assert_eq!(profile.skills.soft.len(), 6);
        assert_eq!(profile.services.items.len(), 3);
        assert_eq!(profile.portfolio.projects.len(), 3);
        assert_eq!(profile.about.education.len(), 2);
    }

    #[test]
    fn test_nav_follows_page_order() {
        let ids = profile().nav.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, SECTION_IDS);
    }

    #[test]
    fn test_quick_links_skip_home() {
        let labels = profile()
            .quick_links()
            .map(|n| n.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["About", "Skills", "Services", "Portfolio", "Contact"]);
    }

    #[test]
    fn test_contact_method_targets() {
        let methods = profile().contact.methods();
        let email = &methods[0];
        assert_eq!(email.href, "mailto:umairjabbarm@gmail.com");
        assert_eq!(email.target(), "_self");
        assert_eq!(email.rel(), None);

        let phone = &methods[1];
        assert_eq!(phone.href, "tel:03229629177");
        assert!(!phone.opens_new_tab());

        let location = &methods[2];
        assert_eq!(location.target(), "_blank");
        assert_eq!(location.rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn test_source_link_falls_back_to_github() {
        let profile = profile();
        let project = &profile.portfolio.projects[0];
        assert!(project.source_link.is_none());
        assert_eq!(profile.source_link(project), Some("https://github.com/umairdev76"));
    }

    #[test]
    fn test_demo_link_is_optional() {
        let projects = &profile().portfolio.projects;
        assert!(projects[0].demo_link.is_none());
        assert_eq!(
            projects[1].demo_link.as_deref(),
            Some("https://gymsportzone.netlify.app/")
        );
    }

    #[test]
    fn test_skill_level_over_hundred_rejected() {
        let json = edit(|v| v["skills"]["technical"][0]["level"] = 101.into());
        let err = Profile::from_json(&json).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(msg) if msg.contains("HTML5")));
    }

    #[test]
    fn test_unknown_nav_section_rejected() {
        let json = edit(|v| v["nav"][1]["id"] = "pricing".into());
        assert!(matches!(
            Profile::from_json(&json),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_duplicate_nav_rejected() {
        let json = edit(|v| v["nav"][2]["id"] = "about".into());
        let err = Profile::from_json(&json).unwrap_err();
        assert_eq!(err, ContentError::Invalid("duplicate nav item about".to_string()));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let json = edit(|v| v["portfolio"]["projects"][2]["id"] = 1.into());
        assert!(matches!(
            Profile::from_json(&json),
            Err(ContentError::Invalid(msg)) if msg == "duplicate project id 1"
        ));
    }

    #[test]
    fn test_relative_demo_link_rejected() {
        let json = edit(|v| v["portfolio"]["projects"][1]["demo_link"] = "gym.html".into());
        assert!(matches!(
            Profile::from_json(&json),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_relative_source_link_rejected() {
        let json = edit(|v| v["portfolio"]["projects"][0]["source_link"] = "github.com/umairdev76".into());
        assert_eq!(
            Profile::from_json(&json).unwrap_err(),
            ContentError::Invalid("not an http(s) link: github.com/umairdev76".to_string())
        );
    }

    #[test]
    fn test_relative_social_link_rejected() {
        let json = edit(|v| v["person"]["socials"][0]["href"] = "linkedin.com/x".into());
        assert_eq!(
            Profile::from_json(&json).unwrap_err(),
            ContentError::Invalid("not an http(s) link: linkedin.com/x".to_string())
        );
    }

    #[test]
    fn test_relative_map_link_rejected() {
        let json = edit(|v| v["contact"]["map_href"] = "maps/sunny-park".into());
        assert!(matches!(
            Profile::from_json(&json),
            Err(ContentError::Invalid(msg)) if msg.ends_with("maps/sunny-park")
        ));
    }

    #[test]
    fn test_email_without_at_rejected() {
        let json = edit(|v| v["contact"]["email"] = "nobody".into());
        assert_eq!(
            Profile::from_json(&json).unwrap_err(),
            ContentError::Invalid("malformed email address nobody".to_string())
        );
    }

    #[test]
    fn test_skill_level_hundred_accepted() {
        let json = edit(|v| v["skills"]["technical"][0]["level"] = 100.into());
        let profile = Profile::from_json(&json).expect("100% is a valid level");
        assert_eq!(profile.skills.technical[0].level, 100);
    }

    #[test]
    fn test_skill_level_beyond_u8_is_parse_error() {
        let json = edit(|v| v["skills"]["technical"][0]["level"] = 300.into());
        assert!(matches!(
            Profile::from_json(&json),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_relative_asset_path_rejected() {
        let json = edit(|v| v["person"]["resume"] = "umair-resume.pdf".into());
        assert_eq!(
            Profile::from_json(&json).unwrap_err(),
            ContentError::Invalid("asset path must be site-absolute: umair-resume.pdf".to_string())
        );
    }

    #[test]
    fn test_local_assets_exist_in_public_dir() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in profile().local_assets() {
            let file = public.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "{asset} is missing from public/");
        }
    }

    #[test]
    fn test_phone_scheme_required() {
        let json = edit(|v| v["contact"]["phone_href"] = "03229629177".into());
        assert!(Profile::from_json(&json).is_err());
    }

    #[test]
    fn test_unknown_icon_is_parse_error() {
        let json = edit(|v| v["skills"]["soft"][0]["icon"] = "rocket".into());
        assert!(matches!(
            Profile::from_json(&json),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_icon_names_are_kebab_case() {
        let icon: Icon = serde_json::from_str("\"git-branch\"").unwrap();
        assert_eq!(icon, Icon::GitBranch);
        assert_eq!(icon.class(), "icon-git-branch");
    }
}
