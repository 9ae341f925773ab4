use serde::{Deserialize, Serialize};

/// Contact details projected from the document front-matter.
/// Every field is an empty string when the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub photo: String,
}

/// Closed set of CV categories. Drives layout placement and iconography in templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Profile,
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Certifications,
    #[default]
    Other,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Profile => "profile",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Skills => "skills",
            SectionType::Languages => "languages",
            SectionType::Projects => "projects",
            SectionType::Certifications => "certifications",
            SectionType::Other => "other",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types rendered in the sidebar column.
pub const SIDEBAR_TYPES: &[SectionType] = &[
    SectionType::Skills,
    SectionType::Languages,
    SectionType::Certifications,
];

/// Types rendered in the main column. Certifications have no main-column fallback.
pub const MAIN_TYPES: &[SectionType] = &[
    SectionType::Profile,
    SectionType::Experience,
    SectionType::Education,
    SectionType::Projects,
    SectionType::Other,
];

/// One classified block of CV content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading as written, trimmed.
    pub heading: String,
    /// Not deduplicated: repeated headings produce repeated slugs.
    pub slug: String,
    /// Pre-rendered HTML fragment, empty when the section had no body.
    pub content_html: String,
    pub section_type: SectionType,
}

/// Parsed CV: contact info plus sections in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvData {
    pub contact: ContactInfo,
    pub sections: Vec<Section>,
}

impl CvData {
    pub fn sidebar_sections(&self) -> Vec<&Section> {
        self.sections_of(SIDEBAR_TYPES)
    }

    pub fn main_sections(&self) -> Vec<&Section> {
        self.sections_of(MAIN_TYPES)
    }

    fn sections_of(&self, types: &[SectionType]) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| types.contains(&s.section_type))
            .collect()
    }
}
