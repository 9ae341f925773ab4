//! Section classification: maps a heading to a `SectionType` by multilingual keyword match.
//!
//! Vocabulary covers Spanish, English, French and German. Matching is a substring test
//! against the normalized heading, and the FIRST category in table order wins: a heading
//! that mentions both "portfolio" and "tools" is `projects` only if projects were declared
//! before skills. Reordering `SECTION_KEYWORDS` changes behavior.

use crate::models::SectionType;
use crate::parser::normalize::normalize;

/// Ordered category → keyword table. Keywords are already normalized (lowercase, no accents).
pub const SECTION_KEYWORDS: &[(SectionType, &[&str])] = &[
    (
        SectionType::Profile,
        &[
            "perfil",
            "profile",
            "profil",
            "about",
            "sobre mi",
            "resumen",
            "summary",
            "objetivo",
            "objective",
            "presentacion",
        ],
    ),
    (
        SectionType::Experience,
        &[
            "experiencia",
            "experience",
            "erfahrung",
            "trabajo",
            "work",
            "empleos",
            "employment",
            "professional",
        ],
    ),
    (
        SectionType::Education,
        &[
            "educacion",
            "formacion",
            "formation",
            "education",
            "ausbildung",
            "estudios",
            "academic",
            "akademisch",
        ],
    ),
    (
        SectionType::Skills,
        &[
            "habilidades",
            "skills",
            "competencias",
            "competences",
            "kenntnisse",
            "tecnologias",
            "technologies",
            "tech stack",
            "herramientas",
            "tools",
        ],
    ),
    (
        SectionType::Languages,
        &["idiomas", "languages", "sprachen", "langues"],
    ),
    (
        SectionType::Projects,
        &["proyectos", "projects", "projekte", "projets", "portfolio"],
    ),
    (
        SectionType::Certifications,
        &[
            "certificaciones",
            "certifications",
            "certificados",
            "zertifikate",
            "certificats",
            "cursos",
            "courses",
        ],
    ),
];

/// Classifies a heading. Never fails: unrecognized headings are `Other`.
pub fn detect_section_type(heading: &str) -> SectionType {
    let normalized = normalize(heading);
    SECTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(section_type, _)| *section_type)
        .unwrap_or(SectionType::Other)
}
