use serde::Deserialize;

use crate::errors::AppError;

/// Raw résumé payload as posted by the form.
///
/// Every field is optional here so that an absent field is reported by
/// `validate` as a 400 rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillsField>,
}

/// Skills arrive either as a JSON array or as the raw comma-separated input.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsField {
    List(Vec<String>),
    Text(String),
}

impl SkillsField {
    fn into_skills(self) -> Vec<String> {
        match self {
            SkillsField::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            SkillsField::Text(raw) => split_skills(&raw),
        }
    }
}

/// A validated résumé. Lives for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRequest {
    pub name: String,
    pub email: String,
    pub education: String,
    pub experience: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub skills: Vec<String>,
}

impl ResumeRequest {
    /// Skills as rendered on the page: `"Go, Rust, C++"`.
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }
}

impl ResumeSubmission {
    /// Trims every field and checks the required ones.
    ///
    /// Blank strings count as absent. Optional fields that are blank become
    /// `None`, so the renderer omits their sections.
    pub fn validate(self) -> Result<ResumeRequest, AppError> {
        let name = non_blank(self.name);
        let email = non_blank(self.email);
        let education = non_blank(self.education);
        let skills = self
            .skills
            .map(SkillsField::into_skills)
            .filter(|skills| !skills.is_empty());

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if email.is_none() {
            missing.push("email");
        }
        if education.is_none() {
            missing.push("education");
        }
        if skills.is_none() {
            missing.push("skills");
        }

        match (name, email, education, skills) {
            (Some(name), Some(email), Some(education), Some(skills)) => Ok(ResumeRequest {
                name,
                email,
                education,
                experience: non_blank(self.experience),
                github: non_blank(self.github),
                linkedin: non_blank(self.linkedin),
                skills,
            }),
            _ => Err(AppError::Validation(format!(
                "Missing required fields! ({})",
                missing.join(", ")
            ))),
        }
    }
}

/// Splits the comma-separated skills input into trimmed, non-empty entries.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
