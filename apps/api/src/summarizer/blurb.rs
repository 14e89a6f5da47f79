use crate::models::ResumeRequest;

/// The descriptive sentence sent to the summarization model.
pub fn build_profile_blurb(resume: &ResumeRequest) -> String {
    format!(
        "{} is a skilled professional with expertise in {}. Their education background includes {}.",
        resume.name,
        resume.skills_line(),
        resume.education
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blurb_combines_name_skills_and_education() {
        let resume = ResumeRequest {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            education: "PhD in Mathematics, Yale".to_string(),
            experience: None,
            github: None,
            linkedin: None,
            skills: vec!["COBOL".to_string(), "Compilers".to_string()],
        };

        assert_eq!(
            build_profile_blurb(&resume),
            "Grace Hopper is a skilled professional with expertise in COBOL, Compilers. \
             Their education background includes PhD in Mathematics, Yale."
        );
    }
}
