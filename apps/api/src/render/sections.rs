//! Résumé content model: which sections appear, in which order, with which lines.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::layout::PageConfig;
use crate::models::ResumeRequest;
use crate::render::canvas::{Align, PdfCanvas};

pub const DOCUMENT_TITLE: &str = "SmartResume";

/// Bytes that may not appear literally in a link target. `%` is kept so
/// already-escaped input is not escaped twice; non-ASCII is always escaped.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    Link { text: String, uri: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub lines: Vec<Line>,
}

/// Builds the résumé body in its fixed order: contact, education,
/// experience (only when given), skills, summary.
pub fn resume_sections(resume: &ResumeRequest, summary: &str) -> Vec<Section> {
    let mut contact = vec![
        Line::Text(format!("Name: {}", resume.name)),
        Line::Link {
            text: format!("Email: {}", resume.email),
            uri: escape_uri(&format!("mailto:{}", resume.email)),
        },
    ];
    if let Some(github) = &resume.github {
        contact.push(Line::Link {
            text: format!("GitHub: {github}"),
            uri: escape_uri(&normalize_url(github)),
        });
    }
    if let Some(linkedin) = &resume.linkedin {
        contact.push(Line::Link {
            text: format!("LinkedIn: {linkedin}"),
            uri: escape_uri(&normalize_url(linkedin)),
        });
    }

    let mut sections = vec![
        Section {
            heading: "Personal Information",
            lines: contact,
        },
        Section {
            heading: "Education",
            lines: vec![Line::Text(resume.education.clone())],
        },
    ];

    if let Some(experience) = &resume.experience {
        sections.push(Section {
            heading: "Experience",
            lines: vec![Line::Text(experience.clone())],
        });
    }

    sections.push(Section {
        heading: "Skills",
        lines: vec![Line::Text(resume.skills_line())],
    });
    sections.push(Section {
        heading: "AI-Generated Summary",
        lines: vec![Line::Text(summary.to_string())],
    });

    sections
}

/// Prefixes `https://` to profile links typed without a scheme.
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Percent-encodes spaces, unsafe punctuation and non-ASCII so the target
/// is a valid 7-bit `/URI` string.
pub fn escape_uri(uri: &str) -> String {
    utf8_percent_encode(uri, URI_ESCAPE).to_string()
}

/// Draws the title header followed by every section, separated by rules.
pub fn draw_resume(canvas: &mut PdfCanvas<'_>, config: &PageConfig, name: &str, sections: &[Section]) {
    canvas.text(DOCUMENT_TITLE, &config.title, Align::Center);
    canvas.text(name, &config.subtitle, Align::Center);
    canvas.move_down(0.5, &config.body);
    let (width, color) = config.title_rule;
    canvas.rule(width, color);
    canvas.move_down(1.5, &config.body);

    for (i, section) in sections.iter().enumerate() {
        // Keep the heading on the same page as its first line.
        let heading_block = canvas.line_advance(&config.heading) * 1.5
            + canvas.line_advance(&config.body);

        if i > 0 {
            // The separator travels with the heading it introduces.
            canvas.ensure_room(canvas.line_advance(&config.body) + heading_block);
            let (width, color) = config.section_rule;
            canvas.rule(width, color);
            canvas.move_down(1.0, &config.body);
        }

        canvas.ensure_room(heading_block);

        canvas.text(section.heading, &config.heading, Align::Left);
        canvas.move_down(0.5, &config.body);

        for line in &section.lines {
            match line {
                Line::Text(text) => {
                    canvas.text(text, &config.body, Align::Left);
                }
                Line::Link { text, uri } => {
                    canvas.link(text, uri, &config.link);
                }
            }
        }
        canvas.move_down(1.0, &config.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_config;
    use lopdf::Object;

    fn make_resume() -> ResumeRequest {
        ResumeRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            education: "University of London".to_string(),
            experience: Some("Analytical Engine programmer".to_string()),
            github: Some("github.com/ada".to_string()),
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            skills: vec!["Go".to_string(), "Rust".to_string(), "C++".to_string()],
        }
    }

    fn headings(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.heading).collect()
    }

    #[test]
    fn test_full_resume_section_order() {
        let sections = resume_sections(&make_resume(), "Summary.");
        assert_eq!(
            headings(&sections),
            vec![
                "Personal Information",
                "Education",
                "Experience",
                "Skills",
                "AI-Generated Summary"
            ]
        );
    }

    #[test]
    fn test_experience_omitted_when_absent() {
        let mut resume = make_resume();
        resume.experience = None;
        let sections = resume_sections(&resume, "Summary.");
        assert!(!headings(&sections).contains(&"Experience"));
        assert_eq!(sections.len(), 4);
    }

    #[test]
    fn test_contact_links() {
        let sections = resume_sections(&make_resume(), "Summary.");
        let contact = &sections[0].lines;
        assert_eq!(contact.len(), 4);
        assert_eq!(
            contact[1],
            Line::Link {
                text: "Email: ada@example.com".to_string(),
                uri: "mailto:ada@example.com".to_string(),
            }
        );
        assert_eq!(
            contact[2],
            Line::Link {
                text: "GitHub: github.com/ada".to_string(),
                uri: "https://github.com/ada".to_string(),
            }
        );
    }

    #[test]
    fn test_profile_links_omitted_when_absent() {
        let mut resume = make_resume();
        resume.github = None;
        resume.linkedin = None;
        let sections = resume_sections(&resume, "Summary.");
        assert_eq!(sections[0].lines.len(), 2);
    }

    #[test]
    fn test_skills_and_summary_lines() {
        let sections = resume_sections(&make_resume(), "Summary generation failed.");
        let skills = sections.iter().find(|s| s.heading == "Skills").unwrap();
        assert_eq!(skills.lines, vec![Line::Text("Go, Rust, C++".to_string())]);
        let summary = sections.last().unwrap();
        assert_eq!(
            summary.lines,
            vec![Line::Text("Summary generation failed.".to_string())]
        );
    }

    #[test]
    fn test_section_rules_stay_above_bottom_margin() {
        let config = default_page_config();
        for n in 1..60 {
            let mut resume = make_resume();
            resume.experience = Some(vec!["Built engines"; n].join("\n"));
            let sections = resume_sections(&resume, "Summary.");

            let mut canvas = PdfCanvas::new(&config);
            draw_resume(&mut canvas, &config, &resume.name, &sections);

            for page in canvas.into_pages() {
                for op in page.operations.iter().filter(|op| op.operator == "m") {
                    let y = match op.operands[1] {
                        Object::Real(y) => y,
                        ref other => panic!("unexpected operand {other:?}"),
                    };
                    assert!(y >= config.margin_pt, "stroke at y={y} with {n} experience lines");
                }
            }
        }
    }

    #[test]
    fn test_escape_uri() {
        assert_eq!(escape_uri("mailto:ada@example.com"), "mailto:ada@example.com");
        assert_eq!(
            escape_uri("https://linkedin.com/in/josé doe"),
            "https://linkedin.com/in/jos%C3%A9%20doe"
        );
        assert_eq!(escape_uri("https://x.dev/a%20b?q=1#top"), "https://x.dev/a%20b?q=1#top");
    }

    #[test]
    fn test_link_targets_are_escaped() {
        let mut resume = make_resume();
        resume.email = "zoë@example.com".to_string();
        resume.github = Some("github.com/ada lovelace".to_string());
        let sections = resume_sections(&resume, "Summary.");
        let contact = &sections[0].lines;
        assert_eq!(
            contact[1],
            Line::Link {
                text: "Email: zoë@example.com".to_string(),
                uri: "mailto:zo%C3%AB@example.com".to_string(),
            }
        );
        assert_eq!(
            contact[2],
            Line::Link {
                text: "GitHub: github.com/ada lovelace".to_string(),
                uri: "https://github.com/ada%20lovelace".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("github.com/ada"), "https://github.com/ada");
        assert_eq!(normalize_url("HTTPS://github.com/ada"), "HTTPS://github.com/ada");
        assert_eq!(normalize_url("http://ada.dev"), "http://ada.dev");
    }
}
