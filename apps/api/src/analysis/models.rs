use serde::{Deserialize, Serialize};

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32, // 60 – 95
    pub keywords: KeywordReport,
    pub feedback: Vec<FeedbackNote>,
    pub career_paths: Vec<CareerPath>,
}

/// Display lists, already truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub matching: Vec<String>, // ≤ 10
    pub missing: Vec<String>,  // ≤ 5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Placeholder content
// ────────────────────────────────────────────────────────────────────────────
//
// Fixed mock output kept until a real analysis engine exists. Clients render
// these strings as-is, so they must not change.

pub const BACKEND_FEEDBACK_TITLE: &str = "Real-time Feedback";
pub const BACKEND_FEEDBACK_CONTENT: &str = "This feedback came directly from the Python backend!";
pub const LENGTH_FEEDBACK_TITLE: &str = "File Content Length";

pub const CAREER_PATHS: [(&str, &str); 2] = [
    (
        "DevOps Engineer",
        "Your skills in automation and cloud infrastructure make you a strong candidate for a DevOps role. Focus on learning CI/CD tools like Jenkins or GitLab.",
    ),
    (
        "Data Scientist",
        "With a background in Python and analytics, consider a career in Data Science. Enhancing your SQL and statistical modeling skills would be beneficial.",
    ),
];

/// The two fixed feedback notes. Only the character count varies.
pub fn placeholder_feedback(resume_chars: usize) -> Vec<FeedbackNote> {
    vec![
        FeedbackNote {
            title: BACKEND_FEEDBACK_TITLE.to_string(),
            content: BACKEND_FEEDBACK_CONTENT.to_string(),
        },
        FeedbackNote {
            title: LENGTH_FEEDBACK_TITLE.to_string(),
            content: format!("The resume contains {resume_chars} characters."),
        },
    ]
}

pub fn placeholder_career_paths() -> Vec<CareerPath> {
    CAREER_PATHS
        .iter()
        .map(|(title, description)| CareerPath {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}
