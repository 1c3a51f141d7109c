//! Keyword Overlap Analyzer: compares job-description vocabulary against resume text.
//!
//! Default and only backend: `KeywordOverlapAnalyzer` (pure, no I/O).
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` so a real analysis engine can
//! replace it without touching the handler.

use tracing::debug;

use crate::analysis::keywords::KeywordSet;
use crate::analysis::models::{
    placeholder_career_paths, placeholder_feedback, AnalysisResult, KeywordReport,
};

pub const BASE_SCORE: u32 = 60;
pub const POINTS_PER_MATCH: u32 = 5;
/// 100 is unreachable by construction.
pub const MAX_SCORE: u32 = 95;

pub const MATCHING_DISPLAY_LIMIT: usize = 10;
pub const MISSING_DISPLAY_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces an analysis report from a job description and extracted resume text.
/// Must be a pure function of its inputs.
pub trait ResumeAnalyzer: Send + Sync {
    fn analyze(&self, job_description: &str, resume_text: &str) -> AnalysisResult;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordOverlapAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. Tokenize both texts (lower-case, whitespace split) into sets.
/// 2. Drop stopwords from the job-description set only.
/// 3. matching = job ∩ resume, missing = job − resume.
/// 4. score = min(95, 60 + 5 × |matching|), over the full matching set.
/// 5. Display the first 10 matching and first 5 missing, lexicographically.
pub struct KeywordOverlapAnalyzer;

impl ResumeAnalyzer for KeywordOverlapAnalyzer {
    fn analyze(&self, job_description: &str, resume_text: &str) -> AnalysisResult {
        analyze(job_description, resume_text)
    }
}

pub fn analyze(job_description: &str, resume_text: &str) -> AnalysisResult {
    let job_keywords = KeywordSet::job_keywords(job_description);
    let resume_tokens = KeywordSet::from_text(resume_text);
    if job_keywords.is_empty() {
        debug!("Job description has no keywords after stopword removal");
    }
    let overlap = job_keywords.overlap(&resume_tokens);

    let overall_score = overall_score(overlap.matching.len());
    debug!(
        job_keywords = job_keywords.len(),
        resume_tokens = resume_tokens.len(),
        matching = overlap.matching.len(),
        missing = overlap.missing.len(),
        overall_score,
        "Keyword overlap computed"
    );

    AnalysisResult {
        overall_score,
        keywords: KeywordReport {
            matching: overlap.matching.first(MATCHING_DISPLAY_LIMIT),
            missing: overlap.missing.first(MISSING_DISPLAY_LIMIT),
        },
        feedback: placeholder_feedback(resume_text.chars().count()),
        career_paths: placeholder_career_paths(),
    }
}

/// Baseline 60, +5 per distinct matched keyword, saturating at 95.
pub fn overall_score(matching_count: usize) -> u32 {
    let matches = u32::try_from(matching_count).unwrap_or(u32::MAX);
    BASE_SCORE
        .saturating_add(POINTS_PER_MATCH.saturating_mul(matches))
        .min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{BACKEND_FEEDBACK_CONTENT, CAREER_PATHS};

    /// `count` distinct tokens: "skill00", "skill01", ...
    fn skills(count: usize) -> String {
        (0..count)
            .map(|i| format!("skill{i:02}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_score_formula() {
        assert_eq!(overall_score(0), 60);
        assert_eq!(overall_score(1), 65);
        assert_eq!(overall_score(3), 75);
        assert_eq!(overall_score(7), 95);
    }

    #[test]
    fn test_score_saturates_at_95() {
        assert_eq!(overall_score(8), 95);
        assert_eq!(overall_score(1_000), 95);
        assert_eq!(overall_score(usize::MAX), 95);
    }

    #[test]
    fn test_score_is_monotonic() {
        let scores: Vec<u32> = (0..30).map(overall_score).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert!(scores.iter().all(|s| (60..=95).contains(s)));
    }

    #[test]
    fn test_punctuation_prevents_match() {
        // "developer," in the resume keeps its comma, so only python and sql match.
        let result = analyze(
            "Python developer with SQL",
            "Experienced Python developer, SQL and cloud",
        );
        assert_eq!(result.keywords.matching, vec!["python", "sql"]);
        assert_eq!(result.keywords.missing, vec!["developer"]);
        assert_eq!(result.overall_score, 70);
    }

    #[test]
    fn test_all_job_keywords_matched() {
        let result = analyze(
            "Python developer with SQL",
            "Experienced Python developer with SQL and cloud",
        );
        assert_eq!(result.keywords.matching, vec!["developer", "python", "sql"]);
        assert!(result.keywords.missing.is_empty());
        assert_eq!(result.overall_score, 75);
    }

    #[test]
    fn test_empty_job_description_scores_baseline() {
        let result = analyze("", "Rust engineer with ten years of experience");
        assert_eq!(result.overall_score, 60);
        assert!(result.keywords.matching.is_empty());
        assert!(result.keywords.missing.is_empty());
    }

    #[test]
    fn test_stopword_only_job_description_scores_baseline() {
        let result = analyze("the and of to", "the and of to");
        assert_eq!(result.overall_score, 60);
        assert!(result.keywords.matching.is_empty());
    }

    #[test]
    fn test_empty_resume_matches_nothing() {
        let result = analyze("rust kafka kubernetes", "");
        assert_eq!(result.overall_score, 60);
        assert!(result.keywords.matching.is_empty());
        assert_eq!(result.keywords.missing, vec!["kafka", "kubernetes", "rust"]);
    }

    #[test]
    fn test_matching_list_truncated_to_ten_but_score_uses_full_set() {
        let text = skills(12);
        let result = analyze(&text, &text);
        assert_eq!(result.keywords.matching.len(), 10);
        assert_eq!(result.keywords.matching[0], "skill00");
        assert_eq!(result.keywords.matching[9], "skill09");
        assert!(!result.keywords.matching.contains(&"skill11".to_string()));
        assert_eq!(result.overall_score, 95);
    }

    #[test]
    fn test_missing_list_truncated_to_five() {
        let result = analyze(&skills(8), "nothing relevant");
        assert_eq!(
            result.keywords.missing,
            vec!["skill00", "skill01", "skill02", "skill03", "skill04"]
        );
        assert!(result.keywords.matching.is_empty());
    }

    #[test]
    fn test_case_folding_on_both_sides() {
        let result = analyze("KUBERNETES Terraform", "kubernetes TERRAFORM");
        assert_eq!(result.keywords.matching, vec!["kubernetes", "terraform"]);
    }

    #[test]
    fn test_resume_stopwords_are_not_filtered() {
        // "with" is dropped from the job side, so it can never match.
        let result = analyze("with rust", "with rust");
        assert_eq!(result.keywords.matching, vec!["rust"]);
        assert_eq!(result.overall_score, 65);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let jd = "Senior Rust engineer for distributed systems, Kafka and Kubernetes on AWS";
        let resume = "Rust Kafka AWS Kubernetes systems engineer";
        assert_eq!(analyze(jd, resume), analyze(jd, resume));
    }

    #[test]
    fn test_feedback_counts_characters_not_bytes() {
        let result = analyze("", "Zoë Müller");
        assert_eq!(
            result.feedback[1].content,
            "The resume contains 10 characters."
        );
    }

    #[test]
    fn test_static_content_is_independent_of_input() {
        let a = analyze("rust", "rust");
        let b = analyze("java spring", "cobol");
        assert_eq!(a.career_paths, b.career_paths);
        assert_eq!(a.feedback[0], b.feedback[0]);
        assert_eq!(a.feedback[0].content, BACKEND_FEEDBACK_CONTENT);
        assert_eq!(a.career_paths.len(), CAREER_PATHS.len());
    }

    #[test]
    fn test_trait_object_delegates_to_keyword_analysis() {
        let analyzer: Box<dyn ResumeAnalyzer> = Box::new(KeywordOverlapAnalyzer);
        assert_eq!(analyzer.analyze("rust go", "go"), analyze("rust go", "go"));
    }
}
