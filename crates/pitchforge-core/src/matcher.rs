use crate::brief::ProjectBrief;
use crate::case_study::CaseStudy;
use crate::types::{BudgetBucket, TimelineBucket};
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

pub const INDUSTRY_WEIGHT: f64 = 40.0;
pub const TAG_WEIGHT: f64 = 30.0;
pub const BUDGET_WEIGHT: f64 = 20.0;
pub const TIMELINE_WEIGHT: f64 = 10.0;

// ---------------------------------------------------------------------------
// Keyword extraction
// ---------------------------------------------------------------------------

static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();

fn non_word_re() -> &'static Regex {
    NON_WORD_RE.get_or_init(|| Regex::new(r"\W").unwrap())
}

/// Whitespace tokens longer than three characters, stripped of non-word
/// characters and lowercased. The length filter runs on the raw token.
fn objective_keywords(objectives: &str) -> Vec<String> {
    objectives
        .split_whitespace()
        .filter(|t| t.len() > 3)
        .map(|t| non_word_re().replace_all(t, "").to_lowercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Score terms
// ---------------------------------------------------------------------------

fn industry_term(case_study: &CaseStudy, brief: &ProjectBrief) -> f64 {
    // Case-sensitive exact match; both sides come from the fixed industry list.
    if case_study.industry == brief.industry {
        INDUSTRY_WEIGHT
    } else {
        0.0
    }
}

/// A tag matches when any brief keyword contains the lowercased tag as a
/// substring. An untagged case study contributes 0 here.
fn tag_term(case_study: &CaseStudy, keywords: &[String]) -> f64 {
    if case_study.tags.is_empty() {
        return 0.0;
    }
    let matched = case_study
        .tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            keywords.iter().any(|kw| kw.contains(&tag))
        })
        .count();
    (matched as f64 / case_study.tags.len() as f64) * TAG_WEIGHT
}

// Every label maps to a bucket (unknown labels fall back to Medium), so
// these checks never fail and the fixed points are always awarded. The
// scoring rule is kept byte-for-byte compatible with stored scores.

fn budget_compatible(_bucket: BudgetBucket) -> bool {
    true
}

fn timeline_compatible(_bucket: TimelineBucket) -> bool {
    true
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Relevance of one case study to one brief, 0–100.
///
/// Weighted sum: industry match 40, tag/keyword overlap 0–30, budget
/// compatibility 20, timeline compatibility 10; rounded to the nearest
/// integer at the end. Pure with no error paths.
pub fn score(case_study: &CaseStudy, brief: &ProjectBrief) -> u32 {
    let keywords = objective_keywords(&brief.objectives);

    let mut total = industry_term(case_study, brief);
    total += tag_term(case_study, &keywords);
    if budget_compatible(BudgetBucket::from_label(&brief.budget)) {
        total += BUDGET_WEIGHT;
    }
    if timeline_compatible(TimelineBucket::from_label(&brief.timeline)) {
        total += TIMELINE_WEIGHT;
    }

    total.round() as u32
}

/// Score every candidate and sort descending. Equal scores keep input order.
pub fn rank<'a>(brief: &ProjectBrief, candidates: &'a [CaseStudy]) -> Vec<(u32, &'a CaseStudy)> {
    let mut scored: Vec<(u32, &CaseStudy)> = candidates
        .iter()
        .map(|cs| (score(cs, brief), cs))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(industry: &str, objectives: &str) -> ProjectBrief {
        ProjectBrief::new(
            "Test brief",
            industry,
            "$50,000 - $100,000",
            objectives,
            "3-4 months",
            "",
            "customer@example.com",
        )
    }

    fn case_study(industry: &str, tags: &[&str]) -> CaseStudy {
        CaseStudy::new(
            "Test case study",
            industry,
            "Description",
            tags.iter().map(|t| t.to_string()).collect(),
            "Outcome",
        )
    }

    #[test]
    fn worked_retail_example_scores_80() {
        // industry 40 + tags (1/3)*30 + budget 20 + timeline 10
        let b = brief("Retail", "improve online sales performance");
        let cs = case_study("Retail", &["e-commerce", "mobile", "performance"]);
        assert_eq!(score(&cs, &b), 80);
    }

    #[test]
    fn score_stays_in_bounds() {
        let briefs = [
            brief("Retail", ""),
            brief("Technology", "integration automation cloud security scalability"),
            brief("", "x"),
        ];
        let studies = [
            case_study("Retail", &[]),
            case_study("Technology", &["integration", "automation", "cloud"]),
            case_study("Finance", &["security"]),
        ];
        for b in &briefs {
            for cs in &studies {
                let s = score(cs, b);
                assert!((30..=100).contains(&s), "score {s} out of range");
            }
        }
    }

    #[test]
    fn full_match_scores_100() {
        let b = brief("Technology", "integration automation cloud rollout");
        let cs = case_study("Technology", &["integration", "automation", "cloud"]);
        assert_eq!(score(&cs, &b), 100);
    }

    #[test]
    fn industry_term_is_monotonic() {
        let b = brief("Retail", "improve online sales performance");
        let matching = case_study("Retail", &["performance"]);
        let mismatched = case_study("Finance", &["performance"]);
        assert_eq!(score(&matching, &b) - score(&mismatched, &b), 40);
    }

    #[test]
    fn industry_match_is_case_sensitive() {
        let b = brief("Retail", "performance");
        assert_eq!(score(&case_study("retail", &[]), &b), 30);
        assert_eq!(score(&case_study("Retail", &[]), &b), 70);
    }

    #[test]
    fn empty_tags_contribute_zero() {
        let b = brief("Retail", "improve online sales performance");
        let cs = case_study("Retail", &[]);
        // 40 + 0 + 20 + 10, not NaN
        assert_eq!(score(&cs, &b), 70);
    }

    #[test]
    fn floor_is_budget_plus_timeline() {
        let b = brief("Energy", "grid");
        let cs = case_study("Finance", &["mobile"]);
        assert_eq!(score(&cs, &b), 30);
    }

    #[test]
    fn short_tokens_are_dropped() {
        // "CRM use" has no token longer than three chars, so the CRM tag
        // cannot match.
        let b = brief("Technology", "CRM use");
        let cs = case_study("Technology", &["CRM"]);
        assert_eq!(score(&cs, &b), 70);
    }

    #[test]
    fn punctuation_is_stripped_from_keywords() {
        let b = brief("Retail", "boost performance, today");
        let cs = case_study("Retail", &["performance"]);
        // "performance," → "performance" matches the tag exactly.
        assert_eq!(score(&cs, &b), 100);
    }

    #[test]
    fn tag_matching_is_case_insensitive() {
        let b = brief("Technology", "modern saas rollout");
        let cs = case_study("Technology", &["SaaS"]);
        assert_eq!(score(&cs, &b), 100);
    }

    #[test]
    fn fractional_contributions_round() {
        // 1 of 3 tags over an industry mismatch: 0 + 10 + 20 + 10 = 40.
        let b = brief("Finance", "improve performance reporting");
        let cs = case_study("Healthcare", &["performance", "mobile", "cloud"]);
        assert_eq!(score(&cs, &b), 40);

        // 1 of 7 tags: (1/7)*30 ≈ 4.29, total 34.29 rounds to 34.
        let cs = case_study(
            "Healthcare",
            &["performance", "mobile", "cloud", "AI", "CRM", "SaaS", "security"],
        );
        assert_eq!(score(&cs, &b), 34);
    }

    #[test]
    fn unknown_budget_and_timeline_still_add_fixed_points() {
        let mut b = brief("Retail", "performance");
        b.budget = "whatever it takes".to_string();
        b.timeline = "soon".to_string();
        let cs = case_study("Retail", &["performance"]);
        assert_eq!(score(&cs, &b), 100);
    }

    #[test]
    fn rank_sorts_descending_and_is_stable() {
        let b = brief("Retail", "improve online sales performance");
        let candidates = vec![
            case_study("Finance", &["mobile"]),                      // 30
            case_study("Retail", &["performance"]),                  // 100
            case_study("Retail", &[]),                               // 70
            case_study("Healthcare", &["mobile"]),                   // 30
        ];
        let ranked = rank(&b, &candidates);
        let scores: Vec<u32> = ranked.iter().map(|(s, _)| *s).collect();
        assert_eq!(scores, vec![100, 70, 30, 30]);
        // Equal scores keep input order.
        assert_eq!(ranked[2].1.industry, "Finance");
        assert_eq!(ranked[3].1.industry, "Healthcare");
    }
}
