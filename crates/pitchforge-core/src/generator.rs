use crate::brief::ProjectBrief;
use crate::case_study::CaseStudy;

// ---------------------------------------------------------------------------
// Pitch content generation
// ---------------------------------------------------------------------------

/// Render the proposal document for a brief and an ordered list of selected
/// case studies.
///
/// Pure string templating: identical inputs always produce byte-identical
/// output. The case-studies section is omitted entirely when the list is
/// empty; otherwise entries appear in input order with 1-based numbering.
pub fn generate(brief: &ProjectBrief, case_studies: &[CaseStudy]) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# Solution Pitch: {}\n\n", brief.title));

    doc.push_str("## Executive Summary\n\n");
    doc.push_str(&format!(
        "We are pleased to present our proposed solution for your project. \
         Based on your objectives — {} — we have shaped an engagement that \
         fits a budget of {} and a timeline of {}.\n\n",
        brief.objectives, brief.budget, brief.timeline
    ));

    doc.push_str("## Our Approach\n\n");
    doc.push_str(
        "- **Discovery** — requirements workshops and success criteria\n\
         - **Design** — architecture, UX flows, and delivery plan\n\
         - **Development** — iterative builds with weekly demos\n\
         - **Testing** — functional, performance, and acceptance testing\n\
         - **Deployment** — launch, handover, and hypercare\n\n",
    );

    if !case_studies.is_empty() {
        doc.push_str("## Relevant Case Studies\n\n");
        for (i, cs) in case_studies.iter().enumerate() {
            doc.push_str(&format!("### {}. {}\n\n", i + 1, cs.title));
            doc.push_str(&format!("- Industry: {}\n", cs.industry));
            doc.push_str(&format!("- Outcome: {}\n", cs.outcome));
            doc.push_str(&format!("- Relevance Score: {}/100\n\n", cs.relevance_score));
        }
    }

    doc.push_str("## Timeline & Deliverables\n\n");
    doc.push_str(&format!(
        "We will deliver within your stated timeline of {}:\n\n",
        brief.timeline
    ));
    doc.push_str(
        "- Week 1: Discovery report and finalized scope\n\
         - Week 2: Design package and delivery plan\n\
         - Week 4: First working increment\n\
         - Week 6: Feature-complete build and test results\n\
         - Week 8: Production deployment and handover\n\n",
    );

    doc.push_str("## Investment\n\n");
    doc.push_str(&format!(
        "Our proposal fits within your stated budget of {} and covers:\n\n",
        brief.budget
    ));
    doc.push_str(
        "- Dedicated delivery team for the full engagement\n\
         - All design, development, and testing effort\n\
         - Project management and weekly reporting\n\
         - Deployment and launch support\n\
         - 30 days of post-launch support\n\n",
    );

    doc.push_str("## Next Steps\n\n");
    doc.push_str(
        "1. Review this proposal with your stakeholders\n\
         2. Schedule a walkthrough call with our team\n\
         3. Confirm scope and sign off to begin Discovery\n\n",
    );

    doc.push_str("We look forward to working with you.\n");

    doc
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
