//! Human-readable narrative generation.
//!
//! Pure presentation: structured results are formatted into prompts and
//! handed to the LLM. Nothing here feeds back into the graph or the
//! matcher.

use std::sync::Arc;

use crate::error::BrollyResult;
use crate::traits::{GenerationOptions, Llm};
use crate::types::{CoverageComparison, Message, PolicyProfile, ProfileCategory, RiskProfile};

/// Render a policy profile as plain text, one section per category.
pub fn format_profile(policy_id: &str, profile: &PolicyProfile) -> String {
    let mut out = format!("=== {} ===\n", policy_id);

    for category in ProfileCategory::all() {
        out.push_str(&format!("\n[{}]\n", category.as_str()));
        let rows = profile.rows(*category);
        if rows.is_empty() {
            out.push_str("- None found\n");
        } else {
            for row in rows {
                out.push_str(&format!("- {} → {} → {}\n", row.head, row.relation, row.tail));
            }
        }
    }

    out
}

/// Generate a narrative explanation of a single policy's profile.
pub async fn explain_policy(
    llm: &Arc<dyn Llm>,
    policy_id: &str,
    profile: &PolicyProfile,
) -> BrollyResult<String> {
    let formatted = format_profile(policy_id, profile);

    let prompt = format!(
        r#"You are analyzing ONE insurance policy.

Use ONLY the information below:

{}

Write a clear explanation in this structure:

POLICY OVERVIEW
COVERAGES
EXCLUSIONS
LIMITS
CONDITIONS
DEFINITIONS
NOTES (say "not specified" when unclear)

Do NOT invent details."#,
        formatted
    );

    narrate(llm, prompt).await
}

/// Generate a narrative explanation of a detected risk profile.
pub async fn explain_risk_profile(
    llm: &Arc<dyn Llm>,
    profile: &RiskProfile,
) -> BrollyResult<String> {
    let prompt = format!(
        r#"You are an insurance assistant.

Here is a detected business risk profile:

{}

Write a clear explanation with these sections:

BUSINESS RISKS
Explain what risks were detected and why they matter.

MANDATORY COVERAGE
Explain why each required coverage is important in practical terms.

OPTIONAL COVERAGE
Explain when optional covers are helpful.

NOTES
If something is empty, tell the user that it's not detected instead of inventing.

Use simple language. Do NOT add new risks. Base everything ONLY on the JSON."#,
        serde_json::to_string_pretty(profile)?
    );

    narrate(llm, prompt).await
}

/// Generate a narrative verdict on how a policy matches a risk profile.
pub async fn explain_comparison(
    llm: &Arc<dyn Llm>,
    policy_id: &str,
    needs: &RiskProfile,
    comparison: &CoverageComparison,
) -> BrollyResult<String> {
    let prompt = format!(
        r#"You are an insurance assistant.

POLICY NAME:
{}

RISK ANALYSIS:
{}

POLICY COVERAGE COMPARISON:
{}

Explain clearly:

SUMMARY
What kind of business risks this user has.

MANDATORY COVERAGE
Say which requirements are already covered and which are missing.
Explain why missing ones matter, without fearmongering.

OPTIONAL COVERAGE
Explain optional protections in practical terms.

FINAL VERDICT
Is this policy adequate, partially adequate, or insufficient?

Important rules:
- Do NOT invent new risks
- Base everything ONLY on the JSON
- Use clear bullet points"#,
        policy_id,
        serde_json::to_string_pretty(needs)?,
        serde_json::to_string_pretty(comparison)?
    );

    narrate(llm, prompt).await
}

async fn narrate(llm: &Arc<dyn Llm>, prompt: String) -> BrollyResult<String> {
    let response = llm
        .generate(&[Message::user(prompt)], Some(GenerationOptions::default()))
        .await?;
    Ok(response.content_or_empty().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FactRecord;

    #[test]
    fn test_format_profile_empty_sections() {
        let profile = PolicyProfile::default();
        let text = format_profile("policyA.pdf", &profile);
        assert!(text.starts_with("=== policyA.pdf ==="));
        assert_eq!(text.matches("- None found").count(), 5);
    }

    #[test]
    fn test_format_profile_rows() {
        let mut profile = PolicyProfile::default();
        profile.push(
            ProfileCategory::Coverages,
            FactRecord::new("Policy A", "COVERS", "Theft"),
        );
        let text = format_profile("policyA.pdf", &profile);
        assert!(text.contains("[Coverages]"));
        assert!(text.contains("- Policy A → COVERS → Theft"));
        assert_eq!(text.matches("- None found").count(), 4);
    }
}
