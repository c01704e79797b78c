//! Risk classification: LLM bucketing of free-text business descriptions
//! plus a deterministic keyword rule pass deriving coverage requirements.
//!
//! Parse failures here are fully absorbed into the empty five-category
//! structure. This is the only silent-recovery path in the system; every
//! other LLM failure mode propagates.

use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BrollyResult;
use crate::traits::{GenerationOptions, Llm};
use crate::types::{BusinessProfile, BusinessRiskAnalysis, Message, RiskBreakdown, RiskProfile};

const RISK_PROMPT: &str = r#"Identify business risks.

TEXT:
"""{TEXT}"""

Classify risks ONLY into:

physical:
- fire, theft, natural disaster, property damage, equipment damage

liability:
- lawsuits, customer injury, product liability, third-party claims

operational:
- business interruption, supply chain, inventory spoilage

people:
- employee health, accidents, workers safety

industry_specific:
- cyber/data breach, food spoilage, medical negligence, etc.

Return JSON only:

{
 "physical": [],
 "liability": [],
 "operational": [],
 "people": [],
 "industry_specific": []
}

If unknown, return empty list for that category.
"#;

/// Keyword substring → mandatory coverage code.
const MANDATORY_RULES: &[(&str, &str)] = &[
    ("fire", "property_fire_cover"),
    ("theft", "burglary_theft_cover"),
    ("business interruption", "loss_of_profit"),
    ("employee accident", "workmen_compensation"),
    ("customer injury", "public_liability"),
    ("data breach", "cyber_insurance"),
    ("food spoilage", "deterioration_of_stock"),
];

/// Keyword substring → optional coverage code.
const OPTIONAL_RULES: &[(&str, &str)] = &[
    ("natural disaster", "catastrophe_addon"),
    ("equipment breakdown", "machinery_breakdown"),
    ("inventory spoilage", "stock_deterioration"),
    ("customer complaints", "professional_liability"),
    ("medical negligence", "medical_malpractice"),
];

static JSON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").unwrap());

/// Strip an optional fenced code block wrapper from an LLM reply.
fn extract_json(content: &str) -> &str {
    if let Some(caps) = JSON_BLOCK.captures(content) {
        if let Some(m) = caps.get(1) {
            return m.as_str().trim();
        }
    }
    content
}

/// Parse the classification reply, absorbing every failure into the empty
/// structure.
fn parse_breakdown(raw: &str) -> RiskBreakdown {
    let content = raw.trim();
    match serde_json::from_str(extract_json(content)) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            tracing::warn!("Failed to parse risk classification response: {}", e);
            RiskBreakdown::default()
        }
    }
}

/// Classify free-text business description into the five risk buckets.
///
/// One LLM call; transport failures propagate. Malformed replies (prose,
/// refusals, broken JSON) come back as the all-empty structure.
pub async fn extract_risks(llm: &Arc<dyn Llm>, user_text: &str) -> BrollyResult<RiskBreakdown> {
    let prompt = RISK_PROMPT.replace("{TEXT}", user_text);

    let response = llm
        .generate(&[Message::user(prompt)], Some(GenerationOptions::default()))
        .await?;

    Ok(parse_breakdown(response.content_or_empty()))
}

/// Deterministic rule pass deriving (mandatory, optional) coverage codes.
///
/// Every phrase is lowercased and substring-tested against both keyword
/// tables; one phrase may trigger several rules. Results are deduplicated
/// and lexicographically sorted.
pub fn classify(risks: &RiskBreakdown) -> (Vec<String>, Vec<String>) {
    let mut mandatory = BTreeSet::new();
    let mut optional = BTreeSet::new();

    for phrase in risks.iter_phrases() {
        let phrase = phrase.to_lowercase();

        for (keyword, cover) in MANDATORY_RULES {
            if phrase.contains(keyword) {
                mandatory.insert(cover.to_string());
            }
        }

        for (keyword, cover) in OPTIONAL_RULES {
            if phrase.contains(keyword) {
                optional.insert(cover.to_string());
            }
        }
    }

    (
        mandatory.into_iter().collect(),
        optional.into_iter().collect(),
    )
}

/// Full risk pipeline: classify, then derive coverage requirements.
///
/// The sole externally invoked entry point for risk analysis.
pub async fn policy_precheck(llm: &Arc<dyn Llm>, user_text: &str) -> BrollyResult<RiskProfile> {
    let risks = extract_risks(llm, user_text).await?;
    let (mandatory, optional) = classify(&risks);

    Ok(RiskProfile {
        risks,
        mandatory,
        optional,
    })
}

/// Risk analysis of a structured business intake form.
///
/// Flattens the profile into the text the classifier sees, then runs the
/// normal precheck pipeline over it.
pub async fn analyze_business(
    llm: &Arc<dyn Llm>,
    profile: &BusinessProfile,
) -> BrollyResult<BusinessRiskAnalysis> {
    let text = format!(
        "Business Name: {}\nIndustry: {}\nNumber of Employees: {}\nAnnual Revenue: {}\nAssets & Equipment: {}\n\nBusiness Description:\n{}",
        profile.business_name,
        profile.industry,
        profile.employees,
        profile.revenue,
        profile.assets,
        profile.description,
    );

    let result = policy_precheck(llm, &text).await?;

    Ok(BusinessRiskAnalysis {
        input_summary: text,
        risks: result.risks,
        mandatory_coverages: result.mandatory,
        optional_coverages: result.optional,
    })
}
