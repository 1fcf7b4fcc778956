//! Placeholder substitution for prompt templates.
//!
//! Three placeholder families are rewritten in order: static profile tokens,
//! cross-step output references, then the outline/keyword singletons.
//! Matching is case-insensitive. Each family rewrites the literal matched
//! spans in a single pass, so replacement text is never re-scanned by its own
//! family; there is no escape syntax for literal square brackets.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::models::{ProfileData, StepOutputs};

/// Read-only view of everything placeholders can draw from.
pub struct SubstitutionContext<'a> {
    pub profile: &'a ProfileData,
    pub step_outputs: &'a StepOutputs,
    pub primary_keyword: &'a str,
    pub blog_outline: &'a str,
}

/// Static profile tokens and the labels used in their fallback strings.
const PROFILE_TOKENS: [(&str, &str); 7] = [
    ("our domain", "Our Domain"),
    ("brand voice", "Brand Voice"),
    ("general competitors", "General Competitors"),
    ("social handles", "Social Handles"),
    ("sitemap url", "Sitemap URL"),
    ("wp-admin url", "WP Admin URL"),
    ("logo url", "Logo URL"),
];

static PROFILE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    PROFILE_TOKENS
        .iter()
        .map(|(token, _)| {
            Regex::new(&format!(r"(?i)\[{}\]", regex::escape(token)))
                .expect("valid placeholder pattern")
        })
        .collect()
});

static OUTPUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[output from step (\d+):\s*([^\]]+)\]").expect("valid placeholder pattern")
});

static OUTLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[blog outline\]").expect("valid placeholder pattern"));

static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[primary keyword\]").expect("valid placeholder pattern"));

fn profile_field<'a>(profile: &'a ProfileData, token: &str) -> &'a str {
    match token {
        "our domain" => &profile.our_domain,
        "brand voice" => &profile.brand_voice,
        "general competitors" => &profile.general_competitors,
        "social handles" => &profile.social_handles,
        "sitemap url" => &profile.sitemap_url,
        "wp-admin url" => &profile.wp_admin_url,
        "logo url" => &profile.logo_url,
        _ => "",
    }
}

fn resolve_output(ctx: &SubstitutionContext, step_id: u32, field: &str) -> String {
    let value = ctx
        .step_outputs
        .get(&step_id)
        .and_then(|outputs| outputs.get(field));
    match value {
        None => format!("(Output from Step {}: '{}' not found)", step_id, field),
        Some(value) if value.is_blank() => {
            format!("(Output from Step {}: '{}' is empty)", step_id, field)
        }
        Some(value) => value.joined(),
    }
}

/// Rewrites `template` against the given context. Pure: no state is touched,
/// which keeps the engine trivially testable with hand-built contexts.
pub fn substitute(template: &str, ctx: &SubstitutionContext) -> String {
    let mut content = template.to_string();

    for (index, (token, label)) in PROFILE_TOKENS.iter().enumerate() {
        let value = profile_field(ctx.profile, token).trim();
        let replacement = if value.is_empty() {
            format!("({} Not Set in Profile)", label)
        } else {
            value.to_string()
        };
        content = PROFILE_RES[index]
            .replace_all(&content, NoExpand(&replacement))
            .into_owned();
    }

    content = OUTPUT_RE
        .replace_all(&content, |caps: &regex::Captures| {
            let step_id: u32 = caps[1].parse().unwrap_or(0);
            let field = caps[2].trim();
            resolve_output(ctx, step_id, field)
        })
        .into_owned();

    let outline_fallback = "(Blog Outline is empty)";
    let outline = if ctx.blog_outline.trim().is_empty() {
        outline_fallback
    } else {
        ctx.blog_outline
    };
    content = OUTLINE_RE
        .replace_all(&content, NoExpand(outline))
        .into_owned();

    let keyword_fallback = "(Primary Keyword Not Set)";
    let keyword = if ctx.primary_keyword.trim().is_empty() {
        keyword_fallback
    } else {
        ctx.primary_keyword
    };
    content = KEYWORD_RE
        .replace_all(&content, NoExpand(keyword))
        .into_owned();

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use std::collections::BTreeMap;

    struct Fixture {
        profile: ProfileData,
        step_outputs: StepOutputs,
        primary_keyword: String,
        blog_outline: String,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                profile: ProfileData::default(),
                step_outputs: StepOutputs::new(),
                primary_keyword: String::new(),
                blog_outline: String::new(),
            }
        }

        fn set_output(&mut self, step_id: u32, field: &str, value: FieldValue) {
            self.step_outputs
                .entry(step_id)
                .or_insert_with(BTreeMap::new)
                .insert(field.to_string(), value);
        }

        fn ctx(&self) -> SubstitutionContext<'_> {
            SubstitutionContext {
                profile: &self.profile,
                step_outputs: &self.step_outputs,
                primary_keyword: &self.primary_keyword,
                blog_outline: &self.blog_outline,
            }
        }
    }

    #[test]
    fn resolves_keyword_profile_and_step_output() {
        let mut fixture = Fixture::new();
        fixture.primary_keyword = "espresso machines".to_string();
        fixture.profile.brand_voice = "playful".to_string();
        fixture.set_output(2, "selectedTopic", "Top 5 Espresso Machines".into());

        let result = substitute(
            "Write about [primary keyword] using [brand voice] tone. \
             See [output from step 2: selectedTopic].",
            &fixture.ctx(),
        );
        assert_eq!(
            result,
            "Write about espresso machines using playful tone. \
             See Top 5 Espresso Machines."
        );
    }

    #[test]
    fn missing_output_key_reports_not_found() {
        let mut fixture = Fixture::new();
        fixture.primary_keyword = "espresso machines".to_string();
        fixture.profile.brand_voice = "playful".to_string();
        fixture.step_outputs.insert(2, BTreeMap::new());

        let result = substitute(
            "Write about [primary keyword] using [brand voice] tone. \
             See [output from step 2: selectedTopic].",
            &fixture.ctx(),
        );
        assert_eq!(
            result,
            "Write about espresso machines using playful tone. \
             See (Output from Step 2: 'selectedTopic' not found)."
        );
    }

    #[test]
    fn blank_output_value_reports_is_empty() {
        let mut fixture = Fixture::new();
        fixture.set_output(3, "researchOutput", "   ".into());

        let result = substitute("[output from step 3: researchOutput]", &fixture.ctx());
        assert_eq!(result, "(Output from Step 3: 'researchOutput' is empty)");
    }

    #[test]
    fn empty_list_value_reports_is_empty() {
        let mut fixture = Fixture::new();
        fixture.set_output(1, "competitorWebsiteUrls", FieldValue::List(vec![]));

        let result = substitute("[output from step 1: competitorWebsiteUrls]", &fixture.ctx());
        assert_eq!(
            result,
            "(Output from Step 1: 'competitorWebsiteUrls' is empty)"
        );
    }

    #[test]
    fn list_values_join_with_comma_space() {
        let mut fixture = Fixture::new();
        fixture.set_output(
            1,
            "competitorWebsiteUrls",
            FieldValue::List(vec!["a.com".to_string(), "b.com".to_string()]),
        );

        let result = substitute("Compare [output from step 1: competitorWebsiteUrls]", &fixture.ctx());
        assert_eq!(result, "Compare a.com, b.com");
    }

    #[test]
    fn profile_tokens_fall_back_when_unset() {
        let fixture = Fixture::new();
        let result = substitute("Domain: [our domain]", &fixture.ctx());
        assert_eq!(result, "Domain: (Our Domain Not Set in Profile)");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut fixture = Fixture::new();
        fixture.primary_keyword = "espresso".to_string();
        fixture.profile.our_domain = "example.com".to_string();
        fixture.set_output(2, "selectedTopic", "Topic".into());

        let result = substitute(
            "[PRIMARY KEYWORD] on [Our Domain]: [Output From Step 2: selectedTopic]",
            &fixture.ctx(),
        );
        assert_eq!(result, "espresso on example.com: Topic");
    }

    #[test]
    fn outline_and_keyword_singletons_have_their_own_fallbacks() {
        let fixture = Fixture::new();
        let result = substitute("[Blog Outline] / [primary keyword]", &fixture.ctx());
        assert_eq!(result, "(Blog Outline is empty) / (Primary Keyword Not Set)");
    }

    #[test]
    fn outline_keeps_its_formatting() {
        let mut fixture = Fixture::new();
        fixture.blog_outline = "# Intro\n# Body\n".to_string();

        let result = substitute("Outline:\n[Blog Outline]", &fixture.ctx());
        assert_eq!(result, "Outline:\n# Intro\n# Body\n");
    }

    #[test]
    fn replacement_text_is_not_rescanned_by_its_family() {
        let mut fixture = Fixture::new();
        fixture.set_output(2, "a", "[output from step 2: b]".into());
        fixture.set_output(2, "b", "should never appear".into());

        let result = substitute("[output from step 2: a]", &fixture.ctx());
        assert_eq!(result, "[output from step 2: b]");
    }

    #[test]
    fn dollar_signs_in_values_are_literal() {
        let mut fixture = Fixture::new();
        fixture.profile.brand_voice = "$1 bargain".to_string();

        let result = substitute("Tone: [brand voice]", &fixture.ctx());
        assert_eq!(result, "Tone: $1 bargain");
    }

    #[test]
    fn field_name_lookup_is_exact_while_pattern_is_not() {
        let mut fixture = Fixture::new();
        fixture.set_output(2, "selectedTopic", "Topic".into());

        // The grammar matches regardless of case, but the field key must
        // match the stored name exactly.
        let result = substitute("[OUTPUT FROM STEP 2: selectedtopic]", &fixture.ctx());
        assert_eq!(result, "(Output from Step 2: 'selectedtopic' not found)");
    }

    #[test]
    fn unrelated_bracket_text_passes_through() {
        let fixture = Fixture::new();
        let result = substitute("Keep [this note] as-is", &fixture.ctx());
        assert_eq!(result, "Keep [this note] as-is");
    }
}
