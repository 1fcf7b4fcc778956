use serde::{Deserialize, Serialize};

/// One stage of the fixed content-production workflow. The catalog is static
/// data; steps are never created or edited at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub input_fields: Vec<InputField>,
    #[serde(default)]
    pub output_fields: Vec<OutputField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub multi_input: bool,
    #[serde(default)]
    pub max_items: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
}

/// Step whose outline output mirrors into the denormalized outline slot.
pub const OUTLINE_STEP_ID: u32 = 5;
pub const OUTLINE_FIELD: &str = "outlineOutput";

/// Output field the primary keyword is written through to.
pub const PRIMARY_KEYWORD_FIELD: &str = "primaryKeyword";

fn text_field(name: &str, label: &str, placeholder: &str) -> InputField {
    InputField {
        name: name.to_string(),
        label: label.to_string(),
        placeholder: placeholder.to_string(),
        multi_input: false,
        max_items: None,
    }
}

fn output(name: &str, label: &str, placeholder: &str) -> OutputField {
    OutputField {
        name: name.to_string(),
        label: label.to_string(),
        placeholder: placeholder.to_string(),
    }
}

fn step(
    id: u32,
    title: &str,
    category: &str,
    description: &str,
    input_fields: Vec<InputField>,
    output_fields: Vec<OutputField>,
) -> Step {
    Step {
        id,
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        input_fields,
        output_fields,
    }
}

pub fn default_steps() -> Vec<Step> {
    const RESEARCH: &str = "Research & Planning";
    const CREATION: &str = "Content Creation";
    const REFINEMENT: &str = "Refinement & Optimization";

    vec![
        step(
            1,
            "Competitor & Keyword Research",
            RESEARCH,
            "Analyze the pages ranking for your target keyword, extract content gaps \
             and search intent, and settle on the primary keyword. List the competitor \
             URLs you will benchmark against below.",
            vec![
                text_field(
                    "primaryKeyword",
                    "Selected Primary Keyword",
                    "Enter the main keyword for the article",
                ),
                InputField {
                    name: "competitorWebsiteUrls".to_string(),
                    label: "Competitor URLs (up to 5 for this keyword)".to_string(),
                    placeholder: "e.g., competitor-site.com".to_string(),
                    multi_input: true,
                    max_items: Some(5),
                },
            ],
            vec![],
        ),
        step(
            2,
            "Topic & Headline Brainstorm",
            RESEARCH,
            "Brainstorm topics and headlines around the primary keyword, then pick a \
             blog topic and a working headline.",
            vec![],
            vec![
                output("selectedTopic", "Selected Blog Topic", "Enter the chosen topic..."),
                output("workingHeadline", "Working Headline", "Enter the draft headline..."),
            ],
        ),
        step(
            3,
            "AI Research",
            RESEARCH,
            "Run initial in-depth research on the topic with an AI research tool, \
             guided by the prompts assigned to this step, and save the key findings.",
            vec![],
            vec![output(
                "researchOutput",
                "Research Notes",
                "Paste key findings, insights, and data...",
            )],
        ),
        step(
            4,
            "Deep Research",
            RESEARCH,
            "Expand the research with a second AI assistant: cross-reference claims, \
             collect unique angles, and save the findings below.",
            vec![],
            vec![output(
                "deepResearchOutput",
                "Deep Research Notes",
                "Paste key findings, diverse perspectives, and source links...",
            )],
        ),
        step(
            5,
            "Outline Creation",
            CREATION,
            "Organize the research from steps 3 and 4 into a structured blog outline \
             with logical flow and SEO coverage, then paste the final outline below.",
            vec![],
            vec![output(
                "outlineOutput",
                "Blog Outline",
                "Paste the structured blog outline here (e.g., using Markdown headings)...",
            )],
        ),
        step(
            6,
            "AI-Assisted Drafting",
            CREATION,
            "Generate a first draft from the outline and primary keyword, keeping the \
             [brand voice] tone throughout, and save the complete draft below.",
            vec![],
            vec![output(
                "draftOutput",
                "AI-Generated Draft",
                "Paste the full first draft generated by the AI...",
            )],
        ),
        step(
            7,
            "Initial SEO Optimization",
            CREATION,
            "Optimize the draft for on-page SEO: keyword placement in title, headings \
             and body, plus a first pass at the meta description.",
            vec![],
            vec![output(
                "metaDescriptionInitial",
                "Meta Description (Initial)",
                "Draft the initial SEO-optimized meta description (120-155 chars)...",
            )],
        ),
        step(
            8,
            "Multimedia & Stock Images",
            CREATION,
            "Source and prepare the visual content: stock photos, custom graphics, or \
             AI-generated images, optimized for the web.",
            vec![],
            vec![
                output("selectedImages", "Selected Image URLs", "List the URLs of chosen images..."),
                output("imageNotes", "Image Notes", "Notes about image placement, alt text, etc..."),
            ],
        ),
        step(
            9,
            "Engagement Elements (FAQs/CTAs)",
            CREATION,
            "Draft FAQs from common reader questions and plan the calls-to-action and \
             their placement.",
            vec![],
            vec![
                output("faqContent", "FAQ Content", "Enter FAQ questions and answers..."),
                output("ctaElements", "CTA Elements", "Describe CTAs and their placement..."),
            ],
        ),
        step(
            10,
            "Human Edit: Grammar & Mechanics",
            REFINEMENT,
            "Edit the draft by hand for grammar, mechanics, and readability; note the \
             significant changes.",
            vec![],
            vec![output(
                "editingNotes",
                "Editing Notes",
                "Note major edits and improvements made...",
            )],
        ),
        step(
            11,
            "Human Edit: Fact-Checking",
            REFINEMENT,
            "Verify every fact, statistic, and claim against its source and document \
             the corrections.",
            vec![],
            vec![output(
                "factCheckNotes",
                "Fact-Check Notes",
                "Document verified facts and sources...",
            )],
        ),
        step(
            12,
            "Plagiarism Check",
            REFINEMENT,
            "Run a plagiarism check over the edited draft and resolve anything it \
             flags.",
            vec![],
            vec![output(
                "plagiarismResults",
                "Plagiarism Check Results",
                "Document plagiarism check findings...",
            )],
        ),
        step(
            13,
            "Final SEO & Technical Check",
            REFINEMENT,
            "Verify meta tags, image optimization, internal links, and mobile \
             rendering; finalize the meta description.",
            vec![],
            vec![
                output(
                    "technicalChecklist",
                    "Technical Checklist",
                    "Document completed technical checks...",
                ),
                output(
                    "finalMetaDescription",
                    "Final Meta Description",
                    "Enter the final, optimized meta description...",
                ),
            ],
        ),
        step(
            14,
            "Code Formatting & Cleanup",
            REFINEMENT,
            "Clean up any embedded code blocks (HTML, CSS, snippets) so they render \
             with correct formatting and highlighting.",
            vec![],
            vec![output(
                "codeFormatNotes",
                "Code Formatting Notes",
                "Document code formatting changes...",
            )],
        ),
        step(
            15,
            "Link Analysis & Optimization",
            REFINEMENT,
            "Review internal and external links: fix broken targets and tighten \
             anchor text.",
            vec![],
            vec![output(
                "linkAnalysisNotes",
                "Link Analysis Notes",
                "Document link review findings...",
            )],
        ),
        step(
            16,
            "Final Review & Publish",
            REFINEMENT,
            "Walk the final checklist, preview the post across devices, and publish.",
            vec![],
            vec![
                output("finalChecklist", "Final Review Checklist", "Complete final review checklist..."),
                output("publishNotes", "Publishing Notes", "Add any publishing-related notes..."),
            ],
        ),
    ]
}
