use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reusable prompt template. `content` may contain bracket placeholders that
/// the substitution engine rewrites before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub favorite: bool,
}

/// Id-less creation payload; the library generates the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePromptRequest {
    pub title: String,
    pub category: String,
    pub content: String,
    pub favorite: bool,
}

fn prompt(title: &str, category: &str, content: &str, favorite: bool) -> Prompt {
    Prompt {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        category: category.to_string(),
        content: content.to_string(),
        favorite,
    }
}

/// Built-in catalog installed when no usable definitions are persisted.
pub fn default_prompts() -> Vec<Prompt> {
    vec![
        prompt(
            "Keyword Cluster Ideas",
            "AI Research",
            "Generate 5-7 keyword clusters related to [primary keyword], focusing on \
             informational intent. For each cluster, suggest 3 long-tail keywords.",
            false,
        ),
        prompt(
            "FAQ Generation",
            "AI Research",
            "Identify the top 10 frequently asked questions about [primary keyword] \
             based on current search trends and 'People Also Ask'.",
            true,
        ),
        prompt(
            "Comprehensive Research Prompt",
            "Deep Research",
            "Conduct deep research on [primary keyword] using multiple sources. Focus \
             on unique angles, statistics, expert opinions, and counter-arguments. \
             Synthesize findings relevant to the topic: \
             '[output from step 2: selectedTopic]'.",
            false,
        ),
        prompt(
            "Blog Post Section Draft",
            "AI Drafting",
            "Draft one section of a blog post about [primary keyword], following this \
             outline:\n[Blog Outline]\n\nMaintain a [brand voice] tone for our \
             audience on [our domain].",
            false,
        ),
    ]
}
