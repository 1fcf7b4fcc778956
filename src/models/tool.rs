use serde::{Deserialize, Serialize};

/// Reference entry in the tool catalog. The name doubles as the identity
/// key, so renaming a tool is delete-and-recreate from the assignment map's
/// point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub url: String,
    pub category: String,
}

fn tool(name: &str, url: &str, category: &str) -> Tool {
    Tool {
        name: name.to_string(),
        url: url.to_string(),
        category: category.to_string(),
    }
}

/// Built-in catalog installed when no usable definitions are persisted.
pub fn default_tools() -> Vec<Tool> {
    vec![
        tool(
            "Google Keyword Planner",
            "https://ads.google.com/aw/keywordplanner/home",
            "Keyword Research (Free)",
        ),
        tool("SEMrush", "https://www.semrush.com/", "Keyword Research & SEO Suite (Premium)"),
        tool(
            "Ahrefs Keywords Explorer",
            "https://ahrefs.com/keywords-explorer",
            "Keyword Research & SEO Suite (Premium)",
        ),
        tool("Ubersuggest", "https://neilpatel.com/ubersuggest/", "Keyword Research (Freemium)"),
        tool("AnswerThePublic", "https://answerthepublic.com/", "Topic Ideas (Freemium)"),
        tool("Google Trends", "https://trends.google.com/trends/", "Trend Analysis (Free)"),
        tool(
            "CoSchedule Headline Analyzer",
            "https://coschedule.com/headline-analyzer",
            "Headline Analysis (Free)",
        ),
        tool("Perplexity AI", "https://www.perplexity.ai/", "AI Research Tool"),
        tool("ChatGPT", "https://chat.openai.com", "AI Research Assistant"),
        tool("Google Scholar", "https://scholar.google.com/", "Academic Research"),
        tool("Google Gemini", "https://gemini.google.com/", "Advanced AI Research"),
        tool("Claude", "https://claude.ai/", "Advanced AI Research"),
        tool("NotebookLM", "https://notebooklm.google/", "AI Notebook & Outline"),
        tool("Notion", "https://www.notion.so", "Outline & Notes"),
        tool("Yoast SEO", "https://yoast.com/wordpress/plugins/seo/", "SEO Plugin (WordPress)"),
        tool("Surfer SEO", "https://surferseo.com/", "SEO Writing Guidance"),
        tool("Unsplash", "https://unsplash.com/", "Free Stock Photos"),
        tool("Pexels", "https://www.pexels.com/", "Free Stock Photos & Videos"),
        tool("Canva", "https://www.canva.com/", "Image Design & Editing"),
        tool("AnswerSocrates", "https://answersocrates.com/", "Question Research"),
        tool("Grammarly", "https://www.grammarly.com/", "Grammar & Style Checker"),
        tool("Hemingway Editor", "https://hemingwayapp.com/", "Readability Check"),
        tool("Snopes", "https://www.snopes.com/", "Fact Checking"),
        tool("Copyscape", "https://www.copyscape.com/", "Plagiarism Detection"),
        tool("Quetext", "https://www.quetext.com/", "Plagiarism Checker"),
        tool(
            "Google Search Console",
            "https://search.google.com/search-console",
            "SEO Tools",
        ),
        tool("GTmetrix", "https://gtmetrix.com/", "Performance Check"),
        tool("Prettier", "https://prettier.io/", "Code Formatting"),
        tool("Moz Link Explorer", "https://moz.com/link-explorer", "Link Research"),
        tool("WordPress", "https://wordpress.org/", "CMS"),
        tool("Google Analytics", "https://analytics.google.com/", "Analytics"),
    ]
}
