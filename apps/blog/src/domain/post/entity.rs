use serde::{Deserialize, Serialize};

/// A published blog post. Loaded from the external data source and never
/// mutated by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Human readable date shown on the page, e.g. "March 3, 2024".
    pub date: String,
    /// Sortable date used for ordering and recency scoring.
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Lead,
    Heading,
    Blockquote,
    /// Also used for any tag this crate does not know about.
    #[serde(other)]
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cite: Option<String>,
}

impl ContentBlock {
    pub fn to_html(&self) -> String {
        let text = escape_html(&self.text);
        match self.kind {
            BlockKind::Lead => format!("<p class=\"lead\">{}</p>", text),
            BlockKind::Paragraph => format!("<p>{}</p>", text),
            BlockKind::Heading => format!("<h2>{}</h2>", text),
            BlockKind::Blockquote => match &self.cite {
                Some(cite) => format!(
                    "<blockquote><p>{}</p><cite>{}</cite></blockquote>",
                    text,
                    escape_html(cite)
                ),
                None => format!("<blockquote><p>{}</p></blockquote>", text),
            },
        }
    }
}

impl Post {
    /// Renders the post body as a single HTML fragment.
    pub fn render_content(&self) -> String {
        self.content
            .iter()
            .map(ContentBlock::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// A candidate post together with its similarity score. Only lives for the
/// duration of a ranking pass.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub post: &'a Post,
    pub score: f64,
}
