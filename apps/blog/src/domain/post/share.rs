use super::entity::Post;
use reqwest::Url;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ShareLinks {
    pub permalink: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

/// Builds the social share targets for a post page hosted under `base_url`.
pub fn share_links(post: &Post, base_url: &str) -> anyhow::Result<ShareLinks> {
    let permalink = Url::parse(base_url)?.join(&format!("blog/{}", post.id))?;
    let permalink = permalink.to_string();

    let twitter = Url::parse_with_params(
        "https://twitter.com/intent/tweet",
        &[("url", permalink.as_str()), ("text", post.title.as_str())],
    )?;
    let facebook = Url::parse_with_params(
        "https://www.facebook.com/sharer/sharer.php",
        &[("u", permalink.as_str())],
    )?;
    let linkedin = Url::parse_with_params(
        "https://www.linkedin.com/sharing/share-offsite/",
        &[("url", permalink.as_str())],
    )?;

    Ok(ShareLinks {
        permalink,
        twitter: twitter.to_string(),
        facebook: facebook.to_string(),
        linkedin: linkedin.to_string(),
    })
}
