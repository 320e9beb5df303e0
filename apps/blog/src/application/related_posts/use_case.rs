use crate::domain::post::entity::{Post, ScoredCandidate};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

pub const DEFAULT_RELATED_LIMIT: usize = 3;

const CATEGORY_MATCH_SCORE: f64 = 10.0;
const RECENCY_MAX_BONUS: f64 = 5.0;
/// The recency bonus drops by one point per this many days.
const RECENCY_DECAY_DAYS: f64 = 30.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Picks "you may also like" posts: same category first, newer posts ahead
/// of older ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimilarityRanker;

impl SimilarityRanker {
    pub fn new() -> Self {
        Self
    }

    pub fn rank<'a>(&self, reference: &Post, candidates: &'a [Post], limit: usize) -> Vec<&'a Post> {
        self.rank_at(reference, candidates, limit, Utc::now())
    }

    /// Same as [`Self::rank`] with an explicit clock. Posts with equal
    /// scores keep their input order.
    pub fn rank_at<'a>(
        &self,
        reference: &Post,
        candidates: &'a [Post],
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<&'a Post> {
        let mut scored: Vec<ScoredCandidate<'a>> = candidates
            .iter()
            .filter(|candidate| candidate.id != reference.id)
            .map(|post| ScoredCandidate {
                post,
                score: self.score(reference, post, now),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.into_iter().take(limit).map(|c| c.post).collect()
    }

    pub fn score(&self, reference: &Post, candidate: &Post, now: DateTime<Utc>) -> f64 {
        let category = if candidate.category == reference.category {
            CATEGORY_MATCH_SCORE
        } else {
            0.0
        };
        category + recency_bonus(candidate, now)
    }
}

/// Future-dated posts get more than the usual maximum; only the lower end
/// is clamped.
fn recency_bonus(post: &Post, now: DateTime<Utc>) -> f64 {
    let Some(posted_at) = parse_posted_at(&post.date_iso) else {
        debug!(
            "Unparseable dateISO={} on post_id={}, no recency bonus",
            post.date_iso, post.id
        );
        return 0.0;
    };
    let days = (now - posted_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
    (RECENCY_MAX_BONUS - days / RECENCY_DECAY_DAYS).max(0.0)
}

fn parse_posted_at(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
