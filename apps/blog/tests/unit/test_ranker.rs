use blog::application::related_posts::use_case::{DEFAULT_RELATED_LIMIT, SimilarityRanker};
use blog::domain::post::entity::Post;
use chrono::{DateTime, Duration, TimeZone, Utc};

fn post(id: &str, category: &str, posted_at: DateTime<Utc>) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Post {}", id),
        author: "Staff".to_string(),
        date: posted_at.format("%B %-d, %Y").to_string(),
        date_iso: posted_at.to_rfc3339(),
        category: category.to_string(),
        excerpt: String::new(),
        thumbnail: String::new(),
        hero_image: String::new(),
        content: vec![],
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap()
}

fn ids(posts: &[&Post]) -> Vec<String> {
    posts.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn category_and_recency_combine() {
    let reference = post("ref", "X", now() - Duration::days(400));
    let candidates = vec![
        post("A", "X", now()),
        post("B", "Y", now()),
        post("C", "X", now() - Duration::days(30)),
    ];
    let ranker = SimilarityRanker::new();

    assert_eq!(ranker.score(&reference, &candidates[0], now()), 15.0);
    assert_eq!(ranker.score(&reference, &candidates[1], now()), 5.0);
    assert_eq!(ranker.score(&reference, &candidates[2], now()), 14.0);

    let ranked = ranker.rank_at(&reference, &candidates, DEFAULT_RELATED_LIMIT, now());
    assert_eq!(ids(&ranked), vec!["A", "C", "B"]);
}

#[test]
fn reference_post_is_excluded() {
    let reference = post("A", "X", now());
    let candidates = vec![reference.clone(), post("B", "X", now())];
    let ranked = SimilarityRanker::new().rank_at(&reference, &candidates, 3, now());
    assert_eq!(ids(&ranked), vec!["B"]);
}

#[test]
fn fewer_candidates_than_limit_are_not_padded() {
    let reference = post("ref", "X", now());
    let candidates = vec![post("A", "Y", now()), post("B", "X", now())];
    let ranked = SimilarityRanker::new().rank_at(&reference, &candidates, 5, now());
    assert_eq!(ranked.len(), 2);
}

#[test]
fn limit_truncates() {
    let reference = post("ref", "X", now());
    let candidates: Vec<Post> = (0..6)
        .map(|i| post(&format!("p{}", i), "X", now() - Duration::days(i * 10)))
        .collect();
    let ranked = SimilarityRanker::new().rank_at(&reference, &candidates, 3, now());
    assert_eq!(ids(&ranked), vec!["p0", "p1", "p2"]);
}

#[test]
fn no_candidates_gives_empty_result() {
    let reference = post("ref", "X", now());
    assert!(
        SimilarityRanker::new()
            .rank_at(&reference, &[reference.clone()], 3, now())
            .is_empty()
    );
    assert!(SimilarityRanker::new().rank(&reference, &[], 3).is_empty());
}
