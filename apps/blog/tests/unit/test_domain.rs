use blog::domain::post::entity::{BlockKind, Post};
use blog::domain::shared::errors::BlogError;
use blog::domain::social::{comment::CommentDraft, like::LikeRecord};

#[test]
fn like_toggle_is_its_own_inverse() {
    let start = LikeRecord {
        post_id: "p1".to_string(),
        count: 7,
        liked: false,
    };
    assert_eq!(start.toggled().toggled(), start);
}

#[test]
fn author_of_one_character_is_rejected_even_with_padding() {
    let err = CommentDraft::parse("   J   ", "This is long enough").unwrap_err();
    match err {
        BlogError::Validation(fields) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].field, "author");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn body_of_nine_characters_is_rejected_even_with_padding() {
    let err = CommentDraft::parse("Jo", "  123456789  ").unwrap_err();
    assert!(matches!(err, BlogError::Validation(ref f) if f[0].field == "body"));
}

#[test]
fn seeded_posts_parse() {
    let raw = include_str!("../../data/posts.json");
    let posts: Vec<Post> = serde_json::from_str(raw).expect("seed posts must parse");
    assert!(posts.len() >= 4);
    assert!(
        posts[0]
            .content
            .iter()
            .any(|block| block.kind == BlockKind::Blockquote && block.cite.is_some())
    );
}
