use std::collections::HashMap;
use uuid::Uuid;
use crate::modules::{
    comment::{
        dto::{CommentResponse, CommentThreadResponse},
        model::CommentWithAuthor,
    },
    user::dto::PublicAuthor,
};

/// Assembles a flat, approved comment set into the two-level tree the post
/// page renders. `top_level` is expected newest-first and `replies`
/// oldest-first; both orderings are kept as-is.
///
/// A reply whose parent is not in `top_level` (the parent was rejected after
/// the reply was approved) is dropped here and never rendered.
pub fn build_thread(
    top_level: Vec<CommentWithAuthor>,
    replies: Vec<CommentWithAuthor>,
) -> Vec<CommentThreadResponse> {
    let mut replies_by_parent: HashMap<Uuid, Vec<CommentResponse>> = HashMap::new();
    for reply in replies {
        if let Some(parent_id) = reply.parent_comment_id {
            replies_by_parent
                .entry(parent_id)
                .or_default()
                .push(CommentResponse::from(reply));
        }
    }
    top_level
        .into_iter()
        .map(|comment| {
            let replies = replies_by_parent.remove(&comment.id).unwrap_or_default();
            CommentThreadResponse {
                id: comment.id,
                content: comment.content,
                author: PublicAuthor::new(
                    comment.author_id,
                    comment.author_name,
                    comment.author_avatar,
                ),
                created_at: comment.created_at,
                replies,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn comment(parent: Option<Uuid>, minutes_ago: i64) -> CommentWithAuthor {
        CommentWithAuthor {
            id: Uuid::new_v4(),
            parent_comment_id: parent,
            content: "content".to_string(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            author_id: Uuid::new_v4(),
            author_name: "Reader".to_string(),
            author_avatar: None,
        }
    }

    #[test]
    fn replies_are_attached_to_their_parent_in_order() {
        let parent = comment(None, 30);
        let first_reply = comment(Some(parent.id), 20);
        let second_reply = comment(Some(parent.id), 10);
        let thread = build_thread(
            vec![parent.clone()],
            vec![first_reply.clone(), second_reply.clone()],
        );
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].replies.len(), 2);
        assert_eq!(thread[0].replies[0].id, first_reply.id);
        assert_eq!(thread[0].replies[1].id, second_reply.id);
        assert!(thread[0].replies[0].created_at <= thread[0].replies[1].created_at);
    }

    #[test]
    fn top_level_order_is_preserved_newest_first() {
        let newest = comment(None, 1);
        let older = comment(None, 60);
        let thread = build_thread(vec![newest.clone(), older.clone()], vec![]);
        assert_eq!(thread[0].id, newest.id);
        assert_eq!(thread[1].id, older.id);
        assert!(thread[0].created_at >= thread[1].created_at);
    }

    #[test]
    fn comment_without_replies_gets_an_empty_list() {
        let parent = comment(None, 5);
        let thread = build_thread(vec![parent], vec![]);
        assert!(thread[0].replies.is_empty());
    }

    #[test]
    fn orphaned_reply_is_dropped() {
        let surviving_parent = comment(None, 30);
        let deleted_parent_id = Uuid::new_v4();
        let kept_reply = comment(Some(surviving_parent.id), 10);
        let orphaned_reply = comment(Some(deleted_parent_id), 10);
        let thread = build_thread(
            vec![surviving_parent.clone()],
            vec![kept_reply.clone(), orphaned_reply.clone()],
        );
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].replies.len(), 1);
        assert_eq!(thread[0].replies[0].id, kept_reply.id);
        assert!(thread.iter().all(|node| {
            node.replies.iter().all(|reply| reply.id != orphaned_reply.id)
        }));
    }
}
