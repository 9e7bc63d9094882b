use uuid::Uuid;
use crate::{
    error::{ErrorMessage, ErrorPayload, HttpError},
    modules::comment::{dto::ModerationAction, model::CommentForModeration},
};

/// Resolves a moderation request into an action, or the error the caller
/// gets instead. Ownership is checked before the action value, so a caller
/// who does not own the post learns nothing about the action they sent.
/// The decision does not read the comment's approval state: approving an
/// already-approved comment is allowed and changes nothing.
pub fn decide_moderation(
    caller_id: Uuid,
    comment: &CommentForModeration,
    action: &str,
) -> Result<ModerationAction, HttpError<ErrorPayload>> {
    if comment.post_author_id != caller_id {
        return Err(HttpError::forbidden(ErrorMessage::ModerationNotAllowed.to_string(), None));
    }
    ModerationAction::from_str(action)
        .ok_or(HttpError::bad_request(ErrorMessage::InvalidModerationAction.to_string(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn comment_owned_by(post_author_id: Uuid) -> CommentForModeration {
        CommentForModeration {
            id: Uuid::new_v4(),
            post_author_id,
        }
    }

    #[test]
    fn non_owner_is_forbidden_regardless_of_action() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let comment = comment_owned_by(owner);
        for action in ["approve", "reject", "delete", ""] {
            let error = decide_moderation(stranger, &comment, action).unwrap_err();
            assert_eq!(error.status, StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn owner_gets_the_parsed_action() {
        let owner = Uuid::new_v4();
        let comment = comment_owned_by(owner);
        assert_eq!(decide_moderation(owner, &comment, "approve").unwrap(), ModerationAction::Approve);
        assert_eq!(decide_moderation(owner, &comment, "reject").unwrap(), ModerationAction::Reject);
    }

    #[test]
    fn approve_decision_is_ownership_based_not_state_based() {
        // A second approve of the same comment takes the same path as the
        // first; no approval-state input exists to make it fail.
        let owner = Uuid::new_v4();
        let comment = comment_owned_by(owner);
        assert_eq!(decide_moderation(owner, &comment, "approve").unwrap(), ModerationAction::Approve);
        assert_eq!(decide_moderation(owner, &comment, "approve").unwrap(), ModerationAction::Approve);
    }

    #[test]
    fn owner_with_unknown_action_gets_bad_request() {
        let owner = Uuid::new_v4();
        let comment = comment_owned_by(owner);
        let error = decide_moderation(owner, &comment, "archive").unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }
}
