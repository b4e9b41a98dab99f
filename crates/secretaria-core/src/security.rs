use crate::domain::UserId;

/// Only the configured owner may issue commands; unknown senders never are.
pub fn is_authorized(user_id: Option<UserId>, owner: UserId) -> bool {
    user_id == Some(owner)
}
