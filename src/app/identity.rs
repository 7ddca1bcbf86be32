//! Current-identity accessor.
//!
//! The credential and session store belongs to the wider application; the
//! messaging client only needs the active user's stable id and display
//! metadata, resolved here from configuration.

use crate::app::config::Config;
use crate::shared::error::ClientError;
use crate::shared::user::UserProfile;

/// Resolve the active user.
///
/// Returns [`ClientError::NoIdentity`] when no user id is configured.
pub fn current_user(config: &Config) -> Result<UserProfile, ClientError> {
    let id = config.user_id().ok_or(ClientError::NoIdentity)?;
    let display_name = config.display_name().unwrap_or(id);
    Ok(UserProfile::new(id, display_name))
}
