mod access;
mod resolve;

use jobzee::{client::store::session::SessionState, model::user::UserDto};
use jobzee_test_utils::prelude::*;

/// Session after the startup request resolved with a user of the given wire role
pub fn resolved_session(role: &str) -> Result<SessionState, TestError> {
    let user: UserDto = serde_json::from_value(user::user_json(role))?;

    let mut session = SessionState::default();
    session.resolve::<String>(Ok(user));

    Ok(session)
}
