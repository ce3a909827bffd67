use std::sync::Arc;

use crate::auth::session::{LoginStates, SessionStore};
use crate::auth::IdentityProvider;
use crate::database::connection::DbHandle;

/// Shared per-process state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DbHandle,
    pub sessions: SessionStore,
    pub login_states: LoginStates,
    pub identity: Arc<dyn IdentityProvider>,
}
