use async_trait::async_trait;
use fractic_server_error::ServerError;

/// Auth session as reported by the identity collaborator. Reconciliation is
/// gated on `ready`; a ready session without a user id is treated as
/// unauthenticated.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub ready: bool,
    pub user_id: Option<String>,
}

#[async_trait]
pub trait IdentityDatasource: Send + Sync {
    async fn current_session(&self) -> Result<AuthSession, ServerError>;
}
