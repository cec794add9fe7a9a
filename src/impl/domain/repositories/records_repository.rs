use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{
    Account, BudgetItem, Goal, GoalContribution, MonthWindow, Payment, Transaction,
};

/// Snapshot row sets for one reconciliation pass, parsed into entities at the
/// data boundary. Each fetch is independent; the usecase decides which ones
/// are primary and which degrade on failure.
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    async fn budget_items(&self, user_id: &str) -> Result<Vec<BudgetItem>, ServerError>;

    async fn payments(
        &self,
        user_id: &str,
        window: MonthWindow,
    ) -> Result<Vec<Payment>, ServerError>;

    async fn transactions(
        &self,
        user_id: &str,
        window: MonthWindow,
    ) -> Result<Vec<Transaction>, ServerError>;

    async fn accounts(&self) -> Result<Vec<Account>, ServerError>;

    async fn goals(&self, user_id: &str) -> Result<Vec<Goal>, ServerError>;

    async fn goal_contributions(&self, user_id: &str)
        -> Result<Vec<GoalContribution>, ServerError>;

    /// Replaces placeholder labels on FK-derived category identities with
    /// human-readable names from the category lookup tables.
    async fn hydrate_category_labels(&self, items: &mut [BudgetItem]) -> Result<(), ServerError>;
}
