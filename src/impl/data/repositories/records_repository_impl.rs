use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::{
        datasources::row_set_datasource::{RowFilter, RowQuery, RowSetDatasource},
        models::{
            account_model, budget_item_model, category_model, goal_model, payment_model,
            row_model::RowModel, transaction_model,
        },
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{Account, BudgetItem, Goal, GoalContribution, MonthWindow, Payment, Transaction},
    errors::{CategoryLookupFailed, FetchFailed},
};

const BUDGET_ITEMS_TABLE: &str = "budget_items";
const PAYMENTS_TABLE: &str = "budget_payments";
const TRANSACTIONS_TABLE: &str = "transactions";
const ACCOUNTS_TABLE: &str = "accounts";
const GOALS_TABLE: &str = "goals";
const CONTRIBUTIONS_TABLE: &str = "goal_contributions";

/// Lookup tables tried in order when hydrating FK-derived category labels.
/// The first table yielding any match wins.
const CATEGORY_LOOKUP_TABLES: &[&str] = &["budget_categories", "categories"];
const CATEGORY_NAME_KEYS: &[&str] = &["name", "title", "label"];

const BUDGET_ITEMS_FETCH_LIMIT: u32 = 1000;
const TRANSACTIONS_FETCH_LIMIT: u32 = 2000;
const PAYMENTS_FETCH_LIMIT: u32 = 5000;

pub(crate) struct RecordsRepositoryImpl {
    datasource: Arc<dyn RowSetDatasource>,
}

impl RecordsRepositoryImpl {
    pub(crate) fn new(datasource: Arc<dyn RowSetDatasource>) -> Self {
        Self { datasource }
    }

    async fn fetch(&self, query: RowQuery) -> Result<Vec<RowModel>, ServerError> {
        let table = query.table;
        self.datasource
            .fetch(query)
            .await
            .map_err(|e| FetchFailed::with_debug(table, &e))
    }

    fn user_filter(user_id: &str) -> RowFilter {
        RowFilter::Eq("user_id", Value::from(user_id))
    }

    /// Label map for the given raw category ids, from the first lookup table
    /// that yields any match. A failed lookup table is logged and skipped.
    async fn category_labels(&self, raw_ids: &HashSet<String>) -> HashMap<String, String> {
        let keys: Vec<Value> = raw_ids.iter().map(|id| category_model::lookup_key(id)).collect();
        for table in CATEGORY_LOOKUP_TABLES {
            let query = RowQuery::new(table).filter(RowFilter::In("id", keys.clone()));
            let rows = match self.datasource.fetch(query).await {
                Ok(rows) => rows,
                Err(e) => {
                    tracing::warn!(
                        table,
                        "skipping category lookup table: {}",
                        CategoryLookupFailed::with_debug(table, &e)
                    );
                    continue;
                }
            };
            let labels: HashMap<String, String> = rows
                .iter()
                .filter_map(|row| {
                    let id = row.id_string("id")?;
                    let label = row.first_text(CATEGORY_NAME_KEYS)?;
                    Some((id, label.to_string()))
                })
                .collect();
            if !labels.is_empty() {
                return labels;
            }
        }
        HashMap::new()
    }
}

#[async_trait]
impl RecordsRepository for RecordsRepositoryImpl {
    async fn budget_items(&self, user_id: &str) -> Result<Vec<BudgetItem>, ServerError> {
        let rows = self
            .fetch(
                RowQuery::new(BUDGET_ITEMS_TABLE)
                    .filter(Self::user_filter(user_id))
                    .limit(BUDGET_ITEMS_FETCH_LIMIT),
            )
            .await?;
        Ok(budget_item_model::from_rows(&rows))
    }

    async fn payments(
        &self,
        user_id: &str,
        window: MonthWindow,
    ) -> Result<Vec<Payment>, ServerError> {
        let rows = self
            .fetch(
                RowQuery::new(PAYMENTS_TABLE)
                    .filter(Self::user_filter(user_id))
                    .filter(RowFilter::Gte("date", window.start.to_rfc3339()))
                    .filter(RowFilter::Lte("date", window.end.to_rfc3339()))
                    .limit(PAYMENTS_FETCH_LIMIT),
            )
            .await?;
        Ok(payment_model::from_rows(&rows))
    }

    async fn transactions(
        &self,
        user_id: &str,
        window: MonthWindow,
    ) -> Result<Vec<Transaction>, ServerError> {
        let rows = self
            .fetch(
                RowQuery::new(TRANSACTIONS_TABLE)
                    .filter(Self::user_filter(user_id))
                    .filter(RowFilter::Gte("created_at", window.start.to_rfc3339()))
                    .filter(RowFilter::Lte("created_at", window.end.to_rfc3339()))
                    .limit(TRANSACTIONS_FETCH_LIMIT),
            )
            .await?;
        Ok(transaction_model::from_rows(&rows))
    }

    async fn accounts(&self) -> Result<Vec<Account>, ServerError> {
        // Account rows are already scoped by the backend's row-level access
        // rules; no user filter is applied here.
        let rows = self.fetch(RowQuery::new(ACCOUNTS_TABLE)).await?;
        Ok(account_model::from_rows(&rows))
    }

    async fn goals(&self, user_id: &str) -> Result<Vec<Goal>, ServerError> {
        let rows = self
            .fetch(RowQuery::new(GOALS_TABLE).filter(Self::user_filter(user_id)))
            .await?;
        Ok(goal_model::goals_from_rows(&rows))
    }

    async fn goal_contributions(
        &self,
        user_id: &str,
    ) -> Result<Vec<GoalContribution>, ServerError> {
        let rows = self
            .fetch(RowQuery::new(CONTRIBUTIONS_TABLE).filter(Self::user_filter(user_id)))
            .await?;
        Ok(goal_model::contributions_from_rows(&rows))
    }

    async fn hydrate_category_labels(&self, items: &mut [BudgetItem]) -> Result<(), ServerError> {
        let pending: HashSet<String> = items
            .iter()
            .filter(|item| item.category.needs_hydration())
            .map(|item| item.category.id.clone())
            .collect();
        if pending.is_empty() {
            return Ok(());
        }

        let labels = self.category_labels(&pending).await;
        for item in items.iter_mut() {
            if !item.category.needs_hydration() {
                continue;
            }
            if let Some(label) = labels.get(&item.category.id) {
                item.category.label = label.clone();
            }
        }
        Ok(())
    }
}
