use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::clock::SystemClock,
    datasources::{Clock, FxRateDatasource, IdentityDatasource, RowSetDatasource},
    domain::usecases::reconcile_usecase::{ReconcileUsecase as _, ReconcileUsecaseImpl},
    entities::DashboardSnapshot,
    logic::CurrencyConverter,
    presentation::transaction_fmt::{account_options, display_row, transaction_displays},
};

/// Entry point wiring the reconciliation pipeline over host-provided
/// collaborators: a row-set backend, an identity provider, and an FX rate
/// source.
pub struct DashboardReconciler {
    reconcile_usecase: ReconcileUsecaseImpl,
}

impl DashboardReconciler {
    pub fn new(
        identity: Arc<dyn IdentityDatasource>,
        rows: Arc<dyn RowSetDatasource>,
        fx: Arc<dyn FxRateDatasource>,
    ) -> Self {
        Self::with_options(
            identity,
            rows,
            fx,
            CurrencyConverter::DEFAULT_REPORTING_CURRENCY,
            Arc::new(SystemClock),
        )
    }

    pub fn with_options(
        identity: Arc<dyn IdentityDatasource>,
        rows: Arc<dyn RowSetDatasource>,
        fx: Arc<dyn FxRateDatasource>,
        reporting_currency: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reconcile_usecase: ReconcileUsecaseImpl::new(
                identity,
                rows,
                fx,
                clock,
                reporting_currency,
            ),
        }
    }

    /// Runs one reconciliation pass and formats the result for display.
    pub async fn reconcile(&self) -> Result<DashboardSnapshot, ServerError> {
        let records = self.reconcile_usecase.reconcile().await?;

        let credit_card_names: Vec<String> = records
            .net_worth
            .credit_cards
            .iter()
            .map(|account| account.name.clone())
            .collect();
        let transactions = transaction_displays(&records.transactions, &credit_card_names);
        let linked_transactions = records
            .linked_transactions
            .iter()
            .map(|(item_id, txs)| {
                (
                    item_id.clone(),
                    txs.iter()
                        .map(|tx| display_row(tx, &credit_card_names))
                        .collect(),
                )
            })
            .collect();
        let account_options = account_options(&records.transactions);

        Ok(DashboardSnapshot {
            window: records.window,
            categories: records.categories,
            budget_items_by_category: records.budget_items_by_category,
            net_worth: records.net_worth,
            goals: records.goals,
            transactions,
            linked_transactions,
            account_options,
        })
    }
}
