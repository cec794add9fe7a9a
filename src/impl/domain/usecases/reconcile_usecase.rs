use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::warn;

use crate::{
    data::{
        datasources::{
            clock::Clock, fx_rate_datasource::FxRateDatasource,
            identity_datasource::IdentityDatasource, row_set_datasource::RowSetDatasource,
        },
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::{
        entities::budget::progress_pct,
        logic::{
            account_classifier::classify_accounts, currency_converter::CurrencyConverter,
            goal_progress::goal_displays, payment_aggregator::aggregate_payments,
            transaction_linker::link_transactions,
        },
        repositories::records_repository::RecordsRepository,
    },
    entities::{BudgetDisplay, BudgetItem, CategoryAggregate, MonthWindow, ReconciledRecords},
    errors::{NotAuthenticated, SupersededReconciliation},
};

#[async_trait]
pub trait ReconcileUsecase: Send + Sync {
    /// One full reconciliation pass for the current month: fetch, aggregate,
    /// classify. Fails with [`SupersededReconciliation`] when a newer pass
    /// started on the same instance before this one finished assembling.
    async fn reconcile(&self) -> Result<ReconciledRecords, ServerError>;
}

pub(crate) struct ReconcileUsecaseImpl<
    R = RecordsRepositoryImpl, // Default.
> where
    R: RecordsRepository,
{
    identity: Arc<dyn IdentityDatasource>,
    clock: Arc<dyn Clock>,
    repository: R,
    converter: CurrencyConverter,
    generation: AtomicU64,
}

#[async_trait]
impl<R> ReconcileUsecase for ReconcileUsecaseImpl<R>
where
    R: RecordsRepository,
{
    async fn reconcile(&self) -> Result<ReconciledRecords, ServerError> {
        let session = self.identity.current_session().await?;
        let user_id = match (session.ready, session.user_id) {
            (true, Some(user_id)) => user_id,
            _ => return Err(NotAuthenticated::new()),
        };

        let window = MonthWindow::containing(self.clock.now())?;
        let token = self.generation.fetch_add(1, AtomicOrdering::SeqCst) + 1;

        let (items, payments, transactions, accounts, goals, contributions) = futures::join!(
            self.repository.budget_items(&user_id),
            self.repository.payments(&user_id, window),
            self.repository.transactions(&user_id, window),
            self.repository.accounts(),
            self.repository.goals(&user_id),
            self.repository.goal_contributions(&user_id),
        );

        // Budget items and transactions are primary; without them the
        // snapshot is meaningless. Everything else degrades to an empty set.
        let mut items = items?;
        let transactions = transactions?;
        let payments = or_empty(payments, "payments");
        let accounts = or_empty(accounts, "accounts");
        let goals = or_empty(goals, "goals");
        let contributions = or_empty(contributions, "goal contributions");

        if let Err(e) = self.repository.hydrate_category_labels(&mut items).await {
            warn!(error = %e, "category label hydration failed, keeping placeholder labels");
        }

        let item_to_category: HashMap<String, String> = items
            .iter()
            .map(|item| (item.id.clone(), item.category.id.clone()))
            .collect();
        let totals =
            aggregate_payments(&payments, &window, &item_to_category, &self.converter).await;

        let categories = category_aggregates(&items, &totals.paid_by_category);
        let budget_items_by_category = items_by_category(&items, &totals.paid_by_item);
        let net_worth = classify_accounts(&accounts, &transactions, &self.converter).await;
        let goals = goal_displays(&goals, &contributions);
        let linked_transactions = link_transactions(&payments, &transactions)
            .into_iter()
            .map(|(item_id, txs)| (item_id, txs.into_iter().cloned().collect()))
            .collect();

        // A later pass may have started while this one was fetching; its
        // result supersedes ours.
        if self.generation.load(AtomicOrdering::SeqCst) != token {
            return Err(SupersededReconciliation::new());
        }

        Ok(ReconciledRecords {
            window,
            categories,
            budget_items_by_category,
            net_worth,
            goals,
            transactions,
            linked_transactions,
        })
    }
}

impl ReconcileUsecaseImpl {
    pub(crate) fn new(
        identity: Arc<dyn IdentityDatasource>,
        rows: Arc<dyn RowSetDatasource>,
        fx: Arc<dyn FxRateDatasource>,
        clock: Arc<dyn Clock>,
        reporting_currency: impl Into<String>,
    ) -> Self {
        ReconcileUsecaseImpl {
            identity,
            repository: RecordsRepositoryImpl::new(rows),
            converter: CurrencyConverter::new(reporting_currency, fx, clock.clone()),
            clock,
            generation: AtomicU64::new(0),
        }
    }
}

fn or_empty<T>(result: Result<Vec<T>, ServerError>, records: &'static str) -> Vec<T> {
    match result {
        Ok(v) => v,
        Err(e) => {
            warn!(records, error = %e, "secondary fetch failed, continuing with empty set");
            Vec::new()
        }
    }
}

/// Rolls items up per category: planned sums, earliest due date, paid total
/// from the aggregator, sorted by progress desc then planned desc.
fn category_aggregates(
    items: &[BudgetItem],
    paid_by_category: &HashMap<String, f64>,
) -> Vec<CategoryAggregate> {
    let mut by_category: HashMap<String, CategoryAggregate> = HashMap::new();
    for item in items {
        let entry = by_category
            .entry(item.category.id.clone())
            .or_insert_with(|| CategoryAggregate {
                category_id: item.category.id.clone(),
                label: item.category.label.clone(),
                planned: 0.0,
                paid: 0.0,
                progress_pct: 0.0,
                due_date: None,
            });
        entry.planned += item.planned_amount;
        entry.due_date = match (entry.due_date, item.due_date) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    let mut categories: Vec<CategoryAggregate> = by_category
        .into_values()
        .map(|mut aggregate| {
            aggregate.paid = paid_by_category
                .get(&aggregate.category_id)
                .copied()
                .unwrap_or(0.0);
            aggregate.progress_pct = progress_pct(aggregate.planned, aggregate.paid);
            aggregate
        })
        .collect();
    categories.sort_by(|a, b| {
        b.progress_pct
            .partial_cmp(&a.progress_pct)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.planned
                    .partial_cmp(&a.planned)
                    .unwrap_or(Ordering::Equal)
            })
    });
    categories
}

fn items_by_category(
    items: &[BudgetItem],
    paid_by_item: &HashMap<String, f64>,
) -> HashMap<String, Vec<BudgetDisplay>> {
    let mut by_category: HashMap<String, Vec<BudgetDisplay>> = HashMap::new();
    for item in items {
        let paid = paid_by_item.get(&item.id).copied().unwrap_or(0.0);
        by_category
            .entry(item.category.id.clone())
            .or_default()
            .push(BudgetDisplay {
                id: item.id.clone(),
                name: item.name.clone(),
                category_id: item.category.id.clone(),
                planned: item.planned_amount,
                paid,
                progress_pct: progress_pct(item.planned_amount, paid),
                due_date: item.due_date,
            });
    }
    for displays in by_category.values_mut() {
        displays.sort_by(|a, b| b.planned.partial_cmp(&a.planned).unwrap_or(Ordering::Equal));
    }
    by_category
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::{AuthSession, FixedClock, StaticFxRate};
    use crate::entities::{
        Account, CategoryIdentity, Goal, GoalContribution, Payment, Transaction,
    };
    use chrono::{TimeZone, Utc};
    use tokio::sync::Notify;

    struct FixedIdentity(AuthSession);

    #[async_trait]
    impl IdentityDatasource for FixedIdentity {
        async fn current_session(&self) -> Result<AuthSession, ServerError> {
            Ok(self.0.clone())
        }
    }

    /// Repository fake whose first budget-item fetch parks until released,
    /// so tests can interleave two passes deterministically.
    #[derive(Default)]
    struct StallingRepository {
        stall_first: Option<Arc<Notify>>,
        stalled: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl RecordsRepository for StallingRepository {
        async fn budget_items(&self, _user_id: &str) -> Result<Vec<BudgetItem>, ServerError> {
            if let Some(release) = &self.stall_first {
                if !self.stalled.swap(true, AtomicOrdering::SeqCst) {
                    release.notified().await;
                }
            }
            Ok(vec![BudgetItem {
                id: "i1".to_string(),
                name: "Groceries".to_string(),
                category: CategoryIdentity {
                    id: "food".to_string(),
                    label: "Food".to_string(),
                    placeholder_label: false,
                },
                planned_amount: 150.0,
                due_date: None,
            }])
        }

        async fn payments(
            &self,
            _user_id: &str,
            _window: MonthWindow,
        ) -> Result<Vec<Payment>, ServerError> {
            Ok(vec![Payment {
                id: "p1".to_string(),
                budget_item_id: Some("i1".to_string()),
                amount: 110.0,
                currency: None,
                date: Some(Utc.with_ymd_and_hms(2026, 8, 10, 0, 0, 0).unwrap()),
                transaction_ref: None,
            }])
        }

        async fn transactions(
            &self,
            _user_id: &str,
            _window: MonthWindow,
        ) -> Result<Vec<Transaction>, ServerError> {
            Ok(Vec::new())
        }

        async fn accounts(&self) -> Result<Vec<Account>, ServerError> {
            Ok(Vec::new())
        }

        async fn goals(&self, _user_id: &str) -> Result<Vec<Goal>, ServerError> {
            Ok(Vec::new())
        }

        async fn goal_contributions(
            &self,
            _user_id: &str,
        ) -> Result<Vec<GoalContribution>, ServerError> {
            Ok(Vec::new())
        }

        async fn hydrate_category_labels(
            &self,
            _items: &mut [BudgetItem],
        ) -> Result<(), ServerError> {
            Ok(())
        }
    }

    fn usecase(
        session: AuthSession,
        repository: StallingRepository,
    ) -> ReconcileUsecaseImpl<StallingRepository> {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap(),
        ));
        ReconcileUsecaseImpl {
            identity: Arc::new(FixedIdentity(session)),
            converter: CurrencyConverter::new("COP", Arc::new(StaticFxRate(4000.0)), clock.clone()),
            clock,
            repository,
            generation: AtomicU64::new(0),
        }
    }

    fn signed_in() -> AuthSession {
        AuthSession {
            ready: true,
            user_id: Some("u1".to_string()),
        }
    }

    #[tokio::test]
    async fn rejects_unauthenticated_sessions() {
        let pending = usecase(
            AuthSession {
                ready: false,
                user_id: Some("u1".to_string()),
            },
            StallingRepository::default(),
        );
        assert!(pending.reconcile().await.is_err());

        let anonymous = usecase(
            AuthSession {
                ready: true,
                user_id: None,
            },
            StallingRepository::default(),
        );
        assert!(anonymous.reconcile().await.is_err());
    }

    #[tokio::test]
    async fn aggregates_category_progress() {
        let usecase = usecase(signed_in(), StallingRepository::default());
        let records = usecase.reconcile().await.unwrap();
        let food = &records.categories[0];
        assert_eq!(food.category_id, "food");
        assert_eq!(food.planned, 150.0);
        assert_eq!(food.paid, 110.0);
        assert!((food.progress_pct - 73.33).abs() < 0.01);
        assert_eq!(records.budget_items_by_category["food"][0].paid, 110.0);
    }

    #[tokio::test]
    async fn stale_pass_is_superseded_by_a_newer_one() {
        let release = Arc::new(Notify::new());
        let usecase = Arc::new(usecase(
            signed_in(),
            StallingRepository {
                stall_first: Some(release.clone()),
                stalled: std::sync::atomic::AtomicBool::new(false),
            },
        ));

        let stalled = tokio::spawn({
            let usecase = usecase.clone();
            async move { usecase.reconcile().await }
        });
        // Let the stalled pass claim its generation before starting a new one.
        while !usecase.repository.stalled.load(AtomicOrdering::SeqCst) {
            tokio::task::yield_now().await;
        }

        assert!(usecase.reconcile().await.is_ok());
        release.notify_one();
        assert!(stalled.await.unwrap().is_err());
    }

    #[tokio::test]
    async fn category_sort_is_progress_then_planned() {
        let items = vec![
            BudgetItem {
                id: "a".to_string(),
                name: "A".to_string(),
                category: CategoryIdentity {
                    id: "low".to_string(),
                    label: "Low".to_string(),
                    placeholder_label: false,
                },
                planned_amount: 500.0,
                due_date: None,
            },
            BudgetItem {
                id: "b".to_string(),
                name: "B".to_string(),
                category: CategoryIdentity {
                    id: "high".to_string(),
                    label: "High".to_string(),
                    placeholder_label: false,
                },
                planned_amount: 100.0,
                due_date: None,
            },
        ];
        let paid: HashMap<String, f64> =
            [("low".to_string(), 50.0), ("high".to_string(), 90.0)].into();
        let categories = category_aggregates(&items, &paid);
        assert_eq!(categories[0].category_id, "high");
        assert_eq!(categories[1].category_id, "low");
    }

    #[tokio::test]
    async fn earliest_due_date_wins_per_category() {
        let early = Utc.with_ymd_and_hms(2026, 8, 5, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 8, 25, 0, 0, 0).unwrap();
        let item = |id: &str, due| BudgetItem {
            id: id.to_string(),
            name: id.to_string(),
            category: CategoryIdentity {
                id: "food".to_string(),
                label: "Food".to_string(),
                placeholder_label: false,
            },
            planned_amount: 10.0,
            due_date: due,
        };
        let categories = category_aggregates(
            &[item("a", Some(late)), item("b", Some(early)), item("c", None)],
            &HashMap::new(),
        );
        assert_eq!(categories[0].due_date, Some(early));
    }
}
