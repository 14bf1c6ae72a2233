use crate::app::usecases::routes::{fetch_comparison, fetch_routes, set_baseline};
use crate::domain::model::{ComparisonRow, Route, RouteFilters};
use crate::domain::ports::RouteRepository;
use std::collections::BTreeSet;

/// View state for the routes and compare tabs.
pub struct RoutesSession<R: RouteRepository> {
    repo: R,
    routes: Vec<Route>,
    comparisons: Vec<ComparisonRow>,
    filters: RouteFilters,
    loading: bool,
    error: Option<String>,
}

impl<R: RouteRepository> RoutesSession<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            routes: Vec::new(),
            comparisons: Vec::new(),
            filters: RouteFilters::default(),
            loading: false,
            error: None,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn comparisons(&self) -> &[ComparisonRow] {
        &self.comparisons
    }

    pub fn filters(&self) -> &RouteFilters {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Takes effect on the next `load_routes`.
    pub fn set_filters(&mut self, filters: RouteFilters) {
        self.filters = filters;
    }

    pub async fn load_routes(&mut self) {
        self.loading = true;
        self.error = None;

        match fetch_routes(&self.repo, Some(&self.filters)).await {
            Ok(routes) => {
                tracing::debug!("Loaded {} routes", routes.len());
                self.routes = routes;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch routes: {}", e);
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
    }

    /// Marks `route_id` as baseline, then reloads the route list.
    pub async fn set_baseline(&mut self, route_id: &str) {
        self.error = None;

        match set_baseline(&self.repo, route_id).await {
            Ok(ack) => {
                tracing::info!("{}", ack.message);
                self.load_routes().await;
            }
            Err(e) => {
                tracing::warn!("Failed to set baseline {}: {}", route_id, e);
                self.error = Some(e.user_message());
            }
        }
    }

    pub async fn load_comparisons(&mut self) {
        self.loading = true;
        self.error = None;

        match fetch_comparison(&self.repo).await {
            Ok(rows) => self.comparisons = rows,
            Err(e) => {
                tracing::warn!("Failed to fetch comparisons: {}", e);
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
    }

    /// Distinct vessel types among loaded routes, for filter selectors.
    pub fn vessel_types(&self) -> BTreeSet<&str> {
        self.routes.iter().map(|r| r.vessel_type.as_str()).collect()
    }

    pub fn fuel_types(&self) -> BTreeSet<&str> {
        self.routes.iter().map(|r| r.fuel_type.as_str()).collect()
    }

    pub fn years(&self) -> BTreeSet<i32> {
        self.routes.iter().map(|r| r.year).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::usecases::routes::tests::{fixture, MockRouteRepo};
    use crate::domain::model::BaselineAck;
    use crate::utils::error::{ConsoleError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Serves the fixture until `down` is flipped.
    #[derive(Clone, Default)]
    struct FlakyRouteRepo {
        inner: MockRouteRepo,
        down: Arc<AtomicBool>,
    }

    #[async_trait]
    impl RouteRepository for FlakyRouteRepo {
        async fn fetch_all(&self) -> Result<Vec<Route>> {
            if self.down.load(Ordering::SeqCst) {
                return Err(ConsoleError::api(503, "Backend unavailable"));
            }
            self.inner.fetch_all().await
        }

        async fn set_baseline(&self, route_id: &str) -> Result<BaselineAck> {
            if self.down.load(Ordering::SeqCst) {
                return Err(ConsoleError::api(404, "Route not found"));
            }
            self.inner.set_baseline(route_id).await
        }

        async fn fetch_comparison(&self) -> Result<Vec<ComparisonRow>> {
            if self.down.load(Ordering::SeqCst) {
                return Err(ConsoleError::api(400, "No baseline set"));
            }
            self.inner.fetch_comparison().await
        }
    }

    fn flaky() -> FlakyRouteRepo {
        FlakyRouteRepo {
            inner: MockRouteRepo {
                routes: fixture(),
                ..Default::default()
            },
            down: Arc::new(AtomicBool::new(false)),
        }
    }

    #[tokio::test]
    async fn load_applies_current_filters() {
        let mut session = RoutesSession::new(flaky());
        session.set_filters(RouteFilters {
            fuel_type: Some("HFO".to_string()),
            ..Default::default()
        });

        session.load_routes().await;

        assert!(!session.is_loading());
        assert!(session.error().is_none());
        assert_eq!(session.routes().len(), 2);
        assert_eq!(session.years().into_iter().collect::<Vec<_>>(), [2024, 2025]);
        assert!(session.vessel_types().contains("RoRo"));
        assert!(session.fuel_types().contains("HFO"));
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_routes() {
        let repo = flaky();
        let mut session = RoutesSession::new(repo.clone());
        session.load_routes().await;
        assert_eq!(session.routes().len(), 3);

        repo.down.store(true, Ordering::SeqCst);
        session.load_routes().await;

        assert_eq!(session.routes().len(), 3);
        assert_eq!(session.error(), Some("Backend unavailable"));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn set_baseline_reloads_routes() {
        let repo = flaky();
        let mut session = RoutesSession::new(repo.clone());

        session.set_baseline("R002").await;

        assert!(session.error().is_none());
        assert_eq!(
            *repo.inner.baseline_calls.lock().unwrap(),
            vec!["R002".to_string()]
        );
        assert_eq!(*repo.inner.fetch_calls.lock().unwrap(), 1);
        assert_eq!(session.routes().len(), 3);
    }

    #[tokio::test]
    async fn set_baseline_failure_skips_reload() {
        let repo = flaky();
        repo.down.store(true, Ordering::SeqCst);
        let mut session = RoutesSession::new(repo.clone());

        session.set_baseline("R999").await;

        assert_eq!(session.error(), Some("Route not found"));
        assert_eq!(*repo.inner.fetch_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn comparisons_load_and_error_clears_on_success() {
        let repo = flaky();
        let mut session = RoutesSession::new(repo.clone());

        repo.down.store(true, Ordering::SeqCst);
        session.load_comparisons().await;
        assert_eq!(session.error(), Some("No baseline set"));
        assert!(session.comparisons().is_empty());

        repo.down.store(false, Ordering::SeqCst);
        session.load_comparisons().await;
        assert!(session.error().is_none());
        assert_eq!(session.comparisons().len(), 1);
    }
}
