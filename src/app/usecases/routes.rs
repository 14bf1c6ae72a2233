use crate::domain::model::{BaselineAck, ComparisonRow, Route, RouteFilters};
use crate::domain::ports::RouteRepository;
use crate::utils::error::Result;

/// Fetches every route, then keeps the ones matching all set filters.
pub async fn fetch_routes<R>(repo: &R, filters: Option<&RouteFilters>) -> Result<Vec<Route>>
where
    R: RouteRepository + ?Sized,
{
    let routes = repo.fetch_all().await?;

    match filters {
        Some(filters) if !filters.is_empty() => Ok(routes
            .into_iter()
            .filter(|route| filters.matches(route))
            .collect()),
        _ => Ok(routes),
    }
}

pub async fn set_baseline<R>(repo: &R, route_id: &str) -> Result<BaselineAck>
where
    R: RouteRepository + ?Sized,
{
    repo.set_baseline(route_id).await
}

pub async fn fetch_comparison<R>(repo: &R) -> Result<Vec<ComparisonRow>>
where
    R: RouteRepository + ?Sized,
{
    repo.fetch_comparison().await
}
