pub mod export;
pub mod tables;

pub use export::{routes_to_csv, routes_to_json, OutputFormat};
pub use tables::{
    render_banking, render_comparisons, render_pool, render_pool_candidates, render_routes,
};
