use crate::domain::model::{
    AdjustedCb, ApplyBankedResponse, BankRecord, ComparisonRow, ComplianceBalance, PoolMember,
    PoolMemberResult, Route,
};
use crate::domain::rules::{
    has_banked_surplus, is_deficit, is_pool_valid, is_surplus, pool_sum, TARGET_INTENSITY_2025,
};
use crate::utils::format::{format_cb, format_ghg_intensity, format_number, format_percent_diff};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Left-aligns every column to its widest cell.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

pub fn render_routes(routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No routes match the current filters.\n".to_string();
    }

    let rows: Vec<Vec<String>> = routes
        .iter()
        .map(|r| {
            vec![
                r.route_id.clone(),
                r.vessel_type.clone(),
                r.fuel_type.clone(),
                r.year.to_string(),
                format!("{:.4}", r.ghg_intensity),
                format_number(r.fuel_consumption, 0),
                format_number(r.distance, 0),
                format_number(r.total_emissions, 0),
                if r.is_baseline { "★".to_string() } else { String::new() },
            ]
        })
        .collect();

    render_table(
        &[
            "Route",
            "Vessel",
            "Fuel",
            "Year",
            "GHG (gCO₂e/MJ)",
            "Fuel (t)",
            "Distance (km)",
            "Emissions (t)",
            "Baseline",
        ],
        &rows,
    )
}

pub fn render_comparisons(rows: &[ComparisonRow]) -> String {
    let mut out = format!(
        "Target intensity: {}\n\n",
        format_ghg_intensity(TARGET_INTENSITY_2025)
    );
    if rows.is_empty() {
        out.push_str("No comparison data. Set a baseline route first.\n");
        return out;
    }

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|c| {
            vec![
                c.baseline_route_id.clone(),
                c.comparison_route_id.clone(),
                format!("{:.4}", c.baseline_intensity),
                format!("{:.4}", c.comparison_intensity),
                format_percent_diff(c.percent_diff),
                if c.compliant { "✅" } else { "❌" }.to_string(),
            ]
        })
        .collect();

    out.push_str(&render_table(
        &["Baseline", "Route", "Baseline GHG", "Route GHG", "% Diff", "Compliant"],
        &table_rows,
    ));
    out
}

pub fn render_banking(
    ship_id: &str,
    year: i32,
    cb: Option<&ComplianceBalance>,
    record: Option<&BankRecord>,
    applied: Option<&ApplyBankedResponse>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Ship {} / {}", ship_id, year);

    match cb {
        Some(balance) => {
            let status = if is_surplus(balance.cb) {
                "surplus"
            } else if is_deficit(balance.cb) {
                "deficit"
            } else {
                "balanced"
            };
            let _ = writeln!(out, "  Compliance balance: {} ({})", format_cb(balance.cb), status);
        }
        None => {
            let _ = writeln!(out, "  Compliance balance: unavailable");
        }
    }

    let banked = record.map(|r| r.total_banked).unwrap_or(0.0);
    let _ = writeln!(
        out,
        "  Banked surplus:     {} gCO₂eq{}",
        format_number(banked, 0),
        if record.is_some_and(has_banked_surplus) {
            ""
        } else {
            " (nothing banked)"
        }
    );

    if let Some(result) = applied {
        let _ = writeln!(out, "  Before: {}", format_number(result.cb_before, 0));
        let _ = writeln!(out, "  Applied: {}", format_number(result.applied, 0));
        let _ = writeln!(out, "  After: {}", format_number(result.cb_after, 0));
    }
    out
}

pub fn render_pool(members: &[PoolMember], results: Option<&[PoolMemberResult]>) -> String {
    let mut out = String::new();

    match results {
        Some(results) => {
            let rows: Vec<Vec<String>> = results
                .iter()
                .map(|r| {
                    vec![
                        r.ship_id.clone(),
                        format_number(r.cb_before, 0),
                        format_number(r.cb_after, 0),
                        format_number(r.change(), 0),
                    ]
                })
                .collect();
            out.push_str(&render_table(&["Ship", "CB before", "CB after", "Change"], &rows));
        }
        None => {
            let rows: Vec<Vec<String>> = members
                .iter()
                .map(|m| vec![m.ship_id.clone(), format_number(m.cb_before, 0)])
                .collect();
            out.push_str(&render_table(&["Ship", "CB before"], &rows));
        }
    }

    let _ = writeln!(out, "Pool sum: {} gCO₂eq", format_number(pool_sum(members), 0));
    if is_pool_valid(members) {
        let _ = writeln!(out, "✅ Pool is valid (sum ≥ 0)");
    } else {
        let _ = writeln!(out, "❌ Pool invalid (sum < 0)");
    }
    out
}

/// Ships of one year that could join a pool. Ships whose adjusted balance could
/// not be loaded are listed as unavailable.
pub fn render_pool_candidates(routes: &[Route], adjusted: &BTreeMap<String, AdjustedCb>) -> String {
    if routes.is_empty() {
        return "No ships available for this year.\n".to_string();
    }

    let rows: Vec<Vec<String>> = routes
        .iter()
        .map(|r| {
            let balance = adjusted.get(&r.route_id).map(|a| a.adjusted_cb);
            vec![
                r.route_id.clone(),
                r.vessel_type.clone(),
                balance
                    .map(|cb| format!("{} gCO₂eq", format_number(cb, 0)))
                    .unwrap_or_else(|| "unavailable".to_string()),
                match balance {
                    Some(cb) if is_surplus(cb) => "surplus",
                    Some(cb) if is_deficit(cb) => "deficit",
                    Some(_) => "balanced",
                    None => "",
                }
                .to_string(),
            ]
        })
        .collect();

    render_table(&["Ship", "Vessel", "Adjusted CB", "Status"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::usecases::routes::tests::fixture;

    #[test]
    fn routes_table_marks_baseline() {
        let table = render_routes(&fixture());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Route"));
        assert!(lines[2].contains("R001") && lines[2].contains('★'));
        assert!(!lines[3].contains('★'));
        assert!(lines[2].contains("5,000"));
    }

    #[test]
    fn routes_table_keeps_four_intensity_decimals() {
        let mut routes = fixture();
        routes.truncate(1);
        routes[0].ghg_intensity = 89.3369;

        let table = render_routes(&routes);
        assert!(table.contains("89.3369"));
    }

    #[test]
    fn empty_routes_message() {
        assert_eq!(render_routes(&[]), "No routes match the current filters.\n");
    }

    #[test]
    fn comparison_shows_target_and_sign() {
        let rows = vec![ComparisonRow {
            baseline_route_id: "R001".to_string(),
            comparison_route_id: "R002".to_string(),
            baseline_intensity: 91.0,
            comparison_intensity: 88.0,
            percent_diff: -3.3,
            compliant: true,
        }];
        let out = render_comparisons(&rows);
        assert!(out.starts_with("Target intensity: 89.3368 gCO₂e/MJ"));
        assert!(out.contains("-3.30%"));
    }

    #[test]
    fn banking_summary_reports_status() {
        let out = render_banking(
            "R001",
            2024,
            Some(&ComplianceBalance { cb: -6_817_560.0 }),
            None,
            None,
        );
        assert!(out.contains("-6,817,560 gCO₂eq (deficit)"));
        assert!(out.contains("(nothing banked)"));
    }

    #[test]
    fn pool_results_show_change() {
        let members = vec![
            PoolMember::new("R002", 26_308_224.0),
            PoolMember::new("R001", -6_817_560.0),
        ];
        let results = vec![PoolMemberResult {
            ship_id: "R001".to_string(),
            cb_before: -6_817_560.0,
            cb_after: 0.0,
            year: 2024,
        }];
        let out = render_pool(&members, Some(&results));
        assert!(out.contains("6,817,560"));
        assert!(out.contains("Pool sum: 19,490,664 gCO₂eq"));
        assert!(out.contains("Pool is valid"));
    }

    #[test]
    fn negative_pool_is_flagged() {
        let members = vec![
            PoolMember::new("R001", -6_817_560.0),
            PoolMember::new("R003", 1_000.0),
        ];
        let out = render_pool(&members, None);
        assert!(out.contains("Pool sum: -6,816,560 gCO₂eq"));
        assert!(out.contains("Pool invalid (sum < 0)"));
    }

    #[test]
    fn candidates_show_balance_or_unavailable() {
        let routes: Vec<Route> = fixture().into_iter().filter(|r| r.year == 2024).collect();
        let mut adjusted = BTreeMap::new();
        adjusted.insert(
            "R002".to_string(),
            AdjustedCb {
                original_cb: 26_308_224.0,
                adjusted_cb: 26_308_224.0,
            },
        );

        let out = render_pool_candidates(&routes, &adjusted);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("R001") && lines[2].contains("unavailable"));
        assert!(lines[3].contains("26,308,224 gCO₂eq") && lines[3].contains("surplus"));
    }

    #[test]
    fn no_candidates_message() {
        assert_eq!(
            render_pool_candidates(&[], &BTreeMap::new()),
            "No ships available for this year.\n"
        );
    }
}
