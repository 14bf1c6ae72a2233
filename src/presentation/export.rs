use crate::domain::model::Route;
use crate::domain::rules::{energy_in_scope, is_compliant, TARGET_INTENSITY_2025};
use crate::utils::error::{ConsoleError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ConsoleError::InvalidConfigValue {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: table, json, csv".to_string(),
            }),
        }
    }
}

/// Pretty JSON array using the backend's field names.
pub fn routes_to_json(routes: &[Route]) -> Result<String> {
    Ok(serde_json::to_string_pretty(routes)?)
}

/// One row per route, with derived energy and compliance columns appended.
pub fn routes_to_csv(routes: &[Route]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "routeId",
        "vesselType",
        "fuelType",
        "year",
        "ghgIntensity",
        "fuelConsumption",
        "distance",
        "totalEmissions",
        "isBaseline",
        "energyInScopeMJ",
        "compliant",
    ])?;

    for route in routes {
        writer.write_record([
            route.route_id.clone(),
            route.vessel_type.clone(),
            route.fuel_type.clone(),
            route.year.to_string(),
            route.ghg_intensity.to_string(),
            route.fuel_consumption.to_string(),
            route.distance.to_string(),
            route.total_emissions.to_string(),
            route.is_baseline.to_string(),
            energy_in_scope(route).to_string(),
            is_compliant(route, TARGET_INTENSITY_2025).to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConsoleError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ConsoleError::Config {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
