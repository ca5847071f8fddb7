mod standard;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::matching::normalize_label;

/// Reference data consumed by the calculator. Never mutated once a calculator owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTables {
    pub base_rates: BaseRates,
    /// Profile used when an item label matches nothing.
    pub default_item: ItemProfile,
    pub items: Vec<ItemProfile>,
    pub default_category_fee: f64,
    pub categories: Vec<CategoryFee>,
    pub default_state_multiplier: f64,
    /// Two-letter state code to regional cost multiplier.
    pub state_multipliers: BTreeMap<String, f64>,
    pub urban_demand_multiplier: f64,
    /// Three-digit zip prefixes of high-demand metro areas.
    pub urban_zip_prefixes: Vec<String>,
}

/// National base rates before the state multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRates {
    pub labor_per_hour: f64,
    pub disposal_per_cubic_yard: f64,
    pub fuel_surcharge: f64,
}

/// Typical size, weight, and handling difficulty (1-5) of one unit of an item archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProfile {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub difficulty: f64,
}

/// Flat per-unit handling fee for a disposal category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFee {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    pub fee: f64,
}

/// Failure to load or accept a tables file.
#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("unable to read pricing tables from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("pricing tables in {path} are not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{0}")]
    Invalid(String),
}

const MAX_MULTIPLIER: f64 = 5.0;

impl PricingTables {
    /// Tables bundled with the engine.
    pub fn standard() -> Self {
        standard::tables()
    }

    /// Read a JSON tables file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables: PricingTables =
            serde_json::from_str(&raw).map_err(|source| TablesError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        positive("baseRates.laborPerHour", self.base_rates.labor_per_hour)?;
        positive(
            "baseRates.disposalPerCubicYard",
            self.base_rates.disposal_per_cubic_yard,
        )?;
        non_negative("baseRates.fuelSurcharge", self.base_rates.fuel_surcharge)?;

        validate_profile("defaultItem", &self.default_item)?;
        let mut labels = HashSet::new();
        for profile in &self.items {
            validate_profile(&profile.key, profile)?;
            unique_labels("item", &profile.key, &profile.synonyms, &mut labels)?;
        }

        non_negative("defaultCategoryFee", self.default_category_fee)?;
        let mut labels = HashSet::new();
        for category in &self.categories {
            non_negative(&format!("category '{}' fee", category.key), category.fee)?;
            unique_labels("category", &category.key, &category.synonyms, &mut labels)?;
        }

        multiplier("defaultStateMultiplier", self.default_state_multiplier)?;
        let mut states = HashSet::new();
        for (state, value) in &self.state_multipliers {
            if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(TablesError::Invalid(format!(
                    "state key '{state}' must be a two-letter code"
                )));
            }
            if !states.insert(state.to_ascii_uppercase()) {
                return Err(TablesError::Invalid(format!(
                    "state '{state}' is listed more than once"
                )));
            }
            multiplier(&format!("state '{state}' multiplier"), *value)?;
        }

        multiplier("urbanDemandMultiplier", self.urban_demand_multiplier)?;
        for prefix in &self.urban_zip_prefixes {
            if prefix.len() != 3 || !prefix.chars().all(|c| c.is_ascii_digit()) {
                return Err(TablesError::Invalid(format!(
                    "urban zip prefix '{prefix}' must be three digits"
                )));
            }
        }

        Ok(())
    }
}

fn positive(field: &str, value: f64) -> Result<(), TablesError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TablesError::Invalid(format!(
            "{field} must be a positive number, found {value}"
        )))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), TablesError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TablesError::Invalid(format!(
            "{field} must not be negative, found {value}"
        )))
    }
}

fn multiplier(field: &str, value: f64) -> Result<(), TablesError> {
    if value.is_finite() && value > 0.0 && value <= MAX_MULTIPLIER {
        Ok(())
    } else {
        Err(TablesError::Invalid(format!(
            "{field} must be in (0, {MAX_MULTIPLIER}], found {value}"
        )))
    }
}

fn validate_profile(name: &str, profile: &ItemProfile) -> Result<(), TablesError> {
    positive(&format!("item '{name}' length"), profile.length)?;
    positive(&format!("item '{name}' width"), profile.width)?;
    positive(&format!("item '{name}' height"), profile.height)?;
    non_negative(&format!("item '{name}' weight"), profile.weight)?;
    if !(1.0..=5.0).contains(&profile.difficulty) {
        return Err(TablesError::Invalid(format!(
            "item '{name}' difficulty must be between 1 and 5, found {}",
            profile.difficulty
        )));
    }
    Ok(())
}

fn unique_labels(
    table: &str,
    key: &str,
    synonyms: &[String],
    seen: &mut HashSet<String>,
) -> Result<(), TablesError> {
    for label in std::iter::once(key).chain(synonyms.iter().map(String::as_str)) {
        let normalized = normalize_label(label);
        if normalized.is_empty() {
            return Err(TablesError::Invalid(format!(
                "{table} '{key}' has a blank label"
            )));
        }
        if !seen.insert(normalized) {
            return Err(TablesError::Invalid(format!(
                "{table} label '{label}' is listed more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_tables_are_valid() {
        let tables = PricingTables::standard();
        tables.validate().expect("bundled tables validate");
        assert!(tables.items.len() >= 20);
        assert_eq!(tables.state_multipliers.get("TX"), Some(&0.95));
        assert_eq!(tables.state_multipliers.get("CA"), Some(&1.25));
    }

    #[test]
    fn rejects_duplicate_item_labels() {
        let mut tables = PricingTables::standard();
        tables.items[1].synonyms.push("Couch".to_string());

        match tables.validate() {
            Err(TablesError::Invalid(reason)) => assert!(reason.contains("Couch")),
            other => panic!("expected duplicate label rejection, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_multipliers_and_prefixes() {
        let mut tables = PricingTables::standard();
        tables.state_multipliers.insert("ZZ".to_string(), 0.0);
        assert!(matches!(tables.validate(), Err(TablesError::Invalid(_))));

        let mut tables = PricingTables::standard();
        tables.urban_zip_prefixes.push("9001".to_string());
        assert!(matches!(tables.validate(), Err(TablesError::Invalid(_))));

        let mut tables = PricingTables::standard();
        tables.items[0].difficulty = 7.0;
        assert!(matches!(tables.validate(), Err(TablesError::Invalid(_))));
    }

    #[test]
    fn loads_tables_from_json_file() {
        let mut tables = PricingTables::standard();
        tables.base_rates.labor_per_hour = 60.0;

        let path = std::env::temp_dir().join(format!(
            "haulquote-tables-{}-load.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).expect("temp file");
        file.write_all(
            serde_json::to_string_pretty(&tables)
                .expect("serialize")
                .as_bytes(),
        )
        .expect("write tables");

        let loaded = PricingTables::from_path(&path).expect("tables load");
        fs::remove_file(&path).ok();

        assert_eq!(loaded, tables);
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let missing = std::env::temp_dir().join("haulquote-tables-does-not-exist.json");
        assert!(matches!(
            PricingTables::from_path(&missing),
            Err(TablesError::Io { .. })
        ));

        let path = std::env::temp_dir().join(format!(
            "haulquote-tables-{}-malformed.json",
            std::process::id()
        ));
        fs::write(&path, "{ \"baseRates\": ").expect("write");
        let result = PricingTables::from_path(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(TablesError::Json { .. })));
    }
}
