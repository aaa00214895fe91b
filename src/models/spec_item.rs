use super::cell;
use crate::errors::AppError;
use crate::store::sheets;
use crate::utils::{format_sheet_datetime, parse_sheet_datetime};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two parallel specification datasets a project carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecCategory {
    Design,
    Interior,
}

impl SpecCategory {
    /// Sheet holding this category's rows.
    pub fn sheet(&self) -> &'static str {
        match self {
            SpecCategory::Design => sheets::SHEET_DESIGN_SPECS,
            SpecCategory::Interior => sheets::SHEET_INTERIOR_SPECS,
        }
    }
}

impl fmt::Display for SpecCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecCategory::Design => write!(f, "design"),
            SpecCategory::Interior => write!(f, "interior"),
        }
    }
}

impl FromStr for SpecCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "design" => Ok(SpecCategory::Design),
            "interior" => Ok(SpecCategory::Interior),
            other => Err(AppError::InvalidCategory(other.to_string())),
        }
    }
}

/// One stored specification row.
/// Column layout: project id, category, item, manufacturer, product name,
/// product code, color/design, notes, saved at, saved by.
/// Identity is (project id, row position); a save replaces the whole set.
#[derive(Debug, Clone, Serialize)]
pub struct SpecItem {
    pub project_id: String,
    pub category: String,
    pub item: String,
    pub manufacturer: String,
    pub product_name: String,
    pub product_code: String,
    pub color_or_design: String,
    pub notes: String,
    pub saved_at: Option<NaiveDateTime>,
    pub saved_by: String,
}

impl SpecItem {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            project_id: cell(row, 0),
            category: cell(row, 1),
            item: cell(row, 2),
            manufacturer: cell(row, 3),
            product_name: cell(row, 4),
            product_code: cell(row, 5),
            color_or_design: cell(row, 6),
            notes: cell(row, 7),
            saved_at: parse_sheet_datetime(&cell(row, 8)),
            saved_by: cell(row, 9),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.project_id.clone(),
            self.category.clone(),
            self.item.clone(),
            self.manufacturer.clone(),
            self.product_name.clone(),
            self.product_code.clone(),
            self.color_or_design.clone(),
            self.notes.clone(),
            self.saved_at
                .as_ref()
                .map(format_sheet_datetime)
                .unwrap_or_default(),
            self.saved_by.clone(),
        ]
    }
}

/// One item as submitted by the entry form / JSON payload.
/// project id, timestamp and author are stamped on at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecItemInput {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_code: String,
    #[serde(default, alias = "color", alias = "design")]
    pub color_or_design: String,
    #[serde(default)]
    pub notes: String,
}

impl SpecItemInput {
    pub fn into_item(self, project_id: &str, saved_at: NaiveDateTime, saved_by: &str) -> SpecItem {
        SpecItem {
            project_id: project_id.to_string(),
            category: self.category,
            item: self.item,
            manufacturer: self.manufacturer,
            product_name: self.product_name,
            product_code: self.product_code,
            color_or_design: self.color_or_design,
            notes: self.notes,
            saved_at: Some(saved_at),
            saved_by: saved_by.to_string(),
        }
    }
}

/// Save payload: each category is independent, and an absent category leaves
/// the stored rows untouched while an empty list clears them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecSheetInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<Vec<SpecItemInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior: Option<Vec<SpecItemInput>>,
}
