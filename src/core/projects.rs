use crate::core::audit;
use crate::errors::{AppError, AppResult};
use crate::models::project::generate_project_id;
use crate::models::{Project, ProjectStatus, UserProfile};
use crate::store::{Workbook, sheets};
use crate::utils::date;
use crate::vault::Vault;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Filter set for the project list. All provided fields are ANDed;
/// absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilters {
    /// Exact match.
    pub assignee: Option<String>,
    /// Substring containment.
    pub customer_name: Option<String>,
    /// Exact match.
    pub status: Option<ProjectStatus>,
    /// Exact match.
    pub department: Option<String>,
}

impl ProjectFilters {
    pub fn matches(&self, p: &Project) -> bool {
        if let Some(a) = &self.assignee
            && p.assignee != *a
        {
            return false;
        }
        if let Some(c) = &self.customer_name
            && !p.customer_name.contains(c.as_str())
        {
            return false;
        }
        if let Some(s) = &self.status
            && p.status != *s
        {
            return false;
        }
        if let Some(d) = &self.department
            && p.department != *d
        {
            return false;
        }
        true
    }
}

/// Fields required to open a new project. Presence is enforced upstream
/// (the CLI makes them mandatory arguments); this layer trusts its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub customer_name: String,
    pub project_name: String,
    pub lot_number: String,
    pub assignee: String,
}

/// All projects passing the filters, in sheet (append) order.
pub fn list_projects(wb: &Workbook, filters: &ProjectFilters) -> AppResult<Vec<Project>> {
    if !wb.sheet_exists(sheets::SHEET_PROJECTS)? {
        return Err(AppError::SheetNotFound(sheets::SHEET_PROJECTS.to_string()));
    }

    let mut out = Vec::new();
    for (_, row) in wb.data_rows(sheets::SHEET_PROJECTS)? {
        let project = Project::from_row(&row)?;
        if filters.matches(&project) {
            out.push(project);
        }
    }
    Ok(out)
}

/// Create a project row, provision its folder, and audit the creation.
/// Returns the generated id.
pub fn create_project(
    wb: &Workbook,
    vault: &Vault,
    data: &NewProject,
    user: &UserProfile,
    now: NaiveDateTime,
) -> AppResult<String> {
    if !wb.sheet_exists(sheets::SHEET_PROJECTS)? {
        return Err(AppError::SheetNotFound(sheets::SHEET_PROJECTS.to_string()));
    }

    let id = generate_project_id(&now);
    let project = Project {
        id: id.clone(),
        customer_name: data.customer_name.clone(),
        project_name: data.project_name.clone(),
        lot_number: data.lot_number.clone(),
        assignee: data.assignee.clone(),
        status: ProjectStatus::Meeting,
        department: user.department.clone(),
        created_at: now,
        updated_at: now,
    };

    wb.append_row(sheets::SHEET_PROJECTS, &project.to_row())?;
    vault.ensure_project_folder(&id, &data.customer_name)?;

    let serialized = serde_json::to_string(data)?;
    audit::record(wb, &id, audit::ACTION_PROJECT_CREATED, "", &serialized, user);

    Ok(id)
}

/// Linear scan by id. Absent projects (or an absent project sheet) read as
/// None, not as an error; callers must check.
pub fn get_project(wb: &Workbook, id: &str) -> AppResult<Option<Project>> {
    if !wb.sheet_exists(sheets::SHEET_PROJECTS)? {
        return Ok(None);
    }

    for (_, row) in wb.data_rows(sheets::SHEET_PROJECTS)? {
        if row.first().map(String::as_str) == Some(id) {
            return Ok(Some(Project::from_row(&row)?));
        }
    }
    Ok(None)
}

/// Stamp updated_at on the matching row; no-op when the id is absent.
pub fn touch_updated_at(wb: &Workbook, id: &str, now: NaiveDateTime) -> AppResult<()> {
    if !wb.sheet_exists(sheets::SHEET_PROJECTS)? {
        return Ok(());
    }

    for (pos, row) in wb.data_rows(sheets::SHEET_PROJECTS)? {
        if row.first().map(String::as_str) == Some(id) {
            wb.set_cell(
                sheets::SHEET_PROJECTS,
                pos,
                8,
                &date::format_sheet_datetime(&now),
            )?;
            break;
        }
    }
    Ok(())
}
