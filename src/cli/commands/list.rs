use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects::{self, ProjectFilters};
use crate::errors::{AppError, AppResult};
use crate::models::ProjectStatus;
use crate::utils::date::format_sheet_datetime;
use crate::utils::table::Table;

use super::{acting_user, open_workbook};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        assignee,
        customer,
        status,
        department,
    } = cmd
    {
        let wb = open_workbook(cfg)?;
        acting_user(&wb, cfg)?;

        let status = match status {
            Some(code) => Some(
                ProjectStatus::from_code(code)
                    .ok_or_else(|| AppError::InvalidStatus(code.clone()))?,
            ),
            None => None,
        };

        let filters = ProjectFilters {
            assignee: assignee.clone(),
            customer_name: customer.clone(),
            status,
            department: department.clone(),
        };

        let result = projects::list_projects(&wb, &filters)?;

        let mut table = Table::new(&[
            "id",
            "customer",
            "project",
            "lot",
            "assignee",
            "status",
            "department",
            "updated",
        ]);
        for p in &result {
            table.add_row(vec![
                p.id.clone(),
                p.customer_name.clone(),
                p.project_name.clone(),
                p.lot_number.clone(),
                p.assignee.clone(),
                p.status.to_string(),
                p.department.clone(),
                format_sheet_datetime(&p.updated_at),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
