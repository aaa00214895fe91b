use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::format_sheet_datetime;

use super::{open_workbook, validate_project_id};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        validate_project_id(id)?;
        let wb = open_workbook(cfg)?;

        // A miss is an empty result, never a failure.
        match projects::get_project(&wb, id)? {
            Some(p) => {
                println!("id:         {}", p.id);
                println!("customer:   {}", p.customer_name);
                println!("project:    {}", p.project_name);
                println!("lot:        {}", p.lot_number);
                println!("assignee:   {}", p.assignee);
                println!("status:     {}", p.status);
                println!("department: {}", p.department);
                println!("created:    {}", format_sheet_datetime(&p.created_at));
                println!("updated:    {}", format_sheet_datetime(&p.updated_at));
            }
            None => messages::warning(format!("no project with id {}", id)),
        }
    }
    Ok(())
}
