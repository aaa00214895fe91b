use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit;
use crate::errors::AppResult;
use crate::utils::date::format_sheet_datetime;
use crate::utils::table::Table;

use super::{open_workbook, validate_project_id};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { id } = cmd {
        validate_project_id(id)?;
        let wb = open_workbook(cfg)?;
        let entries = audit::get_history(&wb, id)?;

        let mut table = Table::new(&["time", "action", "new value", "user"]);
        for e in &entries {
            table.add_row(vec![
                e.timestamp
                    .as_ref()
                    .map(format_sheet_datetime)
                    .unwrap_or_default(),
                e.action.clone(),
                e.new_value.clone(),
                e.user_name.clone(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
