use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog;
use crate::errors::AppResult;

use super::open_workbook;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Master { category } = cmd {
        let wb = open_workbook(cfg)?;
        let entries = catalog::get_master_data(&wb, category)?;
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }
    Ok(())
}
