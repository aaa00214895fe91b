use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog;
use crate::errors::AppResult;

use super::open_workbook;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { name } = cmd {
        let wb = open_workbook(cfg)?;
        let data = catalog::get_template(&wb, name)?;
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}
