use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::docgen;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::vault::Vault;

use super::{acting_user, open_workbook, validate_project_id};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pdf { id } = cmd {
        validate_project_id(id)?;
        let wb = open_workbook(cfg)?;
        let user = acting_user(&wb, cfg)?;
        let vault = Vault::new(cfg.output_dir.as_str());

        let output = docgen::generate_pdf(&wb, &vault, cfg, id, &user)?;

        messages::success(format!("generated {}", output.file_name));
        println!("{}", output.path.display());
        println!("{}", output.url);
    }
    Ok(())
}
