use crate::cli::parser::{Commands, SpecAction};
use crate::config::Config;
use crate::core::{projects, specs};
use crate::errors::{AppError, AppResult};
use crate::models::SpecSheetInput;
use crate::ui::messages;
use crate::utils::date;
use std::fs;

use super::{acting_user, open_workbook, validate_project_id};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Spec { action } = cmd {
        match action {
            SpecAction::Get { id } => {
                validate_project_id(id)?;
                let wb = open_workbook(cfg)?;
                let data = specs::get_specification(&wb, id)?;
                println!("{}", serde_json::to_string_pretty(&data)?);
            }

            SpecAction::Save { id, file } => {
                validate_project_id(id)?;
                let wb = open_workbook(cfg)?;
                let user = acting_user(&wb, cfg)?;

                // Spec rows must reference an existing project.
                projects::get_project(&wb, id)?
                    .ok_or_else(|| AppError::ProjectNotFound(id.clone()))?;

                let payload = fs::read_to_string(file)?;
                let input: SpecSheetInput = serde_json::from_str(&payload)?;

                specs::save_specification(&wb, id, &input, &user, date::now())?;
                messages::success(format!("specification saved for {}", id));
            }
        }
    }
    Ok(())
}
