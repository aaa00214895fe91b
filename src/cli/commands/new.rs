use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects::{self, NewProject};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use crate::vault::Vault;

use super::{acting_user, open_workbook};

/// Create a project. Required fields are enforced here by clap; the core
/// trusts its input.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        customer,
        project,
        lot,
        assignee,
    } = cmd
    {
        let wb = open_workbook(cfg)?;
        let user = acting_user(&wb, cfg)?;
        let vault = Vault::new(cfg.output_dir.as_str());

        let data = NewProject {
            customer_name: customer.clone(),
            project_name: project.clone(),
            lot_number: lot.clone(),
            assignee: assignee.clone(),
        };

        let id = projects::create_project(&wb, &vault, &data, &user, date::now())?;

        messages::success(format!("created project {}", id));
        println!("{}", id);
    }
    Ok(())
}
