use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            println!("{}", yaml);
        } else {
            messages::info(format!(
                "configuration file: {}",
                Config::config_file().display()
            ));
        }
    }
    Ok(())
}
