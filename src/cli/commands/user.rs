use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::access;
use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;
use crate::store::sheets;
use crate::ui::messages;
use crate::utils::table::Table;

use super::open_workbook;

/// Directory administration. Sits outside the access gate on purpose: the
/// directory has to be populated before anyone can pass the gate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let wb = open_workbook(cfg)?;

        match action {
            UserAction::Add {
                name,
                email,
                department,
                role,
            } => {
                if !wb.sheet_exists(sheets::SHEET_USERS)? {
                    return Err(AppError::SheetNotFound(sheets::SHEET_USERS.to_string()));
                }
                let profile = UserProfile {
                    name: name.clone(),
                    email: email.clone(),
                    department: department.clone(),
                    role: role.clone(),
                    is_active: true,
                };
                wb.append_row(sheets::SHEET_USERS, &profile.to_row())?;
                messages::success(format!("registered {} <{}>", name, email));
            }

            UserAction::List => {
                let users = access::list_users(&wb)?;
                let mut table = Table::new(&["name", "email", "department", "role", "active"]);
                for u in &users {
                    table.add_row(vec![
                        u.name.clone(),
                        u.email.clone(),
                        u.department.clone(),
                        u.role.clone(),
                        u.is_active.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
