pub mod config;
pub mod history;
pub mod init;
pub mod list;
pub mod master;
pub mod new;
pub mod pdf;
pub mod show;
pub mod spec;
pub mod template;
pub mod user;

use crate::config::Config;
use crate::core::access;
use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;
use crate::store::Workbook;
use regex::Regex;

pub(crate) fn open_workbook(cfg: &Config) -> AppResult<Workbook> {
    Workbook::open(&cfg.database)
}

/// Resolve and gate the acting identity for mutating commands.
pub(crate) fn acting_user(wb: &Workbook, cfg: &Config) -> AppResult<UserProfile> {
    if cfg.operator_email.is_empty() {
        return Err(AppError::NoIdentity);
    }
    access::check_access(wb, &cfg.operator_email)
}

/// Shape check for project id arguments, before any sheet scan.
pub(crate) fn validate_project_id(id: &str) -> AppResult<()> {
    let ok = Regex::new(r"^PRJ\d{10}$")
        .map(|re| re.is_match(id))
        .unwrap_or(false);
    if ok {
        Ok(())
    } else {
        Err(AppError::InvalidProjectId(id.to_string()))
    }
}
