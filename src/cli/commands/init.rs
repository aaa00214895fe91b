use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::render::template::DEFAULT_TEMPLATE;
use crate::store::{Workbook, sheets};
use crate::ui::messages;
use std::fs;
use std::path::Path;

/// Provision configuration, workbook sheets, output root and the default
/// placeholder template.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let wb = Workbook::open(&cfg.database)?;
    wb.ensure_sheet(sheets::SHEET_USERS, sheets::HEADER_USERS)?;
    wb.ensure_sheet(sheets::SHEET_PROJECTS, sheets::HEADER_PROJECTS)?;
    wb.ensure_sheet(sheets::SHEET_DESIGN_SPECS, sheets::HEADER_SPECS)?;
    wb.ensure_sheet(sheets::SHEET_INTERIOR_SPECS, sheets::HEADER_SPECS)?;
    wb.ensure_sheet(sheets::SHEET_CHANGE_LOG, sheets::HEADER_CHANGE_LOG)?;

    fs::create_dir_all(&cfg.output_dir)?;

    if !Path::new(&cfg.template_file).exists() {
        fs::write(&cfg.template_file, DEFAULT_TEMPLATE)?;
    }

    messages::success(format!("workbook initialized at {}", cfg.database));
    Ok(())
}
