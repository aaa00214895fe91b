//! Composes project and specification data into a rendered, converted and
//! persisted specification sheet.

use crate::config::Config;
use crate::core::{audit, projects, specs};
use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;
use crate::render::pdf::render_pdf;
use crate::render::template::{fill_placeholders, pdf_file_name, working_copy_name};
use crate::store::Workbook;
use crate::ui::messages;
use crate::utils::date;
use crate::vault::Vault;
use chrono::Local;
use std::fs;
use std::path::PathBuf;

/// Identifiers of the stored output file.
#[derive(Debug, Clone)]
pub struct GeneratedPdf {
    pub file_name: String,
    pub path: PathBuf,
    pub url: String,
}

/// Generate the filled specification sheet PDF for one project.
///
/// The template working copy is staged in the vault, filled, rendered and
/// then soft-deleted whether or not the downstream steps succeeded. Each run
/// produces a fresh file in the project folder; there is no dedup.
pub fn generate_pdf(
    wb: &Workbook,
    vault: &Vault,
    cfg: &Config,
    project_id: &str,
    user: &UserProfile,
) -> AppResult<GeneratedPdf> {
    let project = projects::get_project(wb, project_id)?
        .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))?;

    let spec_data = specs::get_specification(wb, project_id)?;

    let template_text = fs::read_to_string(&cfg.template_file)
        .map_err(|_| AppError::TemplateNotFound(cfg.template_file.clone()))?;

    // Working copy of the template, one per generation run.
    let staged = vault.stage(
        &working_copy_name(project_id, Local::now().timestamp_millis()),
        &template_text,
    )?;

    let result = (|| -> AppResult<GeneratedPdf> {
        let today = date::today();
        let filled = fill_placeholders(&template_text, &project, &spec_data, today);

        // The working copy holds the substituted document before export.
        fs::write(&staged, &filled)?;

        let bytes = render_pdf("内装仕様書", &filled);

        let file_name = pdf_file_name(&project.customer_name, today);
        let folder = vault.ensure_project_folder(&project.id, &project.customer_name)?;
        let path = vault.create_file(&folder, &file_name, &bytes)?;
        let url = format!("file://{}", path.display());

        Ok(GeneratedPdf {
            file_name,
            path,
            url,
        })
    })();

    // Scoped cleanup: the working copy is trashed even when rendering or
    // storing failed.
    if let Err(err) = vault.trash(&staged) {
        messages::warning(format!("could not trash working copy: {}", err));
    }

    let output = result?;

    audit::record(
        wb,
        project_id,
        audit::ACTION_PDF_OUTPUT,
        "",
        &output.file_name,
        user,
    );

    Ok(output)
}
