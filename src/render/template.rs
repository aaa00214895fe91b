//! Literal placeholder substitution over the whole template body.

use crate::core::specs::SpecData;
use crate::models::{Project, SpecItem};
use crate::utils::date::japanese_date;
use chrono::NaiveDate;

/// Default template written by `specbook init`.
pub const DEFAULT_TEMPLATE: &str = "内装仕様書

お客様名: {{customerName}}様
案件名: {{projectName}}
号地: {{lotNumber}}
担当者: {{assignee}}
作成日: {{date}}

【設計仕様】
{{designSpecs}}

【IC仕様】
{{interiorSpecs}}
";

/// Fill every placeholder of the template body.
///
/// The category tokens are only substituted when the category has at least
/// one item; a zero-item category leaves its token in the output verbatim,
/// matching the behavior the document operators rely on to spot unfinished
/// sheets.
pub fn fill_placeholders(
    template: &str,
    project: &Project,
    specs: &SpecData,
    today: NaiveDate,
) -> String {
    let mut body = template
        .replace("{{customerName}}", &project.customer_name)
        .replace("{{projectName}}", &project.project_name)
        .replace("{{lotNumber}}", &project.lot_number)
        .replace("{{assignee}}", &project.assignee)
        .replace("{{date}}", &japanese_date(today));

    if !specs.design.is_empty() {
        body = body.replace("{{designSpecs}}", &spec_lines(&specs.design));
    }
    if !specs.interior.is_empty() {
        body = body.replace("{{interiorSpecs}}", &spec_lines(&specs.interior));
    }

    body
}

/// One line per item: "<item>: <manufacturer> <product name> <product code>".
fn spec_lines(items: &[SpecItem]) -> String {
    let mut out = String::new();
    for it in items {
        out.push_str(&format!(
            "{}: {} {} {}\n",
            it.item, it.manufacturer, it.product_name, it.product_code
        ));
    }
    out
}

/// File name of the generated document: {customer}様邸_内装仕様書_{yyyyMMdd}.pdf
pub fn pdf_file_name(customer_name: &str, today: NaiveDate) -> String {
    format!(
        "{}様邸_内装仕様書_{}.pdf",
        customer_name,
        crate::utils::date::compact_date(today)
    )
}

/// Temporary working-copy name for one generation run.
pub fn working_copy_name(project_id: &str, millis: i64) -> String {
    format!("temp_{}_{}.txt", project_id, millis)
}
