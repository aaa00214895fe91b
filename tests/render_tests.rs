use chrono::NaiveDate;
use specbook::core::specs::SpecData;
use specbook::models::{Project, ProjectStatus, SpecItem};
use specbook::render::template::{DEFAULT_TEMPLATE, fill_placeholders, pdf_file_name};

mod common;

fn sample_project() -> Project {
    let t = NaiveDate::from_ymd_opt(2026, 8, 25)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    Project {
        id: "PRJ2608251030".to_string(),
        customer_name: "佐藤".to_string(),
        project_name: "佐藤様邸新築工事".to_string(),
        lot_number: "3".to_string(),
        assignee: "山田太郎".to_string(),
        status: ProjectStatus::Meeting,
        department: "設計部".to_string(),
        created_at: t,
        updated_at: t,
    }
}

fn design_item(item: &str) -> SpecItem {
    SpecItem {
        project_id: "PRJ2608251030".to_string(),
        category: "床".to_string(),
        item: item.to_string(),
        manufacturer: "朝日ウッドテック".to_string(),
        product_name: "ライブナチュラル".to_string(),
        product_code: "HLBF-77".to_string(),
        color_or_design: "オーク".to_string(),
        notes: String::new(),
        saved_at: None,
        saved_by: "山田太郎".to_string(),
    }
}

#[test]
fn basic_placeholders_are_always_substituted() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let filled = fill_placeholders(DEFAULT_TEMPLATE, &sample_project(), &SpecData::default(), today);

    assert!(filled.contains("佐藤様"));
    assert!(filled.contains("佐藤様邸新築工事"));
    assert!(filled.contains("号地: 3"));
    assert!(filled.contains("山田太郎"));
    assert!(filled.contains("2026年08月25日"));
    assert!(!filled.contains("{{customerName}}"));
}

#[test]
fn empty_category_leaves_its_token_unsubstituted() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let specs = SpecData {
        design: Vec::new(),
        interior: vec![design_item("クロス")],
    };
    let filled = fill_placeholders(DEFAULT_TEMPLATE, &sample_project(), &specs, today);

    // Zero design items: the token stays in the document verbatim.
    assert!(filled.contains("{{designSpecs}}"));
    assert!(!filled.contains("{{interiorSpecs}}"));
    assert!(filled.contains("クロス: 朝日ウッドテック ライブナチュラル HLBF-77\n"));
}

#[test]
fn category_lines_are_one_per_item_in_order() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let specs = SpecData {
        design: vec![design_item("フローリングA"), design_item("フローリングB")],
        interior: Vec::new(),
    };
    let filled = fill_placeholders(DEFAULT_TEMPLATE, &sample_project(), &specs, today);

    let a = filled.find("フローリングA:").unwrap();
    let b = filled.find("フローリングB:").unwrap();
    assert!(a < b);
    assert!(filled.contains("{{interiorSpecs}}"));
}

#[test]
fn file_name_follows_the_customer_and_date_convention() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    assert_eq!(
        pdf_file_name("佐藤", today),
        "佐藤様邸_内装仕様書_20260825.pdf"
    );
}
