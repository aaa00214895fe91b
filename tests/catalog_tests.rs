use predicates::str::contains;
use specbook::core::catalog;
use specbook::store::sheets;

mod common;
use common::{cli, init_with_operator, open_workbook, setup};

fn seed_template_sheet(env: &common::TestEnv, template_type: &str) {
    let wb = open_workbook(env);
    let sheet = sheets::template_sheet(template_type);
    wb.ensure_sheet(&sheet, &["カテゴリ", "項目", "メーカー", "商品名", "品番", "色・柄", "備考"])
        .unwrap();

    let rows: &[&[&str]] = &[
        &["design", "フローリング", "朝日ウッドテック", "ライブナチュラル", "HLBF-77", "オーク", ""],
        &["interior", "クロス", "サンゲツ", "SP", "SP-9901", "ホワイト", "標準"],
        &["design", "建具", "大建工業", "ハピア", "HAP-01", "ダーク", ""],
        &["other", "無視される行", "", "", "", "", ""],
    ];
    for row in rows {
        let cells: Vec<String> = row.iter().map(|s| s.to_string()).collect();
        wb.append_row(&sheet, &cells).unwrap();
    }
}

#[test]
fn template_rows_are_partitioned_by_category_tag() {
    let env = setup("catalog_template");
    init_with_operator(&env);
    seed_template_sheet(&env, "標準");

    let wb = open_workbook(&env);
    let data = catalog::get_template(&wb, "標準").unwrap();

    assert_eq!(data.design.len(), 2);
    assert_eq!(data.interior.len(), 1);
    assert_eq!(data.design[0].item, "フローリング");
    assert_eq!(data.design[1].item, "建具");
    assert_eq!(data.interior[0].manufacturer, "サンゲツ");
}

#[test]
fn missing_template_sheet_yields_empty_lists_with_warning() {
    let env = setup("catalog_template_missing");
    init_with_operator(&env);

    cli(&env)
        .args(["template", "存在しない"])
        .assert()
        .success()
        .stdout(contains("[warn]"))
        .stdout(contains("\"design\": []"))
        .stdout(contains("\"interior\": []"));
}

#[test]
fn master_data_reads_the_category_sheet() {
    let env = setup("catalog_master");
    init_with_operator(&env);

    let wb = open_workbook(&env);
    let sheet = sheets::master_sheet("設計");
    wb.ensure_sheet(&sheet, &["ID", "項目", "メーカー", "商品名", "品番", "色", "柄", "備考"])
        .unwrap();
    wb.append_row(
        &sheet,
        &[
            "M001".to_string(),
            "フローリング".to_string(),
            "朝日ウッドテック".to_string(),
            "ライブナチュラル".to_string(),
            "HLBF-77".to_string(),
            "オーク".to_string(),
            "木目".to_string(),
            "".to_string(),
        ],
    )
    .unwrap();
    drop(wb);

    let wb = open_workbook(&env);
    let entries = catalog::get_master_data(&wb, "設計").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "M001");
    assert_eq!(entries[0].design, "木目");
}

#[test]
fn missing_master_sheet_yields_empty_list_with_warning() {
    let env = setup("catalog_master_missing");
    init_with_operator(&env);

    cli(&env)
        .args(["master", "存在しない"])
        .assert()
        .success()
        .stdout(contains("[warn]"))
        .stdout(contains("[]"));
}
