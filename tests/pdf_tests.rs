use predicates::str::contains;
use specbook::utils::date::compact_date;
use std::fs;
use std::path::Path;

mod common;
use common::{cli_as_operator, create_project, init_with_operator, setup, write_payload};

fn expected_pdf_name(customer: &str) -> String {
    format!(
        "{}様邸_内装仕様書_{}.pdf",
        customer,
        compact_date(chrono::Local::now().date_naive())
    )
}

#[test]
fn pdf_lands_in_the_project_folder() {
    let env = setup("pdf_output");
    init_with_operator(&env);
    let id = create_project(&env, "佐藤", "佐藤様邸", "1", "山田太郎");

    let payload = write_payload(
        &env,
        "specs.json",
        r#"{"design":[{"item":"フローリング","manufacturer":"朝日ウッドテック","productName":"ライブナチュラル","productCode":"HLBF-77"}]}"#,
    );
    cli_as_operator(&env)
        .args(["spec", "save", &id, "--file", &payload])
        .assert()
        .success();

    cli_as_operator(&env)
        .args(["pdf", &id])
        .assert()
        .success()
        .stdout(contains(".pdf"));

    let pdf = Path::new(&env.out)
        .join(format!("{}_佐藤", id))
        .join(expected_pdf_name("佐藤"));
    assert!(pdf.is_file());

    let bytes = fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn working_copy_is_trashed_and_holds_the_filled_body() {
    let env = setup("pdf_working_copy");
    init_with_operator(&env);
    // No spec rows saved at all: both category tokens must survive.
    let id = create_project(&env, "鈴木", "鈴木様邸", "2", "山田太郎");

    cli_as_operator(&env).args(["pdf", &id]).assert().success();

    let trash = Path::new(&env.out).join(".trash");
    let copies: Vec<_> = fs::read_dir(&trash)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("temp_"))
        .collect();
    assert_eq!(copies.len(), 1);

    // Soft delete keeps the artifact inspectable: the customer placeholder
    // was substituted, the empty categories were not.
    let body = fs::read_to_string(copies[0].path()).unwrap();
    assert!(body.contains("鈴木様"));
    assert!(body.contains("{{designSpecs}}"));
    assert!(body.contains("{{interiorSpecs}}"));

    // Nothing temp-named left outside the trash.
    let leftovers: Vec<_> = fs::read_dir(&env.out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("temp_"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn each_generation_creates_a_fresh_file_without_dedup() {
    let env = setup("pdf_no_dedup");
    init_with_operator(&env);
    let id = create_project(&env, "高橋", "高橋様邸", "5", "山田太郎");

    cli_as_operator(&env).args(["pdf", &id]).assert().success();
    cli_as_operator(&env).args(["pdf", &id]).assert().success();

    // Same day, same name: the second run overwrote the first file, and two
    // working copies went through the trash.
    let trash = Path::new(&env.out).join(".trash");
    assert!(fs::read_dir(&trash).unwrap().count() >= 1);

    let folder = Path::new(&env.out).join(format!("{}_高橋", id));
    let pdfs = fs::read_dir(&folder)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".pdf"))
        .count();
    assert_eq!(pdfs, 1);
}

#[test]
fn unknown_project_fails_with_named_error() {
    let env = setup("pdf_unknown");
    init_with_operator(&env);

    cli_as_operator(&env)
        .args(["pdf", "PRJ0001010101"])
        .assert()
        .failure()
        .stderr(contains("Project not found"));
}

#[test]
fn malformed_id_is_rejected_before_any_lookup() {
    let env = setup("pdf_bad_id");
    init_with_operator(&env);

    cli_as_operator(&env)
        .args(["pdf", "not-an-id"])
        .assert()
        .failure()
        .stderr(contains("Invalid project id"));
}
