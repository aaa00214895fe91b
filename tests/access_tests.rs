use predicates::str::contains;
use specbook::core::access;
use specbook::models::UserProfile;
use specbook::store::sheets;

mod common;
use common::{OPERATOR_EMAIL, cli, init_with_operator, open_workbook, setup};

#[test]
fn unregistered_email_is_denied() {
    let env = setup("access_denied");
    init_with_operator(&env);

    cli(&env)
        .args(["--user", "stranger@example.com", "new", "佐藤", "佐藤様邸", "3", "山田太郎"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));
}

#[test]
fn missing_identity_is_rejected_before_lookup() {
    let env = setup("access_no_identity");
    init_with_operator(&env);

    cli(&env)
        .args(["new", "佐藤", "佐藤様邸", "3", "山田太郎"])
        .assert()
        .failure()
        .stderr(contains("operator email"));
}

#[test]
fn registered_email_passes_the_gate() {
    let env = setup("access_ok");
    init_with_operator(&env);

    cli(&env)
        .args(["--user", OPERATOR_EMAIL, "list"])
        .assert()
        .success();
}

#[test]
fn inactive_user_still_passes_existence_check() {
    // The lookup only validates existence; rejecting inactive profiles is a
    // policy callers would have to impose themselves.
    let env = setup("access_inactive");
    init_with_operator(&env);

    let wb = open_workbook(&env);
    let dormant = UserProfile {
        name: "休眠花子".to_string(),
        email: "dormant@example.com".to_string(),
        department: "IC部".to_string(),
        role: "editor".to_string(),
        is_active: false,
    };
    wb.append_row(sheets::SHEET_USERS, &dormant.to_row()).unwrap();

    let profile = access::check_access(&wb, "dormant@example.com").unwrap();
    assert!(!profile.is_active);
}

#[test]
fn missing_user_sheet_is_a_structural_error() {
    let env = setup("access_no_sheet");
    // No init: the workbook exists but carries no sheets.
    let wb = specbook::store::Workbook::open(&env.db).unwrap();

    let err = access::check_access(&wb, OPERATOR_EMAIL).unwrap_err();
    assert!(matches!(err, specbook::errors::AppError::SheetNotFound(_)));
}
