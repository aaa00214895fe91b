//! Sheet names and header rows.
//! The Japanese names are the wire contract with the workbook; every other
//! module addresses sheets only through these constants.

pub const SHEET_USERS: &str = "ユーザーマスタ";
pub const SHEET_PROJECTS: &str = "案件管理";
pub const SHEET_DESIGN_SPECS: &str = "設計仕様入力データ";
pub const SHEET_INTERIOR_SPECS: &str = "IC仕様入力データ";
pub const SHEET_CHANGE_LOG: &str = "変更履歴ログ";

pub const HEADER_USERS: &[&str] = &["氏名", "メールアドレス", "部署", "権限", "有効"];

pub const HEADER_PROJECTS: &[&str] = &[
    "案件ID",
    "お客様名",
    "案件名",
    "号地",
    "担当者",
    "ステータス",
    "部署",
    "作成日時",
    "更新日時",
];

pub const HEADER_SPECS: &[&str] = &[
    "案件ID",
    "カテゴリ",
    "項目",
    "メーカー",
    "商品名",
    "品番",
    "色・柄",
    "備考",
    "保存日時",
    "保存者",
];

pub const HEADER_CHANGE_LOG: &[&str] = &[
    "日時",
    "案件ID",
    "操作",
    "変更前",
    "変更後",
    "氏名",
    "メールアドレス",
];

/// Template sheets are addressed by naming convention, one per template type.
pub fn template_sheet(template_type: &str) -> String {
    format!("ひな形_{}", template_type)
}

/// Master picklist sheets, one per category.
pub fn master_sheet(category: &str) -> String {
    format!("{}仕様項目マスタ", category)
}
