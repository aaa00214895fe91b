use super::cell;
use serde::Serialize;

/// One row of the user directory sheet.
/// Column layout: name, email, department, role, active flag.
/// The directory is maintained by administrators; core operations only read it.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub is_active: bool,
}

impl UserProfile {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            name: cell(row, 0),
            email: cell(row, 1),
            department: cell(row, 2),
            role: cell(row, 3),
            is_active: parse_flag(&cell(row, 4)),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.department.clone(),
            self.role.clone(),
            if self.is_active { "TRUE" } else { "FALSE" }.to_string(),
        ]
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.trim(), "TRUE" | "true" | "1" | "有効")
}
