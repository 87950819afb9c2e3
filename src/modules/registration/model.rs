use std::collections::HashMap;

use crate::utils::{parse_bool, parse_int};

/// Typed decode of the registration form's text fields. String booleans and
/// integers are normalized here, before anything touches the database.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub gst_number: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_type: Option<String>,
    pub international: bool,
    pub terms: bool,
    pub user_id: Option<i32>,
    pub kind: String,
}

impl RegisterRequest {
    pub fn from_fields(mut fields: HashMap<String, String>) -> Self {
        let international = parse_bool(fields.get("international").map(String::as_str));
        let terms = parse_bool(fields.get("terms").map(String::as_str));
        let user_id = parse_int(fields.get("userId").map(String::as_str));
        let kind = fields.remove("type").unwrap_or_else(|| "certificate".to_string());

        RegisterRequest {
            name: fields.remove("name"),
            designation: fields.remove("designation"),
            email: fields.remove("email"),
            password: fields.remove("password"),
            phone: fields.remove("phone"),
            account_name: fields.remove("accountName"),
            account_number: fields.remove("accountNumber"),
            ifsc_code: fields.remove("ifscCode"),
            gst_number: fields.remove("gstNumber"),
            company_name: fields.remove("companyName"),
            company_address: fields.remove("companyAddress"),
            company_type: fields.remove("companyType"),
            international,
            terms,
            user_id,
            kind,
        }
    }
}

/// New user row, assembled after the certificate upload succeeded. The
/// password is already hashed at this point.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub gst_number: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_type: Option<String>,
    pub international: bool,
    pub terms: bool,
    pub user_id: Option<i32>,
    pub url: String,
    pub kind: String,
}
