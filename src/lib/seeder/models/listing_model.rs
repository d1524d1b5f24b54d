//! Module with listing models compatible with the MeetPlan backend's REST API
use serde::Deserialize;

/// Envelope the backend wraps around every JSON payload. Only the payload
/// itself is interesting here.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Payload of a successful login.
#[derive(Deserialize, Debug)]
pub struct TokenData {
    pub token: String,
}

/// One account as the backend lists it. The listing carries more fields,
/// but the email is the only one the seed set can be matched on.
#[derive(Deserialize, Debug, PartialEq)]
pub struct UserRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Email")]
    pub email: String,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct ClassRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct SubjectRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}
