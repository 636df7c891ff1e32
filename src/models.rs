//! Request schemas, one per route that takes a body or query string.
//!
//! Field names follow the column names of the underlying tables. Every field
//! is required: a missing or mistyped field is rejected at extraction, before
//! any statement runs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Body for POST /student.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewStudent {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "TITLE")]
    pub title: String,
    #[serde(rename = "CLASS")]
    pub class: String,
    #[serde(rename = "SECTION")]
    pub section: String,
    #[serde(rename = "ROLLID")]
    pub rollid: i64,
}

/// Body for PUT /student: rewrites TITLE and SECTION for one ROLLID.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentTitleUpdate {
    #[serde(rename = "TITLE")]
    pub title: String,
    #[serde(rename = "SECTION")]
    pub section: String,
    #[serde(rename = "ROLLID")]
    pub rollid: i64,
}

/// Body for PATCH /student: rewrites CLASS and SECTION for one ROLLID.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentClassUpdate {
    #[serde(rename = "CLASS")]
    pub class: String,
    #[serde(rename = "SECTION")]
    pub section: String,
    #[serde(rename = "ROLLID")]
    pub rollid: i64,
}

/// Query string for GET /agents.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AgentFilter {
    /// Matched exactly against WORKING_AREA.
    pub city: String,
}

/// Query string for GET /company.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompanyFilter {
    /// Matched exactly against COMPANY_NAME.
    pub name: String,
}
