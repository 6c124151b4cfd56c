//! Code entity <-> model mapper

use chrono::{DateTime, Utc};
use hunt_core::entities::Code;
use hunt_core::value_objects::Snowflake;

use crate::models::CodeModel;

impl From<CodeModel> for Code {
    fn from(model: CodeModel) -> Self {
        Code {
            id: Snowflake::new(model.id),
            code: model.code,
            name: model.name,
            description: model.description,
            points: model.points,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Bind values for inserting or updating a code row
pub struct CodeRow<'a> {
    pub id: i64,
    pub code: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub points: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Code> for CodeRow<'a> {
    fn from(code: &'a Code) -> Self {
        Self {
            id: code.id.into_inner(),
            code: &code.code,
            name: &code.name,
            description: code.description.as_deref(),
            points: code.points,
            is_active: code.is_active,
            created_at: code.created_at,
            updated_at: code.updated_at,
        }
    }
}
