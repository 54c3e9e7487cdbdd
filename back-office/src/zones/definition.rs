//! Zone column definitions and the in-memory record checked against them

use super::ZoneError;
use crate::utils::validation::{
    FieldDef, FieldKind, FieldRule, FieldValue, MAX_NAME_LEN, Validatable,
    missing_required_fields, validate_fields,
};

/// Columns of the `zone` table
pub const ZONE_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "name",
        kind: FieldKind::Text,
        required: true,
        max_len: Some(MAX_NAME_LEN),
        rule: Some(FieldRule::GenericName),
    },
    FieldDef {
        name: "active",
        kind: FieldKind::Bool,
        required: false,
        max_len: None,
        rule: None,
    },
];

/// Zone values before they are persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFields {
    pub name: String,
    pub active: bool,
}

impl ZoneFields {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }

    /// Required fields first, then values
    pub fn validate(&self) -> Result<(), ZoneError> {
        let missing = missing_required_fields(self);
        if !missing.is_empty() {
            return Err(ZoneError::MissingRequiredFields {
                fields: missing.into_iter().map(String::from).collect(),
            });
        }

        validate_fields(self).map_err(|violation| ZoneError::InvalidValues { violation })
    }
}

impl Validatable for ZoneFields {
    fn definition() -> &'static [FieldDef] {
        ZONE_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "active" => Some(FieldValue::Bool(self.active)),
            _ => None,
        }
    }
}
