//! Input validation helpers
//!
//! Records describe their columns with a static [`FieldDef`] table; the
//! functions here check a record against that table in two passes:
//! required fields first, then field values.

use std::fmt;

// ── Text length limits ──────────────────────────────────────────────

/// Names of small catalog records (zones, countries, states)
pub const MAX_NAME_LEN: usize = 64;

/// Characters rejected by [`FieldRule::GenericName`]
const GENERIC_NAME_FORBIDDEN: [char; 5] = ['<', '>', '=', '{', '}'];

// ── Field definitions ───────────────────────────────────────────────

/// Storage type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
}

/// Content rule applied on top of the type check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Free text without markup characters (`< > = { }`)
    GenericName,
}

/// One column of a record definition
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub max_len: Option<usize>,
    pub rule: Option<FieldRule>,
}

/// Borrowed value of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Bool(bool),
}

impl FieldValue<'_> {
    fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Bool(_) => FieldKind::Bool,
        }
    }

    /// Empty text (after trimming) counts as a missing value; booleans are always set
    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Bool(_) => false,
        }
    }
}

/// A record that can be checked against its column definitions
pub trait Validatable {
    /// Column definitions, in declaration order
    fn definition() -> &'static [FieldDef];

    /// Current value of the named field, `None` when unset
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

// ── Violations ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    WrongType { expected: FieldKind },
    TooLong { len: usize, max: usize },
    InvalidCharacters,
}

/// First field that failed value validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: ViolationReason,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ViolationReason::WrongType { expected } => {
                write!(f, "{} must be of type {:?}", self.field, expected)
            }
            ViolationReason::TooLong { len, max } => {
                write!(f, "{} is too long ({len} chars, max {max})", self.field)
            }
            ViolationReason::InvalidCharacters => {
                write!(f, "{} contains invalid characters", self.field)
            }
        }
    }
}

// ── Validation passes ───────────────────────────────────────────────

/// Names of required fields that are unset or blank, in definition order
pub fn missing_required_fields<T: Validatable>(record: &T) -> Vec<&'static str> {
    T::definition()
        .iter()
        .filter(|def| def.required)
        .filter(|def| record.field(def.name).is_none_or(|v| v.is_empty()))
        .map(|def| def.name)
        .collect()
}

/// Check types, lengths and content rules of every set field
pub fn validate_fields<T: Validatable>(record: &T) -> Result<(), FieldViolation> {
    for def in T::definition() {
        let Some(value) = record.field(def.name) else {
            continue;
        };
        validate_field(def, value)?;
    }
    Ok(())
}

fn validate_field(def: &FieldDef, value: FieldValue<'_>) -> Result<(), FieldViolation> {
    let violation = |reason| FieldViolation {
        field: def.name,
        reason,
    };

    if value.kind() != def.kind {
        return Err(violation(ViolationReason::WrongType { expected: def.kind }));
    }

    if let FieldValue::Text(text) = value {
        let len = text.chars().count();
        if let Some(max) = def.max_len
            && len > max
        {
            return Err(violation(ViolationReason::TooLong { len, max }));
        }
        if def.rule == Some(FieldRule::GenericName) && !is_generic_name(text) {
            return Err(violation(ViolationReason::InvalidCharacters));
        }
    }
    Ok(())
}

/// Whether `value` is acceptable as a generic name
pub fn is_generic_name(value: &str) -> bool {
    !value.contains(GENERIC_NAME_FORBIDDEN)
}
