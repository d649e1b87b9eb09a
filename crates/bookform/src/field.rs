// File: bookform/src/field.rs
// Purpose: Field presentation state and the field -> trigger table

use bookform_validation::{FieldName, Rule};

/// Visual/textual state shown for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// DOM event kinds that drive validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Raw input (every keystroke)
    Input,
    /// Committed change (e.g. a new selection)
    Change,
}

impl EventKind {
    /// Event type name as registered on the DOM
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Input => "input",
            EventKind::Change => "change",
        }
    }
}

/// One row of the dispatch table
#[derive(Debug, Clone, Copy)]
pub struct FieldBinding {
    pub field: FieldName,
    /// Event that triggers live validation of this field
    pub trigger: EventKind,
}

impl FieldBinding {
    /// The field's rule, as defined by `FieldName::rule`
    pub fn rule(&self) -> Rule {
        self.field.rule()
    }
}

/// Dispatch table in form order. Adding a field means adding a row here.
pub const FIELD_BINDINGS: [FieldBinding; 5] = [
    FieldBinding {
        field: FieldName::Title,
        trigger: EventKind::Input,
    },
    FieldBinding {
        field: FieldName::Author,
        trigger: EventKind::Input,
    },
    FieldBinding {
        field: FieldName::Genre,
        trigger: EventKind::Change,
    },
    FieldBinding {
        field: FieldName::Rating,
        trigger: EventKind::Input,
    },
    FieldBinding {
        field: FieldName::Review,
        trigger: EventKind::Input,
    },
];

/// Looks up the binding row for a field
pub fn binding(field: FieldName) -> &'static FieldBinding {
    // FieldName::ALL and FIELD_BINDINGS share the same order
    match field {
        FieldName::Title => &FIELD_BINDINGS[0],
        FieldName::Author => &FIELD_BINDINGS[1],
        FieldName::Genre => &FIELD_BINDINGS[2],
        FieldName::Rating => &FIELD_BINDINGS[3],
        FieldName::Review => &FIELD_BINDINGS[4],
    }
}
