use std::collections::BTreeMap;

use thiserror::Error;

use crate::inventory::OptionField;
use crate::table::RowId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Table schema has no columns")]
    EmptySchema,
    #[error("Duplicate column key: {0}")]
    DuplicateColumn(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Option value must not be empty")]
    Empty,
    #[error("{field} already contains \"{value}\"")]
    Duplicate { field: OptionField, value: String },
    #[error("\"{value}\" is a built-in {field} option and cannot be removed")]
    Protected { field: OptionField, value: String },
    #[error("{field} has no option \"{value}\"")]
    NotFound { field: OptionField, value: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(RowId),
    #[error("Product code already in use: {0}")]
    DuplicateCode(String),
    #[error("Invalid product: {0}")]
    Invalid(String),
}

/// Validation failure for a submitted form, keyed by field name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Form has {} invalid field(s)", .0.len())]
pub struct FormError(pub BTreeMap<&'static str, String>);

impl FormError {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}
