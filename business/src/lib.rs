//! Business logic for the stockroom app: the data-table engine, the
//! inventory domain it displays, and form validation. No UI code lives here.

pub mod config;
pub mod error;
pub mod form;
pub mod inventory;
pub mod table;

pub use config::Config;
pub use error::{FormError, OptionsError, StoreError, TableError};
pub use form::{FieldKind, FormField, FormSchema, FormValues, product_form_schema};
