mod alerts;
pub mod entity_table;
mod form_grid;
mod stat_card;

pub use alerts::alert_list;
pub use entity_table::{EntityTableState, TableEvent, entity_table};
pub use form_grid::{FormAction, form_grid};
pub use stat_card::stat_card;
