use stockroom_business::Config;
use stockroom_business::form::{FormValues, product_form_schema};
use stockroom_business::inventory::{
    DynamicOptions, InventoryStore, MemoryStore, NewProduct, OptionField, Product, ProductPatch,
    StockRow, product_schema, stock_schema,
};
use stockroom_business::table::{RowId, TableActions, TableConfig, TableSchema};
use stockroom_business::{FormError, FormSchema};

use crate::pages::Page;
use crate::widgets::EntityTableState;

/// Whether the product form creates or edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RowId),
}

/// Open product form window.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub mode: FormMode,
    pub values: FormValues,
    pub errors: Option<FormError>,
}

/// Text inputs and last outcome of the options page.
#[derive(Debug, Clone, Default)]
pub struct OptionsPageState {
    pub categories: String,
    pub units: String,
    pub statuses: String,
    pub message: Option<Result<String, String>>,
}

impl OptionsPageState {
    pub fn input_mut(&mut self, field: OptionField) -> &mut String {
        match field {
            OptionField::Categories => &mut self.categories,
            OptionField::Units => &mut self.units,
            OptionField::Statuses => &mut self.statuses,
        }
    }
}

/// The main application state.
pub struct State {
    pub config: Config,
    pub store: Box<dyn InventoryStore>,
    pub options: DynamicOptions,
    pub page: Page,
    pub products_table: EntityTableState,
    pub stock_table: EntityTableState,
    pub product_form: Option<ProductForm>,
    pub pending_delete: Option<RowId>,
    pub options_page: OptionsPageState,
    /// Last store error, shown above the products table.
    pub error: Option<String>,
    pub product_schema: TableSchema<Product>,
    pub stock_schema: TableSchema<StockRow>,
    pub form_schema: FormSchema,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl State {
    pub fn new(config: Config) -> Self {
        let store = if config.seed_demo_data() {
            MemoryStore::demo()
        } else {
            MemoryStore::new()
        };
        Self::with_store(config, Box::new(store))
    }

    pub fn with_store(config: Config, store: Box<dyn InventoryStore>) -> Self {
        Self {
            config,
            store,
            options: DynamicOptions::default(),
            page: Page::default(),
            products_table: EntityTableState::new(),
            stock_table: EntityTableState::new(),
            product_form: None,
            pending_delete: None,
            options_page: OptionsPageState::default(),
            error: None,
            product_schema: product_schema(),
            stock_schema: stock_schema(),
            form_schema: product_form_schema(),
        }
    }

    /// Demo data on a given page, for tests.
    pub fn test(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn products_table_config(&self) -> TableConfig {
        self.config
            .table_config("Products", "Add product", TableActions::all())
    }

    pub fn stock_table_config(&self) -> TableConfig {
        self.config
            .table_config("Stock by warehouse", "Add", TableActions::default())
    }

    pub fn open_create_form(&mut self) {
        self.product_form = Some(ProductForm {
            mode: FormMode::Create,
            values: FormValues::new(),
            errors: None,
        });
    }

    pub fn open_edit_form(&mut self, id: RowId) {
        let Some(product) = self.store.products().iter().find(|p| p.id == id) else {
            log::warn!("Edit requested for unknown product {id}");
            return;
        };
        self.product_form = Some(ProductForm {
            mode: FormMode::Edit(id),
            values: FormValues::from_product(product),
            errors: None,
        });
    }

    pub fn close_form(&mut self) {
        self.product_form = None;
    }

    /// Validates and stores the open form. The form stays open on failure.
    pub fn submit_form(&mut self) {
        let Some(form) = self.product_form.as_mut() else {
            return;
        };

        let new = match NewProduct::from_form(&form.values) {
            Ok(new) => new,
            Err(errors) => {
                form.errors = Some(errors);
                return;
            }
        };

        let result = match form.mode {
            FormMode::Create => self.store.create_product(new),
            FormMode::Edit(id) => self.store.update_product(id, ProductPatch::replace_with(new)),
        };

        match result {
            Ok(_) => {
                self.error = None;
                self.product_form = None;
            }
            Err(err) => {
                log::warn!("Saving product failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.store.delete_product(id) {
            Ok(_) => self.error = None,
            Err(err) => {
                log::warn!("Deleting product failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn add_option(&mut self, field: OptionField) {
        let input = self.options_page.input_mut(field);
        let value = std::mem::take(input);
        let message = match self.options.add(field, &value) {
            Ok(()) => Ok(format!("Added \"{}\" to {field}", value.trim())),
            Err(err) => {
                log::warn!("{err}");
                *self.options_page.input_mut(field) = value;
                Err(err.to_string())
            }
        };
        self.options_page.message = Some(message);
    }

    pub fn remove_option(&mut self, field: OptionField, value: &str) {
        let message = match self.options.remove(field, value) {
            Ok(()) => Ok(format!("Removed \"{value}\" from {field}")),
            Err(err) => {
                log::warn!("{err}");
                Err(err.to_string())
            }
        };
        self.options_page.message = Some(message);
    }
}
