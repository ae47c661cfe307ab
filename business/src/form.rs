//! Declarative form layout on a 12-unit grid, plus validation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::FormError;
use crate::inventory::{NewProduct, OptionField, Product};

/// Width of one form row in grid units.
pub const GRID_UNITS: u8 = 12;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Whole numbers only.
    Integer,
    /// `YYYY-MM-DD`
    Date,
    Select(OptionField),
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    #[builder(default = FieldKind::Text)]
    pub kind: FieldKind,
    #[builder(default)]
    pub required: bool,
    pub placeholder: Option<&'static str>,
    /// Clamped to `1..=12` by [`FormSchema::new`].
    #[builder(default = GRID_UNITS)]
    pub col_span: u8,
    #[builder(default)]
    pub order: u32,
}

/// Raw text of each field, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Trimmed value, `None` when blank.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        Some(self.get(name).trim()).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    /// Editable buffer for a field, created empty on first access.
    pub fn get_mut(&mut self, name: &'static str) -> &mut String {
        self.0.entry(name).or_default()
    }

    pub fn from_product(product: &Product) -> Self {
        let mut values = Self::new();
        values.set("code", &product.code);
        values.set("description", &product.description);
        values.set("category", product.category.clone().unwrap_or_default());
        values.set("subcategory", product.subcategory.clone().unwrap_or_default());
        values.set("status", product.status.clone().unwrap_or_default());
        values.set("unit", product.unit.clone().unwrap_or_default());
        values.set(
            "price",
            product.price.map(|p| p.to_string()).unwrap_or_default(),
        );
        values.set(
            "stock",
            product.stock.map(|s| s.to_string()).unwrap_or_default(),
        );
        values.set("min_stock", product.min_stock.to_string());
        values
    }
}

/// Ordered set of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FormField>,
}

impl FormSchema {
    /// Sorts fields by `order`, keeping declaration order for ties.
    pub fn new(mut fields: Vec<FormField>) -> Self {
        fields.sort_by_key(|f| f.order);
        for field in &mut fields {
            field.col_span = field.col_span.clamp(1, GRID_UNITS);
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Packs fields into rows no wider than [`GRID_UNITS`].
    pub fn rows(&self) -> Vec<Vec<&FormField>> {
        let mut rows: Vec<Vec<&FormField>> = Vec::new();
        let mut width = 0;
        for field in &self.fields {
            if rows.is_empty() || width + field.col_span > GRID_UNITS {
                rows.push(Vec::new());
                width = 0;
            }
            width += field.col_span;
            if let Some(row) = rows.last_mut() {
                row.push(field);
            }
        }
        rows
    }

    /// Checks every field, collecting one message per invalid field.
    pub fn validate(&self, values: &FormValues) -> Result<(), FormError> {
        let errors: BTreeMap<_, _> = self
            .fields
            .iter()
            .filter_map(|field| check_field(field, values.get(field.name).trim()).map(|msg| (field.name, msg)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormError(errors))
        }
    }
}

fn check_field(field: &FormField, value: &str) -> Option<String> {
    if value.is_empty() {
        return field
            .required
            .then(|| format!("{} is required", field.label));
    }

    let valid = match field.kind {
        FieldKind::Text | FieldKind::Select(_) => true,
        FieldKind::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
        FieldKind::Integer => value.parse::<i64>().is_ok(),
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).is_ok(),
    };
    if valid {
        return None;
    }

    Some(match field.kind {
        FieldKind::Integer => format!("{} must be a whole number", field.label),
        FieldKind::Date => format!("{} must be a date (YYYY-MM-DD)", field.label),
        _ => format!("{} must be a number", field.label),
    })
}

/// Create/edit form for products.
pub fn product_form_schema() -> FormSchema {
    FormSchema::new(vec![
        FormField::builder()
            .name("code")
            .label("Code")
            .required(true)
            .placeholder("OF-001")
            .col_span(4)
            .order(1)
            .build(),
        FormField::builder()
            .name("description")
            .label("Description")
            .required(true)
            .col_span(8)
            .order(2)
            .build(),
        FormField::builder()
            .name("category")
            .label("Category")
            .kind(FieldKind::Select(OptionField::Categories))
            .col_span(4)
            .order(3)
            .build(),
        FormField::builder()
            .name("subcategory")
            .label("Subcategory")
            .col_span(4)
            .order(4)
            .build(),
        FormField::builder()
            .name("status")
            .label("Status")
            .kind(FieldKind::Select(OptionField::Statuses))
            .col_span(4)
            .order(5)
            .build(),
        FormField::builder()
            .name("unit")
            .label("Unit")
            .kind(FieldKind::Select(OptionField::Units))
            .col_span(4)
            .order(6)
            .build(),
        FormField::builder()
            .name("price")
            .label("Price")
            .kind(FieldKind::Number)
            .placeholder("0.00")
            .col_span(4)
            .order(7)
            .build(),
        FormField::builder()
            .name("stock")
            .label("Stock")
            .kind(FieldKind::Integer)
            .col_span(2)
            .order(8)
            .build(),
        FormField::builder()
            .name("min_stock")
            .label("Min Stock")
            .kind(FieldKind::Integer)
            .placeholder("0")
            .col_span(2)
            .order(9)
            .build(),
    ])
}

impl NewProduct {
    /// Validates `values` against [`product_form_schema`] and converts them.
    pub fn from_form(values: &FormValues) -> Result<Self, FormError> {
        product_form_schema().validate(values)?;

        let text = |name: &str| values.non_empty(name).map(str::to_owned);
        Ok(Self {
            code: values.get("code").trim().to_owned(),
            description: values.get("description").trim().to_owned(),
            category: text("category"),
            subcategory: text("subcategory"),
            status: text("status"),
            unit: text("unit"),
            price: values.non_empty("price").and_then(|v| v.parse().ok()),
            stock: values.non_empty("stock").and_then(|v| v.parse().ok()),
            min_stock: values
                .non_empty("min_stock")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        })
    }
}
