//! Product records and their table columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::{CellDisplay, CellFormat, CellTone, ColumnDef, RowId, TableRow, TableSchema};

use super::options::{STATUS_ACTIVE, STATUS_DISCONTINUED, STATUS_INACTIVE, STATUS_LOW_STOCK};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RowId,
    pub code: String,
    pub description: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub status: Option<String>,
    pub unit: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub min_stock: i64,
    pub updated_date: Option<NaiveDate>,
}

impl Product {
    /// Status with the implicit default applied.
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(STATUS_ACTIVE)
    }

    /// Unknown stock counts as zero.
    pub fn is_low_stock(&self) -> bool {
        self.stock.unwrap_or(0) <= self.min_stock
    }
}

impl TableRow for Product {
    fn row_id(&self) -> RowId {
        self.id
    }
}

/// Fields for a product that does not exist yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub code: String,
    pub description: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub status: Option<String>,
    pub unit: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub min_stock: i64,
}

impl NewProduct {
    pub fn into_product(self, id: RowId, today: NaiveDate) -> Product {
        Product {
            id,
            code: self.code,
            description: self.description,
            category: self.category,
            subcategory: self.subcategory,
            status: self.status,
            unit: self.unit,
            price: self.price,
            stock: self.stock,
            min_stock: self.min_stock,
            updated_date: Some(today),
        }
    }
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub code: Option<String>,
    pub description: Option<String>,
    pub category: Option<Option<String>>,
    pub subcategory: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub unit: Option<Option<String>>,
    pub price: Option<Option<f64>>,
    pub stock: Option<Option<i64>>,
    pub min_stock: Option<i64>,
}

impl ProductPatch {
    /// Patch that overwrites every field with the values of `new`.
    pub fn replace_with(new: NewProduct) -> Self {
        Self {
            code: Some(new.code),
            description: Some(new.description),
            category: Some(new.category),
            subcategory: Some(new.subcategory),
            status: Some(new.status),
            unit: Some(new.unit),
            price: Some(new.price),
            stock: Some(new.stock),
            min_stock: Some(new.min_stock),
        }
    }

    pub fn apply(self, product: &mut Product) {
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            product.subcategory = subcategory;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(unit) = self.unit {
            product.unit = unit;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(min_stock) = self.min_stock {
            product.min_stock = min_stock;
        }
    }
}

/// Badge tone for a product status.
pub fn status_tone(status: &str) -> CellTone {
    match status {
        STATUS_ACTIVE => CellTone::Positive,
        STATUS_LOW_STOCK => CellTone::Critical,
        STATUS_INACTIVE | STATUS_DISCONTINUED => CellTone::Muted,
        _ => CellTone::Plain,
    }
}

/// Column layout of the products table.
pub fn product_columns() -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef::new("id", "ID", |p: &Product| p.id.into()),
        ColumnDef::new("code", "Code", |p: &Product| (&p.code).into()),
        ColumnDef::new("description", "Description", |p: &Product| (&p.description).into()),
        ColumnDef::new("category", "Category", |p: &Product| p.category.as_deref().into()),
        ColumnDef::new("subcategory", "Subcategory", |p: &Product| {
            p.subcategory.as_deref().into()
        }),
        ColumnDef::new("status", "Status", |p: &Product| p.status.as_deref().into()).render(
            |_, p| {
                let status = p.status_or_default();
                CellDisplay::toned(status, status_tone(status))
            },
        ),
        ColumnDef::new("unit", "Unit", |p: &Product| p.unit.as_deref().into()),
        ColumnDef::new("price", "Price", |p: &Product| p.price.into()).format(CellFormat::Currency),
        ColumnDef::new("stock", "Stock", |p: &Product| p.stock.into()).format(CellFormat::Count),
        ColumnDef::new("min_stock", "Min Stock", |p: &Product| p.min_stock.into())
            .format(CellFormat::Count)
            .searchable(false),
        ColumnDef::new("updated_date", "Updated", |p: &Product| p.updated_date.into())
            .format(CellFormat::Date)
            .searchable(false),
    ]
}

/// Schema of the products table.
pub fn product_schema() -> TableSchema<Product> {
    // Keys above are distinct literals.
    TableSchema::new(product_columns()).unwrap_or_else(|err| unreachable!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 7,
            code: "P-007".to_owned(),
            description: "Stapler".to_owned(),
            category: Some("Office".to_owned()),
            subcategory: None,
            status: None,
            unit: Some("Unit".to_owned()),
            price: Some(12.5),
            stock: Some(3),
            min_stock: 5,
            updated_date: None,
        }
    }

    #[test]
    fn test_missing_status_renders_as_active() {
        let schema = product_schema();
        let status = schema.column("status".into()).expect("status column");

        let display = status.display(&product());
        assert_eq!(display.text, STATUS_ACTIVE);
        assert_eq!(display.tone, CellTone::Positive);
    }

    #[test]
    fn test_low_stock_treats_unknown_as_zero() {
        let mut p = product();
        assert!(p.is_low_stock());

        p.stock = Some(20);
        assert!(!p.is_low_stock());

        p.stock = None;
        p.min_stock = 0;
        assert!(p.is_low_stock());
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut p = product();
        ProductPatch {
            description: Some("Heavy stapler".to_owned()),
            category: Some(None),
            ..ProductPatch::default()
        }
        .apply(&mut p);

        assert_eq!(p.description, "Heavy stapler");
        assert_eq!(p.category, None);
        assert_eq!(p.code, "P-007");
        assert_eq!(p.price, Some(12.5));
    }

    #[test]
    fn test_price_and_stock_are_humanized() {
        let schema = product_schema();
        let p = Product {
            price: Some(1999.0),
            stock: Some(12_000),
            ..product()
        };

        let price = schema.column("price".into()).expect("price column");
        let stock = schema.column("stock".into()).expect("stock column");
        assert_eq!(price.display(&p).text, "$1,999.00");
        assert_eq!(stock.display(&p).text, "12,000");
    }
}
