//! Product and stock persistence seam.
//!
//! The UI talks to an [`InventoryStore`] only; [`MemoryStore`] backs the
//! desktop app and the tests.

use chrono::{NaiveDate, Utc};

use crate::error::StoreError;
use crate::table::RowId;

use super::options::{STATUS_ACTIVE, STATUS_DISCONTINUED, STATUS_INACTIVE};
use super::{NewProduct, Product, ProductPatch, Warehouse, WarehouseStock};

pub type StoreResult<T> = Result<T, StoreError>;

pub trait InventoryStore {
    fn products(&self) -> &[Product];

    fn create_product(&mut self, new: NewProduct) -> StoreResult<Product>;

    fn update_product(&mut self, id: RowId, patch: ProductPatch) -> StoreResult<Product>;

    fn delete_product(&mut self, id: RowId) -> StoreResult<Product>;

    fn warehouses(&self) -> &[Warehouse];

    fn warehouse_stock(&self) -> &[WarehouseStock];
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
    warehouses: Vec<Warehouse>,
    stock: Vec<WarehouseStock>,
    next_id: RowId,
}

fn validate(code: &str, description: &str) -> StoreResult<()> {
    if code.trim().is_empty() {
        return Err(StoreError::Invalid("code is required".to_owned()));
    }
    if description.trim().is_empty() {
        return Err(StoreError::Invalid("description is required".to_owned()));
    }
    Ok(())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Store seeded with a small demo inventory.
    pub fn demo() -> Self {
        let mut store = Self::new();
        let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d);

        #[rustfmt::skip]
        let seed = [
            ("OF-001", "Copy paper A4", "Office", Some("Paper"), STATUS_ACTIVE, "Ream", 4.75, Some(120), 20, date(3, 2)),
            ("OF-002", "Ballpoint pens (blue)", "Office", Some("Writing"), STATUS_ACTIVE, "Box", 6.5, Some(8), 10, date(3, 4)),
            ("OF-003", "Stapler", "Office", None, STATUS_ACTIVE, "Unit", 12.9, Some(15), 5, date(2, 18)),
            ("EL-001", "USB-C charger 65W", "Electronics", Some("Power"), STATUS_ACTIVE, "Unit", 39.0, Some(24), 6, date(1, 30)),
            ("EL-002", "Wireless mouse", "Electronics", Some("Peripherals"), STATUS_ACTIVE, "Unit", 18.5, Some(3), 5, date(3, 10)),
            ("EL-003", "HDMI cable 2m", "Electronics", Some("Cables"), STATUS_INACTIVE, "Unit", 7.25, Some(40), 10, date(12, 1)),
            ("FU-001", "Office chair", "Furniture", None, STATUS_ACTIVE, "Unit", 149.0, Some(6), 2, date(11, 20)),
            ("FU-002", "Standing desk", "Furniture", None, STATUS_DISCONTINUED, "Unit", 420.0, Some(0), 1, date(10, 5)),
            ("TL-001", "Screwdriver set", "Tools", Some("Hand tools"), STATUS_ACTIVE, "Pack", 24.0, Some(11), 4, date(2, 2)),
            ("CO-001", "Hand sanitizer", "Consumables", Some("Hygiene"), STATUS_ACTIVE, "Liter", 5.4, None, 10, None),
            ("CO-002", "Coffee beans", "Consumables", Some("Kitchen"), STATUS_ACTIVE, "Kilogram", 16.8, Some(9), 3, date(3, 12)),
            ("CO-003", "Paper towels", "Consumables", None, STATUS_ACTIVE, "Pack", 3.1, Some(2500), 200, date(3, 1)),
        ];
        for (code, description, category, subcategory, status, unit, price, stock, min_stock, updated) in seed {
            let id = store.allocate_id();
            store.products.push(Product {
                id,
                code: code.to_owned(),
                description: description.to_owned(),
                category: Some(category.to_owned()),
                subcategory: subcategory.map(str::to_owned),
                status: Some(status.to_owned()),
                unit: Some(unit.to_owned()),
                price: Some(price),
                stock,
                min_stock,
                updated_date: updated,
            });
        }

        store.warehouses = vec![
            Warehouse {
                id: 1,
                name: "Main warehouse".to_owned(),
                location: Some("Building A".to_owned()),
                manager: Some("R. Ortega".to_owned()),
            },
            Warehouse {
                id: 2,
                name: "Front office".to_owned(),
                location: Some("Reception".to_owned()),
                manager: None,
            },
        ];

        let levels = [
            (1, 1, 100, 20, 300),
            (1, 2, 20, 5, 40),
            (2, 1, 8, 10, 0),
            (5, 2, 0, 2, 10),
            (9, 1, 11, 4, 10),
            (12, 1, 2500, 200, 2000),
        ];
        store.stock = levels
            .into_iter()
            .zip(1..)
            .map(|((product_id, warehouse_id, current, minimum, maximum), id)| WarehouseStock {
                id,
                product_id,
                warehouse_id,
                current,
                minimum,
                maximum,
            })
            .collect();

        log::info!(
            "Seeded demo inventory: {} products, {} warehouses",
            store.products.len(),
            store.warehouses.len()
        );
        store
    }

    fn allocate_id(&mut self) -> RowId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    fn ensure_unique_code(&self, code: &str, except: Option<RowId>) -> StoreResult<()> {
        let taken = self
            .products
            .iter()
            .any(|p| Some(p.id) != except && p.code.eq_ignore_ascii_case(code));
        if taken {
            return Err(StoreError::DuplicateCode(code.to_owned()));
        }
        Ok(())
    }

    fn position(&self, id: RowId) -> StoreResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))
    }
}

impl InventoryStore for MemoryStore {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn create_product(&mut self, new: NewProduct) -> StoreResult<Product> {
        validate(&new.code, &new.description)?;
        self.ensure_unique_code(&new.code, None)?;

        let id = self.allocate_id();
        let product = new.into_product(id, Utc::now().date_naive());
        self.products.push(product.clone());
        log::info!("Created product {id} ({})", product.code);
        Ok(product)
    }

    fn update_product(&mut self, id: RowId, patch: ProductPatch) -> StoreResult<Product> {
        let index = self.position(id)?;

        let mut updated = self.products[index].clone();
        patch.apply(&mut updated);
        validate(&updated.code, &updated.description)?;
        self.ensure_unique_code(&updated.code, Some(id))?;
        updated.updated_date = Some(Utc::now().date_naive());

        self.products[index] = updated.clone();
        log::info!("Updated product {id}");
        Ok(updated)
    }

    fn delete_product(&mut self, id: RowId) -> StoreResult<Product> {
        let index = self.position(id)?;
        let removed = self.products.remove(index);
        self.stock.retain(|s| s.product_id != id);
        log::info!("Deleted product {id} ({})", removed.code);
        Ok(removed)
    }

    fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    fn warehouse_stock(&self) -> &[WarehouseStock] {
        &self.stock
    }
}
