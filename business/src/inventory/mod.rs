//! Inventory domain: products, warehouse stock, options and their stores.

pub mod alerts;
pub mod options;
pub mod product;
pub mod stats;
pub mod stock;
pub mod store;

pub use alerts::{AlertKind, InventoryAlert, inventory_alerts};
pub use options::{
    CustomOptions, DynamicOption, DynamicOptions, OptionField, STATUS_ACTIVE, STATUS_DISCONTINUED,
    STATUS_INACTIVE, STATUS_LOW_STOCK,
};
pub use product::{NewProduct, Product, ProductPatch, product_schema, status_tone};
pub use stats::{InventoryStats, ProductStats, UNCATEGORIZED};
pub use stock::{StockLevel, StockRow, Warehouse, WarehouseStock, stock_rows, stock_schema};
pub use store::{InventoryStore, MemoryStore, StoreResult};
