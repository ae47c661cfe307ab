//! Per-warehouse stock levels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::table::{
    CellDisplay, CellFormat, CellTone, CellValue, ColumnDef, RowId, TableRow, TableSchema, humanize,
};

use super::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: RowId,
    pub name: String,
    pub location: Option<String>,
    pub manager: Option<String>,
}

impl TableRow for Warehouse {
    fn row_id(&self) -> RowId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseStock {
    pub id: RowId,
    pub product_id: RowId,
    pub warehouse_id: RowId,
    pub current: i64,
    pub minimum: i64,
    /// Zero means no upper bound.
    pub maximum: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockLevel {
    Empty,
    Low,
    Normal,
    Over,
}

impl StockLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::Over => "Over",
        }
    }

    pub fn tone(self) -> CellTone {
        match self {
            Self::Empty => CellTone::Critical,
            Self::Low | Self::Over => CellTone::Warning,
            Self::Normal => CellTone::Positive,
        }
    }
}

impl WarehouseStock {
    pub fn level(&self) -> StockLevel {
        if self.current <= 0 {
            StockLevel::Empty
        } else if self.current <= self.minimum {
            StockLevel::Low
        } else if self.maximum > 0 && self.current > self.maximum {
            StockLevel::Over
        } else {
            StockLevel::Normal
        }
    }
}

/// A stock entry joined with the names it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    pub stock: WarehouseStock,
    pub product: String,
    pub warehouse: String,
}

impl TableRow for StockRow {
    fn row_id(&self) -> RowId {
        self.stock.id
    }
}

/// Joins stock entries with product descriptions and warehouse names.
///
/// Dangling references are shown as `#<id>`.
pub fn stock_rows(
    products: &[Product],
    warehouses: &[Warehouse],
    stock: &[WarehouseStock],
) -> Vec<StockRow> {
    let product_names: HashMap<RowId, &str> = products
        .iter()
        .map(|p| (p.id, p.description.as_str()))
        .collect();
    let warehouse_names: HashMap<RowId, &str> = warehouses
        .iter()
        .map(|w| (w.id, w.name.as_str()))
        .collect();

    let name = |names: &HashMap<RowId, &str>, id: RowId| {
        names
            .get(&id)
            .map_or_else(|| format!("#{id}"), |n| (*n).to_owned())
    };

    stock
        .iter()
        .map(|s| StockRow {
            stock: s.clone(),
            product: name(&product_names, s.product_id),
            warehouse: name(&warehouse_names, s.warehouse_id),
        })
        .collect()
}

pub fn stock_schema() -> TableSchema<StockRow> {
    let columns = vec![
        ColumnDef::new("product", "Product", |r: &StockRow| (&r.product).into()),
        ColumnDef::new("warehouse", "Warehouse", |r: &StockRow| (&r.warehouse).into()),
        ColumnDef::new("current", "Current", |r: &StockRow| r.stock.current.into())
            .format(CellFormat::Count)
            .render(|value, r| {
                let level = r.stock.level();
                CellDisplay::toned(
                    humanize(value, CellFormat::Count),
                    level.tone(),
                )
            }),
        ColumnDef::new("minimum", "Minimum", |r: &StockRow| r.stock.minimum.into())
            .format(CellFormat::Count)
            .searchable(false),
        ColumnDef::new("maximum", "Maximum", |r: &StockRow| {
            if r.stock.maximum > 0 {
                r.stock.maximum.into()
            } else {
                CellValue::Null
            }
        })
        .format(CellFormat::Count)
        .searchable(false),
        ColumnDef::new("level", "Level", |r: &StockRow| r.stock.level().label().into()).render(
            |_, r| {
                let level = r.stock.level();
                CellDisplay::toned(level.label(), level.tone())
            },
        ),
    ];
    TableSchema::new(columns).unwrap_or_else(|err| unreachable!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(current: i64, minimum: i64, maximum: i64) -> WarehouseStock {
        WarehouseStock {
            id: 1,
            product_id: 1,
            warehouse_id: 1,
            current,
            minimum,
            maximum,
        }
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(entry(0, 5, 50).level(), StockLevel::Empty);
        assert_eq!(entry(-2, 5, 50).level(), StockLevel::Empty);
        assert_eq!(entry(5, 5, 50).level(), StockLevel::Low);
        assert_eq!(entry(6, 5, 50).level(), StockLevel::Normal);
        assert_eq!(entry(51, 5, 50).level(), StockLevel::Over);
        assert_eq!(entry(5000, 5, 0).level(), StockLevel::Normal);
    }

    #[test]
    fn test_unknown_references_show_ids() {
        let warehouses = vec![Warehouse {
            id: 1,
            name: "Main".to_owned(),
            location: None,
            manager: None,
        }];
        let stock = vec![WarehouseStock {
            product_id: 42,
            ..entry(3, 1, 0)
        }];

        let rows = stock_rows(&[], &warehouses, &stock);
        assert_eq!(rows[0].product, "#42");
        assert_eq!(rows[0].warehouse, "Main");
    }

    #[test]
    fn test_level_column_is_toned() {
        let schema = stock_schema();
        let row = StockRow {
            stock: entry(0, 2, 0),
            product: "Paper".to_owned(),
            warehouse: "Main".to_owned(),
        };
        let level = schema.column("level".into()).expect("level column");
        assert_eq!(level.display(&row), CellDisplay::toned("Empty", CellTone::Critical));

        let maximum = schema.column("maximum".into()).expect("maximum column");
        assert_eq!(maximum.display(&row).text, "-");
    }
}
