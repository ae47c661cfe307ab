use super::InventoryStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryAlert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: String,
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Dashboard alerts derived from inventory stats, most urgent first.
pub fn inventory_alerts(stats: &InventoryStats) -> Vec<InventoryAlert> {
    if stats.total_products == 0 {
        return vec![InventoryAlert {
            kind: AlertKind::Error,
            title: "Empty inventory",
            message: "No products have been registered yet.".to_owned(),
        }];
    }

    let mut alerts = Vec::new();

    if stats.low_stock > 0 {
        alerts.push(InventoryAlert {
            kind: AlertKind::Warning,
            title: "Low stock",
            message: format!(
                "{} at or below minimum stock.",
                plural(stats.low_stock, "product is", "products are")
            ),
        });
    } else {
        alerts.push(InventoryAlert {
            kind: AlertKind::Success,
            title: "Stock healthy",
            message: "All products are above their minimum stock.".to_owned(),
        });
    }

    let inactive = stats.inactive_products();
    if inactive > 0 {
        alerts.push(InventoryAlert {
            kind: AlertKind::Info,
            title: "Inactive products",
            message: format!("{} not active.", plural(inactive, "product is", "products are")),
        });
    }

    alerts
}
