//! Pages selectable from the top bar:
//! - `dashboard_page`: stats, alerts and breakdowns
//! - `products_page`: product table with create/edit/delete
//! - `stock_page`: stock per warehouse
//! - `options_page`: user-defined categories, units and statuses

mod dashboard_page;
mod options_page;
mod products_page;
mod stock_page;

pub use dashboard_page::dashboard_page;
pub use options_page::options_page;
pub use products_page::products_page;
pub use stock_page::stock_page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    Stock,
    Options,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Products, Self::Stock, Self::Options];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Stock => "Stock",
            Self::Options => "Options",
        }
    }
}
