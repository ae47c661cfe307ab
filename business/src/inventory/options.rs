//! Dynamic categories, units and statuses.
//!
//! Built-in defaults are always present and cannot be removed. User-added
//! entries are tracked separately so an external store can persist them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_INACTIVE: &str = "Inactive";
pub const STATUS_LOW_STOCK: &str = "Low Stock";
pub const STATUS_DISCONTINUED: &str = "Discontinued";

const DEFAULT_CATEGORIES: &[&str] = &["Electronics", "Office", "Furniture", "Tools", "Consumables"];
const DEFAULT_UNITS: &[&str] = &["Unit", "Box", "Pack", "Ream", "Liter", "Kilogram"];
const DEFAULT_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_INACTIVE,
    STATUS_LOW_STOCK,
    STATUS_DISCONTINUED,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionField {
    Categories,
    Units,
    Statuses,
}

impl OptionField {
    pub const ALL: [Self; 3] = [Self::Categories, Self::Units, Self::Statuses];

    pub fn label(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Units => "Units",
            Self::Statuses => "Statuses",
        }
    }

    fn defaults(self) -> &'static [&'static str] {
        match self {
            Self::Categories => DEFAULT_CATEGORIES,
            Self::Units => DEFAULT_UNITS,
            Self::Statuses => DEFAULT_STATUSES,
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicOption {
    pub value: String,
    pub label: String,
}

impl DynamicOption {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            label: value.to_owned(),
        }
    }
}

/// User-added options only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomOptions {
    #[serde(default)]
    pub categories: Vec<DynamicOption>,
    #[serde(default)]
    pub units: Vec<DynamicOption>,
    #[serde(default)]
    pub statuses: Vec<DynamicOption>,
}

impl CustomOptions {
    fn get(&self, field: OptionField) -> &[DynamicOption] {
        match field {
            OptionField::Categories => &self.categories,
            OptionField::Units => &self.units,
            OptionField::Statuses => &self.statuses,
        }
    }
}

/// Select options for the product form, defaults first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicOptions {
    categories: Vec<DynamicOption>,
    units: Vec<DynamicOption>,
    statuses: Vec<DynamicOption>,
}

impl Default for DynamicOptions {
    fn default() -> Self {
        let build = |field: OptionField| field.defaults().iter().map(|v| DynamicOption::new(v)).collect();
        Self {
            categories: build(OptionField::Categories),
            units: build(OptionField::Units),
            statuses: build(OptionField::Statuses),
        }
    }
}

impl DynamicOptions {
    /// Defaults followed by previously saved custom entries.
    ///
    /// Saved entries that collide with existing ones are skipped.
    pub fn with_custom(custom: &CustomOptions) -> Self {
        let mut options = Self::default();
        for field in OptionField::ALL {
            for option in custom.get(field) {
                if let Err(err) = options.add(field, &option.value) {
                    log::warn!("Skipping saved {field} option: {err}");
                }
            }
        }
        options
    }

    pub fn get(&self, field: OptionField) -> &[DynamicOption] {
        match field {
            OptionField::Categories => &self.categories,
            OptionField::Units => &self.units,
            OptionField::Statuses => &self.statuses,
        }
    }

    fn get_mut(&mut self, field: OptionField) -> &mut Vec<DynamicOption> {
        match field {
            OptionField::Categories => &mut self.categories,
            OptionField::Units => &mut self.units,
            OptionField::Statuses => &mut self.statuses,
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, field: OptionField, value: &str) -> bool {
        self.get(field)
            .iter()
            .any(|opt| opt.value.to_lowercase() == value.to_lowercase())
    }

    pub fn is_default(field: OptionField, value: &str) -> bool {
        field.defaults().contains(&value)
    }

    /// Adds a trimmed option.
    pub fn add(&mut self, field: OptionField, raw: &str) -> Result<(), OptionsError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(OptionsError::Empty);
        }
        if self.contains(field, value) {
            return Err(OptionsError::Duplicate {
                field,
                value: value.to_owned(),
            });
        }

        self.get_mut(field).push(DynamicOption::new(value));
        log::info!("Added {field} option \"{value}\"");
        Ok(())
    }

    /// Removes a user-added option. Built-in defaults are protected.
    pub fn remove(&mut self, field: OptionField, value: &str) -> Result<(), OptionsError> {
        if Self::is_default(field, value) {
            return Err(OptionsError::Protected {
                field,
                value: value.to_owned(),
            });
        }

        let options = self.get_mut(field);
        let before = options.len();
        options.retain(|opt| opt.value != value);
        if options.len() == before {
            return Err(OptionsError::NotFound {
                field,
                value: value.to_owned(),
            });
        }

        log::info!("Removed {field} option \"{value}\"");
        Ok(())
    }

    /// Entries that are not built-in defaults.
    pub fn custom(&self) -> CustomOptions {
        let pick = |field: OptionField| {
            self.get(field)
                .iter()
                .filter(|opt| !Self::is_default(field, &opt.value))
                .cloned()
                .collect()
        };
        CustomOptions {
            categories: pick(OptionField::Categories),
            units: pick(OptionField::Units),
            statuses: pick(OptionField::Statuses),
        }
    }
}
