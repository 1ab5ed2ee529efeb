//! Scope 3 mitigation categories and the per-category reduction sliders.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Percentage, ValidationError};

/// GHG Protocol Scope 3 category names, indexed by `number - 1`.
const CATEGORY_NAMES: [&str; 15] = [
    "Purchased goods and services",
    "Capital goods",
    "Fuel- and energy-related activities",
    "Upstream transportation and distribution",
    "Waste generated in operations",
    "Business travel",
    "Employee commuting",
    "Upstream leased assets",
    "Downstream transportation and distribution",
    "Processing of sold products",
    "Use of sold products",
    "End-of-life treatment of sold products",
    "Downstream leased assets",
    "Franchises",
    "Investments",
];

/// One of the 15 Scope 3 categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scope3Category(u8);

impl Scope3Category {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 15;

    pub fn new(number: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(ValidationError::out_of_range(
                "scope3_category",
                Self::MIN as i32,
                Self::MAX as i32,
                number as i32,
            ));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        CATEGORY_NAMES[(self.0 - 1) as usize]
    }

    /// Short label used on slider captions.
    pub fn short_label(&self) -> String {
        format!("Category {}", self.0)
    }

    /// Iterates all categories in number order.
    pub fn all() -> impl Iterator<Item = Scope3Category> {
        (Self::MIN..=Self::MAX).map(Scope3Category)
    }
}

impl TryFrom<u8> for Scope3Category {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scope3Category> for u8 {
    fn from(category: Scope3Category) -> Self {
        category.0
    }
}

impl fmt::Display for Scope3Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.short_label(), self.name())
    }
}

/// A category with its reduction target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReduction {
    pub category: Scope3Category,
    pub reduction: Percentage,
}

impl CategoryReduction {
    /// Caption shown next to the slider, e.g. `Category 1: 30% reduction`.
    pub fn caption(&self) -> String {
        format!("{}: {} reduction", self.category.short_label(), self.reduction)
    }
}

/// Categories currently enabled on the simulation view, in the order added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCategories {
    entries: Vec<CategoryReduction>,
}

impl ActiveCategories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables a category at 0% reduction.
    ///
    /// # Errors
    ///
    /// `ValidationError::Duplicate` if the category is already enabled.
    pub fn add(&mut self, category: Scope3Category) -> Result<&CategoryReduction, ValidationError> {
        if self.contains(category) {
            return Err(ValidationError::duplicate(
                "active_categories",
                category.short_label(),
            ));
        }
        self.entries.push(CategoryReduction {
            category,
            reduction: Percentage::ZERO,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Disables a category. Returns false if it was not enabled.
    pub fn remove(&mut self, category: Scope3Category) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.category != category);
        self.entries.len() != before
    }

    /// Moves a category's slider. Returns `None` if the category is not enabled.
    pub fn set_reduction(
        &mut self,
        category: Scope3Category,
        reduction: Percentage,
    ) -> Option<&CategoryReduction> {
        let entry = self.entries.iter_mut().find(|e| e.category == category)?;
        entry.reduction = reduction;
        Some(entry)
    }

    pub fn contains(&self, category: Scope3Category) -> bool {
        self.entries.iter().any(|e| e.category == category)
    }

    pub fn get(&self, category: Scope3Category) -> Option<&CategoryReduction> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn reductions(&self) -> Vec<Percentage> {
        self.entries.iter().map(|e| e.reduction).collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryReduction> {
        self.entries.iter()
    }
}
