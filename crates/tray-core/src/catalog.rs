//! # Menu Catalog
//!
//! Read-only mapping from item identifier to [`MenuItem`].
//!
//! The catalog is built once at startup (from the built-in lunch menu or a
//! JSON menu file) and never changes afterwards. Orders look items up by
//! identifier and copy what they select.
//!
//! ## Menu File Format
//! ```json
//! [
//!   { "id": "chili", "name": "Spicy Black Bean Chili", "price": 400, "category": "entree" },
//!   { "id": "rice",  "name": "Lemon Rice", "description": "...", "price": 150, "category": "side" }
//! ]
//! ```
//! Prices are in cents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, MenuItem};
use crate::validation::{validate_item_id, validate_item_name, validate_price};

/// One row of a menu file: the identifier plus the item it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub item: MenuItem,
}

/// The menu.
///
/// ## Invariants
/// - Identifiers are unique and pass [`validate_item_id`]
/// - Every price is within `0..=MAX_ITEM_PRICE_CENTS`, so a full order's
///   subtotal, tax and total cannot overflow
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<String, MenuItem>,
}

impl Catalog {
    /// Builds a catalog from `(id, item)` pairs, validating every entry.
    pub fn from_items<I, S>(items: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (S, MenuItem)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();

        for (id, item) in items {
            let id = id.into().trim().to_string();
            validate_item_id(&id)?;
            validate_item_name(&item.name)?;
            validate_price(item.price)?;

            if map.contains_key(&id) {
                return Err(CoreError::DuplicateItem(id));
            }
            map.insert(id, item);
        }

        Ok(Catalog { items: map })
    }

    /// Parses a JSON menu file (an array of [`CatalogEntry`]).
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;

        Self::from_items(entries.into_iter().map(|e| (e.id, e.item)))
    }

    /// The built-in lunch menu.
    pub fn lunch_menu() -> Self {
        use Category::*;

        let rows: [(&str, &str, &str, i64, Category); 11] = [
            (
                "cauliflower",
                "Cauliflower",
                "Whole cauliflower, brined, roasted, and deep fried",
                700,
                Entree,
            ),
            (
                "chili",
                "Spicy Black Bean Chili",
                "Black beans, red peppers, and onions, topped with cheese",
                400,
                Entree,
            ),
            (
                "pasta",
                "Mushroom Pasta",
                "Penne pasta, mushrooms, basil, cherry tomatoes, garlic and olive oil",
                550,
                Entree,
            ),
            (
                "skillet",
                "Spicy Potato Skillet",
                "Potatoes, peppers and onions with black beans and a fried egg",
                550,
                Entree,
            ),
            (
                "salad",
                "Summer Salad",
                "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
                250,
                Side,
            ),
            (
                "soup",
                "Butternut Squash Soup",
                "Roasted butternut squash, roasted peppers, chili oil",
                300,
                Side,
            ),
            (
                "potatoes",
                "Spicy Potatoes",
                "Marinated roasted potatoes with ghost pepper and lemon",
                200,
                Side,
            ),
            (
                "rice",
                "Lemon Rice",
                "Rice, lemon, peas and sliced cashews",
                150,
                Side,
            ),
            (
                "bread",
                "Lunch Roll",
                "Fresh baked roll made in house",
                50,
                Accompaniment,
            ),
            (
                "berries",
                "Mixed Berries",
                "Strawberries, blueberries, raspberries and huckleberries",
                100,
                Accompaniment,
            ),
            (
                "pickles",
                "Pickled Veggies",
                "Pickled cucumbers and carrots, made in house",
                50,
                Accompaniment,
            ),
        ];

        let items = rows
            .into_iter()
            .map(|(id, name, description, cents, category)| {
                (
                    id.to_string(),
                    MenuItem::new(name, description, Money::from_cents(cents), category),
                )
            })
            .collect();

        Catalog { items }
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.get(id)
    }

    /// Like [`get`](Self::get) but reports a miss as [`CoreError::CatalogMiss`].
    pub fn require(&self, id: &str) -> CoreResult<&MenuItem> {
        self.items
            .get(id)
            .ok_or_else(|| CoreError::CatalogMiss(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Items offered in one category, as `(id, item)` ordered by identifier.
    pub fn items_in(&self, category: Category) -> Vec<(&str, &MenuItem)> {
        self.items
            .iter()
            .filter(|(_, item)| item.category == category)
            .map(|(id, item)| (id.as_str(), item))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuItem)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn item(name: &str, cents: i64, category: Category) -> MenuItem {
        MenuItem::new(name, "", Money::from_cents(cents), category)
    }

    #[test]
    fn test_lunch_menu_has_every_category() {
        let menu = Catalog::lunch_menu();
        assert_eq!(menu.len(), 11);
        assert_eq!(menu.items_in(Category::Entree).len(), 4);
        assert_eq!(menu.items_in(Category::Side).len(), 4);
        assert_eq!(menu.items_in(Category::Accompaniment).len(), 3);
        assert_eq!(menu.get("pasta").unwrap().price.cents(), 550);
    }

    #[test]
    fn test_lunch_menu_passes_validation() {
        let menu = Catalog::lunch_menu();
        let rebuilt = Catalog::from_items(
            menu.iter().map(|(id, item)| (id.to_string(), item.clone())),
        )
        .unwrap();
        assert_eq!(rebuilt.len(), menu.len());
    }

    #[test]
    fn test_items_in_is_ordered_by_id() {
        let menu = Catalog::lunch_menu();
        let ids: Vec<&str> = menu
            .items_in(Category::Side)
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["potatoes", "rice", "salad", "soup"]);
    }

    #[test]
    fn test_require_reports_miss() {
        let menu = Catalog::lunch_menu();
        assert!(menu.require("chili").is_ok());
        assert!(matches!(
            menu.require("tofu"),
            Err(CoreError::CatalogMiss(id)) if id == "tofu"
        ));
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let result = Catalog::from_items([
            ("soda", item("Soda", 100, Category::Accompaniment)),
            ("soda", item("Diet Soda", 100, Category::Accompaniment)),
        ]);
        assert!(matches!(result, Err(CoreError::DuplicateItem(id)) if id == "soda"));
    }

    #[test]
    fn test_from_items_rejects_negative_price() {
        let result = Catalog::from_items([("refund", item("Refund", -100, Category::Side))]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::MustNotBeNegative { .. }))
        ));
    }

    #[test]
    fn test_from_items_allows_free_item() {
        let menu = Catalog::from_items([("water", item("Water", 0, Category::Accompaniment))])
            .unwrap();
        assert!(menu.get("water").unwrap().price.is_zero());
    }

    #[test]
    fn test_from_items_rejects_huge_prices() {
        let huge = i64::MAX / 2 + 1;
        let result = Catalog::from_items([
            ("a", item("Gold Plate", huge, Category::Entree)),
            ("b", item("Gold Bowl", huge, Category::Side)),
        ]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        let json = format!(
            r#"[{{"id": "a", "name": "Gold Plate", "price": {huge}, "category": "entree"}}]"#
        );
        assert!(Catalog::from_json(&json).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "burger", "name": "Burger", "price": 500, "category": "entree"},
            {"id": "fries", "name": "Fries", "description": "Crispy", "price": 200, "category": "side"}
        ]"#;
        let menu = Catalog::from_json(json).unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.get("fries").unwrap().description, "Crispy");
        assert_eq!(menu.get("burger").unwrap().category, Category::Entree);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CoreError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id": "x", "name": "X", "price": 1, "category": "dessert"}]"#),
            Err(CoreError::InvalidCatalog(_))
        ));
    }
}
