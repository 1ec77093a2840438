//! # Menu Commands
//!
//! Lists what the screen can offer for each category.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;
use tray_core::{format_currency, Catalog, Category};

use crate::state::ConfigState;

/// One menu line.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuEntry {
    /// Identifier to send back with `entree`/`side`/`accompaniment`
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Category,
}

/// Lists menu items, optionally only those of one category.
///
/// Items come grouped in screen order (entrees, sides, accompaniments).
pub fn get_menu(
    catalog: &Catalog,
    config: &ConfigState,
    category: Option<Category>,
) -> Vec<MenuEntry> {
    debug!(?category, "get_menu command");
    let format = config.currency_format();

    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    categories
        .into_iter()
        .flat_map(|c| catalog.items_in(c))
        .map(|(id, item)| MenuEntry {
            id: id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_currency(item.price, &format),
            category: item.category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_menu_in_screen_order() {
        let menu = get_menu(&Catalog::lunch_menu(), &ConfigState::default(), None);
        assert_eq!(menu.len(), 11);
        assert_eq!(menu.first().unwrap().category, Category::Entree);
        assert_eq!(menu.last().unwrap().category, Category::Accompaniment);
    }

    #[test]
    fn test_menu_for_one_category() {
        let menu = get_menu(
            &Catalog::lunch_menu(),
            &ConfigState::default(),
            Some(Category::Accompaniment),
        );
        let ids: Vec<&str> = menu.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["berries", "bread", "pickles"]);
        assert_eq!(menu[1].price, "$0.50");
    }
}
