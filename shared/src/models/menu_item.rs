//! Menu Item Model

use serde::{Deserialize, Serialize};

/// A dish on the menu
///
/// Created only by the boot-time seeder. `available` is stored and returned
/// but nothing filters on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Whole Naira, no minor units
    pub price: i64,
    pub description: String,
    /// Image URL, not validated
    pub image: String,
    /// Free-form tag: grill, fish, stew, swallow, rice, soup, snack, main
    pub category: String,
    pub spicy: bool,
    pub available: bool,
}

/// Insert payload for a menu item (seed catalog entries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub spicy: bool,
    pub available: bool,
}

impl MenuItemCreate {
    /// Attach a store-assigned id
    pub fn into_item(self, id: impl Into<String>) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: self.name,
            price: self.price,
            description: self.description,
            image: self.image,
            category: self.category,
            spicy: self.spicy,
            available: self.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_wire_format() {
        let item = MenuItemCreate {
            name: "Suya Platter".to_string(),
            price: 4500,
            description: "Skewered spicy beef".to_string(),
            image: "https://example.com/suya.jpg".to_string(),
            category: "grill".to_string(),
            spicy: true,
            available: true,
        }
        .into_item("65a1f0c2e4b0a1b2c3d4e5f6");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["_id"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(json["price"], 4500);
        assert_eq!(json["category"], "grill");
        assert_eq!(json["spicy"], true);
        assert_eq!(json["available"], true);
        assert!(json.get("id").is_none());
    }
}
