//! Client-side shopping cart
//!
//! The cart never reaches the server. It is modelled as a pure reducer so the
//! browser store and any Rust consumer agree on the same transitions:
//! `next = state.reduce(&action)`, the previous state is left untouched.
//!
//! Actions use the `{ "type": "ADD", "payload": ... }` shape the front end
//! dispatches. Checkout is not implemented.

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// One dish in the cart with its quantity
///
/// Serialized flat (`{ "_id": ..., "name": ..., "qty": 2 }`) like the
/// front-end store keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> i64 {
        self.item.price * i64::from(self.qty)
    }
}

/// Cart action, keyed by menu item id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "UPPERCASE")]
pub enum CartAction {
    /// Add one of the dish; a new line starts at qty 1
    Add(MenuItem),
    Increase(String),
    /// Drops the line when its qty reaches zero
    Decrease(String),
    Remove(String),
}

/// Cart contents in the order dishes were first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the next state
    ///
    /// Actions naming an id that is not in the cart leave it unchanged.
    pub fn reduce(&self, action: &CartAction) -> CartState {
        let mut items = self.items.clone();

        match action {
            CartAction::Add(item) => match items.iter_mut().find(|l| l.item.id == item.id) {
                Some(line) => line.qty += 1,
                None => items.push(CartLine {
                    item: item.clone(),
                    qty: 1,
                }),
            },
            CartAction::Increase(id) => {
                if let Some(line) = items.iter_mut().find(|l| &l.item.id == id) {
                    line.qty += 1;
                }
            }
            CartAction::Decrease(id) => {
                if let Some(line) = items.iter_mut().find(|l| &l.item.id == id) {
                    line.qty = line.qty.saturating_sub(1);
                }
                items.retain(|l| l.qty > 0);
            }
            CartAction::Remove(id) => items.retain(|l| &l.item.id != id),
        }

        CartState { items }
    }

    /// Sum of price × qty, in whole Naira
    pub fn total(&self) -> i64 {
        self.items.iter().map(CartLine::subtotal).sum()
    }

    /// Number of dishes (badge count), not number of lines
    pub fn count(&self) -> u32 {
        self.items.iter().map(|l| l.qty).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.items.iter().find(|l| l.item.id == id)
    }
}
