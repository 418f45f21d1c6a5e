//! The launch menu written into an empty collection

use shared::models::MenuItemCreate;

fn dish(
    name: &str,
    price: i64,
    description: &str,
    image: &str,
    category: &str,
    spicy: bool,
) -> MenuItemCreate {
    MenuItemCreate {
        name: name.to_string(),
        price,
        description: description.to_string(),
        image: image.to_string(),
        category: category.to_string(),
        spicy,
        available: true,
    }
}

/// The 14 dishes, in display order
pub fn menu_catalog() -> Vec<MenuItemCreate> {
    vec![
        dish(
            "Suya Platter",
            4500,
            "Skewered spicy beef suya with tomatoes, onions, and suya pepper",
            "https://th.bing.com/th/id/OIP.AxdzY99HtE1Qt6mHmVuYwQHaHa?w=152&h=180&c=7&r=0&o=7&dpr=1.3&pid=1.7&rm=3",
            "grill",
            true,
        ),
        dish(
            "Grilled Catfish (Point & Kill)",
            6800,
            "Freshly grilled catfish spiced and served with pepper sauce & yam fries",
            "https://images.unsplash.com/photo-1555993539-1732fc15a2d3?auto=format&fit=crop&w=800&q=80",
            "fish",
            true,
        ),
        dish(
            "Efo Riro Deluxe",
            3200,
            "Spinach stew cooked with palm oil, locust beans, and tender goat meat",
            "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0?auto=format&fit=crop&w=800&q=80",
            "stew",
            false,
        ),
        dish(
            "Pounded Yam & Egusi",
            4000,
            "Hand-pounded yam served with rich melon seed soup and assorted beef",
            "https://images.unsplash.com/photo-1583174818912-78071cbc40ea?auto=format&fit=crop&w=800&q=80",
            "swallow",
            false,
        ),
        dish(
            "Jollof Rice Special",
            3200,
            "Smoky party-style jollof rice served with plantain and grilled chicken",
            "https://images.unsplash.com/photo-1572441710635-e3eab16d3b31?auto=format&fit=crop&w=800&q=80",
            "rice",
            false,
        ),
        dish(
            "Fried Rice & Turkey",
            3500,
            "Nigerian fried rice with veggies and crispy turkey wing",
            "https://images.unsplash.com/photo-1512058564366-c99b64304dca?auto=format&fit=crop&w=800&q=80",
            "rice",
            false,
        ),
        dish(
            "Amala & Gbegiri + Ewedu",
            2900,
            "Classic Ibadan combo served with beef and assorted meats",
            "https://images.unsplash.com/photo-1523986371872-9d3ba2e2a025?auto=format&fit=crop&w=800&q=80",
            "swallow",
            false,
        ),
        dish(
            "Afang Soup & Fufu",
            3500,
            "Rich vegetable soup cooked with beef, kpomo, and stockfish",
            "https://images.unsplash.com/photo-1553621042-f6e147245754?auto=format&fit=crop&w=800&q=80",
            "stew",
            false,
        ),
        dish(
            "Goat Meat Pepper Soup",
            3500,
            "Spicy herbal pepper soup featuring tender goat meat chunks",
            "https://images.unsplash.com/photo-1540189549336-e6e99c3679b8?auto=format&fit=crop&w=800&q=80",
            "soup",
            true,
        ),
        dish(
            "Asun pepper chops",
            4200,
            "Spicy roasted goat meat sautéed in pepper sauce",
            "https://images.unsplash.com/photo-1552332386-f8dd00dc2f0e?auto=format&fit=crop&w=800&q=80",
            "grill",
            true,
        ),
        dish(
            "Beans & Dodo with Titus Fish",
            3500,
            "Honey beans stew with fried plantain and grilled fish",
            "https://images.unsplash.com/photo-1574339864658-0156cb4bb1cf?auto=format&fit=crop&w=800&q=80",
            "main",
            false,
        ),
        dish(
            "Ofada Rice & Ayamase",
            3000,
            "Local ofada rice served with spicy green pepper sauce & assorted beef",
            "https://images.unsplash.com/photo-1586190848861-99aa4a171e90?auto=format&fit=crop&w=800&q=80",
            "rice",
            true,
        ),
        dish(
            "Boli & Fish",
            2200,
            "Roasted plantain served with peppered tilapia fish",
            "https://images.unsplash.com/photo-1542831371-29b0f74f9713?auto=format&fit=crop&w=800&q=80",
            "snack",
            true,
        ),
        dish(
            "Nkwobi",
            3500,
            "Soft cow foot cooked in rich palm oil sauce with utazi leaves",
            "https://images.unsplash.com/photo-1556911220-e15b29be8c9a?auto=format&fit=crop&w=800&q=80",
            "grill",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_contents() {
        let items = menu_catalog();
        assert_eq!(items.len(), 14);
        assert!(items.iter().all(|i| i.available && i.price > 0));

        let names: HashSet<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names.len(), 14, "dish names are unique");

        let suya = &items[0];
        assert_eq!(suya.name, "Suya Platter");
        assert_eq!(suya.price, 4500);
        assert!(suya.spicy);
        assert_eq!(suya.category, "grill");
    }

    #[test]
    fn test_catalog_categories() {
        let allowed = [
            "grill", "fish", "stew", "swallow", "rice", "soup", "snack", "main",
        ];
        for item in menu_catalog() {
            assert!(allowed.contains(&item.category.as_str()), "{}", item.name);
        }
        let spicy = menu_catalog().iter().filter(|i| i.spicy).count();
        assert_eq!(spicy, 6);
    }
}
