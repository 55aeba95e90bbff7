//! Fixed menu catalog and delivery locations.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Flat delivery charge added to every order, in rupees.
pub const DELIVERY_CHARGE: u32 = 20;

/// Minutes from checkout until the expected delivery.
pub const DELIVERY_TIME_MINUTES: i64 = 20;

/// Identifier of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

/// A dish on the menu. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: &'static str,
    pub price: u32,
    pub image: &'static str,
}

static MENU_ITEMS: Lazy<Vec<MenuItem>> = Lazy::new(|| {
    vec![
        MenuItem {
            id: MenuItemId(1),
            name: "Aloo Paratha",
            price: 40,
            image: "https://images.unsplash.com/photo-1631452180519-c014fe946bc7?w=800&h=600&fit=crop",
        },
        MenuItem {
            id: MenuItemId(2),
            name: "Amritsari Naan",
            price: 50,
            image: "https://images.unsplash.com/photo-1601050690597-df0568f70950?w=400&h=300&fit=crop",
        },
        MenuItem {
            id: MenuItemId(3),
            name: "Veg Noodles",
            price: 70,
            image: "https://images.unsplash.com/photo-1612929633738-8fe44f7ec841?w=400&h=300&fit=crop",
        },
        MenuItem {
            id: MenuItemId(4),
            name: "Burger",
            price: 60,
            image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=400&h=300&fit=crop",
        },
        MenuItem {
            id: MenuItemId(5),
            name: "Coke",
            price: 30,
            image: "https://images.unsplash.com/photo-1554866585-cd94860890b7?w=400&h=300&fit=crop",
        },
        MenuItem {
            id: MenuItemId(6),
            name: "Chips",
            price: 25,
            image: "https://images.unsplash.com/photo-1566478989037-eec170784d0b?w=400&h=300&fit=crop",
        },
        MenuItem {
            id: MenuItemId(7),
            name: "Fries",
            price: 60,
            image: "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?w=400&h=300&fit=crop",
        },
    ]
});

/// Campus drop-off points the robot serves.
pub const LOCATION_OPTIONS: [&str; 7] = [
    "MBH A",
    "MBH B",
    "MBH F",
    "Children's Park",
    "NITJ Temple",
    "ICE Building",
    "MGH",
];

/// The full menu in display order.
pub fn menu() -> &'static [MenuItem] {
    &MENU_ITEMS
}

/// Looks up a menu item by id.
pub fn find_item(id: MenuItemId) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}

/// Returns true if `location` is one of the served drop-off points.
pub fn is_known_location(location: &str) -> bool {
    LOCATION_OPTIONS.contains(&location)
}
