//! Static venue content served to the public site: business details,
//! facilities, and the catering menu. None of this changes at runtime.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VenueInfo {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub whatsapp: &'static str,
}

pub const VENUE_INFO: VenueInfo = VenueInfo {
    name: "Manomangal Lawns",
    address: "Shingave Shivar, Shirpur, Maharashtra 425405",
    phone: "9359525834",
    email: "bookings@manomangallawns.in",
    whatsapp: "9359525834",
};

#[derive(Debug, Clone, Serialize)]
pub struct Facility {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FACILITIES: [Facility; 6] = [
    Facility {
        title: "AC Hall",
        description: "Fully air-conditioned hall for 200+ guests",
    },
    Facility {
        title: "Garden Area",
        description: "Beautiful landscaped garden for outdoor events",
    },
    Facility {
        title: "Parking",
        description: "Spacious parking for 100+ vehicles",
    },
    Facility {
        title: "Catering",
        description: "In-house catering with variety of cuisines",
    },
    Facility {
        title: "Sound System",
        description: "Professional sound and lighting setup",
    },
    Facility {
        title: "Decoration",
        description: "Complete decoration services available",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: i64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [MenuItem],
}

pub const MENU_CATEGORIES: [MenuCategory; 6] = [
    MenuCategory {
        id: "veg-starters",
        name: "Vegetarian Starters",
        items: &[
            MenuItem { name: "Paneer Tikka", price: 250, description: "Grilled cottage cheese with spices" },
            MenuItem { name: "Veg Spring Rolls", price: 180, description: "Crispy rolls with mixed vegetables" },
            MenuItem { name: "Aloo Tikki", price: 150, description: "Spiced potato patties" },
            MenuItem { name: "Dhokla", price: 120, description: "Steamed gram flour cake" },
        ],
    },
    MenuCategory {
        id: "non-veg-starters",
        name: "Non-Vegetarian Starters",
        items: &[
            MenuItem { name: "Chicken Tikka", price: 350, description: "Grilled chicken with aromatic spices" },
            MenuItem { name: "Fish Fry", price: 400, description: "Crispy fried fish with spices" },
            MenuItem { name: "Mutton Seekh Kebab", price: 450, description: "Minced mutton grilled on skewers" },
            MenuItem { name: "Prawn Koliwada", price: 500, description: "Spicy fried prawns" },
        ],
    },
    MenuCategory {
        id: "main-course-veg",
        name: "Vegetarian Main Course",
        items: &[
            MenuItem { name: "Dal Tadka", price: 200, description: "Tempered yellow lentils" },
            MenuItem { name: "Paneer Butter Masala", price: 280, description: "Cottage cheese in rich tomato gravy" },
            MenuItem { name: "Veg Biryani", price: 250, description: "Fragrant rice with mixed vegetables" },
            MenuItem { name: "Chole Bhature", price: 220, description: "Spiced chickpeas with fried bread" },
        ],
    },
    MenuCategory {
        id: "main-course-non-veg",
        name: "Non-Vegetarian Main Course",
        items: &[
            MenuItem { name: "Chicken Curry", price: 350, description: "Traditional chicken curry" },
            MenuItem { name: "Mutton Rogan Josh", price: 450, description: "Aromatic mutton curry" },
            MenuItem { name: "Fish Curry", price: 400, description: "Coastal style fish curry" },
            MenuItem { name: "Chicken Biryani", price: 320, description: "Fragrant rice with tender chicken" },
        ],
    },
    MenuCategory {
        id: "desserts",
        name: "Desserts",
        items: &[
            MenuItem { name: "Gulab Jamun", price: 150, description: "Sweet milk dumplings in syrup" },
            MenuItem { name: "Rasgulla", price: 120, description: "Spongy cottage cheese balls" },
            MenuItem { name: "Ice Cream", price: 100, description: "Assorted flavors" },
            MenuItem { name: "Kulfi", price: 80, description: "Traditional Indian ice cream" },
        ],
    },
    MenuCategory {
        id: "beverages",
        name: "Beverages",
        items: &[
            MenuItem { name: "Fresh Lime Water", price: 50, description: "Refreshing lime drink" },
            MenuItem { name: "Lassi", price: 80, description: "Traditional yogurt drink" },
            MenuItem { name: "Tea/Coffee", price: 40, description: "Hot beverages" },
            MenuItem { name: "Soft Drinks", price: 60, description: "Assorted cold drinks" },
        ],
    },
];
