//! The in-memory mock data source.
//!
//! Five stores with their products, one active order, past orders, the user
//! and driver profiles, the category rail, and the pool of orders waiting
//! for a driver. Every function returns fresh owned values so callers can
//! mutate freely without sharing state.
//!
//! Prices are exact decimals (cents-scaled constructors, never floats).

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use quickdash_core::{
    AddressId, CategoryId, DriverId, DriverStatus, GeoPoint, OrderId, OrderStatus,
    PaymentMethodId, ProductId, StoreId, UserId,
};

use crate::catalog::{Catalog, Category};
use crate::models::{
    Address, AddressKind, CourierContact, Driver, Order, OrderLine, PaymentKind, PaymentMethod,
    Product, Store, TrackingInfo, User,
};

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    // Utc timestamps are never ambiguous; the fallback is unreachable.
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

/// A catalog built from [`stores`] and [`categories`].
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(stores(), categories())
}

/// The category rail shown on the home screen.
#[must_use]
pub fn categories() -> Vec<Category> {
    let entries = [
        ("all", "All", "layers"),
        ("grocery", "Grocery", "shopping-basket"),
        ("food", "Food", "utensils"),
        ("pharmacy", "Pharmacy", "pill"),
        ("pets", "Pets", "dog"),
        ("gifts", "Gifts", "gift"),
    ];
    entries
        .into_iter()
        .map(|(id, name, icon)| Category {
            id: CategoryId::new(id),
            name: name.to_owned(),
            icon: icon.to_owned(),
        })
        .collect()
}

/// All stores with their products.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn stores() -> Vec<Store> {
    vec![
        Store {
            id: StoreId::new("store1"),
            name: "Fresh Basket Grocery".to_owned(),
            kind: "Grocery • Daily Essentials".to_owned(),
            image: "https://images.unsplash.com/photo-1573225342350-39908978a80c".to_owned(),
            rating: 4.8,
            delivery_time_minutes: 20,
            delivery_fee: price(250),
            featured: true,
            category: CategoryId::new("grocery"),
            products: vec![
                Product {
                    id: ProductId::new("prod1"),
                    store_id: StoreId::new("store1"),
                    name: "Organic Bananas (1 bunch)".to_owned(),
                    description: "Locally sourced organic bananas".to_owned(),
                    price: price(399),
                    image: "https://images.unsplash.com/photo-1603833665858-e61d17a86224"
                        .to_owned(),
                    category: Some("fruits".to_owned()),
                },
                Product {
                    id: ProductId::new("prod2"),
                    store_id: StoreId::new("store1"),
                    name: "Whole Milk (1 gal)".to_owned(),
                    description: "Farm fresh whole milk".to_owned(),
                    price: price(450),
                    image: "https://images.unsplash.com/photo-1550583724-b2692b85b150".to_owned(),
                    category: Some("dairy".to_owned()),
                },
                Product {
                    id: ProductId::new("prod3"),
                    store_id: StoreId::new("store1"),
                    name: "Avocados (4 pack)".to_owned(),
                    description: "Ripe and ready to eat".to_owned(),
                    price: price(699),
                    image: "https://images.unsplash.com/photo-1519162808019-7de1683fa2ad"
                        .to_owned(),
                    category: Some("fruits".to_owned()),
                },
                Product {
                    id: ProductId::new("prod4"),
                    store_id: StoreId::new("store1"),
                    name: "Fresh Bread Loaf".to_owned(),
                    description: "Baked fresh daily".to_owned(),
                    price: price(349),
                    image: "https://images.unsplash.com/photo-1608198093002-ad4e005484ec"
                        .to_owned(),
                    category: Some("bakery".to_owned()),
                },
            ],
        },
        Store {
            id: StoreId::new("store2"),
            name: "Burger Station".to_owned(),
            kind: "Fast Food • Burgers".to_owned(),
            image: "https://images.unsplash.com/photo-1550547660-d9450f859349".to_owned(),
            rating: 4.5,
            delivery_time_minutes: 30,
            delivery_fee: price(199),
            featured: false,
            category: CategoryId::new("food"),
            products: vec![
                Product {
                    id: ProductId::new("prod5"),
                    store_id: StoreId::new("store2"),
                    name: "Classic Cheeseburger".to_owned(),
                    description: "Beef patty with cheese, lettuce, and special sauce".to_owned(),
                    price: price(899),
                    image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd"
                        .to_owned(),
                    category: None,
                },
                Product {
                    id: ProductId::new("prod6"),
                    store_id: StoreId::new("store2"),
                    name: "French Fries".to_owned(),
                    description: "Crispy golden fries".to_owned(),
                    price: price(399),
                    image: "https://images.unsplash.com/photo-1576107232684-1279f390859f"
                        .to_owned(),
                    category: None,
                },
            ],
        },
        Store {
            id: StoreId::new("store3"),
            name: "MediQuick Pharmacy".to_owned(),
            kind: "Pharmacy • Healthcare".to_owned(),
            image: "https://images.unsplash.com/photo-1617881770125-6fb0d039ecad".to_owned(),
            rating: 4.7,
            delivery_time_minutes: 25,
            delivery_fee: Decimal::ZERO,
            featured: false,
            category: CategoryId::new("pharmacy"),
            products: vec![
                Product {
                    id: ProductId::new("prod7"),
                    store_id: StoreId::new("store3"),
                    name: "Pain Relief Tablets".to_owned(),
                    description: "Fast acting pain relief, 24 tablets".to_owned(),
                    price: price(799),
                    image: "https://images.unsplash.com/photo-1550572017-edd951b55104".to_owned(),
                    category: None,
                },
                Product {
                    id: ProductId::new("prod8"),
                    store_id: StoreId::new("store3"),
                    name: "Digital Thermometer".to_owned(),
                    description: "Quick and accurate readings".to_owned(),
                    price: price(1299),
                    image: "https://images.unsplash.com/photo-1588600878108-578031aa6933"
                        .to_owned(),
                    category: None,
                },
            ],
        },
        Store {
            id: StoreId::new("store4"),
            name: "Pawsome Pet Supplies".to_owned(),
            kind: "Pet Shop • Supplies".to_owned(),
            image: "https://images.unsplash.com/photo-1583337130417-3346a1be7dee".to_owned(),
            rating: 4.6,
            delivery_time_minutes: 35,
            delivery_fee: price(299),
            featured: false,
            category: CategoryId::new("pets"),
            products: vec![
                Product {
                    id: ProductId::new("prod9"),
                    store_id: StoreId::new("store4"),
                    name: "Premium Dog Food (5kg)".to_owned(),
                    description: "Nutritionally complete dry food for adult dogs".to_owned(),
                    price: price(2499),
                    image: "https://images.unsplash.com/photo-1589924691995-400dc9ecc119"
                        .to_owned(),
                    category: None,
                },
                Product {
                    id: ProductId::new("prod10"),
                    store_id: StoreId::new("store4"),
                    name: "Cat Toy Set".to_owned(),
                    description: "Set of 5 interactive toys".to_owned(),
                    price: price(1599),
                    image: "https://images.unsplash.com/photo-1526947425960-945c6e72858f"
                        .to_owned(),
                    category: None,
                },
            ],
        },
        Store {
            id: StoreId::new("store5"),
            name: "Gift Express".to_owned(),
            kind: "Gifts • Occasions".to_owned(),
            image: "https://images.unsplash.com/photo-1549465220-1a8b9238cd48".to_owned(),
            rating: 4.4,
            delivery_time_minutes: 40,
            delivery_fee: price(399),
            featured: false,
            category: CategoryId::new("gifts"),
            products: vec![
                Product {
                    id: ProductId::new("prod11"),
                    store_id: StoreId::new("store5"),
                    name: "Birthday Gift Box".to_owned(),
                    description: "Assorted chocolates and small gifts".to_owned(),
                    price: price(2999),
                    image: "https://images.unsplash.com/photo-1549465220-1a8b9238cd48".to_owned(),
                    category: None,
                },
                Product {
                    id: ProductId::new("prod12"),
                    store_id: StoreId::new("store5"),
                    name: "Rose Bouquet".to_owned(),
                    description: "12 fresh roses with gift wrap".to_owned(),
                    price: price(3499),
                    image: "https://images.unsplash.com/photo-1520903304654-6d5e79254336"
                        .to_owned(),
                    category: None,
                },
            ],
        },
    ]
}

/// The order currently being tracked by the customer.
#[must_use]
pub fn active_order() -> Order {
    Order {
        id: OrderId::new("order1"),
        store_id: StoreId::new("store1"),
        store_name: "Fresh Basket Grocery".to_owned(),
        store_image: "https://images.unsplash.com/photo-1573225342350-39908978a80c".to_owned(),
        status: OrderStatus::OnTheWay,
        items: vec![
            OrderLine {
                id: ProductId::new("prod1"),
                name: "Organic Bananas (1 bunch)".to_owned(),
                quantity: 1,
                price: price(399),
            },
            OrderLine {
                id: ProductId::new("prod2"),
                name: "Whole Milk (1 gal)".to_owned(),
                quantity: 2,
                price: price(450),
            },
        ],
        total: price(1299),
        delivery_address: "123 Main St, Apt 4B, New York, NY 10001".to_owned(),
        created_at: at(2025, 5, 19, 14, 30),
        estimated_delivery: at(2025, 5, 19, 15, 10),
        tracking: Some(TrackingInfo {
            current_location: GeoPoint::new(40.7128, -74.0060),
            courier: Some(CourierContact {
                name: "John Doe".to_owned(),
                phone: "+1 555-123-4567".to_owned(),
                image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d".to_owned(),
            }),
        }),
    }
}

/// Completed orders shown in the history list.
#[must_use]
pub fn past_orders() -> Vec<Order> {
    vec![Order {
        id: OrderId::new("order2"),
        store_id: StoreId::new("store2"),
        store_name: "Burger Station".to_owned(),
        store_image: "https://images.unsplash.com/photo-1550547660-d9450f859349".to_owned(),
        status: OrderStatus::Delivered,
        items: vec![
            OrderLine {
                id: ProductId::new("prod5"),
                name: "Classic Cheeseburger".to_owned(),
                quantity: 2,
                price: price(899),
            },
            OrderLine {
                id: ProductId::new("prod6"),
                name: "French Fries".to_owned(),
                quantity: 1,
                price: price(399),
            },
        ],
        total: price(2197),
        delivery_address: "123 Main St, Apt 4B, New York, NY 10001".to_owned(),
        created_at: at(2025, 5, 18, 18, 45),
        estimated_delivery: at(2025, 5, 18, 19, 30),
        tracking: None,
    }]
}

/// The customer profile.
#[must_use]
pub fn user() -> User {
    User {
        id: UserId::new("user1"),
        name: "Alex Johnson".to_owned(),
        email: "alex@example.com".to_owned(),
        phone: "+1 555-987-6543".to_owned(),
        addresses: vec![
            Address {
                id: AddressId::new("addr1"),
                kind: AddressKind::Home,
                address: "123 Main St, Apt 4B, New York, NY 10001".to_owned(),
                landmark: Some("Near Central Park".to_owned()),
                is_default: true,
            },
            Address {
                id: AddressId::new("addr2"),
                kind: AddressKind::Work,
                address: "456 Office Rd, Floor 12, New York, NY 10002".to_owned(),
                landmark: Some("Glass building with blue logo".to_owned()),
                is_default: false,
            },
        ],
        payment_methods: vec![
            PaymentMethod {
                id: PaymentMethodId::new("pay1"),
                kind: PaymentKind::Card,
                name: "Visa ending in 4242".to_owned(),
                details: "Expires 09/26".to_owned(),
                is_default: true,
            },
            PaymentMethod {
                id: PaymentMethodId::new("pay2"),
                kind: PaymentKind::Upi,
                name: "Google Pay".to_owned(),
                details: "alex@upi".to_owned(),
                is_default: false,
            },
        ],
        orders: vec![OrderId::new("order1"), OrderId::new("order2")],
    }
}

/// The driver profile.
#[must_use]
pub fn driver() -> Driver {
    Driver {
        id: DriverId::new("driver1"),
        name: "John Doe".to_owned(),
        email: "john.driver@example.com".to_owned(),
        phone: "+1 555-123-4567".to_owned(),
        vehicle: "Motorcycle".to_owned(),
        vehicle_number: "AB123CD".to_owned(),
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d".to_owned(),
        status: DriverStatus::Online,
        current_location: GeoPoint::new(40.7128, -74.0060),
        rating: 4.8,
        total_deliveries: 247,
        active_order_id: Some(OrderId::new("order1")),
    }
}

/// Orders waiting for a driver to accept, all still `preparing`.
#[must_use]
pub fn available_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("order3"),
            store_id: StoreId::new("store3"),
            store_name: "MediQuick Pharmacy".to_owned(),
            store_image: "https://images.unsplash.com/photo-1617881770125-6fb0d039ecad".to_owned(),
            status: OrderStatus::Preparing,
            items: vec![OrderLine {
                id: ProductId::new("prod7"),
                name: "Pain Relief Tablets".to_owned(),
                quantity: 1,
                price: price(799),
            }],
            total: price(799),
            delivery_address: "789 Health St, New York, NY 10003".to_owned(),
            created_at: at(2025, 5, 19, 15, 45),
            estimated_delivery: at(2025, 5, 19, 16, 30),
            tracking: None,
        },
        Order {
            id: OrderId::new("order4"),
            store_id: StoreId::new("store2"),
            store_name: "Burger Station".to_owned(),
            store_image: "https://images.unsplash.com/photo-1550547660-d9450f859349".to_owned(),
            status: OrderStatus::Preparing,
            items: vec![
                OrderLine {
                    id: ProductId::new("prod5"),
                    name: "Classic Cheeseburger".to_owned(),
                    quantity: 1,
                    price: price(899),
                },
                OrderLine {
                    id: ProductId::new("prod6"),
                    name: "French Fries".to_owned(),
                    quantity: 1,
                    price: price(399),
                },
            ],
            total: price(1298),
            delivery_address: "456 Food Ave, New York, NY 10002".to_owned(),
            created_at: at(2025, 5, 19, 15, 30),
            estimated_delivery: at(2025, 5, 19, 16, 15),
            tracking: None,
        },
    ]
}
