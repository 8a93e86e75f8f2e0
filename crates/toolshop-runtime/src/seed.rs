//! Sample records the back office starts with.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use toolshop_types::{Customer, EntityId, Order, OrderItem, OrderStatus, Product};

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: EntityId::new(1),
            name: "Furadeira de Impacto Profissional".to_string(),
            category: "Ferramentas Elétricas".to_string(),
            price: dec!(799.99),
            cost: dec!(450.00),
            stock: 15,
            min_stock: 5,
        },
        Product {
            id: EntityId::new(2),
            name: "Kit Chaves de Fenda Premium".to_string(),
            category: "Ferramentas Manuais".to_string(),
            price: dec!(299.99),
            cost: dec!(150.00),
            stock: 30,
            min_stock: 10,
        },
        Product {
            id: EntityId::new(3),
            name: "Serra Circular Industrial".to_string(),
            category: "Ferramentas Elétricas".to_string(),
            price: dec!(1299.99),
            cost: dec!(820.00),
            stock: 2,
            min_stock: 5,
        },
        Product {
            id: EntityId::new(4),
            name: "Chave de Fenda Phillips".to_string(),
            category: "Ferramentas Manuais".to_string(),
            price: dec!(24.90),
            cost: dec!(9.50),
            stock: 4,
            min_stock: 10,
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: EntityId::new(1),
            name: "Albert Einstein".to_string(),
            email: "einstein@eterno.com".to_string(),
            phone: "(11) 93333-7777".to_string(),
            address: "Rua das Teorias, 42".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            postal_code: "03333-777".to_string(),
        },
        Customer {
            id: EntityId::new(2),
            name: "Sigmund Freud".to_string(),
            email: "freud@eterno.com".to_string(),
            phone: "(11) 97777-3333".to_string(),
            address: "Avenida da Psicanálise, 33".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            postal_code: "03777-333".to_string(),
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: EntityId::new(1),
            customer_name: "Albert Einstein".to_string(),
            date: date(2024, 2, 20),
            status: OrderStatus::Delivered,
            items: vec![
                OrderItem {
                    id: EntityId::new(1),
                    product_name: "Furadeira de Impacto Profissional".to_string(),
                    quantity: 1,
                    price: dec!(799.99),
                },
                OrderItem {
                    id: EntityId::new(2),
                    product_name: "Kit Chaves de Fenda Premium".to_string(),
                    quantity: 2,
                    price: dec!(299.99),
                },
            ],
            total: dec!(1399.97),
        },
        Order {
            id: EntityId::new(2),
            customer_name: "Sigmund Freud".to_string(),
            date: date(2024, 2, 21),
            status: OrderStatus::Processing,
            items: vec![OrderItem {
                id: EntityId::new(3),
                product_name: "Serra Circular Industrial".to_string(),
                quantity: 1,
                price: dec!(1299.99),
            }],
            total: dec!(1299.99),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
