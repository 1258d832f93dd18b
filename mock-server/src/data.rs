//! Seed catalogue served by the mock server, modelled on the public API.

use crate::{Address, Cart, CartItem, Geolocation, Name, Product, Rating, Store, User};

pub(crate) fn seeded_store() -> Store {
    Store {
        users: users(),
        products: products(),
        carts: carts(),
    }
}

fn users() -> Vec<User> {
    vec![
        user(
            1,
            ("john@gmail.com", "johnd", "m38rmF$"),
            ("john", "doe"),
            ("kilcoole", "new road", 7682, "12926-3874"),
            ("-37.3159", "81.1496"),
            "1-570-236-7033",
        ),
        user(
            2,
            ("morrison@gmail.com", "mor_2314", "83r5^_"),
            ("david", "morrison"),
            ("kilcoole", "Lovers Ln", 7267, "12926-3874"),
            ("-37.3159", "81.1496"),
            "1-570-236-7033",
        ),
        user(
            3,
            ("kevin@gmail.com", "kevinryan", "kev02937@"),
            ("kevin", "ryan"),
            ("Cullman", "Frances Ct", 86, "29567-1452"),
            ("40.3467", "-30.1310"),
            "1-567-094-1345",
        ),
        user(
            4,
            ("don@gmail.com", "donero", "ewedon"),
            ("don", "romer"),
            ("San Antonio", "Hunters Creek Dr", 6454, "98234-1734"),
            ("50.3467", "-20.1310"),
            "1-765-789-6734",
        ),
        user(
            5,
            ("derek@gmail.com", "derek", "jklg*_56"),
            ("derek", "powell"),
            ("san Antonio", "adams St", 245, "80796-1234"),
            ("40.3467", "-40.1310"),
            "1-956-001-1945",
        ),
    ]
}

fn user(
    id: u32,
    (email, username, password): (&str, &str, &str),
    (firstname, lastname): (&str, &str),
    (city, street, number, zipcode): (&str, &str, u32, &str),
    (lat, long): (&str, &str),
    phone: &str,
) -> User {
    User {
        id,
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        name: Name {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        },
        address: Address {
            city: city.to_string(),
            street: street.to_string(),
            number,
            zipcode: zipcode.to_string(),
            geolocation: Geolocation {
                lat: lat.to_string(),
                long: long.to_string(),
            },
        },
        phone: phone.to_string(),
    }
}

fn products() -> Vec<Product> {
    vec![
        product(1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops", 109.95, "men's clothing", (3.9, 120)),
        product(2, "Mens Casual Premium Slim Fit T-Shirts", 22.3, "men's clothing", (4.1, 259)),
        product(3, "Mens Cotton Jacket", 55.99, "men's clothing", (4.7, 500)),
        product(4, "Mens Casual Slim Fit", 15.99, "men's clothing", (2.1, 430)),
        product(
            5,
            "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
            695.0,
            "jewelery",
            (4.6, 400),
        ),
        product(6, "Solid Gold Petite Micropave", 168.0, "jewelery", (3.9, 70)),
        product(7, "WD 2TB Elements Portable External Hard Drive - USB 3.0", 64.0, "electronics", (3.3, 203)),
        product(8, "SanDisk SSD PLUS 1TB Internal SSD - SATA III 6 Gb/s", 109.0, "electronics", (2.9, 470)),
        product(
            9,
            "Samsung 49-Inch CHG90 144Hz Curved Gaming Monitor",
            999.99,
            "electronics",
            (2.2, 140),
        ),
        product(
            10,
            "BIYLACLESEN Women's 3-in-1 Snowboard Jacket Winter Coats",
            56.99,
            "women's clothing",
            (2.6, 235),
        ),
    ]
}

fn product(id: u32, title: &str, price: f64, category: &str, (rate, count): (f64, u32)) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: format!("{title}. Seed item {id} of the mock catalogue."),
        category: category.to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        rating: Rating { rate, count },
    }
}

fn carts() -> Vec<Cart> {
    vec![
        cart(1, 1, "2020-03-02", &[(1, 4), (2, 1), (3, 6)]),
        cart(2, 1, "2020-01-02", &[(2, 4), (1, 10), (5, 2)]),
        cart(3, 2, "2020-03-01", &[(1, 2), (9, 1)]),
        cart(4, 3, "2020-01-01", &[(1, 4)]),
        cart(5, 3, "2020-03-01", &[(7, 1), (8, 1)]),
        cart(6, 4, "2020-03-01", &[(10, 2), (4, 3)]),
        cart(7, 5, "2020-03-01", &[(6, 1)]),
    ]
}

fn cart(id: u32, user_id: u32, day: &str, items: &[(u32, u32)]) -> Cart {
    Cart {
        id,
        user_id,
        date: format!("{day}T00:00:00.000Z"),
        products: items
            .iter()
            .map(|&(product_id, quantity)| CartItem { product_id, quantity })
            .collect(),
    }
}
