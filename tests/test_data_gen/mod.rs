//! Shared fixtures for integration tests.
#![allow(dead_code)]

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: u32,
    pub name: &'static str,
    pub city: &'static str,
    pub age: u8,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub person_id: u32,
    pub total: i64,
}

pub fn people() -> Vec<Person> {
    vec![
        Person { id: 1, name: "ada", city: "oslo", age: 36, score: 9.5 },
        Person { id: 2, name: "bjorn", city: "bergen", age: 29, score: 7.0 },
        Person { id: 3, name: "cleo", city: "oslo", age: 29, score: 8.25 },
        Person { id: 4, name: "dag", city: "tromso", age: 41, score: 6.5 },
        Person { id: 5, name: "eir", city: "bergen", age: 36, score: 9.5 },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order { id: 100, person_id: 3, total: 250 },
        Order { id: 101, person_id: 1, total: 40 },
        Order { id: 102, person_id: 3, total: 75 },
        Order { id: 103, person_id: 9, total: 10 },
        Order { id: 104, person_id: 5, total: 0 },
    ]
}

/// Deterministic pseudo-random integers in `0..modulo`.
pub fn generate_values(rows: usize, modulo: i64, seed: u64) -> Vec<i64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..rows)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as i64).rem_euclid(modulo)
        })
        .collect()
}
