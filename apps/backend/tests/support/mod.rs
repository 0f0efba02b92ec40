#![allow(dead_code)]

pub mod fake_stores;
pub mod test_state;

pub use fake_stores::FakeStores;
pub use test_state::{test_state, TestEnv};
