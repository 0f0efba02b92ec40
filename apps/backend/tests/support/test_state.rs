use std::sync::Arc;

use backend::clock::FixedClock;
use backend::config::{HasherConfig, TokenConfig};
use backend::infra::state::build_state;
use backend::state::AppState;
use time::macros::datetime;

use super::fake_stores::FakeStores;

/// AppState over in-memory stores, plus handles tests poke at directly.
pub struct TestEnv {
    pub state: AppState,
    pub stores: FakeStores,
    pub clock: FixedClock,
    pub tokens: TokenConfig,
}

pub fn test_state() -> TestEnv {
    let clock = FixedClock::new(datetime!(2024-05-01 12:00 UTC));
    let tokens = TokenConfig::for_tests();
    let stores = FakeStores::new(Arc::new(clock.clone()));

    let state = build_state()
        .with_tokens(tokens.clone())
        .with_hasher(HasherConfig::for_tests())
        .with_clock(Arc::new(clock.clone()))
        .with_stores(stores.stores())
        .build()
        .expect("build test state");

    TestEnv {
        state,
        stores,
        clock,
        tokens,
    }
}
