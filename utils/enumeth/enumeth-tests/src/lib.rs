#![cfg(test)]

mod concurrency;
mod rename;
mod weekday;
mod weekend;

fn enable_tracing_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::filter::LevelFilter;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .compact()
            .with_test_writer()
            .with_max_level(LevelFilter::DEBUG)
            .try_init()
            .unwrap()
    });
}
