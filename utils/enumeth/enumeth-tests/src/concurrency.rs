use std::sync::Arc;
use std::sync::Barrier;
use std::thread;

use enumeth::Enumeration as _;
use enumeth::enumeration;

use crate::enable_tracing_for_tests;

/// Only used here, so the first call to its registry races between the threads below.
#[enumeration]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Signal {
    Start,
    Pause,
    Stop,
}

#[test]
fn concurrent_first_use() {
    enable_tracing_for_tests();
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let signal = Signal::values()[i % 3];
                assert_eq!(i % 3, signal.ordinal());
                Signal::registry() as *const _ as usize
            })
        })
        .collect();

    let registries: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(registries.iter().all(|r| *r == registries[0]));
    assert_eq!(
        vec!["Start", "Pause", "Stop"],
        Signal::registry().names().collect::<Vec<_>>()
    );
}
