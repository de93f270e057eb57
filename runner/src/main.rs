use log::info;
use std::time::Instant;
use xcoord::{
    Config, TaskPool, partitioned_sum, run_tick_loop, spawn_fibonacci_feed,
    spawn_fibonacci_generator,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let pool = TaskPool::new("runner");

    // Fan-out/fan-in: two workers sum one partition each.
    let values = [7i64, 2, 8, -9, 4, 0];
    let total = partitioned_sum(&pool, &values).expect("partitioned sum failed");
    info!("partitioned sum of {values:?} = {total}");

    // Bounded feed: the producer closes the channel after the last term,
    // and closure alone ends the drain loop.
    let feed = spawn_fibonacci_feed(&pool, 10, config.queue_capacity)
        .expect("failed to spawn the feed");
    for (index, term) in feed.iter().enumerate() {
        info!("dequeued term {index}: {term}");
    }

    // Cancellable generator: ten blocking receives, then quit.
    let (terms, stop) = spawn_fibonacci_generator(&pool).expect("failed to spawn the generator");
    for _ in 0..10 {
        match terms.recv() {
            Some(term) => info!("generated {term}"),
            None => break,
        }
    }
    stop.fire().expect("failed to fire the quit signal");

    // Multiplexed timer loop until the one-shot timeout.
    let start = Instant::now();
    let report = run_tick_loop(&config);
    info!(
        "timer loop done after {:.2?}: {} ticks, {} idle polls",
        start.elapsed(),
        report.ticks,
        report.idle_polls
    );

    pool.shutdown().expect("pool shutdown failed");
    info!("runner finished");
}
