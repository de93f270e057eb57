//! Cancellable sequence generator over a rendezvous channel.
//!
//! The generator drives an unbounded sequence but holds no buffer: each
//! term is offered on a zero-capacity channel and the task blocks until a
//! consumer takes it, so memory use stays constant however long the
//! sequence runs. At every step it also registers interest in both the
//! pending send and the quit signal, proceeding with whichever becomes
//! ready first. When both are ready at once the winner is picked
//! uniformly at random (the selector's documented policy); callers must
//! not rely on ordering in that case.

use crossbeam_channel::Select;
use log::{info, trace};

use crate::channel::{self, Receiver, Sender};
use crate::error::Result;
use crate::pool::TaskPool;
use crate::sequence::Fibonacci;
use crate::signal::{self, Stop, StopListener};

/// Generator lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeneratorState {
    /// Offering the next term to the consumer.
    Emitting,

    /// Quit observed, or every consumer endpoint is gone.
    Terminating,

    /// Finished.
    Done,
}

struct Generator {
    out: Sender<u64>,
    quit: StopListener,
    sequence: Fibonacci,
}

impl Generator {
    fn new(out: Sender<u64>, quit: StopListener) -> Self {
        Self {
            out,
            quit,
            sequence: Fibonacci::new(),
        }
    }

    fn run(self) {
        let Generator {
            out,
            quit,
            mut sequence,
        } = self;

        let mut state = GeneratorState::Emitting;
        let mut pending = sequence.next_term();

        loop {
            match state {
                GeneratorState::Emitting => {
                    let mut sel = Select::new();
                    let send_op = sel.send(out.raw());
                    let quit_op = sel.recv(quit.raw());

                    let oper = sel.select();
                    let index = oper.index();
                    if index == send_op {
                        match oper.send(out.raw(), pending) {
                            Ok(()) => {
                                trace!("emitted {pending}");
                                pending = sequence.next_term();
                            }
                            // Consumer dropped its receiver; nobody is
                            // left to take a value.
                            Err(_) => state = GeneratorState::Terminating,
                        }
                    } else {
                        debug_assert_eq!(index, quit_op);
                        // Fired, or the trigger is gone; either way the
                        // controller can no longer drive this task.
                        let _ = oper.recv(quit.raw());
                        state = GeneratorState::Terminating;
                    }
                }
                GeneratorState::Terminating => {
                    info!("generator quit");
                    state = GeneratorState::Done;
                }
                GeneratorState::Done => break,
            }
        }
    }
}

/// Spawns an unbounded Fibonacci generator on the pool.
///
/// Returns the consuming end and the quit trigger. The generator stops
/// when the trigger fires, when the trigger is dropped, or when the
/// receiver is dropped — all cooperative, none preemptive. The usual
/// companion is a consumer performing a fixed number of blocking receives
/// and then firing the trigger, which bounds the generator's lifetime
/// deterministically.
pub fn spawn_fibonacci_generator(pool: &TaskPool) -> Result<(Receiver<u64>, Stop)> {
    let (tx, rx) = channel::bounded(0);
    let (stop, listener) = signal::stop();

    pool.spawn("fib-generator", move || Generator::new(tx, listener).run())?;

    Ok((rx, stop))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_bounds_the_generator() {
        let pool = TaskPool::new("test");
        let (terms, stop) = spawn_fibonacci_generator(&pool).unwrap();

        let mut taken = Vec::new();
        for _ in 0..10 {
            taken.push(terms.recv().expect("generator stopped early"));
        }
        stop.fire().unwrap();

        assert_eq!(taken, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_dropped_consumer_terminates_the_generator() {
        let pool = TaskPool::new("test");
        let (terms, stop) = spawn_fibonacci_generator(&pool).unwrap();

        assert_eq!(terms.recv(), Some(0));
        drop(terms);

        // The in-flight send fails once the receiver is gone, so shutdown
        // does not hang on the generator.
        pool.shutdown().unwrap();
        assert!(stop.fire().is_ok());
    }

    #[test]
    fn test_dropped_trigger_terminates_the_generator() {
        let pool = TaskPool::new("test");
        let (terms, stop) = spawn_fibonacci_generator(&pool).unwrap();

        assert_eq!(terms.recv(), Some(0));
        drop(stop);
        drop(terms);
        pool.shutdown().unwrap();
    }
}
