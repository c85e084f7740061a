//! Helpers for driving spawned tasks in native tests

use any_spawner::Executor;

/// Install the futures executor once per test binary
pub fn init_executor() {
    _ = Executor::init_futures_executor();
}

/// Run every local task spawned on this thread until they all stall
pub fn run_pending() {
    Executor::poll_local();
}
