//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nexus_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use nexus_core::{MemoryStorage, PersistenceAdapter, Store, TaskPriority};

fn main() {
    // Why: exercise one full mutation round against an in-memory medium to
    // validate core wiring independently of any real view layer.
    let adapter = PersistenceAdapter::new(MemoryStorage::default());
    let mut store = Store::load(adapter);
    store.add_task("smoke probe", "", TaskPriority::Low);

    println!("nexus_core ping={}", nexus_core::ping());
    println!("nexus_core version={}", nexus_core::core_version());
    println!("nexus_core tasks={}", store.tasks().len());
}
