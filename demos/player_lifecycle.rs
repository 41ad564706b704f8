//! Player Lifecycle
//!
//! This example drives one player through a round: start, a failure and a
//! success requested in the same tick, a reset back to the spawn pose, and
//! finally teardown.
//!
//! Key concepts:
//! - Requests only record intent; the physics tick commits them
//! - Only the last request before a tick takes effect
//! - Entering Resetting restores the pose captured at construction
//! - Teardown notifies observers exactly once
//!
//! Run with: RUST_LOG=debug cargo run --example player_lifecycle

use std::cell::RefCell;
use std::rc::Rc;
use tickstate::entity::{EntityController, PlayerHooks, PlayerState, Transform, Vec3};
use tickstate::scheduler::ManualScheduler;
use tickstate::ControllerConfig;
use tracing_subscriber::EnvFilter;

/// Moves the player forward every physics tick while active.
struct Walker;

impl PlayerHooks<Transform> for Walker {
    fn on_start(&mut self, _target: &mut Transform) {
        println!("  -> go!");
    }

    fn on_fail(&mut self, _target: &mut Transform) {
        println!("  -> miss");
    }

    fn on_succeed(&mut self, _target: &mut Transform) {
        println!("  -> clear");
    }

    fn physics(&mut self, state: PlayerState, target: &mut Transform) {
        if state == PlayerState::Active {
            target.position.z += 0.5;
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Player Lifecycle Example ===\n");

    let config = ControllerConfig::from_json(r#"{ "history_limit": 16, "trace_ticks": true }"#)
        .expect("config is valid");
    let spawn = Transform::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 90.0, 0.0));
    let player = EntityController::builder(spawn)
        .hooks(Walker)
        .config(config)
        .build()
        .expect("spawn transform has a pivot");
    let player = Rc::new(RefCell::new(player));

    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    player
        .borrow_mut()
        .on_destroyed(|entity| println!("Observer: forgetting entity {}", entity.id()))
        .expect("entity is alive");

    println!("Requesting start");
    player.borrow_mut().request_start().expect("entity is alive");
    scheduler.run(4);
    report(&player);

    println!("Requesting fail, then succeed, before the next tick");
    {
        let mut player = player.borrow_mut();
        player.request_fail().expect("entity is alive");
        player.request_succeed().expect("entity is alive");
    }
    scheduler.step();
    report(&player);

    println!("Requesting reset");
    player.borrow_mut().request_reset().expect("entity is alive");
    scheduler.step();
    report(&player);

    {
        let player = player.borrow();
        let history = player.history().expect("entity is alive");
        let path: Vec<String> = history
            .get_path()
            .iter()
            .map(|s| format!("{s:?}"))
            .collect();
        println!("\nCommitted path: {}", path.join(" -> "));
    }

    println!("\nTearing down");
    player.borrow_mut().destroy();
    scheduler.step();

    println!("\n=== Example Complete ===");
}

fn report(player: &Rc<RefCell<EntityController<Transform, Walker>>>) {
    let player = player.borrow();
    let state = player.current_state().expect("entity is alive");
    let position = player.target().expect("entity is alive").position;
    println!(
        "  state: {state:?}, position: ({:.1}, {:.1}, {:.1})\n",
        position.x, position.y, position.z
    );
}
