//! End-to-end scenarios driving player entities through a scheduler.

use std::cell::RefCell;
use std::rc::Rc;
use tickstate::entity::{EntityController, PlayerHooks, PlayerState, Transform, Vec3};
use tickstate::scheduler::{ManualScheduler, TickFlow, TickPhase, TickScheduler};
use tickstate::{EntityId, LifecycleError};

type Log = Rc<RefCell<Vec<String>>>;

/// Hooks that append every call to a shared log.
struct Logged(Log);

impl Logged {
    fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }
}

impl PlayerHooks<Transform> for Logged {
    fn on_start(&mut self, _target: &mut Transform) {
        self.push("enter Active");
    }

    fn on_fail(&mut self, _target: &mut Transform) {
        self.push("enter Failed");
    }

    fn on_succeed(&mut self, _target: &mut Transform) {
        self.push("enter Succeeded");
    }

    fn on_reset(&mut self, _target: &mut Transform) {
        self.push("enter Resetting");
    }

    fn physics(&mut self, state: PlayerState, _target: &mut Transform) {
        self.push(format!("physics {state:?}"));
    }

    fn frame(&mut self, state: PlayerState, _target: &mut Transform) {
        self.push(format!("frame {state:?}"));
    }
}

fn spawn(log: &Log) -> Rc<RefCell<EntityController<Transform, Logged>>> {
    let transform = Transform::new(Vec3::new(0.0, 1.0, -4.0), Vec3::new(0.0, 180.0, 0.0));
    let player = EntityController::builder(transform)
        .hooks(Logged(Rc::clone(log)))
        .build()
        .unwrap();
    Rc::new(RefCell::new(player))
}

fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

#[test]
fn start_from_uninitialized() {
    let log = Log::default();
    let player = spawn(&log);
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    player.borrow_mut().request_start().unwrap();
    scheduler.step();
    scheduler.step();

    assert_eq!(player.borrow().current_state().unwrap(), PlayerState::Active);
    assert_eq!(
        take(&log),
        vec![
            "enter Active",
            "physics Active",
            "frame Active",
            "physics Active",
            "frame Active",
        ]
    );
}

#[test]
fn fail_then_succeed_before_commit() {
    let log = Log::default();
    let player = spawn(&log);
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    {
        let mut player = player.borrow_mut();
        player.request_fail().unwrap();
        player.request_succeed().unwrap();
    }
    scheduler.step();

    assert_eq!(player.borrow().current_state().unwrap(), PlayerState::Succeeded);
    let entries = take(&log);
    assert!(entries.contains(&"enter Succeeded".to_string()));
    assert!(!entries.contains(&"enter Failed".to_string()));
}

#[test]
fn reset_from_active_restores_pose_and_stays() {
    let log = Log::default();
    let player = spawn(&log);
    let captured = *player.borrow().captured_pose().unwrap();
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    player.borrow_mut().request_start().unwrap();
    scheduler.step();
    {
        let mut player = player.borrow_mut();
        let target = player.target_mut().unwrap();
        target.position = Vec3::new(12.0, 1.0, 30.0);
        target.pivot = Some(Vec3::new(0.0, 45.0, 0.0));
    }

    player.borrow_mut().request_reset().unwrap();
    scheduler.run(5);

    let player = player.borrow();
    assert_eq!(player.current_state().unwrap(), PlayerState::Resetting);
    assert_eq!(player.target().unwrap().pose(), Some(captured));
    let resets = take(&log)
        .into_iter()
        .filter(|e| e == "enter Resetting")
        .count();
    assert_eq!(resets, 1);
}

#[test]
fn request_during_frame_phase_commits_next_tick() {
    let log = Log::default();
    let player = spawn(&log);
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    player.borrow_mut().request_start().unwrap();
    scheduler.step();

    // Gameplay event fired from a frame callback registered after the entity.
    let requester = Rc::downgrade(&player);
    let observed = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&observed);
    let mut fired = false;
    scheduler.register_frame_tick(Box::new(move || {
        if let Some(player) = requester.upgrade() {
            let mut player = player.borrow_mut();
            if !fired {
                player.request_fail().unwrap();
                fired = true;
            }
            seen.borrow_mut().push(player.current_state().unwrap());
        }
        TickFlow::Continue
    }));

    scheduler.step();
    assert_eq!(*observed.borrow(), vec![PlayerState::Active]);
    assert_eq!(player.borrow().pending_state().unwrap(), Some(PlayerState::Failed));

    scheduler.step();
    assert_eq!(
        *observed.borrow(),
        vec![PlayerState::Active, PlayerState::Failed]
    );
    let history = player.borrow().history().unwrap().clone();
    assert_eq!(history.last().map(|t| t.tick), Some(3));
}

#[test]
fn re_requesting_current_state_does_not_re_enter() {
    let log = Log::default();
    let player = spawn(&log);
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    player.borrow_mut().request_start().unwrap();
    scheduler.step();
    player.borrow_mut().request_start().unwrap();
    scheduler.step();

    let enters = take(&log)
        .into_iter()
        .filter(|e| e.starts_with("enter"))
        .count();
    assert_eq!(enters, 1);
}

#[test]
fn any_state_can_follow_any_other() {
    let log = Log::default();
    let player = spawn(&log);
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    player.borrow_mut().request_succeed().unwrap();
    scheduler.step();
    player.borrow_mut().request_start().unwrap();
    scheduler.step();
    player.borrow_mut().request_fail().unwrap();
    scheduler.step();

    let player = player.borrow();
    let path: Vec<PlayerState> = player
        .history()
        .unwrap()
        .get_path()
        .into_iter()
        .copied()
        .collect();
    assert_eq!(
        path,
        vec![
            PlayerState::Uninitialized,
            PlayerState::Succeeded,
            PlayerState::Active,
            PlayerState::Failed,
        ]
    );
}

#[test]
fn teardown_notifies_once_and_discards_pending() {
    let log = Log::default();
    let player = spawn(&log);
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&player, &mut scheduler);

    let forgotten: Rc<RefCell<Vec<EntityId>>> = Rc::default();
    let registry = Rc::clone(&forgotten);
    player
        .borrow_mut()
        .on_destroyed(move |entity| registry.borrow_mut().push(entity.id()))
        .unwrap();
    let id = player.borrow().id();

    player.borrow_mut().request_start().unwrap();
    assert!(player.borrow_mut().destroy());
    assert!(!player.borrow_mut().destroy());
    scheduler.run(2);

    assert_eq!(*forgotten.borrow(), vec![id]);
    assert!(take(&log).is_empty());
    assert_eq!(scheduler.callback_count(TickPhase::Physics), 0);
    assert_eq!(
        player.borrow_mut().request_reset(),
        Err(LifecycleError::Destroyed { id })
    );

    drop(player);
    assert_eq!(forgotten.borrow().len(), 1);
}

#[test]
fn entities_tick_independently() {
    let log_a = Log::default();
    let log_b = Log::default();
    let a = spawn(&log_a);
    let b = spawn(&log_b);
    let mut scheduler = ManualScheduler::new();
    EntityController::attach(&a, &mut scheduler);
    EntityController::attach(&b, &mut scheduler);

    a.borrow_mut().request_start().unwrap();
    b.borrow_mut().request_fail().unwrap();
    scheduler.step();

    assert_eq!(a.borrow().current_state().unwrap(), PlayerState::Active);
    assert_eq!(b.borrow().current_state().unwrap(), PlayerState::Failed);

    a.borrow_mut().destroy();
    scheduler.step();
    assert_eq!(b.borrow().tick().unwrap(), 2);
    assert_eq!(scheduler.callback_count(TickPhase::Physics), 1);
}
