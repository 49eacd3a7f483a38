use std::sync::{Arc, Mutex};

use multipoker_engine::state::{RoundState as St, RoundStateMachine};
use multipoker_engine::variant::GameVariant;

type Log = Arc<Mutex<Vec<(St, St)>>>;

fn recording(machine: &mut RoundStateMachine) -> Log {
    let log: Log = Arc::default();
    let sink = Arc::clone(&log);
    machine.add_state_change_listener(move |prev, cur| sink.lock().unwrap().push((prev, cur)));
    log
}

fn machine_at(target: St) -> RoundStateMachine {
    let mut m = RoundStateMachine::new();
    while m.current_state() != target {
        m.advance();
    }
    m
}

#[test]
fn starts_waiting() {
    assert_eq!(RoundStateMachine::new().current_state(), St::Waiting);
}

#[test]
fn skipping_a_street_is_rejected() {
    let mut m = machine_at(St::Preflop);
    let log = recording(&mut m);

    assert!(!m.transition(St::River));
    assert_eq!(m.current_state(), St::Preflop);
    assert!(log.lock().unwrap().is_empty());

    assert!(m.transition(St::Flop));
    assert_eq!(m.current_state(), St::Flop);
    assert_eq!(*log.lock().unwrap(), vec![(St::Preflop, St::Flop)]);
}

#[test]
fn backward_and_self_transitions_are_rejected() {
    let mut m = machine_at(St::Turn);
    assert!(!m.transition(St::Flop));
    assert!(!m.transition(St::Turn));
    assert!(!m.transition(St::Waiting));
    assert_eq!(m.current_state(), St::Turn);
}

#[test]
fn full_hand_cycles_back_to_waiting() {
    let mut m = RoundStateMachine::new();
    let log = recording(&mut m);
    let order = [
        St::Starting,
        St::Preflop,
        St::Flop,
        St::Turn,
        St::River,
        St::Showdown,
        St::Finished,
        St::Waiting,
    ];
    for target in order {
        assert!(m.transition(target), "{target} should be reachable");
    }
    let log = log.lock().unwrap();
    assert_eq!(log.len(), 8);
    assert_eq!(log[7], (St::Finished, St::Waiting));
}

#[test]
fn listeners_fire_in_registration_order() {
    let mut m = RoundStateMachine::new();
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::default();
    for name in ["first", "second", "third"] {
        let sink = Arc::clone(&order);
        m.add_state_change_listener(move |_, _| sink.lock().unwrap().push(name));
    }
    m.advance();
    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn removed_listener_never_fires_again() {
    let mut m = RoundStateMachine::new();
    let log: Log = Arc::default();
    let sink = Arc::clone(&log);
    let id = m.add_state_change_listener(move |p, c| sink.lock().unwrap().push((p, c)));

    m.advance();
    assert!(m.remove_state_change_listener(id));
    assert!(!m.remove_state_change_listener(id));
    m.advance();
    m.advance();
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn panicking_listener_does_not_stop_the_others() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut m = machine_at(St::Flop);
    m.add_state_change_listener(|_, _| panic!("listener failure"));
    let log = recording(&mut m);

    assert!(m.transition(St::Turn));
    assert_eq!(m.current_state(), St::Turn);
    assert_eq!(*log.lock().unwrap(), vec![(St::Flop, St::Turn)]);

    // still usable afterwards
    assert!(m.transition(St::River));
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn reset_goes_to_waiting_silently() {
    let mut m = machine_at(St::River);
    let log = recording(&mut m);
    m.reset();
    assert_eq!(m.current_state(), St::Waiting);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn state_helpers() {
    assert!(St::Preflop.is_betting_street());
    assert!(!St::Showdown.is_betting_street());
    assert_eq!(St::Turn.community_cards_dealt(GameVariant::TexasHoldem), 4);
    assert_eq!(St::River.community_cards_dealt(GameVariant::Omaha), 5);
    assert_eq!(St::River.community_cards_dealt(GameVariant::SevenCardStud), 0);
}

#[test]
fn machines_move_between_threads() {
    let mut m = RoundStateMachine::new();
    let log = recording(&mut m);
    let handle = std::thread::spawn(move || {
        m.advance();
        m.current_state()
    });
    assert_eq!(handle.join().unwrap(), St::Starting);
    assert_eq!(log.lock().unwrap().len(), 1);
}
