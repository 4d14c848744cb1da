//! Dispatcher lifecycle integration tests.
//!
//! These walk tickets through the full state machine:
//! created -> (directly assigned | waiting) -> assigned -> completed

use loket_core::{Category, CategoryConfig, Completion, EngineError, QueueDispatcher};

fn teller_dispatcher(counters: usize) -> QueueDispatcher {
    QueueDispatcher::new(
        Category::Teller,
        &CategoryConfig {
            prefix: "A".to_string(),
            counters,
        },
    )
}

#[test]
fn test_reference_scenario_bank_of_two() {
    let mut dispatcher = teller_dispatcher(2);

    // Bank starts empty: Ana is seated directly at counter 1.
    let ana = dispatcher.admit("Ana").unwrap();
    assert_eq!(ana.ticket.code, "A 001");
    assert_eq!(ana.assigned_counter, Some(1));

    // Budi takes counter 2.
    let budi = dispatcher.admit("Budi").unwrap();
    assert_eq!(budi.ticket.code, "A 002");
    assert_eq!(budi.assigned_counter, Some(2));

    // No idle counter left: Citra waits.
    let citra = dispatcher.admit("Citra").unwrap();
    assert_eq!(citra.ticket.code, "A 003");
    assert_eq!(citra.assigned_counter, None);
    assert_eq!(dispatcher.status().waiting.len(), 1);

    // Counter 1 finishes with Ana.
    let completion = dispatcher.complete(1).unwrap();
    match completion {
        Completion::Served { counter, ticket } => {
            assert_eq!(counter, 1);
            assert_eq!(ticket.code, "A 001");
        }
        other => panic!("expected Served, got {:?}", other),
    }

    // Citra is only called once dispatch runs.
    let calls = dispatcher.dispatch().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].counter, 1);
    assert_eq!(calls[0].ticket.code, "A 003");

    let status = dispatcher.status();
    assert!(status.waiting.is_empty());
    assert_eq!(status.counters[0].occupant.as_ref().unwrap().code, "A 003");
    assert_eq!(status.counters[1].occupant.as_ref().unwrap().code, "A 002");
}

#[test]
fn test_sequence_numbers_increase_by_one_across_paths() {
    let mut dispatcher = teller_dispatcher(3);

    let mut previous = 0;
    for i in 0usize..25 {
        let admission = dispatcher.admit(&format!("customer-{i}")).unwrap();
        assert_eq!(admission.ticket.number, previous + 1);
        previous = admission.ticket.number;

        // Churn some counters so both admission paths are exercised.
        if i % 4 == 0 {
            let _ = dispatcher.complete(1 + (i % 3)).unwrap();
        }
    }
}

#[test]
fn test_waiting_queue_and_counters_never_intersect() {
    let mut dispatcher = teller_dispatcher(2);

    for name in ["Ana", "Budi", "Citra", "Dewi", "Eka", "Fajar"] {
        dispatcher.admit(name).unwrap();
    }
    dispatcher.complete(2).unwrap();
    dispatcher.dispatch().unwrap();
    dispatcher.complete(1).unwrap();

    let status = dispatcher.status();
    let serving: Vec<u64> = status
        .counters
        .iter()
        .filter_map(|c| c.occupant.as_ref().map(|t| t.number))
        .collect();
    let waiting: Vec<u64> = status.waiting.iter().map(|t| t.number).collect();

    for number in &waiting {
        assert!(
            !serving.contains(number),
            "ticket {number} is both waiting and at a counter"
        );
    }
}

#[test]
fn test_bank_never_exceeds_its_size() {
    let mut dispatcher = teller_dispatcher(2);

    for i in 0..10 {
        dispatcher.admit(&format!("customer-{i}")).unwrap();
        dispatcher.dispatch().unwrap();
        let status = dispatcher.status();
        assert_eq!(status.counters.len(), 2);
        let busy = status.counters.iter().filter(|c| c.occupant.is_some()).count();
        assert!(busy <= 2);
    }
}

#[test]
fn test_dispatch_twice_is_a_noop_the_second_time() {
    let mut dispatcher = teller_dispatcher(2);
    dispatcher.admit("Ana").unwrap();
    dispatcher.admit("Budi").unwrap();
    dispatcher.admit("Citra").unwrap();
    dispatcher.complete(1).unwrap();

    let before = dispatcher.status();
    assert_eq!(dispatcher.dispatch().unwrap().len(), 1);
    let after_first = dispatcher.status();
    assert_ne!(before, after_first);

    assert!(dispatcher.dispatch().unwrap().is_empty());
    assert_eq!(dispatcher.status(), after_first);
}

#[test]
fn test_dispatch_on_quiet_hall_is_a_noop() {
    let mut dispatcher = teller_dispatcher(2);
    assert!(dispatcher.dispatch().unwrap().is_empty());

    // All counters busy, queue non-empty: still nothing to do.
    dispatcher.admit("Ana").unwrap();
    dispatcher.admit("Budi").unwrap();
    dispatcher.admit("Citra").unwrap();
    assert!(dispatcher.dispatch().unwrap().is_empty());
    assert_eq!(dispatcher.status().waiting.len(), 1);
}

#[test]
fn test_complete_out_of_range_changes_nothing() {
    let mut dispatcher = teller_dispatcher(4);
    dispatcher.admit("Ana").unwrap();
    let before = dispatcher.status();

    let err = dispatcher.complete(5).unwrap_err();
    assert_eq!(err, EngineError::InvalidCounterIndex { index: 5, size: 4 });
    assert_eq!(dispatcher.status(), before);
}

#[test]
fn test_complete_idle_counter_changes_nothing() {
    let mut dispatcher = teller_dispatcher(4);
    dispatcher.admit("Ana").unwrap();
    let before = dispatcher.status();

    let outcome = dispatcher.complete(2).unwrap();
    assert_eq!(outcome, Completion::AlreadyEmpty { counter: 2 });
    assert_eq!(dispatcher.status(), before);
}

#[test]
fn test_status_round_trip_after_mixed_operations() {
    let mut dispatcher = teller_dispatcher(2);

    dispatcher.admit("Ana").unwrap(); // counter 1
    dispatcher.admit("Budi").unwrap(); // counter 2
    dispatcher.admit("Citra").unwrap(); // waiting
    dispatcher.admit("Dewi").unwrap(); // waiting
    dispatcher.complete(1).unwrap(); // Ana done
    dispatcher.dispatch().unwrap(); // Citra -> counter 1

    let status = dispatcher.status();
    assert_eq!(status.counters[0].occupant.as_ref().unwrap().code, "A 003");
    assert_eq!(status.counters[1].occupant.as_ref().unwrap().code, "A 002");
    let waiting: Vec<&str> = status.waiting.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(waiting, vec!["A 004"]);
}

#[test]
fn test_customer_names_travel_with_tickets() {
    let mut dispatcher = teller_dispatcher(1);
    dispatcher.admit("Ana").unwrap();
    dispatcher.admit("Budi").unwrap();

    let status = dispatcher.status();
    assert_eq!(
        status.counters[0].occupant.as_ref().unwrap().customer.name,
        "Ana"
    );
    assert_eq!(status.waiting[0].customer.name, "Budi");
}
