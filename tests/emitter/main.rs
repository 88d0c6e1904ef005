//! Emitter integration tests: the observable dispatch contract, end to end.

mod events;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use emitter_rust::{EmitResult, EventEmitter};
use events::{AppEvent, AppEventKind};

fn recorder() -> (Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    (Arc::clone(&seen), seen)
}

#[test]
fn handlers_run_in_order_with_the_payload() {
    let bus = EventEmitter::new();
    let (sink, seen) = recorder();

    let first = Arc::clone(&sink);
    bus.on(AppEventKind::Welcome, move |event: &AppEvent| {
        if let AppEvent::Welcome { name } = event {
            first.lock().unwrap().push(format!("first saw {}", name));
        }
    });

    let second = Arc::clone(&sink);
    bus.on(AppEventKind::Welcome, move |event: &AppEvent| {
        if let AppEvent::Welcome { name } = event {
            second.lock().unwrap().push(format!("second saw {}", name));
        }
    });

    let result = bus.emit(&AppEvent::Welcome {
        name: "Alice".to_string(),
    });

    assert_eq!(result.delivered, 2);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["first saw Alice".to_string(), "second saw Alice".to_string()]
    );
}

#[test]
fn welcome_scenario() {
    let bus = EventEmitter::new();
    let (sink, seen) = recorder();

    let greetings = Arc::clone(&sink);
    let greeter = bus.on(AppEventKind::Welcome, move |event: &AppEvent| {
        if let AppEvent::Welcome { name } = event {
            greetings.lock().unwrap().push(format!("welcome, {}", name));
        }
    });

    let ready_count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ready_count);
    bus.once(AppEventKind::Ready, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    bus.emit(&AppEvent::Welcome {
        name: "Alice".to_string(),
    });
    bus.emit(&AppEvent::Ready);
    bus.emit(&AppEvent::Ready);

    assert!(bus.off(greeter));
    bus.emit(&AppEvent::Welcome {
        name: "Bob".to_string(),
    });

    assert_eq!(*seen.lock().unwrap(), vec!["welcome, Alice".to_string()]);
    assert_eq!(ready_count.load(Ordering::SeqCst), 1);
}

#[test]
fn off_silences_only_that_handler() {
    let bus = EventEmitter::new();
    let (sink, seen) = recorder();

    let first = Arc::clone(&sink);
    let id = bus.on(AppEventKind::Ready, move |_| {
        first.lock().unwrap().push("first".to_string());
    });
    let second = Arc::clone(&sink);
    bus.on(AppEventKind::Ready, move |_| {
        second.lock().unwrap().push("second".to_string());
    });

    assert!(bus.off(id));
    bus.emit(&AppEvent::Ready);

    assert_eq!(*seen.lock().unwrap(), vec!["second".to_string()]);
}

#[test]
fn off_with_a_stale_id_is_a_no_op() {
    let bus = EventEmitter::new();
    let id = bus.on(AppEventKind::Tick, |_: &AppEvent| {});

    assert!(bus.off(id));
    assert!(!bus.off(id));
    assert!(!bus.off(id));
    assert_eq!(bus.total_listeners(), 0);
}

#[test]
fn duplicate_registrations_are_distinct_subscriptions() {
    let bus = EventEmitter::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let handler = {
        let calls = Arc::clone(&calls);
        move |_: &AppEvent| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    };

    let first = bus.on(AppEventKind::Tick, handler.clone());
    let second = bus.on(AppEventKind::Tick, handler);
    assert_ne!(first, second);
    assert_eq!(bus.listener_count(AppEventKind::Tick), 2);

    // Removing one subscription leaves the other registration untouched,
    // even though both wrap the same closure.
    assert!(bus.off(first));
    bus.emit(&AppEvent::Tick(1));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn once_sees_only_the_first_event() {
    let bus = EventEmitter::new();
    let (sink, seen) = recorder();

    bus.once(AppEventKind::Tick, move |event: &AppEvent| {
        if let AppEvent::Tick(n) = event {
            sink.lock().unwrap().push(n.to_string());
        }
    });

    bus.emit(&AppEvent::Tick(1));
    assert_eq!(bus.listener_count(AppEventKind::Tick), 0);
    bus.emit(&AppEvent::Tick(2));

    assert_eq!(*seen.lock().unwrap(), vec!["1".to_string()]);
}

#[test]
fn emit_with_no_listeners_returns_an_empty_result() {
    let bus: EventEmitter<AppEvent> = EventEmitter::new();
    assert_eq!(bus.emit(&AppEvent::Ready), EmitResult::default());
    assert!(!bus.has_listeners(AppEventKind::Ready));
}

#[test]
fn late_registrations_wait_for_the_next_emit() {
    let bus = EventEmitter::new();
    let late_calls = Arc::new(AtomicUsize::new(0));

    let registrar = bus.clone();
    let counter = Arc::clone(&late_calls);
    bus.on(AppEventKind::Ready, move |_| {
        let late = Arc::clone(&counter);
        registrar.on(AppEventKind::Ready, move |_| {
            late.fetch_add(1, Ordering::SeqCst);
        });
    });

    assert_eq!(bus.emit(&AppEvent::Ready).delivered, 1);
    assert_eq!(late_calls.load(Ordering::SeqCst), 0);

    assert_eq!(bus.emit(&AppEvent::Ready).delivered, 2);
    assert_eq!(late_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn removal_during_emit_does_not_retract_the_snapshot() {
    let bus = EventEmitter::new();
    let victim_calls = Arc::new(AtomicUsize::new(0));
    let victim_id = Arc::new(Mutex::new(None));

    let remover = bus.clone();
    let target = Arc::clone(&victim_id);
    bus.on(AppEventKind::Ready, move |_| {
        if let Some(id) = *target.lock().unwrap() {
            remover.off(id);
        }
    });

    let counter = Arc::clone(&victim_calls);
    let victim = bus.on(AppEventKind::Ready, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    *victim_id.lock().unwrap() = Some(victim);

    assert_eq!(bus.emit(&AppEvent::Ready).delivered, 2);
    assert_eq!(victim_calls.load(Ordering::SeqCst), 1);

    // The removal took effect for later emits.
    assert_eq!(bus.emit(&AppEvent::Ready).delivered, 1);
    assert_eq!(victim_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn a_panicking_handler_is_isolated() {
    let bus = EventEmitter::new();
    let calls = Arc::new(AtomicUsize::new(0));

    bus.on(AppEventKind::Ready, |_: &AppEvent| {
        panic!("handler blew up")
    });
    let counter = Arc::clone(&calls);
    bus.on(AppEventKind::Ready, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let result = bus.emit(&AppEvent::Ready);
    assert_eq!(result.failed, 1);
    assert_eq!(result.delivered, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // The panicking handler stays registered; only once handlers are
    // consumed by delivery.
    assert_eq!(bus.listener_count(AppEventKind::Ready), 2);
}

#[test]
fn reentrant_emit_cannot_redeliver_a_once_handler() {
    let bus = EventEmitter::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let inner = bus.clone();
    let counter = Arc::clone(&calls);
    bus.once(AppEventKind::Ready, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        inner.emit(&AppEvent::Ready);
    });

    bus.emit(&AppEvent::Ready);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn a_once_consumed_by_a_reentrant_emit_counts_as_skipped() {
    let bus = EventEmitter::new();
    let once_calls = Arc::new(AtomicUsize::new(0));
    let inner_result = Arc::new(Mutex::new(None));

    // The first handler re-emits once. The inner emit claims the one-shot
    // from the shared registry before the outer emit reaches its own
    // snapshot entry for it.
    let reemitter = bus.clone();
    let inner_slot = Arc::clone(&inner_result);
    let depth = Arc::new(AtomicUsize::new(0));
    bus.on(AppEventKind::Ready, move |_| {
        if depth.fetch_add(1, Ordering::SeqCst) == 0 {
            *inner_slot.lock().unwrap() = Some(reemitter.emit(&AppEvent::Ready));
        }
    });

    let counter = Arc::clone(&once_calls);
    bus.once(AppEventKind::Ready, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let outer = bus.emit(&AppEvent::Ready);

    // The inner emit delivered both handlers and consumed the one-shot.
    let inner = inner_result.lock().unwrap().unwrap();
    assert_eq!(inner.delivered, 2);
    assert_eq!(inner.skipped, 0);

    // The outer snapshot still held the one-shot, but the claim had
    // already gone to the inner emit.
    assert_eq!(outer.delivered, 1);
    assert_eq!(outer.skipped, 1);
    assert_eq!(outer.failed, 0);
    assert_eq!(once_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn clones_share_the_registry() {
    let bus = EventEmitter::new();
    let clone = bus.clone();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    clone.on(AppEventKind::Tick, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    bus.emit(&AppEvent::Tick(7));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    clone.clear();
    assert_eq!(bus.total_listeners(), 0);
}

#[test]
fn emits_from_many_threads_all_deliver() {
    let bus = EventEmitter::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    bus.on(AppEventKind::Tick, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut workers = Vec::new();
    for worker in 0..4 {
        let bus = bus.clone();
        workers.push(thread::spawn(move || {
            for n in 0..100 {
                bus.emit(&AppEvent::Tick(worker * 100 + n));
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 400);
}

#[test]
fn concurrent_emits_deliver_a_once_handler_exactly_once() {
    let bus = EventEmitter::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    bus.once(AppEventKind::Ready, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut workers = Vec::new();
    for _ in 0..8 {
        let bus = bus.clone();
        workers.push(thread::spawn(move || {
            bus.emit(&AppEvent::Ready);
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(bus.listener_count(AppEventKind::Ready), 0);
}
