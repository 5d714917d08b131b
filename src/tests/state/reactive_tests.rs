use std::sync::Mutex;

use super::*;

#[test]
fn get_returns_a_snapshot_of_the_latest_value() {
    let store = Store::new(vec![1, 2]);
    let snapshot = store.get();
    store.update(|v| v.push(3));

    assert_eq!(snapshot, vec![1, 2]);
    assert_eq!(store.get(), vec![1, 2, 3]);
}

#[test]
fn clones_share_one_value() {
    let a = Store::new(String::from("x"));
    let b = a.clone();
    b.set("y".to_string());
    assert_eq!(a.get(), "y");
}

#[test]
fn subscribers_see_every_write_but_not_the_initial_value() {
    let store = Store::new(0u32);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(move |v| sink.lock().unwrap().push(*v));

    assert!(seen.lock().unwrap().is_empty());
    store.set(5);
    store.update(|v| *v += 1);
    assert_eq!(*seen.lock().unwrap(), vec![5, 6]);
}

#[test]
fn dropping_the_subscription_unsubscribes() {
    let store = Store::new(0u32);
    let count = Arc::new(AtomicU64::new(0));
    let c = Arc::clone(&count);
    let sub = store.subscribe(move |_| {
        c.fetch_add(1, Ordering::Relaxed);
    });
    store.set(1);
    drop(sub);
    store.set(2);

    assert_eq!(count.load(Ordering::Relaxed), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn detached_subscription_stays_registered() {
    let store = Store::new(0u32);
    store.subscribe(|_| {}).detach();
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn subscriber_may_read_and_write_other_stores_without_deadlock() {
    let source = Store::new(0u32);
    let mirror = Store::new(0u32);
    let m = mirror.clone();
    let src = source.clone();
    let _sub = source.subscribe(move |v| {
        // Reading the notifying store from inside the callback must not block.
        assert_eq!(src.get(), *v);
        m.set(*v * 10);
    });

    source.set(4);
    assert_eq!(mirror.get(), 40);
}

#[test]
fn update_returns_the_closure_result() {
    let store = Store::new(vec!["a".to_string(), "b".to_string()]);
    let removed = store.update(|v| v.pop());
    assert_eq!(removed.as_deref(), Some("b"));
    assert_eq!(store.with(Vec::len), 1);
}
