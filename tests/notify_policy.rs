mod common;

use common::{fixture, fixture_with, path, Widget};
use soft_asset_loader::{LoaderConfig, NotifyPolicy, SoftObjectPtr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    (calls.clone(), calls)
}

#[test]
fn test_always_notifies_on_async_failure() {
    let f = fixture();
    let (calls, seen) = counter();

    f.loader
        .load_async_with(SoftObjectPtr::<Widget>::new(path("/Game/C")), move |loaded| {
            assert!(loaded.is_none());
            seen.fetch_add(1, Ordering::SeqCst);
        });
    f.manager.pump();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.diagnostics.count(), 1);
}

#[test]
fn test_success_only_suppresses_async_failure() {
    let f = fixture_with(LoaderConfig::new().with_notify_policy(NotifyPolicy::SuccessOnly));
    let (calls, seen) = counter();

    f.loader
        .load_async_with(SoftObjectPtr::<Widget>::new(path("/Game/C")), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
    f.manager.pump();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // Still reported
    assert_eq!(f.diagnostics.count(), 1);
}

#[test]
fn test_success_only_suppresses_null_reference() {
    let f = fixture_with(LoaderConfig::new().with_notify_policy(NotifyPolicy::SuccessOnly));
    let (calls, seen) = counter();

    f.loader
        .load_async_with(SoftObjectPtr::<Widget>::null(), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.diagnostics.count(), 1);
}

#[test]
fn test_success_only_still_delivers_success() {
    let f = fixture_with(LoaderConfig::new().with_notify_policy(NotifyPolicy::SuccessOnly));
    f.manager
        .stage_object(path("/Game/B"), Arc::new(Widget { name: "V2" }));
    let (calls, seen) = counter();

    f.loader
        .load_async_with(SoftObjectPtr::<Widget>::new(path("/Game/B")), move |loaded| {
            assert!(loaded.is_some());
            seen.fetch_add(1, Ordering::SeqCst);
        });
    f.manager.pump();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_futures_ignore_policy() {
    let f = fixture_with(LoaderConfig::new().with_notify_policy(NotifyPolicy::SuccessOnly));

    let future = f
        .loader
        .load_async(SoftObjectPtr::<Widget>::new(path("/Game/C")));
    f.manager.pump();

    assert!(future.is_ready());
    assert!(future.wait().is_none());
}

#[test]
fn test_per_call_policy_override() {
    let f = fixture();
    let (calls, seen) = counter();

    f.loader.load_async_with_policy(
        SoftObjectPtr::<Widget>::new(path("/Game/C")),
        NotifyPolicy::SuccessOnly,
        move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        },
    );
    f.manager.pump();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_policy_from_json_config() {
    let config = LoaderConfig::from_json(r#"{ "notify_policy": "success_only" }"#).unwrap();
    let f = fixture_with(config);
    assert_eq!(f.loader.config().notify_policy, NotifyPolicy::SuccessOnly);
}
