use super::*;

use kasuwa::nav::FORCE_FULL_NAV_KEY;
use kasuwa::storage::MemoryStore;

// =============================================================
// settle_nav_check
// =============================================================

#[test]
fn outcome_after_unmount_is_discarded() {
    let store = MemoryStore::new();
    let alive = AtomicBool::new(false);

    let next = settle_nav_check(&alive, &store, &ProbeOutcome::Unreachable("timeout".to_owned()));

    assert_eq!(next, None);
    assert_eq!(store.get(FORCE_FULL_NAV_KEY), None);
}

#[test]
fn unreachable_while_mounted_degrades_and_sets_flag() {
    let store = MemoryStore::new();
    let alive = AtomicBool::new(true);

    let next = settle_nav_check(&alive, &store, &ProbeOutcome::Unreachable("timeout".to_owned()));

    assert_eq!(next, Some(NavHealth::Degraded));
    assert_eq!(store.get(FORCE_FULL_NAV_KEY), Some("1".to_owned()));
}

#[test]
fn reachable_while_mounted_clears_flag() {
    let store = MemoryStore::new();
    store.set(FORCE_FULL_NAV_KEY, "1");
    let alive = AtomicBool::new(true);

    let next = settle_nav_check(&alive, &store, &ProbeOutcome::Reachable);

    assert_eq!(next, Some(NavHealth::Ok));
    assert_eq!(store.get(FORCE_FULL_NAV_KEY), None);
}
