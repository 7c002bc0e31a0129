use broadside::{GameError, Progression, INITIAL_RADAR_CHARGES, UNLOCK_WINDOW};

#[test]
fn test_initial_state() {
    let p = Progression::new();
    assert_eq!(p.kills(), 0);
    assert_eq!(p.radar_charges(), INITIAL_RADAR_CHARGES);
    assert_eq!(p.smoke_charges(), 0);
    assert!(!p.artillery_ready());
    assert!(!p.torpedo_ready());
}

#[test]
fn test_first_kill_unlocks_artillery() {
    let mut p = Progression::new();
    p.record_kill();
    assert_eq!(p.kills(), 1);
    assert_eq!(p.smoke_charges(), 1);
    assert_eq!(p.artillery_timer(), UNLOCK_WINDOW);
    assert!(p.artillery_ready());
    assert!(!p.torpedo_ready());
}

#[test]
fn test_artillery_window_expires_to_not_unlocked() {
    let mut p = Progression::new();
    p.record_kill();
    assert_eq!(p.artillery_timer(), 2);
    p.begin_turn();
    assert_eq!(p.artillery_timer(), 1);
    p.begin_turn();
    assert_eq!(p.artillery_timer(), 0);
    assert_eq!(p.spend_artillery(), Err(GameError::NotUnlocked));
}

#[test]
fn test_artillery_unlock_does_not_retrigger() {
    let mut p = Progression::new();
    p.record_kill();
    p.begin_turn();
    p.begin_turn();
    assert!(!p.artillery_ready());

    // Later kills never reopen the artillery window.
    p.record_kill();
    assert!(!p.artillery_ready());
}

#[test]
fn test_third_kill_unlocks_torpedo() {
    let mut p = Progression::new();
    p.record_kill();
    p.record_kill();
    assert!(!p.torpedo_ready());
    p.record_kill();
    assert_eq!(p.torpedo_timer(), UNLOCK_WINDOW);
    assert!(p.torpedo_ready());
    assert_eq!(p.spend_torpedo(), Ok(()));
    // Single use: the timer is forced to zero.
    assert_eq!(p.torpedo_timer(), 0);
    assert_eq!(p.spend_torpedo(), Err(GameError::NotUnlocked));
}

#[test]
fn test_spend_artillery_is_single_use() {
    let mut p = Progression::new();
    p.record_kill();
    assert_eq!(p.spend_artillery(), Ok(()));
    assert_eq!(p.artillery_timer(), 0);
    assert_eq!(p.spend_artillery(), Err(GameError::NotUnlocked));
}

#[test]
fn test_timers_floor_at_zero() {
    let mut p = Progression::new();
    p.begin_turn();
    p.begin_turn();
    assert_eq!(p.artillery_timer(), 0);
    assert_eq!(p.torpedo_timer(), 0);
}

#[test]
fn test_smoke_charges_accumulate_per_kill() {
    let mut p = Progression::new();
    assert_eq!(p.spend_smoke(), Err(GameError::NoChargesRemaining));
    p.record_kill();
    p.record_kill();
    assert_eq!(p.smoke_charges(), 2);
    assert_eq!(p.spend_smoke(), Ok(()));
    assert_eq!(p.spend_smoke(), Ok(()));
    assert_eq!(p.spend_smoke(), Err(GameError::NoChargesRemaining));
}

#[test]
fn test_radar_charges_run_out() {
    let mut p = Progression::new();
    for _ in 0..INITIAL_RADAR_CHARGES {
        assert_eq!(p.spend_radar(), Ok(()));
    }
    assert_eq!(p.spend_radar(), Err(GameError::NoChargesRemaining));
}
