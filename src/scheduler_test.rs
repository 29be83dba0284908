use super::*;

fn token(raw: u64) -> TimerToken {
    TimerToken::new(raw)
}

// =============================================================
// TimerToken
// =============================================================

#[test]
fn timer_token_exposes_raw_value() {
    assert_eq!(token(7).get(), 7);
    assert_eq!(token(7), token(7));
    assert_ne!(token(7), token(8));
}

// =============================================================
// ManualScheduler
// =============================================================

#[test]
fn nothing_fires_before_delay_elapses() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(token(1), 300);
    assert!(scheduler.advance(299).is_empty());
    assert!(scheduler.is_pending(token(1)));
}

#[test]
fn task_fires_exactly_at_delay() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(token(1), 300);
    assert_eq!(scheduler.advance(300), vec![token(1)]);
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(scheduler.now_ms(), 300);
}

#[test]
fn fired_task_does_not_fire_twice() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(token(1), 10);
    assert_eq!(scheduler.advance(10), vec![token(1)]);
    assert!(scheduler.advance(1000).is_empty());
}

#[test]
fn cancelled_task_never_fires() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(token(1), 300);
    scheduler.cancel(token(1));
    assert!(scheduler.advance(1000).is_empty());
}

#[test]
fn cancel_unknown_token_is_ignored() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(token(1), 300);
    scheduler.cancel(token(99));
    assert_eq!(scheduler.pending_count(), 1);
}

#[test]
fn due_tasks_come_back_in_due_order() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(token(1), 300);
    scheduler.schedule(token(2), 100);
    scheduler.schedule(token(3), 100);
    assert_eq!(scheduler.advance(500), vec![token(2), token(3), token(1)]);
}

#[test]
fn delay_is_relative_to_current_clock() {
    let mut scheduler = ManualScheduler::new();
    assert!(scheduler.advance(1000).is_empty());
    scheduler.schedule(token(1), 300);
    assert!(scheduler.advance(200).is_empty());
    assert_eq!(scheduler.advance(100), vec![token(1)]);
}
