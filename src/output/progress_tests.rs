use super::*;

#[test]
fn hidden_in_quiet_mode_still_counts() {
    let progress = ScanProgress::new(3, true);
    progress.inc();
    progress.inc();
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn clones_share_the_counter() {
    let progress = ScanProgress::new(10, true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn visible_bar_accepts_increments() {
    let progress = ScanProgress::new_with_visibility(2, false, true);
    progress.inc();
    progress.inc();
    assert_eq!(progress.position(), 2);
    progress.finish();
}
