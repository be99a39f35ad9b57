use std::rc::Rc;

use otui_core::{
    DialogController, DialogState, DialogText, DismissAction, DismissPolicy, ListenerBindings,
    ModalSurface, SurfaceEvent, Transition,
};
use otui_test_support::{
    CallLog, GestureOutcome, RecordingSurface, click_backdrop, native_close, press_escape,
    press_escape_consumed,
};

fn mounted(policy: DismissPolicy, calls: &CallLog) -> DialogController<RecordingSurface> {
    let mut controller = DialogController::new(RecordingSurface::new());
    controller.attach_listeners(ListenerBindings::new(calls.handler("close"), policy));
    controller
}

const fn policy(close_by_backdrop: bool, close_by_escape: bool) -> DismissPolicy {
    DismissPolicy {
        close_by_backdrop,
        close_by_escape,
    }
}

#[test]
fn surface_follows_open_flag_with_one_call_per_transition() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);

    for _ in 0..3 {
        assert_eq!(controller.synchronize(true)?, Transition::Shown);
        assert_eq!(controller.synchronize(true)?, Transition::Unchanged);
        assert_eq!(controller.state(), DialogState::Open);
        assert_eq!(controller.synchronize(false)?, Transition::Hidden);
        assert_eq!(controller.synchronize(false)?, Transition::Unchanged);
        assert_eq!(controller.state(), DialogState::Closed);
    }

    assert_eq!(controller.surface().show_calls(), 3);
    assert_eq!(controller.surface().close_calls(), 3);
    Ok(())
}

#[test]
fn backdrop_is_ignored_when_disabled() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(policy(false, true), &calls);
    controller.synchronize(true)?;

    assert_eq!(click_backdrop(&mut controller), GestureOutcome::Suppressed);
    assert_eq!(calls.count("close"), 0);
    assert_eq!(controller.state(), DialogState::Open);
    Ok(())
}

#[test]
fn default_policy_dismisses_once_per_gesture() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);

    controller.synchronize(true)?;
    assert_eq!(click_backdrop(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(calls.count("close"), 1);
    controller.synchronize(false)?;

    controller.synchronize(true)?;
    assert_eq!(press_escape(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(calls.count("close"), 2);
    Ok(())
}

#[test]
fn escape_scenario_reports_a_single_close() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);
    controller.synchronize(false)?;
    controller.synchronize(true)?;

    assert_eq!(press_escape(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(calls.entries(), vec!["close"]);
    assert_eq!(calls.count("confirm"), 0);

    // The caller reacts to on_close by flipping is_open; the surface is
    // already hidden, so nothing else happens.
    assert_eq!(controller.synchronize(false)?, Transition::Unchanged);
    assert_eq!(calls.count("close"), 1);
    Ok(())
}

#[test]
fn escape_is_ignored_when_disabled() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(policy(true, false), &calls);
    controller.synchronize(true)?;

    assert_eq!(press_escape(&mut controller), GestureOutcome::Suppressed);
    assert_eq!(calls.count("close"), 0);
    assert_eq!(controller.state(), DialogState::Open);
    Ok(())
}

#[test]
fn escape_cancel_is_not_gated_by_backdrop_flag() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(policy(false, true), &calls);
    controller.synchronize(true)?;

    assert_eq!(press_escape(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(calls.count("close"), 1);
    Ok(())
}

#[test]
fn backdrop_dismisses_after_blocked_escape() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(policy(true, false), &calls);
    controller.synchronize(true)?;

    assert_eq!(
        controller.dispatch(SurfaceEvent::escape()).finish(),
        DismissAction::Suppress
    );
    assert_eq!(click_backdrop(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(calls.count("close"), 1);
    Ok(())
}

#[test]
fn consumed_escape_does_not_unlock_backdrop() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(policy(false, true), &calls);
    controller.synchronize(true)?;

    press_escape_consumed(&mut controller);
    assert_eq!(click_backdrop(&mut controller), GestureOutcome::Suppressed);
    assert_eq!(calls.count("close"), 0);
    assert_eq!(controller.state(), DialogState::Open);

    assert_eq!(press_escape(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(calls.count("close"), 1);
    Ok(())
}

#[test]
fn confirm_runs_confirm_then_close() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);
    controller.synchronize(true)?;

    let dispatch =
        controller.confirm_submit(Some(calls.handler("confirm")), calls.handler("close"));
    assert_eq!(dispatch.pending(), 2);
    dispatch.finish();
    assert_eq!(calls.entries(), vec!["confirm", "close"]);

    // Caller closes in response; the host then fires `close`.
    controller.synchronize(false)?;
    native_close(&mut controller);
    assert_eq!(calls.entries(), vec!["confirm", "close"]);
    Ok(())
}

#[test]
fn confirm_without_handler_only_closes() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);
    controller.synchronize(true)?;

    controller.confirm_submit(None, calls.handler("close")).finish();
    assert_eq!(calls.entries(), vec!["close"]);
    Ok(())
}

#[test]
fn confirm_control_requires_handler() {
    let text = DialogText::default().with_overrides(Some("Delete"), Some("Keep"));

    let footer = text.clone().footer(false);
    assert_eq!(footer.cancel, "Keep");
    assert!(footer.confirm.is_none());

    let footer = text.footer(true);
    assert_eq!(footer.confirm.as_deref(), Some("Delete"));
}

#[test]
fn cancel_button_bypasses_dismissal_policy() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(policy(false, false), &calls);
    controller.synchronize(true)?;

    controller.cancel_click(calls.handler("close")).finish();
    assert_eq!(calls.count("close"), 1);

    controller.cancel_click(calls.handler("close")).finish();
    assert_eq!(calls.count("close"), 1);
    Ok(())
}

#[test]
fn external_close_reports_once_and_reopen_rearms() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);

    controller.synchronize(true)?;
    controller.synchronize(false)?;
    native_close(&mut controller);
    assert_eq!(calls.count("close"), 1);

    controller.synchronize(true)?;
    controller.cancel_click(calls.handler("close")).finish();
    assert_eq!(calls.count("close"), 2);
    Ok(())
}

#[test]
fn native_close_after_cancel_click_is_not_reported_twice() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);
    controller.synchronize(true)?;

    controller.cancel_click(calls.handler("close")).finish();
    // The caller has not cleared is_open yet when Escape closes the surface.
    assert_eq!(press_escape(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(controller.state(), DialogState::Closed);
    assert_eq!(calls.count("close"), 1);

    assert_eq!(controller.synchronize(false)?, Transition::Unchanged);
    assert_eq!(controller.synchronize(true)?, Transition::Shown);
    assert_eq!(click_backdrop(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(calls.count("close"), 2);
    Ok(())
}

#[test]
fn rebinding_replaces_listeners() -> anyhow::Result<()> {
    let first = CallLog::new();
    let second = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &first);
    controller.attach_listeners(ListenerBindings::new(
        second.handler("close"),
        DismissPolicy::default(),
    ));

    let stats = controller.listener_stats();
    assert_eq!((stats.attached, stats.detached), (2, 1));
    assert!(stats.active());

    controller.synchronize(true)?;
    assert_eq!(press_escape(&mut controller), GestureOutcome::Dismissed);
    assert_eq!(first.count("close"), 0);
    assert_eq!(second.count("close"), 1);
    Ok(())
}

#[test]
fn detached_listeners_never_reach_stale_callbacks() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let mut controller = mounted(policy(false, false), &calls);
    controller.synchronize(true)?;

    assert!(controller.detach_listeners());
    assert!(!controller.listener_stats().active());

    assert_eq!(
        controller.dispatch(SurfaceEvent::Cancel).finish(),
        DismissAction::Allow
    );
    assert_eq!(
        controller.dispatch(SurfaceEvent::escape()).finish(),
        DismissAction::Allow
    );
    assert_eq!(controller.dispatch(SurfaceEvent::Close).pending(), 0);
    assert!(calls.entries().is_empty());
    Ok(())
}

#[test]
fn unmount_while_open_releases_surface() -> anyhow::Result<()> {
    let calls = CallLog::new();
    let surface = RecordingSurface::new();
    let mut controller = DialogController::new(surface.clone());
    controller.attach_listeners(ListenerBindings::new(
        calls.handler("close"),
        DismissPolicy::default(),
    ));
    controller.synchronize(true)?;

    drop(controller);
    assert!(!surface.is_open());
    assert_eq!(surface.close_calls(), 1);
    assert!(calls.entries().is_empty());
    Ok(())
}

#[test]
fn show_failure_is_reported_and_retry_succeeds() {
    let calls = CallLog::new();
    let mut controller = mounted(DismissPolicy::default(), &calls);
    controller.surface().fail_next_show("element is not connected");

    let err = controller.synchronize(true).unwrap_err();
    assert_eq!(err.message(), "element is not connected");
    assert_eq!(controller.state(), DialogState::Closed);

    assert_eq!(controller.synchronize(true), Ok(Transition::Shown));
}

fn failing_close() {
    panic!("caller failure");
}

#[test]
fn callback_panics_pass_through() {
    let mut controller = DialogController::new(RecordingSurface::new());
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        controller.cancel_click(Rc::new(failing_close)).finish();
    }));
    assert!(result.is_err());
}
