use fgate_domain::config::FormConfig;
use fgate_domain::constants;
use fgate_domain::fields::{FieldKey, FieldState};
use fgate_domain::strength::{StrengthReport, StrengthTier};
use fgate_domain::verdict::{MessageKind, Verdict};
use fgate_form::engine::{FormEngine, SubmitOutcome};
use fgate_form::render::FormRenderer;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Everything the engine tells the renderer, in order.
#[derive(Debug, Clone, PartialEq)]
enum Event {
    Field { key: FieldKey, state: FieldState, verdict: Verdict },
    Strength(StrengthReport),
    Progress(u8),
    SubmitState { eligible: bool, pending: bool },
    Accepted,
    Rejected(String),
    Reset,
    Cleared(FieldKey),
}

#[derive(Debug, Default)]
struct Recording {
    events: Vec<Event>,
}

impl Recording {
    fn field_events(&self, key: FieldKey) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Field { key: k, .. } if *k == key))
            .collect()
    }

    fn last_progress(&self) -> Option<u8> {
        self.events.iter().rev().find_map(|event| match event {
            Event::Progress(percent) => Some(*percent),
            _ => None,
        })
    }

    fn last_submit_state(&self) -> Option<(bool, bool)> {
        self.events.iter().rev().find_map(|event| match event {
            Event::SubmitState { eligible, pending } => Some((*eligible, *pending)),
            _ => None,
        })
    }
}

impl FormRenderer for Recording {
    fn render_field(&mut self, key: FieldKey, state: FieldState, verdict: &Verdict) {
        self.events.push(Event::Field { key, state, verdict: verdict.clone() });
    }

    fn render_strength(&mut self, report: &StrengthReport) {
        self.events.push(Event::Strength(*report));
    }

    fn render_progress(&mut self, percent: u8) {
        self.events.push(Event::Progress(percent));
    }

    fn render_submit_state(&mut self, eligible: bool, pending: bool) {
        self.events.push(Event::SubmitState { eligible, pending });
    }

    fn on_submit_accepted(&mut self) {
        self.events.push(Event::Accepted);
    }

    fn on_submit_rejected(&mut self, reason: &str) {
        self.events.push(Event::Rejected(reason.to_owned()));
    }

    fn on_reset(&mut self) {
        self.events.push(Event::Reset);
    }

    fn clear_field(&mut self, key: FieldKey) {
        self.events.push(Event::Cleared(key));
    }
}

fn engine() -> FormEngine<Recording> {
    FormEngine::with_defaults(Recording::default())
}

fn timed_engine() -> FormEngine<Recording> {
    FormEngine::new(FormConfig::builder().submit_delay_ms(1500).build(), Recording::default())
}

/// Valid values plus a blur per field, the shortest path to eligibility.
fn fill_valid(engine: &mut FormEngine<Recording>) {
    let values = [
        (FieldKey::FullName, "John Doe"),
        (FieldKey::Email, "john@example.com"),
        (FieldKey::Password, "LongEnough1!"),
        (FieldKey::ConfirmPassword, "LongEnough1!"),
    ];
    for (key, value) in values {
        engine.notify_input(key, value);
        engine.notify_blur(key, value);
    }
}

#[test]
fn input_validates_marks_touched_and_publishes_derived_state() {
    let mut engine = engine();
    engine.notify_input(FieldKey::FullName, "John Doe");

    let state = engine.store().get(FieldKey::FullName);
    assert!(state.is_valid);
    assert!(state.touched, "input alone must mark the field touched");

    let recording = engine.renderer();
    match recording.field_events(FieldKey::FullName).last().unwrap() {
        Event::Field { verdict, .. } => {
            assert!(verdict.is_valid);
            assert_eq!(verdict.kind, MessageKind::Success);
        },
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(recording.last_progress(), Some(25));
    assert_eq!(recording.last_submit_state(), Some((false, false)));
}

#[test]
fn invalid_input_renders_the_error_verdict() {
    let mut engine = engine();
    engine.notify_input(FieldKey::Email, "a@b");

    let state = engine.store().get(FieldKey::Email);
    assert!(!state.is_valid);
    assert!(state.touched);

    match engine.renderer().field_events(FieldKey::Email).last().unwrap() {
        Event::Field { verdict, .. } => {
            assert_eq!(verdict.message, constants::EMAIL_INVALID);
        },
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn blur_marks_touched_even_for_an_empty_value() {
    let mut engine = engine();
    engine.notify_blur(FieldKey::Email, "");

    let state = engine.store().get(FieldKey::Email);
    assert!(state.touched);
    assert!(!state.is_valid);

    match engine.renderer().field_events(FieldKey::Email).last().unwrap() {
        Event::Field { verdict, .. } => {
            assert_eq!(verdict.message, constants::EMAIL_REQUIRED);
        },
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn password_input_updates_the_strength_meter() {
    let mut engine = engine();
    engine.notify_input(FieldKey::Password, "Abc12345");

    let report = engine
        .renderer()
        .events
        .iter()
        .find_map(|event| match event {
            Event::Strength(report) => Some(*report),
            _ => None,
        })
        .expect("password input must publish a strength report");
    assert_eq!(report.score(), 4);
    assert_eq!(report.tier, Some(StrengthTier::Good));

    // Clearing the password sends the unset report.
    engine.notify_input(FieldKey::Password, "");
    let last_report = engine.renderer().events.iter().rev().find_map(|event| match event {
        Event::Strength(report) => Some(*report),
        _ => None,
    });
    assert_eq!(last_report, Some(StrengthReport::unset()));
}

#[test]
fn password_blur_refreshes_the_strength_meter() {
    let mut engine = engine();
    engine.notify_input(FieldKey::Password, "Abc12345");

    // A blur carrying a changed value must not leave the meter stale.
    engine.notify_blur(FieldKey::Password, "");
    let last_report = engine.renderer().events.iter().rev().find_map(|event| match event {
        Event::Strength(report) => Some(*report),
        _ => None,
    });
    assert_eq!(last_report, Some(StrengthReport::unset()));
    assert!(!engine.store().get(FieldKey::Password).is_valid);

    engine.notify_blur(FieldKey::Password, "LongEnough1!");
    let last_report = engine.renderer().events.iter().rev().find_map(|event| match event {
        Event::Strength(report) => Some(*report),
        _ => None,
    });
    assert_eq!(last_report.map(|report| report.score()), Some(5));

    // Blurring another field leaves the meter alone.
    let strength_renders = engine
        .renderer()
        .events
        .iter()
        .filter(|event| matches!(event, Event::Strength(_)))
        .count();
    engine.notify_blur(FieldKey::Email, "a@b.co");
    let after = engine
        .renderer()
        .events
        .iter()
        .filter(|event| matches!(event, Event::Strength(_)))
        .count();
    assert_eq!(after, strength_renders);
}

#[test]
fn password_change_cascades_into_a_non_empty_confirm_field() {
    let mut engine = engine();
    engine.notify_input(FieldKey::Password, "LongEnough1!");
    engine.notify_input(FieldKey::ConfirmPassword, "LongEnough1!");
    assert!(engine.store().get(FieldKey::ConfirmPassword).is_valid);

    engine.notify_input(FieldKey::Password, "Different1!");

    assert!(!engine.store().get(FieldKey::ConfirmPassword).is_valid);
    match engine.renderer().field_events(FieldKey::ConfirmPassword).last().unwrap() {
        Event::Field { verdict, state, .. } => {
            assert_eq!(verdict.message, constants::CONFIRM_MISMATCH);
            // The cascade is not a user interaction; touched is preserved,
            // not granted.
            assert!(state.touched);
        },
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn no_cascade_while_the_confirm_field_is_empty() {
    let mut engine = engine();
    engine.notify_input(FieldKey::Password, "LongEnough1!");
    assert!(engine.renderer().field_events(FieldKey::ConfirmPassword).is_empty());
    assert_eq!(engine.store().get(FieldKey::ConfirmPassword), FieldState::default());
}

#[test]
fn editing_confirm_never_revalidates_the_password() {
    let mut engine = engine();
    engine.notify_input(FieldKey::Password, "LongEnough1!");
    let password_renders = engine.renderer().field_events(FieldKey::Password).len();

    engine.notify_input(FieldKey::ConfirmPassword, "LongEnough1!");
    engine.notify_input(FieldKey::ConfirmPassword, "nope");

    assert_eq!(engine.renderer().field_events(FieldKey::Password).len(), password_renders);
}

#[test]
fn focus_clears_markers_only_for_untouched_or_empty_fields() {
    let mut engine = engine();

    // Untouched: clear.
    engine.notify_focus(FieldKey::Email);
    assert!(engine.renderer().events.contains(&Event::Cleared(FieldKey::Email)));

    // Touched with a non-empty value: keep markers.
    engine.notify_input(FieldKey::FullName, "John Doe");
    engine.notify_focus(FieldKey::FullName);
    assert!(!engine.renderer().events.contains(&Event::Cleared(FieldKey::FullName)));

    // Touched but empty: clear.
    engine.notify_blur(FieldKey::Password, "");
    engine.notify_focus(FieldKey::Password);
    assert!(engine.renderer().events.contains(&Event::Cleared(FieldKey::Password)));
}

#[test]
fn progress_tracks_the_valid_count() {
    let mut engine = engine();
    engine.notify_input(FieldKey::FullName, "John Doe");
    engine.notify_input(FieldKey::Email, "john@example.com");
    assert_eq!(engine.progress(), 50);
    assert_eq!(engine.renderer().last_progress(), Some(50));

    engine.notify_input(FieldKey::Password, "LongEnough1!");
    engine.notify_input(FieldKey::ConfirmPassword, "LongEnough1!");
    assert_eq!(engine.progress(), 100);
    assert!(engine.submit_eligible());
}

#[tokio::test(start_paused = true)]
async fn ineligible_submit_is_rejected_synchronously() {
    let mut engine = timed_engine();
    engine.notify_input(FieldKey::FullName, "John Doe");

    let before = tokio::time::Instant::now();
    let outcome = engine.notify_submit().await;
    assert_eq!(outcome, SubmitOutcome::Rejected { reason: constants::SUBMIT_FIX_ERRORS });
    assert_eq!(tokio::time::Instant::now(), before, "rejection must not suspend");

    let recording = engine.renderer();
    assert!(recording.events.contains(&Event::Rejected(constants::SUBMIT_FIX_ERRORS.to_owned())));
    assert!(!recording.events.contains(&Event::Accepted));
}

#[tokio::test(start_paused = true)]
async fn eligible_submit_is_accepted_after_the_fixed_delay_not_before() {
    let mut engine = timed_engine();
    fill_valid(&mut engine);
    assert!(engine.submit_eligible());

    let before = tokio::time::Instant::now();
    let outcome = engine.notify_submit().await;
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert!(
        tokio::time::Instant::now() - before >= Duration::from_millis(1500),
        "accepted signal fired before the configured delay"
    );

    let recording = engine.renderer();
    let pending_at = recording
        .events
        .iter()
        .position(|event| matches!(event, Event::SubmitState { pending: true, .. }))
        .expect("pending submit state must be rendered");
    let accepted_at =
        recording.events.iter().position(|event| *event == Event::Accepted).unwrap();
    assert!(pending_at < accepted_at);
    assert_eq!(recording.last_submit_state(), Some((true, false)));
}

#[tokio::test(start_paused = true)]
async fn abandoned_submission_keeps_the_gate_closed_until_reset() {
    let mut engine = timed_engine();
    fill_valid(&mut engine);

    // Drop the submit future mid-delay, as a collaborator abandoning it.
    let result =
        tokio::time::timeout(Duration::from_millis(10), engine.notify_submit()).await;
    assert!(result.is_err(), "delay must outlive the short timeout");
    assert!(engine.submit_pending());

    let outcome = engine.notify_submit().await;
    assert_eq!(outcome, SubmitOutcome::Rejected { reason: constants::SUBMIT_IN_FLIGHT });

    engine.notify_reset();
    assert!(!engine.submit_pending());
}

#[test]
fn reset_restores_initial_state_and_signals_the_collaborator() {
    let mut engine = engine();
    fill_valid(&mut engine);
    assert!(engine.submit_eligible());

    engine.notify_reset();

    for key in FieldKey::iter() {
        assert_eq!(engine.store().get(key), FieldState::default());
    }
    assert_eq!(engine.progress(), 0);
    assert!(!engine.submit_eligible());

    let recording = engine.into_renderer();
    assert!(recording.events.contains(&Event::Reset));
    assert_eq!(recording.last_progress(), Some(0));
    let unset_after_reset = recording
        .events
        .iter()
        .rev()
        .find_map(|event| match event {
            Event::Strength(report) => Some(report.is_unset()),
            _ => None,
        })
        .unwrap();
    assert!(unset_after_reset);
}

#[tokio::test(start_paused = true)]
async fn end_to_end_flow_from_blank_form_to_accepted_submission() {
    let mut engine = timed_engine();

    assert_eq!(engine.progress(), 0);
    assert!(!engine.submit_eligible());
    assert_eq!(
        engine.notify_submit().await,
        SubmitOutcome::Rejected { reason: constants::SUBMIT_FIX_ERRORS }
    );

    fill_valid(&mut engine);
    assert_eq!(engine.progress(), 100);
    assert!(engine.submit_eligible());

    assert_eq!(engine.notify_submit().await, SubmitOutcome::Accepted);
    assert!(!engine.submit_pending());
}
