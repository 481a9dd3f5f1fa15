//! End-to-end transition flows against an in-memory element.

use anyhow::Result;
use segue_core::{
    AlphaTarget, Easing, EndpointSpec, FadeTransition, OffsetKind, PositionTarget, SizeTarget,
    SizeTransition, SlideTransition, TickClock, TransitionConfig, TransitionEvent, UiElement,
    Vec2, Vec3,
};

/// Minimal UI element exposing several animatable properties.
#[derive(Debug)]
struct Element {
    alpha: f32,
    alpha_writes: Vec<f32>,
    position: Vec3,
    size: Vec2,
    active: bool,
    destroyed: bool,
    blocking: Option<bool>,
}

impl Element {
    fn new() -> Self {
        Self {
            alpha: 0.0,
            alpha_writes: Vec::new(),
            position: Vec3::ZERO,
            size: Vec2::new(100.0, 100.0),
            active: true,
            destroyed: false,
            blocking: None,
        }
    }
}

impl UiElement for Element {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn request_destroy(&mut self) {
        self.destroyed = true;
    }

    fn set_pointer_blocking(&mut self, blocking: bool) {
        self.blocking = Some(blocking);
    }
}

impl AlphaTarget for Element {
    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.alpha_writes.push(alpha);
    }
}

impl PositionTarget for Element {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

impl SizeTarget for Element {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

#[test]
fn fades_dialog_in_on_activate_and_out_to_disabled() -> Result<()> {
    let mut fade = FadeTransition::default();
    let mut dialog = Element::new();

    let id = fade.activate(&mut dialog)?;
    assert!(id.is_some(), "default policy should fade in on activate");
    assert_eq!(dialog.blocking, Some(false), "gate stays open mid-fade");

    for _ in 0..8 {
        fade.tick(TickClock::uniform(0.125), &mut dialog);
    }
    assert_eq!(dialog.alpha, 1.0);
    assert_eq!(dialog.blocking, Some(true), "gate closes once settled");

    fade.transition_to_start_with(&mut dialog, true, 0.5, 0.0)?;
    for _ in 0..4 {
        fade.tick(TickClock::uniform(0.125), &mut dialog);
    }
    assert_eq!(dialog.alpha, 0.0);
    assert!(!dialog.active, "hidden dialog should be deactivated");
    assert_eq!(
        dialog.blocking,
        Some(true),
        "gate lands in its settled state even on the disabling run"
    );

    let events: Vec<_> = fade.drain_events().collect();
    assert!(events.iter().any(|e| matches!(e, TransitionEvent::TargetDisabled { .. })));
    Ok(())
}

#[test]
fn linear_scenario_hits_midpoint_and_exact_end() -> Result<()> {
    let config = TransitionConfig::between(0.0_f32, 1.0)
        .with_duration(1.0)
        .with_easing(Easing::Linear);
    let mut fade = FadeTransition::new(config)?;
    let mut element = Element::new();

    fade.transition_to_end(&mut element, false)?;
    for _ in 0..2 {
        fade.tick(TickClock::uniform(0.25), &mut element);
    }
    assert_eq!(element.alpha, 0.5);

    for _ in 0..2 {
        fade.tick(TickClock::uniform(0.25), &mut element);
    }
    // Bit-for-bit at the endpoint, not an eased approximation.
    assert_eq!(element.alpha, 1.0);
    Ok(())
}

#[test]
fn delay_holds_value_until_fully_elapsed() -> Result<()> {
    let config = TransitionConfig::between(0.0_f32, 1.0)
        .with_duration(1.0)
        .with_delay(2.0)
        .with_easing(Easing::Linear);
    let mut fade = FadeTransition::new(config)?;
    let mut element = Element::new();

    fade.transition_to_end(&mut element, false)?;
    for _ in 0..4 {
        fade.tick(TickClock::uniform(0.5), &mut element);
        assert_eq!(element.alpha, 0.0, "value must hold through the delay");
    }

    fade.tick(TickClock::uniform(0.5), &mut element);
    assert_eq!(element.alpha, 0.5);
    fade.tick(TickClock::uniform(0.5), &mut element);
    assert_eq!(element.alpha, 1.0);
    Ok(())
}

#[test]
fn superseding_run_owns_all_writes_after_start() -> Result<()> {
    let config = TransitionConfig::between(0.0_f32, 1.0)
        .with_duration(1.0)
        .with_easing(Easing::Linear);
    let mut fade = FadeTransition::new(config)?;
    let mut element = Element::new();

    fade.transition_to_end(&mut element, false)?;
    fade.tick(TickClock::uniform(0.25), &mut element);
    assert_eq!(element.alpha, 0.25);

    let watermark = element.alpha_writes.len();
    fade.fade_to_with(&mut element, 0.1, 0.5, 0.0)?;
    for _ in 0..4 {
        fade.tick(TickClock::uniform(0.125), &mut element);
    }

    assert_eq!(element.alpha, 0.1);
    for write in &element.alpha_writes[watermark..] {
        assert!(
            *write <= 0.25,
            "ascending write {write} after replacement betrays a stale run"
        );
    }

    let events: Vec<_> = fade.drain_events().collect();
    assert!(events.iter().any(|e| matches!(e, TransitionEvent::Superseded { .. })));
    Ok(())
}

#[test]
fn slides_panel_in_from_offscreen_after_delay() -> Result<()> {
    let spec = EndpointSpec::anchor_end(OffsetKind::Relative, Vec3::new(-320.0, 0.0, 0.0));
    let config = TransitionConfig::default()
        .with_duration(0.5)
        .with_delay(0.25)
        .with_easing(Easing::Linear);
    let mut slide = SlideTransition::new(spec, config)?;
    let mut panel = Element::new();

    slide.transition_to_end(&mut panel, false)?;
    assert_eq!(panel.position, Vec3::new(-320.0, 0.0, 0.0));

    for _ in 0..2 {
        slide.tick(TickClock::uniform(0.125), &mut panel);
    }
    assert_eq!(panel.position, Vec3::new(-320.0, 0.0, 0.0));

    for _ in 0..4 {
        slide.tick(TickClock::uniform(0.125), &mut panel);
    }
    assert_eq!(panel.position, Vec3::ZERO, "panel should land on its layout position");
    assert!(!slide.is_running());
    Ok(())
}

#[test]
fn looping_run_alternates_endpoints_with_parity() -> Result<()> {
    let config = TransitionConfig::between(0.0_f32, 10.0)
        .with_duration(0.5)
        .with_easing(Easing::Linear)
        .with_looping(true);
    let mut fade = FadeTransition::new(config)?;
    let mut element = Element::new();

    fade.transition_to_end(&mut element, false)?;
    for completions in 1..=6 {
        fade.tick(TickClock::uniform(0.25), &mut element);
        fade.tick(TickClock::uniform(0.25), &mut element);
        let expected = if completions % 2 == 1 { 10.0 } else { 0.0 };
        assert_eq!(element.alpha, expected, "after {completions} completions");
    }
    Ok(())
}

#[test]
fn loop_stops_when_host_deactivated_externally() -> Result<()> {
    let spec = EndpointSpec::anchor_start(OffsetKind::Relative, Vec2::new(10.0, 10.0));
    let config = TransitionConfig::default()
        .with_duration(0.25)
        .with_easing(Easing::Linear)
        .with_looping(true);
    let mut pulse = SizeTransition::new(spec, config)?;
    let mut badge = Element::new();

    pulse.transition_to_end(&mut badge, false)?;
    assert!(pulse.tick(TickClock::uniform(0.25), &mut badge), "first completion loops");

    // The host gets deactivated from outside mid-pulse.
    badge.active = false;
    assert!(
        !pulse.tick(TickClock::uniform(0.25), &mut badge),
        "an inactive host must not keep looping"
    );
    assert!(!pulse.is_running());
    Ok(())
}

#[test]
fn unscaled_clock_animates_while_game_time_is_paused() -> Result<()> {
    let config = TransitionConfig::between(0.0_f32, 1.0)
        .with_duration(0.5)
        .with_easing(Easing::Linear)
        .with_unscaled_time(true);
    let mut pause_menu = FadeTransition::new(config)?;
    let mut element = Element::new();

    pause_menu.transition_to_end(&mut element, false)?;
    // time_scale 0 simulates a paused game clock.
    for _ in 0..2 {
        pause_menu.tick(TickClock::from_real(0.25, 0.0), &mut element);
    }
    assert_eq!(element.alpha, 1.0);
    Ok(())
}
