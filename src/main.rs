//! Runs a scripted dialog show/dismiss sequence and prints the animated
//! values frame by frame.

use anyhow::Result;
use serde::Deserialize;
use tracing::info;

use segue_core::{
    AlphaTarget, EndpointSpec, FadeTransition, PositionTarget, SlideTransition, TickClock,
    TransitionConfig, UiElement, Vec3,
};

#[derive(Debug, Deserialize)]
struct Scenario {
    fade: TransitionConfig<f32>,
    slide: TransitionConfig<Vec3>,
    slide_endpoints: EndpointSpec<Vec3>,
    dismiss_duration: f32,
}

/// The animated element: one dialog with an opacity and a position.
#[derive(Debug)]
struct Dialog {
    alpha: f32,
    position: Vec3,
    active: bool,
    blocking: bool,
}

impl UiElement for Dialog {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn request_destroy(&mut self) {}

    fn set_pointer_blocking(&mut self, blocking: bool) {
        self.blocking = blocking;
    }
}

impl AlphaTarget for Dialog {
    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}

impl PositionTarget for Dialog {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let scenario: Scenario = toml::from_str(include_str!("../demos/dialog.toml"))?;

    let mut fade = FadeTransition::new(scenario.fade)?;
    let mut slide = SlideTransition::new(scenario.slide_endpoints, scenario.slide)?;

    let mut dialog = Dialog {
        alpha: 0.0,
        position: Vec3::new(640.0, 360.0, 0.0),
        active: true,
        blocking: false,
    };

    println!("showing dialog at ({}, {})", dialog.position.x, dialog.position.y);
    fade.activate(&mut dialog)?;
    slide.transition_to_end(&mut dialog, false)?;

    let step = TickClock::uniform(1.0 / 60.0);
    let mut frame = 0u32;
    while fade.is_running() || slide.is_running() {
        fade.tick(step, &mut dialog);
        slide.tick(step, &mut dialog);
        frame += 1;
        if frame % 6 == 0 {
            println!(
                "frame {frame:3}: alpha {:.3}  position ({:.1}, {:.1})  pointer gate {}",
                dialog.alpha,
                dialog.position.x,
                dialog.position.y,
                if dialog.blocking { "closed" } else { "open" },
            );
        }
    }
    println!(
        "settled after {frame} frames: alpha {}  position ({}, {})",
        dialog.alpha, dialog.position.x, dialog.position.y,
    );

    println!("dismissing dialog");
    fade.transition_to_start_with(&mut dialog, true, scenario.dismiss_duration, 0.0)?;
    while fade.tick(step, &mut dialog) {
        frame += 1;
    }
    println!(
        "dismissed after {frame} total frames: alpha {}  element active: {}",
        dialog.alpha, dialog.active,
    );

    for event in fade.drain_events() {
        info!(?event, "fade");
    }
    for event in slide.drain_events() {
        info!(?event, "slide");
    }

    Ok(())
}
