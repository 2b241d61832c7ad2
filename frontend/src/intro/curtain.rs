use gloo_timers::callback::Timeout;
use std::cell::RefCell;

use log::{debug, info, warn};
use yew::prelude::*;

use crate::config::{
    BURST_PARTICLE_COUNT, CURTAIN_EASING, CURTAIN_SPARKLE_COUNT, INTRO_TIMING,
};
use crate::intro::gate::{IntroGate, IntroPhase, Trigger};
use crate::particles::{scatter, Particle, ScatterSpec};
use crate::storage::BrowserStorage;

#[derive(Properties, PartialEq)]
pub struct CurtainAnimationProps {
    pub on_complete: Callback<()>,
}

/// Cancels the pending dismissal and closes the gate to late completions.
fn shut_down<T>(timer: &RefCell<Option<T>>, gate: &RefCell<IntroGate>) {
    drop(timer.borrow_mut().take());
    gate.borrow_mut().teardown();
}

fn render_particle(p: &Particle, class: &'static str) -> Html {
    html! {
        <div
            class={class}
            style={format!(
                "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s;",
                p.x, p.y, p.size, p.size, p.delay
            )}
        />
    }
}

fn render_panel(side: &'static str, sparkles: &[Particle], opening: bool) -> Html {
    let offset = match (side, opening) {
        ("left", true) => "-100%",
        ("right", true) => "100%",
        _ => "0",
    };
    let style = format!(
        "transform: translateX({}); transition: transform {}ms {} {}ms;",
        offset, INTRO_TIMING.curtain_duration_ms, CURTAIN_EASING, INTRO_TIMING.curtain_delay_ms
    );

    html! {
        <div class={classes!("curtain-panel", format!("curtain-{}", side))} style={style}>
            <div class="curtain-fold"></div>
            <div class="curtain-sparkles">
                { for sparkles.iter().map(|p| render_particle(p, "curtain-sparkle")) }
            </div>
        </div>
    }
}

fn render_burst() -> Html {
    html! {
        <div class="curtain-burst">
            <div class="curtain-welcome">{"WELCOME"}</div>
            {
                for (0..BURST_PARTICLE_COUNT).map(|i| {
                    let angle = i as f64 / BURST_PARTICLE_COUNT as f64 * std::f64::consts::TAU;
                    html! {
                        <div
                            class="burst-dot"
                            style={format!(
                                "--dx: {:.1}px; --dy: {:.1}px;",
                                angle.cos() * 100.0,
                                angle.sin() * 100.0
                            )}
                        />
                    }
                })
            }
        </div>
    }
}

#[function_component(CurtainAnimation)]
pub fn curtain_animation(props: &CurtainAnimationProps) -> Html {
    let gate = use_mut_ref(|| IntroGate::initialize(&BrowserStorage, &mut rand::thread_rng()));
    let phase = use_state(|| gate.borrow().phase());
    let timer = use_mut_ref(|| None::<Timeout>);
    let sparkles = use_memo(
        |_| {
            let mut rng = rand::thread_rng();
            let spec = ScatterSpec::curtain_sparkles(CURTAIN_SPARKLE_COUNT);
            (scatter(&mut rng, &spec), scatter(&mut rng, &spec))
        },
        (),
    );

    // Returning visitors skip straight through; the timer dies with us.
    {
        let gate = gate.clone();
        let timer = timer.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                debug!("Curtain mounted, seen before: {}", gate.borrow().seen_before());
                if gate.borrow_mut().claim_completion() {
                    info!("Intro already seen, mounting content");
                    on_complete.emit(());
                }
                move || shut_down(&timer, &gate)
            },
            (),
        );
    }

    let onclick = {
        let gate = gate.clone();
        let phase = phase.clone();
        let timer = timer.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = gate.borrow_mut().trigger(&BrowserStorage);
            if !outcome.started() {
                return;
            }
            match outcome {
                Trigger::StartedUnpersisted(e) => warn!("Curtain opening without saving: {}", e),
                _ => info!("Curtain opening"),
            }
            phase.set(IntroPhase::Opening);

            let gate = gate.clone();
            let phase = phase.clone();
            let on_complete = on_complete.clone();
            let handle = Timeout::new(INTRO_TIMING.completion_delay_ms(), move || {
                let completed = {
                    let mut gate = gate.borrow_mut();
                    gate.finish();
                    gate.claim_completion()
                };
                if completed {
                    phase.set(IntroPhase::Dismissed);
                    on_complete.emit(());
                }
            });
            *timer.borrow_mut() = Some(handle);
        })
    };

    if *phase == IntroPhase::Dismissed {
        return html! {};
    }

    let opening = *phase == IntroPhase::Opening;
    let overlay_style = if opening {
        format!(
            "opacity: 0; transition: opacity {}ms ease {}ms;",
            INTRO_TIMING.fade_duration_ms, INTRO_TIMING.fade_delay_ms
        )
    } else {
        "opacity: 1;".to_string()
    };
    let gate_ref = gate.borrow();

    html! {
        <div class="curtain-overlay" style={overlay_style}>
            <style>
                {r#"
                    .curtain-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                        overflow: hidden;
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0.2; transform: scale(1); }
                        50% { opacity: 0.8; transform: scale(1.5); }
                    }
                    .curtain-particle {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.3);
                        animation: twinkle 4s ease-in-out infinite;
                    }
                    .curtain-panel {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 50%;
                    }
                    .curtain-left {
                        left: 0;
                        background: linear-gradient(to right, #7f1d1d, #b91c1c);
                    }
                    .curtain-right {
                        right: 0;
                        background: linear-gradient(to left, #7f1d1d, #b91c1c);
                    }
                    .curtain-fold {
                        position: absolute;
                        top: 0;
                        width: 5rem;
                        height: 100%;
                        background: linear-gradient(to bottom, rgba(239, 68, 68, 0.2), rgba(248, 113, 113, 0.2));
                    }
                    .curtain-left .curtain-fold { right: 0; }
                    .curtain-right .curtain-fold { left: 0; }
                    .curtain-sparkles {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .curtain-sparkle {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.4);
                        animation: twinkle 4s ease-in-out infinite;
                    }
                    .curtain-center {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        animation: curtainIn 0.8s ease-out 0.5s both;
                    }
                    @keyframes curtainIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .curtain-caption {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                        background: linear-gradient(to right, #f87171, #fde047);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    @keyframes logoFloat {
                        0%, 100% { transform: translateY(0); filter: drop-shadow(0 0 0 rgba(220, 38, 38, 0)); }
                        50% { transform: translateY(-10px); filter: drop-shadow(0 0 15px rgba(220, 38, 38, 0.8)); }
                    }
                    .curtain-logo {
                        height: 8rem;
                        margin: 0 auto 2rem;
                        display: block;
                        animation: logoFloat 4s ease-in-out infinite;
                    }
                    .curtain-button {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #dc2626, #b91c1c);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.125rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .curtain-button:hover { transform: scale(1.05); box-shadow: 0 0 25px rgba(239, 68, 68, 0.5); }
                    .curtain-button:active { transform: scale(0.95); }
                    .curtain-burst {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        pointer-events: none;
                    }
                    @keyframes welcomeBurst {
                        0% { opacity: 0; transform: scale(0); }
                        50% { opacity: 1; transform: scale(1.5); }
                        100% { opacity: 0; transform: scale(3); }
                    }
                    .curtain-welcome {
                        font-size: 3.75rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #ef4444, #f87171);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: welcomeBurst 1.5s ease-out forwards;
                    }
                    @keyframes burstOut {
                        0% { transform: translate(0, 0) scale(0); opacity: 1; }
                        50% { transform: translate(calc(var(--dx) / 2), calc(var(--dy) / 2)) scale(1); opacity: 0.8; }
                        100% { transform: translate(var(--dx), var(--dy)) scale(0); opacity: 0; }
                    }
                    .burst-dot {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: linear-gradient(to right, #ef4444, #f87171);
                        animation: burstOut 1s ease-out 0.2s both;
                    }
                "#}
            </style>
            { for gate_ref.particles().iter().map(|p| render_particle(p, "curtain-particle")) }
            { render_panel("left", &sparkles.0, opening) }
            { render_panel("right", &sparkles.1, opening) }
            <div class="curtain-center">
                <div class="curtain-caption">{"Grand Opening"}</div>
                <img src="/assets/elite8digital-logo.png" alt="Elite8 Digital Logo" class="curtain-logo" />
                <button class="curtain-button" onclick={onclick} disabled={opening}>
                    {"Click to Reveal"}
                </button>
                if opening {
                    { render_burst() }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{IntroStore, StorageError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FirstVisit;

    impl IntroStore for FirstVisit {
        fn has_seen_intro(&self) -> Result<bool, StorageError> {
            Ok(false)
        }

        fn mark_intro_seen(&self) -> Result<(), StorageError> {
            Ok(())
        }
    }

    struct CountsDrop(Rc<Cell<usize>>);

    impl Drop for CountsDrop {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn unmount_cancels_timer_and_blocks_completion() {
        let gate = RefCell::new(IntroGate::initialize(&FirstVisit, &mut StdRng::seed_from_u64(7)));
        assert!(gate.borrow_mut().trigger(&FirstVisit).started());

        let dropped = Rc::new(Cell::new(0));
        let timer = RefCell::new(Some(CountsDrop(dropped.clone())));
        shut_down(&timer, &gate);

        assert_eq!(dropped.get(), 1);
        assert!(timer.borrow().is_none());

        // A callback that raced the unmount still sees a closed gate.
        let mut gate = gate.borrow_mut();
        gate.finish();
        assert!(!gate.claim_completion());
    }

    #[test]
    fn unmount_without_pending_timer_is_harmless() {
        let gate = RefCell::new(IntroGate::initialize(&FirstVisit, &mut StdRng::seed_from_u64(7)));
        let timer: RefCell<Option<CountsDrop>> = RefCell::new(None);
        shut_down(&timer, &gate);
        shut_down(&timer, &gate);
        assert!(!gate.borrow_mut().trigger(&FirstVisit).started());
    }
}
