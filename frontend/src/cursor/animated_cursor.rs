use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::config::OUTER_FOLLOW_LAG_MS;
use crate::cursor::bindings::{DomPointerHost, PointerBindings, SignalSink, NATIVE_CURSOR_HIDDEN_CLASS};
use crate::cursor::interactive::InteractiveTargets;
use crate::cursor::pointer::{
    follower_look, retire_settled, Follower, Followers, PointerSignal, PointerState, Position,
};
use crate::cursor::suppression::{is_suppressed, DeviceProfile};

fn follower_style(position: Position, size: u32) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0); width: {}px; height: {}px; margin-left: -{}px; margin-top: -{}px;",
        position.x,
        position.y,
        size,
        size,
        size / 2,
        size / 2
    )
}

#[function_component(AnimatedCursor)]
pub fn animated_cursor() -> Html {
    let hovering = use_context::<InteractiveTargets>()
        .map(|targets| targets.hovering)
        .unwrap_or(false);
    let state = use_mut_ref(|| PointerState::new(true));
    let followers = use_mut_ref(|| Followers::new(OUTER_FOLLOW_LAG_MS));
    let lag_timers = use_mut_ref(VecDeque::<Timeout>::new);
    let redraw = use_force_update();

    {
        let state = state.clone();
        let followers = followers.clone();
        let lag_timers = lag_timers.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                let sink: SignalSink = {
                    let state = state.clone();
                    let followers = followers.clone();
                    let lag_timers = lag_timers.clone();
                    let redraw = redraw.clone();
                    Rc::new(move |signal: PointerSignal| {
                        if !state.borrow_mut().apply(signal) {
                            return;
                        }
                        if let PointerSignal::Move(position) = signal {
                            let mut timers = lag_timers.borrow_mut();
                            let due = {
                                let mut followers = followers.borrow_mut();
                                retire_settled(&mut *timers, followers.outer_pending());
                                followers.record(position, js_sys::Date::now())
                            };
                            let followers = followers.clone();
                            let redraw = redraw.clone();
                            timers.push_back(Timeout::new(OUTER_FOLLOW_LAG_MS, move || {
                                if followers.borrow_mut().settle(due) {
                                    redraw.force_update();
                                }
                            }));
                        }
                        redraw.force_update();
                    })
                };

                let bindings = DomPointerHost::new()
                    .map(|host| Rc::new(RefCell::new(PointerBindings::new(host, sink))));

                let evaluate = {
                    let bindings = bindings.clone();
                    let state = state.clone();
                    let redraw = redraw.clone();
                    move || {
                        let Some(bindings) = &bindings else {
                            return;
                        };
                        let mut bindings = bindings.borrow_mut();
                        if bindings.refresh(is_suppressed(&DeviceProfile::probe())) {
                            let suppressed = bindings.suppressed();
                            info!("Custom cursor {}", if suppressed { "disabled" } else { "enabled" });
                            state.borrow_mut().set_suppressed(suppressed);
                            redraw.force_update();
                        }
                    }
                };
                evaluate();
                let resize = window().map(|w| EventListener::new(&w, "resize", move |_| evaluate()));

                move || {
                    drop(resize);
                    if let Some(bindings) = bindings {
                        bindings.borrow_mut().release();
                    }
                    lag_timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    let (inner_look, outer_look, inner_at, outer_at) = {
        let mut state = state.borrow_mut();
        state.set_hovering(hovering);
        let followers = followers.borrow();
        (
            follower_look(&state, Follower::Inner),
            follower_look(&state, Follower::Outer),
            followers.inner(),
            followers.outer(),
        )
    };

    let style = format!(
        r#"
            body.{marker}, body.{marker} * {{
                cursor: none !important;
            }}
            .cursor-follower {{
                position: fixed;
                top: 0;
                left: 0;
                pointer-events: none;
                z-index: 50;
                mix-blend-mode: difference;
                transition: opacity 0.2s ease-out;
            }}
            .cursor-follower.hidden {{ opacity: 0; }}
            .cursor-outer {{ transition: transform 0.3s ease-out, opacity 0.2s ease-out; }}
            .cursor-inner {{ transition: transform 0.15s ease-out, opacity 0.2s ease-out; }}
            .cursor-shape {{
                width: 100%;
                height: 100%;
                border-radius: 50%;
                transition: transform 0.3s ease-out;
            }}
            .cursor-outer .cursor-shape {{ border: 1px solid white; background: transparent; }}
            .cursor-inner .cursor-shape {{ background: white; }}
        "#,
        marker = NATIVE_CURSOR_HIDDEN_CLASS
    );

    if state.borrow().suppressed {
        return html! { <style>{style}</style> };
    }

    html! {
        <>
            <style>{style}</style>
            <div
                class={classes!("cursor-follower", "cursor-outer", (!outer_look.visible).then(|| "hidden"))}
                style={follower_style(outer_at, 30)}
            >
                <div class="cursor-shape" style={format!("transform: scale({});", outer_look.scale)}></div>
            </div>
            <div
                class={classes!("cursor-follower", "cursor-inner", (!inner_look.visible).then(|| "hidden"))}
                style={follower_style(inner_at, 8)}
            >
                <div class="cursor-shape" style={format!("transform: scale({});", inner_look.scale)}></div>
            </div>
        </>
    }
}
