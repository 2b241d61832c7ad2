use web_sys::Element;
use yew::prelude::*;

const MAX_TILT_DEG: f64 = 10.0;

/// Rotation about the x and y axes for a pointer at (x, y) inside a card of
/// the given size. The card leans away from the pointer.
pub fn tilt(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let rot_x = (y - height / 2.0) / height * MAX_TILT_DEG;
    let rot_y = (width / 2.0 - x) / width * MAX_TILT_DEG;
    (rot_x, rot_y)
}

#[derive(Clone, Copy, PartialEq, Default, Debug)]
struct CardPose {
    rot_x: f64,
    rot_y: f64,
    mouse_x: f64,
    mouse_y: f64,
}

impl CardPose {
    fn tilted(&self) -> bool {
        self.rot_x != 0.0 || self.rot_y != 0.0
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("rgba(255, 255, 255, 0.1)"))]
    pub glow_color: AttrValue,
}

#[function_component(AnimatedCard)]
pub fn animated_card(props: &AnimatedCardProps) -> Html {
    let node = use_node_ref();
    let pose = use_state(CardPose::default);

    let onmousemove = {
        let node = node.clone();
        let pose = pose.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = node.cast::<Element>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();
            let (rot_x, rot_y) = tilt(x, y, rect.width(), rect.height());
            pose.set(CardPose { rot_x, rot_y, mouse_x: x, mouse_y: y });
        })
    };

    let onmouseleave = {
        let pose = pose.clone();
        Callback::from(move |_: MouseEvent| {
            let current = *pose;
            pose.set(CardPose { rot_x: 0.0, rot_y: 0.0, ..current });
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("animated-card", props.class.clone())}
            style={format!("transform: perspective(1000px) rotateX({}deg) rotateY({}deg);", pose.rot_x, pose.rot_y)}
            {onmousemove}
            {onmouseleave}
        >
            <style>
                {r#"
                    .animated-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        background: rgba(26, 26, 26, 0.5);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transform-style: preserve-3d;
                        transition: transform 0.2s cubic-bezier(0.2, 0.8, 0.2, 1);
                    }
                    .card-glow {
                        position: absolute;
                        inset: -100px;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .card-body { position: relative; z-index: 10; }
                "#}
            </style>
            <div
                class="card-glow"
                style={format!(
                    "opacity: {}; background: radial-gradient(circle at {}px {}px, {} 0%, transparent 70%);",
                    if pose.tilted() { 0.6 } else { 0.0 },
                    pose.mouse_x + 100.0,
                    pose.mouse_y + 100.0,
                    props.glow_color
                )}
            ></div>
            <div class="card-body">{ for props.children.iter() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(tilt(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_tilt_by_half_the_maximum() {
        let (rx, ry) = tilt(0.0, 0.0, 200.0, 100.0);
        assert_eq!(rx, -5.0);
        assert_eq!(ry, 5.0);
        let (rx, ry) = tilt(200.0, 100.0, 200.0, 100.0);
        assert_eq!(rx, 5.0);
        assert_eq!(ry, -5.0);
    }

    #[test]
    fn unmeasured_card_stays_flat() {
        assert_eq!(tilt(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }
}
