//! Clickable things tell the cursor they are being hovered.
//!
//! Only components that call [`use_interactive_target`] are seen; there is
//! no document-wide scan for links or buttons.

use std::cell::RefCell;

use yew::prelude::*;

/// Provided by the page shell above every page.
#[derive(Clone, PartialEq)]
pub struct InteractiveTargets {
    pub hovering: bool,
    pub set_hovering: Callback<bool>,
}

#[derive(Clone, PartialEq)]
pub struct HoverHandlers {
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

fn record_hover(hovered: &RefCell<bool>, set_hovering: Option<&Callback<bool>>, value: bool) {
    *hovered.borrow_mut() = value;
    if let Some(set_hovering) = set_hovering {
        set_hovering.emit(value);
    }
}

/// Clears the shared flag only if this target still holds it.
fn release_hover(hovered: &RefCell<bool>, set_hovering: Option<&Callback<bool>>) {
    if hovered.replace(false) {
        if let Some(set_hovering) = set_hovering {
            set_hovering.emit(false);
        }
    }
}

#[hook]
pub fn use_interactive_target() -> HoverHandlers {
    let set_hovering = use_context::<InteractiveTargets>().map(|targets| targets.set_hovering);
    let hovered = use_mut_ref(|| false);

    // A target unmounted mid-hover must not leave the cursor enlarged.
    {
        let set_hovering = set_hovering.clone();
        let hovered = hovered.clone();
        use_effect_with_deps(
            move |_| move || release_hover(&hovered, set_hovering.as_ref()),
            (),
        );
    }

    let handler = |value: bool| {
        let set_hovering = set_hovering.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| record_hover(&hovered, set_hovering.as_ref(), value))
    };

    HoverHandlers {
        onmouseenter: handler(true),
        onmouseleave: handler(false),
    }
}

#[derive(Properties, PartialEq)]
pub struct InteractiveTargetsProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the shared hover flag so hover changes re-render only the provider
/// and its consumers.
#[function_component(InteractiveTargetsProvider)]
pub fn interactive_targets_provider(props: &InteractiveTargetsProviderProps) -> Html {
    let hovering = use_state_eq(|| false);
    let set_hovering = {
        let hovering = hovering.clone();
        use_memo(move |_| Callback::from(move |value: bool| hovering.set(value)), ())
    };

    let targets = InteractiveTargets {
        hovering: *hovering,
        set_hovering: (*set_hovering).clone(),
    };

    html! {
        <ContextProvider<InteractiveTargets> context={targets}>
            { for props.children.iter() }
        </ContextProvider<InteractiveTargets>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Callback<bool>, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |v| sink.borrow_mut().push(v)), seen)
    }

    #[test]
    fn unmounting_hovered_target_clears_flag() {
        let (set_hovering, seen) = recorder();
        let hovered = RefCell::new(false);

        record_hover(&hovered, Some(&set_hovering), true);
        release_hover(&hovered, Some(&set_hovering));

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!*hovered.borrow());
    }

    #[test]
    fn unmounting_idle_target_leaves_flag_alone() {
        let (set_hovering, seen) = recorder();
        let hovered = RefCell::new(false);

        record_hover(&hovered, Some(&set_hovering), true);
        record_hover(&hovered, Some(&set_hovering), false);
        release_hover(&hovered, Some(&set_hovering));

        // Another target may own the hover by now.
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn works_without_provider() {
        let hovered = RefCell::new(false);
        record_hover(&hovered, None, true);
        release_hover(&hovered, None);
        assert!(!*hovered.borrow());
    }
}
