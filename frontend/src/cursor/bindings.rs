use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, MouseEvent};

use crate::cursor::pointer::{PointerSignal, Position};

/// Body class that hides the native cursor while ours is drawn.
pub const NATIVE_CURSOR_HIDDEN_CLASS: &str = "custom-cursor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    Down,
    Up,
    Enter,
    Leave,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 5] = [
        PointerEventKind::Move,
        PointerEventKind::Down,
        PointerEventKind::Up,
        PointerEventKind::Enter,
        PointerEventKind::Leave,
    ];

    pub fn event_name(self) -> &'static str {
        match self {
            PointerEventKind::Move => "mousemove",
            PointerEventKind::Down => "mousedown",
            PointerEventKind::Up => "mouseup",
            PointerEventKind::Enter => "mouseenter",
            PointerEventKind::Leave => "mouseleave",
        }
    }
}

pub type SignalSink = Rc<dyn Fn(PointerSignal)>;

/// The page surface the cursor draws over. Dropping a listener detaches it.
pub trait PointerHost {
    type Listener;

    fn listen(&self, kind: PointerEventKind, sink: SignalSink) -> Self::Listener;
    fn set_native_cursor_hidden(&self, hidden: bool);
}

/// Owns the pointer listeners for one suppression decision at a time.
pub struct PointerBindings<H: PointerHost> {
    host: H,
    sink: SignalSink,
    suppressed: Option<bool>,
    listeners: Vec<H::Listener>,
}

impl<H: PointerHost> PointerBindings<H> {
    pub fn new(host: H, sink: SignalSink) -> Self {
        Self {
            host,
            sink,
            suppressed: None,
            listeners: Vec::new(),
        }
    }

    /// Applies a suppression decision. Only a change swaps the listener set;
    /// returns whether it did.
    pub fn refresh(&mut self, suppressed: bool) -> bool {
        if self.suppressed == Some(suppressed) {
            return false;
        }
        self.listeners.clear();
        if !suppressed {
            for kind in PointerEventKind::ALL {
                let listener = self.host.listen(kind, self.sink.clone());
                self.listeners.push(listener);
            }
        }
        self.host.set_native_cursor_hidden(!suppressed);
        self.suppressed = Some(suppressed);
        debug!("Pointer bindings refreshed, suppressed: {}", suppressed);
        true
    }

    pub fn suppressed(&self) -> bool {
        self.suppressed.unwrap_or(true)
    }

    /// Detaches everything and gives the native cursor back.
    pub fn release(&mut self) {
        if self.suppressed.take().is_some() {
            self.listeners.clear();
            self.host.set_native_cursor_hidden(false);
        }
    }
}

impl<H: PointerHost> Drop for PointerBindings<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// The live document.
pub struct DomPointerHost {
    document: Document,
}

impl DomPointerHost {
    pub fn new() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

impl PointerHost for DomPointerHost {
    type Listener = EventListener;

    fn listen(&self, kind: PointerEventKind, sink: SignalSink) -> EventListener {
        let name = kind.event_name();
        let callback = move |event: &web_sys::Event| {
            let signal = match kind {
                PointerEventKind::Move => match event.dyn_ref::<MouseEvent>() {
                    Some(mouse) => PointerSignal::Move(Position::new(mouse.client_x(), mouse.client_y())),
                    None => return,
                },
                PointerEventKind::Down => PointerSignal::Down,
                PointerEventKind::Up => PointerSignal::Up,
                PointerEventKind::Enter => PointerSignal::Enter,
                PointerEventKind::Leave => PointerSignal::Leave,
            };
            sink(signal);
        };

        // mouseenter/mouseleave only fire on elements; the root element's
        // pair tracks the pointer entering and leaving the viewport.
        match (kind, self.document.document_element()) {
            (PointerEventKind::Enter | PointerEventKind::Leave, Some(root)) => {
                EventListener::new(&root, name, callback)
            }
            _ => EventListener::new(&self.document, name, callback),
        }
    }

    fn set_native_cursor_hidden(&self, hidden: bool) {
        let Some(body) = self.body() else {
            return;
        };
        let classes = body.class_list();
        let _ = if hidden {
            classes.add_1(NATIVE_CURSOR_HIDDEN_CLASS)
        } else {
            classes.remove_1(NATIVE_CURSOR_HIDDEN_CLASS)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Ledger {
        attached: Cell<usize>,
        detached: Rc<Cell<usize>>,
        marker: Cell<bool>,
        kinds: RefCell<Vec<PointerEventKind>>,
    }

    struct CountedListener(Rc<Cell<usize>>);

    impl Drop for CountedListener {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Clone, Default)]
    struct FakeHost(Rc<Ledger>);

    impl PointerHost for FakeHost {
        type Listener = CountedListener;

        fn listen(&self, kind: PointerEventKind, _sink: SignalSink) -> CountedListener {
            self.0.attached.set(self.0.attached.get() + 1);
            self.0.kinds.borrow_mut().push(kind);
            CountedListener(self.0.detached.clone())
        }

        fn set_native_cursor_hidden(&self, hidden: bool) {
            self.0.marker.set(hidden);
        }
    }

    fn bindings() -> (PointerBindings<FakeHost>, Rc<Ledger>) {
        let host = FakeHost::default();
        let ledger = host.0.clone();
        (PointerBindings::new(host, Rc::new(|_: PointerSignal| {})), ledger)
    }

    #[test]
    fn desktop_mount_binds_every_pointer_event_once() {
        let (mut b, ledger) = bindings();
        assert!(b.refresh(false));
        assert!(!b.refresh(false));
        assert_eq!(ledger.attached.get(), 5);
        assert_eq!(ledger.kinds.borrow().as_slice(), &PointerEventKind::ALL);
        assert!(ledger.marker.get());
        assert!(!b.suppressed());
    }

    #[test]
    fn suppressed_mount_binds_nothing_and_keeps_native_cursor() {
        let (mut b, ledger) = bindings();
        b.refresh(true);
        assert_eq!(ledger.attached.get(), 0);
        assert!(!ledger.marker.get());
        assert!(b.suppressed());
    }

    #[test]
    fn crossing_breakpoint_swaps_listeners_once_per_crossing() {
        let (mut b, ledger) = bindings();
        b.refresh(false);

        // shrink below 768 over several resize events
        for _ in 0..3 {
            b.refresh(true);
        }
        assert_eq!(ledger.attached.get(), 5);
        assert_eq!(ledger.detached.get(), 5);
        assert!(!ledger.marker.get());

        // and back out
        for _ in 0..3 {
            b.refresh(false);
        }
        assert_eq!(ledger.attached.get(), 10);
        assert_eq!(ledger.detached.get(), 5);
        assert!(ledger.marker.get());
    }

    #[test]
    fn dropping_bindings_detaches_everything() {
        let (mut b, ledger) = bindings();
        b.refresh(false);
        drop(b);
        assert_eq!(ledger.detached.get(), 5);
        assert!(!ledger.marker.get());
    }

    #[test]
    fn release_is_idempotent() {
        let (mut b, ledger) = bindings();
        b.refresh(false);
        b.release();
        b.release();
        drop(b);
        assert_eq!(ledger.detached.get(), 5);
    }
}
