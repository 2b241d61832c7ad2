use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSignal {
    Move(Position),
    Down,
    Up,
    Enter,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerState {
    pub position: Position,
    pub visible: bool,
    pub pressed: bool,
    pub hovering: bool,
    pub suppressed: bool,
}

impl PointerState {
    pub fn new(suppressed: bool) -> Self {
        Self {
            position: Position::default(),
            visible: false,
            pressed: false,
            hovering: false,
            suppressed,
        }
    }

    /// Returns whether anything changed. Suppressed state ignores input.
    pub fn apply(&mut self, signal: PointerSignal) -> bool {
        if self.suppressed {
            return false;
        }
        let before = self.clone();
        match signal {
            PointerSignal::Move(position) => {
                self.position = position;
                self.visible = true;
            }
            PointerSignal::Down => self.pressed = true,
            PointerSignal::Up => self.pressed = false,
            PointerSignal::Enter => self.visible = true,
            PointerSignal::Leave => self.visible = false,
        }
        *self != before
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering && !self.suppressed;
    }

    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
        if suppressed {
            self.visible = false;
            self.pressed = false;
            self.hovering = false;
        }
    }
}

/// A follower that repeats positions after a fixed delay.
#[derive(Debug, Clone)]
pub struct LaggedFollower {
    lag_ms: f64,
    rendered: Position,
    pending: VecDeque<(f64, Position)>,
}

impl LaggedFollower {
    pub fn new(lag_ms: f64) -> Self {
        Self {
            lag_ms,
            rendered: Position::default(),
            pending: VecDeque::new(),
        }
    }

    /// Queues `position`, returning when it becomes due.
    pub fn push(&mut self, position: Position, now_ms: f64) -> f64 {
        let due = now_ms + self.lag_ms;
        self.pending.push_back((due, position));
        due
    }

    /// Applies every queued position due at `now_ms`.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let mut moved = false;
        while let Some(&(due, position)) = self.pending.front() {
            if due > now_ms {
                break;
            }
            self.pending.pop_front();
            moved |= self.rendered != position;
            self.rendered = position;
        }
        moved
    }

    pub fn rendered(&self) -> Position {
        self.rendered
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// The two cursor visuals: the inner dot tracks immediately, the outer ring
/// trails.
#[derive(Debug, Clone)]
pub struct Followers {
    inner: Position,
    outer: LaggedFollower,
}

impl Followers {
    pub fn new(outer_lag_ms: u32) -> Self {
        Self {
            inner: Position::default(),
            outer: LaggedFollower::new(outer_lag_ms as f64),
        }
    }

    pub fn record(&mut self, position: Position, now_ms: f64) -> f64 {
        self.inner = position;
        self.outer.push(position, now_ms)
    }

    pub fn settle(&mut self, now_ms: f64) -> bool {
        self.outer.advance(now_ms)
    }

    pub fn inner(&self) -> Position {
        self.inner
    }

    pub fn outer(&self) -> Position {
        self.outer.rendered()
    }

    pub fn outer_pending(&self) -> usize {
        self.outer.pending()
    }
}

/// Drops handles whose queued position has already been applied. Every
/// handle maps to one queued entry, oldest first.
pub fn retire_settled<T>(handles: &mut VecDeque<T>, still_pending: usize) {
    let settled = handles.len().saturating_sub(still_pending);
    handles.drain(..settled);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Follower {
    Outer,
    Inner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerLook {
    pub visible: bool,
    pub scale: f64,
}

pub fn follower_look(state: &PointerState, follower: Follower) -> FollowerLook {
    let scale = match (follower, state.hovering, state.pressed) {
        (Follower::Outer, true, _) => 1.5,
        (Follower::Outer, false, true) => 0.75,
        (Follower::Inner, true, _) => 0.0,
        (Follower::Inner, false, true) => 0.5,
        _ => 1.0,
    };
    FollowerLook {
        visible: state.visible && !state.suppressed,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_show_the_cursor() {
        let mut state = PointerState::new(false);
        assert!(!state.visible);
        assert!(state.apply(PointerSignal::Move(Position::new(10, 20))));
        assert!(state.visible);
        assert_eq!(state.position, Position::new(10, 20));
        assert!(state.apply(PointerSignal::Leave));
        assert!(!state.visible);
        assert!(state.apply(PointerSignal::Enter));
        assert!(!state.apply(PointerSignal::Enter));
    }

    #[test]
    fn suppressed_state_never_moves() {
        let mut state = PointerState::new(true);
        for signal in [
            PointerSignal::Move(Position::new(5, 5)),
            PointerSignal::Down,
            PointerSignal::Enter,
        ] {
            assert!(!state.apply(signal));
        }
        assert_eq!(state.position, Position::default());
        assert!(!follower_look(&state, Follower::Inner).visible);
        assert!(!follower_look(&state, Follower::Outer).visible);
    }

    #[test]
    fn suppression_hides_a_visible_cursor() {
        let mut state = PointerState::new(false);
        state.apply(PointerSignal::Move(Position::new(1, 1)));
        state.apply(PointerSignal::Down);
        state.set_suppressed(true);
        assert!(!state.visible);
        assert!(!state.pressed);
        state.set_hovering(true);
        assert!(!state.hovering);
    }

    #[test]
    fn inner_is_immediate_outer_lags() {
        let mut followers = Followers::new(8);
        let points = [Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)];
        for (i, p) in points.iter().enumerate() {
            followers.record(*p, i as f64);
        }
        assert_eq!(followers.inner(), Position::new(3, 3));
        assert_eq!(followers.outer(), Position::default());

        assert!(followers.settle(9.0));
        assert_eq!(followers.outer(), Position::new(2, 2));
        assert_eq!(followers.outer_pending(), 1);

        followers.settle(10.0);
        assert_eq!(followers.outer(), Position::new(3, 3));
        assert_eq!(followers.outer_pending(), 0);
    }

    #[test]
    fn outer_holds_until_lag_elapses() {
        let mut followers = Followers::new(8);
        let due = followers.record(Position::new(40, 60), 100.0);
        assert_eq!(due, 108.0);
        assert!(!followers.settle(107.0));
        assert_eq!(followers.outer(), Position::default());
        assert!(followers.settle(due));
        assert_eq!(followers.outer(), Position::new(40, 60));
    }

    #[test]
    fn retire_keeps_one_handle_per_pending_entry() {
        let mut handles: VecDeque<u32> = (1..=4).collect();
        retire_settled(&mut handles, 1);
        assert_eq!(handles, VecDeque::from(vec![4]));
        retire_settled(&mut handles, 3);
        assert_eq!(handles.len(), 1);
    }

    #[test]
    fn press_and_hover_scale_followers() {
        let mut state = PointerState::new(false);
        state.apply(PointerSignal::Move(Position::new(0, 0)));
        assert_eq!(follower_look(&state, Follower::Outer).scale, 1.0);

        state.apply(PointerSignal::Down);
        assert_eq!(follower_look(&state, Follower::Outer).scale, 0.75);
        assert_eq!(follower_look(&state, Follower::Inner).scale, 0.5);

        state.set_hovering(true);
        assert_eq!(follower_look(&state, Follower::Outer).scale, 1.5);
        assert_eq!(follower_look(&state, Follower::Inner).scale, 0.0);
    }
}
