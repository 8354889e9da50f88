use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
  pub pointer_id: i32,
  pub x: f64,
  pub y: f64,
}

impl PointerEvent {
  #[must_use]
  pub fn new(pointer_id: i32, x: f64, y: f64) -> Self {
    Self { pointer_id, x, y }
  }
}

/// What a finished drag commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
  Next,
  Previous,
  SnapBack,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SwipeState {
  #[default]
  Idle,
  Dragging {
    pointer_id: i32,
    start_x: f64,
    start_y: f64,
    dx: f64,
    dy: f64,
  },
}

/// Horizontal swipe recognizer. At most one pointer is tracked; a
/// pointer-down while a drag is in progress is ignored.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
  state: SwipeState,
  threshold: f64,
}

impl SwipeTracker {
  #[must_use]
  pub fn is_dragging(&self) -> bool {
    matches!(self.state, SwipeState::Dragging { .. })
  }

  #[must_use]
  pub fn new(threshold: f64) -> Self {
    Self {
      state: SwipeState::Idle,
      threshold,
    }
  }

  /// Starts a drag. Returns `false` when another pointer already owns it.
  pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
    if self.is_dragging() {
      return false;
    }

    self.state = SwipeState::Dragging {
      pointer_id: event.pointer_id,
      start_x: event.x,
      start_y: event.y,
      dx: 0.0,
      dy: 0.0,
    };

    true
  }

  /// Tracks movement of the captured pointer. Yields the horizontal offset
  /// to apply when the movement is more horizontal than vertical.
  pub fn pointer_move(&mut self, event: PointerEvent) -> Option<f64> {
    let (dx, dy) = self.track(event)?;

    (dx.abs() > dy.abs()).then_some(dx)
  }

  /// Ends the drag for pointer-up, cancel and leave alike.
  pub fn pointer_up(&mut self, event: PointerEvent) -> Option<Swipe> {
    let (dx, dy) = self.track(event)?;

    self.state = SwipeState::Idle;

    if dx.abs() > self.threshold && dx.abs() > dy.abs() {
      Some(if dx < 0.0 { Swipe::Next } else { Swipe::Previous })
    } else {
      Some(Swipe::SnapBack)
    }
  }

  /// Drops any drag in progress, returning the pointer that held it.
  pub fn reset(&mut self) -> Option<i32> {
    match mem::take(&mut self.state) {
      SwipeState::Dragging { pointer_id, .. } => Some(pointer_id),
      SwipeState::Idle => None,
    }
  }

  #[must_use]
  pub fn state(&self) -> SwipeState {
    self.state
  }

  fn track(&mut self, event: PointerEvent) -> Option<(f64, f64)> {
    let SwipeState::Dragging {
      pointer_id,
      start_x,
      start_y,
      dx,
      dy,
    } = &mut self.state
    else {
      return None;
    };

    if *pointer_id != event.pointer_id {
      return None;
    }

    *dx = event.x - *start_x;
    *dy = event.y - *start_y;

    Some((*dx, *dy))
  }
}
