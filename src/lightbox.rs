use super::*;

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  ArrowLeft,
  ArrowRight,
  Escape,
  Other,
}

impl From<&str> for Key {
  fn from(name: &str) -> Self {
    match name {
      "ArrowLeft" => Self::ArrowLeft,
      "ArrowRight" => Self::ArrowRight,
      "Escape" => Self::Escape,
      _ => Self::Other,
    }
  }
}

/// Clickable parts of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
  Backdrop,
  Close,
  Next,
  Previous,
}

impl FromStr for Control {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "backdrop" => Ok(Self::Backdrop),
      "close" => Ok(Self::Close),
      "next" => Ok(Self::Next),
      "previous" | "prev" => Ok(Self::Previous),
      other => Err(format!("unknown control `{other}`")),
    }
  }
}

/// Owns the overlay and the media group shown in it.
///
/// The group is replaced wholesale on every `open` and never changes while
/// the lightbox is open. Media is torn down (video paused before it is
/// detached) on every re-render and on every close.
#[derive(Debug)]
pub struct LightboxController<S: Surface> {
  base_url: Option<Url>,
  current_index: usize,
  group: Vec<MediaItem>,
  is_open: bool,
  mounted: Option<MediaItem>,
  overlay_created: bool,
  snap_back: Duration,
  snapping_back: bool,
  surface: S,
  swipe: SwipeTracker,
}

impl<S: Surface> LightboxController<S> {
  /// Handles a click on one of the overlay controls. Previous and next are
  /// inert while the group has a single item.
  pub fn click(&mut self, control: Control) {
    match control {
      Control::Backdrop | Control::Close => self.close(),
      Control::Next if self.group.len() > 1 => self.navigate(1),
      Control::Previous if self.group.len() > 1 => self.navigate(-1),
      Control::Next | Control::Previous => {}
    }
  }

  pub fn close(&mut self) {
    if !self.is_open {
      return;
    }

    debug!(items = self.group.len(), "closing lightbox");

    self.teardown_media();
    self.release_drag();

    self.snapping_back = false;

    self.surface.apply(Command::HideOverlay);
    self.surface.apply(Command::UnlockScroll);

    self.group.clear();
    self.current_index = 0;
    self.is_open = false;
  }

  #[must_use]
  pub fn current(&self) -> Option<&MediaItem> {
    self.is_open.then(|| self.group.get(self.current_index)).flatten()
  }

  #[must_use]
  pub fn current_index(&self) -> usize {
    self.current_index
  }

  fn ensure_overlay(&mut self) {
    if !self.overlay_created {
      self.surface.apply(Command::CreateOverlay);
      self.overlay_created = true;
    }
  }

  #[must_use]
  pub fn group(&self) -> &[MediaItem] {
    &self.group
  }

  #[must_use]
  pub fn is_open(&self) -> bool {
    self.is_open
  }

  /// Keyboard bindings, only active while open. Returns whether the key
  /// was handled.
  pub fn key(&mut self, key: Key) -> bool {
    if !self.is_open {
      return false;
    }

    match key {
      Key::Escape => self.close(),
      Key::ArrowLeft => self.navigate(-1),
      Key::ArrowRight => self.navigate(1),
      Key::Other => return false,
    }

    true
  }

  /// Moves through the group, wrapping around at both ends.
  pub fn navigate(&mut self, delta: isize) {
    if !self.is_open || self.group.is_empty() {
      return;
    }

    let len = self.group.len() as isize;

    self.current_index =
      (self.current_index as isize + delta).rem_euclid(len) as usize;

    self.render();
  }

  #[must_use]
  pub fn new(surface: S, options: &FolioOptions) -> Self {
    Self {
      base_url: options.base_url.clone(),
      current_index: 0,
      group: Vec::new(),
      is_open: false,
      mounted: None,
      overlay_created: false,
      snap_back: options.snap_back,
      snapping_back: false,
      surface,
      swipe: SwipeTracker::new(options.swipe_threshold),
    }
  }

  /// Opens the lightbox on `items`, positioned on `clicked_url` when it is
  /// part of the group and on the first item otherwise.
  pub fn open(&mut self, items: Vec<MediaItem>, clicked_url: &str) {
    if items.is_empty() {
      debug!("ignoring lightbox open for an empty group");
      return;
    }

    self.ensure_overlay();

    let clicked = MediaItem::normalize_src(clicked_url, self.base_url.as_ref());

    self.current_index = items
      .iter()
      .position(|item| item.source_url == clicked)
      .unwrap_or(0);

    self.group = items;

    debug!(
      items = self.group.len(),
      index = self.current_index,
      "opening lightbox"
    );

    self.render();

    if !self.is_open {
      self.surface.apply(Command::ShowOverlay);
      self.surface.apply(Command::LockScroll);
      self.is_open = true;
    }
  }

  /// Opens the lightbox on the media of a scanned carousel.
  pub fn open_group(&mut self, group: &MediaGroup, clicked_url: &str) {
    let items = group.items(self.base_url.as_ref());
    self.open(items, clicked_url);
  }

  pub fn pointer_down(&mut self, event: PointerEvent) {
    if !self.is_open || self.mounted.is_none() {
      return;
    }

    if self.swipe.pointer_down(event) {
      self.snapping_back = false;
      self.surface.apply(Command::CapturePointer(event.pointer_id));
      self.surface.apply(Command::DisableTransition);
    }
  }

  pub fn pointer_move(&mut self, event: PointerEvent) {
    if let Some(dx) = self.swipe.pointer_move(event) {
      self.surface.apply(Command::PreventDefault);
      self.surface.apply(Command::Translate(dx));
    }
  }

  /// Finishes a drag on pointer-up, pointer-cancel or pointer-leave.
  pub fn pointer_up(&mut self, event: PointerEvent) {
    let Some(swipe) = self.swipe.pointer_up(event) else {
      return;
    };

    self.surface.apply(Command::ReleasePointer(event.pointer_id));

    match swipe {
      Swipe::Next => self.navigate(1),
      Swipe::Previous => self.navigate(-1),
      Swipe::SnapBack => {
        self.surface.apply(Command::SnapBack(self.snap_back));
        self.snapping_back = true;
      }
    }
  }

  /// Abandons a drag in progress so its pointer-up cannot act on the item
  /// that replaces the one it started on.
  fn release_drag(&mut self) {
    if let Some(pointer_id) = self.swipe.reset() {
      self.surface.apply(Command::ReleasePointer(pointer_id));
    }
  }

  fn render(&mut self) {
    self.release_drag();
    self.teardown_media();

    let Some(item) = self.group.get(self.current_index).cloned() else {
      return;
    };

    self.surface.apply(Command::Mount(item.clone()));
    self.mounted = Some(item);

    self
      .surface
      .apply(Command::SetNavigationEnabled(self.group.len() > 1));
  }

  #[must_use]
  pub fn surface(&self) -> &S {
    &self.surface
  }

  pub fn surface_mut(&mut self) -> &mut S {
    &mut self.surface
  }

  fn teardown_media(&mut self) {
    let Some(item) = self.mounted.take() else {
      return;
    };

    if item.is_video() {
      self.surface.apply(Command::PauseVideo);
      self.surface.apply(Command::DetachVideo);
    }

    self.surface.apply(Command::ClearMedia);
  }

  /// The snap-back animation finished; later drags move instantly again.
  pub fn transition_end(&mut self) {
    if mem::take(&mut self.snapping_back) {
      self.surface.apply(Command::ClearTransition);
    }
  }
}
