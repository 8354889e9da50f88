use super::*;

/// A side effect the lightbox asks of the page hosting it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  CapturePointer(i32),
  ClearMedia,
  ClearTransition,
  CreateOverlay,
  DetachVideo,
  DisableTransition,
  HideOverlay,
  LockScroll,
  Mount(MediaItem),
  PauseVideo,
  PreventDefault,
  ReleasePointer(i32),
  SetNavigationEnabled(bool),
  ShowOverlay,
  SnapBack(Duration),
  Translate(f64),
  UnlockScroll,
}

impl Display for Command {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::CapturePointer(id) => write!(f, "capture-pointer {id}"),
      Self::ClearMedia => write!(f, "clear-media"),
      Self::ClearTransition => write!(f, "clear-transition"),
      Self::CreateOverlay => write!(f, "create-overlay"),
      Self::DetachVideo => write!(f, "detach-video"),
      Self::DisableTransition => write!(f, "disable-transition"),
      Self::HideOverlay => write!(f, "hide-overlay"),
      Self::LockScroll => write!(f, "lock-scroll"),
      Self::Mount(item) => match &item.mime_type {
        Some(mime) if item.is_video() => {
          write!(f, "mount video {} ({mime})", item.source_url)
        }
        _ if item.is_video() => write!(f, "mount video {}", item.source_url),
        _ => write!(f, "mount image {}", item.source_url),
      },
      Self::PauseVideo => write!(f, "pause-video"),
      Self::PreventDefault => write!(f, "prevent-default"),
      Self::ReleasePointer(id) => write!(f, "release-pointer {id}"),
      Self::SetNavigationEnabled(enabled) => {
        write!(f, "navigation {}", if *enabled { "enabled" } else { "disabled" })
      }
      Self::ShowOverlay => write!(f, "show-overlay"),
      Self::SnapBack(duration) => {
        write!(f, "snap-back {}ms", duration.as_millis())
      }
      Self::Translate(dx) => write!(f, "translate {dx}px"),
      Self::UnlockScroll => write!(f, "unlock-scroll"),
    }
  }
}

/// The page-side half of the lightbox.
pub trait Surface {
  fn apply(&mut self, command: Command);
}

/// A surface that keeps every command it receives.
#[derive(Debug, Default)]
pub struct Recorder {
  commands: Vec<Command>,
}

impl Recorder {
  #[must_use]
  pub fn commands(&self) -> &[Command] {
    &self.commands
  }

  pub fn take(&mut self) -> Vec<Command> {
    mem::take(&mut self.commands)
  }
}

impl Surface for Recorder {
  fn apply(&mut self, command: Command) {
    self.commands.push(command);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recorder_drains_commands_in_order() {
    let mut recorder = Recorder::default();

    recorder.apply(Command::ShowOverlay);
    recorder.apply(Command::LockScroll);

    assert_eq!(recorder.take(), vec![Command::ShowOverlay, Command::LockScroll]);
    assert!(recorder.commands().is_empty());
  }

  #[test]
  fn commands_display_for_logs() {
    assert_eq!(
      Command::Mount(MediaItem::video(
        "https://x.test/b.mp4",
        Some("video/mp4".into())
      ))
      .to_string(),
      "mount video https://x.test/b.mp4 (video/mp4)"
    );
    assert_eq!(
      Command::SnapBack(Duration::from_millis(200)).to_string(),
      "snap-back 200ms"
    );
    assert_eq!(Command::Translate(-42.5).to_string(), "translate -42.5px");
  }
}
