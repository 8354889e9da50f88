use super::*;

/// One scripted user interaction for a lightbox session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
  Click(String),
  Control(Control),
  Key(String),
  Swipe { dx: f64, dy: f64 },
  TransitionEnd,
}

impl Event {
  const POINTER: i32 = 1;

  pub(crate) fn apply(&self, page: &mut BlogPage<Recorder>) -> Result {
    match self {
      Self::Click(selector) => {
        page.click(selector)?;
      }
      Self::Control(control) => {
        if let Some(lightbox) = page.lightbox_mut() {
          lightbox.click(*control);
        }
      }
      Self::Key(name) => {
        if let Some(lightbox) = page.lightbox_mut() {
          lightbox.key(Key::from(name.as_str()));
        }
      }
      Self::Swipe { dx, dy } => {
        if let Some(lightbox) = page.lightbox_mut() {
          lightbox.pointer_down(PointerEvent::new(Self::POINTER, 0.0, 0.0));
          lightbox.pointer_move(PointerEvent::new(Self::POINTER, *dx, *dy));
          lightbox.pointer_up(PointerEvent::new(Self::POINTER, *dx, *dy));
        }
      }
      Self::TransitionEnd => {
        if let Some(lightbox) = page.lightbox_mut() {
          lightbox.transition_end();
        }
      }
    }

    Ok(())
  }
}

impl Display for Event {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Click(selector) => write!(f, "click {selector}"),
      Self::Control(control) => write!(f, "control {control:?}"),
      Self::Key(name) => write!(f, "key {name}"),
      Self::Swipe { dx, dy } => write!(f, "swipe {dx},{dy}"),
      Self::TransitionEnd => f.write_str("transition-end"),
    }
  }
}

impl FromStr for Event {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    if value == "transition-end" {
      return Ok(Self::TransitionEnd);
    }

    let Some((kind, argument)) = value.split_once('=') else {
      return Err(format!("expected `<kind>=<value>`, got `{value}`"));
    };

    match kind {
      "click" => Ok(Self::Click(argument.to_string())),
      "control" => Ok(Self::Control(argument.parse()?)),
      "key" => Ok(Self::Key(argument.to_string())),
      "swipe" => {
        let (dx, dy) = argument.split_once(',').unwrap_or((argument, "0"));

        let parse = |delta: &str| {
          delta
            .trim()
            .parse::<f64>()
            .map_err(|error| format!("invalid swipe delta `{delta}`: {error}"))
        };

        Ok(Self::Swipe {
          dx: parse(dx)?,
          dy: parse(dy)?,
        })
      }
      other => Err(format!("unknown event kind `{other}`")),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_events() {
    assert_eq!(
      "click=.carousel img".parse::<Event>().unwrap(),
      Event::Click(".carousel img".into())
    );
    assert_eq!(
      "control=prev".parse::<Event>().unwrap(),
      Event::Control(Control::Previous)
    );
    assert_eq!(
      "swipe=-80,4".parse::<Event>().unwrap(),
      Event::Swipe { dx: -80.0, dy: 4.0 }
    );
    assert_eq!(
      "swipe=90".parse::<Event>().unwrap(),
      Event::Swipe { dx: 90.0, dy: 0.0 }
    );
    assert_eq!(
      "transition-end".parse::<Event>().unwrap(),
      Event::TransitionEnd
    );
  }

  #[test]
  fn rejects_malformed_events() {
    assert!("tap".parse::<Event>().is_err());
    assert!("hover=img".parse::<Event>().is_err());
    assert!("swipe=left".parse::<Event>().is_err());
    assert!("control=zoom".parse::<Event>().is_err());
  }
}
