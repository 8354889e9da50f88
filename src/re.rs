use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

pub(crate) static DIGITS: LazyLock<Regex> = re!(r"[0-9]+");

pub(crate) static LINE_BREAK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

pub(crate) static NUMBERED_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").unwrap());

pub(crate) static PAGE_EXTENSION: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\.(?:html?|php)$").unwrap());

pub(crate) static SAFE_LINK_SCHEME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)^(?:https?|mailto|tel):").unwrap());

pub(crate) static VIDEO_EXTENSION: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\.(mp4|webm|ogv|ogg|mov)$").unwrap());

pub(crate) static WEB_LINK_SCHEME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)^https?:").unwrap());
