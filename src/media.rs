use super::*;

static MEDIA: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("img, video").unwrap());

static SOURCE: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("source").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
  Image,
  Video,
}

impl MediaKind {
  /// Decides between image and video from the file extension, ignoring
  /// any query string.
  #[must_use]
  pub fn sniff(url: &str) -> Self {
    if Self::video_mime(url).is_some() {
      Self::Video
    } else {
      Self::Image
    }
  }

  #[must_use]
  pub fn video_mime(url: &str) -> Option<&'static str> {
    let path = url.split('?').next().unwrap_or(url).to_ascii_lowercase();

    let captures = VIDEO_EXTENSION.captures(&path)?;

    Some(match &captures[1] {
      "mp4" => "video/mp4",
      "webm" => "video/webm",
      "mov" => "video/quicktime",
      _ => "video/ogg",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
  pub kind: MediaKind,
  pub source_url: String,
  pub mime_type: Option<String>,
}

impl MediaItem {
  /// An item for a bare source path, typed by its extension.
  #[must_use]
  pub fn from_source(src: &str) -> Self {
    match MediaKind::sniff(src) {
      MediaKind::Image => Self::image(src),
      MediaKind::Video => {
        Self::video(src, MediaKind::video_mime(src).map(str::to_string))
      }
    }
  }

  #[must_use]
  pub fn image(source_url: impl Into<String>) -> Self {
    Self {
      kind: MediaKind::Image,
      source_url: source_url.into(),
      mime_type: None,
    }
  }

  #[must_use]
  pub fn is_video(&self) -> bool {
    self.kind == MediaKind::Video
  }

  /// MIME type to announce on the mounted `<source>`.
  #[must_use]
  pub fn mime_or_default(&self) -> &str {
    self.mime_type.as_deref().unwrap_or("video/mp4")
  }

  /// Resolves `src` against `base` and strips the fragment. Values that do
  /// not form a valid URL are kept as written, minus the fragment.
  #[must_use]
  pub fn normalize_src(src: &str, base: Option<&Url>) -> String {
    let resolved = match base {
      Some(base) => base.join(src),
      None => Url::parse(src),
    };

    match resolved {
      Ok(mut url) => {
        url.set_fragment(None);
        url.into()
      }
      Err(error) => {
        trace!(src, %error, "keeping unnormalized media source");
        src.split('#').next().unwrap_or(src).to_string()
      }
    }
  }

  #[must_use]
  pub fn video(
    source_url: impl Into<String>,
    mime_type: Option<String>,
  ) -> Self {
    Self {
      kind: MediaKind::Video,
      source_url: source_url.into(),
      mime_type,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTag {
  pub src: String,
  pub mime: String,
}

/// A media element as seen by the group scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaElement {
  Image {
    src: String,
  },
  Video {
    current_src: Option<String>,
    source: Option<SourceTag>,
    src: Option<String>,
  },
}

impl MediaElement {
  /// Reads an `<img>` or `<video>` element. Static markup carries no
  /// playback state, so `current_src` is left empty.
  #[must_use]
  pub fn from_element(element: ElementRef<'_>) -> Option<Self> {
    let attr = |element: ElementRef<'_>, name: &str| {
      element.value().attr(name).map(str::to_string)
    };

    match element.value().name() {
      "img" => Some(Self::Image {
        src: attr(element, "src").unwrap_or_default(),
      }),
      "video" => Some(Self::Video {
        current_src: None,
        source: element.select(&SOURCE).next().map(|source| SourceTag {
          src: attr(source, "src").unwrap_or_default(),
          mime: attr(source, "type").unwrap_or_default(),
        }),
        src: attr(element, "src"),
      }),
      _ => None,
    }
  }

  #[must_use]
  pub fn kind(&self) -> MediaKind {
    match self {
      Self::Image { .. } => MediaKind::Image,
      Self::Video { .. } => MediaKind::Video,
    }
  }

  #[must_use]
  pub fn mime(&self) -> Option<&str> {
    match self {
      Self::Video {
        source: Some(source),
        ..
      } if !source.mime.is_empty() => Some(source.mime.as_str()),
      _ => None,
    }
  }

  /// The source a browser would play: the current playback source, then
  /// the first `<source>` child, then the element's own `src`.
  #[must_use]
  pub fn resolved_src(&self) -> &str {
    match self {
      Self::Image { src } => src.as_str(),
      Self::Video {
        current_src,
        source,
        src,
      } => [
        current_src.as_deref(),
        source.as_ref().map(|source| source.src.as_str()),
        src.as_deref(),
      ]
      .into_iter()
      .flatten()
      .find(|candidate| !candidate.is_empty())
      .unwrap_or_default(),
    }
  }
}

/// The media elements of one carousel, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaGroup {
  elements: Vec<MediaElement>,
}

impl MediaGroup {
  #[must_use]
  pub fn elements(&self) -> &[MediaElement] {
    &self.elements
  }

  /// Normalized, deduplicated lightbox items. Elements without a source
  /// are skipped and the first occurrence of a URL wins.
  #[must_use]
  pub fn items(&self, base: Option<&Url>) -> Vec<MediaItem> {
    let mut seen = HashSet::new();

    self
      .elements
      .iter()
      .filter_map(|element| {
        let raw = element.resolved_src();

        if raw.is_empty() {
          return None;
        }

        let source_url = MediaItem::normalize_src(raw, base);

        if !seen.insert(source_url.clone()) {
          return None;
        }

        Some(match element.kind() {
          MediaKind::Image => MediaItem::image(source_url),
          MediaKind::Video => {
            MediaItem::video(source_url, element.mime().map(str::to_string))
          }
        })
      })
      .collect()
  }

  #[must_use]
  pub fn new(elements: Vec<MediaElement>) -> Self {
    Self { elements }
  }

  #[must_use]
  pub fn scan(container: ElementRef<'_>) -> Self {
    Self::new(
      container
        .select(&MEDIA)
        .filter_map(MediaElement::from_element)
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn base() -> Url {
    Url::parse("https://example.com/blog/1.html").unwrap()
  }

  #[test]
  fn sniffs_video_extensions() {
    assert_eq!(MediaKind::sniff("clip.MP4"), MediaKind::Video);
    assert_eq!(MediaKind::sniff("clip.webm?autoplay=1"), MediaKind::Video);
    assert_eq!(MediaKind::sniff("photo.jpg"), MediaKind::Image);
    assert_eq!(MediaKind::sniff("mp4.png"), MediaKind::Image);
  }

  #[test]
  fn items_from_bare_sources_follow_their_extension() {
    assert_eq!(
      MediaItem::from_source("vid/b.MOV?x=1"),
      MediaItem::video("vid/b.MOV?x=1", Some("video/quicktime".into()))
    );
    assert_eq!(
      MediaItem::from_source("img/a.jpg"),
      MediaItem::image("img/a.jpg")
    );
    assert!(!MediaItem::from_source("mp4.png").is_video());
  }

  #[test]
  fn maps_extensions_to_mime_types() {
    assert_eq!(MediaKind::video_mime("a.mp4"), Some("video/mp4"));
    assert_eq!(MediaKind::video_mime("a.webm"), Some("video/webm"));
    assert_eq!(MediaKind::video_mime("a.mov"), Some("video/quicktime"));
    assert_eq!(MediaKind::video_mime("a.ogv"), Some("video/ogg"));
    assert_eq!(MediaKind::video_mime("a.ogg"), Some("video/ogg"));
    assert_eq!(MediaKind::video_mime("a.gif"), None);
  }

  #[test]
  fn normalizes_relative_sources_and_strips_fragments() {
    assert_eq!(
      MediaItem::normalize_src("../img/a.jpg#zoom", Some(&base())),
      "https://example.com/img/a.jpg"
    );
    assert_eq!(
      MediaItem::normalize_src("https://cdn.test/b.mp4#t=3", None),
      "https://cdn.test/b.mp4"
    );
  }

  #[test]
  fn falls_back_to_raw_source_when_unparseable() {
    assert_eq!(MediaItem::normalize_src("img/a.jpg#x", None), "img/a.jpg");
  }

  #[test]
  fn video_resolution_prefers_current_then_source_then_src() {
    let mut video = MediaElement::Video {
      current_src: Some("playing.webm".into()),
      source: Some(SourceTag {
        src: "source.mp4".into(),
        mime: "video/mp4".into(),
      }),
      src: Some("own.mov".into()),
    };

    assert_eq!(video.resolved_src(), "playing.webm");

    if let MediaElement::Video { current_src, .. } = &mut video {
      *current_src = None;
    }

    assert_eq!(video.resolved_src(), "source.mp4");

    if let MediaElement::Video { source, .. } = &mut video {
      *source = None;
    }

    assert_eq!(video.resolved_src(), "own.mov");
  }

  #[test]
  fn scans_media_in_document_order() {
    let html = Html::parse_fragment(concat!(
      "<div class=\"carousel\">",
      "<div><img src=\"a.jpg\"></div>",
      "<div><video><source src=\"b.mp4\" type=\"video/mp4\"></video></div>",
      "<div><img></div>",
      "</div>"
    ));

    let group = MediaGroup::scan(html.root_element());

    assert_eq!(
      group.elements(),
      &[
        MediaElement::Image { src: "a.jpg".into() },
        MediaElement::Video {
          current_src: None,
          source: Some(SourceTag {
            src: "b.mp4".into(),
            mime: "video/mp4".into(),
          }),
          src: None,
        },
        MediaElement::Image { src: String::new() },
      ]
    );
  }

  #[test]
  fn items_skip_empty_sources_and_deduplicate() {
    let group = MediaGroup::new(vec![
      MediaElement::Image { src: "a.jpg".into() },
      MediaElement::Image { src: String::new() },
      MediaElement::Video {
        current_src: None,
        source: Some(SourceTag {
          src: "b.mp4".into(),
          mime: "video/mp4".into(),
        }),
        src: None,
      },
      MediaElement::Image {
        src: "https://example.com/blog/a.jpg#again".into(),
      },
    ]);

    assert_eq!(
      group.items(Some(&base())),
      vec![
        MediaItem::image("https://example.com/blog/a.jpg"),
        MediaItem::video(
          "https://example.com/blog/b.mp4",
          Some("video/mp4".into())
        ),
      ]
    );
  }

  #[test]
  fn deduplication_is_case_sensitive() {
    let group = MediaGroup::new(vec![
      MediaElement::Image { src: "A.jpg".into() },
      MediaElement::Image { src: "a.jpg".into() },
    ]);

    assert_eq!(group.items(Some(&base())).len(), 2);
  }

  #[test]
  fn video_without_type_has_no_mime() {
    let item = MediaGroup::new(vec![MediaElement::Video {
      current_src: None,
      source: None,
      src: Some("c.ogv".into()),
    }])
    .items(Some(&base()))
    .remove(0);

    assert_eq!(item.mime_type, None);
    assert_eq!(item.mime_or_default(), "video/mp4");
  }
}
