use super::*;

/// The address of a blog page: which post to show and in which language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
  url: Url,
}

impl PageLocation {
  #[must_use]
  pub fn language(&self, fallback: Language) -> Language {
    Language::from_url(&self.url, fallback)
  }

  #[must_use]
  pub fn new(url: Url) -> Self {
    Self { url }
  }

  pub fn parse(value: &str) -> Result<Self> {
    Ok(Self::new(Url::parse(value)?))
  }

  /// Finds the post id in `?id=`, then in the last path segment (with a
  /// page extension removed), then in the segment before it.
  #[must_use]
  pub fn post_id(&self) -> Option<u64> {
    if let Some((_, id)) = self.url.query_pairs().find(|(name, _)| name == "id")
      && DIGITS.is_match(&id)
    {
      return id.parse().ok();
    }

    let segments = self
      .url
      .path_segments()
      .map(|segments| {
        segments
          .filter(|segment| !segment.is_empty())
          .collect::<Vec<_>>()
      })
      .unwrap_or_default();

    let mut candidates = segments.iter().rev();

    if let Some(last) = candidates.next() {
      let last = PAGE_EXTENSION.replace(last, "");

      if DIGITS.is_match(&last) {
        return last.parse().ok();
      }
    }

    candidates
      .next()
      .filter(|previous| DIGITS.is_match(previous))
      .and_then(|previous| previous.parse().ok())
  }

  #[must_use]
  pub fn url(&self) -> &Url {
    &self.url
  }

  #[must_use]
  pub fn with_language(&self, language: Language) -> Self {
    Self::new(language.apply_to(&self.url))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn post_id(url: &str) -> Option<u64> {
    PageLocation::parse(url).unwrap().post_id()
  }

  #[test]
  fn prefers_id_query_parameter() {
    assert_eq!(post_id("https://x.test/blog/9.html?id=4"), Some(4));
  }

  #[test]
  fn ignores_non_numeric_id_parameter() {
    assert_eq!(post_id("https://x.test/blog/9?id=four"), Some(9));
  }

  #[test]
  fn reads_last_path_segment() {
    assert_eq!(post_id("https://x.test/blog/1"), Some(1));
    assert_eq!(post_id("https://x.test/blog/12/"), Some(12));
    assert_eq!(post_id("https://x.test/blog/7.HTML"), Some(7));
    assert_eq!(post_id("https://x.test/blog/8.php?lang=en"), Some(8));
  }

  #[test]
  fn falls_back_to_previous_segment() {
    assert_eq!(post_id("https://x.test/blog/5/index.html"), Some(5));
  }

  #[test]
  fn returns_none_without_an_id() {
    assert_eq!(post_id("https://x.test/blog/post.html"), None);
    assert_eq!(post_id("https://x.test/"), None);
  }

  #[test]
  fn rejects_invalid_urls() {
    assert!(matches!(
      PageLocation::parse("not a url"),
      Err(Error::InvalidUrl { .. })
    ));
  }

  #[test]
  fn switches_language_in_place() {
    let location = PageLocation::parse("https://x.test/blog/1.html?lang=nl")
      .unwrap()
      .with_language(Language::En);

    assert_eq!(location.language(Language::Nl), Language::En);
    assert_eq!(location.post_id(), Some(1));
  }
}
