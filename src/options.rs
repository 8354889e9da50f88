use super::*;

#[derive(Debug, Clone)]
pub struct FolioOptions {
  pub base_url: Option<Url>,
  pub default_language: Language,
  pub nav_links: Vec<Link>,
  pub snap_back: Duration,
  pub swipe_threshold: f64,
}

impl Default for FolioOptions {
  fn default() -> Self {
    Self {
      base_url: None,
      default_language: Language::Nl,
      nav_links: Vec::new(),
      snap_back: Duration::from_millis(200),
      swipe_threshold: 60.0,
    }
  }
}

impl FolioOptions {
  #[must_use]
  pub fn builder() -> FolioOptionsBuilder {
    FolioOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct FolioOptionsBuilder {
  inner: FolioOptions,
}

impl FolioOptionsBuilder {
  #[must_use]
  pub fn base_url(self, base_url: Url) -> Self {
    Self {
      inner: FolioOptions {
        base_url: Some(base_url),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> FolioOptions {
    self.inner
  }

  #[must_use]
  pub fn default_language(self, default_language: Language) -> Self {
    Self {
      inner: FolioOptions {
        default_language,
        ..self.inner
      },
    }
  }

  /// Appends a top navigation link. Links of the form `../#section` are
  /// rewritten to keep the page language when a post is rendered.
  #[must_use]
  pub fn nav_link(
    mut self,
    href: impl Into<String>,
    text: impl Into<String>,
  ) -> Self {
    self.inner.nav_links.push(Link {
      href: href.into(),
      text: text.into(),
    });

    self
  }

  #[must_use]
  pub fn snap_back(self, snap_back: Duration) -> Self {
    Self {
      inner: FolioOptions {
        snap_back,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn swipe_threshold(self, swipe_threshold: f64) -> Self {
    Self {
      inner: FolioOptions {
        swipe_threshold,
        ..self.inner
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_starts_from_defaults() {
    let options = FolioOptions::builder().build();

    assert_eq!(options.default_language, Language::Nl);
    assert_eq!(options.swipe_threshold, 60.0);
    assert_eq!(options.snap_back, Duration::from_millis(200));
    assert!(options.base_url.is_none());
    assert!(options.nav_links.is_empty());
  }

  #[test]
  fn builder_overrides_individual_fields() {
    let options = FolioOptions::builder()
      .default_language(Language::En)
      .swipe_threshold(90.0)
      .base_url(Url::parse("https://example.com/blog/").unwrap())
      .build();

    assert_eq!(options.default_language, Language::En);
    assert_eq!(options.swipe_threshold, 90.0);
    assert_eq!(
      options.base_url.as_ref().map(Url::as_str),
      Some("https://example.com/blog/")
    );
  }

  #[test]
  fn nav_links_accumulate_in_order() {
    let options = FolioOptions::builder()
      .nav_link("../#about", "About")
      .swipe_threshold(90.0)
      .nav_link("../#skills", "Skills")
      .build();

    assert_eq!(
      options.nav_links,
      vec![
        Link {
          href: "../#about".into(),
          text: "About".into(),
        },
        Link {
          href: "../#skills".into(),
          text: "Skills".into(),
        },
      ]
    );
    assert_eq!(options.swipe_threshold, 90.0);
  }
}
