use super::*;

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  En,
  #[default]
  Nl,
}

/// Page strings that do not come from the content documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
  pub back_home: &'static str,
  pub not_found: &'static str,
}

impl Language {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Nl => "nl",
    }
  }

  #[must_use]
  pub fn content_file(self) -> String {
    format!("content-{}.json", self.as_str())
  }

  /// Reads `?lang=` from a page URL, falling back when it is missing or
  /// not one of the supported locales.
  #[must_use]
  pub fn from_url(url: &Url, fallback: Self) -> Self {
    url
      .query_pairs()
      .find(|(name, _)| name == "lang")
      .and_then(|(_, value)| value.parse().ok())
      .unwrap_or(fallback)
  }

  #[must_use]
  pub fn toggle(self) -> Self {
    match self {
      Self::En => Self::Nl,
      Self::Nl => Self::En,
    }
  }

  #[must_use]
  pub fn ui_text(self) -> UiText {
    match self {
      Self::En => UiText {
        back_home: "Back to the Homepage",
        not_found: "404 - Blog post not found",
      },
      Self::Nl => UiText {
        back_home: "Ga terug naar de Homepage",
        not_found: "404 - Blogpost niet gevonden",
      },
    }
  }

  /// Sets `?lang=` on `url`, keeping the other parameters, their order,
  /// the path and the fragment.
  #[must_use]
  pub fn apply_to(self, url: &Url) -> Url {
    let mut replaced = false;

    let mut pairs = url
      .query_pairs()
      .filter_map(|(name, value)| {
        if name != "lang" {
          return Some((name.into_owned(), value.into_owned()));
        }

        if mem::replace(&mut replaced, true) {
          return None;
        }

        Some((name.into_owned(), self.as_str().to_string()))
      })
      .collect::<Vec<_>>();

    if !replaced {
      pairs.push(("lang".to_string(), self.as_str().to_string()));
    }

    let mut url = url.clone();

    url.query_pairs_mut().clear().extend_pairs(pairs);

    url
  }
}

impl Display for Language {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Language {
  type Err = Error;

  fn from_str(value: &str) -> Result<Self> {
    match value.to_ascii_lowercase().as_str() {
      "en" => Ok(Self::En),
      "nl" => Ok(Self::Nl),
      _ => Err(Error::UnknownLanguage(value.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn url(value: &str) -> Url {
    Url::parse(value).unwrap()
  }

  #[test]
  fn reads_language_case_insensitively() {
    assert_eq!(
      Language::from_url(&url("https://x.test/blog/1?lang=EN"), Language::Nl),
      Language::En
    );
  }

  #[test]
  fn unknown_or_missing_language_falls_back() {
    assert_eq!(
      Language::from_url(&url("https://x.test/?lang=de"), Language::Nl),
      Language::Nl
    );
    assert_eq!(
      Language::from_url(&url("https://x.test/"), Language::En),
      Language::En
    );
  }

  #[test]
  fn toggles_between_locales() {
    assert_eq!(Language::Nl.toggle(), Language::En);
    assert_eq!(Language::En.toggle(), Language::Nl);
  }

  #[test]
  fn applies_language_while_keeping_other_parts() {
    assert_eq!(
      Language::En
        .apply_to(&url("https://x.test/blog/?id=3&lang=nl#media"))
        .as_str(),
      "https://x.test/blog/?id=3&lang=en#media"
    );
    assert_eq!(
      Language::Nl.apply_to(&url("https://x.test/blog/4.html")).as_str(),
      "https://x.test/blog/4.html?lang=nl"
    );
  }

  #[test]
  fn names_content_files() {
    assert_eq!(Language::En.content_file(), "content-en.json");
    assert_eq!(Language::Nl.to_string(), "nl");
  }

  #[test]
  fn rejects_unknown_language_names() {
    assert!(matches!(
      "fr".parse::<Language>(),
      Err(Error::UnknownLanguage(name)) if name == "fr"
    ));
  }
}
