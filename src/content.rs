use super::*;

/// One localized content document, `content-{lang}.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
  pub blog: Blog,
  pub footer: Footer,
  pub header_button_text: Option<String>,
}

impl SiteContent {
  pub fn from_path(path: &Path) -> Result<Self> {
    let json = fs::read_to_string(path).map_err(|source| Error::ReadContent {
      path: path.to_path_buf(),
      source,
    })?;

    serde_json::from_str(&json).map_err(|source| Error::DecodeContent {
      path: path.to_path_buf(),
      source,
    })
  }

  #[must_use]
  pub fn post(&self, id: u64) -> Option<&BlogPost> {
    self.blog.blog_posts.iter().find(|post| post.id() == Some(id))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Blog {
  pub blog_posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
  pub category: Option<String>,
  pub content_blocks: Vec<ContentBlock>,
  pub date: Option<String>,
  pub id: Value,
  pub title: Option<String>,
}

impl BlogPost {
  /// The numeric post id. Authors write ids both as numbers and as
  /// numeric strings.
  #[must_use]
  pub fn id(&self) -> Option<u64> {
    match &self.id {
      Value::Number(number) => number.as_u64().or_else(|| {
        number
          .as_f64()
          .filter(|value| value.fract() == 0.0 && *value >= 0.0)
          .map(|value| value as u64)
      }),
      Value::String(text) => text.trim().parse().ok(),
      _ => None,
    }
  }
}

/// A titled section of a post: narrative text plus a media carousel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBlock {
  pub images: Vec<String>,
  pub texts: Vec<String>,
  pub title_block: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Footer {
  pub permalinks: Vec<Permalink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Permalink {
  pub link: String,
  pub title: String,
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn decodes_camel_case_document() {
    let content: SiteContent = serde_json::from_str(
      r##"{
        "headerButtonText": "NL",
        "blog": {
          "blogPosts": [
            {
              "id": 1,
              "title": "Trip",
              "category": "Travel",
              "date": "2024-05-01",
              "contentBlocks": [
                { "titleBlock": "Day one", "texts": ["a"], "images": ["x.jpg"] }
              ]
            }
          ]
        },
        "footer": { "permalinks": [{ "title": "Home", "link": "#home" }] }
      }"##,
    )
    .unwrap();

    assert_eq!(content.header_button_text.as_deref(), Some("NL"));
    assert_eq!(content.footer.permalinks[0].link, "#home");

    let post = content.post(1).unwrap();

    assert_eq!(post.title.as_deref(), Some("Trip"));
    assert_eq!(
      post.content_blocks,
      vec![ContentBlock {
        images: vec!["x.jpg".into()],
        texts: vec!["a".into()],
        title_block: Some("Day one".into()),
      }]
    );
  }

  #[test]
  fn missing_sections_default_to_empty() {
    let content: SiteContent = serde_json::from_str("{}").unwrap();

    assert!(content.blog.blog_posts.is_empty());
    assert!(content.footer.permalinks.is_empty());
    assert_eq!(content.post(1), None);
  }

  #[test]
  fn ids_accept_numbers_and_numeric_strings() {
    let content: SiteContent = serde_json::from_str(
      r#"{ "blog": { "blogPosts": [
        { "id": "2", "title": "string id" },
        { "id": 3.0, "title": "float id" },
        { "id": "abc", "title": "bad id" },
        { "title": "no id" }
      ] } }"#,
    )
    .unwrap();

    assert_eq!(
      content.post(2).and_then(|post| post.title.as_deref()),
      Some("string id")
    );
    assert_eq!(
      content.post(3).and_then(|post| post.title.as_deref()),
      Some("float id")
    );
    assert_eq!(content.blog.blog_posts[2].id(), None);
    assert_eq!(content.blog.blog_posts[3].id(), None);
  }

  #[test]
  fn reports_unreadable_and_malformed_files() {
    let directory = tempfile::tempdir().unwrap();

    let missing = directory.path().join("content-nl.json");

    assert!(matches!(
      SiteContent::from_path(&missing),
      Err(Error::ReadContent { .. })
    ));

    fs::write(&missing, "{ not json").unwrap();

    assert!(matches!(
      SiteContent::from_path(&missing),
      Err(Error::DecodeContent { .. })
    ));
  }
}
