use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
  pub href: String,
  pub text: String,
}

/// A post ready to be injected into the blog page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
  pub back_link: Link,
  pub blocks_html: String,
  pub category_line: String,
  pub footer_links: Vec<Link>,
  pub header_button_text: Option<String>,
  pub language: Language,
  pub nav_links: Vec<Link>,
  pub title: String,
}

impl Post {
  fn render_block(out: &mut String, index: usize, block: &ContentBlock) {
    out.push_str(if index % 2 == 1 {
      "<div class=\"contentBlock rightText\">"
    } else {
      "<div class=\"contentBlock\">"
    });

    out.push_str("<div class=\"text\"><h3>");
    out.push_str(&escape_html(
      block.title_block.as_deref().unwrap_or_default(),
    ));
    out.push_str("</h3>");

    for text in &block.texts {
      let fragment = Sanitizer::render_fragment(text);

      if fragment.has_block_elements() {
        out.push_str(&fragment.serialize());
      } else {
        out.push_str(&format!("<p>{fragment}</p>"));
      }
    }

    out.push_str("</div><div class=\"image carousel\">");

    for src in &block.images {
      Self::render_thumbnail(out, src);
    }

    out.push_str("</div></div>");
  }

  /// Markup for the content blocks container.
  #[must_use]
  pub fn render_blocks(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();

    for (index, block) in blocks.iter().enumerate() {
      Self::render_block(&mut out, index, block);
    }

    out
  }

  fn render_thumbnail(out: &mut String, src: &str) {
    let item = MediaItem::from_source(src);

    let src = escape_html(&item.source_url);

    match item.kind {
      MediaKind::Video => {
        let mime = escape_html(item.mime_or_default());

        out.push_str("<div class=\"ab-thumb ab-thumb-video\">");
        out.push_str(
          "<video class=\"blogVideo\" playsinline preload=\"metadata\" muted>",
        );
        out.push_str(&format!("<source src=\"{src}\" type=\"{mime}\">"));
        out.push_str("</video>");
        out.push_str(
          "<span class=\"ab-play-overlay\" aria-hidden=\"true\">&#9654;</span>",
        );
      }
      MediaKind::Image => {
        out.push_str("<div class=\"ab-thumb\">");
        out.push_str(&format!("<img src=\"{src}\" alt=\"blog photo\">"));
      }
    }

    out.push_str("</div>");
  }

  /// A standalone page body, used by the command line renderer.
  #[must_use]
  pub fn to_html(&self) -> String {
    let mut out = String::new();

    out.push_str("<header>");

    if !self.nav_links.is_empty() {
      out.push_str("<nav>");

      for link in &self.nav_links {
        out.push_str(&format!(
          "<a href=\"{}\">{}</a>",
          escape_html(&link.href),
          escape_html(&link.text)
        ));
      }

      out.push_str("</nav>");
    }

    out.push_str(&format!(
      "<a class=\"backToHome\" href=\"{}\">{}</a></header>",
      escape_html(&self.back_link.href),
      escape_html(&self.back_link.text)
    ));

    out.push_str(&format!(
      "<main class=\"blogContent\"><h1>{}</h1>",
      escape_html(&self.title)
    ));

    out.push_str(&format!(
      "<div class=\"blogCategory\"><h2>{}</h2></div>",
      self.category_line
    ));

    out.push_str(&format!(
      "<div class=\"contentBlocks\">{}</div></main>",
      self.blocks_html
    ));

    out.push_str("<footer><div class=\"permalinks\">");

    for link in &self.footer_links {
      out.push_str(&format!(
        "<a href=\"{}\">{}</a>",
        escape_html(&link.href),
        escape_html(&link.text)
      ));
    }

    out.push_str("</div></footer>");

    out
  }
}

/// What the blog page shows after a load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum PostView {
  Found(Post),
  NotFound { message: String },
}

impl PostView {
  #[must_use]
  pub fn back_link(language: Language) -> Link {
    Link {
      href: format!("../index.html?lang={language}#blog"),
      text: format!(" {}", language.ui_text().back_home),
    }
  }

  /// `category — date`, with the separator only when both are present.
  #[must_use]
  pub fn category_line(category: Option<&str>, date: Option<&str>) -> String {
    let category = escape_html(category.unwrap_or_default());
    let date = escape_html(date.unwrap_or_default());

    let separator = if !category.is_empty() && !date.is_empty() {
      " \u{2014} "
    } else {
      ""
    };

    format!("{category}{separator}{date}")
  }

  #[must_use]
  pub fn footer_links(content: &SiteContent, language: Language) -> Vec<Link> {
    content
      .footer
      .permalinks
      .iter()
      .map(|permalink| Link {
        href: format!("../index.html?lang={language}{}", permalink.link),
        text: permalink.title.clone(),
      })
      .collect()
  }

  #[must_use]
  pub fn is_found(&self) -> bool {
    matches!(self, Self::Found(_))
  }

  /// Rewrites a top navigation link of the form `../#section` so it keeps
  /// the current language. Other links are left alone.
  #[must_use]
  pub fn nav_href(href: &str, language: Language) -> Option<String> {
    let section = href.strip_prefix("../#")?;

    Some(format!("../index.html?lang={language}#{section}"))
  }

  #[must_use]
  pub fn nav_links(links: &[Link], language: Language) -> Vec<Link> {
    links
      .iter()
      .map(|link| Link {
        href: Self::nav_href(&link.href, language)
          .unwrap_or_else(|| link.href.clone()),
        text: link.text.clone(),
      })
      .collect()
  }

  #[must_use]
  pub fn not_found(language: Language) -> Self {
    Self::NotFound {
      message: language.ui_text().not_found.to_string(),
    }
  }

  /// Looks up `post_id` in `content` and renders it with the page's top
  /// navigation links.
  #[must_use]
  pub fn render(
    content: &SiteContent,
    language: Language,
    post_id: Option<u64>,
    nav: &[Link],
  ) -> Self {
    let Some(post) = post_id.and_then(|id| content.post(id)) else {
      debug!(?post_id, %language, "post not found");
      return Self::not_found(language);
    };

    Self::Found(Post {
      back_link: Self::back_link(language),
      blocks_html: Post::render_blocks(&post.content_blocks),
      category_line: Self::category_line(
        post.category.as_deref(),
        post.date.as_deref(),
      ),
      footer_links: Self::footer_links(content, language),
      header_button_text: content.header_button_text.clone(),
      language,
      nav_links: Self::nav_links(nav, language),
      title: post.title.clone().unwrap_or_default(),
    })
  }

  #[must_use]
  pub fn to_html(&self) -> String {
    match self {
      Self::Found(post) => post.to_html(),
      Self::NotFound { message } => format!(
        "<h1 style=\"text-align:center;margin:3rem 0;\">{}</h1>",
        escape_html(message)
      ),
    }
  }
}
