use super::*;

const ALLOWED_TAGS: &[&str] =
  &["a", "b", "i", "em", "strong", "br", "ul", "ol", "li", "p", "span"];

const ANCHOR_ATTRIBUTES: &[&str] = &["href", "title", "target", "rel", "class"];

const CLASS_ONLY: &[&str] = &["class"];

const MAX_PASSES: usize = 8;

/// Allow-list sanitizer for text fragments coming out of the content JSON.
///
/// Elements outside the allow-list are unwrapped rather than dropped, so
/// their text survives. Attributes outside the per-tag allow-list are
/// stripped, and links are restricted to web, mail and phone schemes.
pub struct Sanitizer;

impl Sanitizer {
  fn allowed_attributes(tag: &str) -> &'static [&'static str] {
    match tag {
      "a" => ANCHOR_ATTRIBUTES,
      "p" | "span" => CLASS_ONLY,
      _ => &[],
    }
  }

  fn filter(nodes: Vec<Node>, out: &mut Vec<Node>) {
    for node in nodes {
      match node {
        Node::Text(text) => Self::push_text(out, text),
        Node::Element(mut element) => {
          let children = mem::take(&mut element.children);

          if !ALLOWED_TAGS.contains(&element.tag.as_str()) {
            trace!(tag = %element.tag, "unwrapping disallowed element");
            Self::filter(children, out);
            continue;
          }

          let allowed = Self::allowed_attributes(&element.tag);

          element.attrs.retain(|(name, _)| {
            allowed.contains(&name.to_ascii_lowercase().as_str())
          });

          if element.tag == "a" {
            Self::harden_link(&mut element);
          }

          element.attrs.sort_by(|(a, _), (b, _)| a.cmp(b));

          Self::filter(children, &mut element.children);

          out.push(Node::Element(element));
        }
      }
    }
  }

  /// Pre-pass over raw text: a block whose non-empty lines are all of the
  /// form `N. item` becomes an ordered list, anything else keeps its text
  /// and turns line breaks into `<br>`.
  #[must_use]
  pub fn format_text_with_lists(text: &str) -> String {
    let lines = LINE_BREAK
      .split(text)
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .collect::<Vec<_>>();

    if lines.is_empty() || !lines.iter().all(|line| NUMBERED_LINE.is_match(line))
    {
      return LINE_BREAK.replace_all(text, "<br>").into_owned();
    }

    let items = lines
      .iter()
      .map(|line| {
        format!("<li>{}</li>", escape_html(&NUMBERED_LINE.replace(line, "")))
      })
      .collect::<String>();

    format!("<ol>{items}</ol>")
  }

  fn harden_link(element: &mut Element) {
    let Some(href) = element.attr("href") else {
      return;
    };

    let href = Self::normalize_quotes(href.trim());

    if !SAFE_LINK_SCHEME.is_match(&href) {
      debug!(href = %href, "dropping unsafe link target");
      element.remove_attr("href");
      return;
    }

    element.set_attr("href", &href);

    if WEB_LINK_SCHEME.is_match(&href) {
      element.set_attr("target", "_blank");
      element.set_attr("rel", "noopener noreferrer");
    }
  }

  #[must_use]
  pub fn normalize_quotes(text: &str) -> String {
    text
      .chars()
      .map(|character| match character {
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2018}' | '\u{2019}' => '\'',
        other => other,
      })
      .collect()
  }

  fn push_text(out: &mut Vec<Node>, text: String) {
    if text.is_empty() {
      return;
    }

    if let Some(Node::Text(previous)) = out.last_mut() {
      previous.push_str(&text);
    } else {
      out.push(Node::Text(text));
    }
  }

  /// Full pipeline for one content text: quote normalization, the list
  /// pre-pass and sanitization.
  #[must_use]
  pub fn render_fragment(raw: &str) -> Fragment {
    Self::sanitize(&Self::format_text_with_lists(&Self::normalize_quotes(raw)))
  }

  #[must_use]
  pub fn render_text(raw: &str) -> String {
    Self::render_fragment(raw).serialize()
  }

  /// Parses, filters and re-parses until the tree settles. Unwrapping an
  /// element can leave nestings the parser never builds (`p` in `p`, `a` in
  /// `a`), which the next parse splits apart.
  #[must_use]
  pub fn sanitize(raw: &str) -> Fragment {
    let mut fragment = Self::sanitize_pass(raw);

    for _ in 1..MAX_PASSES {
      let next = Self::sanitize_pass(&fragment.serialize());

      if next == fragment {
        return fragment;
      }

      fragment = next;
    }

    warn!("sanitized markup did not settle");

    fragment
  }

  #[must_use]
  pub fn sanitize_html(raw: &str) -> String {
    Self::sanitize(raw).serialize()
  }

  fn sanitize_pass(raw: &str) -> Fragment {
    let mut nodes = Vec::new();

    Self::filter(Fragment::parse(raw).nodes, &mut nodes);

    Fragment { nodes }
  }
}
