use super::*;

const BLOCK_ELEMENTS: &[&str] = &["li", "ol", "p", "ul"];

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
  "source", "track", "wbr",
];

/// A node of an owned HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
}

impl Node {
  fn write(&self, out: &mut String) {
    match self {
      Node::Text(text) => Self::write_escaped(out, text, false),
      Node::Element(element) => {
        out.push('<');
        out.push_str(&element.tag);

        for (name, value) in &element.attrs {
          out.push(' ');
          out.push_str(name);
          out.push_str("=\"");
          Self::write_escaped(out, value, true);
          out.push('"');
        }

        out.push('>');

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
          return;
        }

        for child in &element.children {
          child.write(out);
        }

        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
      }
    }
  }

  fn write_escaped(out: &mut String, text: &str, attribute: bool) {
    for character in text.chars() {
      match character {
        '&' => out.push_str("&amp;"),
        '"' if attribute => out.push_str("&quot;"),
        '<' if !attribute => out.push_str("&lt;"),
        '>' if !attribute => out.push_str("&gt;"),
        _ => out.push(character),
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  pub tag: String,
  pub attrs: Vec<(String, String)>,
  pub children: Vec<Node>,
}

impl Element {
  #[must_use]
  pub fn attr(&self, name: &str) -> Option<&str> {
    self
      .attrs
      .iter()
      .find(|(attr_name, _)| attr_name == name)
      .map(|(_, value)| value.as_str())
  }

  fn from_parsed(element: ElementRef<'_>) -> Self {
    let mut children = Vec::new();

    for child in element.children() {
      match child.value() {
        ParsedNode::Text(text) => children.push(Node::Text(text.to_string())),
        ParsedNode::Element(_) => {
          if let Some(child) = ElementRef::wrap(child) {
            children.push(Node::Element(Self::from_parsed(child)));
          }
        }
        _ => {}
      }
    }

    Self {
      tag: element.value().name().to_ascii_lowercase(),
      attrs: element
        .value()
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect(),
      children,
    }
  }

  #[must_use]
  pub fn new(tag: &str) -> Self {
    Self {
      tag: tag.to_string(),
      attrs: Vec::new(),
      children: Vec::new(),
    }
  }

  pub fn remove_attr(&mut self, name: &str) {
    self.attrs.retain(|(attr_name, _)| attr_name != name);
  }

  /// Replaces the value of an existing attribute in place, or appends it.
  pub fn set_attr(&mut self, name: &str, value: &str) {
    match self.attrs.iter_mut().find(|(attr_name, _)| attr_name == name) {
      Some((_, existing)) => *existing = value.to_string(),
      None => self.attrs.push((name.to_string(), value.to_string())),
    }
  }

  #[must_use]
  pub fn with_attr(mut self, name: &str, value: &str) -> Self {
    self.set_attr(name, value);
    self
  }

  #[must_use]
  pub fn with_child(mut self, child: Node) -> Self {
    self.children.push(child);
    self
  }
}

/// An ordered list of sibling nodes, as found inside a content paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
  pub nodes: Vec<Node>,
}

impl Fragment {
  /// Parses markup with the HTML5 error-tolerant parser. Comments,
  /// doctypes and processing instructions are discarded.
  #[must_use]
  pub fn parse(html: &str) -> Self {
    let document = Html::parse_fragment(html);

    Self {
      nodes: Element::from_parsed(document.root_element()).children,
    }
  }

  /// Whether any node, at any depth, would close an enclosing `<p>` when
  /// parsed.
  #[must_use]
  pub fn has_block_elements(&self) -> bool {
    fn any_block(nodes: &[Node]) -> bool {
      nodes.iter().any(|node| match node {
        Node::Element(element) => {
          BLOCK_ELEMENTS.contains(&element.tag.as_str())
            || any_block(&element.children)
        }
        Node::Text(_) => false,
      })
    }

    any_block(&self.nodes)
  }

  #[must_use]
  pub fn serialize(&self) -> String {
    let mut out = String::new();

    for node in &self.nodes {
      node.write(&mut out);
    }

    out
  }

  #[must_use]
  pub fn text(&self) -> String {
    fn collect(nodes: &[Node], out: &mut String) {
      for node in nodes {
        match node {
          Node::Text(text) => out.push_str(text),
          Node::Element(element) => collect(&element.children, out),
        }
      }
    }

    let mut out = String::new();
    collect(&self.nodes, &mut out);
    out
  }
}

impl Display for Fragment {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.serialize())
  }
}

/// Escapes plain text for use anywhere in markup, quotes included.
#[must_use]
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());

  for character in text.chars() {
    match character {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#039;"),
      _ => out.push(character),
    }
  }

  out
}
