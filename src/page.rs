use super::*;

static IMAGE: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("img").unwrap());

static VIDEO: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("video").unwrap());

/// The rendered content blocks of one post.
#[derive(Debug, Clone)]
pub struct ContentView {
  bound: bool,
  html: Html,
}

impl ContentView {
  /// Marks the container as having its click handler bound. Returns
  /// `false` when it already was.
  pub fn bind(&mut self) -> bool {
    !mem::replace(&mut self.bound, true)
  }

  fn closest<'a>(
    element: ElementRef<'a>,
    predicate: impl Fn(ElementRef<'a>) -> bool,
  ) -> Option<ElementRef<'a>> {
    iter::once(element)
      .chain(element.ancestors().filter_map(ElementRef::wrap))
      .find(|candidate| predicate(*candidate))
  }

  fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|name| name == class)
  }

  #[must_use]
  pub fn html(&self) -> &Html {
    &self.html
  }

  #[must_use]
  pub fn is_bound(&self) -> bool {
    self.bound
  }

  #[must_use]
  pub fn new(blocks_html: &str) -> Self {
    Self {
      bound: false,
      html: Html::parse_fragment(blocks_html),
    }
  }

  /// Works out what a click on the first element matching `selector` would
  /// open: the media of the enclosing carousel and the source of the
  /// clicked image or video. A click on a thumbnail overlay counts as a
  /// click on the thumbnail's media.
  pub fn resolve_click(
    &self,
    selector: &str,
  ) -> Result<Option<(MediaGroup, String)>> {
    let selector = Selector::parse(selector)
      .map_err(|error| Error::InvalidSelector(error.to_string()))?;

    let Some(target) = self.html.select(&selector).next() else {
      return Ok(None);
    };

    let Some(carousel) =
      Self::closest(target, |element| Self::has_class(element, "carousel"))
    else {
      return Ok(None);
    };

    let media = Self::closest(target, |element| element.value().name() == "img")
      .or_else(|| {
        Self::closest(target, |element| element.value().name() == "video")
      })
      .or_else(|| {
        let thumb =
          Self::closest(target, |element| Self::has_class(element, "ab-thumb"))?;

        thumb
          .select(&IMAGE)
          .next()
          .or_else(|| thumb.select(&VIDEO).next())
      });

    let Some(element) = media.and_then(MediaElement::from_element) else {
      return Ok(None);
    };

    let clicked = element.resolved_src();

    if clicked.is_empty() {
      return Ok(None);
    }

    Ok(Some((MediaGroup::scan(carousel), clicked.to_string())))
  }
}

/// The blog post page: the current view, its content container, and the
/// lightbox opened from it.
#[derive(Debug)]
pub struct BlogPage<S: Surface> {
  content: Option<ContentView>,
  language: Language,
  lightbox: Option<LightboxController<S>>,
  options: FolioOptions,
  view: Option<PostView>,
}

impl<S: Surface + Default> BlogPage<S> {
  /// Creates the lightbox if needed and binds the content container's
  /// click handler. Safe to call any number of times.
  pub fn attach_lightbox_handlers(&mut self) {
    let options = &self.options;

    self
      .lightbox
      .get_or_insert_with(|| LightboxController::new(S::default(), options));

    if let Some(content) = self.content.as_mut()
      && content.bind()
    {
      debug!("bound lightbox click handler");
    }
  }

  /// Delegated click on the first element matching `selector`. Returns
  /// whether the lightbox ended up open.
  pub fn click(&mut self, selector: &str) -> Result<bool> {
    let Some(content) = self.content.as_ref().filter(|view| view.is_bound())
    else {
      return Ok(false);
    };

    let Some(lightbox) = self.lightbox.as_mut() else {
      return Ok(false);
    };

    let Some((group, clicked)) = content.resolve_click(selector)? else {
      trace!(selector, "click did not hit carousel media");
      return Ok(false);
    };

    lightbox.open_group(&group, &clicked);

    Ok(lightbox.is_open())
  }

  #[must_use]
  pub fn content(&self) -> Option<&ContentView> {
    self.content.as_ref()
  }

  #[must_use]
  pub fn language(&self) -> Language {
    self.language
  }

  #[must_use]
  pub fn lightbox(&self) -> Option<&LightboxController<S>> {
    self.lightbox.as_ref()
  }

  pub fn lightbox_mut(&mut self) -> Option<&mut LightboxController<S>> {
    self.lightbox.as_mut()
  }

  /// Loads the content document for `location` and shows the post it
  /// names. A response superseded by a newer load leaves the page as is.
  pub fn load(&mut self, loader: &mut ContentLoader, location: &PageLocation) {
    let language = location.language(self.options.default_language);

    let ticket = loader.begin(language);
    let result = loader.fetch(&ticket);

    match loader.finish(ticket, result) {
      Completion::Loaded(content) => {
        self.language = language;
        let view = PostView::render(
          &content,
          language,
          location.post_id(),
          &self.options.nav_links,
        );

        self.show(view);
      }
      Completion::Failed(_) => {
        self.language = language;
        self.show(PostView::not_found(language));
      }
      Completion::Stale => {}
    }
  }

  #[must_use]
  pub fn new(options: FolioOptions) -> Self {
    Self {
      content: None,
      language: options.default_language,
      lightbox: None,
      options,
      view: None,
    }
  }

  /// Replaces the page with `view`. An open lightbox is closed first and
  /// the new content container gets its own handler.
  pub fn show(&mut self, view: PostView) {
    if let Some(lightbox) = self.lightbox.as_mut() {
      lightbox.close();
    }

    self.content = match &view {
      PostView::Found(post) => Some(ContentView::new(&post.blocks_html)),
      PostView::NotFound { .. } => None,
    };

    let found = view.is_found();

    self.view = Some(view);

    if found {
      self.attach_lightbox_handlers();
    }
  }

  /// Switches to the other language and reloads. Returns the new page
  /// location.
  pub fn toggle_language(
    &mut self,
    loader: &mut ContentLoader,
    location: &PageLocation,
  ) -> PageLocation {
    let location = location.with_language(self.language.toggle());
    self.load(loader, &location);
    location
  }

  #[must_use]
  pub fn view(&self) -> Option<&PostView> {
    self.view.as_ref()
  }
}
