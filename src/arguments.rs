use super::*;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render blog posts and drive the media lightbox", long_about = None)]
pub(crate) struct Arguments {
  #[command(subcommand)]
  command: Command,
  #[arg(short, long, global = true, help = "Log debug output to stderr")]
  verbose: bool,
}

#[derive(clap::Subcommand)]
enum Command {
  #[command(about = "Run a lightbox session over a post's carousels")]
  Lightbox {
    #[arg(value_name = "CONTENT_DIR", help = "Directory of content files")]
    content: PathBuf,
    #[arg(value_name = "URL", help = "Page address of the post")]
    url: String,
    #[arg(
      value_name = "EVENT",
      help = "click=<selector>, key=<name>, swipe=<dx>,<dy>, control=<name> \
              or transition-end"
    )]
    events: Vec<Event>,
  },
  #[command(about = "Render the post a page address points at")]
  Render {
    #[arg(value_name = "CONTENT_DIR", help = "Directory of content files")]
    content: PathBuf,
    #[arg(value_name = "URL", help = "Page address of the post")]
    url: String,
    #[arg(long, help = "Print the view as JSON instead of HTML")]
    json: bool,
    #[arg(
      long = "nav",
      value_name = "HREF=TEXT",
      value_parser = parse_nav_link,
      help = "Top navigation link, may be repeated"
    )]
    nav: Vec<Link>,
  },
  #[command(about = "Sanitize a file of post text and print the HTML")]
  Sanitize {
    #[arg(value_name = "FILE", help = "Path to the text to sanitize")]
    input: PathBuf,
  },
}

impl Arguments {
  fn lightbox(content: PathBuf, url: &str, events: Vec<Event>) -> Result {
    let location = PageLocation::parse(url)
      .with_context(|| format!("failed to parse page url `{url}`"))?;

    let options = FolioOptions::builder()
      .base_url(location.url().clone())
      .build();

    let mut loader = ContentLoader::new(content);
    let mut page = BlogPage::<Recorder>::new(options);

    page.load(&mut loader, &location);

    if !page.view().is_some_and(PostView::is_found) {
      bail!("no post found at `{url}`");
    }

    for event in events {
      println!("{event}");

      event.apply(&mut page)?;

      if let Some(lightbox) = page.lightbox_mut() {
        for command in lightbox.surface_mut().take() {
          println!("  {command}");
        }
      }
    }

    Ok(())
  }

  fn render(
    content: PathBuf,
    url: &str,
    json: bool,
    nav: &[Link],
  ) -> Result {
    let location = PageLocation::parse(url)
      .with_context(|| format!("failed to parse page url `{url}`"))?;

    let language = location.language(FolioOptions::default().default_language);

    let content = match ContentLoader::new(content).load(language) {
      Completion::Loaded(content) => content,
      Completion::Failed(error) => {
        return Err(error).context("failed to load content");
      }
      Completion::Stale => bail!("content load was superseded"),
    };

    let view =
      PostView::render(&content, language, location.post_id(), nav);

    if json {
      println!(
        "{}",
        serde_json::to_string_pretty(&view)
          .context("failed to serialize view")?
      );
    } else {
      println!("{}", view.to_html());
    }

    Ok(())
  }

  pub(crate) fn run(self) -> Result {
    match self.command {
      Command::Lightbox {
        content,
        url,
        events,
      } => Self::lightbox(content, &url, events),
      Command::Render {
        content,
        url,
        json,
        nav,
      } => Self::render(content, &url, json, &nav),
      Command::Sanitize { input } => {
        let text = fs::read_to_string(&input).with_context(|| {
          format!("failed to read file from `{}`", input.display())
        })?;

        println!("{}", Sanitizer::render_text(&text));

        Ok(())
      }
    }
  }

  /// `--verbose` wins over `RUST_LOG`. An unparseable `RUST_LOG` falls back
  /// to warnings only.
  pub(crate) fn log_filter(&self, env: Option<&str>) -> EnvFilter {
    if self.verbose {
      return EnvFilter::new("debug");
    }

    env
      .filter(|directives| !directives.trim().is_empty())
      .and_then(|directives| EnvFilter::try_new(directives).ok())
      .unwrap_or_else(|| EnvFilter::new("warn"))
  }
}

fn parse_nav_link(value: &str) -> Result<Link, String> {
  match value.split_once('=') {
    Some((href, text)) if !href.is_empty() => Ok(Link {
      href: href.to_string(),
      text: text.to_string(),
    }),
    _ => Err(format!("expected `<href>=<text>`, got `{value}`")),
  }
}
