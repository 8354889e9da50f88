use super::*;

/// Identifies one load attempt. Only the most recent ticket may update
/// the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
  generation: u64,
  language: Language,
}

impl Ticket {
  #[must_use]
  pub fn language(&self) -> Language {
    self.language
  }
}

#[derive(Debug)]
pub enum Completion {
  Failed(Error),
  Loaded(SiteContent),
  Stale,
}

/// Reads `content-{lang}.json` documents from a directory.
#[derive(Debug)]
pub struct ContentLoader {
  directory: PathBuf,
  generation: u64,
}

impl ContentLoader {
  /// Starts a load attempt, superseding every earlier ticket.
  pub fn begin(&mut self, language: Language) -> Ticket {
    self.generation += 1;

    Ticket {
      generation: self.generation,
      language,
    }
  }

  pub fn fetch(&self, ticket: &Ticket) -> Result<SiteContent> {
    SiteContent::from_path(&self.path(ticket.language))
  }

  /// Settles a load attempt. Results of superseded tickets are dropped so
  /// a slow response never overwrites a newer one.
  pub fn finish(
    &self,
    ticket: Ticket,
    result: Result<SiteContent>,
  ) -> Completion {
    if ticket.generation != self.generation {
      debug!(
        generation = ticket.generation,
        latest = self.generation,
        "discarding stale content response"
      );
      return Completion::Stale;
    }

    match result {
      Ok(content) => Completion::Loaded(content),
      Err(error) => {
        warn!(%error, language = %ticket.language, "failed to load content");
        Completion::Failed(error)
      }
    }
  }

  /// Begins, fetches and settles in one go.
  pub fn load(&mut self, language: Language) -> Completion {
    let ticket = self.begin(language);
    let result = self.fetch(&ticket);
    self.finish(ticket, result)
  }

  #[must_use]
  pub fn new(directory: impl Into<PathBuf>) -> Self {
    Self {
      directory: directory.into(),
      generation: 0,
    }
  }

  #[must_use]
  pub fn path(&self, language: Language) -> PathBuf {
    self.directory.join(language.content_file())
  }
}
