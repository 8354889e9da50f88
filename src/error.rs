use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to decode content from `{}`: {source}", path.display())]
  DecodeContent {
    path: PathBuf,
    source: serde_json::Error,
  },
  #[error("invalid page url: {source}")]
  InvalidUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("failed to read content from `{}`: {source}", path.display())]
  ReadContent { path: PathBuf, source: io::Error },
  #[error("unknown language `{0}` (expected `nl` or `en`)")]
  UnknownLanguage(String),
}
