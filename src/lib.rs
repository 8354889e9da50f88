//! Render localized blog posts into safe HTML and drive a media lightbox
//! over the rendered carousels.
//!
//! The crate never talks to a browser directly. Everything the lightbox
//! wants done to the page is emitted as a [`Command`] to a host supplied
//! [`Surface`].

use {
  re::{
    DIGITS, LINE_BREAK, NUMBERED_LINE, PAGE_EXTENSION, SAFE_LINK_SCHEME,
    VIDEO_EXTENSION, WEB_LINK_SCHEME,
  },
  regex::Regex,
  scraper::{ElementRef, Html, Node as ParsedNode, Selector},
  serde::{Deserialize, Serialize},
  serde_json::Value,
  std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
    fs, io, iter, mem,
    path::{Path, PathBuf},
    str::FromStr,
    sync::LazyLock,
    time::Duration,
  },
  tracing::{debug, trace, warn},
  url::Url,
};

pub use crate::{
  content::{Blog, BlogPost, ContentBlock, Footer, Permalink, SiteContent},
  error::Error,
  gesture::{PointerEvent, Swipe, SwipeState, SwipeTracker},
  lightbox::{Control, Key, LightboxController},
  loader::{Completion, ContentLoader, Ticket},
  locale::{Language, UiText},
  markup::{Element, Fragment, Node, escape_html},
  media::{MediaElement, MediaGroup, MediaItem, MediaKind, SourceTag},
  options::{FolioOptions, FolioOptionsBuilder},
  page::{BlogPage, ContentView},
  render::{Link, Post, PostView},
  route::PageLocation,
  sanitizer::Sanitizer,
  surface::{Command, Recorder, Surface},
};

mod content;
mod error;
mod gesture;
mod lightbox;
mod loader;
mod locale;
mod markup;
mod media;
mod options;
mod page;
mod re;
mod render;
mod route;
mod sanitizer;
mod surface;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
