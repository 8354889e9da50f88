use {
  crate::{arguments::Arguments, event::Event},
  anyhow::{Context, bail},
  clap::Parser,
  folio::{
    BlogPage, Completion, ContentLoader, Control, FolioOptions, Key, Link,
    PageLocation, PointerEvent, PostView, Recorder, Sanitizer,
  },
  std::{
    env,
    fmt::{self, Display, Formatter},
    fs,
    path::PathBuf,
    process,
    str::FromStr,
  },
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod arguments;
mod event;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  let arguments = Arguments::parse();

  FmtSubscriber::builder()
    .with_env_filter(
      arguments.log_filter(env::var("RUST_LOG").ok().as_deref()),
    )
    .with_target(false)
    .with_writer(std::io::stderr)
    .compact()
    .init();

  if let Err(error) = arguments.run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
