use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use vstudio::control::{Dispatch, Focus, handle_key};
use vstudio::{FileStorage, OverlayPlan, StudioPatch, StudioStore, codec};

#[derive(Parser, Debug)]
#[command(name = "vstudio", version)]
struct Cli {
    /// Directory holding the persisted state (defaults to the user config dir).
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Page URL whose fragment carries a share token.
    #[arg(long, global = true, conflicts_with = "fragment")]
    url: Option<String>,

    /// Share token to initialize from (the part after `#`).
    #[arg(long, global = true)]
    fragment: Option<String>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current state as JSON.
    Show,
    /// Apply a partial JSON object, e.g. '{"scene":3,"intensity":80}'.
    Patch { json: String },
    /// Press a shortcut key (h, f, g, l, t, [, ], 1-4).
    Key {
        key: String,
        /// What has focus in the host when the key is pressed.
        #[arg(long, value_enum, default_value_t = FocusArg::None)]
        focus: FocusArg,
    },
    /// Print a share token, or a share URL when `--base` is given.
    Share {
        #[arg(long)]
        base: Option<String>,
    },
    /// Decode a share token and print the snapshot it carries.
    Decode { token: String },
    /// Restore the default state.
    Reset,
    /// Print the resolved scene, palette and visible layers.
    Plan,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FocusArg {
    None,
    TextInput,
    TextArea,
}

impl From<FocusArg> for Focus {
    fn from(f: FocusArg) -> Self {
        match f {
            FocusArg::None => Focus::None,
            FocusArg::TextInput => Focus::TextInput,
            FocusArg::TextArea => Focus::TextArea,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    if let Command::Decode { token } = &cli.cmd {
        return cmd_decode(token);
    }

    let storage = match &cli.store_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::open_default(),
    };
    let fragment = match (&cli.url, &cli.fragment) {
        (Some(url), _) => codec::fragment_of(url),
        (None, Some(frag)) => Some(frag.as_str()),
        (None, None) => None,
    };
    let mut store = StudioStore::open(storage, fragment);
    tracing::debug!(origin = ?store.origin(), dir = %store.storage().dir().display(), "store opened");

    match cli.cmd {
        Command::Show => print_json(store.current()),
        Command::Patch { json } => {
            let patch = StudioPatch::from_json(&json).context("parse patch JSON")?;
            store.patch(&patch);
            print_json(store.current())
        }
        Command::Key { key, focus } => {
            let outcome = match handle_key(&mut store, &key, focus.into()) {
                None => "ignored",
                Some(Dispatch::Patched) => "patched",
                Some(Dispatch::Fullscreen) => "fullscreen",
            };
            println!("{outcome}");
            Ok(())
        }
        Command::Share { base } => {
            let out = match base {
                Some(base) => store.share_url(&base),
                None => Some(store.share_token()).filter(|t| !t.is_empty()),
            };
            let out = out.context("could not encode share token")?;
            println!("{out}");
            Ok(())
        }
        Command::Reset => {
            store.reset();
            print_json(store.current())
        }
        Command::Plan => print_json(&OverlayPlan::from_config(store.current())),
        Command::Decode { token } => cmd_decode(&token),
    }
}

fn cmd_decode(token: &str) -> anyhow::Result<()> {
    let snapshot = codec::try_decode(token).context("decode share token")?;
    print_json(&snapshot)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}
