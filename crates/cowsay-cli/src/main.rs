use anyhow::{Context, Result};
use clap::Parser;
use cowsay::{BubbleKind, CowLibrary, Cowsay, Mood, DEFAULT_COW, DEFAULT_WRAP};
use std::{env, ffi::OsString, path::Path};

use crate::input::gather_message;
mod input;

#[derive(Parser)]
#[command(
    name = "cowsay",
    version,
    disable_version_flag = true,
    about = "Configurable speaking/thinking cow"
)]
struct Cli {
    /// Message to say; read from stdin when omitted
    message: Vec<String>,
    /// Borg mode
    #[arg(short = 'b')]
    borg: bool,
    /// Dead
    #[arg(short = 'd')]
    dead: bool,
    /// Greedy
    #[arg(short = 'g')]
    greedy: bool,
    /// Paranoid
    #[arg(short = 'p')]
    paranoid: bool,
    /// Stoned
    #[arg(short = 's')]
    stoned: bool,
    /// Tired
    #[arg(short = 't')]
    tired: bool,
    /// Wired
    #[arg(short = 'w')]
    wired: bool,
    /// Youthful
    #[arg(short = 'y')]
    young: bool,
    /// Cow to use: a name from the cowpath or a path to a .cow file
    #[arg(short = 'f', value_name = "COWFILE", default_value = DEFAULT_COW)]
    cowfile: String,
    /// Eyes (first two characters are used)
    #[arg(short = 'e')]
    eyes: Option<String>,
    /// Tongue (first two characters are used)
    #[arg(short = 'T')]
    tongue: Option<String>,
    /// Wrap column
    #[arg(short = 'W', default_value_t = DEFAULT_WRAP)]
    wrap: usize,
    /// Disable word wrap
    #[arg(short = 'n')]
    nowrap: bool,
    /// List available cows
    #[arg(short = 'l')]
    list: bool,
    /// Think instead of speak
    #[arg(long)]
    think: bool,
    /// Extra directories or .zip cow packs to search, path-list separated
    #[arg(long, env = "COWPATH")]
    cowpath: Option<OsString>,
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    fn mood(&self) -> Option<char> {
        let flags = [
            (self.borg, Mood::Borg),
            (self.dead, Mood::Dead),
            (self.greedy, Mood::Greedy),
            (self.paranoid, Mood::Paranoid),
            (self.stoned, Mood::Stoned),
            (self.tired, Mood::Tired),
            (self.wired, Mood::Wired),
            (self.young, Mood::Young),
        ];
        let requested: Vec<Mood> = flags
            .into_iter()
            .filter_map(|(set, mood)| set.then_some(mood))
            .collect();
        Mood::first_requested(&requested).map(Mood::letter)
    }

    fn kind(&self) -> BubbleKind {
        if self.think || invoked_as_cowthink() {
            BubbleKind::Thought
        } else {
            BubbleKind::Speech
        }
    }
}

fn invoked_as_cowthink() -> bool {
    let arg0 = env::args_os().next();
    arg0.as_deref()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .is_some_and(|stem| stem.to_string_lossy().contains("think"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let cowpath: Vec<_> = cli
        .cowpath
        .as_deref()
        .map(|paths| env::split_paths(paths).collect())
        .unwrap_or_default();
    let library = CowLibrary::new().with_cowpath(cowpath);

    if cli.list {
        for name in library.list() {
            println!("{name}");
        }
        return Ok(());
    }

    let message = gather_message(&cli.message).context("reading message from stdin")?;
    if message.is_empty() {
        log::debug!("no message, nothing to say");
        return Ok(());
    }

    let resource = library.load(&cli.cowfile)?;
    let mut cowsay = Cowsay::new()
        .with_kind(cli.kind())
        .with_mood(cli.mood())
        .with_wrap(if cli.nowrap { 0 } else { cli.wrap });
    if let Some(eyes) = &cli.eyes {
        cowsay = cowsay.with_eyes(eyes.as_str());
    }
    if let Some(tongue) = &cli.tongue {
        cowsay = cowsay.with_tongue(tongue.as_str());
    }

    let out = cowsay.render(&resource, &message)?;
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}
