use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use needledrop::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Last.fm API
    Auth(AuthOptions),

    /// Scrobble a release's tracklist, back-dated to end now
    Scrobble(ScrobbleOptions),

    /// Show a release's tracklist with parsed durations
    Info(InfoOptions),

    /// Show previously scrobbled sessions
    History(HistoryOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Use the password-based mobile session flow instead of the browser flow
    #[clap(long)]
    pub mobile: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ScrobbleOptions {
    /// Discogs release id, or a search query for the interactive picker
    pub release: String,

    /// Compute and display the schedule without submitting anything
    #[clap(long)]
    pub dry_run: bool,

    /// Delay between submissions in milliseconds
    #[clap(long, default_value_t = 1000)]
    pub delay: u64,

    /// Skip the confirmation prompt
    #[clap(long, short = 'y')]
    pub yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// Discogs release id, or a search query for the interactive picker
    pub release: String,
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Show at most this many sessions
    #[clap(long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.mobile).await,
        Command::Scrobble(opt) => cli::scrobble(opt.release, opt.dry_run, opt.delay, opt.yes).await,
        Command::Info(opt) => cli::info(opt.release).await,
        Command::History(opt) => cli::history(opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
