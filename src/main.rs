//! Reiatsu - Entry Point
//!
//! Command-line front end: loads the profile from the configured JSON file,
//! runs one action against it, saves, and prints the outcome.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use reiatsu::analytics::Dashboard;
use reiatsu::core::config::TrackerConfig;
use reiatsu::core::error::{Result, TrackerError};
use reiatsu::ledger::{dedup_tags, filter_indexed, LedgerItem, Misstep, Quest, StatDeltas};
use reiatsu::progression::{format_xp, title_by_level};
use reiatsu::store::JsonFileStore;
use reiatsu::{QuestCategory, SaveStatus, StatName, Tracker};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Gamified life tracker: stats, quests, errors and titles
#[derive(Parser, Debug)]
#[command(name = "reiatsu")]
#[command(about = "Track personal stats through quests and errors")]
struct Cli {
    /// Config file (TOML); defaults apply when it does not exist
    #[arg(long, default_value = "reiatsu.toml")]
    config: PathBuf,

    /// Profile JSON file, overriding the config's data_file
    #[arg(long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// General level, per-stat levels, strengths and weaknesses
    Status,
    /// Totals, tag usage and recent history
    Dashboard,
    /// Manage pending quests
    #[command(subcommand)]
    Quest(QuestCommand),
    /// Manage pending errors
    #[command(subcommand)]
    Error(ErrorCommand),
    /// List validated quests and errors
    History {
        /// Only the last N entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Write the profile to a JSON file
    Export { path: PathBuf },
    /// Replace the profile with a JSON file
    Import { path: PathBuf },
}

#[derive(Args, Debug)]
struct Filter {
    /// Case-insensitive text to find in title or description
    #[arg(long, default_value = "")]
    search: String,

    /// Required tag (repeatable; all must match)
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[derive(Args, Debug)]
struct ItemFields {
    #[arg(long)]
    title: String,

    #[arg(long)]
    description: Option<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum QuestCommand {
    List {
        /// quotidienne|secondaire|principale (or daily|secondary|main)
        #[arg(long, default_value = "quotidienne")]
        category: String,
        #[command(flatten)]
        filter: Filter,
    },
    Add {
        #[arg(long, default_value = "quotidienne")]
        category: String,
        #[command(flatten)]
        fields: ItemFields,
        /// Reward as Stat=amount (repeatable)
        #[arg(long = "reward")]
        rewards: Vec<String>,
        #[arg(long)]
        duration: Option<String>,
    },
    Edit {
        #[arg(long, default_value = "quotidienne")]
        category: String,
        index: usize,
        #[command(flatten)]
        fields: ItemFields,
        #[arg(long = "reward")]
        rewards: Vec<String>,
        #[arg(long)]
        duration: Option<String>,
    },
    Delete {
        #[arg(long, default_value = "quotidienne")]
        category: String,
        index: usize,
    },
    Validate {
        #[arg(long, default_value = "quotidienne")]
        category: String,
        index: usize,
        /// Stamp the history entry with this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Move a quest to another category
    Move {
        #[arg(long)]
        from: String,
        index: usize,
        #[arg(long)]
        to: String,
    },
}

#[derive(Subcommand, Debug)]
enum ErrorCommand {
    List {
        #[command(flatten)]
        filter: Filter,
    },
    Add {
        #[command(flatten)]
        fields: ItemFields,
        /// Penalty as Stat=amount (repeatable)
        #[arg(long = "penalty")]
        penalties: Vec<String>,
    },
    Edit {
        index: usize,
        #[command(flatten)]
        fields: ItemFields,
        #[arg(long = "penalty")]
        penalties: Vec<String>,
    },
    Delete {
        index: usize,
    },
    Validate {
        index: usize,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reiatsu=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = TrackerConfig::load(&cli.config)?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }

    let store = JsonFileStore::new(config.data_file.clone());
    let (mut tracker, warnings) = Tracker::open(store, config)?;
    for warning in &warnings {
        println!("warning: stored profile: {}", warning);
    }

    match cli.command {
        Command::Status => print_status(&tracker),
        Command::Dashboard => print_dashboard(&tracker),
        Command::Quest(cmd) => run_quest(&mut tracker, cmd)?,
        Command::Error(cmd) => run_error(&mut tracker, cmd)?,
        Command::History { limit } => print_history(&tracker, limit),
        Command::Export { path } => {
            std::fs::write(&path, tracker.export()?)?;
            println!("Exported profile to {}", path.display());
        }
        Command::Import { path } => {
            let text = std::fs::read_to_string(&path)?;
            let applied = tracker.import(&text)?;
            for warning in &applied.value {
                println!("warning: {}", warning);
            }
            println!("Imported profile from {}", path.display());
            report_save(&applied.save);
        }
    }
    Ok(())
}

type FileTracker = Tracker<JsonFileStore>;

fn run_quest(tracker: &mut FileTracker, cmd: QuestCommand) -> Result<()> {
    match cmd {
        QuestCommand::List { category, filter } => {
            let category: QuestCategory = category.parse()?;
            let tags = parse_tags(&filter.tags)?;
            let quests = tracker.profile().quests.list(category);
            for (i, quest) in filter_indexed(quests, &filter.search, &tags) {
                println!("[{}] {}{}", i, quest.title, describe_deltas(&quest.rewards, false));
                print_item_details(quest);
                if let Some(duration) = &quest.duration_text {
                    println!("      duration: {}", duration);
                }
            }
        }
        QuestCommand::Add {
            category,
            fields,
            rewards,
            duration,
        } => {
            let quest = build_quest(fields, &rewards, duration)?;
            let save = tracker.upsert_quest(category.parse()?, None, quest)?;
            println!("Quest added.");
            report_save(&save);
        }
        QuestCommand::Edit {
            category,
            index,
            fields,
            rewards,
            duration,
        } => {
            let quest = build_quest(fields, &rewards, duration)?;
            let save = tracker.upsert_quest(category.parse()?, Some(index), quest)?;
            println!("Change saved.");
            report_save(&save);
        }
        QuestCommand::Delete { category, index } => {
            let save = tracker.delete_quest(category.parse()?, index)?;
            println!("Quest deleted.");
            report_save(&save);
        }
        QuestCommand::Validate {
            category,
            index,
            date,
        } => {
            if let Some(date) = date {
                tracker.pin_date(date);
            }
            let applied = tracker.validate_quest(category.parse()?, index)?;
            println!("Quest validated! +{} XP", applied.value);
            println!("General level: {}", tracker.progress().general_level);
            report_save(&applied.save);
        }
        QuestCommand::Move { from, index, to } => {
            let save = tracker.reassign_quest(from.parse()?, index, to.parse()?)?;
            println!("Quest moved.");
            report_save(&save);
        }
    }
    Ok(())
}

fn run_error(tracker: &mut FileTracker, cmd: ErrorCommand) -> Result<()> {
    match cmd {
        ErrorCommand::List { filter } => {
            let tags = parse_tags(&filter.tags)?;
            for (i, misstep) in filter_indexed(&tracker.profile().errors, &filter.search, &tags) {
                println!("[{}] {}{}", i, misstep.title, describe_deltas(&misstep.penalty, true));
                print_item_details(misstep);
            }
        }
        ErrorCommand::Add { fields, penalties } => {
            let misstep = build_misstep(fields, &penalties)?;
            let save = tracker.upsert_misstep(None, misstep)?;
            println!("Error added.");
            report_save(&save);
        }
        ErrorCommand::Edit {
            index,
            fields,
            penalties,
        } => {
            let misstep = build_misstep(fields, &penalties)?;
            let save = tracker.upsert_misstep(Some(index), misstep)?;
            println!("Change saved.");
            report_save(&save);
        }
        ErrorCommand::Delete { index } => {
            let save = tracker.delete_misstep(index)?;
            println!("Error deleted.");
            report_save(&save);
        }
        ErrorCommand::Validate { index, date } => {
            if let Some(date) = date {
                tracker.pin_date(date);
            }
            let applied = tracker.validate_misstep(index)?;
            println!("Error committed. Penalties applied.");
            println!("General level: {}", tracker.progress().general_level);
            report_save(&applied.save);
        }
    }
    Ok(())
}

fn report_save(save: &SaveStatus) {
    if let SaveStatus::Failed(reason) = save {
        println!("warning: not saved ({}); changes are kept for this run only", reason);
    }
}

/// Parse tag names; repeats collapse to one
fn parse_tags(raw: &[String]) -> Result<Vec<StatName>> {
    let tags = raw.iter().map(|t| t.parse()).collect::<Result<Vec<StatName>>>()?;
    Ok(dedup_tags(tags))
}

/// Parse "Stat=amount" pairs
fn parse_deltas(raw: &[String]) -> Result<StatDeltas> {
    raw.iter()
        .map(|pair| {
            let (stat, amount) = pair.split_once('=').ok_or_else(|| {
                TrackerError::InvalidArgument(format!("expected Stat=amount, got '{}'", pair))
            })?;
            let amount: i64 = amount.trim().parse().map_err(|_| {
                TrackerError::InvalidArgument(format!("'{}' is not a whole number", amount.trim()))
            })?;
            Ok((stat.parse::<StatName>()?, amount))
        })
        .collect()
}

fn build_quest(fields: ItemFields, rewards: &[String], duration: Option<String>) -> Result<Quest> {
    let mut quest = Quest::new(fields.title);
    quest.description = fields.description;
    quest.rewards = parse_deltas(rewards)?;
    quest.types = parse_tags(&fields.tags)?;
    quest.duration_text = duration;
    Ok(quest)
}

fn build_misstep(fields: ItemFields, penalties: &[String]) -> Result<Misstep> {
    let mut misstep = Misstep::new(fields.title);
    misstep.description = fields.description;
    misstep.penalty = parse_deltas(penalties)?;
    misstep.types = parse_tags(&fields.tags)?;
    Ok(misstep)
}

/// Penalties always read as losses, whatever sign they were stored with
fn describe_deltas(deltas: &StatDeltas, penalty: bool) -> String {
    let parts: Vec<String> = deltas
        .effective()
        .map(|(stat, amount)| {
            if penalty {
                format!("{} -{}", stat, amount.unsigned_abs())
            } else {
                format!("{} {:+}", stat, amount)
            }
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("  ({})", parts.join(", "))
    }
}

fn print_item_details(item: &dyn LedgerItem) {
    if let Some(description) = item.description().filter(|d| !d.is_empty()) {
        println!("      {}", description);
    }
    if !item.tags().is_empty() {
        let tags: Vec<&str> = item.tags().iter().map(|t| t.label()).collect();
        println!("      tags: {}", tags.join(", "));
    }
}

fn print_status(tracker: &FileTracker) {
    let progress = tracker.progress();
    let compact_from = tracker.config().compact_xp_from;

    println!("\n=== REIATSU ===");
    println!("Level {} • {}", progress.general_level, progress.title());
    println!("Progress: {}%", progress.percent());
    println!();

    for row in tracker.stat_rows() {
        println!(
            "  {:<18} {:>16}   LV {}",
            row.stat.label(),
            row.xp_label(compact_from),
            row.level
        );
    }

    let ranking = tracker.ranking();
    let names = |stats: &[StatName]| stats.iter().map(|s| s.label()).collect::<Vec<_>>().join(", ");
    println!();
    println!("Strengths:  {}", names(&ranking.strongest));
    println!("Weaknesses: {}", names(&ranking.weakest));
}

fn print_dashboard(tracker: &FileTracker) {
    let dashboard = Dashboard::build(tracker.profile(), tracker.config());
    let compact_from = tracker.config().compact_xp_from;

    println!("\n=== DASHBOARD ===");
    println!("Total XP:          {}", format_xp(dashboard.total_xp, compact_from));
    println!(
        "General level:     {} ({})",
        dashboard.general_level,
        title_by_level(dashboard.general_level)
    );
    println!("Remaining quests:  {}", dashboard.remaining_quests);
    println!("Next title:        {}", dashboard.next_title.unwrap_or("none"));

    println!("\nQuest tags:");
    for (stat, share) in dashboard.tag_shares() {
        println!("  {:<18} {:>3}%", stat.label(), share);
    }

    let weakest: Vec<&str> = dashboard.weakest.iter().map(|s| s.label()).collect();
    println!("\nStats to work on: {}", weakest.join(", "));

    println!("\nRecent quests:");
    if dashboard.recent_quests.is_empty() {
        println!("  none validated yet");
    }
    for entry in &dashboard.recent_quests {
        println!("  {} ({})", entry.title(), entry.date);
    }

    println!("\nRecent errors:");
    if dashboard.recent_errors.is_empty() {
        println!("  none committed yet");
    }
    for entry in &dashboard.recent_errors {
        println!("  {} ({})", entry.title(), entry.date);
    }
}

fn print_history(tracker: &FileTracker, limit: Option<usize>) {
    let history = &tracker.profile().validated_history;
    let skip = limit.map(|n| history.len().saturating_sub(n)).unwrap_or(0);
    for entry in history.iter().skip(skip) {
        let kind = if entry.is_quest() { "quest" } else { "error" };
        println!(
            "{}  {:<5}  LV {:<3} {}",
            entry.date,
            kind,
            entry.general_level,
            entry.title()
        );
    }
}
