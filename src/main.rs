use std::fs;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use dependabot_auto_merger::analyzer::MergeAnalyzer;
use dependabot_auto_merger::config;
use dependabot_auto_merger::event::PullRequestEvent;
use dependabot_auto_merger::github::MockPullRequestApi;
use dependabot_auto_merger::handler;
use dependabot_auto_merger::outcome::SkipReason;
use dependabot_auto_merger::ui;

#[derive(clap::Parser)]
#[command(
    name = "dependabot-auto-merger",
    version,
    about = "Decide whether dependabot pull requests should be auto-merged"
)]
#[command(group(ArgGroup::new("input").required(true).args(["title", "event"])))]
struct Args {
    #[arg(short, long, help = "Pull request title to classify")]
    title: Option<String>,

    #[arg(
        short,
        long,
        help = "Replay a pull_request webhook payload (JSON file) as a dry run"
    )]
    event: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Override merge_level when classifying a title (patch, minor, major)")]
    merge_level: Option<String>,

    #[arg(
        long,
        default_value = "dependabot-auto-merger",
        help = "App slug the dry run treats as the merging bot"
    )]
    bot_slug: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(title) = args.title.as_deref() {
        return classify_title(title, &args);
    }
    if let Some(path) = args.event.as_deref() {
        return replay_event(path, &args);
    }
    Ok(())
}

fn classify_title(title: &str, args: &Args) -> Result<()> {
    let resolved = config::load_config(args.config.as_deref())?;
    if let Some(problem) = &resolved.problem {
        ui::display_error(&format!("{}; using default settings", problem));
    }

    let mut settings = resolved.settings;
    if let Some(level) = &args.merge_level {
        settings.merge_level = level.clone();
    }

    let analysis =
        MergeAnalyzer::from_settings(&settings).and_then(|analyzer| analyzer.analyze_title(title));

    match analysis {
        Ok(decision) => {
            ui::display_decision(&decision);
            Ok(())
        }
        Err(e) => match SkipReason::from_error(&e) {
            Some(reason) => {
                ui::display_skip(&reason);
                std::process::exit(1);
            }
            None => Err(e.into()),
        },
    }
}

fn replay_event(path: &str, args: &Args) -> Result<()> {
    let payload =
        fs::read_to_string(path).with_context(|| format!("Failed to read event payload {}", path))?;
    let event = PullRequestEvent::from_json(&payload)?;

    let mut api = MockPullRequestApi::new(args.bot_slug.clone());
    if let Some(content) = config::read_config(args.config.as_deref())? {
        api = api.with_config(content);
    }

    ui::display_status(&format!(
        "Replaying pull request #{} of {}",
        event.number(),
        event.repo()
    ));
    let outcome = handler::handle_event(&api, &event)?;
    ui::display_event_outcome(&outcome, &api.calls());

    Ok(())
}
