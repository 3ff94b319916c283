mod config;
mod content;
mod error;
mod models;
mod tracker;
mod tui;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use models::{Content, Difficulty, JsonOutput, Week};
use tracker::{CompletionTracker, Progress};

#[derive(Parser)]
#[command(name = "journey")]
#[command(about = "Start your coding journey: learning paths, a weekly plan, resources and tips")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Content file to use instead of the built-in plan
    #[arg(long, global = true, value_name = "PATH")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List learning paths
    Paths {
        /// Only show paths of this difficulty
        #[arg(long, short)]
        difficulty: Option<String>,
    },

    /// Show the weekly lesson plan
    Plan {
        /// Only show this week
        #[arg(long, short)]
        week: Option<i64>,
    },

    /// List learning resources by category
    Resources,

    /// Show getting-started tips and success strategies
    Tips,

    /// Compute progress after toggling the given lessons in order
    Progress {
        /// Lesson ID to toggle (repeat or comma-separate)
        #[arg(long, short, value_delimiter = ',', allow_negative_numbers = true)]
        toggle: Vec<i64>,

        /// List every lesson with its completion marker
        #[arg(long, short)]
        verbose: bool,
    },

    /// Launch interactive terminal dashboard
    Tui,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = config::content_source(cli.content);
    let content = Content::load(&source)?;

    match cli.command {
        Commands::Paths { difficulty } => {
            let filter = match difficulty {
                Some(d) => Some(Difficulty::from_str(&d).ok_or_else(|| {
                    format!(
                        "Invalid difficulty '{}'. Use: beginner, intermediate, or advanced",
                        d
                    )
                })?),
                None => None,
            };
            let paths: Vec<_> = content
                .paths
                .iter()
                .filter(|p| filter.map_or(true, |d| p.difficulty == d))
                .collect();

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&paths))?);
            } else if paths.is_empty() {
                println!("No learning paths found.");
            } else {
                println!("{:<5} {:<24} {:<12} {:<14} DESCRIPTION", "ID", "PATH", "DURATION", "DIFFICULTY");
                println!("{}", "-".repeat(90));
                for path in paths {
                    println!(
                        "{:<5} {:<24} {:<12} {:<14} {}",
                        path.id,
                        truncate(&path.title, 22),
                        path.duration,
                        path.difficulty.label(),
                        path.description
                    );
                }
            }
        }

        Commands::Plan { week } => {
            let output = plan_output(&content, week);

            if cli.json {
                println!("{}", serde_json::to_string(&output)?);
            } else if let Some(err) = &output.error {
                println!("{}.", err);
            } else {
                let weeks = output.data.unwrap_or_default();
                if weeks.is_empty() {
                    println!("No weeks in the plan.");
                }
                for (i, week) in weeks.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("=== {} ===", week.heading());
                    for lesson in &week.lessons {
                        println!(
                            "  {:<5} {:<36} {}",
                            lesson.id,
                            truncate(&lesson.title, 34),
                            lesson.duration
                        );
                    }
                }
            }
        }

        Commands::Resources => {
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&content.resources))?);
            } else if content.resources.is_empty() {
                println!("No resources found.");
            } else {
                for category in &content.resources {
                    println!("=== {} ===", category.category);
                    for item in &category.items {
                        println!("  {:<20} {}", truncate(&item.name, 18), item.description);
                    }
                    println!();
                }
            }
        }

        Commands::Tips => {
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&content.tips))?);
            } else {
                println!("=== Getting Started Tips ===");
                for (i, tip) in content.tips.getting_started.iter().enumerate() {
                    println!("{}. {}", i + 1, tip.title);
                    println!("   {}", tip.body);
                }
                println!();
                println!("=== Success Strategies ===");
                for tip in &content.tips.strategies {
                    println!("* {}", tip.title);
                    println!("  {}", tip.body);
                }
            }
        }

        Commands::Progress { toggle, verbose } => {
            let mut tracker = CompletionTracker::new();
            for id in &toggle {
                tracker.toggle(*id);
            }
            if content.curriculum.is_empty() {
                log::warn!("the plan has no lessons; progress is reported as 0%");
            }
            let report = progress_report(&content, &tracker);
            for id in &report.orphans {
                log::warn!("lesson {} is not part of the plan", id);
            }

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&report))?);
            } else {
                let progress = report.progress;
                println!("=== Your Progress ===");
                println!(
                    "Lessons Completed: {} / {}",
                    progress.completed_count, progress.total_count
                );
                println!(
                    "{} {}% Complete",
                    progress_bar(progress.ratio(), 30),
                    progress.rounded_percentage()
                );
                println!("{}", progress.encouragement());

                if verbose {
                    for week in &content.curriculum.weeks {
                        println!();
                        println!(
                            "{} ({}/{})",
                            week.heading(),
                            tracker.week_completed(week),
                            week.lessons.len()
                        );
                        for lesson in &week.lessons {
                            let marker = if tracker.is_completed(lesson.id) {
                                "[x]"
                            } else {
                                "[ ]"
                            };
                            println!("  {} {:<5} {}", marker, lesson.id, lesson.title);
                        }
                    }
                }

                if !report.orphans.is_empty() {
                    println!();
                    let ids: Vec<String> = report.orphans.iter().map(|id| id.to_string()).collect();
                    println!("Not in plan: {}", ids.join(", "));
                }
            }
        }

        Commands::Tui => {
            tui::run(content)?;
        }
    }

    Ok(())
}

// Payload for `progress --json`
#[derive(Debug, Serialize)]
struct ProgressReport {
    #[serde(flatten)]
    progress: Progress,
    completed: Vec<i64>,
    /// Completed ids that no lesson in the plan carries.
    orphans: Vec<i64>,
}

fn progress_report(content: &Content, tracker: &CompletionTracker) -> ProgressReport {
    let completed = tracker.completed_ids();
    let orphans = completed
        .iter()
        .copied()
        .filter(|id| content.curriculum.lesson(*id).is_none())
        .collect();

    ProgressReport {
        progress: tracker.progress(&content.curriculum),
        completed,
        orphans,
    }
}

fn plan_output(content: &Content, week: Option<i64>) -> JsonOutput<Vec<&Week>> {
    match week {
        Some(id) => match content.curriculum.week(id) {
            Some(w) => JsonOutput::ok(vec![w]),
            None => JsonOutput::err("Week not found"),
        },
        None => JsonOutput::ok(content.curriculum.weeks.iter().collect()),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    mod truncate_tests {
        use super::*;

        #[test]
        fn truncate_short_string() {
            assert_eq!(truncate("hello", 10), "hello");
        }

        #[test]
        fn truncate_long_string() {
            assert_eq!(truncate("hello world", 8), "hello...");
        }

        #[test]
        fn truncate_empty_string() {
            assert_eq!(truncate("", 10), "");
        }
    }

    mod progress_bar_tests {
        use super::*;

        #[test]
        fn empty_bar() {
            assert_eq!(progress_bar(0.0, 4), "[░░░░]");
        }

        #[test]
        fn half_bar() {
            assert_eq!(progress_bar(0.5, 4), "[██░░]");
        }

        #[test]
        fn overflow_is_clamped() {
            assert_eq!(progress_bar(1.7, 4), "[████]");
        }
    }

    mod cli_parsing_tests {
        use super::*;

        #[test]
        fn parse_paths_command() {
            let cli = Cli::try_parse_from(["journey", "paths"]).unwrap();
            assert!(!cli.json);
            assert!(cli.content.is_none());
            match cli.command {
                Commands::Paths { difficulty } => assert!(difficulty.is_none()),
                _ => panic!("Expected Paths command"),
            }
        }

        #[test]
        fn parse_paths_with_difficulty() {
            let cli = Cli::try_parse_from(["journey", "paths", "-d", "beginner"]).unwrap();
            match cli.command {
                Commands::Paths { difficulty } => {
                    assert_eq!(difficulty, Some("beginner".to_string()))
                }
                _ => panic!("Expected Paths command"),
            }
        }

        #[test]
        fn parse_plan_with_week() {
            let cli = Cli::try_parse_from(["journey", "plan", "--week", "2"]).unwrap();
            match cli.command {
                Commands::Plan { week } => assert_eq!(week, Some(2)),
                _ => panic!("Expected Plan command"),
            }
        }

        #[test]
        fn parse_resources_and_tips() {
            let cli = Cli::try_parse_from(["journey", "resources"]).unwrap();
            assert!(matches!(cli.command, Commands::Resources));
            let cli = Cli::try_parse_from(["journey", "tips"]).unwrap();
            assert!(matches!(cli.command, Commands::Tips));
        }

        #[test]
        fn parse_progress_repeated_toggles() {
            let cli = Cli::try_parse_from([
                "journey", "progress", "--toggle", "1", "--toggle", "5",
            ])
            .unwrap();
            match cli.command {
                Commands::Progress { toggle, verbose } => {
                    assert_eq!(toggle, vec![1, 5]);
                    assert!(!verbose);
                }
                _ => panic!("Expected Progress command"),
            }
        }

        #[test]
        fn parse_progress_comma_separated() {
            let cli = Cli::try_parse_from(["journey", "progress", "-t", "1,5,1", "-v"]).unwrap();
            match cli.command {
                Commands::Progress { toggle, verbose } => {
                    assert_eq!(toggle, vec![1, 5, 1]);
                    assert!(verbose);
                }
                _ => panic!("Expected Progress command"),
            }
        }

        #[test]
        fn parse_progress_negative_id() {
            let cli = Cli::try_parse_from(["journey", "progress", "--toggle", "-3"]).unwrap();
            match cli.command {
                Commands::Progress { toggle, .. } => assert_eq!(toggle, vec![-3]),
                _ => panic!("Expected Progress command"),
            }
        }

        #[test]
        fn parse_progress_without_toggles() {
            let cli = Cli::try_parse_from(["journey", "progress"]).unwrap();
            match cli.command {
                Commands::Progress { toggle, .. } => assert!(toggle.is_empty()),
                _ => panic!("Expected Progress command"),
            }
        }

        #[test]
        fn parse_global_flags() {
            let cli = Cli::try_parse_from([
                "journey",
                "tui",
                "--json",
                "--content",
                "/tmp/plan.json",
            ])
            .unwrap();
            assert!(cli.json);
            assert_eq!(cli.content, Some(PathBuf::from("/tmp/plan.json")));
            assert!(matches!(cli.command, Commands::Tui));
        }

        #[test]
        fn parse_invalid_command_fails() {
            assert!(Cli::try_parse_from(["journey", "invalid"]).is_err());
        }

        #[test]
        fn parse_non_numeric_toggle_fails() {
            assert!(Cli::try_parse_from(["journey", "progress", "--toggle", "one"]).is_err());
        }
    }

    mod output_tests {
        use super::*;

        fn tracker_with(ids: &[i64]) -> CompletionTracker {
            let mut tracker = CompletionTracker::new();
            for id in ids {
                tracker.toggle(*id);
            }
            tracker
        }

        #[test]
        fn progress_json_keeps_unrounded_percentage() {
            let content = Content::embedded().unwrap();
            let report = progress_report(&content, &tracker_with(&[1, 5]));
            let json = serde_json::to_value(JsonOutput::ok(&report)).unwrap();

            assert_eq!(json["success"], true);
            assert_eq!(json["data"]["completed_count"], 2);
            assert_eq!(json["data"]["total_count"], 12);
            let pct = json["data"]["percentage"].as_f64().unwrap();
            assert!((pct - 200.0 / 12.0).abs() < 1e-9);
            assert_eq!(json["data"]["completed"], serde_json::json!([1, 5]));
        }

        #[test]
        fn progress_report_sorts_completed_and_lists_orphans() {
            let content = Content::embedded().unwrap();
            let report = progress_report(&content, &tracker_with(&[999, 1]));

            assert_eq!(report.completed, vec![1, 999]);
            assert_eq!(report.orphans, vec![999]);
            assert_eq!(report.progress.completed_count, 2);
        }

        #[test]
        fn progress_report_on_empty_plan() {
            let report = progress_report(&Content::default(), &tracker_with(&[3]));
            assert_eq!(report.progress.percentage, 0.0);
            assert_eq!(report.orphans, vec![3]);
        }

        #[test]
        fn plan_unknown_week_is_error_envelope() {
            let content = Content::embedded().unwrap();
            let json = serde_json::to_value(plan_output(&content, Some(9))).unwrap();

            assert_eq!(json["success"], false);
            assert_eq!(json["error"], "Week not found");
            assert!(json["data"].is_null());
        }

        #[test]
        fn plan_single_week() {
            let content = Content::embedded().unwrap();
            let output = plan_output(&content, Some(2));
            let weeks = output.data.unwrap();
            assert_eq!(weeks.len(), 1);
            assert_eq!(weeks[0].title, "Control Structures");
        }

        #[test]
        fn plan_all_weeks() {
            let content = Content::embedded().unwrap();
            let output = plan_output(&content, None);
            assert!(output.success);
            assert_eq!(output.data.map(|w| w.len()), Some(3));
        }
    }

    mod run_tests {
        use super::*;
        use std::io::Write;

        fn content_file(json: &str) -> tempfile::NamedTempFile {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(json.as_bytes()).unwrap();
            file
        }

        #[test]
        fn run_progress_with_empty_curriculum() {
            let file = content_file("{}");
            let cli = Cli::try_parse_from([
                "journey",
                "--content",
                file.path().to_str().unwrap(),
                "progress",
                "--toggle",
                "999",
            ])
            .unwrap();
            assert!(run(cli).is_ok());
        }

        #[test]
        fn run_fails_on_duplicate_lessons() {
            let file = content_file(
                r#"{"curriculum":[{"id":1,"label":"Week 1","title":"A","lessons":[
                    {"id":3,"title":"x","duration":"1 min"},
                    {"id":3,"title":"y","duration":"1 min"}]}]}"#,
            );
            let cli = Cli::try_parse_from([
                "journey",
                "--content",
                file.path().to_str().unwrap(),
                "plan",
            ])
            .unwrap();
            assert!(run(cli).is_err());
        }

        #[test]
        fn run_rejects_unknown_difficulty() {
            let file = content_file("{}");
            let cli = Cli::try_parse_from([
                "journey",
                "--content",
                file.path().to_str().unwrap(),
                "paths",
                "--difficulty",
                "wizard",
            ])
            .unwrap();
            assert!(run(cli).is_err());
        }
    }
}
