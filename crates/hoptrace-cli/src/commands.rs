use super::args::hints::cmd;
use super::args::{
    Cli, Commands, ConfigCommand, HistoryCommand, PathsCommand, PathsHistoryCommand,
};
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::Result;
use hoptrace_runtime::{BatchOptions, CONFIG_FILE, HopTrace};
use std::path::Path;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = hoptrace_runtime::data_dir(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");
    let ctx = HandlerContext::new(cli.format);

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Parse { file, explain } => handlers::parse::handle(file.as_deref(), explain, &ctx),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&data_dir, &ctx),
            ConfigCommand::Init { force } => handlers::config::handle_init(&data_dir, force, &ctx),
        },

        Commands::Run { command } => {
            let workspace = HopTrace::open(data_dir)?;
            handlers::run::handle(&workspace, joined(&command).as_deref(), &ctx)
        }

        Commands::Batch {
            numeric,
            max_hops,
            wait_ms,
            targets,
        } => {
            let workspace = HopTrace::open(data_dir)?;
            let options = BatchOptions {
                numeric,
                max_hops,
                wait_ms,
            };
            handlers::batch::handle(&workspace, &targets, options, &ctx)
        }

        Commands::History { command } => {
            let workspace = HopTrace::open(data_dir)?;
            match command {
                HistoryCommand::List { limit } => {
                    handlers::history::handle_list(&workspace, limit, &ctx)
                }
                HistoryCommand::Show { id } => handlers::history::handle_show(&workspace, id, &ctx),
                HistoryCommand::Delete { id } => {
                    handlers::history::handle_delete(&workspace, id, &ctx)
                }
                HistoryCommand::Clear => handlers::history::handle_clear(&workspace, &ctx),
            }
        }

        Commands::Paths { command } => {
            let workspace = HopTrace::open(data_dir)?;
            match command {
                PathsCommand::Run { command } => {
                    handlers::paths::handle_run(&workspace, joined(&command).as_deref(), &ctx)
                }
                PathsCommand::Tree { summary } => {
                    handlers::paths::handle_tree(&workspace, summary, &ctx)
                }
                PathsCommand::Reset => handlers::paths::handle_reset(&workspace, &ctx),
                PathsCommand::History { command } => match command {
                    PathsHistoryCommand::List { limit } => {
                        handlers::paths::handle_history_list(&workspace, limit, &ctx)
                    }
                    PathsHistoryCommand::Show { id } => {
                        handlers::paths::handle_history_show(&workspace, id, &ctx)
                    }
                    PathsHistoryCommand::Delete { id } => {
                        handlers::paths::handle_history_delete(&workspace, id, &ctx)
                    }
                    PathsHistoryCommand::Clear => {
                        handlers::paths::handle_history_clear(&workspace, &ctx)
                    }
                },
            }
        }

        Commands::Netinfo => {
            let workspace = HopTrace::open(data_dir)?;
            handlers::netinfo::handle(&workspace, &ctx)
        }
    }
}

/// Words given after `run` as one command line; no words means no command.
fn joined(words: &[String]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}

fn show_guidance(data_dir: &Path) {
    println!("hoptrace - route tracing and name lookups with history\n");

    if !data_dir.join(CONFIG_FILE).exists() {
        println!("Get started:");
        println!("  {}\n", cmd::CONFIG_INIT);
    }

    println!("Quick commands:");
    println!("  {:<45} # Trace a route", cmd::RUN_EXAMPLE);
    println!("  {:<45} # Trace several targets", cmd::BATCH_EXAMPLE);
    println!("  {:<45} # Saved runs", cmd::HISTORY_LIST);
    println!("  {:<45} # Merged routes per target", cmd::PATHS_TREE);
    println!("  {:<45} # Runs recorded for the tree\n", cmd::PATHS_HISTORY_LIST);

    println!("For more commands:");
    println!("  hoptrace --help");
}
