use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use todo_core::storage::FileStorage;
use todo_core::{Category, TaskId, TaskStore};

#[derive(Parser, Debug)]
#[command(name = "todo", about = "Two-category to-do list with local persistence")]
struct Cli {
    /// Directory holding the persisted state
    #[arg(long, global = true, default_value = ".todo")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a task under the current category
    Add {
        text: String,
        /// Put the task in this category instead of the current one
        #[arg(long)]
        category: Option<Category>,
    },
    /// List tasks in the current category
    List {
        /// Show both categories
        #[arg(long)]
        all: bool,
    },
    /// Toggle a task's completion checkbox
    Toggle { id: TaskId },
    /// Delete a task after confirmation
    Delete {
        id: TaskId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show the current category, or switch to another one
    Mode { category: Option<Category> },
    /// Show completion progress for the current category
    Progress,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let mut store = TaskStore::load(FileStorage::new(&cli.data_dir));

    match cli.command {
        Commands::Add { text, category } => {
            let category = category.unwrap_or_else(|| store.category());
            let id = store.add(&text, category)?;
            println!("Added task {id}");
        }
        Commands::List { all } => {
            let tasks = if all {
                store.all_tasks()
            } else {
                store.visible_tasks()
            };
            if tasks.is_empty() {
                println!("No tasks.");
            }
            for task in tasks {
                let checkbox = if task.completed { "x" } else { " " };
                if all {
                    println!("[{checkbox}] {} ({}) {}", task.id, task.category, task.text);
                } else {
                    println!("[{checkbox}] {} {}", task.id, task.text);
                }
            }
        }
        Commands::Toggle { id } => {
            let completed = store.toggle_completed(id)?;
            let state = if completed { "completed" } else { "not completed" };
            println!("Task {id} marked {state}");
        }
        Commands::Delete { id, yes } => {
            let text = store
                .get(id)
                .ok_or(todo_core::Error::TaskNotFound(id))?
                .text
                .clone();
            if yes || confirm(&format!("Delete '{text}'. Are you sure?"))? {
                store.remove(id)?;
                println!("Deleted '{text}'");
            } else {
                println!("Cancelled.");
            }
        }
        Commands::Mode { category } => match category {
            Some(category) => {
                store.set_category(category);
                println!("Now showing {category} tasks");
            }
            None => println!("{}", store.category()),
        },
        Commands::Progress => {
            let progress = store.progress();
            println!(
                "{}/{} completed ({}%)",
                progress.completed, progress.total, progress.percentage
            );
        }
    }

    Ok(())
}

/// One-line yes/no gate on stdin. Anything but an explicit yes cancels.
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

fn init_logging() -> anyhow::Result<()> {
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .logger(Logger::builder().build("todo_core", LevelFilter::Warn))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
