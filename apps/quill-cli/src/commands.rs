//! Command line surface and dispatch.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use quill_core::domain::{AuthorChanges, PostChanges};

use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "quill", about = "Manage blog authors and posts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Author records.
    #[command(subcommand)]
    Author(AuthorCommand),
    /// Post records.
    #[command(subcommand)]
    Post(PostCommand),
}

#[derive(Subcommand, Debug)]
pub enum AuthorCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone_number: Option<String>,
    },
    Update(AuthorUpdateArgs),
    Show { id: i64 },
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct AuthorUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, conflicts_with = "clear_phone_number")]
    pub phone_number: Option<String>,
    /// Remove the stored phone number.
    #[arg(long)]
    pub clear_phone_number: bool,
}

impl AuthorUpdateArgs {
    fn changes(&self) -> AuthorChanges {
        AuthorChanges {
            name: self.name.clone(),
            phone_number: if self.clear_phone_number {
                Some(None)
            } else {
                self.phone_number.clone().map(Some)
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum PostCommand {
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// `Fiction` or `Non-Fiction`.
        #[arg(long)]
        category: String,
        #[arg(long)]
        summary: Option<String>,
    },
    Update(PostUpdateArgs),
    Show { id: i64 },
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct PostUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, conflicts_with = "clear_summary")]
    pub summary: Option<String>,
    /// Remove the stored summary.
    #[arg(long)]
    pub clear_summary: bool,
}

impl PostUpdateArgs {
    fn changes(&self) -> PostChanges {
        PostChanges {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            summary: if self.clear_summary {
                Some(None)
            } else {
                self.summary.clone().map(Some)
            },
        }
    }
}

/// Run `command` and print its result as JSON on stdout.
pub async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Author(cmd) => run_author(state, cmd).await,
        Command::Post(cmd) => run_post(state, cmd).await,
    }
}

async fn run_author(state: &AppState, command: AuthorCommand) -> anyhow::Result<()> {
    match command {
        AuthorCommand::Create { name, phone_number } => {
            print_json(&state.authors.create_author(name, phone_number).await?)
        }
        AuthorCommand::Update(args) => {
            print_json(&state.authors.update_author(args.id, args.changes()).await?)
        }
        AuthorCommand::Show { id } => print_json(&state.authors.get_author(id).await?),
        AuthorCommand::Delete { id } => {
            state.authors.delete_author(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

async fn run_post(state: &AppState, command: PostCommand) -> anyhow::Result<()> {
    match command {
        PostCommand::Create {
            title,
            content,
            category,
            summary,
        } => print_json(
            &state
                .posts
                .create_post(title, content, &category, summary)
                .await?,
        ),
        PostCommand::Update(args) => {
            print_json(&state.posts.update_post(args.id, args.changes()).await?)
        }
        PostCommand::Show { id } => print_json(&state.posts.get_post(id).await?),
        PostCommand::Delete { id } => {
            state.posts.delete_post(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quill").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_author_update_clear_phone() {
        let Command::Author(AuthorCommand::Update(args)) =
            parse(&["author", "update", "3", "--clear-phone-number"]).command
        else {
            panic!("expected author update");
        };
        assert_eq!(args.id, 3);
        assert_eq!(
            args.changes(),
            AuthorChanges {
                name: None,
                phone_number: Some(None),
            }
        );
    }

    #[test]
    fn test_phone_and_clear_conflict() {
        let result = Cli::try_parse_from([
            "quill",
            "author",
            "update",
            "3",
            "--phone-number",
            "5551234567",
            "--clear-phone-number",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_post_update_only_sets_given_fields() {
        let Command::Post(PostCommand::Update(args)) =
            parse(&["post", "update", "1", "--category", "Non-Fiction"]).command
        else {
            panic!("expected post update");
        };
        let changes = args.changes();
        assert_eq!(changes.category.as_deref(), Some("Non-Fiction"));
        assert!(changes.title.is_none());
        assert!(changes.summary.is_none());
    }

    #[tokio::test]
    async fn test_run_against_in_memory_state() {
        let state = AppState::new(None).await.unwrap();
        let cli = parse(&["author", "create", "--name", "Jane Doe"]);
        run(&state, cli.command).await.unwrap();
        assert_eq!(state.authors.get_author(1).await.unwrap().name(), "Jane Doe");

        let cli = parse(&["author", "create", "--name", "   "]);
        assert!(run(&state, cli.command).await.is_err());
    }
}
