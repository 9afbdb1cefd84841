//! Command-line surface definition.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::api::SearchScope;

/// A command-line client for the Redmine REST API.
#[derive(Debug, Parser)]
#[command(
    name = "rd",
    version,
    about = "A command-line client for Redmine",
    long_about = "rd manages Redmine issues from your terminal: list, inspect, \
                  create and update issues, and search across resources."
)]
pub struct Cli {
    /// Redmine URL (overrides REDMINE_URL).
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Redmine API key (overrides REDMINE_API_KEY).
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging to stderr.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List issues with optional filters.
    List(ListArgs),
    /// Show detailed information about one issue.
    Get(GetArgs),
    /// Create a new issue.
    Create(CreateArgs),
    /// Update an existing issue.
    Update(UpdateArgs),
    /// Add a comment to an issue.
    Comment(CommentArgs),
    /// Search issues and other resources.
    Search(SearchArgs),
    /// List projects, or show one project in detail.
    Projects(ProjectsArgs),
}

/// Arguments for `rd list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by project id or identifier.
    #[arg(long)]
    pub project: Option<String>,

    /// Filter by status id.
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by assignee user id, or 'me'.
    #[arg(long)]
    pub assignee: Option<String>,

    /// Page size (default 25).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Offset of the first issue.
    #[arg(long)]
    pub offset: Option<u32>,

    /// Display one issue per line.
    #[arg(long, conflicts_with = "csv")]
    pub oneline: bool,

    /// Output in CSV format.
    #[arg(long)]
    pub csv: bool,
}

/// Arguments for `rd get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// The issue id.
    pub id: u32,

    /// Include the comment history.
    #[arg(long)]
    pub comments: bool,
}

/// Arguments for `rd create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Issue title.
    #[arg(long)]
    pub title: String,

    /// Project id or identifier.
    #[arg(long)]
    pub project: String,

    /// Issue description.
    #[arg(long)]
    pub description: Option<String>,

    /// Assignee user id.
    #[arg(long)]
    pub assignee: Option<u32>,

    /// Tracker id.
    #[arg(long)]
    pub tracker: Option<u32>,

    /// Priority id.
    #[arg(long)]
    pub priority: Option<u32>,

    /// Initial status id.
    #[arg(long)]
    pub status: Option<u32>,

    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// Due date (YYYY-MM-DD).
    #[arg(long)]
    pub due_date: Option<String>,

    /// Custom field (format: id=value). Repeatable.
    #[arg(long = "field")]
    pub fields: Vec<String>,
}

/// Arguments for `rd update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// The issue id.
    pub id: u32,

    /// New subject line.
    #[arg(long)]
    pub subject: Option<String>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,

    /// New status id.
    #[arg(long)]
    pub status: Option<u32>,

    /// New assignee user id.
    #[arg(long)]
    pub assign: Option<u32>,

    /// New priority id.
    #[arg(long)]
    pub priority: Option<u32>,

    /// New completion ratio (0-100).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub done_ratio: Option<u32>,

    /// New start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// New due date (YYYY-MM-DD).
    #[arg(long)]
    pub due_date: Option<String>,

    /// Target version, by name (resolved within the issue's project).
    #[arg(long)]
    pub version: Option<String>,

    /// Add a note/comment alongside the changes.
    #[arg(long)]
    pub note: Option<String>,

    /// Custom field (format: id=value). Repeatable.
    #[arg(long = "field")]
    pub fields: Vec<String>,
}

/// Arguments for `rd comment`.
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// The issue id.
    pub id: u32,

    /// The comment text (remaining arguments are joined).
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Search scope accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Every visible project.
    All,
    /// Projects the user is a member of.
    MyProjects,
    /// The current project and its subprojects.
    Subprojects,
}

impl From<ScopeArg> for SearchScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::All => SearchScope::All,
            ScopeArg::MyProjects => SearchScope::MyProjects,
            ScopeArg::Subprojects => SearchScope::Subprojects,
        }
    }
}

/// Arguments for `rd search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// The query string.
    pub query: String,

    /// Search all resource types.
    #[arg(long)]
    pub all_types: bool,

    /// Search wiki pages.
    #[arg(long)]
    pub wiki: bool,

    /// Search news.
    #[arg(long)]
    pub news: bool,

    /// Search documents.
    #[arg(long)]
    pub documents: bool,

    /// Search repository changesets.
    #[arg(long)]
    pub changesets: bool,

    /// Search forum messages.
    #[arg(long)]
    pub messages: bool,

    /// Search projects.
    #[arg(long)]
    pub projects: bool,

    /// Search scope.
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Search in titles only.
    #[arg(long)]
    pub titles_only: bool,

    /// Match all query words.
    #[arg(long)]
    pub all_words: bool,

    /// Fetch all result pages (may take longer).
    #[arg(long)]
    pub all: bool,

    /// Number of results per page.
    #[arg(long, default_value_t = 100)]
    pub limit: u32,

    /// Offset of the first result.
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Display one result per line.
    #[arg(long)]
    pub oneline: bool,
}

/// Arguments for `rd projects`.
#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Project id or identifier; omit to list all projects.
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "rd", "list", "--project", "demo", "--assignee", "me", "--limit", "50",
        ])
        .unwrap();

        match cli.command {
            Command::List(args) => {
                assert_eq!(args.project.as_deref(), Some("demo"));
                assert_eq!(args.assignee.as_deref(), Some("me"));
                assert_eq!(args.limit, Some(50));
                assert!(!args.csv);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rd", "get", "42", "--comments", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Get(args) => {
                assert_eq!(args.id, 42);
                assert!(args.comments);
            }
            other => panic!("expected get, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_create_requires_title_and_project() {
        assert!(Cli::try_parse_from(["rd", "create", "--title", "Bug"]).is_err());
        assert!(Cli::try_parse_from(["rd", "create", "--project", "demo"]).is_err());
        assert!(Cli::try_parse_from([
            "rd", "create", "--title", "Bug", "--project", "demo"
        ])
        .is_ok());
    }

    #[test]
    fn test_parse_update_rejects_done_ratio_above_100() {
        let result = Cli::try_parse_from(["rd", "update", "42", "--done-ratio", "150"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_comment_joins_remaining_args() {
        let cli =
            Cli::try_parse_from(["rd", "comment", "42", "looks", "fixed", "now"]).unwrap();
        match cli.command {
            Command::Comment(args) => {
                assert_eq!(args.id, 42);
                assert_eq!(args.text, vec!["looks", "fixed", "now"]);
            }
            other => panic!("expected comment, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_comment_requires_text() {
        assert!(Cli::try_parse_from(["rd", "comment", "42"]).is_err());
    }

    #[test]
    fn test_parse_search_scope_value() {
        let cli = Cli::try_parse_from([
            "rd", "search", "crash", "--scope", "my-projects", "--all-words",
        ])
        .unwrap();
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.scope, Some(ScopeArg::MyProjects));
                assert!(args.all_words);
                assert_eq!(args.limit, 100);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_projects_with_optional_id() {
        let cli = Cli::try_parse_from(["rd", "projects"]).unwrap();
        match cli.command {
            Command::Projects(args) => assert!(args.id.is_none()),
            other => panic!("expected projects, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["rd", "projects", "demo"]).unwrap();
        match cli.command {
            Command::Projects(args) => assert_eq!(args.id.as_deref(), Some("demo")),
            other => panic!("expected projects, got {other:?}"),
        }
    }

    #[test]
    fn test_repeatable_custom_fields() {
        let cli = Cli::try_parse_from([
            "rd", "update", "42", "--field", "3=high", "--field", "7=yes",
        ])
        .unwrap();
        match cli.command {
            Command::Update(args) => {
                assert_eq!(args.fields, vec!["3=high", "7=yes"]);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }
}
