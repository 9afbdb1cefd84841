//! `rd list` - list issues with filters.

use crate::api::types::Issue;
use crate::api::{IssueFilter, RedmineClient};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::output;

/// Maximum subject width in table output.
const SUBJECT_WIDTH: usize = 40;

pub async fn run(client: &RedmineClient, args: &ListArgs, json: bool) -> Result<()> {
    let filter = IssueFilter {
        project_id: args.project.clone(),
        status_id: args.status.clone(),
        assigned_to: args.assignee.clone(),
        limit: args.limit,
        offset: args.offset,
    };

    let response = client.list_issues(&filter).await?;

    if json {
        return output::print_json(&response);
    }

    if args.oneline {
        for issue in &response.issues {
            println!("#{} {}", issue.id, issue.subject);
        }
        return Ok(());
    }

    if args.csv {
        print_csv(&response.issues);
        return Ok(());
    }

    print_table(&response.issues);
    Ok(())
}

fn assignee_name(issue: &Issue) -> String {
    issue
        .assigned_to
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn print_csv(issues: &[Issue]) {
    println!("ID,Project,Status,Priority,Subject,Assignee");
    for issue in issues {
        let assignee = issue
            .assigned_to
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default();
        println!(
            "{}",
            output::csv_line(&[
                issue.id.to_string(),
                issue.project.name.clone(),
                issue.status.name.clone(),
                issue.priority.name.clone(),
                issue.subject.clone(),
                assignee,
            ])
        );
    }
}

fn print_table(issues: &[Issue]) {
    let rows: Vec<Vec<String>> = issues
        .iter()
        .map(|issue| {
            vec![
                issue.id.to_string(),
                issue.project.name.clone(),
                issue.status.name.clone(),
                issue.priority.name.clone(),
                output::truncate(&issue.subject, SUBJECT_WIDTH),
                assignee_name(issue),
            ]
        })
        .collect();

    print!(
        "{}",
        output::render_table(
            &["ID", "Project", "Status", "Priority", "Subject", "Assignee"],
            &rows,
        )
    );
}
