//! `rd get` - show one issue in detail.

use crate::api::types::Issue;
use crate::api::RedmineClient;
use crate::cli::GetArgs;
use crate::error::Result;
use crate::output;

pub async fn run(client: &RedmineClient, args: &GetArgs, json: bool) -> Result<()> {
    let issue = client.get_issue(args.id, args.comments).await?;

    if json {
        return output::print_json(&issue);
    }

    print_detail(&issue);
    Ok(())
}

fn print_detail(issue: &Issue) {
    println!("Issue #{}", issue.id);
    println!("{}", "=".repeat(80));
    println!("Subject:     {}", issue.subject);
    println!("Project:     {}", issue.project);
    println!("Tracker:     {}", issue.tracker);
    println!("Status:      {}", issue.status);
    println!("Priority:    {}", issue.priority);
    println!("Author:      {}", issue.author);

    match &issue.assigned_to {
        Some(user) => println!("Assigned to: {user}"),
        None => println!("Assigned to: -"),
    }

    if let Some(start) = &issue.start_date {
        println!("Start Date:  {start}");
    }
    if let Some(due) = &issue.due_date {
        println!("Due Date:    {due}");
    }

    println!("Done Ratio:  {}%", issue.done_ratio);
    if let Some(hours) = issue.estimated_hours {
        println!("Estimated:   {hours:.1} hours");
    }

    println!("Created:     {}", issue.created_on);
    println!("Updated:     {}", issue.updated_on);

    if !issue.custom_fields.is_empty() {
        println!("\nCustom Fields:");
        for field in &issue.custom_fields {
            println!("  {}: {}", field.name, render_value(&field.value));
        }
    }

    if !issue.description.is_empty() {
        println!("\nDescription:");
        println!("{}", "-".repeat(80));
        println!("{}", issue.description);
    }

    let comments: Vec<_> = issue
        .journals
        .iter()
        .filter(|journal| !journal.notes.is_empty())
        .collect();
    if !comments.is_empty() {
        println!("\nComments:");
        println!("{}", "-".repeat(80));
        for journal in comments {
            println!(
                "\n[{}] {}:\n{}",
                journal.created_on, journal.user, journal.notes
            );
        }
    }
}

/// Render a custom field value without JSON quoting noise.
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
