//! `rd create` - create a new issue.

use crate::api::types::IssueCreate;
use crate::api::RedmineClient;
use crate::cli::CreateArgs;
use crate::error::Result;
use crate::output;

use super::parse_custom_fields;

pub async fn run(client: &RedmineClient, args: &CreateArgs, json: bool) -> Result<()> {
    // The create endpoint only accepts numeric project ids, so a slug is
    // resolved with an extra round trip first.
    let project = client.get_project(&args.project).await?;

    let issue = IssueCreate {
        project_id: project.id,
        subject: args.title.clone(),
        description: args.description.clone(),
        tracker_id: args.tracker,
        status_id: args.status,
        priority_id: args.priority,
        assigned_to_id: args.assignee,
        start_date: args.start_date.clone(),
        due_date: args.due_date.clone(),
        custom_fields: parse_custom_fields(&args.fields)?,
    };

    let created = client.create_issue(issue).await?;

    if json {
        return output::print_json(&created);
    }

    println!("Issue #{} created successfully", created.id);
    println!("URL: {}/issues/{}", client.base_url(), created.id);
    Ok(())
}
