//! `rd update` - update fields of an existing issue.

use crate::api::types::IssueUpdate;
use crate::api::RedmineClient;
use crate::cli::UpdateArgs;
use crate::error::Result;

use super::parse_custom_fields;

pub async fn run(client: &RedmineClient, args: &UpdateArgs) -> Result<()> {
    let mut update = IssueUpdate {
        subject: args.subject.clone(),
        description: args.description.clone(),
        status_id: args.status,
        priority_id: args.priority,
        assigned_to_id: args.assign,
        done_ratio: args.done_ratio,
        start_date: args.start_date.clone(),
        due_date: args.due_date.clone(),
        notes: args.note.clone(),
        custom_fields: parse_custom_fields(&args.fields)?,
        ..Default::default()
    };

    // A version is given by name, but the API wants an id. Fetch the issue
    // to learn its project, then match the name against that project's
    // versions.
    if let Some(name) = &args.version {
        let issue = client.get_issue(args.id, false).await?;
        let project = issue.project.id.to_string();
        let version = client.find_version_by_name(&project, name).await?;
        update.fixed_version_id = Some(version.id);
    }

    client.update_issue(args.id, update).await?;

    println!("Issue #{} updated successfully", args.id);
    Ok(())
}
