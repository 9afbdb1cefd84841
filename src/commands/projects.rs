//! `rd projects` - list projects or show one in detail.

use crate::api::types::ProjectDetail;
use crate::api::RedmineClient;
use crate::cli::ProjectsArgs;
use crate::error::Result;
use crate::output;

pub async fn run(client: &RedmineClient, args: &ProjectsArgs, json: bool) -> Result<()> {
    match &args.id {
        Some(id) => {
            let project = client.get_project(id).await?;
            if json {
                return output::print_json(&project);
            }
            print_detail(&project);
        }
        None => {
            let response = client.list_projects().await?;
            if json {
                return output::print_json(&response);
            }
            print_table(&response.projects);
            if response.total_count as usize > response.projects.len() {
                println!(
                    "\nShowing {} of {} projects",
                    response.projects.len(),
                    response.total_count
                );
            }
        }
    }
    Ok(())
}

fn print_detail(project: &ProjectDetail) {
    println!("Project #{}", project.id);
    println!("{}", "=".repeat(80));
    println!("Name:        {}", project.name);
    println!("Identifier:  {}", project.identifier);
    println!(
        "Visibility:  {}",
        if project.is_public { "public" } else { "private" }
    );

    if !project.trackers.is_empty() {
        let names: Vec<&str> = project
            .trackers
            .iter()
            .map(|tracker| tracker.name.as_str())
            .collect();
        println!("Trackers:    {}", names.join(", "));
    }

    if !project.description.is_empty() {
        println!("\nDescription:");
        println!("{}", "-".repeat(80));
        println!("{}", project.description);
    }
}

fn print_table(projects: &[ProjectDetail]) {
    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|project| {
            vec![
                project.id.to_string(),
                project.identifier.clone(),
                project.name.clone(),
                if project.is_public { "public" } else { "private" }.to_string(),
            ]
        })
        .collect();

    print!(
        "{}",
        output::render_table(&["ID", "Identifier", "Name", "Visibility"], &rows)
    );
}
