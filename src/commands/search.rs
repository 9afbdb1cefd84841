//! `rd search` - full-text search across Redmine resources.

use serde_json::json;

use crate::api::types::SearchResult;
use crate::api::{RedmineClient, SearchOptions};
use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output;

/// Maximum title width in table output.
const TITLE_WIDTH: usize = 50;

/// Maximum snippet width in table output.
const SNIPPET_WIDTH: usize = 30;

pub async fn run(client: &RedmineClient, args: &SearchArgs, json_output: bool) -> Result<()> {
    let opts = build_options(args);

    let results = if args.all {
        client.search_all(&opts).await?
    } else {
        client.search(&opts).await?.results
    };

    if json_output {
        return output::print_json(&json!({
            "results": results,
            "total": results.len(),
        }));
    }

    if args.oneline {
        for result in &results {
            println!("{}: {}", result.id, result.title);
        }
        return Ok(());
    }

    print_table(&results);
    println!("\nFound {} results matching '{}'", results.len(), args.query);
    Ok(())
}

fn build_options(args: &SearchArgs) -> SearchOptions {
    let mut opts = SearchOptions::new(&args.query);
    opts.limit = args.limit;
    opts.offset = args.offset;
    opts.scope = args.scope.map(Into::into);
    opts.titles_only = args.titles_only;
    opts.all_words = args.all_words;

    if args.all_types {
        opts.all_types();
    }
    opts.wiki_pages |= args.wiki;
    opts.news |= args.news;
    opts.documents |= args.documents;
    opts.changesets |= args.changesets;
    opts.messages |= args.messages;
    opts.projects |= args.projects;

    opts
}

fn print_table(results: &[SearchResult]) {
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|result| {
            vec![
                result.kind.clone(),
                result.id.to_string(),
                output::truncate(&result.title, TITLE_WIDTH),
                output::truncate(&output::strip_highlight(&result.description), SNIPPET_WIDTH),
            ]
        })
        .collect();

    print!(
        "{}",
        output::render_table(&["Type", "ID", "Title", "Description"], &rows)
    );
}

#[cfg(test)]
mod tests {
    use crate::cli::ScopeArg;

    use super::*;

    fn args(query: &str) -> SearchArgs {
        SearchArgs {
            query: query.to_string(),
            all_types: false,
            wiki: false,
            news: false,
            documents: false,
            changesets: false,
            messages: false,
            projects: false,
            scope: None,
            titles_only: false,
            all_words: false,
            all: false,
            limit: 100,
            offset: 0,
            oneline: false,
        }
    }

    #[test]
    fn test_build_options_defaults_to_issues() {
        let opts = build_options(&args("crash"));
        assert!(opts.issues);
        assert!(!opts.wiki_pages);
        assert_eq!(opts.limit, 100);
    }

    #[test]
    fn test_build_options_individual_toggles_add_to_issues() {
        let mut search_args = args("crash");
        search_args.wiki = true;
        search_args.news = true;

        let opts = build_options(&search_args);
        assert!(opts.issues);
        assert!(opts.wiki_pages);
        assert!(opts.news);
        assert!(!opts.documents);
    }

    #[test]
    fn test_build_options_all_types() {
        let mut search_args = args("crash");
        search_args.all_types = true;

        let opts = build_options(&search_args);
        assert!(opts.issues && opts.news && opts.documents && opts.changesets);
        assert!(opts.wiki_pages && opts.messages && opts.projects);
    }

    #[test]
    fn test_build_options_scope_mapping() {
        let mut search_args = args("crash");
        search_args.scope = Some(ScopeArg::Subprojects);

        let opts = build_options(&search_args);
        assert_eq!(opts.scope, Some(crate::api::SearchScope::Subprojects));
    }
}
