//! `rd comment` - add a note to an issue.

use crate::api::RedmineClient;
use crate::cli::CommentArgs;
use crate::error::Result;

pub async fn run(client: &RedmineClient, args: &CommentArgs) -> Result<()> {
    let text = args.text.join(" ");
    client.add_comment(args.id, &text).await?;

    println!("Comment added to issue #{}", args.id);
    Ok(())
}
