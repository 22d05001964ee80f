// Pull request body generation: diff two dependency snapshots and render
// the result as Markdown with links to each module's repository.
pub mod body;
pub mod diff;
pub mod repo_url;
pub mod version;

pub use body::render;
pub use diff::{DiffEntry, diff};
