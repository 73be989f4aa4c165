//! Project list feature slice.
//!
//! Renders [`ProjectRecord`]s from the site configuration into static list markup.
//! Rendering is pure: one fresh virtual DOM per call, no shared state.
//!
//! ```rust
//! use folio_kernel::domain::ProjectRecord;
//!
//! let record = ProjectRecord::new("Mind Map").with_href("https://example.com/mind-map");
//! let html = folio_projects::render(&record);
//! assert!(html.as_str().contains("view-transition-name: mind-map"));
//! ```

mod component;

pub use crate::component::{
    ANCHOR_CLASS, DESCRIPTION_CLASS, HEADING_CLASS, ITEM_CLASS, ProjectList, ProjectListItem,
    ProjectListItemProps, ProjectListProps,
};

use folio_kernel::domain::ProjectRecord;
use folio_kernel::markup::{MarkupFragment, render_component};
use tracing::{debug, trace};

/// Renders one project as an `<li>` fragment.
#[must_use]
pub fn render(record: &ProjectRecord) -> MarkupFragment {
    trace!(title = %record.title, mode = ?record.mode, "Rendering project");
    render_component(ProjectListItem, ProjectListItemProps { record: record.clone() })
}

/// Renders every project, in order, inside a `<ul>`.
#[must_use]
pub fn render_list(records: &[ProjectRecord]) -> MarkupFragment {
    debug!(count = records.len(), "Rendering project list");
    render_component(ProjectList, ProjectListProps { records: records.to_vec() })
}
