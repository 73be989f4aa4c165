use dioxus::prelude::*;
use folio_kernel::domain::{DisplayMode, ProjectRecord};
use folio_kernel::slugify;

pub const ITEM_CLASS: &str = "my-6";
pub const ANCHOR_CLASS: &str = "inline-block text-lg font-medium text-skin-accent decoration-dashed \
                                underline-offset-4 focus-visible:no-underline \
                                focus-visible:underline-offset-0";
pub const HEADING_CLASS: &str = "text-lg font-medium decoration-dashed hover:underline";
pub const DESCRIPTION_CLASS: &str = "flex items-center space-x-2 opacity-80";

/// Target for project links: always a new browsing context.
const LINK_TARGET: &str = "_blank";

#[derive(Props, Debug, Clone, PartialEq)]
pub struct ProjectListItemProps {
    pub record: ProjectRecord,
}

/// A single project entry: linked heading plus a description line.
///
/// The heading carries `view-transition-name: <slug of title>` so the same project
/// can be matched across page transitions.
#[allow(non_snake_case)]
pub fn ProjectListItem(props: ProjectListItemProps) -> Element {
    // rendered even when empty
    let description = props.record.description_text().to_owned();
    let ProjectRecord { title, href, mode, .. } = props.record;
    let style = format!("view-transition-name: {}", slugify(&title));

    let heading = match mode {
        DisplayMode::Primary => rsx! {
            h2 { style: "{style}", class: HEADING_CLASS, "{title}" }
        },
        DisplayMode::Secondary => rsx! {
            h3 { style: "{style}", class: HEADING_CLASS, "{title}" }
        },
        DisplayMode::Disabled => rsx! {
            del {
                h2 { style: "{style}", class: HEADING_CLASS, "{title}" }
            }
        },
    };

    rsx! {
        li { class: ITEM_CLASS,
            a { href, target: LINK_TARGET, class: ANCHOR_CLASS, {heading} }
            div { class: DESCRIPTION_CLASS,
                span { "{description}" }
            }
        }
    }
}

#[derive(Props, Debug, Clone, PartialEq)]
pub struct ProjectListProps {
    pub records: Vec<ProjectRecord>,
}

/// All projects, in configuration order.
#[allow(non_snake_case)]
pub fn ProjectList(props: ProjectListProps) -> Element {
    rsx! {
        ul {
            for record in props.records {
                ProjectListItem { record }
            }
        }
    }
}
