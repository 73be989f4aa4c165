use dioxus::prelude::*;
use folio_kernel::domain::SocialLink;

pub const CONTAINER_CLASS: &str = "social-icons";
pub const LINK_CLASS: &str = "link-button";
pub const LABEL_CLASS: &str = "sr-only";

const LINK_TARGET: &str = "_blank";

#[derive(Props, Debug, Clone, PartialEq)]
pub struct SocialLinksProps {
    /// Site title used to derive link titles.
    pub site_title: String,
    /// Links to show. Callers filter out inactive ones.
    pub links: Vec<SocialLink>,
}

#[allow(non_snake_case)]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    let SocialLinksProps { site_title, links } = props;
    let icons: Vec<(String, SocialLink)> = links
        .into_iter()
        .map(|link| (link.link_title(&site_title).into_owned(), link))
        .collect();

    rsx! {
        div { class: CONTAINER_CLASS,
            for (title, link) in icons {
                SocialIcon { title, link }
            }
        }
    }
}

#[derive(Props, Debug, Clone, PartialEq)]
struct SocialIconProps {
    title: String,
    link: SocialLink,
}

#[allow(non_snake_case)]
fn SocialIcon(props: SocialIconProps) -> Element {
    let SocialIconProps { title, link } = props;
    let SocialLink { name, href, .. } = link;

    rsx! {
        a {
            href,
            target: LINK_TARGET,
            class: LINK_CLASS,
            title: "{title}",
            span { class: LABEL_CLASS, "{title}" }
            "{name}"
        }
    }
}
