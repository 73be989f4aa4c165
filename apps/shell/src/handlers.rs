use anyhow::{Context, Result};
use folio::kernel::config::load_site;
use folio::kernel::slugify;
use std::path::Path;
use tracing::info;

pub(crate) fn render(config: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let site = load_site(config).context("Critical: Configuration is malformed")?;
    let fragments = folio::render_site(&site);

    match out {
        Some(dir) => {
            let written = fragments.write_to(dir)?;
            info!(files = written.len(), dir = %dir.display(), "Fragments written");
        },
        None => {
            println!("{}", fragments.projects);
            println!("{}", fragments.socials);
        },
    }

    Ok(())
}

pub(crate) fn check(config: Option<&Path>) -> Result<()> {
    let site = load_site(config).context("Critical: Configuration is malformed")?;

    info!(
        title = %site.site.title,
        lang = site.locale.html_lang(),
        projects = site.projects.len(),
        socials = site.socials.len(),
        active_socials = site.active_socials().count(),
        "Configuration is valid"
    );

    Ok(())
}

pub(crate) fn slug(text: &[String]) {
    for input in text {
        println!("{}", slugify(input));
    }
}
