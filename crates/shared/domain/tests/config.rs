use folio_domain::{DisplayMode, Locale, LogoImage, ProjectRecord, Site, SiteConfig, SocialLink};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let site = Site::default();
    assert_eq!(site.title, "Folio");
    assert_eq!(site.post_per_page, 20);
    assert_eq!(site.scheduled_post_margin, 15 * 60 * 1000);
    assert!(site.light_and_dark_mode);
    assert!(site.email.is_none());

    let logo = LogoImage::default();
    assert!(!logo.enable);
    assert!(logo.svg);
    assert_eq!((logo.width, logo.height), (216, 46));

    let config = SiteConfig::default();
    assert!(config.projects.is_empty());
    assert!(config.socials.is_empty());
    assert_eq!(config.locale.html_lang(), "en");
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "site": { "title": "ゆらぎ荘", "author": "sora", "post_per_page": 10 },
        "locale": { "lang": "zh", "lang_tag": ["zh-CN"] },
        "projects": [
            { "title": "Mind Map", "href": "https://example.github.io/mind-map", "description": "desc" },
            { "title": "Legacy", "mode": "disabled" },
            { "title": "Notes", "mode": "secondary" }
        ],
        "socials": [
            { "name": "Github", "href": "https://github.com/someone", "active": true },
            { "name": "Twitter", "href": "https://twitter.com/someone" }
        ]
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.site.title, "ゆらぎ荘");
    assert_eq!(cfg.site.post_per_page, 10);
    assert_eq!(cfg.site.website, "http://localhost:4321/", "missing fields fall back to defaults");
    assert_eq!(cfg.locale.html_lang(), "zh");
    assert_eq!(cfg.locale.lang_tag, vec!["zh-CN".to_owned()]);

    assert_eq!(cfg.projects.len(), 3);
    assert_eq!(cfg.projects[0].mode, DisplayMode::Primary);
    assert_eq!(cfg.projects[0].description_text(), "desc");
    assert_eq!(cfg.projects[1].mode, DisplayMode::Disabled);
    assert!(cfg.projects[1].href.is_none());
    assert_eq!(cfg.projects[2].mode, DisplayMode::Secondary);

    let active: Vec<_> = cfg.active_socials().map(|s| s.name.as_str()).collect();
    assert_eq!(active, ["Github"]);
}

#[test]
fn project_requires_title() {
    let raw = json!({ "href": "https://example.com" });
    assert!(serde_json::from_value::<ProjectRecord>(raw).is_err());
}

#[test]
fn clones_share_data() {
    let cfg = SiteConfig::default();
    let clone = cfg.clone();
    assert!(std::ptr::eq(&cfg.site, &clone.site));
}

#[test]
fn empty_lang_falls_back_to_english() {
    let locale = Locale { lang: String::new(), lang_tag: Vec::new() };
    assert_eq!(locale.html_lang(), "en");
}

#[test]
fn social_link_titles() {
    let github = SocialLink::new("Github", "https://github.com/someone");
    assert_eq!(github.link_title("ゆらぎ荘"), "ゆらぎ荘 on Github");

    let mail = SocialLink::new("Mail", "mailto:someone@example.com");
    assert_eq!(mail.link_title("ゆらぎ荘"), "Send an email to ゆらぎ荘");

    let custom = github.with_link_title(" ゆらぎ荘 on Github");
    assert_eq!(custom.link_title("ignored"), " ゆらぎ荘 on Github");
}

#[test]
fn display_mode_serializes_snake_case() {
    assert_eq!(serde_json::to_value(DisplayMode::Disabled).unwrap(), json!("disabled"));
    assert_eq!(DisplayMode::default(), DisplayMode::Primary);
}

#[test]
fn shipped_site_toml_deserializes() {
    let raw = include_str!("../../../../apps/shell/site.toml");
    let cfg: SiteConfig = toml::from_str(raw).expect("site.toml deserialize");

    assert_eq!(cfg.site.title, "ゆらぎ荘");
    assert_eq!(cfg.site.scheduled_post_margin, 15 * 60 * 1000);
    assert_eq!(cfg.locale.html_lang(), "zh");
    assert_eq!(cfg.projects.len(), 6);
    assert_eq!(cfg.projects[4].mode, DisplayMode::Secondary);
    assert!(cfg.projects[4].description.is_none());
    assert_eq!(cfg.active_socials().count(), 2);
}
