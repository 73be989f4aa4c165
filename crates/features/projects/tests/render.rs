use folio_kernel::domain::{DisplayMode, ProjectRecord};
use folio_kernel::slugify;
use folio_projects::{ANCHOR_CLASS, DESCRIPTION_CLASS, HEADING_CLASS, render, render_list};

fn mind_map() -> ProjectRecord {
    ProjectRecord::new("Mind Map").with_href("https://x/mind-map").with_description("desc")
}

#[test]
fn primary_record_renders_linked_h2() {
    let html = render(&mind_map()).into_string();

    assert!(html.starts_with(r#"<li class="my-6">"#), "{html}");
    assert!(html.contains(r#"href="https://x/mind-map""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(&format!(r#"class="{ANCHOR_CLASS}""#)));
    assert!(html.contains("<h2"));
    assert!(html.contains(">Mind Map</h2>"));
    assert!(html.contains(&format!(r#"class="{HEADING_CLASS}""#)));
    assert!(html.contains(&format!("view-transition-name: {}", slugify("Mind Map"))));
    assert!(html.contains(&format!(r#"<div class="{DESCRIPTION_CLASS}"><span>desc</span></div>"#)));
    assert!(!html.contains("<del>"));
    assert!(!html.contains("<h3"));
}

#[test]
fn disabled_record_is_struck_through() {
    let primary = render(&mind_map()).into_string();
    let disabled = render(&mind_map().with_mode(DisplayMode::Disabled)).into_string();

    assert!(disabled.contains("<del><h2"), "{disabled}");
    assert!(disabled.contains("</h2></del>"));
    assert_eq!(disabled.replace("<del>", "").replace("</del>", ""), primary);
}

#[test]
fn secondary_record_uses_h3() {
    let html = render(&mind_map().with_mode(DisplayMode::Secondary)).into_string();

    assert!(html.contains(">Mind Map</h3>"), "{html}");
    assert!(!html.contains("<h2"));
    assert!(html.contains("view-transition-name: mind-map"));
}

#[test]
fn missing_description_keeps_empty_line() {
    let html = render(&ProjectRecord::new("Mind Map").with_href("https://x/mind-map")).into_string();

    assert!(html.contains(&format!(r#"<div class="{DESCRIPTION_CLASS}"><span></span></div>"#)), "{html}");
}

#[test]
fn empty_description_matches_missing_one() {
    let absent = render(&ProjectRecord::new("Lightweight Creating Resume")).into_string();
    let empty =
        render(&ProjectRecord::new("Lightweight Creating Resume").with_description("")).into_string();

    assert_eq!(absent, empty);
}

#[test]
fn missing_href_renders_inert_anchor() {
    let html = render(&ProjectRecord::new("Mind Map").with_description("desc")).into_string();

    assert!(html.contains("<a "), "{html}");
    assert!(!html.contains("href="));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(">Mind Map</h2>"));
    assert!(html.contains("view-transition-name: mind-map"));
}

#[test]
fn text_is_escaped() {
    let record = ProjectRecord::new("<script>alert(1)</script>")
        .with_description("Vuetify.js & Nest.js");
    let html = render(&record).into_string();

    assert!(!html.contains("<script>"), "{html}");
    assert!(!html.contains("</script>"));
    assert!(html.contains("&#60;script&#62;alert(1)&#60;/script&#62;</h2>"));
    assert!(!html.contains("Vuetify.js & Nest.js"));
    assert!(html.contains("<span>Vuetify.js &#38; Nest.js</span>"));
    assert!(html.contains("view-transition-name: script-alert-1-script"));
}

#[test]
fn non_latin_title_keeps_its_slug() {
    let html = render(&ProjectRecord::new("ゆらぎ荘")).into_string();
    assert!(html.contains("view-transition-name: ゆらぎ荘"), "{html}");
}

#[test]
fn list_preserves_order() {
    let records = vec![
        ProjectRecord::new("Mind Map"),
        ProjectRecord::new("RBAC system").with_mode(DisplayMode::Secondary),
        ProjectRecord::new("ABC Notation").with_mode(DisplayMode::Disabled),
    ];
    let html = render_list(&records).into_string();

    assert!(html.starts_with("<ul>"), "{html}");
    assert!(html.ends_with("</ul>"));
    assert_eq!(html.matches("<li ").count(), 3);

    let positions: Vec<usize> = ["Mind Map", "RBAC system", "ABC Notation"]
        .iter()
        .map(|title| html.find(title).expect("title rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    for record in &records {
        assert!(html.contains(render(record).as_str()), "list item should match single render");
    }
}

#[test]
fn empty_list_renders_empty_ul() {
    let html = render_list(&[]).into_string();
    assert!(html.starts_with("<ul"));
    assert!(!html.contains("<li"));
}

#[test]
fn duplicate_titles_share_a_transition_name() {
    let records = vec![ProjectRecord::new("Mind Map"), ProjectRecord::new("mind map")];
    let html = render_list(&records).into_string();
    assert_eq!(html.matches("view-transition-name: mind-map").count(), 2);
}
