use featdeck_mount::{Document, HtmlPage, MountOutcome, Surface, install, mount};

const PANEL_ID: &str = "featureStatusPanel";

#[test]
fn mount_appends_empty_panel_as_last_child() {
    let mut doc = Document::new().with_child("<main>app</main>");

    assert_eq!(mount(&mut doc), MountOutcome::Mounted);

    let children = doc.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], "<main>app</main>");
    assert!(children[1].contains(r#"id="featureStatusPanel""#));
    assert!(children[1].contains("Backend Progress: 95%"));
    assert!(!children[1].contains(r#"class="feature-status-item""#));
}

#[test]
fn mounting_twice_yields_one_container() {
    let mut doc = Document::new();

    assert_eq!(mount(&mut doc), MountOutcome::Mounted);
    assert_eq!(mount(&mut doc), MountOutcome::AlreadyMounted);
    assert_eq!(doc.count_elements(PANEL_ID), 1);
}

#[test]
fn existing_element_with_panel_id_blocks_mount() {
    let mut doc = Document::new().with_child(r#"<div id="featureStatusPanel">custom</div>"#);

    assert_eq!(mount(&mut doc), MountOutcome::AlreadyMounted);
    assert_eq!(doc.children().len(), 1);
}

#[test]
fn headless_document_is_left_alone() {
    let mut doc = Document::headless();

    assert_eq!(mount(&mut doc), MountOutcome::NoRoot);
    assert!(!install(&mut doc));
    assert_eq!(doc.pending_callbacks(), 0);
}

#[test]
fn install_defers_until_content_ready() {
    let mut doc = Document::new();

    assert!(install(&mut doc));
    assert!(!doc.contains_element(PANEL_ID));

    doc.fire_content_ready();
    assert_eq!(doc.count_elements(PANEL_ID), 1);
}

#[test]
fn install_and_explicit_mount_do_not_stack() {
    let mut doc = Document::new();

    assert!(install(&mut doc));
    assert!(install(&mut doc));
    assert_eq!(mount(&mut doc), MountOutcome::Mounted);

    doc.fire_content_ready();
    doc.fire_content_ready();
    assert_eq!(doc.count_elements(PANEL_ID), 1);
}

#[test]
fn html_page_injection_is_idempotent() {
    let mut page = HtmlPage::new("<!doctype html>\n<html><body>\n<h1>Mock</h1>\n</body></html>\n");

    assert_eq!(mount(&mut page), MountOutcome::Mounted);
    let once = page.as_str().to_owned();
    assert_eq!(mount(&mut page), MountOutcome::AlreadyMounted);
    assert_eq!(page.as_str(), once);

    let html = page.into_string();
    assert_eq!(html.matches(r#"id="featureStatusPanel""#).count(), 1);
    let panel_at = html.find(r#"id="featureStatusPanel""#).unwrap();
    let heading_at = html.find("<h1>Mock</h1>").unwrap();
    let body_close = html.find("</body>").unwrap();
    assert!(heading_at < panel_at && panel_at < body_close);
    assert!(html.ends_with("</body></html>\n"));
}

#[test]
fn html_page_install_mounts_immediately() {
    let mut page = HtmlPage::new("<body></body>");

    assert!(install(&mut page));
    assert!(page.contains_element(PANEL_ID));
}

#[test]
fn html_fragment_without_body_is_not_a_root() {
    let mut page = HtmlPage::new("<p>fragment</p>");

    assert_eq!(mount(&mut page), MountOutcome::NoRoot);
    assert_eq!(page.as_str(), "<p>fragment</p>");
}

#[test]
fn html_page_with_implied_body_mounts_once() {
    let mut page = HtmlPage::new("<!doctype html><title>x</title><h1>Mock</h1>");

    assert_eq!(mount(&mut page), MountOutcome::Mounted);
    assert_eq!(mount(&mut page), MountOutcome::AlreadyMounted);

    let html = page.into_string();
    assert!(html.starts_with("<!doctype html><title>x</title><h1>Mock</h1>"));
    assert_eq!(html.matches(r#"id="featureStatusPanel""#).count(), 1);
}
