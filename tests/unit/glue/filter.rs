use super::*;

fn details(title: &str) -> CategoryDetails {
    CategoryDetails {
        title: title.to_string(),
        desc: format!("{title} desc"),
        details: vec![DetailItem {
            label: "Current Projects".to_string(),
            text: "things".to_string(),
        }],
    }
}

fn fixture() -> CategoryFilter {
    let mut catalog = Catalog::new();
    catalog.insert("all".to_string(), details("ALL DATA"));
    catalog.insert("web3".to_string(), details("WEB3"));
    catalog.insert("ai".to_string(), details("AI SYSTEMS"));
    let cards = vec![
        Card::new("quadruped", &["architecture", "ai"]),
        Card::new("solidity", &["web3"]),
        Card::new("esp32-cam", &["ai", "research"]),
    ];
    CategoryFilter::new(catalog, cards)
}

#[test]
fn starts_on_all_with_modal_closed() {
    let f = fixture();
    assert_eq!(f.active(), "all");
    assert!(f.modal().is_none());
    assert_eq!(f.displayed_cards(0.0), vec!["quadruped", "solidity", "esp32-cam"]);
}

#[test]
fn new_filter_hides_non_matching_cards_and_opens_modal() {
    let mut f = fixture();
    let out = f.click_filter(0.0, "ai");
    assert!(out.layout_changed && out.modal_open);
    assert_eq!(f.active(), "ai");
    assert_eq!(f.modal().unwrap().details.title, "AI SYSTEMS");

    // Mid-fade the hidden card still occupies layout.
    assert_eq!(f.displayed_cards(0.1).len(), 3);
    assert_eq!(f.displayed_cards(0.3), vec!["quadruped", "esp32-cam"]);
    assert_eq!(f.card_opacity("solidity", 1.0), Some(0.0));
    assert_eq!(f.card_opacity("quadruped", 1.0), Some(1.0));
    assert_eq!(f.card_opacity("missing", 1.0), None);
}

#[test]
fn clicking_active_filter_toggles_modal() {
    let mut f = fixture();
    f.click_filter(0.0, "web3");
    let out = f.click_filter(1.0, "web3");
    assert!(!out.layout_changed);
    assert!(!out.modal_open);
    let out = f.click_filter(2.0, "web3");
    assert!(out.modal_open);
    assert_eq!(f.modal().unwrap().category, "web3");
}

#[test]
fn clicking_all_while_active_opens_overview() {
    let mut f = fixture();
    let out = f.click_filter(0.0, "all");
    assert!(out.modal_open);
    assert_eq!(f.modal().unwrap().details.title, "ALL DATA");
}

#[test]
fn outside_click_closes_modal() {
    let mut f = fixture();
    f.click_filter(0.0, "ai");
    f.click_outside();
    assert!(f.modal().is_none());
    assert_eq!(f.active(), "ai");
}

#[test]
fn category_without_content_filters_but_opens_nothing() {
    let mut f = fixture();
    let out = f.click_filter(0.0, "research");
    assert!(out.layout_changed);
    assert!(!out.modal_open);
    assert_eq!(f.displayed_cards(1.0), vec!["esp32-cam"]);
}

#[test]
fn catalog_parses_from_json() {
    let json = r#"{
        "ai": { "title": "AI", "desc": "d", "details": [{ "label": "l", "text": "t" }] },
        "research": { "title": "R", "desc": "d" }
    }"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();
    assert_eq!(catalog["ai"].details.len(), 1);
    assert!(catalog["research"].details.is_empty());
}
