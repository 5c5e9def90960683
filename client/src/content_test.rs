use super::*;

#[test]
fn nav_sections_link_to_page_anchors() {
    let hrefs: Vec<String> = NAV_SECTIONS.iter().map(|s| s.href()).collect();
    assert_eq!(hrefs, ["#music", "#gigs", "#about", "#contact"]);
}

#[test]
fn social_links_are_absolute_https_urls() {
    for link in SOCIAL_LINKS {
        assert!(link.href.starts_with("https://"), "{} should be https", link.label);
        assert!(!link.icon.path().is_empty());
    }
}

#[test]
fn player_embeds_are_titled() {
    assert!(PLAYER_EMBEDS.iter().all(|embed| !embed.title.is_empty() && embed.src.starts_with("https://")));
}
