use super::*;

#[test]
fn routed_links_when_navigation_is_healthy() {
    let links = header_links(false);
    assert_eq!(links.map(|l| l.href), ["/login", "/signup"]);
    assert!(links.iter().all(|l| !l.external));
}

#[test]
fn external_links_when_full_page_nav_is_forced() {
    let links = header_links(true);
    assert!(links.iter().all(|l| l.external));
    assert_eq!(links.map(|l| l.label), ["Login", "Get Started"]);
}

#[test]
fn fallback_login_link_still_targets_login() {
    let [login, _] = header_links(true);
    assert_eq!(login.href, "/login");
}
