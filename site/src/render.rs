//! Static prerendering with Leptos SSR.

use crate::components::SiteDocument;
use crate::{LinkMode, SiteConfig};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;
use surover_model::Route;

/// One prerendered page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Page this document shows
    pub route: Route,
    /// Output file name relative to the site root
    pub file_name: &'static str,
    /// Complete document including `<!DOCTYPE html>`
    pub html: String,
}

/// Render one page as a complete HTML document.
///
/// ```rust
/// use surover_model::Route;
/// use surover_site::{render_page, LinkMode, SiteConfig};
///
/// let html = render_page(Route::resolve("#/unknown-path"), &SiteConfig::default(), LinkMode::Hash);
/// assert!(html.contains("What is a rover?"));
/// ```
pub fn render_page(route: Route, config: &SiteConfig, link_mode: LinkMode) -> String {
    // Context (link mode) and signals need an owner; each page gets a fresh one.
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <SiteDocument route=route config=config.clone() link_mode=link_mode /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render every page, in navigation order.
pub fn render_site(config: &SiteConfig, link_mode: LinkMode) -> Vec<RenderedPage> {
    Route::ALL
        .into_iter()
        .map(|route| RenderedPage {
            route,
            file_name: route.static_file(),
            html: render_page(route, config, link_mode),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SystemPanel;
    use crate::{BOOT_ATTR, BootState};
    use pretty_assertions::assert_eq;
    use surover_model::content::{CAPTAINS, EXPOS, PROGRAMS, SUBTEAMS, SYSTEMS};

    /// Text as the SSR output encodes it.
    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    fn home() -> String {
        render_page(Route::Home, &SiteConfig::default(), LinkMode::Hash)
    }

    /// Position of each needle, asserting all are present.
    fn positions(html: &str, needles: &[String]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| {
                html.find(needle.as_str())
                    .unwrap_or_else(|| panic!("missing {needle:?}"))
            })
            .collect()
    }

    fn assert_in_order(html: &str, needles: &[String]) {
        let found = positions(html, needles);
        let mut sorted = found.clone();
        sorted.sort_unstable();
        assert_eq!(found, sorted, "out of order: {needles:?}");
    }

    /// Value of the first `name="..."` attribute, entities decoded the way a
    /// browser hands it to script.
    fn attribute(html: &str, name: &str) -> Option<String> {
        let marker = format!("{name}=\"");
        let start = html.find(&marker)? + marker.len();
        let end = html[start..].find('"')? + start;
        Some(
            html[start..end]
                .replace("&quot;", "\"")
                .replace("&#x27;", "'")
                .replace("&#39;", "'")
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&amp;", "&"),
        )
    }

    /// The `<a>` tag in the nav carrying `aria-current`.
    fn current_nav_link(html: &str) -> String {
        let start = html.find("<nav").expect("nav");
        let end = html[start..].find("</nav>").expect("nav end") + start;
        html[start..end]
            .split("<a ")
            .find(|tag| tag.contains("aria-current=\"page\""))
            .map(str::to_string)
            .expect("current link")
    }

    #[test]
    fn renders_complete_document() {
        let html = home();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>SuRover | University Rover Team</title>"));
        assert!(html.contains("id=\"app\""));
        assert!(!html.contains("type=\"module\""));
    }

    #[test]
    fn unknown_fragment_renders_home() {
        let route = Route::resolve("#/unknown-path");
        let html = render_page(route, &SiteConfig::default(), LinkMode::Hash);
        assert_eq!(html, home());
    }

    #[test]
    fn home_has_every_section() {
        let html = home();
        let ids = [
            "id=\"home\"",
            "id=\"about\"",
            "id=\"our-rover\"",
            "id=\"systems\"",
            "id=\"social\"",
        ];
        for id in ids {
            assert!(html.contains(id), "missing {id}");
        }
        assert!(html.contains("coverr-nasa-mission-control"));
        assert!(html.contains("Legacy"));
        assert!(html.contains("Venom"));
    }

    #[test]
    fn fresh_systems_section_shows_first_system() {
        let html = home();
        let first = &SYSTEMS[0];
        let points: Vec<String> = first.points.iter().map(|p| escaped(p)).collect();
        assert_in_order(&html, &points);
        // Tab button plus the panel.
        assert_eq!(html.matches("data-system=\"drivetrain\"").count(), 2);
        assert_eq!(html.matches("data-system=\"arm\"").count(), 1);
        assert_eq!(html.matches("role=\"tabpanel\"").count(), 1);

        // Other systems appear only as tab labels.
        for other in &SYSTEMS[1..] {
            for point in other.points {
                assert!(!html.contains(&escaped(point)), "leaked {point:?}");
            }
        }
    }

    #[test]
    fn system_panel_matches_each_entry() {
        for system in SYSTEMS {
            let owner = Owner::new();
            let html = owner.with(|| view! { <SystemPanel system=system /> }.to_html());

            let mut expected = vec![escaped(system.title), escaped(system.summary)];
            expected.extend(system.points.iter().map(|p| escaped(p)));
            assert_in_order(&html, &expected);
            assert_eq!(html.matches("<li").count(), system.points.len());
        }
    }

    #[test]
    fn team_page_lists_captains_then_subteams_in_order() {
        let html = render_page(Route::resolve("#/team"), &SiteConfig::default(), LinkMode::Hash);

        let mut expected: Vec<String> = CAPTAINS.iter().map(|c| escaped(c.name)).collect();
        expected.extend(SUBTEAMS.iter().map(|t| format!("data-subteam=\"{}\"", t.key)));
        assert_in_order(&html, &expected);

        assert_eq!(html.matches("class=\"card captain\"").count(), CAPTAINS.len());
        assert_eq!(html.matches("class=\"card subteam\"").count(), SUBTEAMS.len());
        assert!(html.contains("href=\"mailto:baris@surover.org\""));
        assert!(html.contains("<title>Team | SuRover</title>"));
    }

    #[test]
    fn expos_page_orders_past_before_upcoming() {
        let html = render_page(Route::Expos, &SiteConfig::default(), LinkMode::Hash);
        let names: Vec<String> = EXPOS.iter().map(|e| escaped(e.name)).collect();
        assert_in_order(&html, &names);
        assert_eq!(html.matches("class=\"expo-image\"").count(), 2);
    }

    #[test]
    fn programs_page_shows_note_badge_once() {
        let html = render_page(Route::Programs, &SiteConfig::default(), LinkMode::Hash);
        for program in PROGRAMS {
            assert!(html.contains(&escaped(program.name)));
        }
        assert_eq!(html.matches("class=\"badge\"").count(), 1);
        assert!(html.contains("At a glance"));
    }

    #[test]
    fn sponsors_page_uses_configured_image() {
        let mut config = SiteConfig::default();
        config.assets.sponsor_image = "/img/sponsors.png".into();
        let html = render_page(Route::Sponsors, &config, LinkMode::Hash);
        assert!(html.contains("Our Sponsors"));
        assert!(html.contains("src=\"/img/sponsors.png\""));
    }

    #[test]
    fn nav_marks_current_page() {
        for route in Route::ALL {
            let html = render_page(route, &SiteConfig::default(), LinkMode::Hash);
            let link = current_nav_link(&html);
            assert!(link.contains(&format!("href=\"{}\"", route.fragment())), "{route}: {link}");
            assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        }
    }

    #[test]
    fn static_mode_links_to_files() {
        let html = render_page(Route::Expos, &SiteConfig::default(), LinkMode::Static);
        assert!(html.contains("href=\"team.html\""));
        assert!(html.contains("href=\"index.html\""));
        assert!(!html.contains("href=\"#/team\""));
        assert!(current_nav_link(&html).contains("href=\"expos.html\""));
    }

    #[test]
    fn bundle_adds_boot_script() {
        let config = SiteConfig {
            bundle: Some("/pkg/surover_web.js".into()),
            ..Default::default()
        };
        let html = render_page(Route::Home, &config, LinkMode::Hash);
        assert!(html.contains("<script type=\"module\">"));
        assert!(html.contains("/pkg/surover_web.js"));
    }

    #[test]
    fn bundled_page_carries_its_state() {
        let mut config = SiteConfig {
            bundle: Some("/pkg/surover_web.js".into()),
            copyright_year: Some(2025),
            ..Default::default()
        };
        config.hero.pause_at_secs = Some(12.5);
        config.hero.autoplay = false;
        config.brand = "Rover \"Lab\" & Co".into();

        let html = render_page(Route::Expos, &config, LinkMode::Static);
        let raw = attribute(&html, BOOT_ATTR).expect("boot attribute");
        let state = BootState::from_json(&raw).expect("boot state");

        assert_eq!(state.route, Route::Expos);
        assert_eq!(state.link_mode, LinkMode::Static);
        assert_eq!(state.config, config);
    }

    #[test]
    fn plain_page_has_no_boot_state() {
        assert!(!home().contains(BOOT_ATTR));
    }

    #[test]
    fn footer_shows_configured_year() {
        let config = SiteConfig {
            copyright_year: Some(2025),
            ..Default::default()
        };
        let html = render_page(Route::Team, &config, LinkMode::Hash);
        assert!(html.contains("© 2025 SuRover • All rights reserved."));
    }

    #[test]
    fn playback_button_reflects_autoplay() {
        let html = home();
        assert!(html.contains("Pause"));
        assert!(html.contains("autoplay"));

        let mut config = SiteConfig::default();
        config.hero.autoplay = false;
        let html = render_page(Route::Home, &config, LinkMode::Hash);
        assert!(html.contains("Play"));
        assert!(!html.contains("Pause"));
        assert!(!html.contains("autoplay"));
    }

    #[test]
    fn render_site_covers_every_route() {
        let pages = render_site(&SiteConfig::default(), LinkMode::Static);
        let files: Vec<&str> = pages.iter().map(|p| p.file_name).collect();
        assert_eq!(
            files,
            vec!["index.html", "expos.html", "sponsors.html", "programs.html", "team.html"]
        );
        assert!(pages.iter().all(|p| p.html.starts_with("<!DOCTYPE html>")));
    }
}
