//! CSS for the site.
//!
//! Dark theme, one accent color, a 1120px container. The stylesheet is
//! inlined into every prerendered document so pages work offline.
//!
//! To extend it:
//!
//! ```rust
//! use surover_site::styles::SITE_CSS;
//!
//! let custom = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", SITE_CSS, custom);
//! assert!(combined.contains(".hero-title"));
//! ```

/// Complete stylesheet, inlined in `<head>`.
///
/// Kept free of `<`, `>` and `&` so it survives text escaping in SSR output.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #0a0a0a;
    --bg-raised: rgba(23, 23, 23, 0.5);
    --bg-chip: rgba(38, 38, 38, 0.7);
    --border: #262626;
    --text: #fafafa;
    --text-dim: #d4d4d4;
    --text-muted: #a3a3a3;
    --accent: #6ee7b7;
    --radius: 24px;
    --container-max: 1120px;
    --font: 'Inter', system-ui, -apple-system, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
}

a { color: inherit; text-decoration: none; }
a:hover { opacity: 0.85; }
img { display: block; max-width: 100%; }

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}
.container.narrow { max-width: 880px; }
.centered { text-align: center; }

/* Header */
.site-header {
    position: fixed;
    top: 0;
    z-index: 50;
    width: 100%;
    backdrop-filter: blur(8px);
    background: rgba(23, 23, 23, 0.6);
}
.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 12px;
    padding-bottom: 12px;
}
.brand { font-size: 20px; font-weight: 600; letter-spacing: -0.01em; }
.site-nav { display: flex; gap: 24px; }
.nav-link { font-size: 14px; opacity: 0.8; }
.nav-link.active { opacity: 1; border-bottom: 1px solid var(--accent); }
.menu-button {
    display: none;
    background: none;
    border: 0;
    color: var(--text);
    cursor: pointer;
}

@media (max-width: 768px) {
    .menu-button { display: inline-flex; }
    .site-nav {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        gap: 12px;
        padding: 16px;
        background: var(--bg);
        border-bottom: 1px solid var(--border);
    }
    .site-nav.open { display: flex; }
}

/* Hero */
.hero {
    position: relative;
    height: 88vh;
    overflow: hidden;
}
.hero-video {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.8;
}
.hero-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, var(--bg), rgba(10, 10, 10, 0.3), transparent);
}
.hero-content {
    position: relative;
    z-index: 10;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    height: 100%;
    padding-bottom: 64px;
}
.hero-title { max-width: 48rem; margin: 0; font-size: clamp(2.25rem, 5vw, 3.75rem); }
.hero-description { max-width: 42rem; color: var(--text-dim); }
.hero-actions { display: flex; align-items: center; gap: 12px; margin-top: 24px; }
.hero-link { display: inline-flex; align-items: center; font-size: 14px; opacity: 0.9; }

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 16px;
    border: 0;
    border-radius: 16px;
    font-size: 16px;
    font-weight: 500;
    cursor: pointer;
}
.btn-primary { background: #fff; color: #171717; }
.btn-primary:hover { background: #e5e5e5; }

/* Sections */
.section { padding: 64px 0; }
.section-title { font-size: 28px; font-weight: 600; margin: 0 0 12px; }
.section-subtitle { font-size: 22px; font-weight: 600; margin: 0; }
.section-text { color: var(--text-dim); max-width: 48rem; }
.section-text.small { font-size: 14px; }
.section-heading { display: flex; align-items: flex-end; justify-content: space-between; margin-bottom: 32px; }
.section-link { font-size: 14px; opacity: 0.8; }

.card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--bg-raised);
    padding: 20px;
}

.about-grid { display: grid; gap: 40px; align-items: center; grid-template-columns: 1fr 1fr; }
.about-photo { aspect-ratio: 16 / 9; width: 100%; object-fit: cover; border-radius: 16px; }
.tag-list { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 24px; }
.tag { font-size: 12px; padding: 4px 12px; border-radius: 999px; background: var(--bg-chip); color: var(--text-dim); }

.rover-grid { display: grid; gap: 24px; grid-template-columns: 1fr 1fr; margin-top: 24px; }
.rover-image { height: 256px; width: 100%; object-fit: cover; border-radius: 16px; }
.rover-caption { margin-top: 12px; font-size: 14px; color: var(--text-dim); }
.rover-name { font-weight: 500; color: var(--text); }

.systems-grid { display: grid; gap: 24px; grid-template-columns: 260px 1fr; }
.system-tabs { display: flex; flex-direction: column; gap: 12px; }
.system-tab {
    text-align: left;
    padding: 12px 16px;
    border: 0;
    border-radius: 16px;
    background: #262626;
    color: var(--text);
    font-size: 14px;
    cursor: pointer;
}
.system-tab.active { background: #fff; color: #171717; }
.system-title { font-size: 18px; font-weight: 600; margin: 0; }

.point-list {
    display: grid;
    gap: 8px;
    grid-template-columns: 1fr 1fr;
    padding: 0;
    margin: 16px 0 0;
    list-style: none;
}
.point { font-size: 14px; padding: 8px 12px; border-radius: 8px; background: var(--bg-chip); color: var(--text-dim); }

/* Pages */
.page { min-height: 100vh; }
.page-expos, .page-sponsors, .page-programs, .page-team { padding-top: 112px; padding-bottom: 80px; }
.page-title { font-size: 30px; font-weight: 700; margin: 0 0 16px; }

.expo-group { margin-bottom: 64px; }
.expo { margin-bottom: 40px; }
.expo-name { font-size: 20px; font-weight: 600; margin: 0; }
.expo-image, .sponsor-image { width: 100%; margin-top: 16px; border-radius: 16px; }

.program-grid { display: grid; gap: 16px; grid-template-columns: 1fr 1fr; margin-top: 40px; }
.program-head { display: flex; align-items: flex-start; justify-content: space-between; gap: 16px; }
.program-name { font-size: 18px; font-weight: 600; margin: 0; }
.badge {
    white-space: nowrap;
    font-size: 12px;
    padding: 4px 12px;
    border-radius: 999px;
    color: var(--accent);
    background: rgba(52, 211, 153, 0.1);
    border: 1px solid rgba(6, 78, 59, 0.5);
}
.glance { margin-top: 40px; }
.glance-title { font-size: 16px; font-weight: 600; margin: 0; }

.captain-grid { display: grid; gap: 24px; grid-template-columns: 1fr 1fr; }
.captain { display: flex; align-items: center; gap: 16px; }
.captain-name { font-size: 18px; font-weight: 600; }
.captain-email { font-size: 14px; color: var(--text-dim); }
.team-subteams { margin-top: 48px; }
.subteam-grid { display: grid; gap: 16px; grid-template-columns: repeat(3, 1fr); }
.subteam { text-align: center; }
.subteam-title { font-weight: 600; }
.avatar { width: 80px; height: 80px; border-radius: 50%; object-fit: cover; }
.avatar.placeholder { width: 64px; height: 64px; margin: 0 auto 12px; background: var(--bg-chip); }

/* Footer */
.footer { border-top: 1px solid var(--border); padding: 40px 0; }
.footer-inner { display: flex; align-items: center; justify-content: space-between; gap: 24px; }
.footer-label { font-size: 14px; color: var(--text-muted); margin: 0; }
.footer-links { display: flex; gap: 12px; }
.social-link { display: inline-flex; padding: 8px; border-radius: 50%; background: #262626; }
.social-link:hover { background: #404040; }
.footer-copyright { margin: 24px 0 0; text-align: center; font-size: 12px; color: #737373; }

@media (max-width: 768px) {
    .about-grid, .rover-grid, .systems-grid, .program-grid, .captain-grid, .point-list { grid-template-columns: 1fr; }
    .subteam-grid { grid-template-columns: 1fr 1fr; }
    .footer-inner { flex-direction: column; }
}
"#;
