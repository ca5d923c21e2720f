//! Asset pipeline for CSS and JavaScript processing.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// File name of the site stylesheet under `assets/`.
    pub const CSS_FILE: &'static str = "site.css";

    /// File name of the site script under `assets/`.
    pub const JS_FILE: &'static str = "site.js";

    /// Generate the site CSS.
    pub fn generate_css() -> String {
        SITE_CSS.to_string()
    }

    /// Generate the site JavaScript.
    pub fn generate_js() -> String {
        SITE_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Slate background, orange accent.
const SITE_CSS: &str = r#"/* SnapPlay site theme */

:root {
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-800: #1e293b;
  --slate-600: #475569;
  --slate-500: #64748b;
  --slate-400: #94a3b8;
  --slate-300: #cbd5e1;
  --slate-200: #e2e8f0;
  --orange-400: #fb923c;
  --orange-500: #f97316;
  --orange-600: #ea580c;
  --orange-700: #c2410c;
  --amber-600: #d97706;
  --hairline: rgba(255, 255, 255, 0.1);
  --hairline-strong: rgba(255, 255, 255, 0.2);
  --glass: rgba(255, 255, 255, 0.05);
  --content-width: 72rem;
  --font-sans: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  min-height: 100vh;
  font-family: var(--font-sans);
  background: var(--slate-900);
  color: #fff;
  line-height: 1.5;
}

::selection {
  background: var(--orange-500);
  color: #fff;
}

a {
  color: inherit;
  text-decoration: none;
}

.container {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 1.5rem;
}

.icon {
  width: 1.5rem;
  height: 1.5rem;
  flex-shrink: 0;
}

.link-icon {
  width: 1.25rem;
  height: 1.25rem;
}

/* Brand */
.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--orange-500);
  display: flex;
  align-items: center;
  justify-content: center;
}

.brand-glyph {
  width: 1.25rem;
  height: 1.25rem;
  color: #fff;
}

.brand-name {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: -0.025em;
}

.brand-small .brand-mark {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 0.25rem;
}

.brand-small .brand-glyph {
  width: 0.75rem;
  height: 0.75rem;
}

.brand-small .brand-name {
  font-size: 1rem;
  color: var(--slate-300);
}

/* Navigation */
.navbar {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  backdrop-filter: blur(12px);
  background: rgba(15, 23, 42, 0.8);
  border-bottom: 1px solid var(--hairline);
}

.navbar-inner {
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-links {
  display: none;
  align-items: center;
  gap: 2rem;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--slate-300);
}

.navbar-link,
.footer-link {
  transition: color 0.15s;
}

.navbar-link:hover,
.footer-link:hover {
  color: #fff;
}

.navbar-download {
  background: #fff;
  color: var(--slate-900);
  padding: 0.5rem 1.25rem;
  border-radius: 9999px;
  font-weight: 700;
  font-size: 0.875rem;
  transition: background 0.15s;
}

.navbar-download:hover {
  background: var(--slate-200);
}

/* Hero */
.hero {
  position: relative;
  overflow: hidden;
  padding: 8rem 1.5rem 5rem;
}

.hero-glow {
  position: absolute;
  top: 0;
  left: 50%;
  transform: translateX(-50%);
  width: 800px;
  height: 500px;
  background: rgba(249, 115, 22, 0.2);
  filter: blur(120px);
  border-radius: 9999px;
  pointer-events: none;
}

.hero-inner {
  position: relative;
  z-index: 10;
  max-width: 56rem;
  margin: 0 auto;
  text-align: center;
}

[data-enter] {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity 0.5s ease-out, transform 0.5s ease-out;
}

[data-enter].is-entered {
  opacity: 1;
  transform: none;
}

.hero-badge {
  display: inline-block;
  padding: 0.25rem 0.75rem;
  margin-bottom: 1.5rem;
  border-radius: 9999px;
  background: var(--glass);
  border: 1px solid var(--hairline);
  color: var(--orange-400);
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.05em;
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  line-height: 1.25;
  margin-bottom: 1.5rem;
}

.hero-accent {
  background: linear-gradient(to right, var(--orange-400), var(--amber-600));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  max-width: 42rem;
  margin: 0 auto 2.5rem;
  font-size: 1.125rem;
  line-height: 1.625;
  color: var(--slate-400);
}

.hero-actions {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}

.cta {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem 2rem;
  border-radius: 0.75rem;
  font-size: 1.125rem;
  font-weight: 700;
  color: #fff;
}

.cta-primary {
  background: var(--orange-600);
  box-shadow: 0 10px 15px -3px rgba(249, 115, 22, 0.2);
  transition: transform 0.15s, background 0.15s;
}

.cta-primary:hover {
  background: var(--orange-700);
  transform: scale(1.05);
}

.cta-secondary {
  background: var(--glass);
  border: 1px solid var(--hairline);
  transition: background 0.15s;
}

.cta-secondary:hover {
  background: var(--hairline);
}

/* Features */
.features {
  padding: 5rem 0;
  background: rgba(30, 41, 59, 0.5);
}

.feature-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

.feature-card {
  background: var(--slate-900);
  padding: 2rem;
  border-radius: 1.5rem;
  border: 1px solid var(--hairline);
  transition: border-color 0.15s;
}

.feature-card:hover {
  border-color: var(--hairline-strong);
}

.feature-glyph {
  width: 3rem;
  height: 3rem;
  margin-bottom: 1.5rem;
  border-radius: 1rem;
  background: var(--glass);
  display: flex;
  align-items: center;
  justify-content: center;
}

.tone-yellow {
  color: #facc15;
}

.tone-blue {
  color: #60a5fa;
}

.tone-purple {
  color: #c084fc;
}

.feature-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.feature-text {
  color: var(--slate-400);
  line-height: 1.625;
}

/* Footer */
.site-footer {
  padding: 3rem 0;
  border-top: 1px solid var(--hairline);
  background: var(--slate-950);
}

.footer-inner {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
}

.footer-links {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  font-size: 0.875rem;
  color: var(--slate-500);
}

.footer-copyright {
  font-size: 0.875rem;
  color: var(--slate-600);
}

/* Privacy policy */
.page-privacy {
  color: var(--slate-300);
}

.policy {
  padding: 2rem;
}

.policy-card {
  max-width: 56rem;
  margin: 0 auto;
  padding: 2rem;
  border-radius: 1.5rem;
  background: rgba(30, 41, 59, 0.5);
  border: 1px solid var(--hairline);
}

.policy-title {
  font-size: 2.25rem;
  font-weight: 800;
  color: #fff;
  margin-bottom: 2rem;
}

.policy-section {
  margin-bottom: 2rem;
}

.policy-heading {
  font-size: 1.5rem;
  font-weight: 700;
  color: #fff;
  margin-bottom: 1rem;
}

.policy-text p,
p.policy-text {
  line-height: 1.625;
  margin-bottom: 1rem;
}

.policy-text strong {
  color: #fff;
}

.policy-list {
  list-style: disc;
  margin: 0.5rem 0 0 1.5rem;
}

.policy-list li + li {
  margin-top: 0.5rem;
}

.policy-services {
  padding: 1rem;
  border-radius: 0.75rem;
  background: rgba(15, 23, 42, 0.5);
  border: 1px solid var(--glass);
}

.policy-link {
  color: var(--orange-400);
}

.policy-link:hover {
  text-decoration: underline;
}

.policy-contact {
  color: var(--orange-400);
  font-weight: 700;
}

.policy-footer {
  margin-top: 3rem;
  padding-top: 2rem;
  border-top: 1px solid var(--hairline);
  font-size: 0.875rem;
  color: var(--slate-500);
}

/* Responsive */
@media (min-width: 640px) {
  .hero-actions {
    flex-direction: row;
  }
}

@media (min-width: 768px) {
  .navbar-links {
    display: flex;
  }

  .hero-title {
    font-size: 4.5rem;
  }

  .hero-subtitle {
    font-size: 1.25rem;
  }

  .feature-grid {
    grid-template-columns: repeat(3, 1fr);
  }

  .footer-inner {
    flex-direction: row;
  }

  .policy {
    padding: 6rem;
  }
}

@media (prefers-reduced-motion: reduce) {
  html {
    scroll-behavior: auto;
  }

  [data-enter] {
    transition: none;
  }
}
"#;

// One-shot entrance transition for elements marked `data-enter`.
const SITE_JS: &str = r#"// SnapPlay site runtime
(function() {
  'use strict';

  const targets = document.querySelectorAll('[data-enter]');
  if (targets.length === 0) return;

  // Two frames so the hidden state is painted before the transition starts
  requestAnimationFrame(() => {
    requestAnimationFrame(() => {
      targets.forEach(el => el.classList.add('is-entered'));
    });
  });
})();
"#;
