//! Template engine for rendering the site pages.

use minijinja::{context, Environment, Error, ErrorKind, Value};
use serde::Serialize;

use snapplay_content::hero;
use snapplay_content::links::{FOOTER_LINKS, HERO_PRIMARY, HERO_SECONDARY, NAV_DOWNLOAD, NAV_LINKS};
use snapplay_content::{
    render_markdown, Icon, OutboundLink, PageMeta, PolicyBlock, COPYRIGHT, FEATURES,
    POLICY_LAST_UPDATED, POLICY_SECTIONS, SITE_NAME,
};

use crate::pages::Page;

/// Context for rendering a page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Document title and description
    pub meta: PageMeta,
    /// URL of the site stylesheet
    pub stylesheet: String,
    /// URL of the site script
    pub script: String,
    /// URL of the favicon
    pub favicon: String,
    /// Additional script URLs appended to the body
    pub scripts: Vec<String>,
    /// Absolute URL of this page, when the deployment origin is known
    pub canonical: Option<String>,
    /// JSON-LD document for the head
    pub structured_data: Option<String>,
}

/// A policy section with its markdown already rendered.
#[derive(Debug, Clone, Serialize)]
struct PolicySectionView {
    heading: &'static str,
    blocks: Vec<PolicyBlockView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PolicyBlockView {
    Paragraph {
        html: String,
    },
    List {
        items: &'static [&'static str],
    },
    Services {
        links: &'static [OutboundLink],
    },
    Contact {
        lead: &'static str,
        email: &'static str,
    },
}

impl From<&PolicyBlock> for PolicyBlockView {
    fn from(block: &PolicyBlock) -> Self {
        match *block {
            PolicyBlock::Paragraph { markdown } => PolicyBlockView::Paragraph {
                html: render_markdown(markdown),
            },
            PolicyBlock::List { items } => PolicyBlockView::List { items },
            PolicyBlock::Services { links } => PolicyBlockView::Services { links },
            PolicyBlock::Contact { lead, email } => PolicyBlockView::Contact { lead, email },
        }
    }
}

fn policy_view() -> Vec<PolicySectionView> {
    POLICY_SECTIONS
        .iter()
        .map(|section| PolicySectionView {
            heading: section.heading,
            blocks: section.body.iter().map(PolicyBlockView::from).collect(),
        })
        .collect()
}

/// `icon(name, class)` template function.
fn icon(name: &str, class: Option<&str>) -> Result<Value, Error> {
    let icon: Icon = name
        .parse()
        .map_err(|e: snapplay_content::UnknownIcon| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;

    Ok(Value::from_safe_string(icon.svg(class.unwrap_or(""))))
}

/// Template engine using minijinja.
///
/// Site content is registered as globals once; the per-render context only
/// carries document head details.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the site templates and content.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("macros.html", MACROS_TEMPLATE),
            ("landing.html", LANDING_TEMPLATE),
            ("privacy.html", PRIVACY_TEMPLATE),
        ] {
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("Failed to add {} template: {}", name, e));
        }

        env.add_function("icon", icon);

        env.add_global("site_name", SITE_NAME);
        env.add_global("copyright", COPYRIGHT);
        env.add_global("nav_links", Value::from_serialize(NAV_LINKS));
        env.add_global("nav_download", Value::from_serialize(NAV_DOWNLOAD));
        env.add_global(
            "hero",
            context! {
                badge => hero::BADGE,
                heading_lead => hero::HEADING_LEAD,
                heading_accent => hero::HEADING_ACCENT,
                heading_tail => hero::HEADING_TAIL,
                subheading => hero::SUBHEADING,
                primary => Value::from_serialize(HERO_PRIMARY),
                secondary => Value::from_serialize(HERO_SECONDARY),
            },
        );
        env.add_global("features", Value::from_serialize(FEATURES));
        env.add_global("footer_links", Value::from_serialize(FOOTER_LINKS));
        env.add_global("policy", Value::from_serialize(policy_view()));
        env.add_global("policy_last_updated", POLICY_LAST_UPDATED);

        Self { env }
    }

    /// Render a page with the given head context.
    pub fn render_page(&self, page: Page, context: &Context) -> Result<String, Error> {
        let tmpl = self.env.get_template(page.template())?;

        tmpl.render(context! {
            meta => &context.meta,
            stylesheet => &context.stylesheet,
            script => &context.script,
            favicon => &context.favicon,
            scripts => &context.scripts,
            canonical => &context.canonical,
            structured_data => &context.structured_data,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ meta.title }}</title>
  <meta name="description" content="{{ meta.description }}">
  <meta property="og:type" content="website">
  <meta property="og:site_name" content="{{ site_name }}">
  <meta property="og:title" content="{{ meta.title }}">
  <meta property="og:description" content="{{ meta.description }}">
  <meta name="twitter:card" content="summary">
  {% if canonical %}<link rel="canonical" href="{{ canonical | safe }}">
  <meta property="og:url" content="{{ canonical | safe }}">
  {% endif %}<link rel="icon" type="image/svg+xml" href="{{ favicon | safe }}">
  <link rel="stylesheet" href="{{ stylesheet | safe }}">
  <noscript><style>[data-enter]{opacity:1;transform:none}</style></noscript>
  {% if structured_data %}<script type="application/ld+json">{{ structured_data | safe }}</script>
  {% endif %}
</head>
<body class="{% block body_class %}{% endblock %}">
{% block content %}{% endblock %}
  <script src="{{ script | safe }}" defer></script>
  {% for src in scripts %}<script src="{{ src | safe }}"></script>
  {% endfor %}
</body>
</html>"##;

const MACROS_TEMPLATE: &str = r##"{% macro anchor(link, class="", leading=none, trailing=none) -%}
<a href="{{ link.href | safe }}"{% if class %} class="{{ class }}"{% endif %}{% if link.external %} target="_blank" rel="noopener noreferrer"{% endif %}>{% if leading %}{{ icon(leading, "link-icon") }}{% endif %}{{ link.label }}{% if trailing %}{{ icon(trailing, "link-icon") }}{% endif %}</a>
{%- endmacro %}

{% macro brand(size="") -%}
<div class="brand{% if size %} brand-{{ size }}{% endif %}">
  <div class="brand-mark">{{ icon("gamepad", "brand-glyph") }}</div>
  <span class="brand-name">{{ site_name }}</span>
</div>
{%- endmacro %}"##;

const LANDING_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block body_class %}page-landing{% endblock %}

{% block content %}
{% from "macros.html" import anchor, brand %}
<nav class="navbar">
  <div class="container navbar-inner">
    {{ brand() }}
    <div class="navbar-links">
      {% for link in nav_links %}{{ anchor(link, "navbar-link") }}
      {% endfor %}
    </div>
    {{ anchor(nav_download, "navbar-download") }}
  </div>
</nav>

<header class="hero">
  <div class="hero-glow"></div>
  <div class="hero-inner" data-enter>
    <span class="hero-badge">{{ hero.badge }}</span>
    <h1 class="hero-title">{{ hero.heading_lead }} <span class="hero-accent">{{ hero.heading_accent }}</span> {{ hero.heading_tail }}</h1>
    <p class="hero-subtitle">{{ hero.subheading }}</p>
    <div class="hero-actions">
      {{ anchor(hero.primary, "cta cta-primary", leading="download") }}
      {{ anchor(hero.secondary, "cta cta-secondary", trailing="chevron-right") }}
    </div>
  </div>
</header>

<section id="features" class="features">
  <div class="container feature-grid">
    {% for feature in features %}
    <article class="feature-card">
      <div class="feature-glyph">{{ icon(feature.icon, "tone-" ~ feature.tone) }}</div>
      <h3 class="feature-title">{{ feature.title }}</h3>
      <p class="feature-text">{{ feature.description }}</p>
    </article>
    {% endfor %}
  </div>
</section>

<footer class="site-footer">
  <div class="container footer-inner">
    {{ brand("small") }}
    <div class="footer-links">
      {% for link in footer_links %}{{ anchor(link, "footer-link") }}
      {% endfor %}
    </div>
    <p class="footer-copyright">{{ copyright }}</p>
  </div>
</footer>
{% endblock %}"##;

const PRIVACY_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block body_class %}page-privacy{% endblock %}

{% block content %}
{% from "macros.html" import anchor %}
<main class="policy">
  <div class="policy-card">
    <h1 class="policy-title">Privacy Policy</h1>
    {% for section in policy %}
    <section class="policy-section">
      <h2 class="policy-heading">{{ section.heading }}</h2>
      {% for block in section.blocks %}
      {% if block.kind == "paragraph" %}<div class="policy-text">{{ block.html | safe }}</div>
      {% elif block.kind == "list" %}<ul class="policy-list">
        {% for item in block.items %}<li>{{ item }}</li>
        {% endfor %}
      </ul>
      {% elif block.kind == "services" %}<div class="policy-services">
        <ul class="policy-list">
          {% for link in block.links %}<li class="policy-service">{{ anchor(link, "policy-link") }}</li>
          {% endfor %}
        </ul>
      </div>
      {% elif block.kind == "contact" %}<p class="policy-text">{{ block.lead }}<br>
        <span class="policy-contact">{{ block.email }}</span></p>
      {% endif %}
      {% endfor %}
    </section>
    {% endfor %}
    <footer class="policy-footer">Last updated: {{ policy_last_updated }}</footer>
  </div>
</main>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn context(page: Page) -> Context {
        Context {
            meta: page.meta(),
            stylesheet: "/assets/site.css".to_string(),
            script: "/assets/site.js".to_string(),
            favicon: "/favicon.svg".to_string(),
            scripts: vec![],
            canonical: None,
            structured_data: None,
        }
    }

    fn render(page: Page) -> String {
        TemplateEngine::new()
            .render_page(page, &context(page))
            .unwrap()
    }

    #[test]
    fn renders_landing_head() {
        let html = render(Page::Landing);

        assert!(html.contains("<title>SnapPlay | Offline Multiplayer Game Collection</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Play 30+ premium mini-games"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/assets/site.css\">"));
        assert!(!html.contains("rel=\"canonical\""));
    }

    #[test]
    fn renders_three_feature_cards_in_order() {
        let html = render(Page::Landing);

        assert_eq!(html.matches("class=\"feature-card\"").count(), 3);

        let zero = html.find("Zero Internet Needed").unwrap();
        let multi = html.find("Multiplayer Madness").unwrap();
        let global = html.find("Global Leaderboards").unwrap();
        assert!(zero < multi && multi < global);
    }

    #[test]
    fn renders_feature_glyphs_with_tones() {
        let html = render(Page::Landing);

        assert!(html.contains("icon icon-zap tone-yellow"));
        assert!(html.contains("icon icon-users tone-blue"));
        assert!(html.contains("icon icon-trophy tone-purple"));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = render(Page::Landing);

        let store = "href=\"https://play.google.com/store/apps/details?id=com.snapplay.offline.games\"";
        assert_eq!(html.matches(store).count(), 2);
        assert_eq!(
            html.matches("target=\"_blank\" rel=\"noopener noreferrer\"").count(),
            2
        );
    }

    #[test]
    fn hero_block_is_marked_for_entrance() {
        let html = render(Page::Landing);

        assert!(html.contains("<div class=\"hero-inner\" data-enter>"));
        assert!(html.contains("<noscript>"));
    }

    #[test]
    fn renders_six_policy_sections() {
        let html = render(Page::Privacy);

        assert_eq!(html.matches("<section class=\"policy-section\">").count(), 6);
        assert!(html.contains("<strong>SnapPlay</strong>"));
        assert!(html.contains("Last updated: February 16, 2026"));
    }

    #[test]
    fn contact_section_comes_last() {
        let html = render(Page::Privacy);

        let contact = html.find("6. Contact Us").unwrap();
        let email = html.find("support@sarankar.com").unwrap();
        let retention = html.find("5. Data Retention").unwrap();
        assert!(retention < contact && contact < email);
        assert!(html.contains("<span class=\"policy-contact\">support@sarankar.com</span>"));
    }

    #[test]
    fn renders_two_third_party_services() {
        let html = render(Page::Privacy);

        assert_eq!(html.matches("<li class=\"policy-service\">").count(), 2);
        assert!(html.contains("href=\"https://policies.google.com/privacy\""));
        assert!(html.contains("href=\"https://support.google.com/admob/answer/6128543?hl=en\""));
    }

    #[test]
    fn includes_extra_scripts() {
        let engine = TemplateEngine::new();
        let mut ctx = context(Page::Privacy);
        ctx.scripts.push("/__reload.js".to_string());

        let html = engine.render_page(Page::Privacy, &ctx).unwrap();

        assert!(html.contains("<script src=\"/__reload.js\"></script>"));
    }

    #[test]
    fn unknown_icon_is_a_template_error() {
        assert!(icon("rocket", None).is_err());
        assert!(icon("zap", Some("x")).is_ok());
    }
}
