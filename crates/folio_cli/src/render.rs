//! Text and JSON projections of views and static sections.

use anyhow::Result;
use folio_core::catalog::{builtin, profile};
use folio_core::model::profile::{
    About, Contact, Footer, Hero, Milestone, NavLink, School, SkillGroup,
};
use folio_core::{format_number, BlogView, MediaKind, Post, Project, ProjectsView, SiteConfig};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
struct TagChip<'a> {
    name: &'a str,
    active: bool,
}

#[derive(Debug, Serialize)]
struct MediaView {
    kind: MediaKind,
    /// Absolute asset path; `None` renders a placeholder.
    src: Option<String>,
    placeholder: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ProjectCard<'a> {
    id: u32,
    title: &'a str,
    description: &'a str,
    tags: &'a [String],
    media: MediaView,
}

#[derive(Debug, Serialize)]
struct ProjectsPage<'a> {
    all_active: bool,
    tags: Vec<TagChip<'a>>,
    items: Vec<ProjectCard<'a>>,
    open: Option<ProjectCard<'a>>,
}

#[derive(Debug, Serialize)]
struct PostCard<'a> {
    id: u32,
    title: &'a str,
    date: &'a str,
    minutes: u32,
    tags: &'a [String],
    excerpt: &'a str,
}

#[derive(Debug, Serialize)]
struct BlogPage<'a> {
    query: &'a str,
    all_active: bool,
    tags: Vec<TagChip<'a>>,
    items: Vec<PostCard<'a>>,
    open: Option<PostCard<'a>>,
}

fn project_card<'a>(project: &'a Project, config: &SiteConfig) -> ProjectCard<'a> {
    let src = project
        .media
        .src
        .as_deref()
        .map(|asset| config.resolve_asset(asset));
    let placeholder = src.is_none().then(|| project.media.placeholder_label());
    ProjectCard {
        id: project.id.0,
        title: &project.title,
        description: &project.description,
        tags: &project.tags,
        media: MediaView {
            kind: project.media.kind,
            src,
            placeholder,
        },
    }
}

fn post_card(post: &Post) -> PostCard<'_> {
    PostCard {
        id: post.id.0,
        title: &post.title,
        date: &post.date,
        minutes: post.minutes,
        tags: &post.tags,
        excerpt: &post.excerpt,
    }
}

fn tag_chips<'a>(tags: &'a [String], is_active: impl Fn(&str) -> bool) -> Vec<TagChip<'a>> {
    tags.iter()
        .map(|tag| TagChip {
            name: tag.as_str(),
            active: is_active(tag.as_str()),
        })
        .collect()
}

fn write_chips(out: &mut String, all_active: bool, chips: &[TagChip<'_>]) -> Result<()> {
    let mark = |active: bool| if active { "*" } else { " " };
    write!(out, "[{}All]", mark(all_active))?;
    for chip in chips {
        write!(out, " [{}{}]", mark(chip.active), chip.name)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_media(out: &mut String, media: &MediaView) -> Result<()> {
    let kind = match media.kind {
        MediaKind::Image => "image",
        MediaKind::Video => "video",
    };
    match (&media.src, media.placeholder) {
        (Some(src), _) => writeln!(out, "    {kind}: {src}")?,
        (None, Some(label)) => writeln!(out, "    {kind}: <{label}>")?,
        (None, None) => {}
    }
    Ok(())
}

/// Renders the project gallery with its filter chips and overlay.
pub fn projects(view: &ProjectsView, config: &SiteConfig, json: bool) -> Result<String> {
    let page = ProjectsPage {
        all_active: view.is_unfiltered(),
        tags: tag_chips(view.tags(), |tag| view.is_tag_active(tag)),
        items: view
            .visible()
            .into_iter()
            .map(|project| project_card(project, config))
            .collect(),
        open: view.open_item().map(|project| project_card(project, config)),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }

    let mut out = String::new();
    writeln!(out, "Projects")?;
    write_chips(&mut out, page.all_active, &page.tags)?;
    if page.items.is_empty() {
        writeln!(out, "  (no projects match)")?;
    }
    for card in &page.items {
        writeln!(out, "  #{} {}", card.id, card.title)?;
        writeln!(out, "    {}", card.description)?;
        writeln!(out, "    tags: {}", card.tags.join(", "))?;
        write_media(&mut out, &card.media)?;
    }
    if let Some(card) = &page.open {
        writeln!(out, "Open: {}", card.title)?;
        write_media(&mut out, &card.media)?;
    }
    Ok(out.trim_end().to_string())
}

/// Renders the blog list with its search box, chips, and reading overlay.
pub fn blog(view: &BlogView, json: bool) -> Result<String> {
    let page = BlogPage {
        query: view.filter().query(),
        all_active: view.is_unfiltered(),
        tags: tag_chips(view.tags(), |tag| view.is_tag_active(tag)),
        items: view.visible().into_iter().map(post_card).collect(),
        open: view.open_item().map(post_card),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }

    let mut out = String::new();
    writeln!(out, "Blog")?;
    writeln!(out, "search: \"{}\"", page.query)?;
    write_chips(&mut out, page.all_active, &page.tags)?;
    if page.items.is_empty() {
        writeln!(out, "  (no posts match)")?;
    }
    for card in &page.items {
        writeln!(
            out,
            "  #{} {}  ({} • {} min read • {})",
            card.id,
            card.title,
            card.date,
            card.minutes,
            card.tags.join(", ")
        )?;
        writeln!(out, "    {}", card.excerpt)?;
    }
    if let Some(card) = &page.open {
        writeln!(out, "Reading: {} ({})", card.title, card.date)?;
        writeln!(out, "  {}", card.excerpt)?;
    }
    Ok(out.trim_end().to_string())
}

#[derive(Debug, Serialize)]
struct SitePage<'a> {
    nav: &'a [NavLink],
    hero: &'a Hero,
    hero_video: String,
    about: &'a About,
    portrait: String,
    projects: usize,
    posts: usize,
    skills: &'a [SkillGroup],
    academics: &'a [School],
    timeline: &'a [Milestone],
    cta: &'a str,
    contact: &'a Contact,
    footer: &'a Footer,
}

/// Renders every static section in page order.
pub fn site(config: &SiteConfig, json: bool) -> Result<String> {
    let projects = builtin::projects();
    let posts = builtin::posts();
    let page = SitePage {
        nav: profile::NAV_LINKS,
        hero: &profile::HERO,
        hero_video: config.resolve_asset(profile::HERO.video_asset),
        about: &profile::ABOUT,
        portrait: config.resolve_asset(profile::ABOUT.portrait_asset),
        projects: projects.len(),
        posts: posts.len(),
        skills: profile::SKILL_GROUPS,
        academics: profile::SCHOOLS,
        timeline: profile::MILESTONES,
        cta: profile::CTA_HEADING,
        contact: &profile::CONTACT,
        footer: &profile::FOOTER,
    };
    if json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }

    let mut out = String::new();
    let nav: Vec<String> = page
        .nav
        .iter()
        .map(|link| format!("{} ({})", link.label, link.href))
        .collect();
    writeln!(out, "{} | {}", profile::OWNER, nav.join(" | "))?;

    writeln!(out, "\n{}", page.hero.kicker)?;
    writeln!(out, "{}", page.hero.headline_words().join(" "))?;
    writeln!(out, "{}", page.hero.intro)?;
    writeln!(out, "video: {}", page.hero_video)?;

    writeln!(
        out,
        "\nProjects: {} in gallery (`folio projects`)",
        format_number(page.projects as u64)
    )?;

    writeln!(out, "\nAbout Me: {}", page.about.heading)?;
    writeln!(out, "portrait: {}", page.portrait)?;
    for paragraph in page.about.paragraphs {
        writeln!(out, "{paragraph}")?;
    }
    for highlight in page.about.highlights {
        writeln!(out, "{}: {}", highlight.label, highlight.value)?;
    }

    writeln!(out, "\nSkills & Tools")?;
    for group in page.skills {
        writeln!(out, "  {}: {}", group.name, group.items.join(", "))?;
    }

    writeln!(out, "\nAcademics")?;
    for school in page.academics {
        writeln!(out, "  {}: {} ({})", school.level, school.name, school.location)?;
    }

    writeln!(
        out,
        "\nBlog: {} posts (`folio blog`)",
        format_number(page.posts as u64)
    )?;

    writeln!(out, "\nTimeline")?;
    for milestone in page.timeline {
        writeln!(out, "  {} {}: {}", milestone.date, milestone.title, milestone.text)?;
    }

    writeln!(out, "\n{}", page.cta)?;

    writeln!(out, "\nContact")?;
    writeln!(out, "  Email: {}", page.contact.email)?;
    writeln!(out, "  {}", page.contact.location)?;
    writeln!(out, "  form: {}", page.contact.form_fields.join(", "))?;

    writeln!(out, "\n© by {} | {}", page.footer.owner, page.footer.socials.join(" "))?;
    Ok(out.trim_end().to_string())
}
