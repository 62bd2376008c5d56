//! Command dispatch.

use anyhow::{Context, Result};
use folio_core::catalog::builtin;
use folio_core::{
    core_version, default_log_level, extract_tags, format_number, init_logging, BlogView,
    ItemId, ProjectsView, SiteConfig, ViewEvent,
};
use log::info;

use crate::cli::{BlogArgs, Cli, Command, ProjectsArgs, Section};
use crate::render;

/// Runs one parsed invocation and prints its output.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let config = SiteConfig::new(&cli.base_path).context("invalid --base-path")?;
    let json = cli.json;

    let output = match cli.command {
        Command::Projects(args) => projects(&config, args, json)?,
        Command::Blog(args) => blog(args, json)?,
        Command::Tags { section } => tags(section, json)?,
        Command::Format { value } => {
            let label = format_number(value);
            if json {
                serde_json::to_string_pretty(&serde_json::json!({ "value": value, "label": label }))?
            } else {
                label
            }
        }
        Command::Site => render::site(&config, json)?,
        Command::Version => core_version().to_string(),
    };

    println!("{output}");
    Ok(())
}

fn projects(config: &SiteConfig, args: ProjectsArgs, json: bool) -> Result<String> {
    let mut view = ProjectsView::new(builtin::projects());
    for tag in args.tags {
        view.apply(ViewEvent::ToggleTag(tag));
    }
    if let Some(id) = args.open {
        view.try_open(ItemId(id))?;
    }
    info!(
        "event=cli_command module=cli status=ok command=projects visible={} open={}",
        view.visible().len(),
        view.overlay().is_open()
    );
    render::projects(&view, config, json)
}

fn blog(args: BlogArgs, json: bool) -> Result<String> {
    let mut view = BlogView::new(builtin::posts());
    for tag in args.tags {
        view.apply(ViewEvent::ToggleTag(tag));
    }
    if let Some(query) = args.query {
        view.apply(ViewEvent::SetQuery(query));
    }
    if let Some(id) = args.open {
        view.try_open(ItemId(id))?;
    }
    info!(
        "event=cli_command module=cli status=ok command=blog visible={} open={}",
        view.visible().len(),
        view.overlay().is_open()
    );
    render::blog(&view, json)
}

fn tags(section: Section, json: bool) -> Result<String> {
    let tags = match section {
        Section::Projects => extract_tags(builtin::projects().items()),
        Section::Blog => extract_tags(builtin::posts().items()),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&tags)?);
    }
    Ok(tags.join("\n"))
}
