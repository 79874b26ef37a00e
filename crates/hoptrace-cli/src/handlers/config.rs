use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use hoptrace_runtime::{CONFIG_FILE, Config};
use std::path::Path;

pub fn handle_show(data_dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let exists = path.exists();
    let config = Config::load_from(&path)?;
    let rendered = toml::to_string_pretty(&config)?;
    ctx.render(presenters::present_config(&path, exists, config, rendered))
}

pub fn handle_init(data_dir: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let written = force || !path.exists();
    if written {
        Config::default().save_to(&path)?;
    }
    ctx.render(presenters::present_config_init(&path, written))
}
