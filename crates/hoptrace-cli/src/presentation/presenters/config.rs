use crate::args::hints::cmd;
use crate::presentation::view_models::{ActionViewModel, CommandResultViewModel, ConfigViewModel};
use hoptrace_runtime::Config;
use std::path::Path;

pub fn present_config(
    path: &Path,
    exists: bool,
    config: Config,
    rendered: String,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
        rendered,
    };

    if exists {
        CommandResultViewModel::info(content, "Configuration")
    } else {
        CommandResultViewModel::info(content, "Defaults (no config file)")
            .suggest("Write this file", cmd::CONFIG_INIT)
    }
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ActionViewModel> {
    if written {
        let content = ActionViewModel {
            message: format!("Wrote {}", path.display()),
            affected: None,
        };
        CommandResultViewModel::success(content, "Config written")
    } else {
        let content = ActionViewModel {
            message: format!("{} already exists (use --force to overwrite)", path.display()),
            affected: None,
        };
        CommandResultViewModel::info(content, "Config unchanged")
    }
}
