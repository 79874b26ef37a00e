use hoptrace_runtime::Config;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    /// False when defaults are shown because no file exists yet.
    pub exists: bool,
    pub config: Config,
    #[serde(skip)]
    pub rendered: String,
}
