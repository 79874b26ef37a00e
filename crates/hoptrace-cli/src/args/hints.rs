pub mod cmd {
    // Run commands
    pub const RUN_EXAMPLE: &str = "hoptrace run traceroute -n example.com";
    pub const BATCH_EXAMPLE: &str = "hoptrace batch 8.8.8.8 1.1.1.1";

    // History commands
    pub const HISTORY_LIST: &str = "hoptrace history list";

    // Path commands
    pub const PATHS_RUN_EXAMPLE: &str = "hoptrace paths run traceroute example.com";
    pub const PATHS_TREE: &str = "hoptrace paths tree";
    pub const PATHS_HISTORY_LIST: &str = "hoptrace paths history list";

    // Config commands
    pub const CONFIG_INIT: &str = "hoptrace config init";
}

pub mod fmt {
    pub fn history_show(id: i64) -> String {
        format!("hoptrace history show {}", id)
    }

    pub fn paths_history_show(id: i64) -> String {
        format!("hoptrace paths history show {}", id)
    }

    pub fn history_list_limit(limit: usize) -> String {
        format!("hoptrace history list --limit {}", limit)
    }
}
