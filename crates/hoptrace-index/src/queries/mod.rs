pub mod aggregate;
pub mod runs;

/// Table pair holding one kind of run history.
#[derive(Debug, Clone, Copy)]
pub struct RunTables {
    pub runs: &'static str,
    pub hops: &'static str,
}

pub const HISTORY_TABLES: RunTables = RunTables {
    runs: "requests",
    hops: "hops",
};

pub const PATH_TABLES: RunTables = RunTables {
    runs: "path_requests",
    hops: "path_hops",
};
