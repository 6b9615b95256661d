/// Application state proper: the selection and its generation bookkeeping.
/// The rendered document is owned by the shell; this is what survives a
/// rebuild.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub projects: Vec<String>,
    pub current_project: String,
    pub current_file: String,
    /// Bumped on every project selection; listing responses carrying an
    /// older value are stale.
    pub listing_generation: u64,
    /// Bumped on every file open; content responses carrying an older value
    /// are stale.
    pub file_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
