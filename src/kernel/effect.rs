/// I/O the store asks for; executed by the fetch runtime, which answers with
/// completion actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadProjects,
    LoadListing {
        project: String,
        generation: u64,
    },
    LoadFile {
        project: String,
        path: String,
        generation: u64,
    },
    WriteFile {
        project: String,
        path: String,
        content: String,
    },
    Publish {
        project: String,
    },
}
