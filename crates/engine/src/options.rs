/// Report formats the dataset describer can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented human-readable report
    #[default]
    Text,
    /// Pretty-printed description tree
    Json,
}
