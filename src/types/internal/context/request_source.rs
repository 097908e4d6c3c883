/// Source of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    /// Request arrived over HTTP
    API,

    /// Request originated from a CLI command
    CLI,

    /// Request originated from the system itself (startup seeding)
    System,
}
