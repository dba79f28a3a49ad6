/// Runtime flags shared by every command.
pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,
    /// Quiet level: 1 drops the chrome, 2 also drops rendered trees.
    pub quiet: u8,
}
