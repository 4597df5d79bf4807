/// Listening address of the store. The address is fixed: nothing reads it
/// from flags, the environment or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to listen on (all interfaces).
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
