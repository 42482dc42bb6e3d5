//! The rpcd REST surface.

use std::fmt;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call of the rpcd API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Layouts,
    Commands,
    Status,
    /// Activate a layout. Without a display (or with the unnamed one) the
    /// single-display form `/layout/{name}` is used.
    ApplyLayout { display: Option<String>, name: String },
    StartCommand { name: String },
    StopCommand { name: String },
    MoveCommand { command: String, frame: u32 },
    Reset,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::StartCommand { .. } => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Layouts => "/layouts".to_string(),
            Endpoint::Commands => "/commands".to_string(),
            Endpoint::Status => "/status".to_string(),
            Endpoint::ApplyLayout { display, name } => match display.as_deref() {
                Some(display) if !display.is_empty() => format!("/layout/{}/{}", display, name),
                _ => format!("/layout/{}", name),
            },
            Endpoint::StartCommand { name } => format!("/command/{}", name),
            Endpoint::StopCommand { name } => format!("/stop/{}", name),
            Endpoint::MoveCommand { command, frame } => format!("/move/{}/{}", command, frame),
            Endpoint::Reset => "/reset".to_string(),
        }
    }

    /// Full URL below `base`. An empty base yields a path relative to the
    /// page origin.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}
