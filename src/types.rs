/// Host operating system family
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Unix,
        }
    }

    /// Chrome user-agent matching the host family
    pub fn default_user_agent(&self) -> &'static str {
        match self {
            Platform::Windows => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"
            }
            Platform::MacOs => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"
            }
            Platform::Unix => {
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"
            }
        }
    }
}

/// Values forwarded to streamlink on every launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub origin: &'static str,
    pub referer: &'static str,
    pub retry_open: u32,
    pub retry_streams: u32,
    pub network_caching_ms: u32,
    pub quality: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            origin: "https://iframe.mediadelivery.net",
            referer: "https://iframe.mediadelivery.net/",
            retry_open: 3,
            retry_streams: 3,
            network_caching_ms: 1500,
            quality: "best".to_string(),
        }
    }
}
