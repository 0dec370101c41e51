use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Base URL of the shop API. Falls back to STORELINE_API_URL, then the
    /// built-in default.
    #[clap(short = 'a', long, help = "shop API base URL")]
    api_url: Option<String>,

    /// Base URL that product image paths are resolved against. Falls back to
    /// STORELINE_CDN_URL, then the built-in default.
    #[clap(short = 'c', long, help = "image CDN base URL")]
    cdn_url: Option<String>,

    /// Write logs to this file. Logging is off when omitted, since the
    /// terminal is taken by the UI.
    #[clap(short = 'l', long, help = "log file path")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {
    api_url: Option<String>,
    cdn_url: Option<String>,
    log_file: Option<PathBuf>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn cdn_url(&self) -> Option<&str> {
        self.cdn_url.as_deref()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            api_url: args.api_url,
            cdn_url: args.cdn_url,
            log_file: args.log_file,
        }
    }
}
