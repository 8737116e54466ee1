use std::time::Duration;

use clap::Parser;

use crate::preview::PREVIEW_BYTES;
use crate::sru::request::{DEFAULT_ENDPOINT, DEFAULT_SRU_VERSION};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(
    name = "sru-query",
    version,
    about = "Query an SRU/CQL service (default: CERL Thesaurus) and preview the XML response"
)]
pub struct Cli {
    /// Search term; read from stdin when omitted
    pub query: Option<String>,

    /// SRU base URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// SRU protocol version
    #[arg(long, default_value = DEFAULT_SRU_VERSION)]
    pub sru_version: String,

    /// First record to return (1-based)
    #[arg(long)]
    pub start_record: Option<u32>,

    /// Number of records per response
    #[arg(long)]
    pub maximum_records: Option<u32>,

    /// Send operation=explain instead of a search
    #[arg(long, conflicts_with_all = ["query", "start_record", "maximum_records"])]
    pub explain: bool,

    /// Request timeout in seconds, 0 waits indefinitely
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Number of response bytes to preview
    #[arg(long, default_value_t = PREVIEW_BYTES)]
    pub preview_bytes: usize,

    /// Write the full response body instead of a preview
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}
