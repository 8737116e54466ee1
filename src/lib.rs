//! Query SRU/CQL bibliographic services, such as the CERL Thesaurus, and
//! return the raw XML response.
//!
//! The flow is `normalize` -> `build_request_url` -> `SruClient::fetch`.
//! Errors come back as [`SruError`]; only the binary turns them into a
//! process exit code.

pub mod cli;
pub mod preview;
pub mod sru;

pub const USER_AGENT: &str = concat!("sru-query/", env!("CARGO_PKG_VERSION"));

use std::io::{self, BufRead, Write};

use cli::Cli;
use reqwest::Client;
use sru::{SruClient, SruError, SruRequest, normalize};
use tracing::{debug, info};

/// Build, send and print one SRU request.
///
/// Nothing is written to `out` unless the request succeeded.
pub async fn run(
    cli: &Cli,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), SruError> {
    let request = if cli.explain {
        SruRequest::explain(&cli.endpoint)
    } else {
        let raw = match &cli.query {
            Some(q) => q.clone(),
            None => read_query(input)?,
        };
        SruRequest::search(&cli.endpoint, &normalize(&raw))
            .with_paging(cli.start_record, cli.maximum_records)
    };
    let request = request.with_version(&cli.sru_version);

    let url = request.build_url()?;
    info!(url = %url, "querying SRU service");

    let http = Client::builder().build()?;
    let body = SruClient::new(http, cli.request_timeout())
        .fetch(&url)
        .await?;

    if cli.raw {
        out.write_all(&body)?;
    } else {
        writeln!(out, "{}", preview::preview(&body, cli.preview_bytes))?;
    }
    out.flush()?;
    Ok(())
}

/// Read one line; EOF yields an empty query.
fn read_query(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    debug!(bytes = n, "read query from stdin");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_query_takes_first_line_only() {
        let mut input = io::Cursor::new("Justus Lipsius\nsecond line\n");
        assert_eq!(read_query(&mut input).unwrap(), "Justus Lipsius\n");
    }

    #[test]
    fn read_query_at_eof_is_empty() {
        let mut input = io::Cursor::new("");
        assert_eq!(read_query(&mut input).unwrap(), "");
    }
}
