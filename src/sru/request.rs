use url::Url;

use super::SruError;
use super::query::QUERY_ENCODE_SET;

pub const DEFAULT_ENDPOINT: &str = "https://data.cerl.org/thesaurus/_sru";
pub const DEFAULT_SRU_VERSION: &str = "1.2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `searchRetrieve` with an already normalized CQL query.
    SearchRetrieve {
        query: String,
        start_record: Option<u32>,
        maximum_records: Option<u32>,
    },
    /// `explain`: server description and its searchable indexes.
    Explain,
}

/// A single SRU request against one endpoint.
#[derive(Debug, Clone)]
pub struct SruRequest {
    pub endpoint: String,
    pub version: String,
    pub operation: Operation,
}

impl SruRequest {
    pub fn search(endpoint: &str, normalized_query: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            version: DEFAULT_SRU_VERSION.to_string(),
            operation: Operation::SearchRetrieve {
                query: normalized_query.to_string(),
                start_record: None,
                maximum_records: None,
            },
        }
    }

    pub fn explain(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            version: DEFAULT_SRU_VERSION.to_string(),
            operation: Operation::Explain,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Set paging parameters. Ignored for `explain`.
    pub fn with_paging(mut self, start: Option<u32>, maximum: Option<u32>) -> Self {
        if let Operation::SearchRetrieve {
            start_record,
            maximum_records,
            ..
        } = &mut self.operation
        {
            *start_record = start;
            *maximum_records = maximum;
        }
        self
    }

    /// Build the request URL.
    ///
    /// The query value is appended verbatim: it must already be normalized,
    /// so `Url`'s own serializer is bypassed to avoid encoding it twice.
    pub fn build_url(&self) -> Result<Url, SruError> {
        let mut url = Url::parse(&self.endpoint)?;
        let mut query = format!("version={}", encode_param(&self.version));
        match &self.operation {
            Operation::Explain => query.push_str("&operation=explain"),
            Operation::SearchRetrieve {
                query: cql,
                start_record,
                maximum_records,
            } => {
                query.push_str("&operation=searchRetrieve");
                if let Some(n) = start_record {
                    query.push_str(&format!("&startRecord={n}"));
                }
                if let Some(n) = maximum_records {
                    query.push_str(&format!("&maximumRecords={n}"));
                }
                query.push_str("&query=");
                query.push_str(cql);
            }
        }
        url.set_query(Some(&query));
        Ok(url)
    }
}

/// `<endpoint>?version=1.2&operation=searchRetrieve&query=<normalized>`
pub fn build_request_url(endpoint: &str, normalized: &str) -> Result<Url, SruError> {
    SruRequest::search(endpoint, normalized).build_url()
}

fn encode_param(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, QUERY_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sru::query::{decode, normalize};

    #[test]
    fn builds_default_search_url() {
        let url = build_request_url(DEFAULT_ENDPOINT, &normalize("Erasmus")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://data.cerl.org/thesaurus/_sru?version=1.2&operation=searchRetrieve&query=erasmus"
        );
    }

    #[test]
    fn query_param_decodes_to_folded_input() {
        let url = build_request_url(DEFAULT_ENDPOINT, &normalize("Justus Lipsius")).unwrap();
        let raw = url.query().unwrap();
        let value = raw
            .split('&')
            .find_map(|kv| kv.strip_prefix("query="))
            .unwrap();
        assert_eq!(value, "justus%20lipsius");
        assert_eq!(decode(value), "justus lipsius");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("query".into(), "justus lipsius".into())));
        assert!(pairs.contains(&("operation".into(), "searchRetrieve".into())));
    }

    #[test]
    fn reserved_chars_do_not_split_parameters() {
        let url = build_request_url(DEFAULT_ENDPOINT, &normalize("a&operation=explain")).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], ("operation".into(), "searchRetrieve".into()));
        assert_eq!(pairs[2], ("query".into(), "a&operation=explain".into()));
    }

    #[test]
    fn empty_query_is_still_sent() {
        let url = build_request_url(DEFAULT_ENDPOINT, &normalize("   ")).unwrap();
        assert!(url.as_str().ends_with("&query="));
    }

    #[test]
    fn paging_parameters_precede_query() {
        let url = SruRequest::search(DEFAULT_ENDPOINT, "lipsius")
            .with_paging(Some(11), Some(10))
            .build_url()
            .unwrap();
        assert_eq!(
            url.query(),
            Some("version=1.2&operation=searchRetrieve&startRecord=11&maximumRecords=10&query=lipsius")
        );
    }

    #[test]
    fn explain_ignores_paging() {
        let url = SruRequest::explain("http://sru.gbv.de/hpb")
            .with_version("1.1")
            .with_paging(Some(1), Some(10))
            .build_url()
            .unwrap();
        assert_eq!(url.as_str(), "http://sru.gbv.de/hpb?version=1.1&operation=explain");
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let result = build_request_url("not a url", "erasmus");
        assert!(matches!(result, Err(SruError::InvalidUrl(_))));
    }
}
