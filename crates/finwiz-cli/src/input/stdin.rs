use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise piped JSON from stdin.
///
/// An interactive terminal or an empty pipe both mean "no piped input".
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut raw = String::new();
    io::stdin().lock().read_to_string(&mut raw)?;
    parse_piped(&raw)
}

fn parse_piped<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let body = raw.trim();
    if body.is_empty() {
        return Ok(None);
    }

    log::debug!("parsing {} bytes of piped JSON", body.len());
    let parsed =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse piped JSON: {e}"))?;
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finwiz_core::borrow::amortization::LoanParameters;

    #[test]
    fn test_blank_pipe_is_no_input() {
        let parsed: Option<LoanParameters> = parse_piped(" \n\t").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_piped_loan_parsed() {
        let raw = r#"{"principal": 1200, "annual_rate_percent": 0, "term_months": 12}"#;
        let parsed: LoanParameters = parse_piped(raw).unwrap().unwrap();
        assert_eq!(parsed.term_months, 12);
    }

    #[test]
    fn test_malformed_pipe_reported() {
        let err = parse_piped::<LoanParameters>("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse piped JSON"));
    }
}
