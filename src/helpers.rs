use crate::error::Error;
use crate::types::HttpClient;
use reqwest::header;
use reqwest_middleware::ClientBuilder;
use serde::de::DeserializeOwned;

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Creates a client with the given user agent. No retry middleware is attached.
pub fn get_default_middleware(user_agent_string: &'static str) -> Result<HttpClient, Error> {
    let mut headers = header::HeaderMap::new();
    
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));
    
    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()?;
    
    Ok(ClientBuilder::new(client).build())
}

/// Checks the status of a response, returning its body on success.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();
    
    check_status(status)?;
    
    Ok(response.bytes().await?)
}

fn check_status(status: reqwest::StatusCode) -> Result<(), Error> {
    match status.as_u16() {
        400..=599 => Err(Error::Http(status)),
        _ => Ok(()),
    }
}

/// Checks the response and parses its body as JSON.
pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;
    
    parses_body(&body)
}

pub(crate) fn parses_body<D>(body: &[u8]) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    match serde_json::from_slice::<D>(body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            log::debug!("Unexpected response body: {}", String::from_utf8_lossy(body));
            Err(Error::Parse(parse_error))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    
    #[test]
    fn rejects_error_statuses() {
        assert!(matches!(check_status(reqwest::StatusCode::FORBIDDEN), Err(Error::Http(_))));
        assert!(matches!(check_status(reqwest::StatusCode::BAD_GATEWAY), Err(Error::Http(_))));
        assert!(check_status(reqwest::StatusCode::OK).is_ok());
    }
    
    #[test]
    fn html_body_is_parse_error() {
        #[derive(Deserialize, Debug)]
        struct Body {
            #[allow(dead_code)]
            response: serde_json::Value,
        }
        
        let result = parses_body::<Body>(b"<html><body>Forbidden</body></html>");
        
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
