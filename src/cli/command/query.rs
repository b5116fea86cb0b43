//! Query time-series readings and print the raw response body.

use anyhow::Result;
use tracing::info;

use crate::{
    cli::{create_spinner, QueryOptions},
    endpoints::Endpoints,
    fetch, request,
};

/// Fetches time-series readings for the given options and returns the raw
/// body. CDEC answers with JSON, which is passed through untouched.
pub async fn query(endpoints: &Endpoints, options: &QueryOptions) -> Result<String> {
    let url = request::query_url(endpoints, options)?;
    info!("Using the following url for retrieving data: {url}");

    let bar = create_spinner("Retrieving readings...".to_string());
    let body = fetch::fetch_text(&url).await?;
    bar.finish_and_clear();

    Ok(body)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use mockito::{Matcher, Server};
    use reqwest::StatusCode;

    use super::*;
    use crate::fetch::FetchError;

    #[tokio::test]
    async fn should_return_body_verbatim() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/dynamicapp/req/JSONDataServlet")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Stations".into(), "WLK".into()),
                Matcher::UrlEncoded("SensorNums".into(), "01".into()),
                Matcher::UrlEncoded("dur_code".into(), "e".into()),
                Matcher::UrlEncoded("Start".into(), "2024-02-01".into()),
                Matcher::UrlEncoded("End".into(), "2024-02-02".into()),
            ]))
            .with_status(200)
            .with_body(r#"[{"stationId":"WLK","value":4.2}]"#)
            .create_async()
            .await;

        let endpoints = Endpoints {
            query: format!("{}/dynamicapp/req/JSONDataServlet", server.url()),
            ..Endpoints::default()
        };
        let options = QueryOptions {
            station: "WLK".to_string(),
            sensor: "01".to_string(),
            duration: "e".to_string(),
            start_date: "2024-02-01".to_string(),
            end_date: "2024-02-02".to_string(),
        };

        let body = query(&endpoints, &options).await.unwrap();

        assert_eq!(body, r#"[{"stationId":"WLK","value":4.2}]"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn should_surface_transport_failure_as_fetch_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/dynamicapp/req/JSONDataServlet")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let endpoints = Endpoints {
            query: format!("{}/dynamicapp/req/JSONDataServlet", server.url()),
            ..Endpoints::default()
        };

        let error = query(&endpoints, &QueryOptions::default())
            .await
            .unwrap_err();

        match error.downcast_ref::<FetchError>() {
            Some(FetchError::Status(status)) => {
                assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
