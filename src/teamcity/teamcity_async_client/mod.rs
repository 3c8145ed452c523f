use crate::tc_error::TcError;
use crate::teamcity::teamcity_endpoint::Endpoint;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Anything able to send a request to the TeamCity REST root and hand back
/// the body of a successful response.
#[async_trait::async_trait]
pub trait TeamCityAsyncClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<String, TcError>;
}

#[async_trait::async_trait]
impl<C: TeamCityAsyncClient + ?Sized> TeamCityAsyncClient for std::sync::Arc<C> {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<String, TcError> {
        (**self).request(method, endpoint, query).await
    }
}

/// # query
///
/// Send `endpoint` through `client` and decode the JSON body into `T`.
pub async fn query<T, E, C>(endpoint: &E, client: &C) -> Result<T, TcError>
where
    T: DeserializeOwned,
    E: Endpoint + ?Sized,
    C: TeamCityAsyncClient + ?Sized,
{
    let query = endpoint.query();
    let pairs: Option<Vec<(&str, &str)>> = query
        .as_ref()
        .map(|q| q.iter().map(|(k, v)| (*k, v.as_str())).collect());

    let body = client
        .request(endpoint.method(), &endpoint.endpoint(), pairs.as_deref())
        .await?;

    Ok(serde_json::from_str::<T>(&body)?)
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: Method,
        pub endpoint: String,
        pub query: Option<Vec<(String, String)>>,
    }

    impl RecordedRequest {
        pub fn query_value(&self, key: &str) -> Option<&str> {
            self.query
                .as_ref()?
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }
    }

    /// Replays canned responses in order and records every request.
    #[derive(Default)]
    pub struct MockTeamCityClient {
        responses: Mutex<VecDeque<Result<String, TcError>>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl MockTeamCityClient {
        pub fn with_body(body: &str) -> Self {
            let client = Self::default();
            client.push(Ok(body.to_string()));
            client
        }

        pub fn with_error(e: TcError) -> Self {
            let client = Self::default();
            client.push(Err(e));
            client
        }

        pub fn push(&self, response: Result<String, TcError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl TeamCityAsyncClient for MockTeamCityClient {
        async fn request(
            &self,
            method: Method,
            endpoint: &str,
            query: Option<&[(&str, &str)]>,
        ) -> Result<String, TcError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                endpoint: endpoint.to_string(),
                query: query.map(|q| {
                    q.iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect()
                }),
            });

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TcError::MissingParam("no canned response".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTeamCityClient;
    use super::*;
    use crate::teamcity::teamcity_endpoint::build_info::BuildInfo;
    use crate::teamcity::teamcity_model::build_list_item::BuildListItem;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_query_decodes_body() {
        let client = MockTeamCityClient::with_body(r#"{"id":5,"number":"5"}"#);

        let item: BuildListItem = query(&BuildInfo { id: 5 }, &client).await.unwrap();

        assert_eq!(item.id, 5);
        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].endpoint, "builds/id:5");
        assert_eq!(requests[0].query, None);
    }

    #[tokio::test]
    async fn test_query_malformed_body_is_decode_error() {
        let client = MockTeamCityClient::with_body("<html>login</html>");

        let result: Result<BuildListItem, TcError> = query(&BuildInfo { id: 5 }, &client).await;

        assert!(matches!(result, Err(TcError::Decode(_))));
    }

    #[tokio::test]
    async fn test_query_through_arc() {
        let client = Arc::new(MockTeamCityClient::with_body(r#"{"id":6}"#));

        let item: BuildListItem = query(&BuildInfo { id: 6 }, &client).await.unwrap();

        assert_eq!(item.id, 6);
        assert_eq!(client.requests().len(), 1);
    }
}
