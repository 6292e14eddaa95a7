//! Verb traits shared by every Manage endpoint.
//!
//! An endpoint opts into a verb by implementing the trait and naming the
//! model it returns; the request itself is provided by the default method.

use reqwest::{Method, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::future::Future;

use crate::{
    endpoints::ConnectWiseEndpoint,
    error::Result,
    models::PatchOperation,
    params::RequestParams,
    responses::PaginatedResponse,
};

/// Reads the body of a successful response into `T`.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    log::trace!("Response body: {}", String::from_utf8_lossy(&bytes));
    Ok(serde_json::from_slice(&bytes)?)
}

pub trait Gettable: ConnectWiseEndpoint + Sync {
    /// Either a single model or a `Vec` of models.
    type Output: DeserializeOwned + Send;

    /// Performs a GET request against this endpoint's path.
    ///
    /// # Arguments
    /// * `data` - Optional JSON request body
    /// * `params` - Optional query string parameters
    fn get(
        &self,
        data: Option<&Value>,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<Self::Output>> + Send {
        async move {
            let response = self.node().request(Method::GET, data, params).await?;
            parse_json(response).await
        }
    }
}

pub trait Paginateable: ConnectWiseEndpoint + Clone + Send + Sync + Sized {
    type Item: DeserializeOwned + Send + Sync;

    /// Requests one page of results.
    ///
    /// `page` and `page_size` are merged into `params`; any other keys the
    /// caller set are sent unchanged. The params are taken by value because
    /// the returned page keeps them, so that
    /// [`PaginatedResponse::next_page`] can resend them.
    fn paginated(
        &self,
        page: u32,
        page_size: u32,
        params: Option<RequestParams>,
    ) -> impl Future<Output = Result<PaginatedResponse<Self>>> + Send {
        async move {
            let params = params.unwrap_or_default().with_page(page, page_size);
            let response = self
                .node()
                .request(Method::GET, None, Some(&params))
                .await?;
            PaginatedResponse::from_response(response, self.clone(), page, page_size, params).await
        }
    }
}

pub trait Postable: ConnectWiseEndpoint + Sync {
    type Output: DeserializeOwned + Send;

    /// Performs a POST request with `data` as the JSON body.
    fn post<B>(
        &self,
        data: &B,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<Self::Output>> + Send
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = serde_json::to_value(data);
        async move {
            let body = body?;
            let response = self
                .node()
                .request(Method::POST, Some(&body), params)
                .await?;
            parse_json(response).await
        }
    }
}

pub trait Puttable: ConnectWiseEndpoint + Sync {
    type Output: DeserializeOwned + Send;

    /// Performs a PUT request replacing the resource with `data`.
    fn put<B>(
        &self,
        data: &B,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<Self::Output>> + Send
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = serde_json::to_value(data);
        async move {
            let body = body?;
            let response = self
                .node()
                .request(Method::PUT, Some(&body), params)
                .await?;
            parse_json(response).await
        }
    }
}

pub trait Patchable: ConnectWiseEndpoint + Sync {
    type Output: DeserializeOwned + Send;

    /// Performs a PATCH request with a list of JSON Patch operations.
    fn patch(
        &self,
        operations: &[PatchOperation],
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<Self::Output>> + Send {
        let body = serde_json::to_value(operations);
        async move {
            let body = body?;
            let response = self
                .node()
                .request(Method::PATCH, Some(&body), params)
                .await?;
            parse_json(response).await
        }
    }
}

pub trait Deleteable: ConnectWiseEndpoint + Sync {
    /// Performs a DELETE request. The response body is ignored.
    fn delete(
        &self,
        data: Option<&Value>,
        params: Option<&RequestParams>,
    ) -> impl Future<Output = Result<()>> + Send {
        async move {
            self.node().request(Method::DELETE, data, params).await?;
            Ok(())
        }
    }
}
