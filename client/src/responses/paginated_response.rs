use futures::{Stream, TryStreamExt, stream};
use reqwest::{Response, header::LINK};
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{ConnectWiseEndpoint, Paginateable},
    error::{ConnectWiseError, Result},
    params::RequestParams,
    responses::PageLinks,
};

/// How a page decides whether another page follows it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationSignal {
    /// Only a `rel="next"` entry in the `Link` header counts.
    LinkHeader,
    /// A page holding exactly `page_size` items is assumed to have a successor.
    FullPage,
    /// Use the `Link` header when the server sent one, else the full-page rule.
    #[default]
    LinkHeaderOrFullPage,
}

/// One page of results from a [`Paginateable`] endpoint.
///
/// Holds everything needed to request the following page: the endpoint it
/// came from, the page number and size, and the query parameters used.
pub struct PaginatedResponse<E: Paginateable> {
    data: Vec<E::Item>,
    endpoint: E,
    page: u32,
    page_size: u32,
    params: RequestParams,
    links: Option<PageLinks>,
    signal: PaginationSignal,
}

impl<E: Paginateable> PaginatedResponse<E> {
    pub(crate) async fn from_response(
        response: Response,
        endpoint: E,
        page: u32,
        page_size: u32,
        params: RequestParams,
    ) -> Result<Self> {
        let links = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(PageLinks::parse);
        let data = crate::endpoints::interfaces::parse_json(response).await?;
        Ok(Self::from_parts(data, endpoint, page, page_size, params, links))
    }

    pub(crate) fn from_parts(
        data: Vec<E::Item>,
        endpoint: E,
        page: u32,
        page_size: u32,
        params: RequestParams,
        links: Option<PageLinks>,
    ) -> Self {
        let signal = endpoint.node().client().pagination_signal();
        Self {
            data,
            endpoint,
            page,
            page_size,
            params,
            links,
            signal,
        }
    }

    /// Items of the current page.
    pub fn data(&self) -> &[E::Item] {
        &self.data
    }

    pub fn into_data(self) -> Vec<E::Item> {
        self.data
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Query parameters this page was requested with, including `page` and `pageSize`.
    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn links(&self) -> Option<&PageLinks> {
        self.links.as_ref()
    }

    /// Overrides the signal taken from the client configuration.
    pub fn with_signal(mut self, signal: PaginationSignal) -> Self {
        self.signal = signal;
        self
    }

    pub fn has_next_page(&self) -> bool {
        let full_page = self.data.len() == self.page_size as usize;
        let link_next = self.links.as_ref().map(|links| links.next.is_some());
        match self.signal {
            PaginationSignal::LinkHeader => link_next.unwrap_or(false),
            PaginationSignal::FullPage => full_page,
            PaginationSignal::LinkHeaderOrFullPage => link_next.unwrap_or(full_page),
        }
    }

    pub fn has_prev_page(&self) -> bool {
        match &self.links {
            Some(links) => links.prev.is_some(),
            None => self.page > 1,
        }
    }

    /// Requests the page after this one.
    ///
    /// The request is made even if [`has_next_page`](Self::has_next_page) is
    /// false; the server then answers with an empty page. When the `next`
    /// link carries a forward-only `pageId`, it is sent along; otherwise any
    /// `pageId` this page was requested with is dropped.
    ///
    /// # Errors
    /// Returns `ConnectWiseError::PageOverflow` when this is page `u32::MAX`.
    pub async fn next_page(&self) -> Result<PaginatedResponse<E>> {
        let next = self
            .page
            .checked_add(1)
            .ok_or(ConnectWiseError::PageOverflow(self.page))?;

        let mut params = self.params.clone();
        let next_page_id = self
            .links
            .as_ref()
            .and_then(|links| links.next.as_ref())
            .and_then(|next| next.page_id);
        match next_page_id {
            Some(page_id) => params.insert("pageId", page_id),
            None => {
                params.remove("pageId");
            }
        }
        self.endpoint
            .paginated(next, self.page_size, Some(params))
            .await
    }

    /// Streams every item from this page onward.
    ///
    /// A page's items are yielded before the following page is requested, and
    /// that request is only made once the caller has consumed them.
    pub fn into_stream(self) -> impl Stream<Item = Result<E::Item>> + Send {
        // the flag marks a page whose items were already yielded
        stream::try_unfold(Some((self, false)), |state| async move {
            let Some((page, consumed)) = state else {
                return Ok(None);
            };
            let mut page = if consumed {
                page.next_page().await?
            } else {
                page
            };
            let more = page.has_next_page() && !page.data.is_empty();
            let items = std::mem::take(&mut page.data);
            let items = stream::iter(items.into_iter().map(Ok::<_, ConnectWiseError>));
            Ok::<_, ConnectWiseError>(Some((items, more.then_some((page, true)))))
        })
        .try_flatten()
    }

    /// Collects every item from this page onward.
    pub async fn all(self) -> Result<Vec<E::Item>> {
        self.into_stream().try_collect().await
    }
}
