//! Typed client for the ConnectWise Manage REST API.
//!
//! Endpoints mirror the URL hierarchy: start from a root such as
//! [`ConnectWiseClient::service`], narrow with `.id(..)` or a named child
//! field, then call one of the verb traits re-exported here.
//!
//! ```rust,ignore
//! use connectwise::{ClientConfig, ConnectWiseClient, Gettable, Paginateable};
//!
//! let client = ConnectWiseClient::connect(&ClientConfig::from_env()).await?;
//! let slas = client.service().slas;
//! let first_page = slas.paginated(1, 25, None).await?;
//! let info = slas.info.get(None, None).await?;
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod params;
pub mod responses;

// Re-export commonly used types
pub use client::ConnectWiseClient;
pub use config::ClientConfig;
pub use endpoints::{
    ConnectWiseEndpoint, Deleteable, EndpointNode, Gettable, Paginateable, Patchable, Postable,
    Puttable,
};
pub use error::{ConnectWiseError, Result};
pub use params::{ParamValue, RequestParams};
pub use responses::{PaginatedResponse, PaginationSignal};
