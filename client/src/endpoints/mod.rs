pub mod endpoint;
pub mod interfaces;
pub mod service;

pub use endpoint::{ConnectWiseEndpoint, EndpointNode};
pub use interfaces::{Deleteable, Gettable, Paginateable, Patchable, Postable, Puttable};
