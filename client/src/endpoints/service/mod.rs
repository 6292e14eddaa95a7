pub mod slas;
pub mod slas_id;
pub mod slas_info;
pub mod slas_priorities;

use std::sync::Arc;

use crate::{
    client::ConnectWiseClient,
    endpoints::{ConnectWiseEndpoint, EndpointNode},
};
use slas::ServiceSlasEndpoint;

/// Root of the `/service` module.
#[derive(Clone)]
pub struct ServiceEndpoint {
    node: Arc<EndpointNode>,
    pub slas: ServiceSlasEndpoint,
}

impl ServiceEndpoint {
    pub fn new(client: ConnectWiseClient) -> Self {
        let node = EndpointNode::new(client, "service", None);
        Self {
            slas: ServiceSlasEndpoint::new(&node),
            node,
        }
    }
}

impl ConnectWiseEndpoint for ServiceEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}
