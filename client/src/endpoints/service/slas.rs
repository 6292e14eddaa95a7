use std::sync::Arc;

use crate::{
    endpoints::{ConnectWiseEndpoint, EndpointNode, Gettable, Paginateable, Postable},
    models::{Count, Sla},
};

use super::{slas_id::ServiceSlasIdEndpoint, slas_info::ServiceSlasInfoEndpoint};

/// `/service/slas`
///
/// # Example
/// ```rust,ignore
/// let slas = client.service().slas;
/// let open = slas
///     .paginated(1, 25, Some(RequestParams::new().conditions("defaultFlag=true")))
///     .await?;
/// let sla = slas.id(7).get(None, None).await?;
/// ```
#[derive(Clone)]
pub struct ServiceSlasEndpoint {
    node: Arc<EndpointNode>,
    pub info: ServiceSlasInfoEndpoint,
    pub count: ServiceSlasCountEndpoint,
}

impl ServiceSlasEndpoint {
    pub fn new(parent: &Arc<EndpointNode>) -> Self {
        let node = EndpointNode::child(parent, "slas");
        Self {
            info: ServiceSlasInfoEndpoint::new(&node),
            count: ServiceSlasCountEndpoint::new(&node),
            node,
        }
    }

    /// Narrows this endpoint to a single SLA. No request is made.
    pub fn id(&self, id: i32) -> ServiceSlasIdEndpoint {
        ServiceSlasIdEndpoint::new(&self.node, id)
    }
}

impl ConnectWiseEndpoint for ServiceSlasEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasEndpoint {
    type Output = Vec<Sla>;
}

impl Paginateable for ServiceSlasEndpoint {
    type Item = Sla;
}

impl Postable for ServiceSlasEndpoint {
    type Output = Sla;
}

/// `/service/slas/count`
#[derive(Clone)]
pub struct ServiceSlasCountEndpoint {
    node: Arc<EndpointNode>,
}

impl ServiceSlasCountEndpoint {
    pub fn new(parent: &Arc<EndpointNode>) -> Self {
        Self {
            node: EndpointNode::child(parent, "count"),
        }
    }
}

impl ConnectWiseEndpoint for ServiceSlasCountEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasCountEndpoint {
    type Output = Count;
}
