use std::sync::Arc;

use crate::{
    endpoints::{ConnectWiseEndpoint, EndpointNode, Gettable, Paginateable},
    models::{Count, SlaInfo},
};

/// `/service/slas/info`
#[derive(Clone)]
pub struct ServiceSlasInfoEndpoint {
    node: Arc<EndpointNode>,
    pub count: ServiceSlasInfoCountEndpoint,
}

impl ServiceSlasInfoEndpoint {
    pub fn new(parent: &Arc<EndpointNode>) -> Self {
        let node = EndpointNode::child(parent, "info");
        Self {
            count: ServiceSlasInfoCountEndpoint::new(&node),
            node,
        }
    }

    pub fn id(&self, id: i32) -> ServiceSlasInfoIdEndpoint {
        ServiceSlasInfoIdEndpoint::new(&self.node, id)
    }
}

impl ConnectWiseEndpoint for ServiceSlasInfoEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasInfoEndpoint {
    type Output = Vec<SlaInfo>;
}

impl Paginateable for ServiceSlasInfoEndpoint {
    type Item = SlaInfo;
}

/// `/service/slas/info/count`
#[derive(Clone)]
pub struct ServiceSlasInfoCountEndpoint {
    node: Arc<EndpointNode>,
}

impl ServiceSlasInfoCountEndpoint {
    pub fn new(parent: &Arc<EndpointNode>) -> Self {
        Self {
            node: EndpointNode::child(parent, "count"),
        }
    }
}

impl ConnectWiseEndpoint for ServiceSlasInfoCountEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasInfoCountEndpoint {
    type Output = Count;
}

/// `/service/slas/info/{id}`
#[derive(Clone)]
pub struct ServiceSlasInfoIdEndpoint {
    node: Arc<EndpointNode>,
    id: i32,
}

impl ServiceSlasInfoIdEndpoint {
    pub fn new(parent: &Arc<EndpointNode>, id: i32) -> Self {
        Self {
            node: EndpointNode::child(parent, id.to_string()),
            id,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl ConnectWiseEndpoint for ServiceSlasInfoIdEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasInfoIdEndpoint {
    type Output = SlaInfo;
}
