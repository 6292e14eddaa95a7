use std::sync::Arc;

use crate::{
    endpoints::{
        ConnectWiseEndpoint, Deleteable, EndpointNode, Gettable, Paginateable, Patchable,
        Postable, Puttable,
    },
    models::{Count, SlaPriority},
};

/// `/service/slas/{id}/priorities`
#[derive(Clone)]
pub struct ServiceSlasIdPrioritiesEndpoint {
    node: Arc<EndpointNode>,
    pub count: ServiceSlasIdPrioritiesCountEndpoint,
}

impl ServiceSlasIdPrioritiesEndpoint {
    pub fn new(parent: &Arc<EndpointNode>) -> Self {
        let node = EndpointNode::child(parent, "priorities");
        Self {
            count: ServiceSlasIdPrioritiesCountEndpoint::new(&node),
            node,
        }
    }

    pub fn id(&self, id: i32) -> ServiceSlasIdPrioritiesIdEndpoint {
        ServiceSlasIdPrioritiesIdEndpoint::new(&self.node, id)
    }
}

impl ConnectWiseEndpoint for ServiceSlasIdPrioritiesEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasIdPrioritiesEndpoint {
    type Output = Vec<SlaPriority>;
}

impl Paginateable for ServiceSlasIdPrioritiesEndpoint {
    type Item = SlaPriority;
}

impl Postable for ServiceSlasIdPrioritiesEndpoint {
    type Output = SlaPriority;
}

/// `/service/slas/{id}/priorities/count`
#[derive(Clone)]
pub struct ServiceSlasIdPrioritiesCountEndpoint {
    node: Arc<EndpointNode>,
}

impl ServiceSlasIdPrioritiesCountEndpoint {
    pub fn new(parent: &Arc<EndpointNode>) -> Self {
        Self {
            node: EndpointNode::child(parent, "count"),
        }
    }
}

impl ConnectWiseEndpoint for ServiceSlasIdPrioritiesCountEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasIdPrioritiesCountEndpoint {
    type Output = Count;
}

/// `/service/slas/{id}/priorities/{id}`
#[derive(Clone)]
pub struct ServiceSlasIdPrioritiesIdEndpoint {
    node: Arc<EndpointNode>,
    id: i32,
}

impl ServiceSlasIdPrioritiesIdEndpoint {
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

impl ConnectWiseEndpoint for ServiceSlasIdPrioritiesIdEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasIdPrioritiesIdEndpoint {
    type Output = SlaPriority;
}

impl Puttable for ServiceSlasIdPrioritiesIdEndpoint {
    type Output = SlaPriority;
}

impl Patchable for ServiceSlasIdPrioritiesIdEndpoint {
    type Output = SlaPriority;
}

impl Deleteable for ServiceSlasIdPrioritiesIdEndpoint {}
