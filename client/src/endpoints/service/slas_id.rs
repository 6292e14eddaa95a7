use std::sync::Arc;

use crate::{
    endpoints::{
        ConnectWiseEndpoint, Deleteable, EndpointNode, Gettable, Paginateable, Patchable, Puttable,
    },
    models::{Sla, Usage},
};

use super::slas_priorities::ServiceSlasIdPrioritiesEndpoint;

/// `/service/slas/{id}`
#[derive(Clone)]
pub struct ServiceSlasIdEndpoint {
    node: Arc<EndpointNode>,
    id: i32,
    pub priorities: ServiceSlasIdPrioritiesEndpoint,
    pub usages: ServiceSlasIdUsagesEndpoint,
}

impl ServiceSlasIdEndpoint {
    pub fn new(parent: &Arc<EndpointNode>, id: i32) -> Self {
        let node = EndpointNode::child(parent, id.to_string());
        Self {
            priorities: ServiceSlasIdPrioritiesEndpoint::new(&node),
            usages: ServiceSlasIdUsagesEndpoint::new(&node),
            node,
            id,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl ConnectWiseEndpoint for ServiceSlasIdEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasIdEndpoint {
    type Output = Sla;
}

impl Puttable for ServiceSlasIdEndpoint {
    type Output = Sla;
}

impl Patchable for ServiceSlasIdEndpoint {
    type Output = Sla;
}

impl Deleteable for ServiceSlasIdEndpoint {}

/// `/service/slas/{id}/usages`
#[derive(Clone)]
pub struct ServiceSlasIdUsagesEndpoint {
    node: Arc<EndpointNode>,
}

impl ServiceSlasIdUsagesEndpoint {
    pub fn new(parent: &Arc<EndpointNode>) -> Self {
        Self {
            node: EndpointNode::child(parent, "usages"),
        }
    }
}

impl ConnectWiseEndpoint for ServiceSlasIdUsagesEndpoint {
    fn node(&self) -> &Arc<EndpointNode> {
        &self.node
    }
}

impl Gettable for ServiceSlasIdUsagesEndpoint {
    type Output = Vec<Usage>;
}

impl Paginateable for ServiceSlasIdUsagesEndpoint {
    type Item = Usage;
}
