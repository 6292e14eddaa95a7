use reqwest::{Method, Response};
use serde_json::Value;
use std::sync::Arc;

use crate::{client::ConnectWiseClient, error::Result, params::RequestParams};

/// One segment of a Manage resource path.
///
/// Nodes form a chain from leaf to root through shared parent links. The
/// full path is always recomputed from that chain, so a node never changes
/// the path of another.
pub struct EndpointNode {
    client: ConnectWiseClient,
    segment: String,
    parent: Option<Arc<EndpointNode>>,
}

impl EndpointNode {
    /// Creates a node. Performs no I/O.
    pub fn new<S: Into<String>>(
        client: ConnectWiseClient,
        segment: S,
        parent: Option<Arc<EndpointNode>>,
    ) -> Arc<Self> {
        let segment = segment.into();
        debug_assert!(!segment.is_empty(), "endpoint segment cannot be empty");
        Arc::new(Self {
            client,
            segment,
            parent,
        })
    }

    /// Creates a node below `parent`, sharing its client.
    pub fn child<S: Into<String>>(parent: &Arc<EndpointNode>, segment: S) -> Arc<Self> {
        Self::new(parent.client.clone(), segment, Some(Arc::clone(parent)))
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn parent(&self) -> Option<&Arc<EndpointNode>> {
        self.parent.as_ref()
    }

    pub fn client(&self) -> &ConnectWiseClient {
        &self.client
    }

    /// The `/`-joined path from the root down to this node.
    pub fn path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            segments.push(node.segment.as_str());
            current = node.parent.as_deref();
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    /// Sends one request scoped to this node's path.
    pub async fn request(
        &self,
        method: Method,
        data: Option<&Value>,
        params: Option<&RequestParams>,
    ) -> Result<Response> {
        self.client
            .make_request(method, &self.path(), data, params)
            .await
    }
}

/// A typed handle to a Manage resource.
///
/// Every endpoint type wraps an [`EndpointNode`]; the verb traits in
/// [`crate::endpoints::interfaces`] build on this to issue requests.
pub trait ConnectWiseEndpoint {
    fn node(&self) -> &Arc<EndpointNode>;

    fn path(&self) -> String {
        self.node().path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn client() -> ConnectWiseClient {
        ConnectWiseClient::with_base_url("http://localhost", &ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_root_path() {
        let root = EndpointNode::new(client(), "service", None);
        assert_eq!(root.path(), "/service");
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_chain_joins_segments_root_to_leaf() {
        let segments = ["service", "slas", "3", "priorities", "12"];
        let mut node = EndpointNode::new(client(), segments[0], None);
        for segment in &segments[1..] {
            node = EndpointNode::child(&node, *segment);
        }
        assert_eq!(node.path(), format!("/{}", segments.join("/")));
        assert_eq!(node.segment(), "12");
        assert_eq!(node.parent().unwrap().segment(), "priorities");
    }

    #[test]
    fn test_child_does_not_alter_parent() {
        let root = EndpointNode::new(client(), "service", None);
        let slas = EndpointNode::child(&root, "slas");
        let _first = EndpointNode::child(&slas, "1");
        let second = EndpointNode::child(&slas, "2");
        assert_eq!(slas.path(), "/service/slas");
        assert_eq!(second.path(), "/service/slas/2");
    }
}
