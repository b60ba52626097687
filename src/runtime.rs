use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

/// Which kind of docker resource a descriptor or handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Container,
    Service,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Container => write!(f, "container"),
            ResourceKind::Service => write!(f, "service"),
        }
    }
}

/// Raw listing entry as reported by the runtime.
///
/// The runtime is authoritative: descriptors are never mutated after listing.
/// Creation time is normalized to an absolute UTC instant at the client
/// boundary regardless of how the runtime encoded it.
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    pub id: String,
    pub names: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ResourceDescriptor {
    /// Primary display name: first listed name with the leading `/` docker
    /// prepends to container names stripped. Falls back to the id when the
    /// runtime reported no names.
    pub fn primary_name(&self) -> &str {
        self.names
            .first()
            .map(|n| n.trim_start_matches('/'))
            .unwrap_or(self.id.as_str())
    }
}

/// A resource chosen for removal, bound to the operations its kind supports.
/// Owned transiently for the duration of one removal attempt.
#[derive(Debug, Clone)]
pub struct RemovableHandle {
    pub id: String,
    pub name: String,
    pub kind: ResourceKind,
}

/// Trait for container runtime operations (Docker, Podman, etc.)
///
/// Containers go through a stop-then-remove teardown; swarm services are
/// removed directly. Tests substitute an instrumented fake implementation.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// List running containers
    async fn list_containers(&self) -> Result<Vec<ResourceDescriptor>>;

    /// List swarm services
    async fn list_services(&self) -> Result<Vec<ResourceDescriptor>>;

    /// Stop a container
    async fn stop_container(&self, id: &str) -> Result<()>;

    /// Remove a container
    async fn remove_container(&self, id: &str) -> Result<()>;

    /// Remove a swarm service
    async fn remove_service(&self, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(names: Vec<&str>) -> ResourceDescriptor {
        ResourceDescriptor {
            id: "abc123".to_string(),
            names: names.into_iter().map(String::from).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn primary_name_strips_leading_slash() {
        let d = descriptor(vec!["/web-prod", "/web-prod-alias"]);
        assert_eq!(d.primary_name(), "web-prod");
    }

    #[test]
    fn primary_name_falls_back_to_id() {
        let d = descriptor(vec![]);
        assert_eq!(d.primary_name(), "abc123");
    }
}
