use anyhow::{Context, Result};
use async_trait::async_trait;
#[allow(deprecated)]
use bollard::container::{ListContainersOptions, RemoveContainerOptions, StopContainerOptions};
use bollard::models::{ContainerSummary, Service};
#[allow(deprecated)]
use bollard::service::ListServicesOptions;
use bollard::Docker;
use chrono::{DateTime, Utc};

use crate::runtime::{ContainerRuntime, ResourceDescriptor};

#[derive(Clone)]
pub struct DockerClient {
    docker: Docker,
}

impl DockerClient {
    pub fn new() -> Result<Self> {
        let docker = Docker::connect_with_local_defaults()
            .context("Failed to connect to Docker daemon")?;
        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerRuntime for DockerClient {
    async fn list_containers(&self) -> Result<Vec<ResourceDescriptor>> {
        #[allow(deprecated)]
        let containers = self
            .docker
            .list_containers(Some(ListContainersOptions::<String> {
                ..Default::default()
            }))
            .await
            .context("container listing failed")?;
        Ok(containers
            .into_iter()
            .filter_map(container_descriptor)
            .collect())
    }

    async fn list_services(&self) -> Result<Vec<ResourceDescriptor>> {
        #[allow(deprecated)]
        let services = self
            .docker
            .list_services(Some(ListServicesOptions::<String> {
                ..Default::default()
            }))
            .await
            .context("service listing failed")?;
        Ok(services.into_iter().filter_map(service_descriptor).collect())
    }

    async fn stop_container(&self, id: &str) -> Result<()> {
        #[allow(deprecated)]
        self.docker
            .stop_container(id, Some(StopContainerOptions { t: 10 }))
            .await
            .context("container stop failed")?;
        Ok(())
    }

    async fn remove_container(&self, id: &str) -> Result<()> {
        #[allow(deprecated)]
        self.docker
            .remove_container(
                id,
                Some(RemoveContainerOptions {
                    ..Default::default()
                }),
            )
            .await
            .context("container remove failed")?;
        Ok(())
    }

    async fn remove_service(&self, id: &str) -> Result<()> {
        self.docker
            .delete_service(id)
            .await
            .context("service remove failed")?;
        Ok(())
    }
}

/// Containers report creation time as epoch seconds. Entries the daemon
/// returns without an id are skipped.
fn container_descriptor(container: ContainerSummary) -> Option<ResourceDescriptor> {
    let id = container.id?;
    let created_at = DateTime::from_timestamp(container.created.unwrap_or(0), 0)?;
    Some(ResourceDescriptor {
        id,
        names: container.names.unwrap_or_default(),
        created_at,
    })
}

/// Services report creation time as an RFC 3339 string. Entries without an
/// id or with an unparseable timestamp are skipped.
fn service_descriptor(service: Service) -> Option<ResourceDescriptor> {
    let id = service.id?;
    let created_at = service
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))?;
    let names = service
        .spec
        .and_then(|spec| spec.name)
        .into_iter()
        .collect();
    Some(ResourceDescriptor {
        id,
        names,
        created_at,
    })
}
