use tracing::{info, warn};

use crate::runtime::{ContainerRuntime, RemovableHandle, ResourceKind};

/// Tear down a single resource. Never fails the batch: every step runs in
/// order, step failures are logged, and the step's event is emitted whether
/// or not the step errored. A container always produces a `stopped` and a
/// `removed` event, a service a single `removed` event.
pub async fn remove<R: ContainerRuntime + ?Sized>(runtime: &R, handle: &RemovableHandle) {
    match handle.kind {
        ResourceKind::Container => {
            if let Err(e) = runtime.stop_container(&handle.id).await {
                warn!(name = %handle.name, error = %e, "failed to stop container");
            }
            info!(name = %handle.name, "stopped");

            if let Err(e) = runtime.remove_container(&handle.id).await {
                warn!(name = %handle.name, error = %e, "failed to remove container");
            }
            info!(name = %handle.name, "removed");
        }
        ResourceKind::Service => {
            if let Err(e) = runtime.remove_service(&handle.id).await {
                warn!(name = %handle.name, error = %e, "failed to remove service");
            }
            info!(name = %handle.name, "removed");
        }
    }
}
