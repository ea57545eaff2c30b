//! The routine a supervisor runs once it owns the service slot.

use async_trait::async_trait;

use crate::domain::ServiceDescriptor;

/// A long-running service that must run as a single instance.
///
/// # Example
///
/// ```ignore
/// struct PushServer { descriptor: ServiceDescriptor }
///
/// #[async_trait]
/// impl SupervisedService for PushServer {
///     type Config = PushConfig;
///
///     fn descriptor(&self) -> &ServiceDescriptor {
///         &self.descriptor
///     }
///
///     async fn start(&self, config: &PushConfig) -> anyhow::Result<i32> {
///         serve(config).await?;
///         Ok(0)
///     }
/// }
/// ```
#[async_trait]
pub trait SupervisedService: Send + Sync {
    /// Input handed to `start`; the supervisor never inspects it.
    type Config: Send + Sync;

    fn descriptor(&self) -> &ServiceDescriptor;

    /// Run the service to completion and return its exit status.
    ///
    /// An `Err` (or a panic) is reported as
    /// `Service <name> failed: <message>` with a non-zero status.
    async fn start(&self, config: &Self::Config) -> anyhow::Result<i32>;
}
