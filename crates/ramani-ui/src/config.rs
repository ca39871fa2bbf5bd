//! Deployment-level constants baked into the client at build time.

/// Identifier of the deployment this build serves; prefixes every durable
/// storage key so co-hosted deployments stay isolated.
pub const DEPLOYMENT_ID: &str = "ramani";
