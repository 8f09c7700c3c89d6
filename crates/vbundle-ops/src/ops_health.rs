//! Operation: health checks.
//!
//! A [`HealthService`] reports whether one part of the system is failing;
//! [`check`] folds several of them into a single response.

use serde::Serialize;
use vbundle_resolver::aggregate;
use vbundle_util::errors::VbundleError;

use crate::ops_load::{self, LoadOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub failed: bool,
}

pub trait HealthService {
    fn name(&self) -> &str;

    fn health(&self) -> Result<HealthResponse, VbundleError>;
}

/// Failed when any service reports failure or cannot answer.
pub fn check(services: &[&dyn HealthService]) -> HealthResponse {
    let mut failed = false;
    for service in services {
        match service.health() {
            Ok(response) if response.failed => {
                tracing::warn!("{} reported failure", service.name());
                failed = true;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("{} health check errored: {e}", service.name());
                failed = true;
            }
        }
    }
    HealthResponse { failed }
}

/// Healthy while the configured bundle definitions load, validate and
/// aggregate without error.
pub struct DefinitionHealth {
    opts: LoadOptions,
}

impl DefinitionHealth {
    pub fn new(opts: LoadOptions) -> Self {
        Self { opts }
    }
}

impl HealthService for DefinitionHealth {
    fn name(&self) -> &str {
        "bundle definitions"
    }

    fn health(&self) -> Result<HealthResponse, VbundleError> {
        let result = ops_load::load_bundles(&self.opts)
            .and_then(|bundles| aggregate::aggregate(&bundles));
        if let Err(e) = &result {
            tracing::warn!("Bundle definitions unhealthy: {e}");
        }
        Ok(HealthResponse {
            failed: result.is_err(),
        })
    }
}
