use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::memory::InMemoryProductRepository,
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_deps(DependenciesInjectDeps::postgres(pool))
    }

    /// State backed by a fresh process-local store.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryProductRepository::new());
        Self::with_deps(DependenciesInjectDeps {
            query_repo: repo.clone(),
            command_repo: repo,
        })
    }

    pub fn with_deps(deps: DependenciesInjectDeps) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
