//! Route table mapping paths to lazily loaded views.
//!
//! A route's view is not built when the table is declared. Each descriptor
//! carries a [`ComponentLoader`] that is only awaited on navigation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by a component loader.
pub type LoadFuture<V> = Pin<Box<dyn Future<Output = Result<V, RouteError>> + Send>>;

/// Deferred reference to a view, resolved on navigation.
pub struct ComponentLoader<V> {
    load: Arc<dyn Fn() -> LoadFuture<V> + Send + Sync>,
}

impl<V> ComponentLoader<V> {
    /// Wrap an async factory.
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, RouteError>> + Send + 'static,
    {
        Self {
            load: Arc::new(move || -> LoadFuture<V> { Box::pin(factory()) }),
        }
    }

    /// Start loading. Nothing happens until the future is awaited.
    pub fn load(&self) -> LoadFuture<V> {
        (self.load)()
    }
}

impl<V> Clone for ComponentLoader<V> {
    fn clone(&self) -> Self {
        Self {
            load: Arc::clone(&self.load),
        }
    }
}

impl<V> std::fmt::Debug for ComponentLoader<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ComponentLoader(..)")
    }
}

/// Metadata attached to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    /// Name of the layout wrapping the view.
    pub layout: String,
}

/// One `{path, name, loader, meta}` entry.
#[derive(Debug, Clone)]
pub struct RouteDescriptor<V> {
    pub path: String,
    pub name: String,
    pub loader: ComponentLoader<V>,
    pub meta: RouteMeta,
}

impl<V> RouteDescriptor<V> {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        loader: ComponentLoader<V>,
        layout: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            loader,
            meta: RouteMeta {
                layout: layout.into(),
            },
        }
    }
}

/// Ordered list of routes; the first entry whose path matches wins.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    #[must_use]
    pub fn with(mut self, route: RouteDescriptor<V>) -> Self {
        self.push(route);
        self
    }

    /// Append a route.
    pub fn push(&mut self, route: RouteDescriptor<V>) {
        self.routes.push(route);
    }

    /// Find the first route matching `path` exactly.
    pub fn resolve(&self, path: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Find a route by name.
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve `path` and await its loader.
    pub async fn navigate(&self, path: &str) -> Result<V, RouteError> {
        let route = self
            .resolve(path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;

        tracing::info!(path = %route.path, name = %route.name, layout = %route.meta.layout, "Navigating");
        route.loader.load().await
    }
}

/// Errors that can occur during navigation.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// No route matches the path.
    #[error("No route for path: {0}")]
    NotFound(String),

    /// The loader failed to produce a view.
    #[error("Failed to load route {name}: {reason}")]
    LoadFailed { name: String, reason: String },
}
