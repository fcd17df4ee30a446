//! Small but realistic services wired through the registry

use std::sync::{Arc, Mutex};

use svcreg::{Error, Result, Service, ServiceContext, ServiceHealth, ServiceMetadata, async_trait};

/// Application settings shared with every service
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/shop".to_string(),
            model: "small".to_string(),
        }
    }
}

/// Shared journal of lifecycle events across services
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

pub struct Database {
    metadata: ServiceMetadata,
    journal: Journal,
    url: Mutex<Option<String>>,
}

impl Database {
    pub fn new(journal: &Journal) -> Self {
        Self {
            metadata: ServiceMetadata::new("db", "1.4.0"),
            journal: journal.clone(),
            url: Mutex::new(None),
        }
    }

    pub fn url(&self) -> Option<String> {
        self.url.lock().unwrap().clone()
    }
}

#[async_trait]
impl Service for Database {
    fn metadata(&self) -> &ServiceMetadata {
        &self.metadata
    }

    async fn on_initialize(&self, context: &ServiceContext<'_>) -> Result<()> {
        let settings = context.config::<Settings>()?;
        *self.url.lock().unwrap() = Some(settings.database_url.clone());
        context.logger().info("connection pool ready");
        self.journal.lock().unwrap().push("init:db".to_string());
        Ok(())
    }

    async fn on_destroy(&self) -> Result<()> {
        self.journal.lock().unwrap().push("destroy:db".to_string());
        Ok(())
    }

    async fn health_check(&self) -> Option<ServiceHealth> {
        Some(ServiceHealth::healthy().with_details(serde_json::json!({ "connections": 4 })))
    }
}

/// Content generator that needs the database during startup
pub struct ContentGenerator {
    metadata: ServiceMetadata,
    journal: Journal,
    database_url: Mutex<Option<String>>,
}

impl ContentGenerator {
    pub fn new(journal: &Journal) -> Self {
        Self {
            metadata: ServiceMetadata::new("ai", "0.9.0").with_dependency("db"),
            journal: journal.clone(),
            database_url: Mutex::new(None),
        }
    }

    pub fn database_url(&self) -> Option<String> {
        self.database_url.lock().unwrap().clone()
    }
}

#[async_trait]
impl Service for ContentGenerator {
    fn metadata(&self) -> &ServiceMetadata {
        &self.metadata
    }

    async fn on_initialize(&self, context: &ServiceContext<'_>) -> Result<()> {
        let db = context.registry().get_as::<Database>("db")?;
        *self.database_url.lock().unwrap() = db.url();
        let settings = context.config::<Settings>()?;
        context
            .logger()
            .info_with("model loaded", &serde_json::json!({ "model": settings.model }));
        self.journal.lock().unwrap().push("init:ai".to_string());
        Ok(())
    }

    async fn on_destroy(&self) -> Result<()> {
        self.journal.lock().unwrap().push("destroy:ai".to_string());
        Ok(())
    }

    async fn health_check(&self) -> Option<ServiceHealth> {
        Some(ServiceHealth::unhealthy().with_details(serde_json::json!({ "quota": 0 })))
    }
}

/// Generic node with optional failing teardown
pub struct Node {
    metadata: ServiceMetadata,
    journal: Journal,
    fail_destroy: bool,
}

impl Node {
    pub fn new(name: &str, dependencies: &[&str], journal: &Journal) -> Self {
        Self {
            metadata: ServiceMetadata::new(name, "1.0.0")
                .with_dependencies(dependencies.iter().copied()),
            journal: journal.clone(),
            fail_destroy: false,
        }
    }

    pub fn failing_destroy(mut self) -> Self {
        self.fail_destroy = true;
        self
    }
}

#[async_trait]
impl Service for Node {
    fn metadata(&self) -> &ServiceMetadata {
        &self.metadata
    }

    async fn on_initialize(&self, _context: &ServiceContext<'_>) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("init:{}", self.metadata.name));
        Ok(())
    }

    async fn on_destroy(&self) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("destroy:{}", self.metadata.name));
        if self.fail_destroy {
            return Err(Error::service(format!(
                "{} could not flush its buffers",
                self.metadata.name
            )));
        }
        Ok(())
    }
}
