/// Dashboard service: owns the controller and drives the single launch fetch
use crate::clients::LaunchSource;
use crate::controller::{DashboardController, ReadModel};
use crate::domain::{FilterSelection, LaunchRecord};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct DashboardService {
    controller: Arc<RwLock<DashboardController>>,
    source: Arc<dyn LaunchSource>,
}

impl DashboardService {
    pub fn new(controller: DashboardController, source: Arc<dyn LaunchSource>) -> Self {
        Self {
            controller: Arc::new(RwLock::new(controller)),
            source,
        }
    }

    /// Start the one and only launch fetch.
    ///
    /// The spawned task keeps a weak handle to the controller, so a result
    /// that arrives after the service is dropped is thrown away. Returns
    /// `None` when a fetch was already started.
    pub async fn mount(&self) -> Option<JoinHandle<()>> {
        if !self.controller.write().await.begin_load() {
            return None;
        }

        let controller = Arc::downgrade(&self.controller);
        let source = self.source.clone();

        Some(tokio::spawn(async move {
            info!("Starting launch fetch");
            let result = source.fetch_launches().await;

            match controller.upgrade() {
                Some(controller) => {
                    controller.write().await.finish_load(result);
                }
                None => debug!("Dashboard torn down before fetch completed, discarding result"),
            }
        }))
    }

    pub async fn read_model(&self) -> ReadModel {
        self.controller.read().await.read_model()
    }

    /// Derive the next selection from the current one under a single lock
    pub async fn update_selection<F, E>(&self, update: F) -> Result<ReadModel, E>
    where
        F: FnOnce(FilterSelection) -> Result<FilterSelection, E>,
    {
        let mut controller = self.controller.write().await;
        let selection = update(controller.selection())?;
        controller.select(selection);
        Ok(controller.read_model())
    }

    pub async fn go_to_page(&self, page: usize) -> ReadModel {
        let mut controller = self.controller.write().await;
        controller.go_to_page(page);
        controller.read_model()
    }

    pub async fn next_page(&self) -> ReadModel {
        let mut controller = self.controller.write().await;
        controller.next_page();
        controller.read_model()
    }

    pub async fn previous_page(&self) -> ReadModel {
        let mut controller = self.controller.write().await;
        controller.previous_page();
        controller.read_model()
    }

    pub async fn launch(&self, flight_number: i64) -> Option<LaunchRecord> {
        self.controller.read().await.launch(flight_number).cloned()
    }
}
