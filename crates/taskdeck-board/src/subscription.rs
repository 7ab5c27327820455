use std::sync::Arc;

use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::TaskBoard;

/// Handle for the change-feed subscription. Dropping it stops the
/// background reconciliation task (the unmount path).
pub struct ChangeFeedHandle {
    handle: JoinHandle<()>,
}

impl ChangeFeedHandle {
    /// Load the initial task set and subscribe to the store's change feed.
    ///
    /// Every reported change triggers a full reload, the board's own
    /// writes included. The redundant reload after a local write is
    /// accepted: `refresh` is idempotent and convergent, and no attempt
    /// is made to distinguish who caused a change.
    pub async fn spawn(board: &Arc<TaskBoard>) -> Self {
        board.refresh().await;

        let board = Arc::clone(board);
        let handle = tokio::spawn(async move {
            let mut feed = match board.store().watch().await {
                Ok(feed) => feed,
                Err(e) => {
                    warn!("Error subscribing to task changes: {}", e);
                    return;
                }
            };

            while let Some(event) = feed.next().await {
                match event {
                    Ok(change) => {
                        debug!("Task change event: {:?}", change);
                        board.refresh().await;
                    }
                    Err(e) => {
                        warn!("Task change feed error: {}", e);
                    }
                }
            }
        });

        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for ChangeFeedHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
