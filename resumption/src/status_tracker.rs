// Copyright (c) 2026 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, Weak},
};

use application_manager::ApplicationManager;
use common::AppId;
use event_engine::Event;
use logging::log;
use parking_lot::Mutex;

use crate::{RequestIds, ResumptionRequest, Subscriber};

/// Outcome of the subscription requests issued while resuming one application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppResumptionStatus {
    pub pending: BTreeSet<RequestIds>,
    pub succeeded: BTreeSet<RequestIds>,
    pub failed: BTreeSet<RequestIds>,
}

impl AppResumptionStatus {
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_successful(&self) -> bool {
        self.is_finished() && self.failed.is_empty()
    }
}

pub type ResumptionFinishedCallback = Arc<dyn Fn(AppId, &AppResumptionStatus) + Send + Sync>;

/// Collects the responses to the requests issued on behalf of resuming applications.
///
/// Its [`subscriber`](Self::subscriber) is handed to the extensions; every request reported to
/// it is observed on the event dispatcher, whether it was sent to the HMI or frozen.
pub struct ResumptionStatusTracker {
    app_manager: Arc<dyn ApplicationManager>,
    statuses: Mutex<BTreeMap<AppId, AppResumptionStatus>>,
    on_finished: Option<ResumptionFinishedCallback>,
    self_ref: Weak<Self>,
}

impl ResumptionStatusTracker {
    pub fn new(app_manager: Arc<dyn ApplicationManager>) -> Arc<Self> {
        Self::new_impl(app_manager, None)
    }

    pub fn with_finished_callback(
        app_manager: Arc<dyn ApplicationManager>,
        on_finished: ResumptionFinishedCallback,
    ) -> Arc<Self> {
        Self::new_impl(app_manager, Some(on_finished))
    }

    fn new_impl(
        app_manager: Arc<dyn ApplicationManager>,
        on_finished: Option<ResumptionFinishedCallback>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            app_manager,
            statuses: Mutex::new(BTreeMap::new()),
            on_finished,
            self_ref: self_ref.clone(),
        })
    }

    pub fn subscriber(&self) -> Subscriber {
        let self_ref = self.self_ref.clone();
        Arc::new(move |app_id: AppId, request: ResumptionRequest| {
            if let Some(this) = self_ref.upgrade() {
                this.track(app_id, request);
            }
        })
    }

    pub fn status(&self, app_id: AppId) -> Option<AppResumptionStatus> {
        self.statuses.lock().get(&app_id).cloned()
    }

    /// Stop tracking the application. Responses still to come for it are ignored.
    pub fn forget(&self, app_id: AppId) -> Option<AppResumptionStatus> {
        self.statuses.lock().remove(&app_id)
    }

    fn track(&self, app_id: AppId, request: ResumptionRequest) {
        let ids = request.request_ids;
        log::trace!(
            "Tracking {} with correlation id {} for application {app_id}",
            ids.function_id,
            ids.correlation_id
        );
        self.statuses.lock().entry(app_id).or_default().pending.insert(ids);

        let self_ref = self.self_ref.clone();
        self.app_manager.event_dispatcher().add_observer(
            ids.function_id,
            ids.correlation_id,
            Arc::new(move |event: &Event| {
                if let Some(this) = self_ref.upgrade() {
                    this.on_response(app_id, ids, event);
                }
            }),
        );
    }

    fn on_response(&self, app_id: AppId, ids: RequestIds, event: &Event) {
        let finished = {
            let mut statuses = self.statuses.lock();
            let Some(status) = statuses.get_mut(&app_id) else {
                log::debug!("Response for untracked application {app_id}");
                return;
            };
            if !status.pending.remove(&ids) {
                return;
            }

            if event.message().is_successful_response() {
                status.succeeded.insert(ids);
            } else {
                status.failed.insert(ids);
            }

            status.is_finished().then(|| status.clone())
        };

        if let Some(status) = finished {
            log::debug!(
                "Resumption of application {app_id} finished: {} succeeded, {} failed",
                status.succeeded.len(),
                status.failed.len()
            );
            if let Some(on_finished) = &self.on_finished {
                on_finished(app_id, &status);
            }
        }
    }
}
