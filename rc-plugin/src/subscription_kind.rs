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

use std::sync::Arc;

use application_manager::{Application, ApplicationManager};
use common::{CorrelationId, Message};
use logging::log;
use resumption::{PendingResumptionHandler, SubscriptionKind};

use crate::{
    helpers::{
        apps_subscribed_to_module, create_get_interior_vehicle_data_request, module_control_data,
    },
    InteriorDataCache, ModuleUid, RcAppExtension,
};

/// Interior vehicle data subscriptions, as seen by the resumption coordinator.
pub struct RcSubscriptionKind {
    cache: Arc<InteriorDataCache>,
    app_manager: Arc<dyn ApplicationManager>,
}

impl RcSubscriptionKind {
    pub fn new(cache: Arc<InteriorDataCache>, app_manager: Arc<dyn ApplicationManager>) -> Self {
        Self { cache, app_manager }
    }
}

impl SubscriptionKind for RcSubscriptionKind {
    type Key = ModuleUid;

    fn subscriptions(&self, app: &Application) -> Vec<ModuleUid> {
        app.extension::<RcAppExtension>()
            .map(|extension| {
                extension.interior_vehicle_data_subscriptions().iter().cloned().collect()
            })
            .unwrap_or_default()
    }

    fn create_subscription_request(
        &self,
        module: &ModuleUid,
        correlation_id: CorrelationId,
    ) -> Message {
        create_get_interior_vehicle_data_request(module, correlation_id, true)
    }

    fn on_subscription_confirmed(&self, module: &ModuleUid, response: &Message) {
        // The module may have been released while the request was in flight
        if apps_subscribed_to_module(self.app_manager.as_ref(), module).is_empty() {
            log::debug!("Nobody is subscribed to {module} any more, not caching its data");
            return;
        }

        match module_control_data(response, module) {
            Some(data) => self.cache.add(module.clone(), data.clone()),
            None => log::debug!("Subscription response for {module} carries no module data"),
        }
    }
}

pub type RcPendingResumptionHandler = PendingResumptionHandler<RcSubscriptionKind>;
