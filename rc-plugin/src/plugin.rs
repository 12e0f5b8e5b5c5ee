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
use common::{FunctionId, Message};
use logging::log;
use resumption::{ExtensionPendingResumptionHandler, ResumptionConfig};
use serde_json::Value;

use crate::{
    helpers::{
        apps_subscribed_to_module, create_get_interior_vehicle_data_request,
        is_another_app_subscribed, module_control_data, MODULE_DATA, MODULE_ID, MODULE_TYPE,
    },
    InteriorDataCache, ModuleType, ModuleUid, RcAppExtension, RcPendingResumptionHandler,
    RcSubscriptionKind,
};

/// Remote control plugin: owns the interior data cache and the resumption coordinator for
/// interior vehicle data subscriptions.
pub struct RcPlugin {
    app_manager: Arc<dyn ApplicationManager>,
    cache: Arc<InteriorDataCache>,
    resumption_handler: Arc<RcPendingResumptionHandler>,
}

impl RcPlugin {
    pub fn new(app_manager: Arc<dyn ApplicationManager>, config: ResumptionConfig) -> Self {
        let cache = Arc::new(InteriorDataCache::new());
        let resumption_handler = RcPendingResumptionHandler::new(
            RcSubscriptionKind::new(Arc::clone(&cache), Arc::clone(&app_manager)),
            Arc::clone(&app_manager),
            config,
        );

        Self {
            app_manager,
            cache,
            resumption_handler,
        }
    }

    pub fn cache(&self) -> &InteriorDataCache {
        &self.cache
    }

    pub fn resumption_handler(&self) -> &Arc<RcPendingResumptionHandler> {
        &self.resumption_handler
    }

    /// Attach the RC extension to a newly registered application.
    pub fn on_application_registered(&self, app: &Application) -> Arc<RcAppExtension> {
        let extension = Arc::new(RcAppExtension::new(
            Arc::clone(&self.resumption_handler) as Arc<dyn ExtensionPendingResumptionHandler>,
        ));
        app.add_extension(Arc::clone(&extension));
        extension
    }

    /// Release the modules nobody else uses and forget the application's queued requests.
    pub fn on_application_unregistered(&self, app: &Application) {
        let app_id = app.app_id();
        self.resumption_handler.on_application_unregistered(app_id);

        let Some(extension) = app.remove_extension::<RcAppExtension>() else {
            return;
        };

        for module in extension.unsubscribe_from_all().iter() {
            if is_another_app_subscribed(self.app_manager.as_ref(), app_id, module) {
                continue;
            }

            log::debug!("Application {app_id} was the last one subscribed to {module}");
            let request = create_get_interior_vehicle_data_request(
                module,
                self.app_manager.next_hmi_correlation_id(),
                false,
            );
            if let Err(err) = self.app_manager.rpc_service().manage_hmi_command(request) {
                log::warn!("Failed to unsubscribe from {module}: {err}");
            }
            self.cache.remove(module);
        }
    }

    /// Handle `RC.OnInteriorVehicleData` coming from the HMI: cache the data and forward it to
    /// every application subscribed to the module.
    pub fn on_interior_vehicle_data(&self, notification: &Message) {
        let Some(module) = notified_module(notification) else {
            log::warn!("Interior vehicle data notification without a valid module");
            return;
        };

        let subscribed = apps_subscribed_to_module(self.app_manager.as_ref(), &module);
        if subscribed.is_empty() {
            log::debug!("Nobody is subscribed to {module}");
            return;
        }

        if let Some(data) = module_control_data(notification, &module) {
            self.cache.add(module.clone(), data.clone());
        }

        let mut msg_params = notification.msg_params.clone();
        if let Some(module_data) = msg_params.get_mut(MODULE_DATA).and_then(Value::as_object_mut) {
            module_data.insert(MODULE_ID.to_owned(), Value::String(module.module_id.clone()));
        }

        for app_id in subscribed {
            let forwarded =
                Message::notification(FunctionId::OnInteriorVehicleData, msg_params.clone())
                    .with_connection_key(app_id);
            if let Err(err) = self.app_manager.rpc_service().manage_mobile_command(forwarded) {
                log::warn!("Failed to forward {module} data to application {app_id}: {err}");
            }
        }
    }

    pub fn on_resumption_revert(&self) {
        self.resumption_handler.on_resumption_revert();
    }
}

fn notified_module(notification: &Message) -> Option<ModuleUid> {
    let module_type = notification
        .param(&[MODULE_DATA, MODULE_TYPE])?
        .as_str()?
        .parse::<ModuleType>()
        .ok()?;
    let module_id = notification.param(&[MODULE_DATA, MODULE_ID])?.as_str()?;
    Some(ModuleUid::new(module_type, module_id))
}

#[cfg(test)]
mod tests;
