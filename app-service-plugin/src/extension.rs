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

use std::collections::BTreeSet;

use application_manager::{any_other_application, AppExtension, Application, ApplicationManager};
use common::AppId;
use logging::log;
use parking_lot::RwLock;
use resumption::{ResumableExtension, ResumptionError, SavedApplication, Subscriber};

use crate::send_get_app_service_data;

/// Field of the saved subscriptions holding the app service subscriptions.
pub const APP_SERVICE_FIELD: &str = "appService";

pub type AppServiceSubscriptions = BTreeSet<String>;

/// App service types an application is subscribed to.
pub struct AppServiceAppExtension {
    app_id: AppId,
    subscribed_data: RwLock<AppServiceSubscriptions>,
}

impl AppExtension for AppServiceAppExtension {}

impl AppServiceAppExtension {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            subscribed_data: RwLock::new(BTreeSet::new()),
        }
    }

    /// Returns false if the application was already subscribed.
    pub fn subscribe_to_app_service(&self, service_type: &str) -> bool {
        log::debug!("Subscribing application {} to app service {service_type}", self.app_id);
        self.subscribed_data.write().insert(service_type.to_owned())
    }

    /// Returns false if the application wasn't subscribed.
    pub fn unsubscribe_from_app_service(&self, service_type: &str) -> bool {
        log::debug!("Unsubscribing application {} from app service {service_type}", self.app_id);
        self.subscribed_data.write().remove(service_type)
    }

    /// Drop every subscription. Service types no other application is subscribed to are
    /// released on the HMI.
    pub fn unsubscribe_from_all_app_services(&self, app_manager: &dyn ApplicationManager) {
        log::trace!("Unsubscribing application {} from all app services", self.app_id);

        // Stay visible as a subscriber until the releases are sent
        let subscriptions = self.subscriptions();
        for service_type in &subscriptions {
            if is_another_app_subscribed(app_manager, self.app_id, service_type) {
                continue;
            }
            if let Err(err) = send_get_app_service_data(app_manager, service_type, false) {
                log::warn!("Failed to unsubscribe from app service {service_type}: {err}");
            }
        }

        self.subscribed_data.write().retain(|service_type| !subscriptions.contains(service_type));
    }

    pub fn is_subscribed_to_app_service(&self, service_type: &str) -> bool {
        self.subscribed_data.read().contains(service_type)
    }

    pub fn subscriptions(&self) -> AppServiceSubscriptions {
        self.subscribed_data.read().clone()
    }
}

fn is_another_app_subscribed(
    app_manager: &dyn ApplicationManager,
    except: AppId,
    service_type: &str,
) -> bool {
    any_other_application(app_manager, except, |app| {
        app.extension::<AppServiceAppExtension>()
            .is_some_and(|extension| extension.is_subscribed_to_app_service(service_type))
    })
}

impl ResumableExtension for AppServiceAppExtension {
    fn save_resumption_data(&self, saved: &mut SavedApplication) {
        let subscriptions = self.subscribed_data.read();
        saved.set_subscription_list(APP_SERVICE_FIELD, subscriptions.iter().cloned());
    }

    fn process_resumption(
        &self,
        _app: &Application,
        saved: &SavedApplication,
        _subscriber: &Subscriber,
        app_manager: &dyn ApplicationManager,
    ) -> Result<(), ResumptionError> {
        let Some(service_types) = saved.subscription_list(APP_SERVICE_FIELD)? else {
            return Ok(());
        };

        for service_type in service_types {
            // Not reported to the subscriber, the response may depend on a provider app
            if !is_another_app_subscribed(app_manager, self.app_id, &service_type) {
                if let Err(err) = send_get_app_service_data(app_manager, &service_type, true) {
                    log::warn!("Failed to resubscribe to app service {service_type}: {err}");
                }
            }
            self.subscribe_to_app_service(&service_type);
        }

        Ok(())
    }

    fn revert_resumption(&self, _saved: &SavedApplication) {
        log::debug!("Reverting app service subscriptions isn't supported");
    }
}
