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

use std::{collections::BTreeSet, sync::Arc};

use application_manager::{AppExtension, Application, ApplicationManager};
use logging::log;
use parking_lot::RwLock;
use resumption::{
    ExtensionPendingResumptionHandler, ResumableExtension, ResumptionError, SavedApplication,
    Subscriber,
};
use utils::newtype;

use crate::ModuleUid;

/// Field of the saved subscriptions holding the interior vehicle data subscriptions.
pub const MODULE_DATA_FIELD: &str = "moduleData";

newtype! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct ModuleSubscriptions(BTreeSet<ModuleUid>);
}

/// Interior vehicle data subscriptions of one application.
pub struct RcAppExtension {
    subscribed_modules: RwLock<ModuleSubscriptions>,
    resumption_handler: Arc<dyn ExtensionPendingResumptionHandler>,
}

impl AppExtension for RcAppExtension {}

impl RcAppExtension {
    pub fn new(resumption_handler: Arc<dyn ExtensionPendingResumptionHandler>) -> Self {
        Self {
            subscribed_modules: RwLock::new(ModuleSubscriptions::default()),
            resumption_handler,
        }
    }

    /// Returns false if the application was already subscribed.
    pub fn subscribe_to_interior_vehicle_data(&self, module: ModuleUid) -> bool {
        log::debug!("Subscribing to {module}");
        self.subscribed_modules.write().insert(module)
    }

    /// Returns false if the application wasn't subscribed.
    pub fn unsubscribe_from_interior_vehicle_data(&self, module: &ModuleUid) -> bool {
        log::debug!("Unsubscribing from {module}");
        self.subscribed_modules.write().remove(module)
    }

    /// Drop every subscription, returning the modules the application was subscribed to.
    pub fn unsubscribe_from_all(&self) -> ModuleSubscriptions {
        std::mem::take(&mut *self.subscribed_modules.write())
    }

    pub fn is_subscribed_to_interior_vehicle_data(&self, module: &ModuleUid) -> bool {
        self.subscribed_modules.read().contains(module)
    }

    pub fn interior_vehicle_data_subscriptions(&self) -> ModuleSubscriptions {
        self.subscribed_modules.read().clone()
    }
}

impl ResumableExtension for RcAppExtension {
    fn save_resumption_data(&self, saved: &mut SavedApplication) {
        let modules = self.subscribed_modules.read();
        saved.set_subscription_list(MODULE_DATA_FIELD, modules.iter().map(ToString::to_string));
    }

    fn process_resumption(
        &self,
        app: &Application,
        saved: &SavedApplication,
        subscriber: &Subscriber,
        _app_manager: &dyn ApplicationManager,
    ) -> Result<(), ResumptionError> {
        let Some(entries) = saved.subscription_list(MODULE_DATA_FIELD)? else {
            return Ok(());
        };

        let modules = entries
            .into_iter()
            .map(|entry| {
                entry.parse::<ModuleUid>().map_err(|err| ResumptionError::MalformedEntry {
                    field: MODULE_DATA_FIELD.to_owned(),
                    entry,
                    reason: err.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for module in modules {
            self.subscribe_to_interior_vehicle_data(module);
        }

        self.resumption_handler.handle_resumption_subscription_request(app, subscriber);
        Ok(())
    }

    fn revert_resumption(&self, _saved: &SavedApplication) {
        log::debug!("Reverting interior vehicle data subscriptions isn't supported");
    }
}

#[cfg(test)]
mod tests {
    use application_manager::{ApplicationManagerImpl, RpcServiceImpl};
    use common::{AppId, Message};
    use event_engine::EventDispatcherImpl;
    use parking_lot::Mutex;
    use resumption::{ResumptionConfig, ResumptionRequest};
    use rstest::rstest;
    use strum::IntoEnumIterator;
    use test_utils::random::{make_seedable_rng, Rng, Seed};

    use super::*;
    use crate::{InteriorDataCache, ModuleType, RcPendingResumptionHandler, RcSubscriptionKind};

    fn make_extension() -> (Arc<ApplicationManagerImpl>, RcAppExtension) {
        let (rpc_service, _hmi_rx, _mobile_rx) = RpcServiceImpl::new();
        let manager = Arc::new(ApplicationManagerImpl::new(
            Arc::new(rpc_service),
            Arc::new(EventDispatcherImpl::new()),
        ));
        let handler = RcPendingResumptionHandler::new(
            RcSubscriptionKind::new(
                Arc::new(InteriorDataCache::new()),
                Arc::clone(&manager) as Arc<dyn ApplicationManager>,
            ),
            Arc::clone(&manager) as Arc<dyn ApplicationManager>,
            ResumptionConfig::default(),
        );
        (manager, RcAppExtension::new(handler))
    }

    fn random_module(rng: &mut impl Rng) -> ModuleUid {
        let types: Vec<_> = ModuleType::iter().collect();
        ModuleUid::new(
            types[rng.gen_range(0..types.len())],
            format!("id{}", rng.gen_range(0..3)),
        )
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn subscribe_is_idempotent(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let (_manager, extension) = make_extension();

        for _ in 0..rng.gen_range(1..20) {
            let module = random_module(&mut rng);
            let was_subscribed = extension.is_subscribed_to_interior_vehicle_data(&module);
            assert_eq!(
                extension.subscribe_to_interior_vehicle_data(module.clone()),
                !was_subscribed
            );
            assert!(!extension.subscribe_to_interior_vehicle_data(module.clone()));
            assert_eq!(
                extension
                    .interior_vehicle_data_subscriptions()
                    .iter()
                    .filter(|m| **m == module)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn unsubscribe() {
        let (_manager, extension) = make_extension();
        let module = ModuleUid::new(ModuleType::Light, "cabin");

        assert!(!extension.unsubscribe_from_interior_vehicle_data(&module));
        extension.subscribe_to_interior_vehicle_data(module.clone());
        assert!(extension.unsubscribe_from_interior_vehicle_data(&module));
        assert!(!extension.is_subscribed_to_interior_vehicle_data(&module));
        assert!(!extension.unsubscribe_from_interior_vehicle_data(&module));
    }

    #[test]
    fn unsubscribe_from_all_returns_previous_set() {
        let (_manager, extension) = make_extension();
        let climate = ModuleUid::new(ModuleType::Climate, "id1");
        let radio = ModuleUid::new(ModuleType::Radio, "id1");
        extension.subscribe_to_interior_vehicle_data(climate.clone());
        extension.subscribe_to_interior_vehicle_data(radio.clone());

        let previous = extension.unsubscribe_from_all();
        assert_eq!(*previous, BTreeSet::from([climate, radio]));
        assert!(extension.interior_vehicle_data_subscriptions().is_empty());
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn save_then_resume(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let (manager, extension) = make_extension();
        for _ in 0..rng.gen_range(0..10) {
            extension.subscribe_to_interior_vehicle_data(random_module(&mut rng));
        }

        let mut saved = SavedApplication::new();
        extension.save_resumption_data(&mut saved);
        let saved_list = saved.subscription_list(MODULE_DATA_FIELD).unwrap().unwrap();
        let mut sorted = saved_list.clone();
        sorted.sort();
        assert_eq!(saved_list, sorted);

        let (_other_manager, restored) = make_extension();
        let restored = Arc::new(restored);
        let app = Application::new(AppId::new(2));
        app.add_extension(Arc::clone(&restored));
        let issued = Arc::new(Mutex::new(Vec::<Message>::new()));
        let subscriber: Subscriber = {
            let issued = Arc::clone(&issued);
            Arc::new(move |_app_id: AppId, request: ResumptionRequest| {
                issued.lock().push(request.message)
            })
        };

        restored
            .process_resumption(&app, &saved, &subscriber, manager.as_ref())
            .unwrap();

        assert_eq!(
            restored.interior_vehicle_data_subscriptions(),
            extension.interior_vehicle_data_subscriptions()
        );
        // Every restored module is requested again
        assert_eq!(issued.lock().len(), saved_list.len());
    }

    #[test]
    fn malformed_saved_entry() {
        let (manager, extension) = make_extension();
        let mut saved = SavedApplication::new();
        saved.set_subscription_list(
            MODULE_DATA_FIELD,
            ["CLIMATE:id1".to_owned(), "bogus".to_owned()],
        );

        let subscriber: Subscriber = Arc::new(|_: AppId, _: ResumptionRequest| {});
        let result = extension.process_resumption(
            &Application::new(AppId::new(1)),
            &saved,
            &subscriber,
            manager.as_ref(),
        );

        test_utils::assert_matches!(result, Err(ResumptionError::MalformedEntry { .. }));
        assert!(extension.interior_vehicle_data_subscriptions().is_empty());
    }

    #[test]
    fn missing_field_is_not_an_error() {
        let (manager, extension) = make_extension();
        let subscriber: Subscriber = Arc::new(|_: AppId, _: ResumptionRequest| {});
        extension
            .process_resumption(
                &Application::new(AppId::new(1)),
                &SavedApplication::new(),
                &subscriber,
                manager.as_ref(),
            )
            .unwrap();
        assert!(extension.interior_vehicle_data_subscriptions().is_empty());
    }
}
