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

use std::{collections::BTreeMap, sync::Arc};

use common::AppId;
use logging::log;
use parking_lot::RwLock;

use crate::Application;

/// Read access to the registered applications.
pub trait ApplicationQuery: Send + Sync {
    /// A snapshot of all registered applications; later registrations don't affect it.
    fn applications(&self) -> Vec<Arc<Application>>;

    fn application(&self, app_id: AppId) -> Option<Arc<Application>>;
}

/// Whether an application other than `except` satisfies the predicate.
pub fn any_other_application(
    query: &(impl ApplicationQuery + ?Sized),
    except: AppId,
    pred: impl Fn(&Application) -> bool,
) -> bool {
    query
        .applications()
        .iter()
        .any(|app| app.app_id() != except && pred(app))
}

#[derive(Default)]
pub struct ApplicationRegistry {
    applications: RwLock<BTreeMap<AppId, Arc<Application>>>,
}

impl ApplicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if an application with the same id is already registered.
    pub fn register(&self, app: Arc<Application>) -> bool {
        let mut applications = self.applications.write();
        if applications.contains_key(&app.app_id()) {
            log::warn!("Application {} is already registered", app.app_id());
            return false;
        }
        log::debug!("Registering application {}", app.app_id());
        applications.insert(app.app_id(), app);
        true
    }

    pub fn unregister(&self, app_id: AppId) -> Option<Arc<Application>> {
        log::debug!("Unregistering application {app_id}");
        self.applications.write().remove(&app_id)
    }

    pub fn len(&self) -> usize {
        self.applications.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.read().is_empty()
    }
}

impl ApplicationQuery for ApplicationRegistry {
    fn applications(&self) -> Vec<Arc<Application>> {
        self.applications.read().values().cloned().collect()
    }

    fn application(&self, app_id: AppId) -> Option<Arc<Application>> {
        self.applications.read().get(&app_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_unregister() {
        let registry = ApplicationRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.register(Arc::new(Application::new(AppId::new(1)))));
        assert!(!registry.register(Arc::new(Application::new(AppId::new(1)))));
        assert!(registry.register(Arc::new(Application::new(AppId::new(2)))));
        assert_eq!(registry.len(), 2);

        let snapshot = registry.applications();
        assert!(registry.unregister(AppId::new(1)).is_some());
        assert!(registry.unregister(AppId::new(1)).is_none());

        // The snapshot taken earlier is unaffected
        assert_eq!(snapshot.len(), 2);
        assert_eq!(registry.applications().len(), 1);
        assert!(registry.application(AppId::new(1)).is_none());
        assert!(registry.application(AppId::new(2)).is_some());
    }

    #[test]
    fn other_application_check_skips_self() {
        let registry = ApplicationRegistry::new();
        registry.register(Arc::new(Application::new(AppId::new(1))));

        assert!(!any_other_application(&registry, AppId::new(1), |_| true));
        assert!(any_other_application(&registry, AppId::new(2), |_| true));

        registry.register(Arc::new(Application::new(AppId::new(2))));
        assert!(any_other_application(&registry, AppId::new(1), |_| true));
        assert!(!any_other_application(&registry, AppId::new(1), |app| {
            app.app_id() == AppId::new(1)
        }));
    }
}
