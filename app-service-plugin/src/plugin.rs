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

use crate::AppServiceAppExtension;

/// Owns the app service extensions of the registered applications.
pub struct AppServicePlugin {
    app_manager: Arc<dyn ApplicationManager>,
}

impl AppServicePlugin {
    pub fn new(app_manager: Arc<dyn ApplicationManager>) -> Self {
        Self { app_manager }
    }

    pub fn on_application_registered(&self, app: &Application) -> Arc<AppServiceAppExtension> {
        let extension = Arc::new(AppServiceAppExtension::new(app.app_id()));
        app.add_extension(Arc::clone(&extension));
        extension
    }

    pub fn on_application_unregistered(&self, app: &Application) {
        if let Some(extension) = app.remove_extension::<AppServiceAppExtension>() {
            extension.unsubscribe_from_all_app_services(self.app_manager.as_ref());
        }
    }
}
