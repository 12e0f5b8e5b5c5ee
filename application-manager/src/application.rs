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
    any::{Any, TypeId},
    collections::BTreeMap,
    sync::Arc,
};

use common::AppId;
use parking_lot::RwLock;

/// Per-application state owned by a plugin.
///
/// An application holds at most one extension of each concrete type; extensions are
/// looked up by type rather than by a numeric plugin id.
pub trait AppExtension: Any + Send + Sync {}

pub struct Application {
    app_id: AppId,
    extensions: RwLock<BTreeMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Application {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            extensions: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    /// Attach an extension, replacing a previous one of the same type.
    pub fn add_extension<E: AppExtension>(&self, extension: Arc<E>) {
        self.extensions.write().insert(TypeId::of::<E>(), extension);
    }

    pub fn extension<E: AppExtension>(&self) -> Option<Arc<E>> {
        let extension = Arc::clone(self.extensions.read().get(&TypeId::of::<E>())?);
        extension.downcast::<E>().ok()
    }

    pub fn remove_extension<E: AppExtension>(&self) -> Option<Arc<E>> {
        let extension = self.extensions.write().remove(&TypeId::of::<E>())?;
        extension.downcast::<E>().ok()
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("app_id", &self.app_id)
            .field("extensions", &self.extensions.read().len())
            .finish()
    }
}
