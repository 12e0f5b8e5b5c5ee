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

use std::collections::BTreeMap;

use logging::log;
use parking_lot::Mutex;
use serde_json::Value;

use crate::ModuleUid;

/// Last known control data of every module somebody is subscribed to.
#[derive(Debug, Default)]
pub struct InteriorDataCache {
    cached: Mutex<BTreeMap<ModuleUid, Value>>,
}

impl InteriorDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the data for the module. Objects are merged into the cached object member by
    /// member, as HMI notifications may carry only the parameters that changed.
    pub fn add(&self, module: ModuleUid, data: Value) {
        log::trace!("Caching data of {module}");
        let mut cached = self.cached.lock();
        match (cached.get_mut(&module), data) {
            (Some(Value::Object(existing)), Value::Object(update)) => existing.extend(update),
            (_, data) => {
                cached.insert(module, data);
            }
        }
    }

    pub fn retrieve(&self, module: &ModuleUid) -> Option<Value> {
        self.cached.lock().get(module).cloned()
    }

    pub fn contains(&self, module: &ModuleUid) -> bool {
        self.cached.lock().contains_key(module)
    }

    pub fn remove(&self, module: &ModuleUid) -> Option<Value> {
        log::trace!("Evicting cached data of {module}");
        self.cached.lock().remove(module)
    }

    pub fn clear(&self) {
        self.cached.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.cached.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cached.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ModuleType;

    #[test]
    fn add_merges_objects() {
        let cache = InteriorDataCache::new();
        let climate = ModuleUid::new(ModuleType::Climate, "id1");

        cache.add(climate.clone(), json!({"fanSpeed": 3, "acEnable": true}));
        cache.add(climate.clone(), json!({"fanSpeed": 5}));

        assert_eq!(
            cache.retrieve(&climate),
            Some(json!({"fanSpeed": 5, "acEnable": true}))
        );
    }

    #[test]
    fn non_object_data_replaces() {
        let cache = InteriorDataCache::new();
        let radio = ModuleUid::new(ModuleType::Radio, "front");

        cache.add(radio.clone(), json!({"band": "FM"}));
        cache.add(radio.clone(), Value::Null);
        assert_eq!(cache.retrieve(&radio), Some(Value::Null));
    }

    #[test]
    fn remove_and_clear() {
        let cache = InteriorDataCache::new();
        let seat = ModuleUid::new(ModuleType::Seat, "driver");
        let light = ModuleUid::new(ModuleType::Light, "cabin");

        cache.add(seat.clone(), json!({}));
        cache.add(light.clone(), json!({}));
        assert!(cache.contains(&seat));
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.remove(&seat), Some(json!({})));
        assert!(!cache.contains(&seat));
        assert_eq!(cache.remove(&seat), None);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.retrieve(&light), None);
    }
}
