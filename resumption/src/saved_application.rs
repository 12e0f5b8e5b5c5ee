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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ResumptionError;

/// Key of the section holding the subscription lists of every extension.
pub const APPLICATION_SUBSCRIPTIONS: &str = "applicationSubscriptions";

/// Persisted state of an application, as stored between its sessions.
///
/// Each extension owns one field of the `applicationSubscriptions` section and stores a list
/// of strings under it. Everything else in the record is kept untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedApplication {
    #[serde(rename = "applicationSubscriptions", default)]
    subscriptions: Map<String, Value>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

impl SavedApplication {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list stored under the given field.
    pub fn set_subscription_list<I>(&mut self, field: &str, entries: I)
    where
        I: IntoIterator<Item = String>,
    {
        let entries = entries.into_iter().map(Value::String).collect();
        self.subscriptions.insert(field.to_owned(), Value::Array(entries));
    }

    /// The list stored under the given field, `None` if the field is absent.
    pub fn subscription_list(&self, field: &str) -> Result<Option<Vec<String>>, ResumptionError> {
        let Some(value) = self.subscriptions.get(field) else {
            return Ok(None);
        };

        let entries =
            value.as_array().ok_or_else(|| ResumptionError::NotAList(field.to_owned()))?;

        entries
            .iter()
            .map(|entry| {
                entry.as_str().map(str::to_owned).ok_or_else(|| ResumptionError::NotAString {
                    field: field.to_owned(),
                    entry: entry.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn has_subscription_list(&self, field: &str) -> bool {
        self.subscriptions.contains_key(field)
    }

    pub fn other_field(&self, name: &str) -> Option<&Value> {
        self.other.get(name)
    }
}
