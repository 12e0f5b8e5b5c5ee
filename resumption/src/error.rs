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

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResumptionError {
    #[error("Saved subscription field '{0}' is not a list")]
    NotAList(String),
    #[error("Saved subscription field '{field}' has a non-string entry: {entry}")]
    NotAString { field: String, entry: String },
    #[error("Malformed saved subscription '{entry}' in field '{field}': {reason}")]
    MalformedEntry {
        field: String,
        entry: String,
        reason: String,
    },
}
