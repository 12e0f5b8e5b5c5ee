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

use application_manager::{AppExtension, Application, ApplicationManager};

use crate::{ResumptionError, SavedApplication, Subscriber};

/// An application extension whose subscriptions survive a reconnection.
pub trait ResumableExtension: AppExtension {
    /// Store the current subscriptions of the application into its saved record.
    fn save_resumption_data(&self, saved: &mut SavedApplication);

    /// Restore the subscriptions stored in the saved record and request them from the HMI.
    /// Every request issued is reported to the subscriber.
    fn process_resumption(
        &self,
        app: &Application,
        saved: &SavedApplication,
        subscriber: &Subscriber,
        app_manager: &dyn ApplicationManager,
    ) -> Result<(), ResumptionError>;

    /// Undo a resumption that failed as a whole.
    fn revert_resumption(&self, saved: &SavedApplication);
}
