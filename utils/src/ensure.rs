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

/// Return early with the given error (or `None`) unless the condition holds.
///
/// ```
/// # use utils::ensure;
/// #[derive(PartialEq, Eq, Debug)]
/// enum FieldError {
///     NotAList,
///     TooLong,
/// }
///
/// fn check(items: &[u32], is_list: bool) -> Result<usize, FieldError> {
///     ensure!(is_list, FieldError::NotAList);
///     ensure!(items.len() <= 2, FieldError::TooLong);
///     Ok(items.len())
/// }
///
/// assert_eq!(check(&[1, 2], true), Ok(2));
/// assert_eq!(check(&[1], false), Err(FieldError::NotAList));
/// assert_eq!(check(&[1, 2, 3], true), Err(FieldError::TooLong));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then(|| ())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then(|| ()).ok_or_else(|| $err)?
    };
}
