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

use std::{fmt::Display, str::FromStr};

use thiserror::Error;
use utils::ensure;

/// Vehicle modules an application can remotely control.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleType {
    Climate,
    Radio,
    Seat,
    Audio,
    Light,
    HmiSettings,
}

impl ModuleType {
    /// Name of the `moduleData` member carrying this module's control data.
    pub fn data_key(&self) -> &'static str {
        match self {
            ModuleType::Climate => "climateControlData",
            ModuleType::Radio => "radioControlData",
            ModuleType::Seat => "seatControlData",
            ModuleType::Audio => "audioControlData",
            ModuleType::Light => "lightControlData",
            ModuleType::HmiSettings => "hmiSettingsControlData",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModuleUidParseError {
    #[error("Missing ':' separator in module uid '{0}'")]
    MissingSeparator(String),
    #[error("Unknown module type '{0}'")]
    UnknownModuleType(String),
    #[error("Empty module id in module uid '{0}'")]
    EmptyModuleId(String),
}

/// A module instance: the vehicle may have several modules of one type (e.g. one seat per row).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleUid {
    pub module_type: ModuleType,
    pub module_id: String,
}

impl ModuleUid {
    pub fn new(module_type: ModuleType, module_id: impl Into<String>) -> Self {
        Self {
            module_type,
            module_id: module_id.into(),
        }
    }
}

impl Display for ModuleUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.module_type, self.module_id)
    }
}

impl FromStr for ModuleUid {
    type Err = ModuleUidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module_type, module_id) = s
            .split_once(':')
            .ok_or_else(|| ModuleUidParseError::MissingSeparator(s.to_owned()))?;
        let module_type = ModuleType::from_str(module_type)
            .map_err(|_| ModuleUidParseError::UnknownModuleType(module_type.to_owned()))?;
        ensure!(
            !module_id.is_empty(),
            ModuleUidParseError::EmptyModuleId(s.to_owned())
        );

        Ok(Self::new(module_type, module_id))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;
    use test_utils::random::{make_seedable_rng, Seed};

    use super::*;

    #[test]
    fn module_type_names() {
        assert_eq!(ModuleType::Climate.to_string(), "CLIMATE");
        assert_eq!(ModuleType::HmiSettings.to_string(), "HMI_SETTINGS");
        assert_eq!(
            ModuleType::from_str("HMI_SETTINGS"),
            Ok(ModuleType::HmiSettings)
        );
        assert!(ModuleType::from_str("climate").is_err());
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn uid_string_form(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);

        for module_type in ModuleType::iter() {
            let module_id = test_utils::random_uuid_string(&mut rng);
            let uid = ModuleUid::new(module_type, module_id.clone());
            let text = uid.to_string();
            assert_eq!(text, format!("{module_type}:{module_id}"));
            assert_eq!(text.parse::<ModuleUid>(), Ok(uid));
        }
    }

    #[test]
    fn module_id_may_contain_separator() {
        assert_eq!(
            "SEAT:row:1".parse::<ModuleUid>(),
            Ok(ModuleUid::new(ModuleType::Seat, "row:1"))
        );
    }

    #[rstest]
    #[case("CLIMATE", ModuleUidParseError::MissingSeparator("CLIMATE".into()))]
    #[case("WIPERS:1", ModuleUidParseError::UnknownModuleType("WIPERS".into()))]
    #[case("RADIO:", ModuleUidParseError::EmptyModuleId("RADIO:".into()))]
    fn malformed_uids(#[case] text: &str, #[case] expected: ModuleUidParseError) {
        assert_eq!(text.parse::<ModuleUid>(), Err(expected));
    }
}
