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

//! Named configuration values with a built-in default.

pub use serde;

/// Define a newtype holding a single configuration value together with its default.
///
/// The generated type implements `Default` (yielding the given default), `Deref` to the
/// wrapped type, `From` the wrapped type and transparent serde (de)serialization, so that
/// a config struct can mark every field `#[serde(default)]` and only override what is set.
///
/// ```
/// # use utils::make_config_setting;
/// make_config_setting!(MaxQueuedRequests, usize, 16);
///
/// assert_eq!(*MaxQueuedRequests::default(), 16);
/// assert_eq!(*MaxQueuedRequests::from(3), 3);
/// ```
#[macro_export]
macro_rules! make_config_setting {
    ($(#[$meta:meta])* $name:ident, $tp:ty, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name($tp);

        impl $name {
            pub fn new(value: $tp) -> Self {
                Self(value)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }

        impl From<$tp> for $name {
            fn from(value: $tp) -> Self {
                Self(value)
            }
        }

        impl std::ops::Deref for $name {
            type Target = $tp;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl $crate::config_setting::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::config_setting::serde::Serializer,
            {
                <$tp as $crate::config_setting::serde::Serialize>::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::config_setting::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::config_setting::serde::Deserializer<'de>,
            {
                <$tp as $crate::config_setting::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    make_config_setting!(TestFlag, bool, true);
    make_config_setting!(TestName, String, "default-name".to_owned());

    #[derive(serde::Deserialize, serde::Serialize, Default, Debug)]
    struct TestConfig {
        #[serde(default)]
        flag: TestFlag,
        #[serde(default)]
        name: TestName,
    }

    #[test]
    fn defaults() {
        let config = TestConfig::default();
        assert!(*config.flag);
        assert_eq!(config.name.as_str(), "default-name");
    }

    #[test]
    fn deserialize_partial() {
        let config: TestConfig = serde_json::from_str(r#"{"flag": false}"#).unwrap();
        assert!(!*config.flag);
        assert_eq!(*config.name, "default-name");

        let config: TestConfig = serde_json::from_str(r#"{"name": "other"}"#).unwrap();
        assert!(*config.flag);
        assert_eq!(*config.name, "other");
    }

    #[test]
    fn serialize_transparent() {
        let config = TestConfig {
            flag: TestFlag::new(false),
            name: TestName::from("x".to_owned()),
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({"flag": false, "name": "x"})
        );
    }
}
