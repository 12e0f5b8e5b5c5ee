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

pub use log;

mod log_style;
mod utils;

use std::io::Write as _;

pub use log_style::{get_log_style_from_env, LogStyle, LogStyleParseError, TextColoring};

/// Env var that selects the log output format, see [`LogStyle::parse`].
pub const LOG_STYLE_ENV_VAR: &str = "HMI_BROKER_LOG_STYLE";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Install the global logger. The filter is taken from `RUST_LOG`, the output format
/// from [`LOG_STYLE_ENV_VAR`]. Subsequent calls are no-ops.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let style = match get_log_style_from_env(LOG_STYLE_ENV_VAR) {
            Ok(style) => style.unwrap_or_default(),
            Err(err) => {
                eprintln!("Ignoring {LOG_STYLE_ENV_VAR}: {err}");
                LogStyle::default()
            }
        };

        // Somebody else (e.g. a test harness) may have installed a logger already.
        let _ = make_builder(style).try_init();
    });
}

fn make_builder(style: LogStyle) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();

    match style {
        LogStyle::Text(coloring) => {
            builder.write_style(coloring.into());
        }
        LogStyle::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "timestamp": buf.timestamp().to_string(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
    }

    builder
}
