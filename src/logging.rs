// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

const LEVEL_VAR: &str = "JWKS_GEN_LOG";
const COLOR_VAR: &str = "JWKS_GEN_LOG_COLOR";

fn with_env_as_or<T>(name: &str, default_value: T) -> Result<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    parse_or(name, std::env::var(name).ok(), default_value)
}

fn parse_or<T>(name: &str, value: Option<String>, default_value: T) -> Result<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    let Some(value) = value else {
        return Ok(default_value);
    };
    value
        .parse::<T>()
        .map_err(|e| Error::Config(format!("unable to parse value from {name:?}: {e}")))
}

/// Diagnostics go to standard error; standard output is reserved for the
/// generated document. Invalid values fall back to defaults and never stop
/// a conversion.
pub struct Config {
    color: bool,
    rejected: Vec<Error>,
}

impl Config {
    pub fn from_env() -> Self {
        let mut rejected = Vec::new();
        let color = with_env_as_or(COLOR_VAR, false).unwrap_or_else(|e| {
            rejected.push(e);
            false
        });
        Self { color, rejected }
    }

    pub fn install(self) {
        let res = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(self.color)
                    .with_writer(std::io::stderr),
            )
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .with_env_var(LEVEL_VAR)
                    .from_env_lossy(),
            )
            .try_init();
        // already installed (e.g. by a test harness)
        if let Err(e) = res {
            log::debug!("logging not installed: {e}");
        }
        for e in self.rejected {
            log::warn!("{e}, using default");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_uses_default() {
        let value: bool = with_env_as_or("JWKS_GEN_TEST_SURELY_UNSET", true).unwrap();
        assert!(value);
    }

    #[test]
    fn present_value_is_parsed() {
        let value: bool = parse_or(COLOR_VAR, Some("true".into()), false).unwrap();
        assert!(value);
    }

    #[test]
    fn invalid_value_is_a_config_error() {
        let error = parse_or::<bool>(COLOR_VAR, Some("yes".into()), false).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
        assert!(error.to_string().contains("JWKS_GEN_LOG_COLOR"));
    }
}
