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

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Wrong command-line arguments; carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("public key file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unable to read public key file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a usable RSA public key.
    #[error("malformed RSA public key: {0}")]
    Parse(String),

    #[error("unable to serialize JWKS: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unable to write JWKS to standard output: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn read(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::Read { path, source },
        }
    }

    /// Process exit status for this error. Every failure is terminal and
    /// reported the same way.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
