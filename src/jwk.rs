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

//! JWK / JWKS documents for RS256 verification keys (RFC 7517).

use base64::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::key::RsaComponents;

/// A single RSA signing key. Fields serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    #[serde(rename = "use")]
    pub key_use: String,
    pub alg: String,
    pub kid: String,
    pub n: String,
    pub e: String,
}

impl Jwk {
    pub fn rs256(comps: &RsaComponents, kid: &str) -> Self {
        Self {
            kty: "RSA".to_owned(),
            key_use: "sig".to_owned(),
            alg: "RS256".to_owned(),
            kid: kid.to_owned(),
            n: encode_uint(&comps.n),
            e: encode_uint(&comps.e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    pub fn new(jwk: Jwk) -> Self {
        Self { keys: vec![jwk] }
    }

    /// Compact JSON, no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Unpadded base64url of a big-endian unsigned integer.
pub fn encode_uint(be_bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(be_bytes)
}
