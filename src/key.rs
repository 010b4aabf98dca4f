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

use std::path::Path;

use jwt_simple::prelude::RS256PublicKey;

use crate::error::{Error, Result};

/// Public numbers of an RSA key as minimal unsigned big-endian bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaComponents {
    pub n: Vec<u8>,
    pub e: Vec<u8>,
}

impl RsaComponents {
    /// Parses a SubjectPublicKeyInfo or PKCS#1 PEM document.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let public_key = RS256PublicKey::from_pem(pem.trim()).map_err(|e| {
            log::debug!("PEM rejected as RSA public key: {e}");
            Error::Parse(e.to_string())
        })?;
        let comps = public_key.to_components();

        let n = minimal_unsigned(&comps.n).ok_or_else(|| Error::Parse("modulus is zero".into()))?;
        let e = minimal_unsigned(&comps.e).ok_or_else(|| Error::Parse("exponent is zero".into()))?;

        let components = Self {
            n: n.to_vec(),
            e: e.to_vec(),
        };
        log::debug!("parsed {}-bit RSA public key", components.modulus_bits());
        Ok(components)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| {
            log::debug!("unable to read {}: {source}", path.display());
            Error::read(path.to_path_buf(), source)
        })?;
        // non-UTF-8 content (e.g. DER) is malformed key material
        let pem = String::from_utf8(bytes)
            .map_err(|e| Error::Parse(format!("not a PEM document: {e}")))?;
        Self::from_pem(&pem)
    }

    pub fn modulus_bits(&self) -> usize {
        bit_length(&self.n)
    }
}

/// Strips leading zero bytes. `None` when the value is zero.
fn minimal_unsigned(bytes: &[u8]) -> Option<&[u8]> {
    let start = bytes.iter().position(|&b| b != 0)?;
    Some(&bytes[start..])
}

fn bit_length(minimal: &[u8]) -> usize {
    match minimal.first() {
        Some(&first) => minimal.len() * 8 - first.leading_zeros() as usize,
        None => 0,
    }
}
