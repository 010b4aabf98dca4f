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

//! Converts a PEM-encoded RSA public key into a JSON Web Key Set suitable
//! for publishing at a JWKS endpoint for RS256 verification.

use std::path::Path;

pub mod error;
pub mod jwk;
pub mod key;
pub mod logging;

pub use error::{Error, Result};
pub use jwk::{Jwk, Jwks};
pub use key::RsaComponents;

/// Reads the public key at `pem_path` and renders a single-key JWKS as
/// compact JSON (without trailing newline).
pub fn generate(pem_path: impl AsRef<Path>, kid: &str) -> Result<String> {
    let comps = RsaComponents::from_file(pem_path)?;
    Jwks::new(Jwk::rs256(&comps, kid)).to_json()
}

#[cfg(test)]
mod tests {
    use base64::prelude::*;

    use super::*;

    const SPKI_PEM: &str = include_str!("../tests/fixtures/rsa2048_spki.pem");

    #[test]
    fn generated_numbers_decode_back_to_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public.pem");
        std::fs::write(&path, SPKI_PEM).unwrap();

        let json = generate(&path, "key-1").unwrap();
        let jwks: Jwks = serde_json::from_str(&json).unwrap();
        let jwk = &jwks.keys[0];

        let comps = RsaComponents::from_pem(SPKI_PEM).unwrap();
        assert_eq!(BASE64_URL_SAFE_NO_PAD.decode(&jwk.n).unwrap(), comps.n);
        assert_eq!(BASE64_URL_SAFE_NO_PAD.decode(&jwk.e).unwrap(), vec![1, 0, 1]);
        assert_eq!(jwk.kid, "key-1");
    }

    #[test]
    fn generation_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public.pem");
        std::fs::write(&path, SPKI_PEM).unwrap();

        assert_eq!(generate(&path, "k").unwrap(), generate(&path, "k").unwrap());
    }
}
