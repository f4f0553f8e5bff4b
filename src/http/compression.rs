use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::http::negotiate::Encoding;

/// Encodes `body` with the given content coding.
pub fn encode(body: &[u8], encoding: Encoding) -> std::io::Result<Vec<u8>> {
    match encoding {
        Encoding::Identity => Ok(body.to_vec()),
        Encoding::Gzip => {
            let mut e = GzEncoder::new(Vec::new(), Compression::default());
            e.write_all(body)?;
            e.finish()
        }
    }
}
