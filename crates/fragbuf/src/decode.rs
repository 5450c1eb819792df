use alloc::string::{String, ToString};

use bstr::ByteSlice;

use crate::{BufferError, FragmentBuffer};

impl FragmentBuffer {
    /// Materializes the buffer and decodes it as UTF-8, replacing malformed
    /// sequences with U+FFFD.
    pub fn to_string_lossy(&mut self) -> String {
        self.to_byte_array().to_str_lossy().into_owned()
    }

    /// Materializes the buffer and decodes it with the encoding named by
    /// `label`, or as UTF-8 when `label` is `None`.
    ///
    /// Labels follow the WHATWG Encoding Standard (`"utf-8"`, `"latin1"`,
    /// `"shift_jis"`, ...) and are matched case-insensitively. Malformed or
    /// unmappable input is replaced with U+FFFD rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::UnsupportedEncoding`] if `label` names no known
    /// encoding, or one that can only be decoded as a single replacement
    /// character (`iso-2022-kr`, `hz-gb-2312`, ...). Without the `encoding`
    /// feature only UTF-8 labels are known.
    pub fn decode_text(&mut self, label: Option<&str>) -> Result<String, BufferError> {
        let Some(label) = label else {
            return Ok(self.to_string_lossy());
        };
        let bytes = self.to_byte_array();
        decode_labeled(&bytes, label)
    }
}

#[cfg(feature = "encoding")]
fn decode_labeled(bytes: &[u8], label: &str) -> Result<String, BufferError> {
    let encoding = encoding_rs::Encoding::for_label_no_replacement(label.as_bytes())
        .ok_or_else(|| BufferError::UnsupportedEncoding(label.to_string()))?;
    let (text, _malformed) = encoding.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}

#[cfg(not(feature = "encoding"))]
fn decode_labeled(bytes: &[u8], label: &str) -> Result<String, BufferError> {
    let trimmed = label.trim();
    if ["utf-8", "utf8", "unicode-1-1-utf-8"]
        .iter()
        .any(|known| trimmed.eq_ignore_ascii_case(known))
    {
        Ok(bytes.to_str_lossy().into_owned())
    } else {
        Err(BufferError::UnsupportedEncoding(label.to_string()))
    }
}
