//! QR codes for chat links.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::Result;

/// Smallest rendered edge, in pixels
const MIN_SIZE: u32 = 200;

/// Render `data` as a PNG QR code and return it as a `data:` URI.
pub fn qr_data_uri(data: &str) -> Result<String> {
    let code = QrCode::new(data.as_bytes())?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_SIZE, MIN_SIZE)
        .build();

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}
