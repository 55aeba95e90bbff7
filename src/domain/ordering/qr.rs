//! QR image URLs for an access code.
//!
//! Images are rendered by a public QR service; the fallback is used when the
//! primary image fails to load.

/// Side length in pixels of the confirmation-screen QR image.
pub const DEFAULT_QR_SIZE: u32 = 280;

const PRIMARY_QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";
const FALLBACK_QR_SERVICE: &str = "https://chart.googleapis.com/chart";

/// Primary QR image URL for `data` at `size`x`size` pixels.
pub fn qr_image_url(data: &str, size: u32) -> String {
    qr_image_url_with_base(PRIMARY_QR_SERVICE, data, size)
}

/// QR image URL against a configurable qrserver-compatible endpoint.
pub fn qr_image_url_with_base(base: &str, data: &str, size: u32) -> String {
    format!(
        "{}?size={}x{}&data={}",
        base,
        size,
        size,
        urlencoding::encode(data)
    )
}

/// Fallback QR image URL for `data` at `size`x`size` pixels.
pub fn fallback_qr_image_url(data: &str, size: u32) -> String {
    format!(
        "{}?cht=qr&chl={}&chs={}x{}",
        FALLBACK_QR_SERVICE,
        urlencoding::encode(data),
        size,
        size
    )
}
