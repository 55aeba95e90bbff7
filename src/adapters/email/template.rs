//! HTML body for the access code email.

/// Pixel size of the QR image requested from the QR service.
pub const EMAIL_QR_SIZE: u32 = 280;

/// Pixel size the QR image is displayed at inside the email.
const EMAIL_QR_DISPLAY_SIZE: u32 = 200;

/// Renders the QR email for `name`.
///
/// `qr_url` is embedded as the image source and `link_url` as the
/// plain-text fallback link below it.
pub fn render_access_code_email(name: &str, qr_url: &str, link_url: &str) -> String {
    let name = escape_html(name);
    let qr_url = escape_html(qr_url);
    let link_url = escape_html(link_url);
    let size = EMAIL_QR_DISPLAY_SIZE;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8" />
  <title>QR Code Email</title>
</head>
<body style="margin:0;padding:0;background-color:#f4f6f8;font-family:Arial, sans-serif;">
  <table width="100%" cellpadding="0" cellspacing="0">
    <tr>
      <td align="center">
        <table width="600" cellpadding="0" cellspacing="0" style="background:#ffffff;border-radius:8px;overflow:hidden;">
          <tr>
            <td style="background:#4f46e5;color:#ffffff;padding:20px;text-align:center;">
              <h1 style="margin:0;font-size:22px;">Hello {name}, Your QR Code</h1>
            </td>
          </tr>
          <tr>
            <td style="padding:30px;text-align:center;color:#333;">
              <p style="font-size:16px;">
                Please find your QR code below. You can scan it using any QR scanner.
              </p>
              <img src="{qr_url}" alt="QR Code" width="{size}" height="{size}" style="margin:20px auto;display:block;" />
              <p style="font-size:14px;color:#666;">
                Or click the link below:
              </p>
              <a href="{link_url}" style="color:#4f46e5;text-decoration:none;font-weight:bold;">{link_url}</a>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
