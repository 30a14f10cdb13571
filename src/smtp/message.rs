//! MIME serialization of a draft.
//!
//! Produces the multipart/mixed message transmitted over SMTP: an
//! HTML-wrapped body part, plus an optional base64 attachment part.

use std::fs;

use base64::Engine;

use crate::compose::Draft;
use crate::error::MailError;
use crate::settings::SmtpSettings;

/// Serialize a validated draft into a full RFC 5322 message string.
///
/// The body is always sent as HTML, wrapped in a minimal document. The
/// attachment, when present, is read here; a missing or unreadable file
/// aborts the whole build.
pub fn build_message(draft: &Draft, settings: &SmtpSettings) -> Result<String, MailError> {
    let boundary = format!("----=_Part_{}", uuid::Uuid::new_v4().simple());

    let mut out = String::with_capacity(draft.body.len() + 1024);
    write_header(
        &mut out,
        "From",
        &format!("{} <{}>", draft.from_name, settings.user),
    );
    write_header(&mut out, "To", &draft.recipient);
    write_header(&mut out, "Subject", &draft.subject);
    write_header(&mut out, "MIME-Version", "1.0");
    write_header(
        &mut out,
        "Content-Type",
        &format!("multipart/mixed; boundary=\"{boundary}\""),
    );
    out.push_str("\r\n");

    // HTML body part
    out.push_str(&format!("--{boundary}\r\n"));
    write_header(&mut out, "Content-Type", "text/html; charset=\"utf-8\"");
    out.push_str("\r\n");
    out.push_str(&format!("<html><body>{}</body></html>\r\n", draft.body));

    if let Some(path) = &draft.attachment_path {
        let bytes = fs::read(path).map_err(|source| MailError::AttachmentRead {
            path: path.clone(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        out.push_str(&format!("--{boundary}\r\n"));
        write_header(&mut out, "Content-Type", "application/octet-stream");
        write_header(&mut out, "Content-Transfer-Encoding", "base64");
        // Single space after "filename=" is part of the produced format.
        write_header(
            &mut out,
            "Content-Disposition",
            &format!("attachment; filename= {filename}"),
        );
        out.push_str("\r\n");
        let b64 = base64::engine::general_purpose::STANDARD.encode(&bytes);
        for chunk in b64.as_bytes().chunks(76) {
            out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
            out.push_str("\r\n");
        }
    }

    out.push_str(&format!("--{boundary}--\r\n"));
    Ok(out)
}

fn write_header(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".into(),
            port: "587".into(),
            user: "a@example.com".into(),
            password: "pw".into(),
        }
    }

    fn draft() -> Draft {
        Draft::new("Alice", "bob@example.com", "Hi", "Hello there")
    }

    #[test]
    fn headers_carry_display_name_and_raw_fields() {
        let raw = build_message(&draft(), &settings()).unwrap();
        assert!(raw.contains("From: Alice <a@example.com>\r\n"));
        assert!(raw.contains("To: bob@example.com\r\n"));
        assert!(raw.contains("Subject: Hi\r\n"));
        assert!(raw.contains("MIME-Version: 1.0\r\n"));
        assert!(raw.contains("multipart/mixed"));
    }

    #[test]
    fn body_is_always_html_wrapped() {
        let raw = build_message(&draft(), &settings()).unwrap();
        assert!(raw.contains("Content-Type: text/html"));
        assert!(raw.contains("<html><body>Hello there</body></html>"));
        assert!(!raw.contains("text/plain"));
    }

    #[test]
    fn no_attachment_means_no_octet_stream_part() {
        let raw = build_message(&draft(), &settings()).unwrap();
        assert!(!raw.contains("application/octet-stream"));
        assert!(!raw.contains("Content-Disposition"));
    }

    #[test]
    fn attachment_part_uses_base64_and_filename_quirk() {
        let mut file = tempfile::Builder::new()
            .prefix("report")
            .suffix(".bin")
            .tempfile()
            .unwrap();
        file.write_all(b"attachment payload").unwrap();

        let d = draft().attachment(file.path());
        let raw = build_message(&d, &settings()).unwrap();

        let filename = file.path().file_name().unwrap().to_string_lossy();
        assert!(raw.contains("Content-Type: application/octet-stream\r\n"));
        assert!(raw.contains("Content-Transfer-Encoding: base64\r\n"));
        // One space between "filename=" and the basename.
        assert!(raw.contains(&format!(
            "Content-Disposition: attachment; filename= {filename}\r\n"
        )));

        // The encoded body must decode back to the file bytes.
        let b64 = base64::engine::general_purpose::STANDARD.encode(b"attachment payload");
        assert!(raw.contains(&b64));
    }

    #[test]
    fn long_attachment_wraps_base64_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0xABu8; 600]).unwrap();

        let d = draft().attachment(file.path());
        let raw = build_message(&d, &settings()).unwrap();

        let after_headers = raw
            .split("Content-Disposition")
            .nth(1)
            .unwrap()
            .split("\r\n\r\n")
            .nth(1)
            .unwrap();
        let first_line = after_headers.lines().next().unwrap();
        assert_eq!(first_line.len(), 76);
    }

    #[test]
    fn missing_attachment_file_is_a_read_error() {
        let d = draft().attachment("/no/such/file.bin");
        let err = build_message(&d, &settings()).unwrap_err();
        assert!(matches!(err, MailError::AttachmentRead { .. }));
    }

    #[test]
    fn message_closes_its_boundary() {
        let raw = build_message(&draft(), &settings()).unwrap();
        let boundary = raw
            .split("boundary=\"")
            .nth(1)
            .unwrap()
            .split('"')
            .next()
            .unwrap()
            .to_string();
        assert!(raw.trim_end().ends_with(&format!("--{boundary}--")));
    }
}
